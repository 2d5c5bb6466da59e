use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use crate::client::ParaphraseClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::paraphrase::ParaphraseIntent;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let runtime = tokio::runtime::Runtime::new()?;
    let client = Arc::new(ParaphraseClient::new(config.server.base_url));
    let mut app = App::new();

    loop {
        terminal.draw(|frame| draw(frame, &app, client.base_url()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                // An accepted submit flips the phase to Pending before
                // the call is spawned; the settle comes back through
                // the same event channel.
                if let Some(text) = handle_key(&mut app, key) {
                    spawn_request(&runtime, Arc::clone(&client), text, events.sender());
                }
            }
            Ok(AppEvent::Paste(text)) => app.dispatch(ParaphraseIntent::Paste(text)),
            Ok(AppEvent::Settled(result)) => app.on_settled(result),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn spawn_request(
    runtime: &tokio::runtime::Runtime,
    client: Arc<ParaphraseClient>,
    text: String,
    tx: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        let result = client.paraphrase(&text).await;
        // A closed channel means the UI loop is gone; drop the result.
        let _ = tx.send(AppEvent::Settled(result));
    });
}
