use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTION_BUSY, ACTION_READY, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER_TEXT,
};

const INPUT_PLACEHOLDER: &str = "Enter text to paraphrase...";
const OUTPUT_PLACEHOLDER: &str = "Paraphrased text will appear here...";

pub fn draw(frame: &mut Frame<'_>, app: &App, base_url: &str) {
    let (header, input, action, output, footer) = layout_regions(frame.area());
    let state = app.paraphrase();

    frame.render_widget(Header::new().widget(base_url), header);

    frame.render_widget(
        pane(&state.input, INPUT_PLACEHOLDER, "Input"),
        input,
    );

    // Trigger row: label mirrors the request phase, dim when a submit
    // would be rejected.
    let (label, style) = if state.is_pending() {
        ("Processing...", Style::default().fg(ACTION_BUSY))
    } else if state.can_submit() {
        (
            "[ Paraphrase ]",
            Style::default().fg(ACTION_READY).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "[ Paraphrase ]",
            Style::default().fg(PLACEHOLDER_TEXT).add_modifier(Modifier::DIM),
        )
    };
    frame.render_widget(
        Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        action,
    );

    frame.render_widget(
        pane(&state.output, OUTPUT_PLACEHOLDER, "Output"),
        output,
    );

    frame.render_widget(Footer::new().widget(footer.width), footer);
}

fn pane<'a>(text: &'a str, placeholder: &'a str, title: &'a str) -> Paragraph<'a> {
    let (content, style) = if text.is_empty() {
        (placeholder, Style::default().fg(PLACEHOLDER_TEXT))
    } else {
        (text, Style::default().fg(HEADER_TEXT))
    };

    Paragraph::new(content)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(ratatui::text::Span::styled(
                    title,
                    Style::default().fg(ACCENT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
