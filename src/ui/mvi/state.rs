//! Base trait for UI state in MVI architecture.

/// Marker trait for view state objects.
///
/// A state is a plain value: cloned to produce the next state,
/// comparable so no-op transitions are detectable, and self-contained
/// so the view can render from it alone.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
