//! Terminal UI for dirview: layout, list pane, dialogs and notices.
//!
//! [render] draws one frame from an [AppState](crate::app::AppState).

pub mod overlays;
pub mod render;
pub mod widgets;

pub use render::render;
