//! Application state, key mapping and action handling for dirview.
//!
//! [AppState] is what the terminal loop drives and what the ui draws.

pub mod actions;
pub mod keymap;
pub mod state;

mod handlers;

pub use actions::{ActionContext, ActionMode, InputMode};
pub use keymap::{Action, Keymap};
pub use state::{AppState, KeypressResult, Row, View};
