//! Overlay module to stack notices and the key help on top of the list.
//!
//! Notices queue up in the order they were raised and are shown one at a time.
//!
//! Is used by the ui render module and in handlers.rs.

use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    Message { title: String, text: String },
    KeybindHelp,
}

impl Overlay {
    pub fn message(title: impl Into<String>, text: impl Into<String>) -> Self {
        Overlay::Message {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// First-in first-out queue of overlays. Only the front one is drawn.
#[derive(Default)]
pub struct OverlayStack {
    overlays: VecDeque<Overlay>,
}

impl OverlayStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, overlay: Overlay) {
        self.overlays.push_back(overlay);
    }

    /// Removes the overlay currently on screen.
    pub fn pop(&mut self) -> Option<Overlay> {
        self.overlays.pop_front()
    }

    /// The overlay currently on screen.
    pub fn top(&self) -> Option<&Overlay> {
        self.overlays.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Overlay) -> bool,
    {
        self.overlays.retain(f);
    }
}
