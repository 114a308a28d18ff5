//! Action context and input mode logic for dirview.
//!
//! Contains the [ActionContext] struct, which tracks the prompt the user is typing into
//! and the entry a pending rename or delete applies to.

use std::ffi::{OsStr, OsString};

/// Describes the current mode for action handling/input.
///
/// * `Normal` - Browsing the list.
/// * `Input` - A prompt is open, with its [InputMode] and prompt text.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ActionMode {
    #[default]
    Normal,
    Input { mode: InputMode, prompt: String },
}

/// The prompts dirview can open.
///
/// Used to pick what Enter does and how the dialog is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputMode {
    Browse,
    Search,
    Rename,
    ConfirmDelete,
}

impl InputMode {
    /// Title of the input dialog
    pub fn title(&self) -> &'static str {
        match self {
            InputMode::Browse => " Select Directory ",
            InputMode::Search => " Search ",
            InputMode::Rename => " Rename ",
            InputMode::ConfirmDelete => " Confirm Delete ",
        }
    }
}

/// Tracks the open prompt, its input buffer and cursor, and the entry the prompt acts on.
///
/// The cursor is a byte offset into the buffer and always sits on a char boundary.
#[derive(Default)]
pub struct ActionContext {
    mode: ActionMode,
    input_buffer: String,
    input_cursor_pos: usize,
    pending: Option<OsString>,
}

impl ActionContext {
    // Getters / accessors

    pub fn mode(&self) -> &ActionMode {
        &self.mode
    }

    pub fn input_mode(&self) -> Option<InputMode> {
        match self.mode {
            ActionMode::Input { mode, .. } => Some(mode),
            ActionMode::Normal => None,
        }
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn input_cursor_pos(&self) -> usize {
        self.input_cursor_pos
    }

    /// Entry name a rename or delete prompt was opened for.
    pub fn pending(&self) -> Option<&OsStr> {
        self.pending.as_deref()
    }

    // Mode functions

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, ActionMode::Input { .. })
    }

    /// Opens a prompt with `initial_value` in the buffer and the cursor at its end.
    pub fn enter_mode(&mut self, mode: InputMode, prompt: String, initial_value: String) {
        self.mode = ActionMode::Input { mode, prompt };
        self.input_buffer = initial_value;
        self.input_cursor_pos = self.input_buffer.len();
    }

    /// Like [ActionContext::enter_mode], remembering the entry the prompt acts on.
    pub fn enter_mode_for(
        &mut self,
        mode: InputMode,
        prompt: String,
        initial_value: String,
        target: OsString,
    ) {
        self.enter_mode(mode, prompt, initial_value);
        self.pending = Some(target);
    }

    /// Closes the prompt and hands back what was typed and the pending entry.
    pub fn take_input(&mut self) -> (String, Option<OsString>) {
        let input = std::mem::take(&mut self.input_buffer);
        let pending = self.pending.take();
        self.exit_mode();
        (input, pending)
    }

    pub fn exit_mode(&mut self) {
        self.mode = ActionMode::Normal;
        self.input_buffer.clear();
        self.input_cursor_pos = 0;
        self.pending = None;
    }

    // Cursor functions

    /// Moves the input cursor one character to the left, if possible.
    pub fn action_move_cursor_left(&mut self) {
        if let Some((previous, _)) = self.input_buffer[..self.input_cursor_pos]
            .char_indices()
            .next_back()
        {
            self.input_cursor_pos = previous;
        }
    }

    /// Moves the input cursor one character to the right, if possible.
    pub fn action_move_cursor_right(&mut self) {
        if let Some(ch) = self.input_buffer[self.input_cursor_pos..].chars().next() {
            self.input_cursor_pos += ch.len_utf8();
        }
    }

    /// Inserts a character at the current cursor position in the input buffer.
    pub fn action_insert_at_cursor(&mut self, ch: char) {
        self.input_buffer.insert(self.input_cursor_pos, ch);
        self.input_cursor_pos += ch.len_utf8();
    }

    /// Deletes the character before the cursor and moves the cursor back.
    pub fn action_backspace_at_cursor(&mut self) {
        if let Some((previous, _)) = self.input_buffer[..self.input_cursor_pos]
            .char_indices()
            .next_back()
        {
            self.input_buffer.remove(previous);
            self.input_cursor_pos = previous;
        }
    }

    /// Deletes the character at the cursor.
    pub fn action_delete_at_cursor(&mut self) {
        if self.input_cursor_pos < self.input_buffer.len() {
            self.input_buffer.remove(self.input_cursor_pos);
        }
    }

    pub fn action_cursor_home(&mut self) {
        self.input_cursor_pos = 0;
    }

    pub fn action_cursor_end(&mut self) {
        self.input_cursor_pos = self.input_buffer.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_edits_respect_char_boundaries() {
        let mut ctx = ActionContext::default();
        ctx.enter_mode(InputMode::Search, "Search:".into(), "né".into());
        assert_eq!(ctx.input_cursor_pos(), 3);

        ctx.action_move_cursor_left();
        assert_eq!(ctx.input_cursor_pos(), 1);
        ctx.action_insert_at_cursor('x');
        assert_eq!(ctx.input_buffer(), "nxé");

        ctx.action_cursor_end();
        ctx.action_backspace_at_cursor();
        assert_eq!(ctx.input_buffer(), "nx");

        ctx.action_cursor_home();
        ctx.action_delete_at_cursor();
        assert_eq!(ctx.input_buffer(), "x");
        ctx.action_move_cursor_right();
        ctx.action_move_cursor_right();
        assert_eq!(ctx.input_cursor_pos(), 1);
    }

    #[test]
    fn take_input_resets_mode_and_returns_target() {
        let mut ctx = ActionContext::default();
        ctx.enter_mode_for(
            InputMode::Rename,
            "Rename to:".into(),
            "/tmp/a.txt".into(),
            OsString::from("a.txt"),
        );
        assert_eq!(ctx.input_mode(), Some(InputMode::Rename));
        assert_eq!(ctx.pending(), Some(OsStr::new("a.txt")));

        let (input, target) = ctx.take_input();
        assert_eq!(input, "/tmp/a.txt");
        assert_eq!(target, Some(OsString::from("a.txt")));
        assert!(!ctx.is_input_mode());
        assert!(ctx.pending().is_none());
    }
}
