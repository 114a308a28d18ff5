//! Input action handler methods for dirview.
//!
//! This module implements [AppState] methods that process prompts, navigation
//! and file actions (browse, open, search, rename, delete).

use crate::app::actions::InputMode;
use crate::app::keymap::{FileAction, NavAction, SystemAction};
use crate::app::state::{AppState, KeypressResult, View};
use crate::core::ListingError;
use crate::utils::resolve_input_path;

use crossterm::event::{KeyCode::*, KeyEvent};
use std::path::{Path, PathBuf};
use tracing::info;

/// AppState input and action handlers
impl<'a> AppState<'a> {
    // Prompt handling

    /// Handles key events while a prompt is open.
    ///
    /// The delete confirmation accepts only `y`/`Y`; every other key cancels it.
    pub(super) fn handle_input_mode(&mut self, key: KeyEvent) -> KeypressResult {
        let Some(mode) = self.actions.input_mode() else {
            return KeypressResult::Continue;
        };

        if mode == InputMode::ConfirmDelete {
            let (_, target) = self.actions.take_input();
            if matches!(key.code, Char('y') | Char('Y')) {
                self.delete_entry(target);
            }
            return KeypressResult::Consumed;
        }

        match key.code {
            Enter => {
                let (input, target) = self.actions.take_input();
                match mode {
                    InputMode::Browse => self.browse_to(&input),
                    InputMode::Search => self.apply_search(input),
                    InputMode::Rename => self.rename_entry(target, &input),
                    InputMode::ConfirmDelete => {}
                }
            }
            Esc => self.actions.exit_mode(),
            Left => self.actions.action_move_cursor_left(),
            Right => self.actions.action_move_cursor_right(),
            Home => self.actions.action_cursor_home(),
            End => self.actions.action_cursor_end(),
            Backspace => self.actions.action_backspace_at_cursor(),
            Delete => self.actions.action_delete_at_cursor(),
            Char(c) => self.actions.action_insert_at_cursor(c),
            _ => return KeypressResult::Continue,
        }
        KeypressResult::Consumed
    }

    // Keymap actions

    pub(super) fn handle_sys_action(&mut self, action: SystemAction) -> KeypressResult {
        match action {
            SystemAction::Quit => KeypressResult::Quit,
            SystemAction::KeyBindHelp => {
                self.show_keybind_help();
                KeypressResult::Consumed
            }
        }
    }

    pub(super) fn handle_nav_action(&mut self, action: NavAction) -> KeypressResult {
        match action {
            NavAction::GoUp => self.selected = self.selected.saturating_sub(1),
            NavAction::GoDown => {
                if self.selected + 1 < self.rows.len() {
                    self.selected += 1;
                }
            }
            NavAction::GoToTop => self.selected = 0,
            NavAction::GoToBottom => self.selected = self.rows.len().saturating_sub(1),
            NavAction::GoParent => self.go_parent(),
        }
        KeypressResult::Consumed
    }

    pub(super) fn handle_file_action(&mut self, action: FileAction) -> KeypressResult {
        match action {
            FileAction::Browse => self.prompt_browse(),
            FileAction::Open => self.open_selected(),
            FileAction::Search => {
                self.actions
                    .enter_mode(InputMode::Search, "Search for:".into(), String::new());
            }
            FileAction::ClearSearch => {
                if !matches!(self.view, View::Search { .. }) {
                    return KeypressResult::Continue;
                }
                self.reload();
            }
            FileAction::Delete => self.prompt_delete(),
            FileAction::Rename => self.prompt_rename(),
            FileAction::Refresh => self.reload(),
        }
        KeypressResult::Consumed
    }

    // Navigation

    fn go_parent(&mut self) {
        match self.session.directory().and_then(Path::parent) {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.select_directory(parent);
            }
            None if self.session.directory().is_none() => {
                self.notify_error(&ListingError::NoDirectorySelected);
            }
            None => {}
        }
    }

    fn prompt_browse(&mut self) {
        let initial = self
            .session
            .directory()
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.actions
            .enter_mode(InputMode::Browse, "Directory:".into(), initial);
    }

    /// Selects the typed directory. Relative input is taken from the working directory.
    fn browse_to(&mut self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.select_directory(resolve_input_path(input, &base));
    }

    fn open_selected(&mut self) {
        let Some(name) = self.selected_name().map(ToOwned::to_owned) else {
            return self.notify_error(&ListingError::NoFileSelected("open"));
        };
        match self.session.entry_path(&name) {
            Ok(path) if path.is_dir() => self.select_directory(path),
            Ok(path) => {
                self.push_notice("Selected file", format!("You selected: {}", path.display()))
            }
            Err(e) => self.notify_error(&e),
        }
    }

    // Search

    fn apply_search(&mut self, query: String) {
        match self.session.search(&query) {
            Ok(names) => self.show_search(query, names),
            Err(e) => self.notify_failure(&e, "Could not search directory"),
        }
    }

    // Delete

    fn prompt_delete(&mut self) {
        let Some(name) = self.selected_name().map(ToOwned::to_owned) else {
            return self.notify_error(&ListingError::NoFileSelected("delete"));
        };
        let prompt = format!(
            "Are you sure you want to delete {}? (y/N)",
            name.to_string_lossy()
        );
        self.actions
            .enter_mode_for(InputMode::ConfirmDelete, prompt, String::new(), name);
    }

    fn delete_entry(&mut self, target: Option<std::ffi::OsString>) {
        let shown = target
            .as_deref()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self.session.delete(target.as_deref()) {
            Ok(()) => {
                info!(name = %shown, "deleted entry");
                self.push_notice("Deleted", format!("{shown} has been deleted."));
                self.reload();
            }
            Err(e) => self.notify_failure(&e, "Could not delete file"),
        }
    }

    // Rename

    fn prompt_rename(&mut self) {
        let Some(name) = self.selected_name().map(ToOwned::to_owned) else {
            return self.notify_error(&ListingError::NoFileSelected("rename"));
        };
        let initial = match self.session.entry_path(&name) {
            Ok(path) => path.display().to_string(),
            Err(e) => return self.notify_error(&e),
        };
        let prompt = format!("Rename {} to:", name.to_string_lossy());
        self.actions
            .enter_mode_for(InputMode::Rename, prompt, initial, name);
    }

    /// Renames the pending entry. Relative input is taken from the selected directory.
    fn rename_entry(&mut self, target: Option<std::ffi::OsString>, input: &str) {
        if input.trim().is_empty() {
            return;
        }
        let Some(directory) = self.session.directory() else {
            return self.notify_error(&ListingError::NoDirectorySelected);
        };
        let new_path = resolve_input_path(input, directory);
        let shown = target
            .as_deref()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self.session.rename(target.as_deref(), &new_path) {
            Ok(()) => {
                let basename = new_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| new_path.display().to_string());
                info!(from = %shown, to = %new_path.display(), "renamed entry");
                self.push_notice("Renamed", format!("{shown} has been renamed to {basename}."));
                self.reload();
            }
            Err(e) => self.notify_failure(&e, "Could not rename file"),
        }
    }
}
