//! Application state and main controller module for dirview.
//!
//! This module defines the [AppState] struct, which holds everything the UI draws:
//! - Configuration and the keymap built from it
//! - The [Session] (selected directory and sort key)
//! - The rows currently shown, either a listing or search results
//! - The prompt state in [ActionContext]
//! - Notices and the key help in the [OverlayStack]
//!
//! Key handling starts here in [AppState::handle_keypress] and continues in handlers.rs.

use crate::app::actions::ActionContext;
use crate::app::keymap::{Action, Keymap};
use crate::config::Config;
use crate::core::{Entry, ListingError, ListingResult, Session, format_listing_line};
use crate::ui::overlays::{Overlay, OverlayStack};

use crossterm::event::KeyEvent;

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

/// Result of handling one key press.
#[derive(Debug, PartialEq)]
pub enum KeypressResult {
    Continue,
    Consumed,
    Quit,
}

/// What the list pane currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Listing,
    Search { query: String },
}

/// One line of the list pane and the entry name it stands for.
#[derive(Debug, Clone)]
pub struct Row {
    name: OsString,
    text: String,
}

impl Row {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name().to_os_string(),
            text: format_listing_line(entry),
        }
    }

    fn from_name(name: OsString) -> Self {
        let text = name.to_string_lossy().into_owned();
        Self { name, text }
    }

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Main struct which holds the application state of dirview.
pub struct AppState<'a> {
    pub(super) config: &'a Config,
    pub(super) keymap: Keymap,

    pub(super) session: Session,
    pub(super) rows: Vec<Row>,
    pub(super) view: View,
    pub(super) selected: usize,

    pub(super) actions: ActionContext,

    pub(super) notification_time: Option<Instant>,
    pub(super) overlays: OverlayStack,
}

impl<'a> AppState<'a> {
    /// Starts with no directory selected, or in the working directory when
    /// `start_in_cwd` is set.
    pub fn new(config: &'a Config) -> std::io::Result<Self> {
        let mut app = Self::empty(config);
        if config.general().start_in_cwd() {
            app.select_directory(std::env::current_dir()?);
        }
        Ok(app)
    }

    /// Starts with `initial_path` selected.
    pub fn from_dir(config: &'a Config, initial_path: impl Into<PathBuf>) -> Self {
        let mut app = Self::empty(config);
        app.select_directory(initial_path.into());
        app
    }

    fn empty(config: &'a Config) -> Self {
        Self {
            config,
            keymap: Keymap::from_config(config),
            session: Session::new(),
            rows: Vec::new(),
            view: View::Listing,
            selected: 0,
            actions: ActionContext::default(),
            notification_time: None,
            overlays: OverlayStack::new(),
        }
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn view(&self) -> &View {
        &self.view
    }

    #[inline]
    pub fn actions(&self) -> &ActionContext {
        &self.actions
    }

    #[inline]
    pub fn overlays(&self) -> &OverlayStack {
        &self.overlays
    }

    #[inline]
    pub fn notification_time(&self) -> Option<Instant> {
        self.notification_time
    }

    /// Index of the selected row, if there are rows.
    pub fn visible_selected(&self) -> Option<usize> {
        if self.rows.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn selected_name(&self) -> Option<&OsStr> {
        self.rows.get(self.selected).map(Row::name)
    }

    /// Expires the notice on screen once its timeout passed.
    ///
    /// Returns true when something changed and the screen needs a redraw.
    pub fn tick(&mut self) -> bool {
        if let Some(expiry) = self.notification_time
            && Instant::now() >= expiry
        {
            self.overlays.pop();
            self.arm_notice_timer();
            return true;
        }
        false
    }

    /// Central key handler
    ///
    /// An open overlay takes the key first, then an open prompt, then the keymap.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        if !self.overlays.is_empty() {
            self.overlays.pop();
            self.arm_notice_timer();
            return KeypressResult::Consumed;
        }

        if self.actions.is_input_mode() {
            return self.handle_input_mode(key);
        }

        if let Some(action) = self.keymap.lookup(key) {
            debug!(?action, "key action");
            return match action {
                Action::System(sys_act) => self.handle_sys_action(sys_act),
                Action::Nav(nav_act) => self.handle_nav_action(nav_act),
                Action::File(file_act) => self.handle_file_action(file_act),
                Action::Sort(sort) => {
                    let result = self.session.set_sort_key(sort);
                    self.show_listing(result);
                    KeypressResult::Consumed
                }
            };
        }

        KeypressResult::Continue
    }

    // Row and notice updates

    /// Makes `path` the selected directory and shows its listing.
    pub(super) fn select_directory(&mut self, path: PathBuf) {
        if path.is_dir() {
            self.selected = 0;
        }
        let result = self.session.select_directory(path);
        self.show_listing(result);
    }

    /// Lists the selected directory again with the current sort key.
    pub(super) fn reload(&mut self) {
        let result = self.session.refresh();
        self.show_listing(result);
    }

    /// Replaces the rows with a listing result, or raises a notice for its error.
    pub(super) fn show_listing(&mut self, result: ListingResult<Vec<Entry>>) {
        match result {
            Ok(entries) => {
                self.rows = entries.iter().map(Row::from_entry).collect();
                self.view = View::Listing;
                self.clamp_selection();
            }
            Err(ListingError::NoDirectorySelected) => {
                self.notify_error(&ListingError::NoDirectorySelected);
            }
            Err(e) => {
                self.rows.clear();
                self.view = View::Listing;
                self.selected = 0;
                self.notify_failure(&e, "Could not list directory");
            }
        }
    }

    /// Replaces the rows with search result names.
    pub(super) fn show_search(&mut self, query: String, names: Vec<OsString>) {
        self.rows = names.into_iter().map(Row::from_name).collect();
        self.view = View::Search { query };
        self.selected = 0;
    }

    pub(super) fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
    }

    /// Queues a notice. It shows once the ones before it are gone.
    pub(crate) fn push_notice(&mut self, title: impl Into<String>, text: impl Into<String>) {
        self.overlays.push(Overlay::message(title, text));
        if self.overlays.len() == 1 {
            self.arm_notice_timer();
        }
    }

    /// Notice for an error, titled by its kind.
    pub(super) fn notify_error(&mut self, err: &ListingError) {
        self.push_notice(err.title(), err.to_string());
    }

    /// Like [AppState::notify_error], prefixing filesystem failures with `context`.
    pub(super) fn notify_failure(&mut self, err: &ListingError, context: &str) {
        match err {
            ListingError::FileSystem(e) => self.push_notice("Error", format!("{context}: {e}")),
            other => self.notify_error(other),
        }
    }

    pub(super) fn show_keybind_help(&mut self) {
        self.overlays.push(Overlay::KeybindHelp);
        if self.overlays.len() == 1 {
            self.arm_notice_timer();
        }
    }

    /// Starts the timeout for the notice now on screen. The key help has none.
    fn arm_notice_timer(&mut self) {
        self.notification_time = match self.overlays.top() {
            Some(Overlay::Message { .. }) => {
                Some(Instant::now() + self.config.general().notice_timeout())
            }
            _ => None,
        };
    }
}
