//! Core runtime logic for dirview.
//!
//! This module contains the non-UI pieces used by the application:
//! - [listing]: directory enumeration, search, delete and rename (see [list], [Entry], [SortKey]).
//! - [session]: the selected directory and the active sort key ([Session]).
//! - [formatter]: sorting and display formatting for entries.
//! - [error]: the [ListingError] taxonomy shared by all of the above.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.
//!
//! Most callers will import [Session], [Entry] and [ListingError] from this module.

pub mod error;
pub mod formatter;
pub mod listing;
pub mod session;
pub mod terminal;

pub use error::{ListingError, ListingResult};
pub use formatter::{format_file_time, format_listing_line, sanitize_to_exact_width, sort_entries};
pub use listing::{Entry, SortKey, delete, list, rename, search};
pub use session::Session;
