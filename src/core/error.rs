//! Error taxonomy for the dirview core.
//!
//! Every failure of a listing operation is one of the [ListingError] variants.
//! None of them are fatal: the app turns each one into a notice and waits for the next key.

use std::io;
use thiserror::Error;

/// Failures reported by [crate::core::listing] and [crate::core::Session].
///
/// The `Display` text of each variant is the message shown to the user.
/// [ListingError::FileSystem] keeps the underlying [io::Error], so its text is the platform's
/// own reason and [ListingError::kind] still exposes the structured [io::ErrorKind].
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("The selected directory is empty.")]
    EmptyDirectory,

    #[error("Please select a directory first.")]
    NoDirectorySelected,

    /// Carries the verb of the operation that needed a file ("delete", "rename", ...).
    #[error("Please select a file to {0}.")]
    NoFileSelected(&'static str),

    #[error("No matching files found.")]
    NoMatch,

    #[error("{0}")]
    FileSystem(#[from] io::Error),
}

impl ListingError {
    /// Short title used for the notice box.
    pub fn title(&self) -> &'static str {
        match self {
            ListingError::EmptyDirectory => "Empty",
            ListingError::NoDirectorySelected => "No Directory Selected",
            ListingError::NoFileSelected(_) => "No File Selected",
            ListingError::NoMatch => "No Match",
            ListingError::FileSystem(_) => "Error",
        }
    }

    /// The io error kind for [ListingError::FileSystem], `None` for the others.
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            ListingError::FileSystem(e) => Some(e.kind()),
            _ => None,
        }
    }
}

pub type ListingResult<T> = Result<T, ListingError>;
