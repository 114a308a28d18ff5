//! Session state for dirview.
//!
//! A [Session] remembers the directory the user picked last and the sort key they chose last.
//! It passes both explicitly into the [listing](crate::core::listing) functions, so the
//! listing code itself holds no state.

use crate::core::error::{ListingError, ListingResult};
use crate::core::listing::{self, Entry, SortKey, child_path};

use std::ffi::{OsStr, OsString};
use std::path::{self, Component, Path, PathBuf};

use tracing::debug;

/// The selected directory and the active sort key.
///
/// The sort key outlives directory changes: picking another directory lists it with
/// whatever key was chosen last.
#[derive(Debug, Default)]
pub struct Session {
    directory: Option<PathBuf>,
    sort: SortKey,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // Accessors

    #[inline]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    #[inline]
    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    /// The selected directory, if it still is a directory.
    fn current_dir(&self) -> ListingResult<&Path> {
        match self.directory.as_deref() {
            Some(dir) if dir.is_dir() => Ok(dir),
            _ => Err(ListingError::NoDirectorySelected),
        }
    }

    /// Makes `path` the selected directory and lists it.
    ///
    /// A path that is not a directory is refused and leaves the session as it was.
    /// The stored path is absolute with `.` and `..` folded away.
    /// The directory stays selected even if listing it fails.
    pub fn select_directory(&mut self, path: impl Into<PathBuf>) -> ListingResult<Vec<Entry>> {
        let path = path.into();
        if !path.is_dir() {
            return Err(ListingError::NoDirectorySelected);
        }
        let path = normalize_dir(&path)?;
        debug!(directory = %path.display(), "selected directory");
        self.directory = Some(path);
        self.refresh()
    }

    /// Changes the sort key and re-lists the selected directory with it.
    ///
    /// The new key is kept even when no directory is selected yet.
    pub fn set_sort_key(&mut self, key: SortKey) -> ListingResult<Vec<Entry>> {
        self.sort = key;
        self.refresh()
    }

    /// Lists the selected directory with the current sort key.
    pub fn refresh(&self) -> ListingResult<Vec<Entry>> {
        listing::list(self.current_dir()?, self.sort)
    }

    /// Searches the selected directory. See [listing::search].
    pub fn search(&self, query: &str) -> ListingResult<Vec<OsString>> {
        listing::search(self.current_dir()?, query)
    }

    /// Deletes the named entry of the selected directory.
    pub fn delete(&self, name: Option<&OsStr>) -> ListingResult<()> {
        let name = name.ok_or(ListingError::NoFileSelected("delete"))?;
        listing::delete(self.current_dir()?, name)
    }

    /// Renames the named entry of the selected directory to `new_path`.
    pub fn rename(&self, name: Option<&OsStr>, new_path: &Path) -> ListingResult<()> {
        let name = name.ok_or(ListingError::NoFileSelected("rename"))?;
        listing::rename(self.current_dir()?, name, new_path)
    }

    /// Full path of the named entry of the selected directory.
    pub fn entry_path(&self, name: &OsStr) -> ListingResult<PathBuf> {
        child_path(self.current_dir()?, name)
    }
}

/// Absolute form of `path` with `.` and `..` resolved lexically, the way a shell `cd` does.
/// Only called on paths already known to be directories.
fn normalize_dir(path: &Path) -> ListingResult<PathBuf> {
    let absolute = path::absolute(path)?;
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn fresh_session_has_nothing_selected() {
        let session = Session::new();
        assert!(session.directory().is_none());
        assert_eq!(session.sort_key(), SortKey::None);
        assert!(matches!(
            session.refresh(),
            Err(ListingError::NoDirectorySelected)
        ));
        assert!(matches!(
            session.search(""),
            Err(ListingError::NoDirectorySelected)
        ));
    }

    #[test]
    fn sort_key_is_kept_without_directory() {
        let mut session = Session::new();
        let result = session.set_sort_key(SortKey::BySize);
        assert!(matches!(result, Err(ListingError::NoDirectorySelected)));
        assert_eq!(session.sort_key(), SortKey::BySize);
    }

    #[test]
    fn selecting_a_file_is_refused() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let file = dir.path().join("plain.txt");
        File::create(&file)?;

        let mut session = Session::new();
        session.select_directory(dir.path())?;
        assert!(matches!(
            session.select_directory(&file),
            Err(ListingError::NoDirectorySelected)
        ));
        assert_eq!(session.directory(), Some(dir.path()));
        Ok(())
    }

    #[test]
    fn empty_directory_stays_selected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let mut session = Session::new();

        let result = session.select_directory(dir.path());
        assert!(matches!(result, Err(ListingError::EmptyDirectory)));
        assert_eq!(session.directory(), Some(dir.path()));
        Ok(())
    }

    #[test]
    fn missing_selection_is_reported_before_filesystem() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("x"))?;
        let mut session = Session::new();
        session.select_directory(dir.path())?;

        assert!(matches!(
            session.delete(None),
            Err(ListingError::NoFileSelected(_))
        ));
        assert!(matches!(
            session.rename(None, &dir.path().join("y")),
            Err(ListingError::NoFileSelected(_))
        ));
        assert!(dir.path().join("x").exists());
        Ok(())
    }

    #[test]
    fn removed_directory_counts_as_unselected() -> Result<(), Box<dyn std::error::Error>> {
        let root = tempdir()?;
        let dir = root.path().join("short_lived");
        fs::create_dir(&dir)?;
        File::create(dir.join("f"))?;

        let mut session = Session::new();
        session.select_directory(&dir)?;
        fs::remove_dir_all(&dir)?;

        assert!(matches!(
            session.delete(Some(OsStr::new("f"))),
            Err(ListingError::NoDirectorySelected)
        ));
        Ok(())
    }

    #[test]
    fn dot_dot_is_folded_into_the_parent() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let sub = dir.path().join("sub");
        fs::create_dir(&sub)?;
        File::create(sub.join("f"))?;

        let mut session = Session::new();
        session.select_directory(sub.join("..").join(".").join("sub").join(".."))?;
        assert_eq!(session.directory(), Some(dir.path()));
        assert_eq!(
            session.directory().and_then(Path::parent),
            dir.path().parent()
        );
        Ok(())
    }

    #[test]
    fn entry_path_joins_selected_directory() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("doc.txt"))?;
        let mut session = Session::new();
        session.select_directory(dir.path())?;

        assert_eq!(
            session.entry_path(OsStr::new("doc.txt"))?,
            dir.path().join("doc.txt")
        );
        Ok(())
    }
}
