//! Directory listing logic for dirview.
//!
//! Holds the [Entry] snapshot type, the [SortKey] enum and the four filesystem operations
//! the rest of dirview is built on: [list], [search], [delete] and [rename].
//!
//! Every call reads the filesystem afresh. Nothing is cached between calls.

use crate::core::error::{ListingError, ListingResult};
use crate::core::formatter::sort_entries;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, info};

/// One immediate child of a listed directory.
/// Size and modification time are captured once, when the listing is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: OsString,
    size_bytes: u64,
    modified_at: SystemTime,
}

impl Entry {
    pub fn new(name: OsString, size_bytes: u64, modified_at: SystemTime) -> Self {
        Entry {
            name,
            size_bytes,
            modified_at,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn lowercase_name(&self) -> String {
        self.name.to_string_lossy().to_lowercase()
    }

    #[inline]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[inline]
    pub fn modified_at(&self) -> SystemTime {
        self.modified_at
    }
}

/// Ordering applied to a listing.
///
/// `ByDate` is the only descending order: most recently modified first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    ByName,
    BySize,
    ByDate,
}

impl SortKey {
    /// Short label shown in the status line.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::ByName => "name",
            SortKey::BySize => "size",
            SortKey::ByDate => "date",
        }
    }
}

/// Lists the immediate children of `directory`, ordered by `sort`.
///
/// Files and subdirectories are treated alike. Metadata is read through symlinks, and a
/// failed lookup for any single child fails the whole call.
///
/// # Returns
/// The entries, or [ListingError::EmptyDirectory] if there are none.
pub fn list(directory: &Path, sort: SortKey) -> ListingResult<Vec<Entry>> {
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(directory)? {
        let dir_entry = dir_entry?;
        let metadata = fs::metadata(dir_entry.path())?;
        entries.push(Entry::new(
            dir_entry.file_name(),
            metadata.len(),
            metadata.modified()?,
        ));
    }

    if entries.is_empty() {
        return Err(ListingError::EmptyDirectory);
    }

    sort_entries(&mut entries, sort);
    debug!(
        directory = %directory.display(),
        count = entries.len(),
        sort = sort.label(),
        "listed directory"
    );
    Ok(entries)
}

/// Case-insensitive substring search over the names of the immediate children of `directory`.
///
/// Matches come back in enumeration order; no [SortKey] is applied.
/// An empty query matches every entry.
pub fn search(directory: &Path, query: &str) -> ListingResult<Vec<OsString>> {
    if !directory.is_dir() {
        return Err(ListingError::NoDirectorySelected);
    }

    let needle = query.to_lowercase();
    let mut matches = Vec::new();
    for dir_entry in fs::read_dir(directory)? {
        let name = dir_entry?.file_name();
        if name.to_string_lossy().to_lowercase().contains(&needle) {
            matches.push(name);
        }
    }

    debug!(
        directory = %directory.display(),
        query,
        count = matches.len(),
        "searched directory"
    );

    if matches.is_empty() {
        Err(ListingError::NoMatch)
    } else {
        Ok(matches)
    }
}

/// Removes the entry `name` from `directory`.
///
/// Files and symlinks are unlinked. Directories are only removed when empty.
pub fn delete(directory: &Path, name: impl AsRef<OsStr>) -> ListingResult<()> {
    let path = child_path(directory, name.as_ref())?;
    let file_type = fs::symlink_metadata(&path)?.file_type();

    if file_type.is_dir() {
        fs::remove_dir(&path)?;
    } else {
        fs::remove_file(&path)?;
    }

    info!(path = %path.display(), "deleted entry");
    Ok(())
}

/// Renames the entry `old_name` of `directory` to `new_path`.
///
/// `new_path` is not restricted to `directory`, so this also moves entries elsewhere.
/// A relative `new_path` is taken relative to the process working directory.
pub fn rename(directory: &Path, old_name: impl AsRef<OsStr>, new_path: &Path) -> ListingResult<()> {
    let old_path = child_path(directory, old_name.as_ref())?;
    fs::rename(&old_path, new_path)?;

    info!(
        from = %old_path.display(),
        to = %new_path.display(),
        "renamed entry"
    );
    Ok(())
}

/// Joins `name` onto `directory`, refusing anything that is not a single plain file name.
pub(crate) fn child_path(directory: &Path, name: &OsStr) -> ListingResult<PathBuf> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(directory.join(name)),
        _ => Err(ListingError::FileSystem(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a file name", name.to_string_lossy()),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, len: usize) -> io::Result<PathBuf> {
        let path = dir.join(name);
        let mut file = File::create(&path)?;
        file.write_all(&vec![b'x'; len])?;
        Ok(path)
    }

    fn names(entries: &[Entry]) -> Vec<String> {
        entries.iter().map(|e| e.name_str().into_owned()).collect()
    }

    #[test]
    fn list_reports_size_and_mtime() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = write_file(dir.path(), "data.bin", 42)?;
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        File::options().write(true).open(&path)?.set_modified(stamp)?;

        let entries = list(dir.path(), SortKey::None)?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), OsStr::new("data.bin"));
        assert_eq!(entries[0].size_bytes(), 42);
        assert_eq!(entries[0].modified_at(), stamp);
        Ok(())
    }

    #[test]
    fn list_includes_subdirectories_without_recursing() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("nested"))?;
        write_file(&dir.path().join("nested"), "inner.txt", 3)?;
        write_file(dir.path(), "top.txt", 1)?;

        let entries = list(dir.path(), SortKey::ByName)?;
        assert_eq!(names(&entries), vec!["nested", "top.txt"]);
        Ok(())
    }

    #[test]
    fn list_empty_directory_fails() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let result = list(dir.path(), SortKey::ByName);
        assert!(matches!(result, Err(ListingError::EmptyDirectory)));
        Ok(())
    }

    #[test]
    fn list_missing_directory_is_filesystem_error() {
        let result = list(Path::new("/path/does/not/exist"), SortKey::None);
        assert!(matches!(result, Err(ListingError::FileSystem(_))));
    }

    #[cfg(unix)]
    #[test]
    fn list_fails_on_broken_symlink() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        write_file(dir.path(), "ok.txt", 1)?;
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("dangling"))?;

        let result = list(dir.path(), SortKey::None);
        assert!(matches!(result, Err(ListingError::FileSystem(_))));
        Ok(())
    }

    #[test]
    fn search_is_case_insensitive_substring() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        write_file(dir.path(), "Report.TXT", 1)?;
        write_file(dir.path(), "notes.md", 1)?;
        write_file(dir.path(), "old_report.txt", 1)?;

        let mut found: Vec<String> = search(dir.path(), "rEpOrT")?
            .into_iter()
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        found.sort();
        assert_eq!(found, vec!["Report.TXT", "old_report.txt"]);
        Ok(())
    }

    #[test]
    fn search_empty_query_matches_everything() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        write_file(dir.path(), "a", 1)?;
        write_file(dir.path(), "b", 1)?;
        fs::create_dir(dir.path().join("c"))?;

        assert_eq!(search(dir.path(), "")?.len(), 3);
        Ok(())
    }

    #[test]
    fn search_without_match_or_directory_fails() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let file = write_file(dir.path(), "only.txt", 1)?;

        assert!(matches!(
            search(dir.path(), "zzz"),
            Err(ListingError::NoMatch)
        ));
        assert!(matches!(
            search(&file, "only"),
            Err(ListingError::NoDirectorySelected)
        ));
        Ok(())
    }

    #[test]
    fn delete_twice_fails_the_second_time() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        write_file(dir.path(), "gone.txt", 5)?;
        write_file(dir.path(), "stay.txt", 5)?;

        delete(dir.path(), "gone.txt")?;
        assert_eq!(names(&list(dir.path(), SortKey::None)?), vec!["stay.txt"]);

        let second = delete(dir.path(), "gone.txt");
        assert_eq!(
            second.err().and_then(|e| e.kind()),
            Some(io::ErrorKind::NotFound)
        );
        Ok(())
    }

    #[test]
    fn delete_removes_only_empty_directories() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("empty"))?;
        fs::create_dir(dir.path().join("full"))?;
        write_file(&dir.path().join("full"), "keep.txt", 1)?;

        delete(dir.path(), "empty")?;
        assert!(!dir.path().join("empty").exists());

        assert!(matches!(
            delete(dir.path(), "full"),
            Err(ListingError::FileSystem(_))
        ));
        assert!(dir.path().join("full/keep.txt").exists());
        Ok(())
    }

    #[test]
    fn delete_rejects_paths_in_place_of_names() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let inner = dir.path().join("inner");
        fs::create_dir(&inner)?;
        write_file(dir.path(), "outside.txt", 1)?;

        let err = delete(&inner, "../outside.txt").err();
        assert_eq!(
            err.and_then(|e| e.kind()),
            Some(io::ErrorKind::InvalidInput)
        );
        assert!(dir.path().join("outside.txt").exists());
        Ok(())
    }

    #[test]
    fn rename_within_directory() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        write_file(dir.path(), "before.txt", 7)?;

        rename(dir.path(), "before.txt", &dir.path().join("after.txt"))?;
        let entries = list(dir.path(), SortKey::None)?;
        assert_eq!(names(&entries), vec!["after.txt"]);
        assert_eq!(entries[0].size_bytes(), 7);
        Ok(())
    }

    #[test]
    fn rename_can_move_out_of_directory() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let listed = dir.path().join("listed");
        let elsewhere = dir.path().join("elsewhere");
        fs::create_dir(&listed)?;
        fs::create_dir(&elsewhere)?;
        write_file(&listed, "moving.txt", 1)?;
        write_file(&listed, "staying.txt", 1)?;

        rename(&listed, "moving.txt", &elsewhere.join("moved.txt"))?;
        assert_eq!(names(&list(&listed, SortKey::None)?), vec!["staying.txt"]);
        assert!(elsewhere.join("moved.txt").exists());
        Ok(())
    }

    #[test]
    fn rename_missing_entry_fails() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let result = rename(dir.path(), "nope.txt", &dir.path().join("still_nope.txt"));
        assert!(matches!(result, Err(ListingError::FileSystem(_))));
        Ok(())
    }
}
