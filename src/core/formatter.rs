//! Sorting and display formatting for directory entries in dirview.
//!
//! [sort_entries] applies a [SortKey] to a listing.
//! [format_listing_line] renders one [Entry] as the line shown in the file pane,
//! and [sanitize_to_exact_width] fits any line into a pane of fixed width.

use crate::core::listing::{Entry, SortKey};

use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthChar;

use std::cmp::Reverse;
use std::time::SystemTime;

/// Layout of `ctime(3)`: `Mon Oct 19 14:03:07 2026`, day of month space padded.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Sorts the given entries in place.
///
/// All orders are stable, so ties keep their enumeration order.
/// `SortKey::None` leaves the slice untouched.
pub fn sort_entries(entries: &mut [Entry], key: SortKey) {
    match key {
        SortKey::None => {}
        SortKey::ByName => entries.sort_by_cached_key(Entry::lowercase_name),
        SortKey::BySize => entries.sort_by_key(Entry::size_bytes),
        SortKey::ByDate => entries.sort_by_key(|e| Reverse(e.modified_at())),
    }
}

/// Formats a modification time in local time, `ctime` style.
pub fn format_file_time(modified: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(modified);
    dt.format(CTIME_FORMAT).to_string()
}

/// Renders an entry as `"<name> - <size> bytes - <modification time>"`.
pub fn format_listing_line(entry: &Entry) -> String {
    format!(
        "{} - {} bytes - {}",
        entry.name_str(),
        entry.size_bytes(),
        format_file_time(entry.modified_at())
    )
}

/// Fits `line` into exactly `pane_width` terminal columns.
///
/// Control characters are dropped and tabs expand to the next multiple of 4.
/// Longer lines are cut, shorter ones padded with spaces.
pub fn sanitize_to_exact_width(line: &str, pane_width: usize) -> String {
    let mut out = String::with_capacity(pane_width);
    let mut current_w = 0;

    for ch in line.chars() {
        let (piece, w) = match ch {
            '\t' => (None, 4 - (current_w % 4)),
            c if c.is_control() => continue,
            c => (Some(c), c.width().unwrap_or(0)),
        };

        if current_w + w > pane_width {
            break;
        }
        match piece {
            Some(c) => out.push(c),
            None => out.extend(std::iter::repeat_n(' ', w)),
        }
        current_w += w;
    }

    out.extend(std::iter::repeat_n(' ', pane_width - current_w));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::time::Duration;

    fn entry(name: &str, size: u64, secs: u64) -> Entry {
        Entry::new(
            OsString::from(name),
            size,
            SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
        )
    }

    fn names(entries: &[Entry]) -> Vec<String> {
        entries.iter().map(|e| e.name_str().into_owned()).collect()
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let mut entries = vec![entry("beta", 1, 1), entry("Alpha", 1, 1), entry("gamma", 1, 1)];
        sort_entries(&mut entries, SortKey::ByName);
        assert_eq!(names(&entries), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn sort_by_size_ascending_and_stable() {
        let mut entries = vec![
            entry("big", 300, 1),
            entry("first_small", 10, 1),
            entry("mid", 20, 1),
            entry("second_small", 10, 1),
        ];
        sort_entries(&mut entries, SortKey::BySize);
        assert_eq!(
            names(&entries),
            vec!["first_small", "second_small", "mid", "big"]
        );
    }

    #[test]
    fn sort_by_date_newest_first() {
        let mut entries = vec![entry("old", 1, 100), entry("new", 1, 300), entry("mid", 1, 200)];
        sort_entries(&mut entries, SortKey::ByDate);
        assert_eq!(names(&entries), vec!["new", "mid", "old"]);
    }

    #[test]
    fn sort_none_keeps_order() {
        let mut entries = vec![entry("z", 9, 1), entry("a", 1, 9)];
        sort_entries(&mut entries, SortKey::None);
        assert_eq!(names(&entries), vec!["z", "a"]);
    }

    #[test]
    fn listing_line_layout() {
        let e = entry("a.txt", 10, 1_700_000_000);
        let line = format_listing_line(&e);

        assert!(line.starts_with("a.txt - 10 bytes - "), "got {:?}", line);
        let time = &line["a.txt - 10 bytes - ".len()..];
        assert_eq!(time, format_file_time(e.modified_at()));
        assert_eq!(time.len(), 24, "ctime layout is 24 columns: {:?}", time);
        assert!(time.ends_with("2023"), "got {:?}", time);
    }

    #[test]
    fn sanitize_produces_exact_width() {
        let pane_width = 10;
        let cases = ["short.txt", "very_long_filename.txt", "🦀_crab.rs", "\t_tab", "new\nline"];

        for input in cases {
            let result = sanitize_to_exact_width(input, pane_width);
            let actual_width = unicode_width::UnicodeWidthStr::width(result.as_str());

            assert_eq!(
                actual_width, pane_width,
                "wrong width for {:?}: {:?}",
                input, result
            );
            assert!(
                !result.chars().any(|c| c.is_control()),
                "control characters left in {:?}",
                result
            );
        }
    }
}
