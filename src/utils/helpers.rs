//! Helpers for dirview.
//!
//! This module defines the notice timeout limits and small utility functions:
//! - Color parsing from names or hex codes
//! - Displaying the home directory as "~" and expanding it again
//! - Resolving user-typed paths against a base directory

use ratatui::style::Color;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use tracing::warn;

/// Shortest time a notice stays on screen.
pub const MIN_NOTICE_TIMEOUT_MS: u64 = 500;
/// Default notice timeout. Can be overwritten in the dirview.toml.
pub const DEFAULT_NOTICE_TIMEOUT_MS: u64 = 4000;
/// Longest time a notice stays on screen.
pub const MAX_NOTICE_TIMEOUT_MS: u64 = 60_000;

/// Parses a color name or hex value (#RRGGBB or #RGB) into a ratatui Color.
///
/// Unknown values give `Color::Reset`, which makes the theme fall back to its default.
pub fn parse_color(s: &str) -> Color {
    let lowered = s.trim().to_lowercase();
    match lowered.as_str() {
        "default" | "reset" | "" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        hex => parse_hex(hex).unwrap_or(Color::Reset),
    }
}

fn parse_hex(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#')?;
    let expanded = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let rgb = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

/// Safely clamp the notice timeout.
pub fn clamp_notice_timeout(value: u64) -> u64 {
    let clamped = value.clamp(MIN_NOTICE_TIMEOUT_MS, MAX_NOTICE_TIMEOUT_MS);
    if clamped != value {
        warn!(
            value,
            min = MIN_NOTICE_TIMEOUT_MS,
            max = MAX_NOTICE_TIMEOUT_MS,
            clamped,
            "notice_timeout_ms out of range"
        );
    }
    clamped
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Shortens the home directory prefix of `path` to "~" for display.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    readable_path(path)
}

/// Expands a leading "~" (alone or followed by a separator) to the home directory.
pub fn expand_home_path(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/') || rest.starts_with(MAIN_SEPARATOR))
        && let Some(home) = get_home()
    {
        return home.join(rest.trim_start_matches(['/', MAIN_SEPARATOR]));
    }
    PathBuf::from(input)
}

/// Turns user input into a path: expands "~" and joins relative paths onto `base`.
/// The input is used as typed, so names may start or end with spaces.
pub fn resolve_input_path(input: &str, base: &Path) -> PathBuf {
    let expanded = expand_home_path(input);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

/// Path display without the Windows verbatim prefix.
pub fn readable_path(path: &Path) -> String {
    #[cfg(windows)]
    {
        let display = path.display().to_string();
        display
            .strip_prefix(r"\\?\")
            .unwrap_or(&display)
            .to_string()
    }
    #[cfg(not(windows))]
    {
        path.display().to_string()
    }
}
