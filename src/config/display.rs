//! Display configuration options for dirview
//!
//! This module defines the `[display]` table of the dirview.toml configuration file.

use ratatui::widgets::BorderType;
use serde::Deserialize;

/// Display configuration options
///
/// Controls the border around the file pane, the pane title, the selection marker
/// and the status line. Every option has a default, so a missing table is fine.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    selection_marker: bool,
    borders: bool,
    border_shape: BorderShape,
    titles: bool,
    status_line: bool,
    entry_padding: u8,
    scroll_padding: usize,
}

/// Public methods for accessing display configuration options
impl Display {
    pub fn selection_marker(&self) -> bool {
        self.selection_marker
    }

    pub fn borders(&self) -> bool {
        self.borders
    }

    pub fn border_shape(&self) -> &BorderShape {
        &self.border_shape
    }

    pub fn titles(&self) -> bool {
        self.titles
    }

    pub fn status_line(&self) -> bool {
        self.status_line
    }

    pub fn scroll_padding(&self) -> usize {
        self.scroll_padding
    }

    /// Leading padding of each row, clamped to 4 spaces
    pub fn padding_str(&self) -> &'static str {
        match self.entry_padding {
            0 => "",
            1 => " ",
            2 => "  ",
            3 => "   ",
            _ => "    ",
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            selection_marker: true,
            borders: true,
            border_shape: BorderShape::Square,
            titles: true,
            status_line: true,
            entry_padding: 1,
            scroll_padding: 3,
        }
    }
}

/// Border shape options
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BorderShape {
    Square,
    Rounded,
    Double,
    Thick,
}

impl BorderShape {
    pub fn as_border_type(&self) -> BorderType {
        match self {
            BorderShape::Square => BorderType::Plain,
            BorderShape::Rounded => BorderType::Rounded,
            BorderShape::Double => BorderType::Double,
            BorderShape::Thick => BorderType::Thick,
        }
    }
}
