//! Theme configuration options for dirview
//!
//! This module defines the `[theme]` table of dirview.toml.
//! Colors accept terminal color names ("cyan", "darkgray") or hex codes ("#RRGGBB", "#RGB").
//! Any color left at "default" falls back to the internal default theme.

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use std::sync::LazyLock;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme]
/// selection_icon = "> "
/// [theme.selection]
/// fg = "black"
/// bg = "#a0a0a0"
/// [theme.widget.border]
/// fg = "cyan"
/// ```
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Theme {
    selection: ColorPair,
    accent: ColorPair,
    entry: ColorPair,
    path: ColorPair,
    status_line: ColorPair,
    error: ColorPair,
    selection_icon: String,
    widget: WidgetTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            selection: ColorPair {
                bg: Color::Indexed(236),
                ..ColorPair::default()
            },
            accent: ColorPair {
                fg: Color::Indexed(238),
                ..ColorPair::default()
            },
            entry: ColorPair::default(),
            path: ColorPair {
                fg: Color::Magenta,
                ..ColorPair::default()
            },
            status_line: ColorPair {
                fg: Color::Gray,
                ..ColorPair::default()
            },
            error: ColorPair {
                fg: Color::Red,
                ..ColorPair::default()
            },
            selection_icon: "> ".into(),
            widget: WidgetTheme::default(),
        }
    }
}

impl Theme {
    /// Internal default theme, used as the fallback for every color left at Reset.
    pub fn internal_defaults() -> &'static Self {
        static DEFAULT: LazyLock<Theme> = LazyLock::new(Theme::default);
        &DEFAULT
    }

    pub fn selection_style(&self) -> Style {
        self.selection
            .style_or(&Theme::internal_defaults().selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        self.accent.style_or(&Theme::internal_defaults().accent)
    }

    pub fn entry_style(&self) -> Style {
        self.entry.style_or(&Theme::internal_defaults().entry)
    }

    pub fn path_style(&self) -> Style {
        self.path.style_or(&Theme::internal_defaults().path)
    }

    pub fn status_line_style(&self) -> Style {
        self.status_line
            .style_or(&Theme::internal_defaults().status_line)
    }

    pub fn error_style(&self) -> Style {
        self.error.style_or(&Theme::internal_defaults().error)
    }

    pub fn selection_icon(&self) -> &str {
        &self.selection_icon
    }

    pub fn widget(&self) -> &WidgetTheme {
        &self.widget
    }
}

/// Foreground and background color of one themed element.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    /// Replaces Reset colors with those of `other`.
    pub fn resolve(&self, other: &ColorPair) -> Self {
        let pick = |mine: Color, theirs: Color| if mine == Color::Reset { theirs } else { mine };
        Self {
            fg: pick(self.fg, other.fg),
            bg: pick(self.bg, other.bg),
        }
    }

    /// Converts to a Style, taking Reset colors from `fallback`.
    pub fn style_or(&self, fallback: &ColorPair) -> Style {
        let resolved = self.resolve(fallback);
        Style::default().fg(resolved.fg).bg(resolved.bg)
    }

    fn from_style(style: Style) -> Self {
        Self {
            fg: style.fg.unwrap_or(Color::Reset),
            bg: style.bg.unwrap_or(Color::Reset),
        }
    }
}

/// Colors for dialogs and notice boxes.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct WidgetTheme {
    color: ColorPair,
    border: ColorPair,
    title: ColorPair,
}

impl WidgetTheme {
    /// Body style, falling back to `fallback` for Reset colors.
    pub fn style_or(&self, fallback: Style) -> Style {
        self.color.style_or(&ColorPair::from_style(fallback))
    }

    /// Border style, falling back to `fallback` for Reset colors.
    pub fn border_style_or(&self, fallback: Style) -> Style {
        self.border.style_or(&ColorPair::from_style(fallback))
    }

    /// Title style, falling back to `fallback` for Reset colors.
    pub fn title_style_or(&self, fallback: Style) -> Style {
        self.title.style_or(&ColorPair::from_style(fallback))
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
