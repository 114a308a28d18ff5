//! Dialog helpers shared by the draw functions.
//!
//! [dialog_area] places a box of a given [DialogSize] inside the screen and
//! [draw_dialog] clears that box and draws a bordered, titled paragraph into it.

pub mod draw;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Where a dialog sits on screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialogPosition {
    Center,
    BottomCenter,
}

/// How large a dialog is. `Custom` is in cells, the others in percent of the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialogSize {
    Small,
    Large,
    Custom(u16, u16),
}

pub struct DialogStyle<'a> {
    pub border_style: Style,
    pub style: Style,
    pub title: Option<Span<'a>>,
}

/// Computes the rectangle of a dialog, clamped to `area`.
pub fn dialog_area(area: Rect, size: DialogSize, position: DialogPosition) -> Rect {
    let (w, h) = match size {
        DialogSize::Small => (area.width * 6 / 10, 4),
        DialogSize::Large => (area.width * 8 / 10, area.height * 8 / 10),
        DialogSize::Custom(w, h) => (w, h),
    };
    let width = w.min(area.width);
    let height = h.min(area.height);

    let x = area.x + (area.width - width) / 2;
    let y = match position {
        DialogPosition::Center => area.y + (area.height - height) / 2,
        DialogPosition::BottomCenter => area.y + area.height.saturating_sub(height + 1),
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Clears `rect` and draws a bordered paragraph with `text` into it.
pub fn draw_dialog<'a, T>(
    frame: &mut Frame,
    rect: Rect,
    border_type: BorderType,
    dialog_style: &DialogStyle<'a>,
    text: T,
    alignment: Alignment,
) where
    T: Into<Text<'a>>,
{
    frame.render_widget(Clear, rect);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(dialog_style.border_style)
        .style(dialog_style.style);
    if let Some(title) = &dialog_style.title {
        block = block.title(title.clone());
    }

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(dialog_style.style)
        .alignment(alignment)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialogs_stay_inside_the_screen() {
        let area = Rect::new(0, 0, 40, 10);

        let big = dialog_area(area, DialogSize::Custom(100, 100), DialogPosition::Center);
        assert_eq!(big, area);

        let small = dialog_area(area, DialogSize::Small, DialogPosition::Center);
        assert_eq!((small.width, small.height), (24, 4));
        assert_eq!((small.x, small.y), (8, 3));

        let bottom = dialog_area(area, DialogSize::Custom(20, 3), DialogPosition::BottomCenter);
        assert_eq!(bottom.y + bottom.height, 9);
    }
}
