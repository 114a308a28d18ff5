//! Draw widget module which holds the draw functions used by the renderer.
//!
//! Relies on the dialog helpers from [crate::ui::widgets] for the input dialog,
//! notices and the key help.

use crate::app::{AppState, InputMode, View};
use crate::core::sanitize_to_exact_width;
use crate::ui::widgets::{DialogPosition, DialogSize, DialogStyle, dialog_area, draw_dialog};

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Draws the file list with the selection highlighted.
///
/// `title` goes into the border when borders are on.
pub(crate) fn draw_list_pane(frame: &mut Frame, app: &AppState, area: Rect, title: Option<Line>) {
    let display_cfg = app.config().display();
    let theme_cfg = app.config().theme();

    let mut block = Block::default();
    if display_cfg.borders() {
        block = block
            .borders(Borders::ALL)
            .border_type(display_cfg.border_shape().as_border_type())
            .border_style(theme_cfg.accent_style());
        if let Some(title) = title {
            block = block.title(title);
        }
    }

    if app.rows().is_empty() {
        let placeholder = if app.session().directory().is_none() {
            "[No directory selected]"
        } else {
            "[Empty]"
        };
        let line = Line::from(vec![
            Span::raw(display_cfg.padding_str()),
            Span::styled(placeholder, theme_cfg.entry_style()),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let symbol = if display_cfg.selection_marker() {
        theme_cfg.selection_icon()
    } else {
        ""
    };
    let padding_str = display_cfg.padding_str();
    let inner_width = block.inner(area).width as usize;
    let text_width = inner_width
        .saturating_sub(symbol.width())
        .saturating_sub(padding_str.len());

    let items: Vec<ListItem> = app
        .rows()
        .iter()
        .map(|row| {
            let text = sanitize_to_exact_width(row.text(), text_width);
            ListItem::new(Line::from(vec![
                Span::raw(padding_str),
                Span::styled(text, theme_cfg.entry_style()),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(app.visible_selected());

    frame.render_stateful_widget(
        List::new(items)
            .block(block)
            .highlight_style(theme_cfg.selection_style())
            .highlight_symbol(symbol)
            .scroll_padding(display_cfg.scroll_padding()),
        area,
        &mut state,
    );
}

/// Draw the status line: sort key, what is shown, entry position and a state word.
pub(crate) fn draw_status_line(frame: &mut Frame, app: &AppState, area: Rect) {
    let style = app.config().theme().status_line_style();

    let mut parts = vec![format!("Sort: {}", app.session().sort_key().label())];
    match app.view() {
        View::Listing => parts.push("Listing".to_string()),
        View::Search { query } => parts.push(format!("Search: \"{query}\"")),
    }

    let total = app.rows().len();
    let idx = app.visible_selected().map(|i| i + 1).unwrap_or(0);
    parts.push(format!("{idx}/{total}"));

    let state = match app.actions().input_mode() {
        Some(mode) => mode.title().trim(),
        None => "Ready",
    };

    let left = Paragraph::new(Line::from(Span::styled(parts.join(" | "), style)));
    let right = Paragraph::new(Line::from(Span::styled(state, style))).alignment(Alignment::Right);
    frame.render_widget(left, area);
    frame.render_widget(right, area);
}

/// Draws the open prompt.
///
/// The delete confirmation only shows its question. Other prompts get an input field
/// with the terminal cursor placed in it.
pub(crate) fn draw_input_dialog(frame: &mut Frame, app: &AppState, accent_style: Style) {
    let Some(mode) = app.actions().input_mode() else {
        return;
    };
    let prompt = match app.actions().mode() {
        crate::app::ActionMode::Input { prompt, .. } => prompt.as_str(),
        crate::app::ActionMode::Normal => return,
    };

    let theme_cfg = app.config().theme();
    let widget = theme_cfg.widget();
    let border_type = app.config().display().border_shape().as_border_type();
    let area = frame.area();

    let (border_fallback, title_fallback) = if mode == InputMode::ConfirmDelete {
        (theme_cfg.error_style(), theme_cfg.error_style())
    } else {
        (accent_style, accent_style)
    };
    let dialog_style = DialogStyle {
        border_style: widget.border_style_or(border_fallback),
        style: widget.style_or(Style::default()),
        title: Some(Span::styled(mode.title(), widget.title_style_or(title_fallback))),
    };

    let rect = dialog_area(area, DialogSize::Small, DialogPosition::Center);

    if mode == InputMode::ConfirmDelete {
        draw_dialog(
            frame,
            rect,
            border_type,
            &dialog_style,
            Text::from(Line::raw(prompt)),
            Alignment::Center,
        );
        return;
    }

    let visible_width = rect.width.saturating_sub(3) as usize;
    let (shown, cursor_offset) = input_field_view(
        app.actions().input_buffer(),
        app.actions().input_cursor_pos(),
        visible_width,
    );

    let text = Text::from(vec![
        Line::from(Span::styled(prompt, Style::default().add_modifier(Modifier::BOLD))),
        Line::raw(shown),
    ]);
    draw_dialog(
        frame,
        rect,
        border_type,
        &dialog_style,
        text,
        Alignment::Left,
    );

    frame.set_cursor_position(Position::new(
        rect.x + 1 + cursor_offset as u16,
        rect.y + 2,
    ));
}

/// Helper function to calculate cursor offset for cursor moving
/// Handles horizontal truncation, variable width with unicode_width and clamps cursor to buffer.
pub(crate) fn input_field_view(
    input_text: &str,
    cursor_pos: usize,
    visible_width: usize,
) -> (&str, usize) {
    let cursor_pos = cursor_pos.min(input_text.len());
    if input_text.width() <= visible_width {
        return (input_text, input_text[..cursor_pos].width());
    }

    let mut current_w = 0;
    let mut start = 0;
    for (idx, ch) in input_text.char_indices().rev() {
        current_w += ch.width().unwrap_or(0);
        if current_w > visible_width {
            start = idx + ch.len_utf8();
            break;
        }
    }

    let cursor_offset = if cursor_pos < start {
        0
    } else {
        input_text[start..cursor_pos].width()
    };
    (&input_text[start..], cursor_offset)
}

/// Draws one notice near the bottom of the screen.
/// Errors use the error style for border and title.
pub(crate) fn draw_message_overlay(
    frame: &mut Frame,
    app: &AppState,
    accent_style: Style,
    title: &str,
    text: &str,
) {
    let theme_cfg = app.config().theme();
    let widget = theme_cfg.widget();
    let border_type = app.config().display().border_shape().as_border_type();
    let area = frame.area();

    let accent = if title == "Error" {
        theme_cfg.error_style()
    } else {
        accent_style
    };

    let max_line_width = text.lines().map(|l| l.width()).max().unwrap_or(0);
    let line_count = text.lines().count().max(1);

    let min_width = 30;
    let border_pad = 2;
    let right_pad = 2;
    let width = ((max_line_width + right_pad).max(min_width).max(title.width() + 4) + border_pad)
        .min(area.width as usize) as u16;
    let height = ((line_count + border_pad).min(area.height as usize)) as u16;

    let dialog_style = DialogStyle {
        border_style: widget.border_style_or(accent),
        style: widget.style_or(Style::default()),
        title: Some(Span::styled(
            format!(" {title} "),
            widget.title_style_or(accent),
        )),
    };

    let rect = dialog_area(
        area,
        DialogSize::Custom(width, height),
        DialogPosition::BottomCenter,
    );
    draw_dialog(
        frame,
        rect,
        border_type,
        &dialog_style,
        text.to_string(),
        Alignment::Left,
    );
}

/// Draws the key help built from the configured bindings.
pub(crate) fn draw_keybind_help(frame: &mut Frame, app: &AppState, accent_style: Style) {
    let keys = app.config().keys();
    let widget = app.config().theme().widget();
    let area = frame.area();
    let border_type = app.config().display().border_shape().as_border_type();

    let fmt_keys = |list: &[String]| -> String {
        if list.is_empty() {
            "-".to_string()
        } else {
            list.join(", ")
        }
    };

    let sections: Vec<(&str, Vec<(String, &'static str)>)> = vec![
        (
            "Navigation",
            vec![
                (fmt_keys(keys.go_up()), "Move selection up"),
                (fmt_keys(keys.go_down()), "Move selection down"),
                (fmt_keys(keys.go_to_top()), "Go to top"),
                (fmt_keys(keys.go_to_bottom()), "Go to bottom"),
                (fmt_keys(keys.go_parent()), "Select parent directory"),
                (fmt_keys(keys.open_file()), "Select directory / show file path"),
                (fmt_keys(keys.browse()), "Type a directory to select"),
            ],
        ),
        (
            "Listing",
            vec![
                (fmt_keys(keys.sort_by_name()), "Sort by name"),
                (fmt_keys(keys.sort_by_size()), "Sort by size"),
                (fmt_keys(keys.sort_by_date()), "Sort by date, newest first"),
                (fmt_keys(keys.sort_none()), "Directory order"),
                (fmt_keys(keys.search()), "Search"),
                (fmt_keys(keys.clear_search()), "Clear search"),
                (fmt_keys(keys.refresh()), "Refresh"),
            ],
        ),
        (
            "File",
            vec![
                (fmt_keys(keys.rename()), "Rename"),
                (fmt_keys(keys.delete()), "Delete"),
            ],
        ),
        (
            "System",
            vec![
                (fmt_keys(keys.keybind_help()), "Show this help"),
                (fmt_keys(keys.quit()), "Quit"),
            ],
        ),
    ];

    let header_style = Style::default().add_modifier(Modifier::BOLD);
    let key_style = accent_style.add_modifier(Modifier::BOLD);

    let mut all_rows: Vec<Line> = Vec::new();
    for (section_name, rows) in sections {
        all_rows.push(Line::from(Span::styled(
            format!("{section_name}:"),
            header_style,
        )));
        for (k, desc) in rows {
            all_rows.push(Line::from(vec![
                Span::styled(format!("  {k:<24}"), key_style),
                Span::raw(desc),
            ]));
        }
        all_rows.push(Line::raw(""));
    }
    all_rows.pop();

    let height = (all_rows.len() as u16).saturating_add(2);
    let size = DialogSize::Custom(area.width.saturating_sub(6).clamp(40, 72), height);

    let dialog_style = DialogStyle {
        border_style: widget.border_style_or(accent_style),
        style: widget.style_or(Style::default()),
        title: Some(Span::styled(
            " Keybinds ",
            widget.title_style_or(accent_style),
        )),
    };

    draw_dialog(
        frame,
        dialog_area(area, size, DialogPosition::Center),
        border_type,
        &dialog_style,
        Text::from(all_rows),
        Alignment::Left,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_view_fits_short_text() {
        assert_eq!(input_field_view("abc", 2, 10), ("abc", 2));
        assert_eq!(input_field_view("abc", 99, 10), ("abc", 3));
    }

    #[test]
    fn input_view_scrolls_long_text_to_the_end() {
        let (shown, offset) = input_field_view("/home/user/documents", 20, 8);
        assert_eq!(shown, "ocuments");
        assert_eq!(offset, 8);

        let (_, offset) = input_field_view("/home/user/documents", 0, 8);
        assert_eq!(offset, 0);
    }
}
