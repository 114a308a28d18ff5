//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and the
//! layout helper that splits the screen into header, list and status line.
//!
//! This module stays "pure rendering": it reads state + config and produces widgets.

use crate::app::AppState;
use crate::ui::overlays::Overlay;
use crate::ui::widgets::draw;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Areas of one frame. The header and status line are optional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    pub header: Option<Rect>,
    pub list: Rect,
    pub status: Option<Rect>,
}

/// Renders the entire terminal UI for dirview on each frame.
pub fn render(frame: &mut Frame, app: &AppState) {
    let theme_cfg = app.config().theme();
    let accent_style = theme_cfg.accent_style();

    let layout = layout_chunks(frame.area(), app);
    let path_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(header_text(app), theme_cfg.path_style()),
        Span::raw(" "),
    ]);

    match layout.header {
        Some(header) => {
            frame.render_widget(Paragraph::new(path_line), header);
            draw::draw_list_pane(frame, app, layout.list, None);
        }
        None => draw::draw_list_pane(frame, app, layout.list, Some(path_line)),
    }

    if let Some(status) = layout.status {
        draw::draw_status_line(frame, app, status);
    }

    render_overlays(frame, app, accent_style);
}

/// Splits the screen. The path goes into the list border when borders and titles are on,
/// otherwise it gets its own header row.
pub fn layout_chunks(area: Rect, app: &AppState) -> ScreenLayout {
    let display_cfg = app.config().display();
    let has_header = !(display_cfg.borders() && display_cfg.titles());
    let has_status = display_cfg.status_line();

    let mut constraints = Vec::with_capacity(3);
    if has_header {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    if has_status {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;
    let header = has_header.then(|| {
        idx += 1;
        chunks[0]
    });
    let list = chunks[idx];
    let status = has_status.then(|| chunks[idx + 1]);

    ScreenLayout {
        header,
        list,
        status,
    }
}

fn header_text(app: &AppState) -> String {
    match app.session().directory() {
        Some(dir) => shorten_home_path(dir),
        None => "No directory selected".to_string(),
    }
}

/// Renders the open prompt and the overlay at the front of the queue.
fn render_overlays(frame: &mut Frame, app: &AppState, accent_style: Style) {
    if app.actions().is_input_mode() {
        draw::draw_input_dialog(frame, app, accent_style);
    }

    match app.overlays().top() {
        Some(Overlay::Message { title, text }) => {
            draw::draw_message_overlay(frame, app, accent_style, title, text);
        }
        Some(Overlay::KeybindHelp) => draw::draw_keybind_help(frame, app, accent_style),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Config;
    use crate::config::load::RawConfig;
    use std::error;

    #[test]
    fn layout_chunks_with_default_config() -> Result<(), Box<dyn error::Error>> {
        let config = Config::default();
        let app = AppState::new(&config)?;

        let layout = layout_chunks(Rect::new(0, 0, 80, 20), &app);
        assert_eq!(layout.header, None);
        assert_eq!(layout.list, Rect::new(0, 0, 80, 19));
        assert_eq!(layout.status, Some(Rect::new(0, 19, 80, 1)));
        Ok(())
    }

    #[test]
    fn layout_chunks_without_borders() -> Result<(), Box<dyn error::Error>> {
        let raw: RawConfig = toml::from_str(
            r#"
            [display]
            borders = false
            status_line = false
        "#,
        )?;
        let config = Config::from(raw);
        let app = AppState::new(&config)?;

        let layout = layout_chunks(Rect::new(0, 0, 80, 20), &app);
        assert_eq!(layout.header, Some(Rect::new(0, 0, 80, 1)));
        assert_eq!(layout.list, Rect::new(0, 1, 80, 19));
        assert_eq!(layout.status, None);
        Ok(())
    }
}
