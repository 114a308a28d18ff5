//! UI-related tests for dirview
//!
//! These tests focus on the user interface pieces of the dirview TUI,
//! including width sanitizing, layout and drawing whole frames.
//!
//! Frames are drawn into ratatui's `TestBackend`, so no real terminal is needed.
//! Temporary directories are cleaned up after the tests complete.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dirview::app::AppState;
use dirview::config::{Config, load::RawConfig};
use dirview::core;
use dirview::ui::render::{layout_chunks, render};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use std::error;
use std::fs;
use tempfile::tempdir;

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_ui_sanitization_and_exact_width() {
    let pane_width = 10;

    let cases = vec![
        ("short.txt", 10),
        ("very_long_filename.txt", 10),
        ("🦀_crab.rs", 10),
        ("\t_tab", 10),
    ];

    for (input, expected_width) in cases {
        let result = core::sanitize_to_exact_width(input, pane_width);

        let actual_width = unicode_width::UnicodeWidthStr::width(result.as_str());

        assert_eq!(
            actual_width, expected_width,
            "Failed to produce exact width for input: '{}'. Result was: '{}' (width: {})",
            input, result, actual_width
        );

        assert!(
            !result.chars().any(|c| c.is_control() && c != ' '),
            "Result contains control characters: {:?}",
            result
        );
    }
}

#[test]
fn test_layout_chunks_with_config() -> Result<(), Box<dyn error::Error>> {
    let size = Rect::new(0, 0, 100, 10);

    let toml_content = r#"
            [display]
            titles = false
            status_line = true
        "#;

    let raw: RawConfig = toml::from_str(toml_content)?;
    let config = Config::from(raw);
    let app = AppState::new(&config)?;

    let layout = layout_chunks(size, &app);

    assert_eq!(layout.header.map(|r| r.height), Some(1));
    assert_eq!(layout.status.map(|r| r.y), Some(9));
    assert_eq!(layout.list.height, 8);
    Ok(())
}

#[test]
fn test_render_shows_listing_and_status() -> Result<(), Box<dyn error::Error>> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("alpha.txt"), "12345")?;
    fs::write(temp_dir.path().join("beta.txt"), "1")?;

    let config = Config::default();
    let mut app = AppState::from_dir(&config, temp_dir.path());
    app.handle_keypress(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));

    let mut terminal = Terminal::new(TestBackend::new(100, 12))?;
    terminal.draw(|f| render(f, &app))?;
    let text = screen_text(&terminal);

    assert!(text.contains("alpha.txt - 5 bytes - "), "screen:\n{text}");
    assert!(text.contains("beta.txt - 1 bytes - "), "screen:\n{text}");
    assert!(text.contains("Sort: name"), "screen:\n{text}");
    assert!(text.contains("1/2"), "screen:\n{text}");
    assert!(text.contains("Ready"), "screen:\n{text}");
    Ok(())
}

#[test]
fn test_render_shows_notice_and_prompt() -> Result<(), Box<dyn error::Error>> {
    let temp_dir = tempdir()?;
    let config = Config::default();
    let mut app = AppState::from_dir(&config, temp_dir.path());

    let mut terminal = Terminal::new(TestBackend::new(80, 16))?;
    terminal.draw(|f| render(f, &app))?;
    let text = screen_text(&terminal);
    assert!(text.contains("The selected directory is empty."), "screen:\n{text}");
    assert!(text.contains("[Empty]"), "screen:\n{text}");

    app.handle_keypress(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    app.handle_keypress(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE));
    terminal.draw(|f| render(f, &app))?;
    let text = screen_text(&terminal);
    assert!(text.contains("Search for:"), "screen:\n{text}");
    Ok(())
}
