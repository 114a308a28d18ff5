//! main.rs
//! Entry point for dirview

use dirview::app::AppState;
use dirview::config::Config;
use dirview::core::terminal;
use dirview::utils::cli::{CliAction, handle_args};
use dirview::utils::logging::init_logging;
use dirview::utils::resolve_input_path;

use tracing::info;

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[dirview] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let action = handle_args();

    let initial_path = match action {
        CliAction::Exit => return Ok(()),
        CliAction::RunApp => None,
        CliAction::RunAppAtPath(path_arg) => {
            let target = resolve_input_path(&path_arg, &std::env::current_dir()?);

            if !target.is_dir() {
                eprintln!("\n[dirview] Error: '{}' is not a directory.", path_arg);
                std::process::exit(1);
            }
            Some(target)
        }
    };

    init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "starting dirview");

    let config = Config::load();

    let mut app = match initial_path {
        Some(path) => AppState::from_dir(&config, path),
        None => AppState::new(&config)?,
    };
    terminal::run_terminal(&mut app)
}
