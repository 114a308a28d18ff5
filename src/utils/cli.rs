//! Command-line argument parsing and help for dirview.
//!
//! When invoked with no args (`dv`), dirview launches the TUI with no directory selected
//! (or the working directory, see `start_in_cwd`).

use crate::config::Config;

#[derive(Debug, PartialEq)]
pub enum CliAction {
    RunApp,
    RunAppAtPath(String),
    Exit,
}

/// Reads the process arguments and performs any print-and-exit option.
pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(&args)
}

/// Interprets the arguments after the program name.
pub fn parse_args(args: &[String]) -> CliAction {
    match args {
        [] => CliAction::RunApp,
        [arg] => match arg.as_str() {
            "--version" | "-v" => {
                print_version();
                CliAction::Exit
            }
            "-h" | "--help" => {
                print_help();
                CliAction::Exit
            }
            "--config-help" => {
                print_config_help();
                CliAction::Exit
            }
            "--keybinds" | "--keys" => {
                println!("{}", KEYBINDS_TEXT);
                CliAction::Exit
            }
            "--init" => {
                if let Err(e) = Config::generate_default(&Config::default_path()) {
                    eprintln!("Error: {}", e);
                }
                CliAction::Exit
            }
            path if !path.starts_with('-') && !path.trim().is_empty() => {
                CliAction::RunAppAtPath(path.to_string())
            }
            unknown => {
                eprintln!("Unknown argument: {}", unknown);
                eprintln!("Try --help for available options");
                CliAction::Exit
            }
        },
        _ => {
            eprintln!("Error: dirview accepts only one argument at a time.");
            eprintln!("Usage: dv [PATH] or dv [OPTION]");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("dirview {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"dirview - list, sort, search, rename and delete the entries of a directory

USAGE:
  dv [PATH]

PATH:
  Directory to select at startup (otherwise pick one with the browse key)

OPTIONS:
      --init              Generate the default configuration file
      --config-help       Display all the configuration options
      --keybinds          Display the default key bindings
  -h, --help              Print help information
  -v, --version           Display the installed version of dirview

ENVIRONMENT:
  DIRVIEW_CONFIG          Override the default config path
  DIRVIEW_LOG             Enable logging (e.g. "debug") to dirview.log in the cache directory
"#
    );
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  browse                    ["b"]                   Type a directory to select
  open_file                 ["Enter", "l", "Right"] Select a directory entry / show a file's path
  go_parent                 ["h", "Left", "Backspace"]
  go_up                     ["k", "Up"]
  go_down                   ["j", "Down"]
  go_to_top                 ["g", "Home"]
  go_to_bottom              ["G", "End"]
  sort_by_name              ["1"]
  sort_by_size              ["2"]
  sort_by_date              ["3"]                   Newest first
  sort_none                 ["0"]                   Directory order
  search                    ["s", "/"]              Case-insensitive substring search
  clear_search              ["Esc"]
  delete                    ["d", "Delete"]         Asks for confirmation
  rename                    ["r"]                   Accepts a full destination path
  refresh                   ["Ctrl+r", "F5"]
  keybind_help              ["?"]
  quit                      ["q"]

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x
    Special:   "space", "enter", "esc", "tab", "backspace", "delete", "home", "end", "f1".."f12"
"##;

fn print_config_help() {
    let help_text = r##"
dirview - Configuration Guide (dirview.toml)

=========================
 General Settings
=========================
[general]
  start_in_cwd               Select the working directory when started without PATH [default: false]
  notice_timeout_ms          How long notices stay visible (500..=60000) [default: 4000]

=========================
 Display Settings
=========================
[display]
  selection_marker           Show the selection icon in front of the selected row [default: true]
  borders                    Draw a border around the file list [default: true]
  border_shape               "square", "rounded", "double" or "thick"
  titles                     Show the directory path as the border title
  status_line                Show the status line at the bottom
  entry_padding              Padding (# chars) in front of each row (0-4)
  scroll_padding             Rows kept visible around the selection when scrolling

=========================
 Theme Configuration
=========================
[theme]
  selection_icon             Symbol in front of the selected row

Each sub-table supports fg/bg colors ("Red", "Blue", hex "#RRGGBB", or "default"):

[theme.selection]            Selected row
[theme.accent]               Borders
[theme.entry]                Rows
[theme.path]                 Directory path
[theme.status_line]          Status line
[theme.error]                Error notices
[theme.widget]               Dialogs: color.fg/bg, border.fg/bg, title.fg/bg
"##;

    println!("{}{}", help_text, KEYBINDS_TEXT);
}
