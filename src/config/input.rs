//! Key binding options for dirview
//!
//! This module defines the `[keys]` table of dirview.toml.
//! Each action takes a list of keys, e.g. `delete = ["d", "Delete"]`.

use serde::Deserialize;

/// Key bindings of all actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    browse: Vec<String>,
    open_file: Vec<String>,
    go_parent: Vec<String>,
    go_up: Vec<String>,
    go_down: Vec<String>,
    go_to_top: Vec<String>,
    go_to_bottom: Vec<String>,
    sort_by_name: Vec<String>,
    sort_by_size: Vec<String>,
    sort_by_date: Vec<String>,
    sort_none: Vec<String>,
    search: Vec<String>,
    clear_search: Vec<String>,
    delete: Vec<String>,
    rename: Vec<String>,
    refresh: Vec<String>,
    keybind_help: Vec<String>,
    quit: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    browse,
    open_file,
    go_parent,
    go_up,
    go_down,
    go_to_top,
    go_to_bottom,
    sort_by_name,
    sort_by_size,
    sort_by_date,
    sort_none,
    search,
    clear_search,
    delete,
    rename,
    refresh,
    keybind_help,
    quit,
);

impl Default for Keys {
    fn default() -> Self {
        Keys {
            browse: vec!["b".into()],
            open_file: vec!["Enter".into(), "l".into(), "Right".into()],
            go_parent: vec!["h".into(), "Left".into(), "Backspace".into()],
            go_up: vec!["k".into(), "Up".into()],
            go_down: vec!["j".into(), "Down".into()],
            go_to_top: vec!["g".into(), "Home".into()],
            go_to_bottom: vec!["G".into(), "End".into()],

            sort_by_name: vec!["1".into()],
            sort_by_size: vec!["2".into()],
            sort_by_date: vec!["3".into()],
            sort_none: vec!["0".into()],

            search: vec!["s".into(), "/".into()],
            clear_search: vec!["Esc".into()],

            delete: vec!["d".into(), "Delete".into()],
            rename: vec!["r".into()],
            refresh: vec!["Ctrl+r".into(), "F5".into()],

            keybind_help: vec!["?".into()],
            quit: vec!["q".into()],
        }
    }
}
