//! Key mapping and action dispatch for dirview
//!
//! Maps keys from the `[keys]` config table to [Action]s and parses key strings
//! like `"j"`, `"Ctrl+r"` or `"<c-r>"`.

use crate::config::Config;
use crate::core::SortKey;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Represents any action in the app: navigation, file, sort or system.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    Nav(NavAction),
    File(FileAction),
    Sort(SortKey),
    System(SystemAction),
}

/// Moving the selection or the selected directory
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NavAction {
    GoUp,
    GoDown,
    GoToTop,
    GoToBottom,
    GoParent,
}

/// Actions that call into the listing core
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FileAction {
    Browse,
    Open,
    Search,
    ClearSearch,
    Delete,
    Rename,
    Refresh,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SystemAction {
    Quit,
    KeyBindHelp,
}

/// Key + modifiers as used in the keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Mapping from [Key] to [Action], built from the config
pub struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    /// Builds the keymap from the config
    #[rustfmt::skip]
    pub fn from_config(config: &Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.keys();

        macro_rules! bind {
            ($keys:expr, $action:expr) => {
                bind($keys, $action, &mut map);
            };
        }

        use NavAction as N;
        use FileAction as F;
        use SystemAction as S;

        bind!(keys.go_up(),         Action::Nav(N::GoUp));
        bind!(keys.go_down(),       Action::Nav(N::GoDown));
        bind!(keys.go_to_top(),     Action::Nav(N::GoToTop));
        bind!(keys.go_to_bottom(),  Action::Nav(N::GoToBottom));
        bind!(keys.go_parent(),     Action::Nav(N::GoParent));

        bind!(keys.browse(),        Action::File(F::Browse));
        bind!(keys.open_file(),     Action::File(F::Open));
        bind!(keys.search(),        Action::File(F::Search));
        bind!(keys.clear_search(),  Action::File(F::ClearSearch));
        bind!(keys.delete(),        Action::File(F::Delete));
        bind!(keys.rename(),        Action::File(F::Rename));
        bind!(keys.refresh(),       Action::File(F::Refresh));

        bind!(keys.sort_by_name(),  Action::Sort(SortKey::ByName));
        bind!(keys.sort_by_size(),  Action::Sort(SortKey::BySize));
        bind!(keys.sort_by_date(),  Action::Sort(SortKey::ByDate));
        bind!(keys.sort_none(),     Action::Sort(SortKey::None));

        bind!(keys.keybind_help(),  Action::System(S::KeyBindHelp));
        bind!(keys.quit(),          Action::System(S::Quit));

        Keymap { map }
    }

    /// Looks up the action for a given key event.
    ///
    /// Shifted characters also match a binding without the shift modifier,
    /// since terminals report e.g. "G" and "?" with SHIFT set.
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(action) = self.map.get(&k).copied() {
            return Some(action);
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }
}

/// Parses one key binding string.
///
/// Accepts plain keys (`"j"`, `"Enter"`, `"F5"`), `+`-joined modifiers (`"Ctrl+r"`)
/// and the bracketed short form (`"<c-r>"`).
pub fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>') && s.len() > 2;
    let mut input = if is_bracketed {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    };

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    // A lone "+" is the key itself, not a separator
    if input == "+" {
        return Some(Key {
            code: KeyCode::Char('+'),
            modifiers,
        });
    }

    for part in input.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "home" => code = Some(KeyCode::Home),
            "end" => code = Some(KeyCode::End),
            "pageup" => code = Some(KeyCode::PageUp),
            "pagedown" => code = Some(KeyCode::PageDown),
            "enter" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "delete" | "del" => code = Some(KeyCode::Delete),
            "tab" => code = Some(KeyCode::Tab),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                let mut chars = part.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        let c = if modifiers.contains(KeyModifiers::SHIFT) {
                            c.to_ascii_uppercase()
                        } else {
                            c
                        };
                        code = Some(KeyCode::Char(c));
                    }
                    (None, _) => continue,
                    _ => {
                        let n = p_low.strip_prefix('f')?.parse::<u8>().ok()?;
                        code = Some(KeyCode::F(n));
                    }
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<Key, Action>) {
    for k in key_list {
        if let Some(key) = parse_key(k) {
            map.insert(key, action);
        }
    }
}
