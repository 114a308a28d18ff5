//! Configuration for dirview.
//!
//! Settings are read from `dirview.toml` (see [Config::default_path]) and cover the
//! presentation layer only: display, colors, key bindings and notice timing.
//! Nothing about a session (directory, sort key) is ever written back.
//!
//! - [load]: [Config] and [RawConfig](load::RawConfig), file loading and `--init` generation.
//! - [general]: general behavior ([General]).
//! - [display]: borders and list decoration ([Display]).
//! - [theme]: colors ([Theme]).
//! - [input]: key bindings ([Keys]).

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use display::{BorderShape, Display};
pub use general::{General, InternalGeneral};
pub use input::Keys;
pub use load::Config;
pub use theme::Theme;
