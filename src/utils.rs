//! Miscellaneous utility functions for dirview.
//!
//! - [helpers]: color parsing, home directory shortening/expansion, input path resolution.
//! - [cli]: command-line argument handling for the `dv` binary.
//! - [logging]: opt-in log output through `env_logger`.

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{
    DEFAULT_NOTICE_TIMEOUT_MS, MAX_NOTICE_TIMEOUT_MS, MIN_NOTICE_TIMEOUT_MS, clamp_notice_timeout,
    expand_home_path, get_home, parse_color, readable_path, resolve_input_path, shorten_home_path,
};
