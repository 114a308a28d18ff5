//! Internal library crate for dirview.
//!
//! The shipped application is the `dv` binary (`src/main.rs`).
//!
//! This library exists to share code between targets (binary, tests) and to keep modules organized.
//! The listing core lives in [core]; [app] and [ui] are the terminal front end on top of it.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;
