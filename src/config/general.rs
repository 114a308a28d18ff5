//! The general configuration settings for dirview.
//!
//! This module defines the [General] struct for deserializing the `[general]` table
//! of dirview.toml and the [InternalGeneral] struct used at runtime.

use crate::utils::{DEFAULT_NOTICE_TIMEOUT_MS, clamp_notice_timeout};

use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    start_in_cwd: bool,
    #[serde(default = "default_notice_timeout")]
    notice_timeout_ms: u64,
}

impl Default for General {
    fn default() -> Self {
        General {
            start_in_cwd: false,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    start_in_cwd: bool,
    notice_timeout: Duration,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        Self {
            start_in_cwd: g.start_in_cwd,
            notice_timeout: Duration::from_millis(clamp_notice_timeout(g.notice_timeout_ms)),
        }
    }
}

impl InternalGeneral {
    /// Whether `dv` without a path argument starts with the working directory selected.
    #[inline]
    pub fn start_in_cwd(&self) -> bool {
        self.start_in_cwd
    }

    /// How long a notice stays on screen when no key dismisses it.
    #[inline]
    pub fn notice_timeout(&self) -> Duration {
        self.notice_timeout
    }
}

/// Helper function for default notice_timeout_ms
fn default_notice_timeout() -> u64 {
    DEFAULT_NOTICE_TIMEOUT_MS
}
