//! Configuration constants and utilities for shellbridge

use tracing_subscriber::EnvFilter;

/// Default location of the persisted Desired-Command Records
pub const DEFAULT_STATE_PATH: &str = "~/.shellbridge/commands.json";

/// Environment variable name for overriding the state path
pub const STATE_PATH_ENV_VAR: &str = "SHELLBRIDGE_STATE_PATH";

/// Environment variable name for the log level
pub const LOG_LEVEL_ENV_VAR: &str = "SHELLBRIDGE_LOG_LEVEL";

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Get the state file path, checking environment variable first, then falling back to default.
/// A leading `~` is expanded to the home directory.
pub fn get_state_path() -> String {
    let raw = std::env::var_os(STATE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_STATE_PATH.to_string());
    expand_path(&raw)
}

pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}

/// Log filter for the binary. `verbose` forces debug, otherwise the filter is read
/// from `SHELLBRIDGE_LOG_LEVEL` (any `EnvFilter` directive) and defaults to `error`.
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("error"))
}
