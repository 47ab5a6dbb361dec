// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 2. **Environment variable** (`WEBGRAB_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "WebGrab";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "WEBGRAB_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Must be called once at application startup, before any path resolution.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Resolution order: CLI argument, `WEBGRAB_CONFIG_DIR`, then the
/// platform-specific config directory with the app name appended:
/// - Linux: `~/.config/WebGrab/`
/// - macOS: `~/Library/Application Support/WebGrab/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\WebGrab\`
///
/// Returns `None` if no config directory can be determined.
pub fn get_config_dir() -> Option<PathBuf> {
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(value) = std::env::var(ENV_CONFIG_DIR) {
        if !value.is_empty() {
            return Some(PathBuf::from(value));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_app_name_by_default() {
        // Without CLI/env overrides the platform dir gets the app name appended.
        if std::env::var(ENV_CONFIG_DIR).is_ok() {
            return; // environment already overridden, nothing to assert
        }
        if let Some(dir) = get_config_dir() {
            assert!(dir.ends_with(APP_NAME) || dir.to_string_lossy().contains(APP_NAME));
        }
    }
}
