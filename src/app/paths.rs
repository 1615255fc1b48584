// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions
//!    (the `--config-dir` CLI argument, or a temp dir in tests)
//! 2. **Environment variable** (`SHOPFRONT_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! Overrides are passed explicitly rather than stored globally.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "Shopfront";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SHOPFRONT_CONFIG_DIR";

/// Returns the application config directory path with an optional override.
///
/// Without an override or `SHOPFRONT_CONFIG_DIR`, this is the platform
/// default:
/// - Linux: `~/.config/Shopfront/`
/// - macOS: `~/Library/Application Support/Shopfront/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Shopfront\`
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_config_dir(override_path, std::env::var(ENV_CONFIG_DIR).ok())
}

fn resolve_config_dir(override_path: Option<PathBuf>, env_value: Option<String>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(env_path) = env_value.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(env_path));
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
    fn explicit_override_wins() {
        let path = PathBuf::from("/tmp/override");
        let resolved = resolve_config_dir(Some(path.clone()), Some("/tmp/env".into()));
        assert_eq!(resolved, Some(path));
    }

    #[test]
    fn environment_used_without_override() {
        let resolved = resolve_config_dir(None, Some("/tmp/env".into()));
        assert_eq!(resolved, Some(PathBuf::from("/tmp/env")));
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let resolved = resolve_config_dir(None, Some(String::new()));
        if let Some(path) = resolved {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
