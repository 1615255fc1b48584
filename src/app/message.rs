// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::settings;
use crate::ui::subscription;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Subscription(subscription::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    /// Hide the settings warning strip.
    DismissWarning,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Gallery endpoint override. Takes precedence over
    /// `SHOPFRONT_GALLERY_URL` and the config file.
    pub gallery_url: Option<String>,
    /// Subscription endpoint override. Takes precedence over
    /// `SHOPFRONT_SUBSCRIPTION_URL` and the config file.
    pub subscription_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SHOPFRONT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
