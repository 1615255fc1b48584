// SPDX-License-Identifier: MPL-2.0
use shopfront::config::{self, Config, EndpointOverrides};
use shopfront::i18n::fluent::I18n;
use shopfront::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = loaded.clone();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("subscription-add-to-cart"), "Ajouter au panier");
}

#[test]
fn config_round_trips_through_override_dir() {
    let dir = tempdir().expect("temp dir");
    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Dark;
    cfg.endpoints.gallery_url = Some("http://shop.test/images".into());
    cfg.gallery.thumbnail_limit = Some(4);

    config::save_with_override(&cfg, Some(dir.path().to_path_buf())).expect("save");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.thumbnail_limit().value(), 4);
}

#[test]
fn endpoints_follow_cli_env_config_default_precedence() {
    let mut cfg = Config::default();
    cfg.endpoints.gallery_url = Some("http://config.test/images".into());
    cfg.endpoints.subscription_url = Some("http://config.test/subscription".into());

    let cli = EndpointOverrides {
        gallery_url: Some("http://cli.test/images".into()),
        subscription_url: None,
    };
    let env = |name: &str| {
        (name == config::ENV_SUBSCRIPTION_URL).then(|| "http://env.test/subscription".to_string())
    };

    let endpoints = config::resolve_endpoints_with(&cli, &cfg, env);
    assert_eq!(endpoints.gallery.as_str(), "http://cli.test/images");
    assert_eq!(endpoints.subscription.as_str(), "http://env.test/subscription");

    let defaults = config::resolve_endpoints_with(&EndpointOverrides::default(), &Config::default(), |_| None);
    assert_eq!(defaults.gallery.as_str(), config::DEFAULT_GALLERY_URL);
    assert_eq!(defaults.subscription.as_str(), config::DEFAULT_SUBSCRIPTION_URL);
}
