// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the product page and
//! the settings screen.
//!
//! The `App` struct owns localization, the loaded configuration and the
//! resolved endpoints. The gallery and the subscription selector exist only
//! while the product screen is shown: leaving it drops both components, which
//! aborts their in-flight fetches, and coming back mounts fresh ones.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config, EndpointOverrides, Endpoints};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::{gallery, navbar, settings, subscription as selector};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

const CONFIG_SAVE_ERROR_KEY: &str = "notification-config-save-error";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// `--config-dir` override used for every load and save.
    config_dir: Option<PathBuf>,
    endpoints: Endpoints,
    gallery: Option<gallery::State>,
    subscription: Option<selector::State>,
    theme_mode: ThemeMode,
    /// i18n key of the warning shown above the page.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("endpoints", &self.endpoints)
            .field("product_mounted", &self.is_product_mounted())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and localization, resolves endpoints and mounts
    /// the product page.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let overrides = EndpointOverrides {
            gallery_url: flags.gallery_url,
            subscription_url: flags.subscription_url,
        };
        let endpoints = config::resolve_endpoints(&overrides, &config);
        tracing::info!(
            gallery = %endpoints.gallery,
            subscription = %endpoints.subscription,
            locale = %i18n.current_locale(),
            "starting product page"
        );

        let mut app = App {
            i18n,
            screen: Screen::Product,
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            endpoints,
            gallery: None,
            subscription: None,
            warning: config_warning,
        };
        let task = app.mount_product();
        (app, task)
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    #[must_use]
    pub fn gallery(&self) -> Option<&gallery::State> {
        self.gallery.as_ref()
    }

    #[must_use]
    pub fn subscription_selector(&self) -> Option<&selector::State> {
        self.subscription.as_ref()
    }

    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    #[must_use]
    pub fn is_product_mounted(&self) -> bool {
        self.gallery.is_some() && self.subscription.is_some()
    }

    fn is_dialog_open(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(selector::State::is_confirmation_open)
    }

    /// Mounts both product components with their one-shot fetches.
    fn mount_product(&mut self) -> Task<Message> {
        let (gallery, gallery_task) = gallery::State::mount(
            self.endpoints.gallery.clone(),
            self.config.thumbnail_limit(),
        );
        let (subscription, subscription_task) =
            selector::State::mount(self.endpoints.subscription.clone());

        self.gallery = Some(gallery);
        self.subscription = Some(subscription);

        Task::batch([
            gallery_task.map(Message::Gallery),
            subscription_task.map(Message::Subscription),
        ])
    }

    /// Drops both product components, aborting pending fetches.
    fn unmount_product(&mut self) {
        self.gallery = None;
        self.subscription = None;
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let product_title = self
            .subscription
            .as_ref()
            .and_then(selector::State::card)
            .map(|card| card.product.title.as_str())
            .filter(|title| !title.is_empty());

        match (self.screen, product_title) {
            (Screen::Product, Some(title)) => format!("{title} - {app_name}"),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen, self.is_dialog_open())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => match self.gallery.as_mut() {
                Some(gallery) => gallery.update(gallery_message).map(Message::Gallery),
                None => {
                    tracing::debug!("gallery message received while unmounted");
                    Task::none()
                }
            },
            Message::Subscription(selector_message) => match self.subscription.as_mut() {
                Some(selector) => selector
                    .update(selector_message)
                    .map(Message::Subscription),
                None => {
                    tracing::debug!("subscription message received while unmounted");
                    Task::none()
                }
            },
            Message::Navbar(navbar_message) => match navbar::update(navbar_message) {
                navbar::Event::OpenProduct => self.show_product(),
                navbar::Event::OpenSettings => self.show_settings(),
            },
            Message::Settings(settings_message) => self.handle_settings(settings_message),
            Message::DismissWarning => {
                self.warning = None;
                Task::none()
            }
        }
    }

    fn show_product(&mut self) -> Task<Message> {
        if self.screen == Screen::Product {
            return Task::none();
        }
        self.screen = Screen::Product;
        self.mount_product()
    }

    fn show_settings(&mut self) -> Task<Message> {
        if self.screen != Screen::Settings {
            self.screen = Screen::Settings;
            self.unmount_product();
        }
        Task::none()
    }

    fn handle_settings(&mut self, message: settings::Message) -> Task<Message> {
        match settings::update(message) {
            settings::Event::LanguageChanged(locale) => {
                self.i18n.set_locale(locale.clone());
                self.config.general.language = Some(locale.to_string());
                self.persist_config();
                Task::none()
            }
            settings::Event::ThemeModeChanged(mode) => {
                self.theme_mode = mode;
                self.config.general.theme_mode = mode;
                self.persist_config();
                Task::none()
            }
            settings::Event::BackToProduct => self.show_product(),
        }
    }

    fn persist_config(&mut self) {
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!("failed to save settings: {err}");
            self.warning = Some(CONFIG_SAVE_ERROR_KEY.to_string());
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            gallery: self.gallery.as_ref(),
            subscription: self.subscription.as_ref(),
            theme_mode: self.theme_mode,
            endpoints: &self.endpoints,
            warning: self.warning.as_deref(),
        })
    }
}
