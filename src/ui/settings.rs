// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display language, theme mode and the active data sources.

use crate::config::Endpoints;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, container, scrollable, Column, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub endpoints: &'a Endpoints,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    BackToProduct,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
    BackToProduct,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeChanged(mode),
        Message::BackToProduct => Event::BackToProduct,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let title = Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::SETTINGS_WIDTH))
        .push(title)
        .push(language_section(i18n))
        .push(theme_section(i18n, ctx.theme_mode))
        .push(endpoints_section(i18n, ctx.endpoints))
        .push(
            button(Text::new(i18n.tr("settings-back")))
                .on_press(Message::BackToProduct)
                .style(styles::button::primary),
        );

    scrollable(
        container(
            container(content)
                .padding(spacing::LG)
                .style(styles::container::panel),
        )
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill),
    )
    .into()
}

fn language_section(i18n: &I18n) -> Element<'_, Message> {
    let choices = i18n
        .available_locales
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, locale| {
            let translated = i18n.tr(&format!("language-name-{locale}"));
            let label = if translated.starts_with("MISSING:") {
                locale.to_string()
            } else {
                format!("{translated} ({locale})")
            };

            let style = if i18n.current_locale() == locale {
                styles::button::selected
            } else {
                styles::button::unselected
            };

            row.push(
                button(Text::new(label))
                    .on_press(Message::LanguageSelected(locale.clone()))
                    .style(style),
            )
        });

    section(i18n.tr("settings-language"), choices.into())
}

fn theme_section(i18n: &I18n, current: ThemeMode) -> Element<'_, Message> {
    let choices = ThemeMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, mode| {
            let style = if *mode == current {
                styles::button::selected
            } else {
                styles::button::unselected
            };

            row.push(
                button(Text::new(i18n.tr(mode.i18n_key())))
                    .on_press(Message::ThemeModeSelected(*mode))
                    .style(style),
            )
        });

    section(i18n.tr("settings-theme"), choices.into())
}

fn endpoints_section<'a>(i18n: &'a I18n, endpoints: &'a Endpoints) -> Element<'a, Message> {
    let entry = |key: &str, value: &'a str| {
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr(key)).size(typography::CAPTION))
            .push(Text::new(value).size(typography::BODY))
    };

    let list = Column::new()
        .spacing(spacing::SM)
        .push(entry("settings-gallery-endpoint", endpoints.gallery.as_str()))
        .push(entry(
            "settings-subscription-endpoint",
            endpoints.subscription.as_str(),
        ));

    section(i18n.tr("settings-endpoints"), list.into())
}

fn section<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(body)
        .into()
}
