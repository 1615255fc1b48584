// SPDX-License-Identifier: MPL-2.0
//! Navigation bar switching between the product page and the settings screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub settings_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenProduct,
    OpenSettings,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OpenProduct,
    OpenSettings,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenProduct => Event::OpenProduct,
        Message::OpenSettings => Event::OpenSettings,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let product = tab(
        ctx.i18n.tr("navbar-product"),
        !ctx.settings_open,
        Message::OpenProduct,
    );
    let settings = tab(
        ctx.i18n.tr("navbar-settings"),
        ctx.settings_open,
        Message::OpenSettings,
    );

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(product)
        .push(settings);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn tab<'a>(label: String, active: bool, message: Message) -> Element<'a, Message> {
    let tab = button(Text::new(label)).padding([spacing::XS, spacing::SM]);

    // The active tab has nowhere to go.
    if active {
        tab.style(tab_style(true)).into()
    } else {
        tab.on_press(message).style(tab_style(false)).into()
    }
}

fn tab_style(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();

        let background = match (active, status) {
            (true, _) => Some(palette.primary.strong.color.into()),
            (false, button::Status::Hovered) => Some(palette.background.strong.color.into()),
            (false, button::Status::Pressed) => Some(palette.primary.weak.color.into()),
            _ => None,
        };
        let text_color = if active {
            palette.primary.strong.text
        } else {
            palette.background.base.text
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
