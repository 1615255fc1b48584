// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::config::Endpoints;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::{gallery, subscription};
use iced::{
    alignment::Vertical,
    widget::{button, center, opaque, Column, Container, Row, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub gallery: Option<&'a gallery::State>,
    pub subscription: Option<&'a subscription::State>,
    pub theme_mode: ThemeMode,
    pub endpoints: &'a Endpoints,
    pub warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        settings_open: ctx.screen == Screen::Settings,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Product => view_product(ctx.gallery, ctx.subscription, ctx.i18n),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
            endpoints: ctx.endpoints,
        })
        .map(Message::Settings),
    };

    let mut column = Column::new().push(navbar_view);
    if let Some(key) = ctx.warning {
        column = column.push(view_warning(ctx.i18n, key));
    }
    column = column.push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let page: Element<'_, Message> = column.width(Length::Fill).height(Length::Fill).into();

    let dialog = match ctx.screen {
        Screen::Product => ctx.subscription.and_then(|selector| {
            selector
                .modal(subscription::ViewContext { i18n: ctx.i18n })
                .map(|modal| modal.map(Message::Subscription))
        }),
        Screen::Settings => None,
    };

    match dialog {
        Some(dialog) => with_dialog(page, dialog),
        None => page,
    }
}

fn view_product<'a>(
    gallery: Option<&'a gallery::State>,
    subscription: Option<&'a subscription::State>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let left: Element<'a, Message> = match gallery {
        Some(state) => state
            .view(gallery::ViewContext { i18n })
            .map(Message::Gallery),
        None => Column::new().into(),
    };
    let right: Element<'a, Message> = match subscription {
        Some(state) => state
            .view(subscription::ViewContext { i18n })
            .map(Message::Subscription),
        None => Column::new().into(),
    };

    let columns = Row::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .push(Container::new(left).width(Length::FillPortion(3)))
        .push(Container::new(right).width(Length::FillPortion(2)));

    iced::widget::scrollable(columns).height(Length::Fill).into()
}

fn view_warning<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr(key))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(button(Text::new(i18n.tr("notification-dismiss"))).on_press(Message::DismissWarning));

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::warning)
        .into()
}

/// Places `dialog` over a dimmed, non-interactive copy of `page`.
fn with_dialog<'a>(page: Element<'a, Message>, dialog: Element<'a, Message>) -> Element<'a, Message> {
    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(opaque(
            center(opaque(dialog)).style(styles::container::backdrop),
        ))
        .into()
}
