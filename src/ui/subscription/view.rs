// SPDX-License-Identifier: MPL-2.0
//! Purchase card and confirmation dialog rendering.

use super::component::{Card, Message};
use super::format;
use crate::domain::catalog::{FlavorId, ProductData};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::remote_image::{self, RemoteImages};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::{self, Font};
use iced::widget::{button, container, radio, text, Column, Row};
use iced::{Element, Length};

/// Feature bullets under "What's Included", with the emphasized one flagged.
const FEATURES: [(&str, bool); 5] = [
    ("subscription-feature-1", false),
    ("subscription-feature-2", true),
    ("subscription-feature-3", false),
    ("subscription-feature-4", false),
    ("subscription-feature-5", false),
];

pub(super) fn card<'a>(card: &'a Card, images: &'a RemoteImages, i18n: &'a I18n) -> Element<'a, Message> {
    let product = &card.product;

    let rating = format::rating(product.rating);
    let reviews = format::group_thousands(
        product.reviews,
        format::thousands_separator(i18n.current_locale()),
    );
    let rating_line = i18n.tr_with_args(
        "subscription-rating",
        &[("rating", rating.as_str()), ("reviews", reviews.as_str())],
    );

    let header = Column::new()
        .spacing(spacing::XS)
        .push(text(product.title.as_str()).size(typography::TITLE_LG))
        .push(
            text(rating_line)
                .size(typography::BODY)
                .color(palette::RATING_500),
        )
        .push(text(product.description.as_str()).size(typography::BODY));

    let recommended = container(text(i18n.tr("subscription-recommended")).size(typography::CAPTION))
        .width(Length::Fill)
        .padding(spacing::XXS)
        .align_x(Horizontal::Center)
        .style(styles::container::badge);

    let mut purchase = Column::new()
        .spacing(spacing::MD)
        .push(plan_choices(card))
        .push(section_title(i18n.tr("subscription-choose-flavor-1")))
        .push(flavor_grid(
            product,
            images,
            i18n,
            card.selection.flavor1(),
            Message::Flavor1Selected,
        ));

    if card.selection.is_double_plan() {
        purchase = purchase
            .push(section_title(i18n.tr("subscription-choose-flavor-2")))
            .push(flavor_grid(
                product,
                images,
                i18n,
                card.selection.flavor2(),
                Message::Flavor2Selected,
            ));
    }

    purchase = purchase.push(included(card, images, i18n)).push(
        button(
            container(text(i18n.tr("subscription-add-to-cart")).size(typography::TITLE_SM))
                .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .on_press(Message::AddToCart)
        .style(styles::button::primary),
    );

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .push(header)
        .push(
            Column::new().push(recommended).push(
                container(purchase)
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(styles::container::panel),
            ),
        )
        .into()
}

/// Dialog listing the plan and flavors that were added.
pub(super) fn confirmation<'a>(card: &'a Card, i18n: &'a I18n) -> Element<'a, Message> {
    let summary = card.selection.confirmation(&card.product);
    let unknown = i18n.tr("subscription-unknown-option");
    let label = |value: Option<&str>| value.map_or_else(|| unknown.clone(), str::to_string);

    let mut lines = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("confirmation-title")).size(typography::TITLE_MD))
        .push(summary_line(i18n.tr("confirmation-plan"), label(summary.plan)));

    for (position, flavor) in summary.flavors.iter().enumerate() {
        let key = if position == 0 {
            "confirmation-flavor-1"
        } else {
            "confirmation-flavor-2"
        };
        lines = lines.push(summary_line(i18n.tr(key), label(*flavor)));
    }

    lines = lines.push(
        container(
            button(text(i18n.tr("confirmation-close")))
                .on_press(Message::CloseConfirmation)
                .style(styles::button::primary),
        )
        .align_right(Length::Fill),
    );

    container(lines.spacing(spacing::SM))
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

fn summary_line<'a>(name: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(text(name).size(typography::BODY))
        .push(text(value).size(typography::BODY))
        .into()
}

fn section_title<'a>(title: String) -> Element<'a, Message> {
    text(title).size(typography::TITLE_SM).into()
}

/// Radio list of plans: current price, then the original price muted.
fn plan_choices(card: &Card) -> Element<'_, Message> {
    let product = &card.product;
    let selected = card
        .selection
        .plan()
        .and_then(|id| product.plans.iter().position(|plan| &plan.id == id));

    product
        .plans
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XS), |column, (index, plan)| {
            let id = plan.id.clone();
            let label = format!("{} – {}", plan.label, format::price(plan.price));
            let choice = radio(label, index, selected, move |_| Message::PlanChanged(id));

            column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(choice)
                    .push(
                        text(format::original_price(plan.original_price))
                            .size(typography::CAPTION)
                            .color(palette::GRAY_400),
                    ),
            )
        })
        .into()
}

/// Flavor tiles laid out in rows; the active one is highlighted and the
/// first one carries the "Best Seller" tag.
fn flavor_grid<'a>(
    product: &'a ProductData,
    images: &'a RemoteImages,
    i18n: &'a I18n,
    current: Option<&FlavorId>,
    on_select: fn(FlavorId) -> Message,
) -> Element<'a, Message> {
    let best_seller = i18n.tr("subscription-best-seller");

    product
        .flavors
        .chunks(sizing::FLAVOR_COLUMNS)
        .enumerate()
        .fold(Column::new().spacing(spacing::XS), |grid, (row_index, chunk)| {
            let row = chunk.iter().enumerate().fold(
                Row::new().spacing(spacing::XS),
                |row, (column_index, flavor)| {
                    let position = row_index * sizing::FLAVOR_COLUMNS + column_index;
                    let is_active = current == Some(&flavor.id);

                    let mut tile = Column::new()
                        .spacing(spacing::XXS)
                        .align_x(Horizontal::Center)
                        .push(remote_image::view(
                            images,
                            Some(flavor.image.as_str()),
                            flavor.label.clone(),
                            Length::Fixed(sizing::FLAVOR_IMAGE),
                            Length::Fixed(sizing::FLAVOR_IMAGE),
                        ))
                        .push(text(flavor.label.as_str()).size(typography::BODY));

                    if position == 0 {
                        tile = tile.push(
                            container(text(best_seller.clone()).size(typography::CAPTION))
                                .padding([0.0, spacing::XS])
                                .style(styles::container::badge),
                        );
                    }

                    let style = if is_active {
                        styles::button::selected
                    } else {
                        styles::button::unselected
                    };

                    row.push(
                        button(tile)
                            .width(Length::FillPortion(1))
                            .padding(spacing::XS)
                            .on_press(on_select(flavor.id.clone()))
                            .style(style),
                    )
                },
            );
            grid.push(row)
        })
        .into()
}

/// "What's Included": the recurring delivery and the one-time bonus.
fn included<'a>(card: &'a Card, images: &'a RemoteImages, i18n: &'a I18n) -> Element<'a, Message> {
    let product = &card.product;
    let selection = &card.selection;

    let mut recurring_ids = vec![selection.flavor1()];
    if selection.is_double_plan() {
        recurring_ids.push(selection.flavor2());
    }
    let recurring = recurring_ids
        .into_iter()
        .flatten()
        .fold(Row::new().spacing(spacing::XS), |row, id| {
            row.push(flavor_thumbnail(product, images, i18n, id))
        });

    let one_time = product
        .flavors
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, flavor| {
            row.push(flavor_thumbnail(product, images, i18n, &flavor.id))
        });

    let every_30_days = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("subscription-every-30-days")).size(typography::BODY))
        .push(recurring);

    let one_time_label = format!(
        "{} {}",
        i18n.tr("subscription-one-time"),
        i18n.tr("subscription-free")
    );
    let one_time_box = Column::new()
        .spacing(spacing::XS)
        .push(text(one_time_label).size(typography::BODY))
        .push(one_time);

    Column::new()
        .spacing(spacing::XS)
        .push(section_title(i18n.tr("subscription-included-title")))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(
                    container(every_30_days)
                        .padding(spacing::SM)
                        .width(Length::FillPortion(1))
                        .style(styles::container::included),
                )
                .push(
                    container(one_time_box)
                        .padding(spacing::SM)
                        .width(Length::FillPortion(1))
                        .style(styles::container::included),
                ),
        )
        .push(feature_list(i18n))
        .into()
}

fn feature_list<'a>(i18n: &I18n) -> Element<'a, Message> {
    let emphasized = Font {
        weight: font::Weight::Semibold,
        ..Font::DEFAULT
    };

    FEATURES
        .iter()
        .fold(
            Column::new().spacing(spacing::XXS).padding([spacing::XS, spacing::MD]),
            |list, &(key, strong)| {
                let line = text(format!("• {}", i18n.tr(key))).size(typography::BODY);
                let line = if strong {
                    line.font(emphasized)
                } else {
                    line.color(palette::GRAY_400)
                };
                list.push(line)
            },
        )
        .into()
}

fn flavor_thumbnail<'a>(
    product: &ProductData,
    images: &RemoteImages,
    i18n: &I18n,
    id: &FlavorId,
) -> Element<'a, Message> {
    let caption = product
        .flavor_label(id)
        .map_or_else(|| i18n.tr("subscription-unknown-option"), str::to_string);

    remote_image::view(
        images,
        product.flavor_image(id),
        caption,
        Length::Fixed(sizing::INCLUDED_IMAGE),
        Length::Fixed(sizing::INCLUDED_IMAGE),
    )
}
