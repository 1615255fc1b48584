// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating fetch state, carousel and image downloads.

use super::carousel::Carousel;
use crate::domain::catalog::{ImageRecord, ThumbnailLimit};
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::infrastructure::http::{self, Endpoint};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::lifecycle::{FetchGuard, MountId, Phase};
use crate::ui::remote_image::{self, RemoteImages};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column, Row, Stack};
use iced::{Element, Length, Task};

/// Messages handled by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        mount: MountId,
        result: Result<Vec<ImageRecord>, FetchError>,
    },
    Previous,
    Next,
    Select(usize),
    Image(remote_image::Loaded),
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug)]
pub struct State {
    mount: MountId,
    endpoint: Endpoint,
    phase: Phase<Carousel>,
    thumbnail_limit: ThumbnailLimit,
    images: RemoteImages,
    fetch: Option<FetchGuard>,
}

impl State {
    /// Creates the gallery and starts its one-shot fetch.
    pub fn mount(endpoint: Endpoint, thumbnail_limit: ThumbnailLimit) -> (Self, Task<Message>) {
        let mount = MountId::next();
        tracing::debug!(%mount, %endpoint, "fetching gallery images");

        let request = Task::perform(
            http::fetch_json::<Vec<ImageRecord>>(endpoint.clone()),
            move |result| Message::Loaded { mount, result },
        );
        let (task, guard) = FetchGuard::spawn(request);

        let state = Self {
            mount,
            endpoint,
            phase: Phase::Loading,
            thumbnail_limit,
            images: RemoteImages::new(),
            fetch: Some(guard),
        };
        (state, task)
    }

    #[must_use]
    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    #[must_use]
    pub fn phase(&self) -> &Phase<Carousel> {
        &self.phase
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel> {
        self.phase.ready()
    }

    #[must_use]
    pub fn thumbnail_limit(&self) -> ThumbnailLimit {
        self.thumbnail_limit
    }

    /// i18n key of the text shown instead of the carousel, if any.
    #[must_use]
    pub fn status_key(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Loading => Some("gallery-loading"),
            Phase::Failed => Some("gallery-load-error"),
            Phase::Ready(_) => None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded { mount, result } => self.on_loaded(mount, result),
            Message::Previous => {
                if let Some(carousel) = self.phase.ready_mut() {
                    carousel.go_to_previous();
                }
                Task::none()
            }
            Message::Next => {
                if let Some(carousel) = self.phase.ready_mut() {
                    carousel.go_to_next();
                }
                Task::none()
            }
            Message::Select(index) => {
                if let Some(carousel) = self.phase.ready_mut() {
                    if !carousel.select(index) {
                        tracing::debug!(index, "ignoring out-of-range image selection");
                    }
                }
                Task::none()
            }
            Message::Image(loaded) => {
                self.images.apply(loaded);
                Task::none()
            }
        }
    }

    fn on_loaded(
        &mut self,
        mount: MountId,
        result: Result<Vec<ImageRecord>, FetchError>,
    ) -> Task<Message> {
        if mount != self.mount || !self.phase.is_loading() {
            tracing::debug!(%mount, current = %self.mount, "discarding stale gallery result");
            return Task::none();
        }
        self.fetch = None;

        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "gallery images received");
                let carousel = Carousel::new(records);
                let downloads = self
                    .images
                    .request(carousel.images().iter().map(|record| record.url.as_str()))
                    .map(Message::Image);
                self.phase = Phase::Ready(carousel);
                downloads
            }
            Err(err) => {
                tracing::error!(endpoint = %self.endpoint, "failed to load gallery: {err}");
                self.phase = Phase::Failed;
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let carousel = match (&self.phase, self.status_key()) {
            (Phase::Ready(carousel), _) => carousel,
            (_, key) => {
                let status = key.map(|key| i18n.tr(key)).unwrap_or_default();
                return container(text(status).size(typography::BODY))
                    .center_x(Length::Fill)
                    .padding(spacing::XL)
                    .into();
            }
        };

        let mut content = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .push(self.main_image(carousel, i18n));

        if !carousel.is_empty() {
            let position = carousel.current_index() + 1;
            let current = position.to_string();
            let total = carousel.len().to_string();
            let counter = i18n.tr_with_args(
                "gallery-position",
                &[("current", current.as_str()), ("total", total.as_str())],
            );
            content = content
                .push(text(alt_text(i18n, position)).size(typography::BODY))
                .push(text(counter).size(typography::CAPTION))
                .push(dots(carousel))
                .push(self.thumbnail_strip(carousel, i18n));
        }

        content.into()
    }

    fn main_image<'a>(&'a self, carousel: &'a Carousel, i18n: &I18n) -> Element<'a, Message> {
        let caption = alt_text(i18n, carousel.current_index() + 1);
        let picture = remote_image::view(
            &self.images,
            carousel.current().map(|record| record.url.as_str()),
            caption,
            Length::Fill,
            Length::Fixed(sizing::MAIN_IMAGE_HEIGHT),
        );

        if carousel.is_empty() {
            return picture;
        }

        let previous = button(text("‹").size(typography::TITLE_MD))
            .on_press(Message::Previous)
            .width(Length::Fixed(sizing::NAV_BUTTON))
            .height(Length::Fixed(sizing::NAV_BUTTON))
            .style(styles::button::overlay);
        let next = button(text("›").size(typography::TITLE_MD))
            .on_press(Message::Next)
            .width(Length::Fixed(sizing::NAV_BUTTON))
            .height(Length::Fixed(sizing::NAV_BUTTON))
            .style(styles::button::overlay);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT))
            .push(picture)
            .push(
                container(previous)
                    .padding(spacing::XS)
                    .align_left(Length::Fill)
                    .center_y(Length::Fill),
            )
            .push(
                container(next)
                    .padding(spacing::XS)
                    .align_right(Length::Fill)
                    .center_y(Length::Fill),
            )
            .into()
    }

    fn thumbnail_strip<'a>(&'a self, carousel: &'a Carousel, i18n: &I18n) -> Element<'a, Message> {
        let strip = carousel
            .thumbnails(self.thumbnail_limit)
            .fold(Row::new().spacing(spacing::XS), |row, (index, record)| {
                let number = (index + 1).to_string();
                let caption =
                    i18n.tr_with_args("gallery-thumbnail-alt", &[("number", number.as_str())]);
                let thumb = remote_image::view(
                    &self.images,
                    Some(record.url.as_str()),
                    caption,
                    Length::Fixed(sizing::THUMBNAIL),
                    Length::Fixed(sizing::THUMBNAIL),
                );
                row.push(
                    button(thumb)
                        .padding(spacing::XXS)
                        .on_press(Message::Select(index))
                        .style(styles::button::thumbnail(carousel.is_current(index))),
                )
            });

        strip.into()
    }
}

/// One dot per image; the current one is filled.
fn dots<'a>(carousel: &Carousel) -> Element<'a, Message> {
    (0..carousel.len())
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            row.push(
                button(text(""))
                    .width(Length::Fixed(sizing::DOT))
                    .height(Length::Fixed(sizing::DOT))
                    .padding(0)
                    .on_press(Message::Select(index))
                    .style(styles::button::dot(carousel.is_current(index))),
            )
        })
        .into()
}

fn alt_text(i18n: &I18n, number: usize) -> String {
    let number = number.to_string();
    i18n.tr_with_args("gallery-image-alt", &[("number", number.as_str())])
}
