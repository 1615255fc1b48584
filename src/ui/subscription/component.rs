// SPDX-License-Identifier: MPL-2.0
//! Subscription selector encapsulating fetch state, selection and the
//! confirmation dialog.

use super::selection::Selection;
use super::view;
use crate::domain::catalog::{FlavorId, PlanId, ProductData};
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::infrastructure::http::{self, Endpoint};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::lifecycle::{FetchGuard, MountId, Phase};
use crate::ui::remote_image::{self, RemoteImages};
use iced::widget::{container, text};
use iced::{Element, Length, Task};

/// Messages handled by the subscription selector.
#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        mount: MountId,
        result: Result<ProductData, FetchError>,
    },
    PlanChanged(PlanId),
    Flavor1Selected(FlavorId),
    Flavor2Selected(FlavorId),
    AddToCart,
    CloseConfirmation,
    Image(remote_image::Loaded),
}

/// Contextual data needed to render the selector.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Fetched product together with the shopper's choices.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub product: ProductData,
    pub selection: Selection,
}

impl Card {
    #[must_use]
    pub fn new(product: ProductData) -> Self {
        let selection = Selection::for_product(&product);
        Self { product, selection }
    }
}

#[derive(Debug)]
pub struct State {
    mount: MountId,
    endpoint: Endpoint,
    phase: Phase<Card>,
    images: RemoteImages,
    fetch: Option<FetchGuard>,
}

impl State {
    /// Creates the selector and starts its one-shot fetch.
    pub fn mount(endpoint: Endpoint) -> (Self, Task<Message>) {
        let mount = MountId::next();
        tracing::debug!(%mount, %endpoint, "fetching product data");

        let request = Task::perform(
            http::fetch_json::<ProductData>(endpoint.clone()),
            move |result| Message::Loaded { mount, result },
        );
        let (task, guard) = FetchGuard::spawn(request);

        let state = Self {
            mount,
            endpoint,
            phase: Phase::Loading,
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
    pub fn phase(&self) -> &Phase<Card> {
        &self.phase
    }

    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        self.phase.ready()
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.card().map(|card| &card.selection)
    }

    #[must_use]
    pub fn is_confirmation_open(&self) -> bool {
        self.selection().is_some_and(Selection::show_confirmation)
    }

    /// i18n key of the text shown instead of the card, if any.
    #[must_use]
    pub fn status_key(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Loading => Some("subscription-loading"),
            Phase::Failed => Some("subscription-load-error"),
            Phase::Ready(_) => None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded { mount, result } => return self.on_loaded(mount, result),
            Message::Image(loaded) => self.images.apply(loaded),
            Message::PlanChanged(plan) => {
                if let Some(card) = self.phase.ready_mut() {
                    card.selection.change_plan(plan, &card.product);
                }
            }
            Message::Flavor1Selected(flavor) => {
                if let Some(card) = self.phase.ready_mut() {
                    card.selection.set_flavor1(flavor);
                }
            }
            Message::Flavor2Selected(flavor) => {
                if let Some(card) = self.phase.ready_mut() {
                    card.selection.set_flavor2(flavor);
                }
            }
            Message::AddToCart => {
                if let Some(card) = self.phase.ready_mut() {
                    card.selection.submit();
                }
            }
            Message::CloseConfirmation => {
                if let Some(card) = self.phase.ready_mut() {
                    card.selection.close_confirmation();
                }
            }
        }
        Task::none()
    }

    fn on_loaded(
        &mut self,
        mount: MountId,
        result: Result<ProductData, FetchError>,
    ) -> Task<Message> {
        if mount != self.mount || !self.phase.is_loading() {
            tracing::debug!(%mount, current = %self.mount, "discarding stale product result");
            return Task::none();
        }
        self.fetch = None;

        match result {
            Ok(product) => {
                tracing::debug!(
                    plans = product.plans.len(),
                    flavors = product.flavors.len(),
                    "product data received"
                );
                let downloads = self
                    .images
                    .request(product.flavors.iter().map(|flavor| flavor.image.as_str()))
                    .map(Message::Image);
                self.phase = Phase::Ready(Card::new(product));
                downloads
            }
            Err(err) => {
                tracing::error!(endpoint = %self.endpoint, "failed to load product data: {err}");
                self.phase = Phase::Failed;
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        match &self.phase {
            Phase::Ready(card) => view::card(card, &self.images, ctx.i18n),
            _ => {
                let status = self
                    .status_key()
                    .map(|key| ctx.i18n.tr(key))
                    .unwrap_or_default();
                container(text(status).size(typography::BODY))
                    .center_x(Length::Fill)
                    .padding(spacing::XL)
                    .into()
            }
        }
    }

    /// Confirmation dialog content while it is open.
    pub fn modal<'a>(&'a self, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
        let card = self.card()?;
        card.selection
            .show_confirmation()
            .then(|| view::confirmation(card, ctx.i18n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted() -> State {
        let (state, _task) = State::mount(Endpoint::new("http://127.0.0.1:9/subscription"));
        state
    }

    fn product() -> ProductData {
        serde_json::from_str(
            r#"{
                "title": "Daily Greens",
                "rating": 4.6,
                "reviews": 1284,
                "plans": [
                    {"id": "single", "label": "Single Flavor", "price": 49.5, "originalPrice": 60},
                    {"id": "double", "label": "Double Flavor", "price": 89, "originalPrice": 120}
                ],
                "flavors": [
                    {"id": "f0", "label": "Mango", "image": "http://127.0.0.1:9/f0.png"},
                    {"id": "f1", "label": "Berry", "image": "http://127.0.0.1:9/f1.png"},
                    {"id": "f2", "label": "Lemon", "image": ""}
                ]
            }"#,
        )
        .expect("valid product json")
    }

    fn loaded() -> State {
        let mut state = mounted();
        let mount = state.mount_id();
        let _ = state.update(Message::Loaded {
            mount,
            result: Ok(product()),
        });
        state
    }

    #[test]
    fn starts_loading() {
        let state = mounted();
        assert!(state.phase().is_loading());
        assert_eq!(state.status_key(), Some("subscription-loading"));
        assert!(!state.is_confirmation_open());
    }

    #[test]
    fn success_seeds_default_selection() {
        let state = loaded();
        let selection = state.selection().expect("ready");
        assert_eq!(selection.plan(), Some(&PlanId::single()));
        assert_eq!(selection.flavor1(), Some(&FlavorId::new("f0")));
        assert_eq!(selection.flavor2(), Some(&FlavorId::new("f1")));
    }

    #[test]
    fn failure_shows_only_the_error_message() {
        let mut state = mounted();
        let mount = state.mount_id();
        let _ = state.update(Message::Loaded {
            mount,
            result: Err(FetchError::Decode("expected value".into())),
        });
        assert!(state.phase().is_failed());
        assert_eq!(state.status_key(), Some("subscription-load-error"));
        assert!(state.card().is_none());
    }

    #[test]
    fn stale_result_is_ignored() {
        let mut state = mounted();
        let _ = state.update(Message::Loaded {
            mount: MountId::next(),
            result: Ok(product()),
        });
        assert!(state.phase().is_loading());
    }

    #[test]
    fn add_to_cart_confirms_double_plan_choices() {
        let mut state = loaded();
        let _ = state.update(Message::PlanChanged(PlanId::double()));
        let _ = state.update(Message::Flavor1Selected(FlavorId::new("f2")));
        let _ = state.update(Message::Flavor2Selected(FlavorId::new("f0")));
        let _ = state.update(Message::AddToCart);

        assert!(state.is_confirmation_open());
        let card = state.card().expect("ready");
        let confirmation = card.selection.confirmation(&card.product);
        assert_eq!(confirmation.plan, Some("Double Flavor"));
        assert_eq!(confirmation.flavors, vec![Some("Lemon"), Some("Mango")]);

        let _ = state.update(Message::CloseConfirmation);
        assert!(!state.is_confirmation_open());
    }

    #[test]
    fn switching_to_single_clears_second_flavor() {
        let mut state = loaded();
        let _ = state.update(Message::PlanChanged(PlanId::double()));
        let _ = state.update(Message::PlanChanged(PlanId::single()));
        assert_eq!(state.selection().and_then(Selection::flavor2), None);
    }

    #[test]
    fn messages_before_load_are_ignored() {
        let mut state = mounted();
        let _ = state.update(Message::AddToCart);
        assert!(!state.is_confirmation_open());
        assert!(state.phase().is_loading());
    }

    #[test]
    fn modal_only_exists_while_open() {
        let i18n = I18n::default();
        let mut state = loaded();
        assert!(state.modal(ViewContext { i18n: &i18n }).is_none());
        let _ = state.update(Message::AddToCart);
        assert!(state.modal(ViewContext { i18n: &i18n }).is_some());
    }

    #[test]
    fn views_render_with_sparse_product() {
        let i18n = I18n::default();
        let mut state = mounted();
        let mount = state.mount_id();
        let sparse: ProductData =
            serde_json::from_str(r#"{"plans":[{"id":"single"}],"flavors":[]}"#).expect("json");
        let _ = state.update(Message::Loaded {
            mount,
            result: Ok(sparse),
        });
        let _ = state.view(ViewContext { i18n: &i18n });
        let _ = state.update(Message::PlanChanged(PlanId::double()));
        let _ = state.update(Message::AddToCart);
        let _ = state.view(ViewContext { i18n: &i18n });
        let _ = state.modal(ViewContext { i18n: &i18n });
    }
}
