// SPDX-License-Identifier: MPL-2.0
//! Plan and flavor selection rules of the purchase card.

use crate::domain::catalog::{FlavorId, PlanId, ProductData};

/// Current choices of the shopper.
///
/// A single plan never carries a second flavor once the plan has been
/// changed; switching to any other plan fills the second flavor from the
/// product's second entry when it is still unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    plan: Option<PlanId>,
    flavor1: Option<FlavorId>,
    flavor2: Option<FlavorId>,
    show_confirmation: bool,
}

/// Labels displayed by the confirmation dialog, in display order.
///
/// `None` entries refer to ids missing from the product; the view renders a
/// placeholder label for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation<'a> {
    pub plan: Option<&'a str>,
    pub flavors: Vec<Option<&'a str>>,
}

impl Selection {
    /// Initial selection: first plan, first and second flavors.
    #[must_use]
    pub fn for_product(product: &ProductData) -> Self {
        Self {
            plan: product.default_plan(),
            flavor1: product.flavor_at(0),
            flavor2: product.flavor_at(1),
            show_confirmation: false,
        }
    }

    #[must_use]
    pub fn plan(&self) -> Option<&PlanId> {
        self.plan.as_ref()
    }

    #[must_use]
    pub fn flavor1(&self) -> Option<&FlavorId> {
        self.flavor1.as_ref()
    }

    #[must_use]
    pub fn flavor2(&self) -> Option<&FlavorId> {
        self.flavor2.as_ref()
    }

    #[must_use]
    pub fn show_confirmation(&self) -> bool {
        self.show_confirmation
    }

    /// Whether the second flavor picker applies.
    #[must_use]
    pub fn is_double_plan(&self) -> bool {
        self.plan.as_ref().is_some_and(PlanId::is_double)
    }

    pub fn change_plan(&mut self, plan: PlanId, product: &ProductData) {
        if plan.is_single() {
            self.flavor2 = None;
        } else if self.flavor2.is_none() {
            self.flavor2 = product.flavor_at(1);
        }
        self.plan = Some(plan);
    }

    pub fn set_flavor1(&mut self, flavor: FlavorId) {
        self.flavor1 = Some(flavor);
    }

    pub fn set_flavor2(&mut self, flavor: FlavorId) {
        self.flavor2 = Some(flavor);
    }

    /// "Add to Cart": opens the confirmation. Nothing is sent anywhere.
    pub fn submit(&mut self) {
        self.show_confirmation = true;
    }

    pub fn close_confirmation(&mut self) {
        self.show_confirmation = false;
    }

    /// Plan label, flavor 1 label and, for the double plan, flavor 2 label.
    #[must_use]
    pub fn confirmation<'a>(&self, product: &'a ProductData) -> Confirmation<'a> {
        let plan = self.plan.as_ref().and_then(|id| product.plan_label(id));

        let mut flavors = vec![self.flavor1.as_ref().and_then(|id| product.flavor_label(id))];
        if self.is_double_plan() {
            flavors.push(self.flavor2.as_ref().and_then(|id| product.flavor_label(id)));
        }

        Confirmation { plan, flavors }
    }
}
