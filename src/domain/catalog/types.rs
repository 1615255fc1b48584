// SPDX-License-Identifier: MPL-2.0
//! Catalog records decoded from the gallery and subscription endpoints.

use super::newtypes::{FlavorId, PlanId};
use serde::{Deserialize, Serialize};

/// One image of the product gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRecord {
    pub url: String,
}

impl ImageRecord {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A purchasable subscription tier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Plan {
    pub id: PlanId,
    pub label: String,
    pub price: f64,
    pub original_price: f64,
}

/// A selectable product variant with its own display image.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Flavor {
    pub id: FlavorId,
    pub label: String,
    pub image: String,
}

/// Product description returned by the subscription endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductData {
    pub title: String,
    pub rating: f64,
    pub reviews: u64,
    pub description: String,
    pub plans: Vec<Plan>,
    pub flavors: Vec<Flavor>,
}

impl ProductData {
    /// First plan id, used as the initial selection.
    #[must_use]
    pub fn default_plan(&self) -> Option<PlanId> {
        self.plans
            .first()
            .map(|plan| plan.id.clone())
            .filter(|id| !id.is_blank())
    }

    /// Id of the flavor at `position`, if the list is long enough.
    #[must_use]
    pub fn flavor_at(&self, position: usize) -> Option<FlavorId> {
        self.flavors
            .get(position)
            .map(|flavor| flavor.id.clone())
            .filter(|id| !id.is_blank())
    }

    #[must_use]
    pub fn plan(&self, id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|plan| &plan.id == id)
    }

    #[must_use]
    pub fn flavor(&self, id: &FlavorId) -> Option<&Flavor> {
        self.flavors.iter().find(|flavor| &flavor.id == id)
    }

    /// Image URL of the first flavor matching `id`.
    ///
    /// Returns `None` when no flavor matches or its image is empty; callers
    /// render their own placeholder in that case.
    #[must_use]
    pub fn flavor_image(&self, id: &FlavorId) -> Option<&str> {
        self.flavor(id)
            .map(|flavor| flavor.image.as_str())
            .filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn plan_label(&self, id: &PlanId) -> Option<&str> {
        self.plan(id).map(|plan| plan.label.as_str())
    }

    #[must_use]
    pub fn flavor_label(&self, id: &FlavorId) -> Option<&str> {
        self.flavor(id).map(|flavor| flavor.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProductData {
        serde_json::from_str(
            r#"{
                "title": "Daily Greens",
                "rating": 4.6,
                "reviews": 1284,
                "description": "Superfood blend",
                "plans": [
                    {"id": "single", "label": "Single Flavor", "price": 49.5, "originalPrice": 60},
                    {"id": "double", "label": "Double Flavor", "price": 89, "originalPrice": 120}
                ],
                "flavors": [
                    {"id": "mango", "label": "Mango", "image": "http://img/mango.png"},
                    {"id": "berry", "label": "Berry", "image": ""}
                ]
            }"#,
        )
        .expect("valid product json")
    }

    #[test]
    fn decodes_camel_case_fields() {
        let product = sample();
        assert_eq!(product.plans[0].original_price, 60.0);
        assert_eq!(product.plans[1].price, 89.0);
        assert_eq!(product.reviews, 1284);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let product: ProductData =
            serde_json::from_str(r#"{"plans":[{"id":"single"}],"flavors":[]}"#)
                .expect("lenient decode");
        assert_eq!(product.title, "");
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.plans[0].label, "");
        assert!(product.flavors.is_empty());
    }

    #[test]
    fn image_records_decode_from_array() {
        let images: Vec<ImageRecord> =
            serde_json::from_str(r#"[{"url":"a.png"},{"url":"b.png"},{}]"#).expect("array");
        assert_eq!(images.len(), 3);
        assert_eq!(images[1].url, "b.png");
        assert_eq!(images[2].url, "");
    }

    #[test]
    fn default_plan_and_flavors_follow_list_order() {
        let product = sample();
        assert_eq!(product.default_plan(), Some(PlanId::single()));
        assert_eq!(product.flavor_at(0), Some(FlavorId::new("mango")));
        assert_eq!(product.flavor_at(1), Some(FlavorId::new("berry")));
        assert_eq!(product.flavor_at(2), None);
    }

    #[test]
    fn blank_first_plan_id_counts_as_unset() {
        let product: ProductData =
            serde_json::from_str(r#"{"plans":[{"id":""}]}"#).expect("decode");
        assert_eq!(product.default_plan(), None);
    }

    #[test]
    fn flavor_image_lookup_is_explicitly_optional() {
        let product = sample();
        assert_eq!(
            product.flavor_image(&FlavorId::new("mango")),
            Some("http://img/mango.png")
        );
        // Present but empty image, and unknown id, both yield None.
        assert_eq!(product.flavor_image(&FlavorId::new("berry")), None);
        assert_eq!(product.flavor_image(&FlavorId::new("kiwi")), None);
    }

    #[test]
    fn labels_are_looked_up_by_id() {
        let product = sample();
        assert_eq!(product.plan_label(&PlanId::double()), Some("Double Flavor"));
        assert_eq!(product.flavor_label(&FlavorId::new("berry")), Some("Berry"));
        assert_eq!(product.plan_label(&PlanId::new("yearly")), None);
    }
}
