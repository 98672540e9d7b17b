//! Serde types for the warehouse catalog JSON.
//!
//! The upstream service is loose about shape: list endpoints answer
//! either a bare array or a `{data:[...]}` envelope, and optional
//! fields are frequently absent. Missing optional fields get documented
//! defaults here (status `"Active"`, booleans `false`, numerics `0`)
//! instead of failing deserialization; a missing natural key leaves an
//! `Option` at `None` so the sync planner can skip and count the item.

use backoffice_core::types::Timestamp;
use serde::Deserialize;

fn default_status() -> String {
    "Active".to_string()
}

fn default_item_type() -> String {
    "FEATURE".to_string()
}

/// List response that tolerates both `[...]` and `{"data": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Wrapped { data } => data,
            ListEnvelope::Bare(items) => items,
        }
    }
}

/// Single-item response that tolerates both `{...}` and `{"data": {...}}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ItemEnvelope<T> {
    pub fn into_item(self) -> T {
        match self {
            ItemEnvelope::Wrapped { data } => data,
            ItemEnvelope::Bare(item) => item,
        }
    }
}

/// One product from `GET /catalog/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    /// Natural key; an item without it is skipped by the planner.
    #[serde(default)]
    pub product_code: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub db_name: Option<String>,
    #[serde(default)]
    pub total_features: i32,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// One feature from `GET /catalog/products/{idOrCode}/features`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturePayload {
    /// Upstream id, the second half of the natural key.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub feature_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub module_name: Option<String>,
    /// `FEATURE` or `SUBFEATURE`.
    #[serde(default = "default_item_type")]
    pub item_type: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub price_addon: f64,
    #[serde(default)]
    pub is_trial: bool,
    #[serde(default)]
    pub trial_days: i32,
}

/// One menu from `GET /catalog/products/{idOrCode}/menus`.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuPayload {
    /// Upstream id, the second half of the natural key.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub route_path: Option<String>,
    #[serde(default)]
    pub menu_type: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_accepts_bare_array() {
        let json = r#"[{"product_code": "P1", "name": "One"}]"#;
        let parsed: ListEnvelope<ProductPayload> = serde_json::from_str(json).unwrap();
        let items = parsed.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_code.as_deref(), Some("P1"));
    }

    #[test]
    fn list_envelope_accepts_data_wrapper() {
        let json = r#"{"data": [{"product_code": "P1"}, {"product_code": "P2"}]}"#;
        let parsed: ListEnvelope<ProductPayload> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_items().len(), 2);
    }

    #[test]
    fn missing_optional_product_fields_get_defaults() {
        let json = r#"{"product_code": "P1"}"#;
        let product: ProductPayload = serde_json::from_str(json).unwrap();
        assert_eq!(product.status, "Active");
        assert_eq!(product.total_features, 0);
        assert_eq!(product.name, "");
        assert!(product.description.is_none());
        assert!(product.updated_at.is_none());
    }

    #[test]
    fn missing_product_code_deserializes_to_none() {
        let json = r#"{"name": "keyless"}"#;
        let product: ProductPayload = serde_json::from_str(json).unwrap();
        assert!(product.product_code.is_none());
    }

    #[test]
    fn missing_optional_feature_fields_get_defaults() {
        let json = r#"{"id": 7}"#;
        let feature: FeaturePayload = serde_json::from_str(json).unwrap();
        assert_eq!(feature.id, Some(7));
        assert_eq!(feature.item_type, "FEATURE");
        assert!(!feature.is_active);
        assert!(!feature.is_trial);
        assert_eq!(feature.sort_order, 0);
        assert_eq!(feature.price_addon, 0.0);
        assert_eq!(feature.trial_days, 0);
    }

    #[test]
    fn missing_optional_menu_fields_get_defaults() {
        let json = r#"{"id": 3, "title": "Reports"}"#;
        let menu: MenuPayload = serde_json::from_str(json).unwrap();
        assert_eq!(menu.id, Some(3));
        assert_eq!(menu.title, "Reports");
        assert!(menu.parent_id.is_none());
        assert!(!menu.is_active);
        assert_eq!(menu.sort_order, 0);
    }
}
