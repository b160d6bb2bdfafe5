//! Wire types shared with the backend.

use serde::{Deserialize, Serialize};

/// Response of the identity-check endpoint (`GET /api/protected`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub role: String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Response of `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// A tracked product. The subscriptions list returns the basic subset; the
/// prediction fields are only present on detail responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub marketplace_key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    pub current_price: f64,
    pub price_difference: f64,
    #[serde(default)]
    pub deviation_string: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub predicted_price: Option<f64>,
    #[serde(default)]
    pub change_index: Option<f64>,
}

/// One point of a product's price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

/// History window accepted by the price-history endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Month,
    ThreeMonths,
    Year,
    All,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Week,
        Period::Month,
        Period::ThreeMonths,
        Period::Year,
        Period::All,
    ];

    /// Value sent as the `period` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            Period::Week => "7d",
            Period::Month => "1m",
            Period::ThreeMonths => "3m",
            Period::Year => "1y",
            Period::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::All => "All",
            other => other.as_query(),
        }
    }
}

/// One page of the current user's subscriptions, hydrated with products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPage {
    pub items: Vec<Product>,
    pub total: i64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

/// Result of a subscribe call. The backend answers an already-existing
/// subscription with 400 "Already subscribed"; the client treats that as a
/// recoverable duplicate, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
}

/// Entry of the public marketplace short list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceShort {
    pub name: String,
    #[serde(default)]
    pub marketplace_url: Option<String>,
}

/// Structural shape of a marketplace configuration. Configurations are
/// edited as free-form JSON; this type exists to validate the shape before
/// submission, not to constrain what the backend stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    pub name: String,
    pub fields: Vec<MarketplaceField>,
    pub marketplace_url: MarketplaceUrl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceField {
    pub name: String,
    pub html_div_class: String,
    pub html_element_in_div_type: String,
    pub html_element_in_div_class: Vec<String>,
}

/// The backend stores `marketplace_url` as either a single URL or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarketplaceUrl {
    One(String),
    Many(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_admin_flag() {
        let admin = Identity { username: "alice".into(), role: "admin".into() };
        let user = Identity { username: "bob".into(), role: "user".into() };
        assert!(admin.is_admin());
        assert!(!user.is_admin());
    }

    #[test]
    fn period_query_values() {
        let queries: Vec<&str> = Period::ALL.iter().map(|p| p.as_query()).collect();
        assert_eq!(queries, ["7d", "1m", "3m", "1y", "all"]);
        assert_eq!(Period::All.label(), "All");
        assert_eq!(Period::Week.label(), "7d");
    }

    #[test]
    fn basic_product_deserializes_without_prediction_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": 42,
            "url": "http://example.com/x",
            "marketplace_key": "example",
            "name": "Widget",
            "currency": "EUR",
            "current_price": 19.99,
            "price_difference": -1.5,
            "deviation_string": "Price dropped"
        }))
        .unwrap();
        assert_eq!(product.id, 42);
        assert_eq!(product.predicted_price, None);
        assert_eq!(product.change_index, None);
    }

    #[test]
    fn subscription_page_tolerates_minimal_payload() {
        let page: SubscriptionPage = serde_json::from_value(json!({
            "items": [],
            "total": 13
        }))
        .unwrap();
        assert_eq!(page.total, 13);
        assert!(page.items.is_empty());
    }

    #[test]
    fn marketplace_url_accepts_string_or_list() {
        let one: MarketplaceUrl = serde_json::from_value(json!("https://a.example")).unwrap();
        let many: MarketplaceUrl =
            serde_json::from_value(json!(["https://a.example", "https://b.example"])).unwrap();
        assert_eq!(one, MarketplaceUrl::One("https://a.example".into()));
        assert!(matches!(many, MarketplaceUrl::Many(ref urls) if urls.len() == 2));
    }
}
