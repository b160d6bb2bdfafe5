//! One row of the subscriptions list.

use api::Product;
use dioxus::prelude::*;

/// Display name capped for the fixed-width list column.
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let head: String = name.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Price change relative to the previous price, in percent. `None` when the
/// previous price was zero (no meaningful baseline).
pub fn percent_change(current_price: f64, price_difference: f64) -> Option<f64> {
    let old_price = current_price - price_difference;
    if old_price == 0.0 {
        None
    } else {
        Some(price_difference / old_price * 100.0)
    }
}

/// Badge text: "+2.50%", "-1.20%" or "No change".
pub fn percent_change_label(current_price: f64, price_difference: f64) -> String {
    if price_difference == 0.0 {
        return "No change".to_string();
    }
    match percent_change(current_price, price_difference) {
        Some(percent) if price_difference > 0.0 => format!("+{percent:.2}%"),
        Some(percent) => format!("{percent:.2}%"),
        None => "No change".to_string(),
    }
}

/// CSS class for the badge, keyed off the backend's deviation string.
fn badge_class(deviation: Option<&str>) -> &'static str {
    match deviation.map(str::to_lowercase) {
        Some(s) if s.contains("risen") => "price-badge price-badge-risen",
        Some(s) if s.contains("dropped") => "price-badge price-badge-dropped",
        _ => "price-badge",
    }
}

#[component]
pub fn SubscriptionCard(
    product: Product,
    on_open: EventHandler<i64>,
    on_unsubscribe: EventHandler<i64>,
) -> Element {
    let id = product.id;
    let name = truncate_name(product.name.as_deref().unwrap_or("No name"), 50);
    let price = format!("{:.2}", product.current_price);
    let currency = product.currency.clone().unwrap_or_default();
    let badge = percent_change_label(product.current_price, product.price_difference);
    let badge_class = badge_class(product.deviation_string.as_deref());

    rsx! {
        div {
            class: "subscription-card",
            onclick: move |_| on_open.call(id),
            span { class: "subscription-name", "{name}" }
            span { class: "subscription-price", "{price} {currency}" }
            span { class: "{badge_class}", "{badge}" }
            button {
                class: "btn btn-danger",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_unsubscribe.call(id);
                },
                "Unsubscribe"
            }
        }
    }
}
