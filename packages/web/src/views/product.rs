//! Product detail: current price, prediction, history chart with period
//! switching, and the subscribe/unsubscribe actions.

use api::{ApiClient, Error, Period, PricePoint, Product};
use dioxus::prelude::*;
use ui::{FetchState, PriceChart, Toast, ToastMessage};

use crate::side_rail::SideRail;
use crate::{PrefetchedProduct, Route};

/// One-line reading of the backend's change index.
fn trend_label(change_index: f64) -> &'static str {
    if change_index > 0.0 {
        "Price is likely to increase"
    } else if change_index < 0.0 {
        "Price is likely to decrease"
    } else {
        "Price is likely to remain stable"
    }
}

#[component]
pub fn ProductPage(id: i64) -> Element {
    let nav = use_navigator();
    let mut prefetched = use_context::<PrefetchedProduct>().0;

    // Track the route param in a signal so the resources below restart when
    // navigation lands on a different product, dropping stale futures.
    let mut product_id = use_signal(|| id);
    if *product_id.peek() != id {
        product_id.set(id);
    }

    let mut period = use_signal(|| Period::Month);
    let mut history = use_signal(Vec::<PricePoint>::new);
    let mut history_loading = use_signal(|| true);
    let mut is_subscribed = use_signal(|| false);
    let mut action_error = use_signal(|| None::<String>);
    let mut toast = use_signal(|| None::<ToastMessage>);

    let product = use_resource(move || {
        let id = product_id();
        async move {
            // The by-URL form (and the subscriptions list) hand over the
            // product they already hold; only refetch on a direct visit.
            let handed_over = prefetched.peek().as_ref().filter(|p| p.id == id).cloned();
            if let Some(product) = handed_over {
                prefetched.set(None);
                return FetchState::Ready(product);
            }
            FetchState::from_result(
                ApiClient::new().product_by_id(id).await,
                "Failed to load product",
            )
        }
    });

    let _subscribed = use_resource(move || {
        let id = product_id();
        async move {
            if api::token::get().is_none() {
                is_subscribed.set(false);
                return;
            }
            let subscribed = ApiClient::new().check_subscribed(id).await.unwrap_or(false);
            is_subscribed.set(subscribed);
        }
    });

    let _history = use_resource(move || {
        let id = product_id();
        let period = period();
        async move {
            history_loading.set(true);
            match ApiClient::new().price_history(id, period).await {
                Ok(points) => history.set(points),
                Err(err) => {
                    tracing::debug!("price history failed: {err}");
                    history.set(Vec::new());
                }
            }
            history_loading.set(false);
        }
    });

    let handle_subscribe = move |_| {
        if api::token::get().is_none() {
            nav.push(Route::Login {});
            return;
        }
        let id = *product_id.peek();
        spawn(async move {
            match ApiClient::new().subscribe(id).await {
                Ok(api::SubscribeOutcome::Subscribed) => {
                    is_subscribed.set(true);
                    toast.set(Some(ToastMessage::success("Subscribed successfully!")));
                }
                Ok(api::SubscribeOutcome::AlreadySubscribed) => {
                    is_subscribed.set(true);
                    toast.set(Some(ToastMessage::success("Already subscribed")));
                }
                Err(Error::Unauthenticated) => {
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    action_error.set(Some(err.user_message("Subscription failed")));
                }
            }
        });
    };

    let handle_unsubscribe = move |_| {
        let id = *product_id.peek();
        spawn(async move {
            match ApiClient::new().unsubscribe(id).await {
                Ok(()) => {
                    is_subscribed.set(false);
                    toast.set(Some(ToastMessage::success("Unsubscribed successfully!")));
                }
                Err(Error::Unauthenticated) => {
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    action_error.set(Some(err.user_message("Unsubscribe failed")));
                }
            }
        });
    };

    rsx! {
        div { class: "with-rail",
            SideRail {}
            section { class: "page page-product",
                match product() {
                    None => rsx! { p { class: "muted", "Loading product..." } },
                    Some(FetchState::Loading) => rsx! { p { class: "muted", "Loading product..." } },
                    Some(FetchState::NotFound) => rsx! {
                        p { class: "form-error", "Product not found" }
                    },
                    Some(FetchState::Failed(message)) => rsx! {
                        p { class: "form-error", "{message}" }
                    },
                    Some(FetchState::Ready(product)) => rsx! {
                        ProductDetail {
                            product: product.clone(),
                            period: period(),
                            history: history(),
                            history_loading: history_loading(),
                            is_subscribed: is_subscribed(),
                            on_period: move |p| period.set(p),
                            on_subscribe: handle_subscribe,
                            on_unsubscribe: handle_unsubscribe,
                        }
                    },
                }
                if let Some(message) = action_error() {
                    p { class: "form-error", "{message}" }
                }
                Toast { message: toast }
            }
        }
    }
}

#[component]
fn ProductDetail(
    product: Product,
    period: Period,
    history: Vec<PricePoint>,
    history_loading: bool,
    is_subscribed: bool,
    on_period: EventHandler<Period>,
    on_subscribe: EventHandler<()>,
    on_unsubscribe: EventHandler<()>,
) -> Element {
    let name = product.name.clone().unwrap_or_else(|| "No name".to_string());
    let currency = product.currency.clone().unwrap_or_default();
    let current = format!("{:.1} {currency}", product.current_price);

    rsx! {
        div { class: "product-detail",
            h1 { "{name}" }
            p { class: "product-price", "Current price: {current}" }
            if let Some(predicted) = product.predicted_price {
                p { class: "product-predicted",
                    "Predicted price: {predicted:.1} {currency}"
                }
            }
            if let Some(trend) = product.change_index.map(trend_label) {
                p { class: "product-trend", "{trend}" }
            }
            if let Some(status) = product.status.clone() {
                p { class: "muted", "Status: {status}" }
            }

            div { class: "period-buttons",
                for option in Period::ALL {
                    button {
                        class: if option == period { "btn btn-primary" } else { "btn btn-muted" },
                        onclick: move |_| on_period.call(option),
                        {option.label()}
                    }
                }
            }
            if history_loading {
                p { class: "muted", "Loading chart..." }
            } else if history.is_empty() {
                p { class: "muted", "No price history for this period." }
            } else {
                PriceChart { history: history.clone(), currency: currency.clone() }
            }

            div { class: "product-actions",
                if is_subscribed {
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_unsubscribe.call(()),
                        "Unsubscribe"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_subscribe.call(()),
                        "Subscribe"
                    }
                }
                a {
                    class: "btn btn-link",
                    href: "{product.url}",
                    target: "_blank",
                    "Go to Marketplace"
                }
            }
        }
    }
}
