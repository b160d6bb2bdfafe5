//! Paginated list of the user's subscriptions.

use api::{ApiClient, Error, Product};
use dioxus::prelude::*;
use ui::{FetchState, SubscriptionCard, Toast, ToastMessage};

use crate::side_rail::SideRail;
use crate::{PrefetchedProduct, Route};

const PER_PAGE: u32 = 6;

/// Total pages for a total item count, at least 1.
fn page_count(total: i64, per_page: u32) -> u32 {
    let total = total.max(0) as u32;
    ((total + per_page - 1) / per_page).max(1)
}

#[component]
pub fn Subscriptions() -> Element {
    let nav = use_navigator();
    let mut prefetched = use_context::<PrefetchedProduct>().0;

    let mut page = use_signal(|| 1u32);
    let mut items = use_signal(Vec::<Product>::new);
    let mut total_pages = use_signal(|| 1u32);
    let mut toast = use_signal(|| None::<ToastMessage>);

    let load = use_resource(move || {
        let page = page();
        async move {
            let api = ApiClient::new();
            let listing = match api.list_subscriptions(page, PER_PAGE).await {
                Ok(listing) => listing,
                Err(Error::Unauthenticated) => {
                    nav.replace(Route::Login {});
                    return FetchState::Loading;
                }
                Err(err) => {
                    return FetchState::Failed(
                        err.user_message("Failed to load subscriptions"),
                    );
                }
            };
            total_pages.set(page_count(listing.total, PER_PAGE));

            // The list payload is a summary; hydrate each row so the card
            // shows the current price and deviation. A row that fails to
            // hydrate falls back to the summary.
            let mut hydrated = Vec::with_capacity(listing.items.len());
            for product in listing.items {
                match api.product_by_id(product.id).await {
                    Ok(full) => hydrated.push(full),
                    Err(err) => {
                        tracing::warn!("failed to hydrate product {}: {err}", product.id);
                        hydrated.push(product);
                    }
                }
            }
            items.set(hydrated);
            FetchState::Ready(())
        }
    });

    let handle_open = move |id: i64| {
        let product = items.peek().iter().find(|p| p.id == id).cloned();
        if let Some(product) = product {
            prefetched.set(Some(product));
        }
        nav.push(Route::ProductPage { id });
    };

    let handle_unsubscribe = move |id: i64| {
        spawn(async move {
            match ApiClient::new().unsubscribe(id).await {
                Ok(()) => {
                    items.with_mut(|list| list.retain(|p| p.id != id));
                    toast.set(Some(ToastMessage::success("Unsubscribed successfully!")));
                }
                Err(Error::Unauthenticated) => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    toast.set(Some(ToastMessage::error(
                        err.user_message("Unsubscribe failed"),
                    )));
                }
            }
        });
    };

    rsx! {
        div { class: "with-rail",
            SideRail {}
            section { class: "page page-subscriptions",
                h1 { "My Subscriptions" }
                match load() {
                    None | Some(FetchState::Loading) => rsx! {
                        p { class: "muted", "Loading subscriptions..." }
                    },
                    Some(FetchState::Failed(message)) => rsx! {
                        p { class: "form-error", "{message}" }
                    },
                    Some(_) if items().is_empty() => rsx! {
                        p { class: "muted", "No subscriptions yet" }
                    },
                    Some(_) => rsx! {
                        div { class: "subscription-list",
                            for product in items() {
                                SubscriptionCard {
                                    key: "{product.id}",
                                    product: product.clone(),
                                    on_open: handle_open,
                                    on_unsubscribe: handle_unsubscribe,
                                }
                            }
                        }
                        if total_pages() > 1 {
                            div { class: "pagination",
                                for number in 1..=total_pages() {
                                    button {
                                        class: if number == page() { "btn btn-primary" } else { "btn btn-muted" },
                                        onclick: move |_| page.set(number),
                                        "{number}"
                                    }
                                }
                            }
                        }
                    },
                }
                Toast { message: toast }
            }
        }
    }
}
