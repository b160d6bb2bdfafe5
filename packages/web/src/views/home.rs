//! Landing page: the by-URL lookup form plus the list of marketplaces the
//! backend knows how to parse.

use api::ApiClient;
use dioxus::prelude::*;

use crate::{PrefetchedProduct, Route};

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let mut prefetched = use_context::<PrefetchedProduct>().0;

    let mut url = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Public endpoint; a failure here just hides the marketplace cards.
    let marketplaces = use_resource(|| async {
        ApiClient::new().marketplace_short_list().await.unwrap_or_default()
    });

    let mut handle_submit = move || {
        let requested = url().trim().to_string();
        if requested.is_empty() || *submitting.peek() {
            return;
        }
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let result = ApiClient::new().product_by_url(&requested).await;
            submitting.set(false);
            match result {
                Ok(product) => {
                    let id = product.id;
                    prefetched.set(Some(product));
                    nav.push(Route::ProductPage { id });
                }
                Err(err) => {
                    tracing::debug!("product lookup failed: {err}");
                    error.set(Some(
                        "Failed to fetch product. Please check the URL.".to_string(),
                    ));
                }
            }
        });
    };

    rsx! {
        section { class: "page page-home",
            h1 { "Parse product" }
            form {
                class: "url-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    handle_submit();
                },
                input {
                    class: "text-input url-input",
                    r#type: "text",
                    placeholder: "Paste a product URL",
                    value: "{url}",
                    oninput: move |evt| url.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Fetching..." } else { "Fetch" }
                }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }

            h2 { "Available marketplaces to parse" }
            match marketplaces() {
                None => rsx! { p { class: "muted", "Loading marketplaces..." } },
                Some(list) if list.is_empty() => rsx! {
                    p { class: "muted", "No marketplaces available." }
                },
                Some(list) => rsx! {
                    div { class: "cards",
                        for marketplace in list {
                            div { class: "card marketplace-card",
                                h3 { "{marketplace.name}" }
                                if let Some(link) = marketplace.marketplace_url.clone() {
                                    a {
                                        class: "btn btn-link",
                                        href: "{link}",
                                        target: "_blank",
                                        "Go to Marketplace"
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
