//! Create form for a marketplace configuration, seeded with a template.

use api::{ApiClient, Error};
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NewMarketplaceConfig() -> Element {
    let nav = use_navigator();

    let mut json_input = use_signal(api::config_template_json);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut handle_submit = move || {
        if *submitting.peek() {
            return;
        }
        let config = match api::parse_config_input(&json_input.peek()) {
            Ok(config) => config,
            Err(err) => {
                error.set(Some(err.user_message("Invalid configuration")));
                return;
            }
        };
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let result = ApiClient::new().create_config(&config).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    nav.push(Route::MarketplaceConfigs {});
                }
                Err(Error::Unauthenticated) => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    error.set(Some(err.user_message("Failed to create configuration")));
                }
            }
        });
    };

    rsx! {
        section { class: "page page-config-edit",
            h1 { "Create New Configuration" }
            form {
                class: "config-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    handle_submit();
                },
                textarea {
                    class: "config-editor",
                    rows: "24",
                    value: "{json_input}",
                    oninput: move |evt| json_input.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating..." } else { "Create" }
                    }
                    button {
                        class: "btn btn-muted",
                        r#type: "button",
                        onclick: move |_| { nav.push(Route::MarketplaceConfigs {}); },
                        "Cancel"
                    }
                }
            }
        }
    }
}
