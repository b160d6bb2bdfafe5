//! Raw JSON editor for one marketplace configuration.

use api::{ApiClient, Error};
use dioxus::prelude::*;
use ui::FetchState;

use crate::Route;

#[component]
pub fn EditMarketplaceConfig(config_name: String) -> Element {
    let nav = use_navigator();

    // Restart the loader when navigation switches to a different name.
    let mut name = use_signal(|| config_name.clone());
    if *name.peek() != config_name {
        name.set(config_name.clone());
    }

    let mut json_input = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let load = use_resource(move || {
        let name = name();
        async move {
            match ApiClient::new().get_config(&name).await {
                Ok(value) => {
                    json_input.set(serde_json::to_string_pretty(&value).unwrap_or_default());
                    FetchState::Ready(())
                }
                Err(Error::NotFound) => FetchState::NotFound,
                Err(Error::Unauthenticated) => {
                    nav.replace(Route::Login {});
                    FetchState::Loading
                }
                Err(err) => FetchState::Failed(err.user_message("Failed to load configuration")),
            }
        }
    });

    let mut handle_submit = move || {
        if *submitting.peek() {
            return;
        }
        // Validate locally first; malformed input never reaches the backend.
        let config = match api::parse_config_input(&json_input.peek()) {
            Ok(config) => config,
            Err(err) => {
                error.set(Some(err.user_message("Invalid configuration")));
                return;
            }
        };
        submitting.set(true);
        error.set(None);
        let name = name.peek().clone();
        spawn(async move {
            let result = ApiClient::new().update_config(&name, &config).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    nav.push(Route::MarketplaceConfigs {});
                }
                Err(Error::Unauthenticated) => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    error.set(Some(err.user_message("Failed to update configuration")));
                }
            }
        });
    };

    rsx! {
        section { class: "page page-config-edit",
            h1 { "Edit Configuration: {name}" }
            match load() {
                None | Some(FetchState::Loading) => rsx! {
                    p { class: "muted", "Loading configuration..." }
                },
                Some(FetchState::NotFound) => rsx! {
                    p { class: "form-error", "Configuration not found" }
                },
                Some(FetchState::Failed(message)) => rsx! {
                    p { class: "form-error", "{message}" }
                },
                Some(FetchState::Ready(())) => rsx! {
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
                                if submitting() { "Saving..." } else { "Save Changes" }
                            }
                            button {
                                class: "btn btn-muted",
                                r#type: "button",
                                onclick: move |_| { nav.push(Route::MarketplaceConfigs {}); },
                                "Cancel"
                            }
                        }
                    }
                },
            }
        }
    }
}
