//! Admin list of marketplace configurations.

use api::{ApiClient, Error, MarketplaceConfig};
use dioxus::prelude::*;
use ui::{FetchState, Toast, ToastMessage};

use crate::Route;

/// Browser confirm dialog; always confirms off-browser so native tests can
/// drive the delete path.
fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|w| w.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}

#[component]
pub fn MarketplaceConfigs() -> Element {
    let nav = use_navigator();

    let mut configs = use_signal(Vec::<MarketplaceConfig>::new);
    let mut toast = use_signal(|| None::<ToastMessage>);

    let load = use_resource(move || async move {
        match ApiClient::new().list_configs().await {
            Ok(list) => {
                configs.set(list);
                FetchState::Ready(())
            }
            // The backend answers 404 when no configurations exist yet;
            // that is the empty state, not an error.
            Err(Error::NotFound) => {
                configs.set(Vec::new());
                FetchState::Ready(())
            }
            Err(Error::Unauthenticated) => {
                nav.replace(Route::Login {});
                FetchState::Loading
            }
            Err(err) => FetchState::Failed(err.user_message("Failed to load configurations")),
        }
    });

    let handle_delete = move |name: String| {
        if !confirm(&format!("Delete configuration \"{name}\"?")) {
            return;
        }
        spawn(async move {
            match ApiClient::new().delete_config(&name).await {
                Ok(()) => {
                    configs.with_mut(|list| list.retain(|c| c.name != name));
                    toast.set(Some(ToastMessage::success("Configuration deleted")));
                }
                Err(Error::Unauthenticated) => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    toast.set(Some(ToastMessage::error(
                        err.user_message("Failed to delete configuration"),
                    )));
                }
            }
        });
    };

    rsx! {
        section { class: "page page-configs",
            div { class: "page-header",
                h1 { "Marketplace Configurations" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { nav.push(Route::NewMarketplaceConfig {}); },
                    "Create New Configuration"
                }
            }
            match load() {
                None | Some(FetchState::Loading) => rsx! {
                    p { class: "muted", "Loading configurations..." }
                },
                Some(FetchState::Failed(message)) => rsx! {
                    p { class: "form-error", "{message}" }
                },
                Some(_) if configs().is_empty() => rsx! {
                    p { class: "muted", "No configurations yet." }
                },
                Some(_) => rsx! {
                    div { class: "config-list",
                        for config in configs() {
                            div { class: "card config-row", key: "{config.name}",
                                span { class: "config-name", "{config.name}" }
                                span { class: "muted",
                                    {format!("{} fields", config.fields.len())}
                                }
                                div { class: "config-actions",
                                    button {
                                        class: "btn btn-muted",
                                        onclick: {
                                            let name = config.name.clone();
                                            move |evt: MouseEvent| {
                                                evt.stop_propagation();
                                                nav.push(Route::EditMarketplaceConfig {
                                                    config_name: name.clone(),
                                                });
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let name = config.name.clone();
                                            move |evt: MouseEvent| {
                                                evt.stop_propagation();
                                                handle_delete(name.clone());
                                            }
                                        },
                                        "Delete"
                                    }
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
