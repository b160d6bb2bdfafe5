//! Top navigation bar: a pure function of session state and current route.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

fn link_class(active: bool) -> &'static str {
    if active {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn TopBar() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let state = session.state();

    let on_home = matches!(route, Route::Home {});
    let on_subscriptions = matches!(route, Route::Subscriptions {});
    // Prefix match: the whole configuration section highlights the one link
    let on_configs = matches!(
        route,
        Route::MarketplaceConfigs {} | Route::NewMarketplaceConfig {} | Route::EditMarketplaceConfig { .. }
    );

    rsx! {
        header { class: "topbar",
            nav { class: "topbar-links",
                Link { class: link_class(on_home), to: Route::Home {}, "My Home" }
                if state.show_subscriptions_link() {
                    Link {
                        class: link_class(on_subscriptions),
                        to: Route::Subscriptions {},
                        "My Subscriptions"
                    }
                }
                if state.show_admin_link() {
                    Link {
                        class: link_class(on_configs),
                        to: Route::MarketplaceConfigs {},
                        "Configurations"
                    }
                }
            }
            div { class: "topbar-actions",
                if let Some(username) = state.username {
                    span { class: "topbar-welcome", "Welcome, {username}!" }
                    button {
                        class: "btn btn-muted",
                        onclick: move |_| session.logout(),
                        "Log out"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| { nav.push(Route::Login {}); },
                        "Log in"
                    }
                    button {
                        class: "btn btn-link",
                        onclick: move |_| { nav.push(Route::Register {}); },
                        "Register"
                    }
                }
            }
        }
    }
}
