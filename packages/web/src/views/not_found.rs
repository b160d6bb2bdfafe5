use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let _ = segments;

    rsx! {
        section { class: "page page-not-found",
            h1 { "404" }
            p { "Page Not Found" }
            button {
                class: "btn btn-primary",
                onclick: move |_| { nav.push(Route::Home {}); },
                "Go Home"
            }
        }
    }
}
