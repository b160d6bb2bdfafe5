//! Icon-only side rail shown next to the product and subscriptions pages.

use dioxus::prelude::*;

use crate::Route;

#[component]
fn HomeIcon() -> Element {
    rsx! {
        svg {
            width: "40",
            height: "40",
            view_box: "0 0 60 60",
            fill: "none",
            path {
                d: "M10 30 L30 10 L50 30",
                stroke: "#0094FF",
                stroke_width: "4",
                fill: "none",
            }
            rect {
                x: "18",
                y: "30",
                width: "24",
                height: "20",
                stroke: "#0094FF",
                stroke_width: "4",
                fill: "none",
            }
            rect { x: "28", y: "40", width: "4", height: "10", fill: "#0094FF" }
        }
    }
}

#[component]
fn SubscriptionsIcon() -> Element {
    rsx! {
        svg {
            width: "32",
            height: "32",
            view_box: "0 0 24 24",
            fill: "none",
            path {
                d: "M12 22c1.1 0 2-.9 2-2h-4a2 2 0 0 0 2 2zm6-6V11c0-3.07-1.63-5.64-5-6.32V4a1 1 0 1 0-2 0v.68C7.63 5.36 6 7.92 6 11v5l-1.29 1.29A1 1 0 0 0 6 19h12a1 1 0 0 0 .71-1.71L18 16z",
                stroke: "#0094FF",
                stroke_width: "2",
                fill: "none",
            }
        }
    }
}

#[component]
pub fn SideRail() -> Element {
    rsx! {
        aside { class: "side-rail",
            Link { class: "side-rail-link", to: Route::Home {}, title: "Home",
                HomeIcon {}
            }
            Link {
                class: "side-rail-link",
                to: Route::Subscriptions {},
                title: "My Subscriptions",
                SubscriptionsIcon {}
            }
        }
    }
}
