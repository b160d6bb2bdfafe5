use api::Product;
use dioxus::prelude::*;

use ui::{use_session, SessionProvider};
use views::{
    EditMarketplaceConfig, Home, Login, MarketplaceConfigs, NewMarketplaceConfig, NotFound,
    ProductPage, Register, Subscriptions,
};

mod navbar;
mod side_rail;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/product/:id")]
        ProductPage { id: i64 },
        #[route("/register")]
        Register {},
        #[route("/login")]
        Login {},
        #[route("/subscriptions")]
        Subscriptions {},
        #[route("/marketplace-configs")]
        MarketplaceConfigs {},
        #[route("/marketplace-configs/new")]
        NewMarketplaceConfig {},
        #[route("/marketplace-configs/:config_name")]
        EditMarketplaceConfig { config_name: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Product handed from the by-URL form (or the subscriptions list) to the
/// detail view, so the detail view does not refetch what was just received.
#[derive(Clone, Copy)]
pub(crate) struct PrefetchedProduct(pub Signal<Option<Product>>);

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| PrefetchedProduct(Signal::new(None)));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Top bar plus the routed page. Also the route-change trigger for the
/// session refresh: every navigation revalidates identity.
#[component]
fn Shell() -> Element {
    let session = use_session();
    let route = use_route::<Route>();

    // Track the route in a signal so the resource restarts per navigation
    let mut current = use_signal(|| route.clone());
    if *current.peek() != route {
        current.set(route);
    }
    let _refresh = use_resource(move || {
        let _ = current();
        async move {
            session.refresh().await;
        }
    });

    rsx! {
        navbar::TopBar {}
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
