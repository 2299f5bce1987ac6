use dioxus::prelude::*;
use tracing::debug;

use ui::components::{register_links, LinkBuilder, NavLink, NavigationBar};
use ui::views::{LandingPage, NotFound, PageKind, SectionPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/cards")]
    Cards {},
    #[route("/services")]
    Services {},
    #[route("/contact")]
    Contact {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

/// Router-aware links so navbar clicks navigate without a page reload.
fn route_link(link: NavLink) -> Element {
    let NavLink {
        to,
        class,
        onclick,
        children,
    } = link;
    rsx! {
        Link {
            to,
            class,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_links(LinkBuilder { link: route_link });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Shared header around every routed page. Feeds the active path to the navbar.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    debug!(%path, "route rendered");

    rsx! {
        NavigationBar { current_path: path }
        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { LandingPage {} }
}

#[component]
fn About() -> Element {
    rsx! { SectionPage { kind: PageKind::About } }
}

#[component]
fn Cards() -> Element {
    rsx! { SectionPage { kind: PageKind::Cards } }
}

#[component]
fn Services() -> Element {
    rsx! { SectionPage { kind: PageKind::Services } }
}

#[component]
fn Contact() -> Element {
    rsx! { SectionPage { kind: PageKind::Contact } }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! { NotFound { segments } }
}
