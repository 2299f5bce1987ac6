use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Secondary pages reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    About,
    Cards,
    Services,
    Contact,
}

impl PageKind {
    fn title(self) -> String {
        match self {
            PageKind::About => t!("page-about"),
            PageKind::Cards => t!("page-cards"),
            PageKind::Services => t!("page-services"),
            PageKind::Contact => t!("page-contact"),
        }
    }

    fn slug(self) -> &'static str {
        match self {
            PageKind::About => "about",
            PageKind::Cards => "cards",
            PageKind::Services => "services",
            PageKind::Contact => "contact",
        }
    }
}

#[component]
pub fn SectionPage(kind: PageKind) -> Element {
    i18n::init();
    let slug = kind.slug();
    rsx! {
        section { class: "page page-{slug}",
            h1 { {kind.title()} }
            p { class: "page__note", {t!("page-coming-soon")} }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    i18n::init();
    let path = format!("/{}", segments.join("/"));
    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("page-not-found")} }
            p { class: "page__path", code { "{path}" } }
            a { class: "button button--ghost", href: "/", {t!("page-back-home")} }
        }
    }
}
