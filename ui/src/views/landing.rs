use dioxus::prelude::*;

use crate::components::ClientLogoCarousel;
use crate::i18n;
use crate::t;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

/// Home page: the marketing sections stacked in a fixed order.
#[component]
pub fn LandingPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }
        div { class: "landing",
            HeroClientsSection {}
            FeaturesSection {}
            UniquenessSection {}
            TargetAndFaqSection {}
        }
    }
}

#[component]
pub fn HeroClientsSection() -> Element {
    i18n::init();
    rsx! {
        section { class: "landing__section landing__section--hero",
            div { class: "landing__hero",
                h1 { class: "landing__title", {t!("hero-title")} }
                p { class: "landing__lead", {t!("hero-lead")} }
            }
            ClientLogoCarousel {}
        }
    }
}

#[component]
pub fn FeaturesSection() -> Element {
    i18n::init();
    rsx! {
        section { class: "landing__section landing__section--features",
            h2 { class: "landing__heading", {t!("features-title")} }
            p { class: "landing__lead", {t!("features-lead")} }
        }
    }
}

#[component]
pub fn UniquenessSection() -> Element {
    i18n::init();
    rsx! {
        section { class: "landing__section landing__section--uniqueness",
            h2 { class: "landing__heading", {t!("uniqueness-title")} }
            p { class: "landing__lead", {t!("uniqueness-lead")} }
        }
    }
}

#[component]
pub fn TargetAndFaqSection() -> Element {
    i18n::init();
    rsx! {
        section { class: "landing__section landing__section--faq",
            h2 { class: "landing__heading", {t!("faq-title")} }
            p { class: "landing__lead", {t!("faq-lead")} }
        }
    }
}
