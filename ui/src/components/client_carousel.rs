use std::time::Duration;

use dioxus::prelude::*;

use crate::clients::{Client, MarqueeTrack};
use crate::core::config::SITE;
use crate::core::motion::{ambient_glow, reveal};
use crate::core::viewport::use_items_per_view;
use crate::i18n;
use crate::t;

const CAROUSEL_CSS: Asset = asset!("/assets/styling/carousel.css");
const CAROUSEL_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/carousel.css"
));

/// "Clients include" strip: an endlessly scrolling row of client logos over
/// a layered ambient glow.
#[component]
pub fn ClientLogoCarousel() -> Element {
    i18n::init();

    // Tracked for responsive layouts; the marquee itself is width-agnostic.
    let _items_per_view = use_items_per_view(SITE.breakpoints);

    let track = use_hook(MarqueeTrack::site);
    let motion_css = use_hook(|| {
        let glow = ambient_glow();
        let heading = reveal("reveal-heading", Duration::from_millis(600), 20.0);
        let strip = reveal("reveal-track", Duration::from_millis(800), 0.0);
        format!(
            "{}\n{}\n{}\n\
             .clients__glow--animated {{ animation: {}; }}\n\
             .clients__heading {{ animation: {}; }}\n\
             .clients__track-reveal {{ animation: {}; }}",
            glow.keyframes_css(),
            heading.keyframes_css(),
            strip.keyframes_css(),
            glow.animation_css(),
            heading.animation_css(),
            strip.animation_css(),
        )
    });

    let track_style = format!(
        "width: {}%; animation: {};",
        track.width_percent(),
        track.animation_css()
    );

    rsx! {
        document::Link { rel: "stylesheet", href: CAROUSEL_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{CAROUSEL_CSS_INLINE}" }
        }
        document::Style { "{motion_css}" }

        section { class: "clients",
            div { class: "clients__ambient", aria_hidden: "true",
                div { class: "clients__glow clients__glow--spotlight" }
                div { class: "clients__glow clients__glow--atmosphere" }
                div { class: "clients__glow clients__glow--blob clients__glow--animated" }
                div { class: "clients__glow clients__glow--spread" }
            }

            div { class: "clients__content",
                div { class: "clients__container",
                    div { class: "clients__heading",
                        p { class: "clients__eyebrow", {t!("clients-eyebrow")} }
                        h2 { class: "clients__title",
                            span { {t!("clients-heading")} }
                        }
                    }

                    div { class: "clients__divider clients__divider--top" }

                    div { class: "clients__viewport",
                        div { class: "clients__edge-glow clients__edge-glow--left" }
                        div { class: "clients__edge-glow clients__edge-glow--right" }

                        div { class: "clients__track-reveal",
                            div {
                                class: "clients__track",
                                "data-source-len": "{track.source_len()}",
                                style: "{track_style}",
                                for (index, client) in track.items().iter().enumerate() {
                                    LogoItem { key: "{index}", client: *client }
                                }
                            }
                        }

                        div { class: "clients__fade clients__fade--left" }
                        div { class: "clients__fade clients__fade--right" }
                    }

                    div { class: "clients__divider clients__divider--bottom" }
                }
            }
        }
    }
}

#[component]
fn LogoItem(client: Client) -> Element {
    rsx! {
        div { class: "clients__logo-item",
            img {
                class: "clients__logo",
                src: client.logo,
                alt: client.name,
                width: "180",
                height: "80",
            }
        }
    }
}
