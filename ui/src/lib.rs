//! Shared UI crate for the Sync marketing site. Components, the pure models
//! behind them and the host capabilities they depend on live here.

pub mod clients;
pub mod core;
pub mod i18n;
pub mod navigation;
pub mod views;

pub mod components {
    // Responsive header with the slide-in mobile drawer (components/navigation_bar.rs)
    pub mod navigation_bar;
    pub use navigation_bar::{register_links, LinkBuilder, MobileDrawer, NavLink, NavigationBar};

    // Infinite client logo marquee (components/client_carousel.rs)
    pub mod client_carousel;
    pub use client_carousel::ClientLogoCarousel;

    // Inline SVG glyphs (components/glyph.rs)
    pub mod glyph;
    pub use glyph::GlyphIcon;
}

use dioxus::prelude::*;

/// Shared theme (tokens, body rules, scroll lock class).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
