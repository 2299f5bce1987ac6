//! Compile-time site configuration.
//!
//! Everything here is a constant: the site has no runtime settings file.
//! Platform selection happens through Cargo features on the `web` crate and
//! localization through `i18n.toml`.

/// Viewport width thresholds (CSS pixels) separating the three layout tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Widths below this are phones.
    pub compact: f64,
    /// Widths at or above this are full desktop layouts.
    pub wide: f64,
}

impl Breakpoints {
    pub const fn new(compact: f64, wide: f64) -> Self {
        Self { compact, wide }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        SITE.breakpoints
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub breakpoints: Breakpoints,
    /// Marquee speed: one full loop takes this many seconds per distinct client.
    pub seconds_per_client: u64,
    /// How many back-to-back copies of the client list the marquee track holds.
    pub marquee_copies: usize,
    /// Body class that suppresses background scrolling.
    pub scroll_lock_class: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    breakpoints: Breakpoints::new(768.0, 1024.0),
    seconds_per_client: 4,
    marquee_copies: 2,
    scroll_lock_class: "no-scroll",
};
