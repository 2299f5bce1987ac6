//! Client roster and the marquee track built from it.

use std::time::Duration;

use crate::core::config::SITE;
use crate::core::motion::format_seconds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Client {
    pub name: &'static str,
    /// Public path of the logo image.
    pub logo: &'static str,
}

pub const CLIENTS: &[Client] = &[
    Client {
        name: "Revolut",
        logo: "/revolut-logo.svg",
    },
    Client {
        name: "NorthOne",
        logo: "/northone-logo.svg",
    },
    Client {
        name: "Checkout",
        logo: "/checkout-logo.svg",
    },
];

/// Keyframes name referenced by [`MarqueeTrack::animation_css`]; defined in
/// `carousel.css` as a translation from 0 to -50%.
pub const MARQUEE_KEYFRAMES: &str = "scroll-left";

/// The client list repeated back to back, plus the timing that makes the
/// repetition loop without a visible seam.
///
/// The track is `copies * 100%` wide and slides left by one copy per cycle, so
/// when the cycle restarts copy two sits exactly where copy one began. The
/// cycle length depends on the source list only, never on `copies`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeTrack {
    items: Vec<Client>,
    source_len: usize,
    copies: usize,
    seconds_per_client: u64,
}

impl MarqueeTrack {
    pub fn new(source: &[Client], copies: usize) -> Self {
        let copies = copies.max(1);
        let items = std::iter::repeat(source)
            .take(copies)
            .flatten()
            .copied()
            .collect();
        Self {
            items,
            source_len: source.len(),
            copies,
            seconds_per_client: SITE.seconds_per_client,
        }
    }

    /// Track for the site roster with the configured copy count.
    pub fn site() -> Self {
        Self::new(CLIENTS, SITE.marquee_copies)
    }

    pub fn items(&self) -> &[Client] {
        &self.items
    }

    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn copies(&self) -> usize {
        self.copies
    }

    /// One full loop.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.source_len as u64 * self.seconds_per_client)
    }

    /// Track width as a percentage of its container.
    pub fn width_percent(&self) -> usize {
        self.copies * 100
    }

    pub fn animation_css(&self) -> String {
        format!(
            "{MARQUEE_KEYFRAMES} {} linear infinite",
            format_seconds(self.duration())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_track_repeats_source_in_order() {
        let track = MarqueeTrack::new(CLIENTS, 2);
        assert_eq!(track.items().len(), CLIENTS.len() * 2);
        for (i, client) in track.items().iter().enumerate() {
            assert_eq!(client, &CLIENTS[i % CLIENTS.len()]);
        }
    }

    #[test]
    fn duration_ignores_copy_count() {
        let doubled = MarqueeTrack::new(CLIENTS, 2);
        let tripled = MarqueeTrack::new(CLIENTS, 3);
        assert_eq!(doubled.duration(), Duration::from_secs(12));
        assert_eq!(doubled.duration(), tripled.duration());
        assert_eq!(doubled.animation_css(), "scroll-left 12s linear infinite");
    }

    #[test]
    fn duration_scales_with_source_length() {
        let one = MarqueeTrack::new(&CLIENTS[..1], 2);
        assert_eq!(one.duration(), Duration::from_secs(4));
    }

    #[test]
    fn track_width_covers_every_copy() {
        assert_eq!(MarqueeTrack::site().width_percent(), 200);
    }

    #[test]
    fn empty_roster_yields_empty_track() {
        let track = MarqueeTrack::new(&[], 2);
        assert!(track.items().is_empty());
        assert_eq!(track.duration(), Duration::ZERO);
    }

    #[test]
    fn zero_copies_is_clamped() {
        assert_eq!(MarqueeTrack::new(CLIENTS, 0).copies(), 1);
    }
}
