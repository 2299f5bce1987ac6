//! Viewport tier classification.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use super::config::Breakpoints;
use super::host::{use_host, Subscription};

/// How many carousel logos fit side by side at a given viewport tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ItemsPerView {
    One,
    Two,
    #[default]
    Three,
}

impl ItemsPerView {
    /// Bucket a viewport width. Lower thresholds are inclusive:
    /// `width < compact` is one, `compact <= width < wide` is two, otherwise three.
    pub fn classify(width: f64, breakpoints: Breakpoints) -> Self {
        if width < breakpoints.compact {
            Self::One
        } else if width < breakpoints.wide {
            Self::Two
        } else {
            Self::Three
        }
    }

    pub fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Track the viewport tier of the calling component.
///
/// Starts at [`ItemsPerView::Three`], reclassifies on mount and on every
/// resize, and drops the resize subscription on unmount. Without a viewport
/// the initial value is kept and no listener is registered.
pub fn use_items_per_view(breakpoints: Breakpoints) -> Signal<ItemsPerView> {
    let host = use_host();
    let mut items = use_signal(ItemsPerView::default);
    let subscription = use_hook(|| Rc::new(RefCell::new(None::<Subscription>)));

    {
        let subscription = subscription.clone();
        use_effect(move || {
            let Some(width) = host.viewport_width() else {
                return;
            };
            items.set(ItemsPerView::classify(width, breakpoints));

            let source = host.clone();
            let sub = host.subscribe_resize(Rc::new(move || {
                if let Some(width) = source.viewport_width() {
                    let next = ItemsPerView::classify(width, breakpoints);
                    if *items.peek() != next {
                        debug!(width, items = next.count(), "viewport tier changed");
                        let mut items = items;
                        items.set(next);
                    }
                }
            }));
            subscription.borrow_mut().replace(sub);
        });
    }

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_lower_bound_inclusive() {
        let bp = Breakpoints::default();
        let cases = [
            (0.0, 1),
            (767.0, 1),
            (767.9, 1),
            (768.0, 2),
            (1023.0, 2),
            (1024.0, 3),
            (2560.0, 3),
        ];
        for (width, expected) in cases {
            assert_eq!(
                ItemsPerView::classify(width, bp).count(),
                expected,
                "width {width}"
            );
        }
    }

    #[test]
    fn custom_breakpoints_are_respected() {
        let bp = Breakpoints::new(480.0, 900.0);
        assert_eq!(ItemsPerView::classify(500.0, bp), ItemsPerView::Two);
        assert_eq!(ItemsPerView::classify(900.0, bp), ItemsPerView::Three);
    }

    #[test]
    fn default_tier_is_widest() {
        assert_eq!(ItemsPerView::default().count(), 3);
    }
}
