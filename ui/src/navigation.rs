//! Navigation data and the mobile menu state machine.

use tracing::debug;

/// Logical glyph names; the drawing lives in `components::glyph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Home,
    Info,
    PaymentCard,
    Tool,
    Person,
    Menu,
    Close,
    BackArrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    /// Label, also the list key. Unique within [`NAVIGATION_ITEMS`].
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Glyph,
}

pub const NAVIGATION_ITEMS: &[NavigationItem] = &[
    NavigationItem {
        title: "Home",
        url: "/",
        icon: Glyph::Home,
    },
    NavigationItem {
        title: "About",
        url: "/about",
        icon: Glyph::Info,
    },
    NavigationItem {
        title: "Cards",
        url: "/cards",
        icon: Glyph::PaymentCard,
    },
    NavigationItem {
        title: "Services",
        url: "/services",
        icon: Glyph::Tool,
    },
    NavigationItem {
        title: "Contact",
        url: "/contact",
        icon: Glyph::Person,
    },
];

/// Target of both call-to-action buttons.
pub const CTA_URL: &str = "/cards";

/// Logo target.
pub const HOME_URL: &str = "/";

/// Exact path match. Without a known location nothing is active.
pub fn is_active(item: &NavigationItem, current_path: Option<&str>) -> bool {
    current_path.is_some_and(|path| path == item.url)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User interactions that affect the mobile drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger / close glyph in the header.
    Toggle,
    /// Any link inside the drawer, including its call to action.
    LinkActivated,
    BackdropClicked,
    /// Back arrow inside the drawer.
    CloseClicked,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn apply(self, event: MenuEvent) -> Self {
        let next = match (self, event) {
            (Self::Closed, MenuEvent::Toggle) => Self::Open,
            (Self::Open, MenuEvent::Toggle) => Self::Closed,
            (_, MenuEvent::LinkActivated | MenuEvent::BackdropClicked | MenuEvent::CloseClicked) => {
                Self::Closed
            }
        };
        if next != self {
            debug!(?event, from = ?self, to = ?next, "mobile menu transition");
        }
        next
    }
}
