use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::GlyphIcon;
use crate::core::host::use_host;
use crate::core::scroll_lock::ScrollLock;
use crate::i18n;
use crate::navigation::{
    is_active, Glyph, MenuEvent, MenuState, NavigationItem, CTA_URL, HOME_URL, NAVIGATION_ITEMS,
};
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const LOGO_SRC: &str = "/landing/sync-logo.svg";

/// A link the navbar wants rendered. The platform decides how it navigates.
pub struct NavLink {
    pub to: &'static str,
    pub class: String,
    /// Fired before navigation (the drawer uses it to close itself).
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

/// Platform hook for client-side navigation.
///
/// `ui` does not know the platform's `Route` enum, so the platform crate
/// registers a function that turns a [`NavLink`] into its router `Link`.
/// Without a registration the navbar renders plain anchors (full page loads).
///
/// ```ignore
/// fn route_link(link: NavLink) -> Element {
///     rsx! { Link { to: link.to, class: link.class, {link.children} } }
/// }
/// register_links(LinkBuilder { link: route_link });
/// ```
pub struct LinkBuilder {
    pub link: fn(NavLink) -> Element,
}

static LINK_BUILDER: OnceCell<LinkBuilder> = OnceCell::new();

pub fn register_links(builder: LinkBuilder) {
    let _ = LINK_BUILDER.set(builder);
}

fn render_link(link: NavLink) -> Element {
    if let Some(builder) = LINK_BUILDER.get() {
        return (builder.link)(link);
    }
    let NavLink {
        to,
        class,
        onclick,
        children,
    } = link;
    rsx! {
        a {
            href: to,
            class: "{class}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Fixed site header: logo, centered links, call to action and the mobile drawer.
///
/// `current_path` comes from the platform router; when it is absent no link is
/// highlighted. While mounted, the body scroll-lock class mirrors whether the
/// drawer is open and it is always removed on unmount.
#[component]
pub fn NavigationBar(current_path: Option<String>) -> Element {
    i18n::init();

    let host = use_host();
    let mut menu = use_signal(MenuState::default);
    let lock = use_hook(|| Rc::new(RefCell::new(ScrollLock::new(host.clone()))));

    {
        let lock = lock.clone();
        use_effect(move || {
            let open = menu().is_open();
            lock.borrow_mut().sync(open);
        });
    }
    use_drop(move || lock.borrow_mut().release());

    let open = menu().is_open();
    let path = current_path.as_deref();
    let mut on_event = move |event: MenuEvent| {
        let next = menu.peek().apply(event);
        menu.set(next);
    };

    let logo_alt = t!("logo-alt");
    let toggle_label = if open {
        t!("nav-close-menu")
    } else {
        t!("nav-open-menu")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__bar",
                    div { class: "navbar__brand",
                        {render_link(NavLink {
                            to: HOME_URL,
                            class: "navbar__brand-link".to_string(),
                            onclick: None,
                            children: rsx! {
                                img { class: "navbar__logo", src: LOGO_SRC, alt: "{logo_alt}" }
                            },
                        })}
                    }

                    div { class: "navbar__links",
                        for item in NAVIGATION_ITEMS.iter() {
                            {desktop_link(item, path)}
                        }
                    }

                    div { class: "navbar__cta",
                        {render_link(NavLink {
                            to: CTA_URL,
                            class: "navbar__cta-link".to_string(),
                            onclick: None,
                            children: rsx! {
                                span { class: "button button--primary navbar__cta-button", {t!("cta-buy-card")} }
                            },
                        })}
                    }

                    div { class: "navbar__toggle-wrap",
                        button {
                            r#type: "button",
                            class: "navbar__toggle",
                            aria_label: "{toggle_label}",
                            aria_expanded: "{open}",
                            aria_controls: "navbar-drawer",
                            onclick: move |_| on_event(MenuEvent::Toggle),
                            GlyphIcon {
                                glyph: if open { Glyph::Close } else { Glyph::Menu },
                                class: "navbar__toggle-icon".to_string(),
                            }
                        }
                    }
                }
            }

            MobileDrawer {
                open,
                current_path: current_path.clone(),
                on_event: move |event| on_event(event),
            }
        }
    }
}

fn desktop_link(item: &NavigationItem, path: Option<&str>) -> Element {
    let class = if is_active(item, path) {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    };
    let title = item.title;
    rsx! {
        Fragment { key: "{title}",
            {render_link(NavLink {
                to: item.url,
                class: class.to_string(),
                onclick: None,
                children: rsx! {
                    "{title}"
                    span { class: "navbar__underline" }
                },
            })}
        }
    }
}

/// Off-canvas drawer for narrow viewports plus its backdrop.
///
/// The panel is always in the tree and slides in through the
/// `navbar__drawer--open` class; the backdrop only exists while open.
#[component]
pub fn MobileDrawer(
    open: bool,
    #[props(!optional)] current_path: Option<String>,
    on_event: EventHandler<MenuEvent>,
) -> Element {
    i18n::init();

    let path = current_path.as_deref();
    let drawer_class = if open {
        "navbar__drawer navbar__drawer--open"
    } else {
        "navbar__drawer"
    };
    let hidden = !open;
    let close_on_click = move |_evt: MouseEvent| on_event.call(MenuEvent::LinkActivated);

    rsx! {
        div {
            id: "navbar-drawer",
            class: "{drawer_class}",
            aria_hidden: "{hidden}",
            div { class: "navbar__drawer-body",
                button {
                    r#type: "button",
                    class: "navbar__drawer-close",
                    aria_label: t!("nav-back"),
                    onclick: move |_| on_event.call(MenuEvent::CloseClicked),
                    GlyphIcon { glyph: Glyph::BackArrow, class: "navbar__drawer-close-icon".to_string() }
                }

                for item in NAVIGATION_ITEMS.iter() {
                    {drawer_link(item, path, on_event)}
                }

                div { class: "navbar__drawer-footer",
                    {render_link(NavLink {
                        to: CTA_URL,
                        class: "navbar__drawer-cta".to_string(),
                        onclick: Some(EventHandler::new(close_on_click)),
                        children: rsx! {
                            span { class: "button button--primary button--block", {t!("cta-get-started")} }
                        },
                    })}
                }
            }
        }

        if open {
            div {
                class: "navbar__backdrop",
                onclick: move |_| on_event.call(MenuEvent::BackdropClicked),
            }
        }
    }
}

fn drawer_link(
    item: &NavigationItem,
    path: Option<&str>,
    on_event: EventHandler<MenuEvent>,
) -> Element {
    let active = is_active(item, path);
    let class = if active {
        "navbar__drawer-link navbar__drawer-link--active"
    } else {
        "navbar__drawer-link"
    };
    let title = item.title;
    let icon = item.icon;
    rsx! {
        Fragment { key: "{title}",
            {render_link(NavLink {
                to: item.url,
                class: class.to_string(),
                onclick: Some(EventHandler::new(move |_evt: MouseEvent| {
                    on_event.call(MenuEvent::LinkActivated)
                })),
                children: rsx! {
                    GlyphIcon { glyph: icon, class: "navbar__drawer-icon".to_string() }
                    span { class: "navbar__drawer-label", "{title}" }
                },
            })}
        }
    }
}
