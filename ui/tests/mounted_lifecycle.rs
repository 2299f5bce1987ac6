//! Mounted-component checks: clicks are dispatched into a live `VirtualDom`
//! and effects are flushed so the host sees what a browser would.

use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{AttributeValue, ElementId, Mutation};
use dioxus::html::SerializedHtmlEventConverter;
use dioxus::prelude::*;
use ui::components::{ClientLogoCarousel, NavigationBar};
use ui::core::host::{Host, MemoryHost, SharedHost};

const LOCK: &str = "no-scroll";

#[derive(Clone)]
struct HarnessProps {
    host: Rc<MemoryHost>,
    with_carousel: bool,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    let host: SharedHost = props.host.clone();
    use_context_provider(move || host);
    rsx! {
        NavigationBar { current_path: "/".to_string() }
        if props.with_carousel {
            ClientLogoCarousel {}
        }
    }
}

/// Run queued renders, tasks and effects until the dom is idle.
fn settle(dom: &mut VirtualDom) -> Vec<Mutation> {
    let mut edits = Vec::new();
    for _ in 0..4 {
        edits.extend(dom.render_immediate_to_vec().edits);
    }
    edits
}

fn click(dom: &VirtualDom, id: ElementId) {
    let event = Event::new(
        Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
        true,
    );
    dom.runtime().handle_event("click", event, id);
}

/// Element carrying a dynamic `attr` whose text value satisfies `accept`.
fn owner_of(edits: &[Mutation], attr: &str, accept: impl Fn(&str) -> bool) -> Option<ElementId> {
    edits.iter().find_map(|edit| match edit {
        Mutation::SetAttribute {
            name,
            value: AttributeValue::Text(text),
            id,
            ..
        } if *name == attr && accept(text) => Some(*id),
        _ => None,
    })
}

fn click_targets(edits: &[Mutation]) -> Vec<ElementId> {
    edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
            _ => None,
        })
        .collect()
}

struct MountedNavbar {
    dom: VirtualDom,
    host: Rc<MemoryHost>,
    toggle: ElementId,
    close: ElementId,
    drawer_link: ElementId,
    click_targets: Vec<ElementId>,
}

impl MountedNavbar {
    fn mount() -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));

        let host = Rc::new(MemoryHost::with_width(390.0));
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                host: host.clone(),
                with_carousel: false,
            },
        );
        let edits = dom.rebuild_to_vec().edits;
        settle(&mut dom);

        let toggle = owner_of(&edits, "aria-expanded", |_| true).expect("toggle button");
        let close = edits
            .iter()
            .find_map(|edit| match edit {
                Mutation::SetAttribute { name, id, .. } if *name == "aria-label" && *id != toggle => {
                    Some(*id)
                }
                _ => None,
            })
            .expect("drawer close button");
        let drawer_link = owner_of(&edits, "class", |class| {
            class.starts_with("navbar__drawer-link")
        })
        .expect("drawer link");

        Self {
            dom,
            host,
            toggle,
            close,
            drawer_link,
            click_targets: click_targets(&edits),
        }
    }

    fn locked(&self) -> bool {
        self.host.has_body_class(LOCK)
    }

    fn markup(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Click `id` and return the edits the click caused.
    fn click(&mut self, id: ElementId) -> Vec<Mutation> {
        click(&self.dom, id);
        settle(&mut self.dom)
    }

    /// Open the drawer and return the backdrop that appeared with it.
    fn open(&mut self) -> ElementId {
        let edits = self.click(self.toggle);
        assert!(self.locked(), "opening the drawer locks body scroll");
        assert!(self.markup().contains("navbar__drawer--open"));

        let known = &self.click_targets;
        click_targets(&edits)
            .into_iter()
            .find(|id| !known.contains(id))
            .expect("backdrop listener")
    }
}

#[test]
fn toggle_click_locks_and_unlocks_body_scroll() {
    let mut navbar = MountedNavbar::mount();
    assert!(!navbar.locked());

    navbar.open();
    assert!(navbar.markup().contains("navbar__backdrop"));

    navbar.click(navbar.toggle);
    assert!(!navbar.locked());
    let html = navbar.markup();
    assert!(!html.contains("navbar__drawer--open"), "{html}");
    assert!(!html.contains("navbar__backdrop"), "{html}");
}

#[test]
fn backdrop_click_closes_drawer() {
    let mut navbar = MountedNavbar::mount();
    let backdrop = navbar.open();

    navbar.click(backdrop);
    assert!(!navbar.locked());
    assert!(!navbar.markup().contains("navbar__backdrop"));
}

#[test]
fn close_button_closes_drawer() {
    let mut navbar = MountedNavbar::mount();
    navbar.open();

    navbar.click(navbar.close);
    assert!(!navbar.locked());
    assert!(!navbar.markup().contains("navbar__drawer--open"));
}

#[test]
fn drawer_link_closes_drawer() {
    let mut navbar = MountedNavbar::mount();
    navbar.open();

    navbar.click(navbar.drawer_link);
    assert!(!navbar.locked());
    assert!(!navbar.markup().contains("navbar__drawer--open"));
}

#[test]
fn reopening_after_close_locks_again() {
    let mut navbar = MountedNavbar::mount();
    navbar.open();
    navbar.click(navbar.close);
    assert!(!navbar.locked());

    navbar.open();
    assert!(navbar.locked());
}

#[test]
fn unmount_while_open_clears_scroll_lock() {
    let mut navbar = MountedNavbar::mount();
    navbar.open();
    let host = navbar.host.clone();

    drop(navbar);
    assert!(!host.has_body_class(LOCK));
}

#[test]
fn unmount_clears_scroll_lock_set_elsewhere() {
    let host = Rc::new(MemoryHost::with_width(390.0));
    host.set_body_class(LOCK, true);

    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            host: host.clone(),
            with_carousel: false,
        },
    );
    dom.rebuild_in_place();
    drop(dom);

    assert!(!host.has_body_class(LOCK));
}

#[test]
fn carousel_resize_listener_lives_as_long_as_the_component() {
    let host = Rc::new(MemoryHost::with_width(900.0));
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            host: host.clone(),
            with_carousel: true,
        },
    );
    dom.rebuild_in_place();
    assert_eq!(host.listener_count(), 0, "effects have not run yet");

    settle(&mut dom);
    assert_eq!(host.listener_count(), 1);

    dom.in_runtime(|| host.resize(1280.0));
    settle(&mut dom);
    assert_eq!(host.listener_count(), 1);

    drop(dom);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn carousel_without_viewport_registers_nothing() {
    let host = Rc::new(MemoryHost::default());
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            host: host.clone(),
            with_carousel: true,
        },
    );
    dom.rebuild_in_place();
    settle(&mut dom);
    assert_eq!(host.listener_count(), 0);
}
