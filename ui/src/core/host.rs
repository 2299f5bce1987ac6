//! Environment capabilities consumed by the components.
//!
//! Components never touch `window` or `document` directly. They ask the
//! nearest [`Host`] (provided through context, or the platform default) for
//! the viewport width, resize notifications and body class mutations. Outside
//! an interactive renderer (server rendering, tests, native builds) the
//! [`HeadlessHost`] turns every capability into a silent no-op.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::{Rc, Weak};

use dioxus::prelude::*;

pub type ResizeCallback = Rc<dyn Fn()>;

/// Shared handle stored in context by platforms or tests that want to swap
/// the environment out.
pub type SharedHost = Rc<dyn Host>;

pub trait Host {
    /// Current viewport width in CSS pixels, `None` when there is no viewport.
    fn viewport_width(&self) -> Option<f64>;

    /// Register `callback` for viewport resizes. The listener stays registered
    /// for as long as the returned [`Subscription`] is alive.
    fn subscribe_resize(&self, callback: ResizeCallback) -> Subscription;

    /// Add (`present == true`) or remove a class on the document body.
    fn set_body_class(&self, class: &str, present: bool);
}

/// Handle for a registered external listener. Dropping it deregisters.
#[must_use = "dropping a Subscription immediately deregisters the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release (no viewport to listen on).
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Host for non-interactive contexts. Nothing to observe, nothing to mutate.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessHost;

impl Host for HeadlessHost {
    fn viewport_width(&self) -> Option<f64> {
        None
    }

    fn subscribe_resize(&self, _callback: ResizeCallback) -> Subscription {
        Subscription::empty()
    }

    fn set_body_class(&self, _class: &str, _present: bool) {}
}

type Listeners = RefCell<Vec<(u64, ResizeCallback)>>;

/// In-memory host: a scripted viewport and a body class set.
///
/// Useful for embedding the components somewhere without a DOM and for
/// driving them from tests.
#[derive(Default)]
pub struct MemoryHost {
    width: Cell<Option<f64>>,
    listeners: Rc<Listeners>,
    next_listener: Cell<u64>,
    body_classes: RefCell<BTreeSet<String>>,
}

impl MemoryHost {
    pub fn with_width(width: f64) -> Self {
        let host = Self::default();
        host.width.set(Some(width));
        host
    }

    /// Change the viewport width and notify every registered listener.
    pub fn resize(&self, width: f64) {
        self.width.set(Some(width));
        // Snapshot first so a listener may (de)register without a borrow clash.
        let callbacks: Vec<ResizeCallback> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.borrow().contains(class)
    }
}

impl Host for MemoryHost {
    fn viewport_width(&self) -> Option<f64> {
        self.width.get()
    }

    fn subscribe_resize(&self, callback: ResizeCallback) -> Subscription {
        if self.width.get().is_none() {
            return Subscription::empty();
        }
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, callback));

        let listeners: Weak<Listeners> = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(other, _)| *other != id);
            }
        })
    }

    fn set_body_class(&self, class: &str, present: bool) {
        let mut classes = self.body_classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use tracing::warn;
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;

    use super::{Host, ResizeCallback, Subscription};

    /// Host backed by the real browser `window` and `document.body`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserHost;

    impl Host for BrowserHost {
        fn viewport_width(&self) -> Option<f64> {
            web_sys::window()?.inner_width().ok()?.as_f64()
        }

        fn subscribe_resize(&self, callback: ResizeCallback) -> Subscription {
            let Some(window) = web_sys::window() else {
                return Subscription::empty();
            };
            let closure = Closure::<dyn Fn()>::new(move || callback());
            if let Err(err) =
                window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            {
                warn!("resize listener registration failed: {err:?}");
                return Subscription::empty();
            }
            Subscription::new(move || {
                if let Err(err) = window
                    .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                {
                    warn!("resize listener removal failed: {err:?}");
                }
            })
        }

        fn set_body_class(&self, class: &str, present: bool) {
            let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            else {
                return;
            };
            let classes = body.class_list();
            let result = if present {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
            if let Err(err) = result {
                warn!("body class `{class}` update failed: {err:?}");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHost;

/// The host matching the current build target and runtime.
pub fn platform_host() -> SharedHost {
    #[cfg(target_arch = "wasm32")]
    {
        if web_sys::window().is_some() {
            return Rc::new(BrowserHost);
        }
    }
    Rc::new(HeadlessHost)
}

/// Host for the calling component: context-provided if any, else the platform default.
pub fn use_host() -> SharedHost {
    let provided = try_use_context::<SharedHost>();
    use_hook(move || provided.unwrap_or_else(platform_host))
}
