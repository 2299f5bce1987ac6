//! Scoped "suppress background scroll" capability.
//!
//! A [`ScrollLock`] is the only writer of the scroll-lock body class. The
//! owning component mirrors its open/closed state through [`ScrollLock::sync`]
//! and the class is removed again when the lock is released or dropped, so it
//! never outlives the component that set it.

use super::config::SITE;
use super::host::SharedHost;

pub struct ScrollLock {
    host: SharedHost,
    class: &'static str,
    engaged: bool,
}

impl ScrollLock {
    pub fn new(host: SharedHost) -> Self {
        Self::with_class(host, SITE.scroll_lock_class)
    }

    pub fn with_class(host: SharedHost, class: &'static str) -> Self {
        Self {
            host,
            class,
            engaged: false,
        }
    }

    /// Make the body flag match `locked`.
    pub fn sync(&mut self, locked: bool) {
        self.host.set_body_class(self.class, locked);
        self.engaged = locked;
    }

    /// Remove the flag regardless of the last synced state.
    pub fn release(&mut self) {
        self.host.set_body_class(self.class, false);
        self.engaged = false;
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.release();
    }
}
