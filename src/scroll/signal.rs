//! Viewport scroll signal with scoped subscriptions
//!
//! A [`Subscription`] is the only handle to a registered listener. Dropping it
//! (or calling [`Subscription::unsubscribe`]) removes the listener, so a page
//! that goes away cannot leave a callback behind.

use crate::Viewport;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEventKind {
    Scroll,
    Resize,
}

/// One scroll or resize tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportEvent {
    pub kind: ViewportEventKind,
    pub scroll_y: f64,
    pub viewport: Viewport,
}

impl ViewportEvent {
    pub fn scroll(scroll_y: f64, viewport: Viewport) -> Self {
        Self {
            kind: ViewportEventKind::Scroll,
            scroll_y,
            viewport,
        }
    }

    pub fn resize(scroll_y: f64, viewport: Viewport) -> Self {
        Self {
            kind: ViewportEventKind::Resize,
            scroll_y,
            viewport,
        }
    }

    pub fn viewport_height(&self) -> f64 {
        f64::from(self.viewport.height)
    }
}

pub type ScrollListener = Arc<dyn Fn(&ViewportEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, ScrollListener)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    // listeners never run under the lock
    registry.lock().unwrap_or_else(|e| e.into_inner())
}

/// Source of viewport events. Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct ScrollSignal {
    registry: Arc<Mutex<Registry>>,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`. It stays registered for as long as the returned
    /// guard lives.
    #[must_use = "dropping the subscription immediately unregisters the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ViewportEvent) + Send + Sync + 'static,
    {
        let mut reg = lock(&self.registry);
        let id = reg.next_id;
        reg.next_id += 1;
        reg.listeners.push((id, Arc::new(listener)));
        log::debug!("scroll listener {} subscribed ({} active)", id, reg.listeners.len());
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every registered listener and return how many ran.
    pub fn dispatch(&self, event: &ViewportEvent) -> usize {
        let listeners: Vec<ScrollListener> = lock(&self.registry)
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for l in &listeners {
            l(event);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

impl std::fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSignal")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard for a registered listener
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Whether the listener is still registered with a live signal.
    pub fn is_active(&self) -> bool {
        match self.registry.upgrade() {
            Some(reg) => lock(&reg).listeners.iter().any(|(id, _)| *id == self.id),
            None => false,
        }
    }

    /// Release the listener now instead of at drop.
    pub fn unsubscribe(self) {
        drop(self);
    }

    fn release(&self) {
        if let Some(reg) = self.registry.upgrade() {
            let mut reg = lock(&reg);
            reg.listeners.retain(|(id, _)| *id != self.id);
            log::debug!("scroll listener {} released ({} active)", self.id, reg.listeners.len());
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn dispatch_reaches_subscribers_until_released() {
        let signal = ScrollSignal::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let sub = signal.subscribe(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });

        let ev = ViewportEvent::scroll(10.0, Viewport::default());
        assert_eq!(signal.dispatch(&ev), 1);
        assert!(sub.is_active());

        sub.unsubscribe();
        assert_eq!(signal.dispatch(&ev), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn dropping_guard_on_early_return_releases() {
        let signal = ScrollSignal::new();
        fn scoped(signal: &ScrollSignal, bail: bool) -> Option<()> {
            let _sub = signal.subscribe(|_| {});
            if bail {
                return None;
            }
            Some(())
        }
        assert!(scoped(&signal, true).is_none());
        assert!(scoped(&signal, false).is_some());
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_signal_is_inert() {
        let signal = ScrollSignal::new();
        let sub = signal.subscribe(|_| {});
        drop(signal);
        assert!(!sub.is_active());
        drop(sub);
    }

    #[test]
    fn listener_may_unsubscribe_others_during_dispatch() {
        let signal = ScrollSignal::new();
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let s = slot.clone();
        let _first = signal.subscribe(move |_| {
            s.lock().unwrap().take();
        });
        *slot.lock().unwrap() = Some(signal.subscribe(|_| {}));
        assert_eq!(signal.listener_count(), 2);
        signal.dispatch(&ViewportEvent::scroll(0.0, Viewport::default()));
        assert_eq!(signal.listener_count(), 1);
    }
}
