//! Page components
//!
//! A page owns the only mutable state in the site: scroll progress, the
//! active section and the preview overlay. While mounted it holds a
//! [`Subscription`] on the viewport signal and recomputes that state on every
//! event; unmounting drops the subscription, after which events no longer
//! reach it.

mod gallery;
mod portfolio;

pub use gallery::GalleryPage;
pub use portfolio::PortfolioPage;

use crate::geometry::PageGeometry;
use crate::navigation::{Route, ScrollRequest};
use crate::preview::PreviewOverlay;
use crate::scroll::{ScrollEngine, ScrollFrame, ScrollSample, ScrollSignal, StyleBindings, Subscription, ViewportEvent};
use crate::section::SectionId;
use crate::{Result, Viewport};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Observable state of a page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageState {
    /// Last sampled scroll offset
    pub scroll_y: f64,
    /// Scroll progress in `[0, 100]`
    pub scroll_progress: f64,
    /// Highlighted navigation entry; always `None` on pages without sections
    pub active_section: Option<SectionId>,
    pub preview: PreviewOverlay,
    pub bindings: StyleBindings,
}

impl PageState {
    fn apply(&mut self, frame: &ScrollFrame) {
        self.scroll_y = frame.scroll_y;
        self.scroll_progress = frame.progress;
        self.active_section = frame.active_section;
        self.bindings = StyleBindings::from_frame(frame);
    }
}

/// Common surface of the portfolio and gallery pages
pub trait Page {
    fn route(&self) -> Route;

    /// Render the page as it currently looks.
    fn render(&self) -> String;

    /// Subscribe to `signal` and compute the initial state from `initial`.
    /// Mounting an already mounted page remounts it. The returned request, if
    /// any, asks the host to move the viewport before further events.
    fn mount(&mut self, signal: &ScrollSignal, initial: ViewportEvent) -> Option<ScrollRequest>;

    /// Release the subscription. Idempotent.
    fn unmount(&mut self);

    fn is_mounted(&self) -> bool;

    /// Snapshot of the current state.
    fn state(&self) -> PageState;

    /// Snapshot of the current geometry.
    fn geometry(&self) -> PageGeometry;

    /// Show `image_ref` in the preview overlay, replacing any open preview.
    fn open_preview(&mut self, image_ref: &str);

    fn close_preview(&mut self);
}

type Remeasure = Arc<dyn Fn(Viewport) -> Result<PageGeometry> + Send + Sync>;

struct Measured {
    viewport: Viewport,
    geometry: PageGeometry,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

/// State, geometry and subscription shared by both pages
pub(crate) struct PageCore {
    state: Arc<Mutex<PageState>>,
    measured: Arc<Mutex<Measured>>,
    engine: ScrollEngine,
    initial_section: Option<SectionId>,
    remeasure: Remeasure,
    subscription: Option<Subscription>,
}

impl PageCore {
    pub(crate) fn new(
        engine: ScrollEngine,
        viewport: Viewport,
        initial_section: Option<SectionId>,
        remeasure: Remeasure,
    ) -> Result<Self> {
        let geometry = remeasure(viewport)?;
        Ok(Self {
            state: Arc::new(Mutex::new(PageState {
                active_section: initial_section,
                ..Default::default()
            })),
            measured: Arc::new(Mutex::new(Measured { viewport, geometry })),
            engine,
            initial_section,
            remeasure,
            subscription: None,
        })
    }

    /// Replace the measured geometry, e.g. with one captured from a browser.
    pub(crate) fn set_geometry(&mut self, geometry: PageGeometry) {
        lock(&self.measured).geometry = geometry;
    }

    pub(crate) fn mount(&mut self, signal: &ScrollSignal, initial: ViewportEvent) {
        self.unmount();
        {
            let mut st = lock(&self.state);
            *st = PageState {
                active_section: self.initial_section,
                ..Default::default()
            };
        }

        let state = self.state.clone();
        let measured = self.measured.clone();
        let engine = self.engine;
        let remeasure = self.remeasure.clone();
        let on_event = move |ev: &ViewportEvent| apply_event(&state, &measured, engine, &remeasure, ev);

        on_event(&initial);
        self.subscription = Some(signal.subscribe(on_event));
    }

    pub(crate) fn unmount(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.unsubscribe();
        }
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    pub(crate) fn state(&self) -> PageState {
        lock(&self.state).clone()
    }

    pub(crate) fn geometry(&self) -> PageGeometry {
        lock(&self.measured).geometry.clone()
    }

    pub(crate) fn viewport(&self) -> Viewport {
        lock(&self.measured).viewport
    }

    pub(crate) fn open_preview(&self, image_ref: &str) {
        lock(&self.state).preview.open(image_ref);
    }

    pub(crate) fn close_preview(&self) {
        lock(&self.state).preview.close();
    }
}

impl Drop for PageCore {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn apply_event(
    state: &Mutex<PageState>,
    measured: &Mutex<Measured>,
    engine: ScrollEngine,
    remeasure: &Remeasure,
    ev: &ViewportEvent,
) {
    let mut m = lock(measured);
    if m.viewport.width != ev.viewport.width {
        match remeasure(ev.viewport) {
            Ok(g) => m.geometry = g,
            Err(e) => log::warn!("keeping previous geometry after resize: {}", e),
        }
    }
    m.viewport = ev.viewport;

    let sample = ScrollSample {
        scroll_y: ev.scroll_y,
        viewport_height: ev.viewport_height(),
    };
    let mut st = lock(state);
    let frame = engine.recompute(sample, &m.geometry, st.active_section);
    log::debug!(
        "{:?} at {}: progress={:.2} active={:?}",
        ev.kind,
        ev.scroll_y,
        frame.progress,
        frame.active_section
    );
    st.apply(&frame);
}

/// Measure a rendered page. Without the `layout` feature there is no
/// measurement and the page is treated as exactly one viewport tall.
pub(crate) fn measure(html: &str, viewport: Viewport) -> Result<PageGeometry> {
    #[cfg(feature = "layout")]
    {
        crate::rendering::layout::measure_document(html, viewport)
    }
    #[cfg(not(feature = "layout"))]
    {
        let _ = html;
        Ok(PageGeometry {
            document_height: f64::from(viewport.height),
            ..Default::default()
        })
    }
}
