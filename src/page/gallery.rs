use super::{measure, Page, PageCore, PageState, Remeasure};
use crate::content::Content;
use crate::geometry::PageGeometry;
use crate::navigation::{Route, ScrollRequest};
use crate::rendering::render_gallery;
use crate::scroll::{ScrollEngine, ScrollSignal, ViewportEvent};
use crate::{Result, SiteConfig, Viewport};
use std::sync::Arc;

/// Flat grid of every certification. Tracks progress and visibility only.
pub struct GalleryPage {
    content: Arc<Content>,
    config: SiteConfig,
    core: PageCore,
}

impl GalleryPage {
    pub fn new(content: Arc<Content>, config: SiteConfig) -> Result<Self> {
        let remeasure: Remeasure = {
            let content = content.clone();
            let config = config.clone();
            Arc::new(move |viewport: Viewport| {
                let html = render_gallery(&content, &config, &PageState::default());
                measure(&html, viewport)
            })
        };
        let core = PageCore::new(ScrollEngine::new(config.scroll), config.viewport, None, remeasure)?;
        Ok(Self { content, config, core })
    }

    pub fn with_geometry(content: Arc<Content>, config: SiteConfig, geometry: PageGeometry) -> Result<Self> {
        let mut page = Self::new(content, config)?;
        page.core.set_geometry(geometry);
        Ok(page)
    }
}

impl Page for GalleryPage {
    fn route(&self) -> Route {
        Route::Certifications
    }

    fn render(&self) -> String {
        render_gallery(&self.content, &self.config, &self.core.state())
    }

    /// The gallery always opens at the top: the initial state is computed at
    /// offset zero and the host is asked to jump there.
    fn mount(&mut self, signal: &ScrollSignal, initial: ViewportEvent) -> Option<ScrollRequest> {
        let at_top = ViewportEvent {
            scroll_y: 0.0,
            ..initial
        };
        self.core.mount(signal, at_top);
        log::debug!("mounted {}", self.route());
        Some(ScrollRequest::instant(0.0))
    }

    fn unmount(&mut self) {
        self.core.unmount();
    }

    fn is_mounted(&self) -> bool {
        self.core.is_mounted()
    }

    fn state(&self) -> PageState {
        self.core.state()
    }

    fn geometry(&self) -> PageGeometry {
        self.core.geometry()
    }

    fn open_preview(&mut self, image_ref: &str) {
        self.core.open_preview(image_ref);
    }

    fn close_preview(&mut self) {
        self.core.close_preview();
    }
}
