use super::{measure, Page, PageCore, PageState, Remeasure};
use crate::content::Content;
use crate::geometry::PageGeometry;
use crate::navigation::{self, Route, ScrollRequest};
use crate::rendering::render_portfolio;
use crate::scroll::{ScrollEngine, ScrollSignal, ViewportEvent};
use crate::section::SectionId;
use crate::{Result, SiteConfig, Viewport};
use std::sync::Arc;

/// The root content page: every section, parallax background, section
/// highlighting and the preview overlay.
pub struct PortfolioPage {
    content: Arc<Content>,
    config: SiteConfig,
    core: PageCore,
}

impl PortfolioPage {
    /// Build the page and measure it for `config.viewport`.
    pub fn new(content: Arc<Content>, config: SiteConfig) -> Result<Self> {
        let remeasure: Remeasure = {
            let content = content.clone();
            let config = config.clone();
            Arc::new(move |viewport: Viewport| {
                let html = render_portfolio(&content, &config, &PageState::default());
                measure(&html, viewport)
            })
        };
        let core = PageCore::new(
            ScrollEngine::new(config.scroll),
            config.viewport,
            Some(SectionId::Home),
            remeasure,
        )?;
        Ok(Self { content, config, core })
    }

    /// Build the page with geometry measured elsewhere.
    pub fn with_geometry(content: Arc<Content>, config: SiteConfig, geometry: PageGeometry) -> Result<Self> {
        let mut page = Self::new(content, config)?;
        page.core.set_geometry(geometry);
        Ok(page)
    }

    /// Smooth scroll request aligning section `id` with the viewport top, or
    /// `None` when `id` does not resolve to a rendered section.
    pub fn scroll_to_section(&self, id: &str) -> Option<ScrollRequest> {
        let viewport = self.core.viewport();
        navigation::scroll_to_section(&self.core.geometry(), id, f64::from(viewport.height))
    }

    pub fn content(&self) -> &Content {
        &self.content
    }
}

impl Page for PortfolioPage {
    fn route(&self) -> Route {
        Route::Portfolio
    }

    fn render(&self) -> String {
        render_portfolio(&self.content, &self.config, &self.core.state())
    }

    fn mount(&mut self, signal: &ScrollSignal, initial: ViewportEvent) -> Option<ScrollRequest> {
        self.core.mount(signal, initial);
        log::debug!("mounted {}", self.route());
        None
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Bounds, SectionBounds};
    use crate::preview::PreviewOverlay;

    fn page() -> PortfolioPage {
        let geometry = PageGeometry {
            document_height: 3000.0,
            sections: vec![
                SectionBounds { id: SectionId::Home, bounds: Bounds::new(0.0, 800.0) },
                SectionBounds { id: SectionId::About, bounds: Bounds::new(800.0, 1200.0) },
                SectionBounds { id: SectionId::Contact, bounds: Bounds::new(2000.0, 1000.0) },
            ],
            ..Default::default()
        };
        PortfolioPage::with_geometry(Arc::new(Content::builtin().unwrap()), SiteConfig::default(), geometry)
            .unwrap()
    }

    #[test]
    fn mount_resets_and_tracks_scroll() {
        let signal = ScrollSignal::new();
        let mut p = page();
        let vp = SiteConfig::default().viewport;
        assert!(p.mount(&signal, ViewportEvent::scroll(0.0, vp)).is_none());
        assert_eq!(p.state().active_section, Some(SectionId::Home));
        assert_eq!(p.state().scroll_progress, 0.0);

        signal.dispatch(&ViewportEvent::scroll(900.0, vp));
        assert_eq!(p.state().active_section, Some(SectionId::About));
        assert!(p.state().scroll_progress > 0.0);
    }

    #[test]
    fn unmounted_page_ignores_events() {
        let signal = ScrollSignal::new();
        let mut p = page();
        let vp = SiteConfig::default().viewport;
        p.mount(&signal, ViewportEvent::scroll(0.0, vp));
        p.unmount();
        assert!(!p.is_mounted());
        let before = p.state();
        assert_eq!(signal.dispatch(&ViewportEvent::scroll(2200.0, vp)), 0);
        assert_eq!(p.state(), before);
    }

    #[test]
    fn section_navigation_resolves_or_noops() {
        let p = page();
        assert_eq!(p.scroll_to_section("about"), Some(ScrollRequest::smooth(800.0)));
        assert_eq!(p.scroll_to_section("nowhere"), None);
        assert_eq!(p.scroll_to_section("About"), None);
        // rendered content has no geometry for projects in this fixture
        assert_eq!(p.scroll_to_section("projects"), None);
    }

    #[test]
    fn preview_is_last_write_wins() {
        let mut p = page();
        p.open_preview("certifications/1.jpg");
        p.open_preview("certifications/2.jpg");
        assert_eq!(p.state().preview, PreviewOverlay::Open("certifications/2.jpg".into()));
        p.close_preview();
        p.close_preview();
        assert_eq!(p.state().preview, PreviewOverlay::Closed);
    }
}
