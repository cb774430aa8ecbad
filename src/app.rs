//! Application shell: the viewport signal, the current route and its page

use crate::content::Content;
use crate::navigation::{Route, ScrollRequest};
use crate::page::{GalleryPage, Page, PageState, PortfolioPage};
use crate::scroll::{ScrollSignal, ViewportEvent};
use crate::{Result, SiteConfig, Viewport};
use std::sync::Arc;

/// Headless host for the two pages.
///
/// Exactly one page is mounted at a time. Navigating unmounts the current
/// page before mounting the next, so its listener never sees events meant for
/// the other page.
pub struct App {
    signal: ScrollSignal,
    viewport: Viewport,
    scroll_y: f64,
    smooth_scroll_steps: usize,
    route: Route,
    portfolio: PortfolioPage,
    gallery: GalleryPage,
}

impl App {
    /// Build both pages and mount the portfolio page at the top.
    pub fn new(config: SiteConfig, content: Content) -> Result<Self> {
        config.validate()?;
        content.validate()?;
        let content = Arc::new(content);
        let mut app = Self {
            signal: ScrollSignal::new(),
            viewport: config.viewport,
            scroll_y: 0.0,
            smooth_scroll_steps: config.smooth_scroll_steps,
            route: Route::Portfolio,
            portfolio: PortfolioPage::new(content.clone(), config.clone())?,
            gallery: GalleryPage::new(content, config)?,
        };
        let initial = app.event();
        if let Some(req) = app.portfolio.mount(&app.signal, initial) {
            app.scroll_y = req.target_y;
        }
        Ok(app)
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn signal(&self) -> &ScrollSignal {
        &self.signal
    }

    pub fn page(&self) -> &dyn Page {
        match self.route {
            Route::Portfolio => &self.portfolio,
            Route::Certifications => &self.gallery,
        }
    }

    fn page_mut(&mut self) -> &mut dyn Page {
        match self.route {
            Route::Portfolio => &mut self.portfolio,
            Route::Certifications => &mut self.gallery,
        }
    }

    pub fn state(&self) -> PageState {
        self.page().state()
    }

    pub fn render(&self) -> String {
        self.page().render()
    }

    fn event(&self) -> ViewportEvent {
        ViewportEvent::scroll(self.scroll_y, self.viewport)
    }

    /// Switch pages. Navigating to the current route remounts it.
    pub fn navigate(&mut self, route: Route) -> Result<()> {
        log::info!("navigate {} -> {}", self.route, route);
        self.page_mut().unmount();
        self.route = route;
        let initial = self.event();
        let signal = self.signal.clone();
        if let Some(req) = self.page_mut().mount(&signal, initial) {
            self.scroll_y = req.target_y;
        }
        Ok(())
    }

    /// Navigate by request path; unknown paths are logged and ignored.
    pub fn navigate_path(&mut self, path: &str) -> Result<Option<Route>> {
        match Route::from_path(path) {
            Some(route) => {
                self.navigate(route)?;
                Ok(Some(route))
            }
            None => {
                log::warn!("ignoring navigation to unknown path '{}'", path);
                Ok(None)
            }
        }
    }

    /// Move the viewport and notify listeners. Returns how many ran.
    pub fn scroll(&mut self, scroll_y: f64) -> usize {
        self.scroll_y = scroll_y;
        self.signal.dispatch(&self.event())
    }

    pub fn resize(&mut self, viewport: Viewport) -> usize {
        self.viewport = viewport;
        self.signal
            .dispatch(&ViewportEvent::resize(self.scroll_y, viewport))
    }

    /// Smooth-scroll to section `id` on the portfolio page, dispatching every
    /// intermediate position. Unknown ids and other pages are a logged no-op.
    pub fn scroll_to_section(&mut self, id: &str) -> Option<ScrollRequest> {
        if self.route != Route::Portfolio {
            log::warn!("ignoring navigation to section '{}' on {}", id, self.route);
            return None;
        }
        let req = self.portfolio.scroll_to_section(id)?;
        for y in req.positions(self.scroll_y, self.smooth_scroll_steps) {
            self.scroll(y);
        }
        Some(req)
    }

    pub fn open_preview(&mut self, image_ref: &str) {
        self.page_mut().open_preview(image_ref);
    }

    pub fn close_preview(&mut self) {
        self.page_mut().close_preview();
    }
}
