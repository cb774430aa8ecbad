//! Starfolio
//!
//! A static portfolio site renderer with a headless scroll-state engine. The
//! crate renders two pages (the portfolio content page and a certification
//! gallery) from plain content data, measures their geometry without a
//! browser, and derives every scroll-driven presentation value from that
//! geometry.
//!
//! # Features
//!
//! - **Scroll-State Engine**: progress, active section, parallax offsets and
//!   visibility flags recomputed purely from scroll offset and geometry
//! - **Declarative bindings**: derived values are rendered as attributes
//!   instead of mutating a live tree
//! - **Scoped subscriptions**: pages hold a listener only while mounted
//! - **Layout** (default feature): headless measurement of rendered pages
//!
//! # Example
//!
//! ```no_run
//! use starfolio::{App, Content, Route, SiteConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SiteConfig::default();
//! let content = Content::builtin()?;
//!
//! let mut app = App::new(config, content)?;
//! app.navigate(Route::Portfolio)?;
//! app.scroll(640.0);
//! let state = app.state();
//! println!("progress: {:.1}%", state.scroll_progress);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod error;
pub use error::{Error, Result};

pub mod content;
pub mod geometry;
pub mod navigation;
pub mod page;
pub mod preview;
pub mod rendering;
pub mod scroll;
pub mod section;
pub mod site;

mod app;

pub use app::App;
pub use content::Content;
pub use geometry::{AnimatedElement, Bounds, ClientRect, PageGeometry, ParallaxLayer, SectionBounds};
pub use navigation::{Route, ScrollBehavior, ScrollRequest};
pub use page::{GalleryPage, Page, PageState, PortfolioPage};
pub use preview::PreviewOverlay;
pub use scroll::{ScrollEngine, ScrollFrame, ScrollSignal, StyleBindings, Subscription, ViewportEvent};
pub use section::SectionId;

/// Configuration for rendering and scroll tracking
///
/// The defaults reproduce the tuning the site has always shipped with: a
/// 100px look-ahead for section highlighting and a visibility line at 80% of
/// the viewport height. Both are product decisions, so they live here rather
/// than in the engine.
///
/// # Examples
///
/// ```
/// let cfg = starfolio::SiteConfig::default();
/// assert_eq!(cfg.scroll.look_ahead_px, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title used for the portfolio page `<title>`
    pub title: String,
    /// Viewport used for headless measurement and simulation
    pub viewport: Viewport,
    /// Scroll engine tuning
    pub scroll: ScrollTuning,
    /// Number of intermediate positions in a smooth scroll
    pub smooth_scroll_steps: usize,
    /// Prefix under which image and document references resolve
    pub asset_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            viewport: Viewport::default(),
            scroll: ScrollTuning::default(),
            smooth_scroll_steps: 12,
            asset_base: "./assets".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load a configuration from a JSON file. Missing fields use defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let cfg: SiteConfig = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the scroll engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(Error::ConfigError(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        let t = self.scroll.visibility_threshold;
        if !t.is_finite() || t <= 0.0 || t > 1.0 {
            return Err(Error::ConfigError(format!(
                "visibility_threshold must be in (0, 1], got {}",
                t
            )));
        }
        if !self.scroll.look_ahead_px.is_finite() || self.scroll.look_ahead_px < 0.0 {
            return Err(Error::ConfigError(format!(
                "look_ahead_px must be a non-negative number, got {}",
                self.scroll.look_ahead_px
            )));
        }
        if !self.scroll.default_parallax_speed.is_finite() {
            return Err(Error::ConfigError("default_parallax_speed must be finite".into()));
        }
        if self.smooth_scroll_steps == 0 {
            return Err(Error::ConfigError("smooth_scroll_steps must be at least 1".into()));
        }
        Ok(())
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Tunable constants of the scroll-state engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollTuning {
    /// Offset added to the scroll position before testing section bounds
    pub look_ahead_px: f64,
    /// Fraction of the viewport height an element's top must pass to be visible
    pub visibility_threshold: f64,
    /// Speed used for parallax layers that do not declare one
    pub default_parallax_speed: f64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            look_ahead_px: 100.0,
            visibility_threshold: 0.8,
            default_parallax_speed: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.viewport.width, 1280);
        assert_eq!(config.viewport.height, 720);
        assert_eq!(config.scroll.visibility_threshold, 0.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: SiteConfig =
            serde_json::from_str(r#"{"scroll": {"look_ahead_px": 64}}"#).unwrap();
        assert_eq!(cfg.scroll.look_ahead_px, 64.0);
        assert_eq!(cfg.scroll.visibility_threshold, 0.8);
        assert_eq!(cfg.viewport, Viewport::default());
    }

    #[test]
    fn validate_rejects_bad_threshold_and_viewport() {
        let mut cfg = SiteConfig::default();
        cfg.scroll.visibility_threshold = 1.5;
        assert!(matches!(cfg.validate(), Err(Error::ConfigError(_))));

        let cfg = SiteConfig {
            viewport: Viewport { width: 0, height: 720 },
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = SiteConfig {
            smooth_scroll_steps: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
