//! Pure scroll-state computation
//!
//! Every value here is recomputed from scratch on each tick. Nothing is
//! memoised or interpolated, so rapid scrolling can flip a visibility flag
//! without intermediate frames.

use crate::geometry::{ClientRect, PageGeometry, SectionBounds};
use crate::section::SectionId;
use crate::ScrollTuning;
use serde::Serialize;

/// Percentage of the scrollable distance traversed, in `[0, 100]`.
///
/// A document that is not taller than the viewport has nothing to scroll and
/// yields `0.0` instead of `NaN`/`inf`.
pub fn scroll_progress(scroll_y: f64, viewport_height: f64, document_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scroll_y.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// First section in [`SectionId::ALL`] order whose `[top, top + height)`
/// contains `scroll_y + look_ahead`. The order of `sections` does not matter.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, look_ahead: f64) -> Option<SectionId> {
    let probe = scroll_y + look_ahead;
    SectionId::ALL.into_iter().find(|&id| {
        sections
            .iter()
            .any(|s| s.id == id && s.bounds.contains(probe))
    })
}

/// Vertical translation for a parallax layer. Visual only; non-finite input
/// leaves the layer in place.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    let y = -(scroll_y * speed);
    // avoid rendering "-0"
    if !y.is_finite() || y == 0.0 {
        0.0
    } else {
        y
    }
}

/// An element is visible once its top passes `threshold` of the viewport
/// height and until its bottom leaves the top edge.
pub fn is_visible(rect: ClientRect, viewport_height: f64, threshold: f64) -> bool {
    rect.top < viewport_height * threshold && rect.bottom > 0.0
}

/// Scroll offset and viewport height sampled on one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallaxOffset {
    pub key: String,
    pub translate_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visibility {
    pub key: String,
    pub visible: bool,
}

/// All values derived from a single tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub progress: f64,
    pub active_section: Option<SectionId>,
    pub parallax: Vec<ParallaxOffset>,
    pub visibility: Vec<Visibility>,
}

impl ScrollFrame {
    pub fn is_visible(&self, key: &str) -> Option<bool> {
        self.visibility.iter().find(|v| v.key == key).map(|v| v.visible)
    }

    pub fn offset(&self, key: &str) -> Option<f64> {
        self.parallax.iter().find(|p| p.key == key).map(|p| p.translate_y)
    }
}

/// Derives a [`ScrollFrame`] from a sample and the page geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollEngine {
    tuning: ScrollTuning,
}

impl ScrollEngine {
    pub fn new(tuning: ScrollTuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> ScrollTuning {
        self.tuning
    }

    /// Recompute every derived value. `previous` is kept as the active section
    /// when no section contains the look-ahead probe.
    pub fn recompute(
        &self,
        sample: ScrollSample,
        geometry: &PageGeometry,
        previous: Option<SectionId>,
    ) -> ScrollFrame {
        let ScrollSample {
            scroll_y,
            viewport_height,
        } = sample;

        let progress = scroll_progress(scroll_y, viewport_height, geometry.document_height);
        let active = active_section(&geometry.sections, scroll_y, self.tuning.look_ahead_px).or(previous);

        let parallax = geometry
            .parallax
            .iter()
            .map(|layer| ParallaxOffset {
                key: layer.key.clone(),
                translate_y: parallax_offset(
                    scroll_y,
                    layer.speed.unwrap_or(self.tuning.default_parallax_speed),
                ),
            })
            .collect();

        let visibility = geometry
            .animated
            .iter()
            .map(|el| Visibility {
                key: el.key.clone(),
                visible: is_visible(
                    el.bounds.client_rect(scroll_y),
                    viewport_height,
                    self.tuning.visibility_threshold,
                ),
            })
            .collect();

        ScrollFrame {
            scroll_y,
            progress,
            active_section: active,
            parallax,
            visibility,
        }
    }
}
