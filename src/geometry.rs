//! Page geometry consumed by the scroll engine
//!
//! Everything here is in CSS pixels. `Bounds` are document-relative (the
//! equivalent of `offsetTop`/`offsetHeight`); `ClientRect` is
//! viewport-relative and only exists for a particular scroll offset.

use crate::section::SectionId;
use serde::{Deserialize, Serialize};

/// Document-relative vertical extent of an element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub offset_top: f64,
    pub offset_height: f64,
}

impl Bounds {
    pub fn new(offset_top: f64, offset_height: f64) -> Self {
        Self {
            offset_top,
            offset_height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.offset_top + self.offset_height
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.offset_top && y < self.bottom()
    }

    /// Project into viewport coordinates for the given scroll offset.
    pub fn client_rect(&self, scroll_y: f64) -> ClientRect {
        ClientRect {
            top: self.offset_top - scroll_y,
            bottom: self.bottom() - scroll_y,
        }
    }
}

/// Viewport-relative vertical extent (`getBoundingClientRect` top/bottom)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientRect {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: SectionId,
    pub bounds: Bounds,
}

/// A decorated background layer that moves with a speed factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxLayer {
    pub key: String,
    /// `None` when the markup declares no speed; the engine substitutes its default.
    pub speed: Option<f64>,
}

/// An element that receives enter/exit transition classes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatedElement {
    pub key: String,
    pub bounds: Bounds,
}

/// Measured geometry of one rendered page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Total scroll height of the document
    pub document_height: f64,
    /// Measured sections, in any order
    pub sections: Vec<SectionBounds>,
    pub parallax: Vec<ParallaxLayer>,
    pub animated: Vec<AnimatedElement>,
}

impl PageGeometry {
    pub fn section(&self, id: SectionId) -> Option<&SectionBounds> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Largest scroll offset reachable for a viewport of `viewport_height`.
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        (self.document_height - viewport_height).max(0.0)
    }
}
