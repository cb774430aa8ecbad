//! Image preview overlay
//!
//! A single slot: either closed or showing one image. Opening while open
//! replaces the image; there is no queue.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "image", rename_all = "lowercase")]
pub enum PreviewOverlay {
    #[default]
    Closed,
    Open(String),
}

impl PreviewOverlay {
    /// Show `image_ref`, replacing whatever was shown before.
    pub fn open(&mut self, image_ref: impl Into<String>) {
        let image_ref = image_ref.into();
        if let PreviewOverlay::Open(prev) = self {
            log::debug!("preview {} replaced by {}", prev, image_ref);
        }
        *self = PreviewOverlay::Open(image_ref);
    }

    /// Dismiss the overlay. Closing a closed overlay does nothing.
    pub fn close(&mut self) {
        *self = PreviewOverlay::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PreviewOverlay::Open(_))
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            PreviewOverlay::Open(image) => Some(image),
            PreviewOverlay::Closed => None,
        }
    }
}
