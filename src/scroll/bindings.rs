//! Declarative style and class bindings derived from a [`ScrollFrame`]
//!
//! Renderers read these when emitting markup; nothing writes into rendered
//! output after the fact.

use super::engine::ScrollFrame;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Class added to animated elements while they are on screen
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleBindings {
    /// CSS width of the progress bar, e.g. `"42.50%"`
    pub progress_width: String,
    /// Parallax key -> CSS transform
    pub transforms: BTreeMap<String, String>,
    /// Animated keys currently carrying [`VISIBLE_CLASS`]
    pub visible: BTreeSet<String>,
}

impl Default for StyleBindings {
    fn default() -> Self {
        Self {
            progress_width: format_percent(0.0),
            transforms: BTreeMap::new(),
            visible: BTreeSet::new(),
        }
    }
}

impl StyleBindings {
    pub fn from_frame(frame: &ScrollFrame) -> Self {
        let transforms = frame
            .parallax
            .iter()
            .map(|p| (p.key.clone(), format!("translateY({:.1}px)", p.translate_y)))
            .collect();
        let visible = frame
            .visibility
            .iter()
            .filter(|v| v.visible)
            .map(|v| v.key.clone())
            .collect();
        Self {
            progress_width: format_percent(frame.progress),
            transforms,
            visible,
        }
    }

    pub fn transform(&self, key: &str) -> Option<&str> {
        self.transforms.get(key).map(String::as_str)
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.contains(key)
    }

    /// `base` plus the visibility class when `key` is on screen.
    pub fn class_list(&self, key: &str, base: &str) -> String {
        if self.is_visible(key) {
            format!("{} {}", base, VISIBLE_CLASS)
        } else {
            base.to_string()
        }
    }
}

impl From<&ScrollFrame> for StyleBindings {
    fn from(frame: &ScrollFrame) -> Self {
        Self::from_frame(frame)
    }
}

fn format_percent(p: f64) -> String {
    format!("{:.2}%", p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::engine::{ParallaxOffset, Visibility};
    use crate::SectionId;

    #[test]
    fn bindings_follow_frame() {
        let frame = ScrollFrame {
            scroll_y: 120.0,
            progress: 12.5,
            active_section: Some(SectionId::About),
            parallax: vec![ParallaxOffset { key: "orb-1".into(), translate_y: -36.0 }],
            visibility: vec![
                Visibility { key: "a0".into(), visible: true },
                Visibility { key: "a1".into(), visible: false },
            ],
        };
        let b = StyleBindings::from(&frame);
        assert_eq!(b.progress_width, "12.50%");
        assert_eq!(b.transform("orb-1"), Some("translateY(-36.0px)"));
        assert_eq!(b.class_list("a0", "scroll-fade-in"), "scroll-fade-in visible");
        assert_eq!(b.class_list("a1", "scroll-fade-in"), "scroll-fade-in");
    }

    #[test]
    fn default_has_empty_progress() {
        let b = StyleBindings::default();
        assert_eq!(b.progress_width, "0.00%");
        assert!(b.visible.is_empty());
    }
}
