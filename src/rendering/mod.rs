//! HTML rendering for the portfolio and gallery pages
//!
//! Pages are rendered as complete documents with `format!` templates. Scroll
//! derived values arrive through [`StyleBindings`](crate::scroll::StyleBindings)
//! in the page state and are written as attributes; rendering the same state
//! twice produces identical output.

pub mod gallery;
pub mod portfolio;

#[cfg(feature = "layout")]
pub mod layout;

pub use gallery::render_gallery;
pub use portfolio::render_portfolio;

use crate::page::PageState;
use crate::scroll::StyleBindings;

/// Classes that mark an element for enter/exit transitions
pub const ANIMATED_CLASSES: [&str; 4] = [
    "scroll-fade-in",
    "scroll-slide-left",
    "scroll-slide-right",
    "scroll-scale-in",
];

/// Class marking decorated background layers
pub const PARALLAX_CLASS: &str = "parallax-bg";

/// Elements carrying this class are taken out of flow (overlays, nav, backgrounds)
pub const FIXED_CLASS: &str = "fixed";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Resolve an asset reference under the configured base.
pub fn asset_url(base: &str, reference: &str) -> String {
    if reference.contains("://") || reference.starts_with('/') {
        return reference.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), reference.trim_start_matches("./"))
}

/// Hands out stable `data-key`s for animated elements in emission order and
/// applies the current visibility bindings to them.
pub(crate) struct Animated<'a> {
    bindings: &'a StyleBindings,
    next: usize,
}

impl<'a> Animated<'a> {
    pub(crate) fn new(bindings: &'a StyleBindings) -> Self {
        Self { bindings, next: 0 }
    }

    /// `class="..." data-key="..."` for the next animated element.
    pub(crate) fn attrs(&mut self, base: &str) -> String {
        let key = format!("a{}", self.next);
        self.next += 1;
        format!(
            r#"class="{}" data-key="{}""#,
            html_escape(&self.bindings.class_list(&key, base)),
            key
        )
    }
}

/// A decorated background layer with its bound transform.
pub(crate) fn parallax_layer(bindings: &StyleBindings, key: &str, class: &str, speed: Option<f64>) -> String {
    let speed_attr = speed
        .map(|s| format!(r#" data-speed="{}""#, s))
        .unwrap_or_default();
    let style = bindings
        .transform(key)
        .map(|t| format!(r#" style="transform: {}""#, t))
        .unwrap_or_default();
    format!(
        r#"<div class="{} {} {}" data-key="{}"{}{}></div>"#,
        FIXED_CLASS, PARALLAX_CLASS, class, key, speed_attr, style
    )
}

/// A background layer that never moves: no key, no speed, no transform.
pub(crate) fn static_layer(class: &str) -> String {
    format!(r#"<div class="{} static-bg {}"></div>"#, FIXED_CLASS, class)
}

pub(crate) fn progress_bar(bindings: &StyleBindings) -> String {
    format!(
        r#"<div class="scroll-progress {}" style="width: {}"></div>"#,
        FIXED_CLASS, bindings.progress_width
    )
}

/// The full-screen overlay, or nothing when closed.
pub(crate) fn preview_overlay(state: &PageState, asset_base: &str) -> String {
    match state.preview.image() {
        Some(image) => format!(
            r#"<div class="{} preview-overlay" role="dialog" aria-modal="true">
  <button class="preview-close" data-action="close-preview" aria-label="Close preview">&times;</button>
  <img src="{}" alt="Certificate Preview" height="0">
</div>"#,
            FIXED_CLASS,
            html_escape(&asset_url(asset_base, image))
        ),
        None => String::new(),
    }
}

/// An anchor that opens in a new browsing context.
pub(crate) fn external_link(href: &str, class: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" class="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        html_escape(href),
        class,
        html_escape(label)
    )
}

pub(crate) fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
</head>
<body>
{}
</body>
</html>
"#,
        html_escape(title),
        body
    )
}
