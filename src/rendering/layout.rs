//! Headless geometry measurement for rendered pages
//!
//! A rough block layout: every in-flow element stacks vertically, text wraps
//! at a fixed glyph width, images use their `height` attribute and anything
//! marked `fixed` is taken out of flow. It does not try to match a browser
//! pixel for pixel; it only needs to order and size sections and animated
//! elements plausibly so the scroll engine has something to work against.

use super::{ANIMATED_CLASSES, FIXED_CLASS, PARALLAX_CLASS};
use crate::geometry::{AnimatedElement, Bounds, PageGeometry, ParallaxLayer, SectionBounds};
use crate::section::SectionId;
use crate::{Error, Result, Viewport};
use scraper::{ElementRef, Html, Selector};

const GLYPH_WIDTH: u32 = 8;
const LINE_HEIGHT: f64 = 20.0;
const PAGE_MARGIN: u32 = 16;
const SECTION_PADDING: f64 = 64.0;
const BLOCK_GAP: f64 = 12.0;
const TEXT_PADDING: f64 = 4.0;
const DEFAULT_IMAGE_HEIGHT: f64 = 150.0;

/// Elements laid out as wrapped text rather than as containers.
const TEXT_TAGS: [&str; 15] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "a", "button", "span", "li", "blockquote", "small",
    "label", "strong",
];

const SKIPPED_TAGS: [&str; 7] = ["head", "script", "style", "title", "meta", "link", "template"];

/// Headings lay out at twice the glyph size.
fn text_scale(tag: &str) -> u32 {
    match tag {
        "h1" | "h2" => 2,
        _ => 1,
    }
}

/// Number of lines `text` wraps to at `chars_per_line`, using the same
/// greedy word wrap for every block.
fn wrapped_lines(text: &str, chars_per_line: usize) -> usize {
    let mut lines = 0usize;
    let mut cur = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if cur > 0 && cur + len + 1 > chars_per_line {
            lines += 1;
            cur = len;
        } else {
            if cur > 0 {
                cur += 1;
            }
            cur += len;
        }
    }
    if cur > 0 {
        lines += 1;
    }
    lines
}

fn classes<'a>(el: &ElementRef<'a>) -> Vec<&'a str> {
    el.value()
        .attr("class")
        .map(|c| c.split_whitespace().collect())
        .unwrap_or_default()
}

struct Measurer {
    content_width: u32,
    geometry: PageGeometry,
}

impl Measurer {
    /// Lay out `el` with its top edge at `top`; returns its height.
    fn block(&mut self, el: ElementRef, top: f64) -> f64 {
        let tag = el.value().name();
        if SKIPPED_TAGS.contains(&tag) {
            return 0.0;
        }
        let class_list = classes(&el);

        if class_list.contains(&FIXED_CLASS) {
            if class_list.contains(&PARALLAX_CLASS) {
                if let Some(key) = el.value().attr("data-key") {
                    let speed = el
                        .value()
                        .attr("data-speed")
                        .and_then(|s| s.trim().parse::<f64>().ok());
                    self.geometry.parallax.push(ParallaxLayer {
                        key: key.to_string(),
                        speed,
                    });
                }
            }
            return 0.0;
        }

        let animated_slot = match el.value().attr("data-key") {
            Some(key) if class_list.iter().any(|c| ANIMATED_CLASSES.contains(c)) => {
                self.geometry.animated.push(AnimatedElement {
                    key: key.to_string(),
                    bounds: Bounds::new(top, 0.0),
                });
                Some(self.geometry.animated.len() - 1)
            }
            _ => None,
        };

        let height = match tag {
            "img" => el
                .value()
                .attr("height")
                .and_then(|h| h.trim().parse::<f64>().ok())
                .unwrap_or(DEFAULT_IMAGE_HEIGHT),
            "br" => LINE_HEIGHT,
            _ if TEXT_TAGS.contains(&tag) && !has_block_descendant(&el) => self.text_block(&el, tag),
            _ => self.container(&el, top, tag == "section"),
        };

        if let Some(i) = animated_slot {
            self.geometry.animated[i].bounds.offset_height = height;
        }
        if tag == "section" {
            if let Some(id) = el.value().id().and_then(|id| id.parse::<SectionId>().ok()) {
                self.geometry.sections.push(SectionBounds {
                    id,
                    bounds: Bounds::new(top, height),
                });
            }
        }
        height
    }

    fn text_block(&self, el: &ElementRef, tag: &str) -> f64 {
        let text = el.text().collect::<String>();
        let scale = text_scale(tag);
        let chars_per_line = (self.content_width / (GLYPH_WIDTH * scale)).max(1) as usize;
        let lines = wrapped_lines(&text, chars_per_line);
        if lines == 0 {
            return 0.0;
        }
        lines as f64 * LINE_HEIGHT * f64::from(scale) + TEXT_PADDING * 2.0
    }

    fn container(&mut self, el: &ElementRef, top: f64, is_section: bool) -> f64 {
        let padding = if is_section { SECTION_PADDING } else { 0.0 };
        let mut y = top + padding;
        let mut placed = 0usize;
        for child in el.children().filter_map(ElementRef::wrap) {
            let gap = if placed > 0 { BLOCK_GAP } else { 0.0 };
            let h = self.block(child, y + gap);
            if h > 0.0 {
                y += gap + h;
                placed += 1;
            }
        }
        y + padding - top
    }
}

fn has_block_descendant(el: &ElementRef) -> bool {
    el.descendants()
        .filter_map(ElementRef::wrap)
        .skip(1)
        .any(|d| matches!(d.value().name(), "img" | "div" | "section" | "p"))
}

/// Measure a rendered page for the given viewport.
///
/// The resulting document height is never smaller than the viewport, like a
/// browser's scroll height.
pub fn measure_document(html: &str, viewport: Viewport) -> Result<PageGeometry> {
    let document = Html::parse_document(html);
    let body_sel =
        Selector::parse("body").map_err(|e| Error::LayoutError(format!("bad selector: {:?}", e)))?;
    let body = document
        .select(&body_sel)
        .next()
        .ok_or_else(|| Error::LayoutError("document has no <body>".into()))?;

    let mut m = Measurer {
        content_width: viewport.width.saturating_sub(PAGE_MARGIN * 2).max(GLYPH_WIDTH),
        geometry: PageGeometry::default(),
    };
    let top = f64::from(PAGE_MARGIN);
    let height = m.container(&body, top, false);
    m.geometry.document_height = (top + height + f64::from(PAGE_MARGIN)).max(f64::from(viewport.height));

    log::debug!(
        "measured document: height={} sections={} parallax={} animated={}",
        m.geometry.document_height,
        m.geometry.sections.len(),
        m.geometry.parallax.len(),
        m.geometry.animated.len()
    );
    Ok(m.geometry)
}
