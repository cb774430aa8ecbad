//! Routes between the two pages and scroll requests within a page

use crate::geometry::PageGeometry;
use crate::section::SectionId;
use serde::Serialize;
use std::fmt;

/// The two pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Root content page
    Portfolio,
    /// Full certification gallery
    Certifications,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Portfolio, Route::Certifications];

    pub fn path(self) -> &'static str {
        match self {
            Route::Portfolio => "/",
            Route::Certifications => "/certifications",
        }
    }

    /// Output file for a static build, relative to the build root.
    pub fn output_file(self) -> &'static str {
        match self {
            Route::Portfolio => "index.html",
            Route::Certifications => "certifications/index.html",
        }
    }

    /// Resolve a request path. Query strings and fragments are ignored;
    /// anything else is not a route.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        match path.trim_end_matches('/') {
            "" | "/index.html" => Some(Route::Portfolio),
            "/certifications" | "/certifications/index.html" => Some(Route::Certifications),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A request for the host to move the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub target_y: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn smooth(target_y: f64) -> Self {
        Self {
            target_y,
            behavior: ScrollBehavior::Smooth,
        }
    }

    pub fn instant(target_y: f64) -> Self {
        Self {
            target_y,
            behavior: ScrollBehavior::Instant,
        }
    }

    /// Scroll offsets a host should visit, starting after `from` and ending
    /// exactly on the target. Smooth requests ease in and out over `steps`
    /// positions; instant ones jump.
    pub fn positions(&self, from: f64, steps: usize) -> Vec<f64> {
        if self.behavior == ScrollBehavior::Instant || steps <= 1 {
            return vec![self.target_y];
        }
        let distance = self.target_y - from;
        let mut out: Vec<f64> = (1..steps)
            .map(|i| from + distance * ease_in_out(i as f64 / steps as f64))
            .collect();
        out.push(self.target_y);
        out
    }
}

fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Align the top of section `id` with the viewport top.
///
/// Returns `None` (and logs) when `id` names no section or the section was
/// not rendered. The target is clamped to the scrollable range, as a browser
/// would.
pub fn scroll_to_section(geometry: &PageGeometry, id: &str, viewport_height: f64) -> Option<ScrollRequest> {
    let section = match id.parse::<SectionId>() {
        Ok(section) => section,
        Err(e) => {
            log::warn!("ignoring navigation: {}", e);
            return None;
        }
    };
    let Some(bounds) = geometry.section(section) else {
        log::warn!("ignoring navigation: section '{}' is not on this page", section);
        return None;
    };
    let target = bounds
        .bounds
        .offset_top
        .clamp(0.0, geometry.max_scroll(viewport_height));
    Some(ScrollRequest::smooth(target))
}
