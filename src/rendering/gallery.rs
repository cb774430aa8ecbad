//! Certification gallery page

use super::portfolio::{certification_card, LAYERS};
use super::{document, preview_overlay, progress_bar, static_layer, Animated, FIXED_CLASS};
use crate::content::Content;
use crate::navigation::Route;
use crate::page::PageState;
use crate::SiteConfig;

pub fn render_gallery(content: &Content, config: &SiteConfig, state: &PageState) -> String {
    let base = config.asset_base.as_str();
    let mut anim = Animated::new(&state.bindings);

    let header = format!(
        r#"<nav class="{} gallery-nav"><a href="{}" data-route="{}">Back to Portfolio</a></nav>"#,
        FIXED_CLASS,
        Route::Portfolio.path(),
        Route::Portfolio.path()
    );
    let title = format!(
        "<h1 {}>All Certifications</h1>\n<p {}>{} certifications</p>",
        anim.attrs("scroll-fade-in"),
        anim.attrs("scroll-fade-in"),
        content.certifications.len()
    );
    let cards: String = content
        .certifications
        .iter()
        .enumerate()
        .map(|(i, cert)| certification_card(cert, base, &mut anim, i))
        .collect();

    let layers = LAYERS
        .iter()
        .map(|(_, class, _)| static_layer(class))
        .collect::<Vec<_>>()
        .join("\n");
    let back = format!(
        r#"<div {}><a class="return-home" href="{}" data-route="{}">Return to Portfolio</a></div>"#,
        anim.attrs("scroll-fade-in"),
        Route::Portfolio.path(),
        Route::Portfolio.path()
    );

    let body = format!(
        "{}{}\n{}\n{}\n<main class=\"gallery\">\n{}\n<div class=\"cert-grid\">\n{}</div>\n{}\n</main>",
        preview_overlay(state, base),
        progress_bar(&state.bindings),
        layers,
        header,
        title,
        cards,
        back
    );
    document(&format!("Certifications - {}", config.title), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_lists_every_certification_without_sections() {
        let content = Content::builtin().unwrap();
        let html = render_gallery(&content, &SiteConfig::default(), &PageState::default());
        assert_eq!(html.matches("class=\"thumb\"").count(), content.certifications.len());
        assert!(!html.contains("<section"));
        assert!(!html.contains("parallax-bg"));
        assert_eq!(html.matches(r#"data-route="/""#).count(), 2);
        assert!(html.contains("Return to Portfolio"));
    }

    #[test]
    fn gallery_background_stays_put_while_scrolling() {
        let content = Content::builtin().unwrap();
        let mut state = PageState::default();
        state.bindings.transforms.insert("starfield".into(), "translateY(-80.0px)".into());
        let html = render_gallery(&content, &SiteConfig::default(), &state);
        assert_eq!(html.matches("static-bg").count(), LAYERS.len());
        assert!(html.contains(r#"<div class="fixed static-bg starfield-animation"></div>"#));
        assert!(!html.contains("translateY"));
        assert!(!html.contains("data-speed"));
    }
}
