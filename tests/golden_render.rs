#![cfg(feature = "layout")]

use std::fs;
use std::path::PathBuf;

use scraper::{ElementRef, Html, Selector};
use starfolio::site::SiteBuilder;
use starfolio::{Content, Route, SiteConfig};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens");
    p.push(name);
    p
}

/// One line per element that carries behaviour: sections, background layers,
/// navigation targets, previews, downloads and outbound links, in document order.
fn outline_line(el: ElementRef) -> Option<String> {
    let v = el.value();
    let attr = |name: &str| v.attr(name).unwrap_or_default();
    let line = if v.name() == "title" {
        format!("title {}", el.text().collect::<String>())
    } else if v.name() == "section" {
        format!("section {}", attr("id"))
    } else if attr("class").split_whitespace().any(|c| c == "parallax-bg") {
        format!("parallax {} {}", attr("data-key"), attr("data-speed"))
    } else if v.attr("data-section").is_some() {
        format!("goto {}", attr("data-section"))
    } else if v.attr("data-route").is_some() {
        format!("route {}", attr("data-route"))
    } else if v.attr("data-preview").is_some() {
        format!("preview {}", attr("data-preview"))
    } else if v.attr("download").is_some() {
        format!("download {} {}", attr("href"), attr("download"))
    } else if v.name() == "button" && v.attr("disabled").is_some() {
        format!("disabled {}", attr("title"))
    } else if v.attr("target") == Some("_blank") {
        format!("link {}", attr("href"))
    } else {
        return None;
    };
    Some(line)
}

fn outline(html: &str) -> String {
    let document = Html::parse_document(html);
    let all = Selector::parse("*").unwrap();
    let mut out = String::new();
    for line in document.select(&all).filter_map(outline_line) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn check_golden(route: Route, name: &str) {
    let html = SiteBuilder::new(SiteConfig::default(), Content::builtin().unwrap()).render(route);
    let actual = outline(&html);

    let expected_path = golden_path(name);
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens").ok();
        fs::write(&expected_path, &actual).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let expected = fs::read_to_string(&expected_path)
        .unwrap_or_else(|e| panic!("unable to read golden {:?} ({}); run with UPDATE_GOLDENS=1", expected_path, e));
    assert_eq!(actual, expected, "{} outline changed", route);
}

#[test]
fn golden_portfolio_page() {
    check_golden(Route::Portfolio, "portfolio.outline");
}

#[test]
fn golden_gallery_page() {
    check_golden(Route::Certifications, "certifications.outline");
}

#[test]
fn rendering_twice_gives_identical_markup() {
    let builder = SiteBuilder::new(SiteConfig::default(), Content::builtin().unwrap());
    for route in Route::ALL {
        assert_eq!(builder.render(route), builder.render(route));
    }
}
