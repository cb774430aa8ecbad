use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use starfolio::{
    App, Bounds, Content, GalleryPage, Page, PageGeometry, PortfolioPage, PreviewOverlay, Route,
    ScrollSignal, SectionBounds, SectionId, SiteConfig, Viewport, ViewportEvent,
};

fn geometry() -> PageGeometry {
    PageGeometry {
        document_height: 2400.0,
        sections: vec![
            SectionBounds { id: SectionId::Home, bounds: Bounds::new(0.0, 700.0) },
            SectionBounds { id: SectionId::Experience, bounds: Bounds::new(700.0, 900.0) },
            SectionBounds { id: SectionId::Contact, bounds: Bounds::new(1600.0, 800.0) },
        ],
        ..Default::default()
    }
}

fn content() -> Arc<Content> {
    Arc::new(Content::builtin().expect("built-in content is valid"))
}

#[test]
fn dropped_subscription_stops_delivery() {
    let signal = ScrollSignal::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let sub = {
        let hits = hits.clone();
        signal.subscribe(move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };
    let vp = SiteConfig::default().viewport;
    assert_eq!(signal.dispatch(&ViewportEvent::scroll(10.0, vp)), 1);
    drop(sub);
    assert_eq!(signal.dispatch(&ViewportEvent::scroll(20.0, vp)), 0);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn unmounted_page_state_is_frozen() {
    let signal = ScrollSignal::new();
    let vp = SiteConfig::default().viewport;
    let mut page = PortfolioPage::with_geometry(content(), SiteConfig::default(), geometry()).unwrap();

    page.mount(&signal, ViewportEvent::scroll(0.0, vp));
    signal.dispatch(&ViewportEvent::scroll(650.0, vp));
    assert_eq!(page.state().active_section, Some(SectionId::Experience));

    page.unmount();
    page.unmount();
    let frozen = page.state();
    for y in [0.0, 1000.0, 1680.0] {
        signal.dispatch(&ViewportEvent::scroll(y, vp));
    }
    assert_eq!(page.state(), frozen);
    assert_eq!(signal.listener_count(), 0);
}

#[test]
fn remount_starts_from_initial_state() {
    let signal = ScrollSignal::new();
    let vp = SiteConfig::default().viewport;
    let mut page = PortfolioPage::with_geometry(content(), SiteConfig::default(), geometry()).unwrap();

    page.mount(&signal, ViewportEvent::scroll(1600.0, vp));
    assert_eq!(page.state().active_section, Some(SectionId::Contact));
    page.mount(&signal, ViewportEvent::scroll(0.0, vp));
    assert_eq!(page.state().active_section, Some(SectionId::Home));
    assert_eq!(signal.listener_count(), 1);
}

#[test]
fn dropping_a_mounted_page_unsubscribes() {
    let signal = ScrollSignal::new();
    let vp = SiteConfig::default().viewport;
    {
        let mut page = GalleryPage::with_geometry(content(), SiteConfig::default(), geometry()).unwrap();
        page.mount(&signal, ViewportEvent::scroll(0.0, vp));
        assert_eq!(signal.listener_count(), 1);
    }
    assert_eq!(signal.listener_count(), 0);
}

#[test]
fn preview_overlay_is_last_write_wins() {
    let mut app = App::new(SiteConfig::default(), (*content()).clone()).unwrap();
    app.close_preview();
    assert_eq!(app.state().preview, PreviewOverlay::Closed);

    app.open_preview("certifications/3.jpg");
    app.open_preview("certifications/7.jpg");
    assert_eq!(app.state().preview.image(), Some("certifications/7.jpg"));

    app.close_preview();
    app.close_preview();
    assert!(!app.state().preview.is_open());
}

#[test]
fn app_routes_by_path() {
    let mut app = App::new(SiteConfig::default(), (*content()).clone()).unwrap();
    assert_eq!(app.navigate_path("/certifications/").unwrap(), Some(Route::Certifications));
    assert_eq!(app.route(), Route::Certifications);
    assert!(app.render().contains("Back to Portfolio"));
    assert_eq!(app.state().active_section, None);

    assert_eq!(app.navigate_path("/").unwrap(), Some(Route::Portfolio));
    assert_eq!(app.state().active_section, Some(SectionId::Home));
}

#[test]
#[cfg(feature = "layout")]
fn narrowing_the_viewport_remeasures_and_recomputes() {
    let mut app = App::new(SiteConfig::default(), (*content()).clone()).unwrap();
    app.scroll(1000.0);
    let wide_height = app.page().geometry().document_height;
    let wide_progress = app.state().scroll_progress;
    assert!(wide_progress > 0.0);

    let narrow = Viewport { width: 360, height: 720 };
    assert_eq!(app.resize(narrow), 1);
    let narrow_height = app.page().geometry().document_height;
    assert!(narrow_height > wide_height);

    let st = app.state();
    assert_eq!(st.scroll_y, 1000.0);
    assert!(st.scroll_progress < wide_progress);
    let expected = 1000.0 / (narrow_height - 720.0) * 100.0;
    assert!((st.scroll_progress - expected).abs() < 1e-9);
}

#[test]
fn height_only_resize_keeps_geometry() {
    let mut app = App::new(SiteConfig::default(), (*content()).clone()).unwrap();
    app.scroll(500.0);
    let before = app.page().geometry();

    assert_eq!(app.resize(Viewport { width: 1280, height: 400 }), 1);
    assert_eq!(app.page().geometry(), before);

    let expected = starfolio::scroll::scroll_progress(500.0, 400.0, before.document_height);
    assert_eq!(app.state().scroll_progress, expected);
}
