use std::collections::BTreeMap;
use std::fs;

use starfolio::site::{sha256_hex, SiteBuilder, MANIFEST_FILE};
use starfolio::{Content, SiteConfig};

#[test]
fn build_writes_pages_and_manifest() {
    let out = tempfile::tempdir().expect("tempdir");
    let report = SiteBuilder::new(SiteConfig::default(), Content::builtin().unwrap())
        .build(out.path())
        .expect("build succeeds");

    assert!(!report.resume_copied);
    let names: Vec<&str> = report.files.keys().map(String::as_str).collect();
    assert_eq!(names, ["certifications/index.html", "index.html"]);

    let index = fs::read(out.path().join("index.html")).unwrap();
    assert_eq!(report.files["index.html"], sha256_hex(&index));
    let index = String::from_utf8(index).unwrap();
    assert!(index.starts_with("<!DOCTYPE html>"));
    assert!(index.contains(r#"<section id="contact">"#));

    let manifest: BTreeMap<String, String> =
        serde_json::from_str(&fs::read_to_string(out.path().join(MANIFEST_FILE)).unwrap()).unwrap();
    assert_eq!(manifest, report.files);
}

#[test]
fn build_copies_resume_when_present() {
    let content = Content::builtin().unwrap();
    let assets = tempfile::tempdir().unwrap();
    let resume = assets.path().join(&content.resume.path);
    fs::create_dir_all(resume.parent().unwrap()).unwrap();
    fs::write(&resume, b"%PDF-1.4 test").unwrap();

    let out = tempfile::tempdir().unwrap();
    let report = SiteBuilder::new(SiteConfig::default(), content.clone())
        .asset_root(assets.path())
        .build(out.path())
        .unwrap();

    assert!(report.resume_copied);
    let rel = format!("assets/{}", content.resume.path);
    assert_eq!(fs::read(out.path().join(&rel)).unwrap(), b"%PDF-1.4 test");
    assert_eq!(report.files[&rel], sha256_hex(b"%PDF-1.4 test"));
}

#[test]
fn repeated_builds_are_identical() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let builder = SiteBuilder::new(SiteConfig::default(), Content::builtin().unwrap());
    let ra = builder.build(a.path()).unwrap();
    let rb = builder.build(b.path()).unwrap();
    assert_eq!(ra.files, rb.files);
}

#[test]
fn invalid_config_is_rejected_before_writing() {
    let out = tempfile::tempdir().unwrap();
    let mut config = SiteConfig::default();
    config.scroll.visibility_threshold = 0.0;
    let err = SiteBuilder::new(config, Content::builtin().unwrap())
        .build(out.path().join("site"))
        .unwrap_err();
    assert!(matches!(err, starfolio::Error::ConfigError(_)));
    assert!(!out.path().join("site").exists());
}
