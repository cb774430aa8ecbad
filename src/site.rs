//! Static site build
//!
//! Writes both pages as they look at the top of the document, copies the
//! downloadable CV when it exists, and records a SHA-256 per output file in
//! `manifest.json` so builds can be compared byte for byte.

use crate::content::Content;
use crate::navigation::Route;
use crate::page::PageState;
use crate::rendering::{render_gallery, render_portfolio};
use crate::section::SectionId;
use crate::{Result, SiteConfig};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";

/// What a build produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    /// Output path (relative, `/`-separated) -> hex SHA-256
    pub files: BTreeMap<String, String>,
    /// Whether the CV document was found and copied
    pub resume_copied: bool,
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

pub struct SiteBuilder {
    config: SiteConfig,
    content: Content,
    /// Directory `asset_base` refers to on disk, when assets should be copied
    asset_root: Option<PathBuf>,
}

impl SiteBuilder {
    pub fn new(config: SiteConfig, content: Content) -> Self {
        Self {
            config,
            content,
            asset_root: None,
        }
    }

    /// Local directory holding the assets; used to copy the CV into the build.
    pub fn asset_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(dir.into());
        self
    }

    /// Markup for `route` in its freshly mounted state.
    pub fn render(&self, route: Route) -> String {
        match route {
            Route::Portfolio => {
                let state = PageState {
                    active_section: Some(SectionId::Home),
                    ..Default::default()
                };
                render_portfolio(&self.content, &self.config, &state)
            }
            Route::Certifications => render_gallery(&self.content, &self.config, &PageState::default()),
        }
    }

    pub fn build(&self, out_dir: impl AsRef<Path>) -> Result<BuildReport> {
        self.config.validate()?;
        self.content.validate()?;
        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir)?;

        let mut files = BTreeMap::new();
        for route in Route::ALL {
            let html = self.render(route);
            let rel = route.output_file();
            write_file(out_dir, rel, html.as_bytes())?;
            files.insert(rel.to_string(), sha256_hex(html.as_bytes()));
        }

        let resume_copied = match self.copy_resume(out_dir)? {
            Some((rel, digest)) => {
                files.insert(rel, digest);
                true
            }
            None => false,
        };

        let manifest = serde_json::to_string_pretty(&files)?;
        fs::write(out_dir.join(MANIFEST_FILE), manifest)?;

        log::info!("built {} files into {}", files.len(), out_dir.display());
        Ok(BuildReport {
            out_dir: out_dir.to_path_buf(),
            files,
            resume_copied,
        })
    }

    /// Copy the CV so the download anchor resolves inside the build. A
    /// missing file only warns: the anchor then falls back to the browser's
    /// own handling of a broken link.
    fn copy_resume(&self, out_dir: &Path) -> Result<Option<(String, String)>> {
        let Some(root) = &self.asset_root else {
            return Ok(None);
        };
        let src = root.join(&self.content.resume.path);
        if !src.is_file() {
            log::warn!("CV not found at {}; download link left unresolved", src.display());
            return Ok(None);
        }
        let bytes = fs::read(&src)?;
        let rel = asset_output_path(&self.config.asset_base, &self.content.resume.path);
        write_file(out_dir, &rel, &bytes)?;
        Ok(Some((rel, sha256_hex(&bytes))))
    }
}

/// Where an asset lands inside the build for a relative `asset_base`.
fn asset_output_path(asset_base: &str, reference: &str) -> String {
    let base = asset_base
        .trim_start_matches("./")
        .trim_start_matches('/')
        .trim_end_matches('/');
    if base.is_empty() || base.contains("://") {
        reference.to_string()
    } else {
        format!("{}/{}", base, reference)
    }
}

fn write_file(out_dir: &Path, rel: &str, bytes: &[u8]) -> Result<()> {
    let path = out_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_hex_sha256() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn asset_paths_follow_base() {
        assert_eq!(asset_output_path("./assets", "resume/cv.pdf"), "assets/resume/cv.pdf");
        assert_eq!(asset_output_path("/static/", "cv.pdf"), "static/cv.pdf");
        assert_eq!(asset_output_path("", "cv.pdf"), "cv.pdf");
    }

    #[test]
    fn rendering_is_deterministic() {
        let b = SiteBuilder::new(SiteConfig::default(), Content::builtin().unwrap());
        assert_eq!(b.render(Route::Portfolio), b.render(Route::Portfolio));
    }
}
