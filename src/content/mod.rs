//! Static portfolio content
//!
//! Content is plain data, loaded once and never mutated. The built-in
//! portfolio ships as an embedded JSON document; `Content::from_path` loads a
//! replacement with the same shape.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN: &str = include_str!("portfolio.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub tech_stack: Vec<TechItem>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub education: Vec<Education>,
    /// Certifications featured on the portfolio page
    #[serde(default)]
    pub featured_certifications: Vec<Certification>,
    /// Every certification, shown on the gallery page
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
    pub resume: Document,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub avatar: String,
    #[serde(default)]
    pub about: Vec<String>,
    pub years_experience: u32,
}

impl Profile {
    /// Avatar fallback: first letter of every word in the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub logo: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub level: String,
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image: String,
    pub live_link: String,
    /// Absent when the source is not public
    #[serde(default)]
    pub source_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub secondary_company: Option<String>,
    pub image: String,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub title: String,
    pub href: String,
    pub display_text: String,
}

/// A file offered through a client-side download
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Path relative to the asset base
    pub path: String,
    /// Name the browser saves the file under
    pub file_name: String,
}

/// Headline numbers shown in the hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub years_experience: u32,
    pub projects: usize,
    pub certifications: usize,
}

impl Content {
    /// The portfolio this crate ships with.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let content: Content = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            years_experience: self.profile.years_experience,
            projects: self.projects.len(),
            certifications: self.certifications.len().max(self.featured_certifications.len()),
        }
    }

    /// Check the only referential rules content has: image references and
    /// the download path are non-empty, and outbound links are URLs.
    pub fn validate(&self) -> Result<()> {
        require_asset("profile avatar", &self.profile.avatar)?;
        require_asset("resume", &self.resume.path)?;
        if self.resume.file_name.trim().is_empty() {
            return Err(Error::ContentError("resume has no file name".into()));
        }
        for s in &self.socials {
            require_link(&format!("social link '{}'", s.title), &s.href)?;
        }
        for t in &self.tech_stack {
            require_asset(&format!("tech '{}'", t.name), &t.logo)?;
        }
        for j in &self.jobs {
            require_asset(&format!("job '{}'", j.title), &j.logo)?;
        }
        for c in self.featured_certifications.iter().chain(&self.certifications) {
            let what = format!("certification '{}'", c.title);
            require_asset(&what, &c.image)?;
            require_link(&what, &c.link)?;
        }
        for p in &self.projects {
            let what = format!("project '{}'", p.title);
            require_asset(&what, &p.image)?;
            require_link(&what, &p.live_link)?;
            if let Some(src) = &p.source_link {
                require_link(&what, src)?;
            }
        }
        for t in &self.testimonials {
            require_asset(&format!("testimonial '{}'", t.name), &t.image)?;
        }
        for c in &self.contacts {
            require_link(&format!("contact '{}'", c.title), &c.href)?;
        }
        Ok(())
    }
}

fn require_asset(what: &str, reference: &str) -> Result<()> {
    if reference.trim().is_empty() {
        return Err(Error::ContentError(format!("{} has an empty image reference", what)));
    }
    Ok(())
}

fn require_link(what: &str, href: &str) -> Result<()> {
    url::Url::parse(href)
        .map(|_| ())
        .map_err(|e| Error::ContentError(format!("{} has an invalid link '{}': {}", what, href, e)))
}
