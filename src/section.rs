//! Named sections of the portfolio page, in document order

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Experience,
    Education,
    Certificates,
    Projects,
    Testimonials,
    Contact,
}

impl SectionId {
    /// Every section in the order it appears on the page.
    pub const ALL: [SectionId; 8] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Certificates,
        SectionId::Projects,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// The element id used in rendered markup.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Certificates => "certificates",
            SectionId::Projects => "projects",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Certificates => "Certificates",
            SectionId::Projects => "Projects",
            SectionId::Testimonials => "Testimonials",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section id '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    /// Exact, case-sensitive match on the element id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_element_ids_only() {
        assert_eq!("about".parse::<SectionId>(), Ok(SectionId::About));
        assert_eq!("contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert!("#contact".parse::<SectionId>().is_err());
        assert!("Projects".parse::<SectionId>().is_err());
        assert!(" home".parse::<SectionId>().is_err());
        assert!("blog".parse::<SectionId>().is_err());
    }

    #[test]
    fn all_is_in_document_order() {
        assert_eq!(SectionId::ALL.first(), Some(&SectionId::Home));
        assert_eq!(SectionId::ALL.last(), Some(&SectionId::Contact));
        for pair in SectionId::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
