//! Content feed
//!
//! Hand-authored page content: navigation, tech stack, career history,
//! projects, social links and personal details. The controller only needs
//! the ordered section ids; everything else is handed to the renderer.
//!
//! A default feed is compiled in. A JSON file with the same shape can
//! replace it at startup.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::types::SectionId;

const BUILTIN_CONTENT: &str = include_str!("../assets/content.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub section_id: SectionId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub category: String,
    pub tooltip: String,
    /// CSS color used for the tile accent
    pub color: String,
    /// Glyph shown on the tile
    #[serde(default)]
    pub icon: Option<String>,
}

impl TechItem {
    /// Glyph for the tile, falling back to the first two letters of the name
    pub fn glyph(&self) -> String {
        match &self.icon {
            Some(icon) if !icon.is_empty() => icon.clone(),
            _ => self.name.chars().take(2).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: String,
    #[serde(default)]
    pub demo: Option<String>,
    /// Screenshot path; an empty string means "no image"
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Text drawn over the gradient when the screenshot is missing or broken
    pub fn placeholder_label(&self) -> &str {
        self.title.split_whitespace().next().unwrap_or("")
    }

    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub role: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub years_of_experience: u32,
    pub cv_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hero {
    /// Static text before the typewriter phrase
    #[serde(default)]
    pub lead: String,
    #[serde(default)]
    pub phrases: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCard {
    pub title: String,
    pub description: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub heading: String,
    /// Second paragraph; `{years}` is replaced with years of experience
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub facts: Vec<Fact>,
    #[serde(default)]
    pub values: Vec<ValueCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFeed {
    pub personal: PersonalInfo,
    pub nav: Vec<NavEntry>,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub tech: Vec<TechItem>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

impl ContentFeed {
    /// The feed compiled into the binary
    pub fn builtin() -> FolioResult<Self> {
        Self::from_json(BUILTIN_CONTENT)
    }

    pub fn from_json(json: &str) -> FolioResult<Self> {
        let feed: ContentFeed = serde_json::from_str(json)?;
        feed.validate()?;
        Ok(feed)
    }

    pub fn load(path: &Path) -> FolioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading content feed");
        Self::from_json(&json)
    }

    /// Load `path` if given, otherwise the built-in feed
    pub fn load_or_builtin(path: Option<&Path>) -> FolioResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    fn validate(&self) -> FolioResult<()> {
        if self.nav.is_empty() {
            return Err(FolioError::InvalidContent(
                "navigation must list at least one section".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for entry in &self.nav {
            if !seen.insert(&entry.section_id) {
                return Err(FolioError::DuplicateSection(entry.section_id.to_string()));
            }
        }
        Ok(())
    }

    /// Ordered section ids, in document order
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.nav.iter().map(|entry| entry.section_id.clone()).collect()
    }

    /// About paragraph with the years placeholder filled in
    pub fn about_detail(&self) -> String {
        self.about
            .detail
            .replace("{years}", &self.personal.years_of_experience.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_feed_parses() {
        let feed = ContentFeed::builtin().unwrap();
        let ids: Vec<String> = feed.section_ids().iter().map(|s| s.to_string()).collect();
        assert_eq!(ids, ["about", "tech", "experience", "projects", "contact"]);
        assert_eq!(feed.hero.phrases.len(), 4);
        assert_eq!(feed.tech.len(), 8);
        assert!(feed.social.iter().any(|link| link.icon == "github"));
    }

    #[test]
    fn about_detail_fills_years() {
        let feed = ContentFeed::builtin().unwrap();
        let detail = feed.about_detail();
        assert!(detail.starts_with("With 2+ years"));
        assert!(!detail.contains("{years}"));
    }

    #[test]
    fn glyph_falls_back_to_name() {
        let feed = ContentFeed::builtin().unwrap();
        let typeorm = feed.tech.iter().find(|t| t.name == "TypeORM").unwrap();
        assert_eq!(typeorm.glyph(), "Ty");
        let redis = feed.tech.iter().find(|t| t.name == "Redis").unwrap();
        assert_eq!(redis.glyph(), "⚡");
    }

    #[test]
    fn placeholder_uses_first_word() {
        let project = Project {
            title: "Enterprise ERP System".to_string(),
            description: String::new(),
            long_description: String::new(),
            tags: vec![],
            link: String::new(),
            demo: None,
            image: "  ".to_string(),
            featured: false,
        };
        assert_eq!(project.placeholder_label(), "Enterprise");
        assert!(!project.has_image());
    }

    #[test]
    fn rejects_duplicate_nav_sections() {
        let json = r##"{
            "personal": {"name": "A", "role": "B", "email": "a@b.c", "location": "X",
                         "bio": "", "years_of_experience": 1, "cv_url": ""},
            "nav": [{"label": "One", "section_id": "#about"},
                    {"label": "Two", "section_id": "about"}]
        }"##;
        let err = ContentFeed::from_json(json).unwrap_err();
        assert!(matches!(err, FolioError::DuplicateSection(_)));
    }

    #[test]
    fn rejects_empty_nav() {
        let json = r#"{
            "personal": {"name": "A", "role": "B", "email": "a@b.c", "location": "X",
                         "bio": "", "years_of_experience": 1, "cv_url": ""},
            "nav": []
        }"#;
        assert!(matches!(
            ContentFeed::from_json(json),
            Err(FolioError::InvalidContent(_))
        ));
    }
}
