//! Static content catalogs
//!
//! The site copy and the team/project catalogs are read once from
//! `content/site.toml`, which is compiled into the binary. Record order in
//! the file is display order.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::image::ImageSource;
use crate::page::Page;

/// Embedded content document
pub const EMBEDDED_CONTENT: &str = include_str!("../content/site.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub organization: Organization,
    pub pages: Pages,
    pub home: HomeContent,
    pub about: AboutContent,
    pub work: WorkContent,
    pub get_involved: GetInvolvedContent,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub footer_blurb: String,
}

/// Heading and lead paragraph for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCopy {
    pub heading: String,
    pub intro: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    pub home: PageCopy,
    pub about: PageCopy,
    pub work: PageCopy,
    #[serde(rename = "get-involved")]
    pub get_involved: PageCopy,
    pub contact: PageCopy,
}

/// Icon identifiers; artwork is up to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Heart,
    Users,
    Briefcase,
}

/// A button that navigates to another page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAction {
    pub label: String,
    pub target: Page,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactStat {
    pub figure: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeContent {
    pub hero_alt: String,
    pub hero_image: ImageSource,
    pub primary_action: PageAction,
    pub secondary_action: PageAction,
    pub programs_heading: String,
    pub programs_intro: String,
    pub impact_heading: String,
    pub impact_intro: String,
    pub programs: Vec<Program>,
    pub impact: Vec<ImpactStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: ImageSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub story_heading: String,
    pub story_alt: String,
    pub story_image: ImageSource,
    pub story: Vec<String>,
    pub team_heading: String,
    pub team: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: ImageSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkContent {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Primary,
    Secondary,
}

/// One of the ways to help on the get-involved page. Its button is inert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WayToHelp {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub action: String,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetInvolvedContent {
    pub ways: Vec<WayToHelp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub form_heading: String,
    pub submit_label: String,
    pub info_heading: String,
    pub address: String,
    pub short_address: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

impl SiteContent {
    /// Parse the content compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        tracing::debug!(
            team = content.about.team.len(),
            projects = content.work.projects.len(),
            "site content loaded"
        );
        Ok(content)
    }

    pub fn page_copy(&self, page: Page) -> &PageCopy {
        match page {
            Page::Home => &self.pages.home,
            Page::About => &self.pages.about,
            Page::Work => &self.pages.work,
            Page::GetInvolved => &self.pages.get_involved,
            Page::Contact => &self.pages.contact,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.organization.name.trim().is_empty() {
            return Err(Error::invalid_content("organization name is empty"));
        }
        for page in Page::ALL {
            if self.page_copy(page).heading.trim().is_empty() {
                return Err(Error::invalid_content(format!("page '{page}' has no heading")));
            }
        }

        let mut images: Vec<(&str, &ImageSource)> = vec![
            ("home hero", &self.home.hero_image),
            ("about story", &self.about.story_image),
        ];
        images.extend(self.about.team.iter().map(|m| (m.name.as_str(), &m.image)));
        images.extend(self.work.projects.iter().map(|p| (p.title.as_str(), &p.image)));
        for (owner, image) in images {
            if image.src.is_empty() || image.fallback.is_empty() {
                return Err(Error::invalid_content(format!(
                    "image for '{owner}' needs both src and fallback"
                )));
            }
        }
        Ok(())
    }
}
