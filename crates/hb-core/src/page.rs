//! Page identifiers
//!
//! The site has exactly five views. Identifiers are the kebab-case strings
//! used in content files and the host's diagnostic endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The page currently selected by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    About,
    Work,
    GetInvolved,
    Contact,
}

impl Page {
    /// All pages in navigation order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Work,
        Page::GetInvolved,
        Page::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Work => "work",
            Page::GetInvolved => "get-involved",
            Page::Contact => "contact",
        }
    }

    /// Label shown for this page in the header navigation
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::Work => "Our Work",
            Page::GetInvolved => "Get Involved",
            Page::Contact => "Contact",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| Error::unknown_page(s))
    }
}
