//! Header, overlay and footer link models

use crate::page::Page;

/// A navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub target: Page,
    pub label: &'static str,
}

/// A navigation entry as rendered for a given active page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedLink {
    pub target: Page,
    pub label: &'static str,
    pub selected: bool,
}

/// A button styled as a call to action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: Page,
}

const fn link(target: Page, label: &'static str) -> NavLink {
    NavLink { target, label }
}

/// Header and overlay links, in display order
pub const PRIMARY_LINKS: [NavLink; 5] = [
    link(Page::Home, "Home"),
    link(Page::About, "About Us"),
    link(Page::Work, "Our Work"),
    link(Page::GetInvolved, "Get Involved"),
    link(Page::Contact, "Contact"),
];

/// Footer "Quick Links"
pub const FOOTER_LINKS: [NavLink; 4] = [
    link(Page::About, "About Us"),
    link(Page::Work, "Our Work"),
    link(Page::GetInvolved, "Get Involved"),
    link(Page::Contact, "Contact"),
];

/// Header call to action
pub const DONATE: CallToAction = CallToAction {
    label: "Donate",
    target: Page::GetInvolved,
};

/// Overlay menu call to action
pub const DONATE_NOW: CallToAction = CallToAction {
    label: "Donate Now",
    target: Page::GetInvolved,
};

/// Header/overlay links with exactly the active one marked selected.
pub fn primary_links(active: Page) -> Vec<RenderedLink> {
    PRIMARY_LINKS
        .iter()
        .map(|l| RenderedLink {
            target: l.target,
            label: l.label,
            selected: l.target == active,
        })
        .collect()
}

/// Footer links are never marked.
pub fn footer_links() -> &'static [NavLink] {
    &FOOTER_LINKS
}

pub fn copyright_line(organization: &str, year: i32) -> String {
    format!("© {year} {organization}. All Rights Reserved.")
}
