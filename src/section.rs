//! The seven scroll targets of the home page, in page order.

use crate::i18n::{Bilingual, text};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Awards,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Awards,
        SectionId::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Awards => "awards",
            SectionId::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> Bilingual {
        match self {
            SectionId::Home => text::NAV_HOME,
            SectionId::About => text::NAV_ABOUT,
            SectionId::Experience => text::NAV_EXPERIENCE,
            SectionId::Skills => text::NAV_SKILLS,
            SectionId::Projects => text::NAV_PROJECTS,
            SectionId::Awards => text::NAV_AWARDS,
            SectionId::Contact => text::NAV_CONTACT,
        }
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown section \"{s}\""))
    }
}
