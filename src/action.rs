//! What the user did, and what the page wants done about it.
//!
//! Clicks are delegated: the runtime listens once on the document, finds the
//! nearest element carrying `data-action`, and turns its attributes into an
//! [`Action`] with [`Action::from_attrs`]. Pages answer with a list of
//! [`Effect`]s for the runtime to carry out, so every decision stays testable
//! without a browser.
//!
//! | `data-action` | `data-target` | `data-index` | Action |
//! |---------------|---------------|--------------|--------|
//! | `scroll` | section id | | [`Action::ScrollTo`] |
//! | `logo` | | | [`Action::LogoClick`] |
//! | `lang` / `lang-mobile` | | | [`Action::ToggleLanguage`] |
//! | `theme` | | | [`Action::ToggleTheme`] |
//! | `menu` | | | [`Action::ToggleMenu`] |
//! | `project` | | card index | [`Action::OpenProject`] |
//! | `close-project` | | | [`Action::CloseProject`] |
//! | `admin-tab` | tab | | [`AdminAction::SelectTab`] |
//! | `admin-delete` | `work` / `project` / `award` | row | [`AdminAction::Delete`] |
//! | `admin-save`, `admin-download`, `admin-dismiss`, `admin-back` | | | the matching [`AdminAction`] |

use crate::admin::{AdminAction, AdminList, AdminTab};
use crate::bundle::Download;
use crate::gesture::TimerTicket;
use crate::route::Route;
use crate::section::SectionId;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScrollTo(SectionId),
    LogoClick,
    /// `mobile` is set when the switch came from the mobile menu, which then closes.
    ToggleLanguage { mobile: bool },
    ToggleTheme,
    ToggleMenu,
    OpenProject(usize),
    CloseProject,
    Admin(AdminAction),
}

impl Action {
    pub fn from_attrs(action: &str, target: Option<&str>, index: Option<&str>) -> Option<Self> {
        let row = || index.and_then(|i| i.parse::<usize>().ok());
        let parsed = match action {
            "scroll" => Action::ScrollTo(target?.parse().ok()?),
            "logo" => Action::LogoClick,
            "lang" => Action::ToggleLanguage { mobile: false },
            "lang-mobile" => Action::ToggleLanguage { mobile: true },
            "theme" => Action::ToggleTheme,
            "menu" => Action::ToggleMenu,
            "project" => Action::OpenProject(row()?),
            "close-project" => Action::CloseProject,
            "admin-tab" => Action::Admin(AdminAction::SelectTab(target?.parse::<AdminTab>().ok()?)),
            "admin-delete" => Action::Admin(AdminAction::Delete(
                target?.parse::<AdminList>().ok()?,
                row()?,
            )),
            "admin-save" => Action::Admin(AdminAction::Save),
            "admin-download" => Action::Admin(AdminAction::Download),
            "admin-dismiss" => Action::Admin(AdminAction::DismissNotice),
            "admin-back" => Action::Admin(AdminAction::Back),
            _ => return None,
        };
        Some(parsed)
    }
}

/// Independently re-renderable parts of the page. Each maps to one element
/// whose contents are replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Splash,
    Nav,
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Awards,
    Contact,
    Modal,
    Admin,
}

impl Region {
    /// Regions of the home page, in document order.
    pub const HOME: [Region; 10] = [
        Region::Splash,
        Region::Nav,
        Region::Hero,
        Region::About,
        Region::Experience,
        Region::Skills,
        Region::Projects,
        Region::Awards,
        Region::Contact,
        Region::Modal,
    ];

    /// DOM id of the element that hosts the region.
    pub fn element_id(self) -> &'static str {
        match self {
            Region::Splash => "splash",
            Region::Nav => "site-nav",
            Region::Hero => SectionId::Home.as_str(),
            Region::About => SectionId::About.as_str(),
            Region::Experience => SectionId::Experience.as_str(),
            Region::Skills => SectionId::Skills.as_str(),
            Region::Projects => SectionId::Projects.as_str(),
            Region::Awards => SectionId::Awards.as_str(),
            Region::Contact => SectionId::Contact.as_str(),
            Region::Modal => "project-modal",
            Region::Admin => "admin",
        }
    }

    /// Content regions that animate in when scrolled into view.
    pub fn is_revealed(self) -> bool {
        matches!(
            self,
            Region::Hero
                | Region::About
                | Region::Experience
                | Region::Skills
                | Region::Projects
                | Region::Awards
                | Region::Contact
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Render(Region),
    ScrollToSection(SectionId),
    ScrollToTop,
    ArmLogoTimer(TimerTicket),
    /// Flip the shared language; settings listeners re-render.
    ToggleLanguage,
    /// Flip the shared theme; settings listeners update the document class.
    ToggleTheme,
    Navigate(Route),
    Download(Download),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scroll_targets() {
        assert_eq!(
            Action::from_attrs("scroll", Some("projects"), None),
            Some(Action::ScrollTo(SectionId::Projects))
        );
        assert_eq!(Action::from_attrs("scroll", Some("nowhere"), None), None);
        assert_eq!(Action::from_attrs("scroll", None, None), None);
    }

    #[test]
    fn parse_project_index() {
        assert_eq!(
            Action::from_attrs("project", None, Some("3")),
            Some(Action::OpenProject(3))
        );
        assert_eq!(Action::from_attrs("project", None, Some("x")), None);
    }

    #[test]
    fn parse_language_switches() {
        assert_eq!(
            Action::from_attrs("lang-mobile", None, None),
            Some(Action::ToggleLanguage { mobile: true })
        );
        assert_eq!(
            Action::from_attrs("lang", None, None),
            Some(Action::ToggleLanguage { mobile: false })
        );
    }

    #[test]
    fn parse_admin_actions() {
        assert_eq!(
            Action::from_attrs("admin-delete", Some("award"), Some("0")),
            Some(Action::Admin(AdminAction::Delete(AdminList::Award, 0)))
        );
        assert_eq!(
            Action::from_attrs("admin-tab", Some("projects"), None),
            Some(Action::Admin(AdminAction::SelectTab(AdminTab::Projects)))
        );
        assert_eq!(
            Action::from_attrs("admin-back", None, None),
            Some(Action::Admin(AdminAction::Back))
        );
    }

    #[test]
    fn unknown_action_is_ignored() {
        assert_eq!(Action::from_attrs("explode", None, None), None);
    }

    #[test]
    fn section_regions_share_section_ids() {
        assert_eq!(Region::Hero.element_id(), "home");
        assert_eq!(Region::Skills.element_id(), "skills");
        assert!(!Region::Nav.is_revealed());
    }
}
