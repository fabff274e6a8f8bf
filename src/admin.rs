//! Admin data viewer.
//!
//! Reached at `/admin` (or by triple-clicking the logo). Loads all five
//! resources at once, shows them as editable forms grouped into tabs, and
//! offers the whole set back as a single download. Nothing is ever written
//! anywhere: the site is static, so "Save" only explains how to publish an
//! edited download.
//!
//! There is no access control. The route is unlisted, not protected; all it
//! exposes is data the public page already shows.
//!
//! Edits never modify the loaded bundle in place. Each [`AdminEdit`] produces
//! a new [`PortfolioBundle`] with one field replaced or one row removed.

use crate::action::{Effect, Region};
use crate::bundle::PortfolioBundle;
use crate::loader::{LoadTicket, SectionSlot, SectionState, Settled};
use crate::render;
use crate::resource::ResourceError;
use crate::route::Route;
use maud::{Markup, html};
use std::str::FromStr;

/// Shown after "Save".
pub const SAVE_NOTICE: &str = "Changes are kept in this browser tab only. \
Use \"Download all data\", run `folio unpack portfolio_data.json`, \
and commit the updated files in data/ to publish them.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    About,
    Experience,
    Skills,
    Projects,
    Awards,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::About,
        AdminTab::Experience,
        AdminTab::Skills,
        AdminTab::Projects,
        AdminTab::Awards,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AdminTab::About => "about",
            AdminTab::Experience => "experience",
            AdminTab::Skills => "skills",
            AdminTab::Projects => "projects",
            AdminTab::Awards => "awards",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::About => "About",
            AdminTab::Experience => "Experience",
            AdminTab::Skills => "Skills",
            AdminTab::Projects => "Projects",
            AdminTab::Awards => "Awards",
        }
    }
}

impl FromStr for AdminTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdminTab::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown admin tab \"{s}\""))
    }
}

/// Lists whose rows can be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminList {
    Work,
    Project,
    Award,
}

impl AdminList {
    pub fn as_str(self) -> &'static str {
        match self {
            AdminList::Work => "work",
            AdminList::Project => "project",
            AdminList::Award => "award",
        }
    }
}

impl FromStr for AdminList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(AdminList::Work),
            "project" => Ok(AdminList::Project),
            "award" => Ok(AdminList::Award),
            other => Err(format!("unknown admin list \"{other}\"")),
        }
    }
}

/// One form field change, addressed the way the form names its inputs
/// (`data-field="work.2.company"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminEdit {
    AboutName(String),
    AboutAge(u32),
    AboutHeadline(String),
    AboutBio(String),
    WorkCompany(usize, String),
    WorkPosition(usize, String),
    WorkPeriod(usize, String),
    ProjectTitle(usize, String),
    ProjectShortDescription(usize, String),
    AwardTitle(usize, String),
    AwardIssuer(usize, String),
    AwardDate(usize, String),
}

impl AdminEdit {
    /// Parse a field name and its new value. Unknown fields, bad row numbers
    /// and non-numeric ages yield `None` and the input is ignored.
    pub fn parse(field: &str, value: &str) -> Option<Self> {
        let parts: Vec<&str> = field.split('.').collect();
        let text = value.to_string();
        let edit = match parts.as_slice() {
            ["about", "name"] => AdminEdit::AboutName(text),
            ["about", "age"] => AdminEdit::AboutAge(value.trim().parse().ok()?),
            ["about", "headline"] => AdminEdit::AboutHeadline(text),
            ["about", "bio"] => AdminEdit::AboutBio(text),
            ["work", row, name] => {
                let row = row.parse().ok()?;
                match *name {
                    "company" => AdminEdit::WorkCompany(row, text),
                    "position" => AdminEdit::WorkPosition(row, text),
                    "period" => AdminEdit::WorkPeriod(row, text),
                    _ => return None,
                }
            }
            ["project", row, name] => {
                let row = row.parse().ok()?;
                match *name {
                    "title" => AdminEdit::ProjectTitle(row, text),
                    "shortDescription" => AdminEdit::ProjectShortDescription(row, text),
                    _ => return None,
                }
            }
            ["award", row, name] => {
                let row = row.parse().ok()?;
                match *name {
                    "title" => AdminEdit::AwardTitle(row, text),
                    "issuer" => AdminEdit::AwardIssuer(row, text),
                    "date" => AdminEdit::AwardDate(row, text),
                    _ => return None,
                }
            }
            _ => return None,
        };
        Some(edit)
    }

    /// The bundle with this edit applied. Out-of-range rows change nothing.
    pub fn apply(self, bundle: &PortfolioBundle) -> PortfolioBundle {
        let mut next = bundle.clone();
        match self {
            AdminEdit::AboutName(v) => next.about.name = v,
            AdminEdit::AboutAge(v) => next.about.age = v,
            AdminEdit::AboutHeadline(v) => next.about.headline = v,
            AdminEdit::AboutBio(v) => next.about.bio = v,
            AdminEdit::WorkCompany(i, v) => {
                next.experience.work = replaced(&bundle.experience.work, i, |w| w.company = v)
            }
            AdminEdit::WorkPosition(i, v) => {
                next.experience.work = replaced(&bundle.experience.work, i, |w| w.position = v)
            }
            AdminEdit::WorkPeriod(i, v) => {
                next.experience.work = replaced(&bundle.experience.work, i, |w| w.period = v)
            }
            AdminEdit::ProjectTitle(i, v) => {
                next.projects.projects = replaced(&bundle.projects.projects, i, |p| p.title = v)
            }
            AdminEdit::ProjectShortDescription(i, v) => {
                next.projects.projects =
                    replaced(&bundle.projects.projects, i, |p| p.short_description = v)
            }
            AdminEdit::AwardTitle(i, v) => {
                next.awards.awards = replaced(&bundle.awards.awards, i, |a| a.title = v)
            }
            AdminEdit::AwardIssuer(i, v) => {
                next.awards.awards = replaced(&bundle.awards.awards, i, |a| a.issuer = v)
            }
            AdminEdit::AwardDate(i, v) => {
                next.awards.awards = replaced(&bundle.awards.awards, i, |a| a.date = v)
            }
        }
        next
    }
}

/// New list equal to `list` except that element `index` went through `edit`.
pub fn replaced<T: Clone>(list: &[T], index: usize, edit: impl FnOnce(&mut T)) -> Vec<T> {
    let mut edit = Some(edit);
    list.iter()
        .enumerate()
        .map(|(i, item)| {
            let mut item = item.clone();
            if i == index {
                if let Some(edit) = edit.take() {
                    edit(&mut item);
                }
            }
            item
        })
        .collect()
}

/// New list without element `index`, other elements in their original order.
pub fn removed<T: Clone>(list: &[T], index: usize) -> Vec<T> {
    list.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

/// The bundle without row `index` of `list`.
pub fn delete_row(bundle: &PortfolioBundle, list: AdminList, index: usize) -> PortfolioBundle {
    let mut next = bundle.clone();
    match list {
        AdminList::Work => next.experience.work = removed(&bundle.experience.work, index),
        AdminList::Project => next.projects.projects = removed(&bundle.projects.projects, index),
        AdminList::Award => next.awards.awards = removed(&bundle.awards.awards, index),
    }
    next
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    SelectTab(AdminTab),
    Edit(AdminEdit),
    Delete(AdminList, usize),
    Save,
    DismissNotice,
    Download,
    Back,
}

#[derive(Debug, Default)]
pub struct AdminPage {
    slot: SectionSlot<PortfolioBundle>,
    tab: AdminTab,
    notice: Option<&'static str>,
}

impl AdminPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SectionState<PortfolioBundle> {
        self.slot.state()
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Start loading. The returned ticket must accompany the bundle result.
    pub fn mount(&mut self) -> LoadTicket {
        self.notice = None;
        self.slot.begin()
    }

    pub fn unmount(&mut self) {
        self.slot.unmount();
    }

    /// Record the bundle fetch. Returns the region to redraw if it applied.
    pub fn settle(
        &mut self,
        ticket: LoadTicket,
        result: Result<PortfolioBundle, ResourceError>,
    ) -> Option<Region> {
        match self.slot.settle(ticket, result) {
            Settled::Applied => Some(Region::Admin),
            Settled::Stale => None,
        }
    }

    pub fn handle(&mut self, action: AdminAction) -> Vec<Effect> {
        match action {
            AdminAction::SelectTab(tab) => {
                if tab == self.tab {
                    return Vec::new();
                }
                self.tab = tab;
                vec![Effect::Render(Region::Admin)]
            }
            // The input already shows the new value; redrawing would steal focus.
            AdminAction::Edit(edit) => {
                self.slot.replace_ready(|bundle| edit.apply(bundle));
                Vec::new()
            }
            AdminAction::Delete(list, index) => {
                if self
                    .slot
                    .replace_ready(|bundle| delete_row(bundle, list, index))
                {
                    vec![Effect::Render(Region::Admin)]
                } else {
                    Vec::new()
                }
            }
            AdminAction::Save => {
                tracing::info!("admin save requested; nothing is persisted");
                self.notice = Some(SAVE_NOTICE);
                vec![Effect::Render(Region::Admin)]
            }
            AdminAction::DismissNotice => {
                self.notice = None;
                vec![Effect::Render(Region::Admin)]
            }
            AdminAction::Download => {
                let Some(bundle) = self.slot.state().ready() else {
                    return Vec::new();
                };
                match bundle.download() {
                    Ok(download) => vec![Effect::Download(download)],
                    Err(e) => {
                        tracing::error!(error = %e, "failed to serialize data bundle");
                        Vec::new()
                    }
                }
            }
            AdminAction::Back => vec![Effect::Navigate(Route::Home)],
        }
    }

    pub fn render(&self) -> Markup {
        render::admin::render_admin(self.slot.state(), self.tab, self.notice)
    }

    /// The page body: the viewer inside its host element.
    pub fn render_body(&self) -> Markup {
        html! {
            main id=(Region::Admin.element_id()) { (self.render()) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::tests::sample;

    fn loaded() -> AdminPage {
        let mut page = AdminPage::new();
        let ticket = page.mount();
        assert_eq!(page.settle(ticket, Ok(sample())), Some(Region::Admin));
        page
    }

    fn project_ids(page: &AdminPage) -> Vec<String> {
        page.state()
            .ready()
            .unwrap()
            .projects
            .projects
            .iter()
            .map(|p| p.id.clone())
            .collect()
    }

    #[test]
    fn failed_load_shows_error() {
        let mut page = AdminPage::new();
        let ticket = page.mount();
        let loading = page.render().into_string();
        let err = ResourceError::Transport {
            path: "data/projects.json".into(),
            message: "connection refused".into(),
        };
        assert_eq!(page.settle(ticket, Err(err)), Some(Region::Admin));
        let html = page.render().into_string();
        assert_ne!(html, loading);
        assert!(html.contains("Failed to load data"));
        assert!(html.contains("data/projects.json"));
    }

    #[test]
    fn removed_preserves_order() {
        let list = vec!['a', 'b', 'c', 'd'];
        for i in 0..list.len() {
            let out = removed(&list, i);
            assert_eq!(out.len(), list.len() - 1);
            let expected: Vec<char> = list
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, c)| *c)
                .collect();
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn replaced_leaves_source_untouched() {
        let list = vec![1, 2, 3];
        let out = replaced(&list, 1, |n| *n = 20);
        assert_eq!(out, vec![1, 20, 3]);
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn replaced_out_of_range_is_copy() {
        assert_eq!(replaced(&[1, 2], 5, |n| *n = 0), vec![1, 2]);
    }

    #[test]
    fn parse_fields() {
        assert_eq!(
            AdminEdit::parse("work.2.company", "Acme"),
            Some(AdminEdit::WorkCompany(2, "Acme".into()))
        );
        assert_eq!(
            AdminEdit::parse("project.0.shortDescription", "x"),
            Some(AdminEdit::ProjectShortDescription(0, "x".into()))
        );
        assert_eq!(AdminEdit::parse("about.age", "31"), Some(AdminEdit::AboutAge(31)));
        assert_eq!(AdminEdit::parse("award.x.title", "t"), None);
        assert_eq!(AdminEdit::parse("work.0.salary", "1"), None);
    }

    #[test]
    fn invalid_age_is_ignored() {
        assert_eq!(AdminEdit::parse("about.age", "thirty"), None);
        assert_eq!(AdminEdit::parse("about.age", "-1"), None);
    }

    #[test]
    fn loading_until_bundle_arrives() {
        let mut page = AdminPage::new();
        page.mount();
        assert!(page.state().is_loading());
        assert!(page.render().into_string().contains("Loading"));
    }

    #[test]
    fn delete_middle_project() {
        let mut page = loaded();
        assert_eq!(project_ids(&page), vec!["p1", "p2", "p3"]);
        let effects = page.handle(AdminAction::Delete(AdminList::Project, 1));
        assert_eq!(effects, vec![Effect::Render(Region::Admin)]);
        assert_eq!(project_ids(&page), vec!["p1", "p3"]);
    }

    #[test]
    fn edit_updates_without_redraw() {
        let mut page = loaded();
        let effects = page.handle(AdminAction::Edit(AdminEdit::AboutName("Kim".into())));
        assert!(effects.is_empty());
        assert_eq!(page.state().ready().unwrap().about.name, "Kim");
    }

    #[test]
    fn edit_before_load_is_dropped() {
        let mut page = AdminPage::new();
        page.mount();
        page.handle(AdminAction::Edit(AdminEdit::AboutName("Kim".into())));
        assert!(page.state().is_loading());
    }

    #[test]
    fn save_shows_notice_only() {
        let mut page = loaded();
        let before = page.state().ready().cloned();
        page.handle(AdminAction::Save);
        assert_eq!(page.notice(), Some(SAVE_NOTICE));
        assert_eq!(page.state().ready().cloned(), before);
        assert!(page.render().into_string().contains("Download all data"));

        page.handle(AdminAction::DismissNotice);
        assert_eq!(page.notice(), None);
    }

    #[test]
    fn download_reflects_edits() {
        let mut page = loaded();
        page.handle(AdminAction::Edit(AdminEdit::AwardIssuer(0, "AWS".into())));
        let effects = page.handle(AdminAction::Download);
        let [Effect::Download(download)] = effects.as_slice() else {
            panic!("expected a download, got {effects:?}");
        };
        assert_eq!(download.file_name, "portfolio_data.json");
        let bundle = PortfolioBundle::from_json(&download.body).unwrap();
        assert_eq!(bundle.awards.awards[0].issuer, "AWS");
    }

    #[test]
    fn download_before_load_does_nothing() {
        let mut page = AdminPage::new();
        page.mount();
        assert!(page.handle(AdminAction::Download).is_empty());
    }

    #[test]
    fn back_navigates_home() {
        let mut page = loaded();
        assert_eq!(
            page.handle(AdminAction::Back),
            vec![Effect::Navigate(Route::Home)]
        );
    }

    #[test]
    fn stale_bundle_after_unmount() {
        let mut page = AdminPage::new();
        let ticket = page.mount();
        page.unmount();
        assert_eq!(page.settle(ticket, Ok(sample())), None);
        assert!(page.state().is_loading());
    }

    #[test]
    fn tab_switch_redraws_once() {
        let mut page = loaded();
        assert_eq!(
            page.handle(AdminAction::SelectTab(AdminTab::Awards)),
            vec![Effect::Render(Region::Admin)]
        );
        assert!(page.handle(AdminAction::SelectTab(AdminTab::Awards)).is_empty());
        assert_eq!(page.tab(), AdminTab::Awards);
    }
}
