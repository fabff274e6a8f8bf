//! The home page as a state machine.
//!
//! [`PortfolioPage`] owns everything the single-page site remembers between
//! events: one [`SectionSlot`] per content section, the reveal latches, the
//! open project, the navigation bar, the logo gesture and the splash
//! progress. It never touches the DOM. The browser runtime feeds it
//! [`Action`]s, fetch results and timer callbacks, and executes the
//! [`Effect`]s it returns.
//!
//! ```text
//! mount() ──▶ MountTickets ──▶ one fetch per section (concurrent)
//!                                    │ resolves in any order
//!                                    ▼
//!                       settle(ticket, Loaded::*) ──▶ Some(Region) to redraw
//! ```
//!
//! Contact loads `about.json` through its own fetch rather than sharing the
//! About section's result, so the two sections resolve independently.

use crate::action::{Action, Effect, Region};
use crate::config::RuntimeConfig;
use crate::gesture::{ClickOutcome, LogoGesture, TimerTicket, WindowClosed};
use crate::loader::{LoadTicket, SectionSlot, Settled};
use crate::render::{self, View};
use crate::render::loading::SplashProgress;
use crate::render::nav::{NavState, SCROLLED_AFTER_PX};
use crate::resource::ResourceError;
use crate::route::Route;
use crate::settings::Settings;
use crate::types::{AwardsData, ExperienceData, Profile, ProjectsData, SkillsData};
use crate::visibility::Reveal;
use maud::{Markup, html};

/// A completed section fetch.
#[derive(Debug)]
pub enum Loaded {
    About(Result<Profile, ResourceError>),
    Experience(Result<ExperienceData, ResourceError>),
    Skills(Result<SkillsData, ResourceError>),
    Projects(Result<ProjectsData, ResourceError>),
    Awards(Result<AwardsData, ResourceError>),
    Contact(Result<Profile, ResourceError>),
}

/// Tickets for the six fetches started by [`PortfolioPage::mount`].
#[derive(Debug, Clone, Copy)]
pub struct MountTickets {
    pub about: LoadTicket,
    pub experience: LoadTicket,
    pub skills: LoadTicket,
    pub projects: LoadTicket,
    pub awards: LoadTicket,
    pub contact: LoadTicket,
}

#[derive(Debug, Clone, Copy, Default)]
struct Reveals {
    about: Reveal,
    experience: Reveal,
    skills: Reveal,
    projects: Reveal,
    awards: Reveal,
    contact: Reveal,
}

impl Reveals {
    fn get_mut(&mut self, region: Region) -> Option<&mut Reveal> {
        match region {
            Region::About => Some(&mut self.about),
            Region::Experience => Some(&mut self.experience),
            Region::Skills => Some(&mut self.skills),
            Region::Projects => Some(&mut self.projects),
            Region::Awards => Some(&mut self.awards),
            Region::Contact => Some(&mut self.contact),
            _ => None,
        }
    }

    fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::About => self.about.is_visible(),
            Region::Experience => self.experience.is_visible(),
            Region::Skills => self.skills.is_visible(),
            Region::Projects => self.projects.is_visible(),
            Region::Awards => self.awards.is_visible(),
            Region::Contact => self.contact.is_visible(),
            _ => false,
        }
    }
}

#[derive(Debug)]
pub struct PortfolioPage {
    config: RuntimeConfig,
    about: SectionSlot<Profile>,
    experience: SectionSlot<ExperienceData>,
    skills: SectionSlot<SkillsData>,
    projects: SectionSlot<ProjectsData>,
    awards: SectionSlot<AwardsData>,
    contact: SectionSlot<Profile>,
    reveals: Reveals,
    hero_visible: bool,
    selected_project: Option<usize>,
    nav: NavState,
    gesture: LogoGesture,
    splash: SplashProgress,
}

impl PortfolioPage {
    pub fn new(config: RuntimeConfig) -> Self {
        let behavior = &config.behavior;
        Self {
            reveals: Reveals::default(),
            gesture: LogoGesture::new(behavior.logo_clicks, behavior.logo_window_ms),
            about: SectionSlot::new(),
            experience: SectionSlot::new(),
            skills: SectionSlot::new(),
            projects: SectionSlot::new(),
            awards: SectionSlot::new(),
            contact: SectionSlot::new(),
            hero_visible: false,
            selected_project: None,
            nav: NavState::default(),
            splash: SplashProgress::default(),
            config,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Mount the page: reset every section to loading and issue one ticket per
    /// fetch. The hero needs no data and is shown immediately.
    pub fn mount(&mut self) -> MountTickets {
        self.hero_visible = true;
        MountTickets {
            about: self.about.begin(),
            experience: self.experience.begin(),
            skills: self.skills.begin(),
            projects: self.projects.begin(),
            awards: self.awards.begin(),
            contact: self.contact.begin(),
        }
    }

    /// Drop every in-flight fetch. Late results will be reported stale.
    pub fn unmount(&mut self) {
        self.about.unmount();
        self.experience.unmount();
        self.skills.unmount();
        self.projects.unmount();
        self.awards.unmount();
        self.contact.unmount();
        self.selected_project = None;
        self.nav.menu_open = false;
    }

    /// Record a fetch result. Returns the region to redraw if it applied.
    pub fn settle(&mut self, ticket: LoadTicket, loaded: Loaded) -> Option<Region> {
        let (settled, region) = match loaded {
            Loaded::About(r) => (self.about.settle(ticket, r), Region::About),
            Loaded::Experience(r) => (self.experience.settle(ticket, r), Region::Experience),
            Loaded::Skills(r) => (self.skills.settle(ticket, r), Region::Skills),
            Loaded::Projects(r) => (self.projects.settle(ticket, r), Region::Projects),
            Loaded::Awards(r) => (self.awards.settle(ticket, r), Region::Awards),
            Loaded::Contact(r) => (self.contact.settle(ticket, r), Region::Contact),
        };
        match settled {
            Settled::Applied => {
                if region == Region::Projects {
                    self.selected_project = None;
                }
                Some(region)
            }
            Settled::Stale => None,
        }
    }

    /// The section hosted by `region` crossed the visibility threshold.
    /// Returns `true` on the first crossing only.
    pub fn reveal(&mut self, region: Region) -> bool {
        self.reveals
            .get_mut(region)
            .is_some_and(|reveal| reveal.mark_visible())
    }

    /// Feed the window's vertical scroll offset. Returns `true` when the
    /// navigation bar's style changed.
    pub fn set_scroll_y(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLLED_AFTER_PX;
        let changed = scrolled != self.nav.scrolled;
        self.nav.scrolled = scrolled;
        changed
    }

    /// One splash timer tick. Returns `true` while the timer should keep running.
    pub fn splash_tick(&mut self) -> bool {
        self.splash.tick();
        !self.splash.is_done()
    }

    pub fn selected_project(&self) -> Option<usize> {
        self.selected_project
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::ScrollTo(section) => {
                let mut effects = self.close_menu();
                effects.push(Effect::ScrollToSection(section));
                effects
            }
            Action::LogoClick => match self.gesture.click() {
                ClickOutcome::OpenAdmin => {
                    tracing::info!("logo gesture completed; opening admin viewer");
                    vec![Effect::Navigate(Route::Admin)]
                }
                ClickOutcome::Armed(ticket) => vec![Effect::ArmLogoTimer(ticket)],
            },
            Action::ToggleLanguage { mobile } => {
                // The language listener redraws everything, nav included.
                if mobile {
                    self.nav.menu_open = false;
                }
                vec![Effect::ToggleLanguage]
            }
            Action::ToggleTheme => vec![Effect::ToggleTheme, Effect::Render(Region::Nav)],
            Action::ToggleMenu => {
                self.nav.menu_open = !self.nav.menu_open;
                vec![Effect::Render(Region::Nav)]
            }
            Action::OpenProject(index) => {
                let exists = self
                    .projects
                    .state()
                    .ready()
                    .is_some_and(|data| index < data.projects.len());
                if !exists || self.selected_project == Some(index) {
                    return Vec::new();
                }
                self.selected_project = Some(index);
                vec![Effect::Render(Region::Modal)]
            }
            Action::CloseProject => {
                if self.selected_project.take().is_some() {
                    vec![Effect::Render(Region::Modal)]
                } else {
                    Vec::new()
                }
            }
            Action::Admin(_) => Vec::new(),
        }
    }

    /// The logo timer armed by `ticket` fired.
    pub fn logo_timer_elapsed(&mut self, ticket: TimerTicket) -> Vec<Effect> {
        match self.gesture.timer_elapsed(ticket) {
            Some(WindowClosed::ScrollToTop) => vec![Effect::ScrollToTop],
            None => Vec::new(),
        }
    }

    fn close_menu(&mut self) -> Vec<Effect> {
        if self.nav.menu_open {
            self.nav.menu_open = false;
            vec![Effect::Render(Region::Nav)]
        } else {
            Vec::new()
        }
    }

    fn view(&self, region: Region, settings: Settings) -> View {
        View::new(settings.language)
            .with_visible(self.reveals.is_visible(region))
            .with_show_unavailable(self.config.behavior.show_unavailable)
    }

    /// Inner markup of one region.
    pub fn render(&self, region: Region, settings: Settings) -> Markup {
        let site = &self.config.site;
        let lang = settings.language;
        let view = self.view(region, settings);
        match region {
            Region::Splash => render::loading::render_splash(self.splash, &site.logo, lang),
            Region::Nav => render::nav::render_nav(site, self.nav, settings),
            Region::Hero => render::hero::render_hero(
                site,
                View::new(lang).with_visible(self.hero_visible),
            ),
            Region::About => render::about::render_about(self.about.state(), view),
            Region::Experience => {
                render::experience::render_experience(self.experience.state(), view)
            }
            Region::Skills => render::skills::render_skills(self.skills.state(), view),
            Region::Projects => render::projects::render_projects(self.projects.state(), view),
            Region::Awards => render::awards::render_awards(self.awards.state(), view),
            Region::Contact => render::contact::render_contact(self.contact.state(), view),
            Region::Modal => {
                let project = self.selected_project.and_then(|i| {
                    self.projects
                        .state()
                        .ready()
                        .and_then(|data| data.projects.get(i))
                });
                render::projects::render_project_modal(project, lang)
            }
            Region::Admin => html! {},
        }
    }

    /// The whole page body: every region inside its host element.
    pub fn render_body(&self, settings: Settings) -> Markup {
        let host = |region: Region| self.render(region, settings);
        html! {
            div id=(Region::Splash.element_id()) { (host(Region::Splash)) }
            header id=(Region::Nav.element_id()) { (host(Region::Nav)) }
            main {
                section id=(Region::Hero.element_id()) class="section hero" { (host(Region::Hero)) }
                section id=(Region::About.element_id()) class="section" { (host(Region::About)) }
                section id=(Region::Experience.element_id()) class="section alt" { (host(Region::Experience)) }
                section id=(Region::Skills.element_id()) class="section" { (host(Region::Skills)) }
                section id=(Region::Projects.element_id()) class="section alt" { (host(Region::Projects)) }
                section id=(Region::Awards.element_id()) class="section" { (host(Region::Awards)) }
                section id=(Region::Contact.element_id()) class="section alt" { (host(Region::Contact)) }
            }
            footer.site-footer {
                p { (self.config.site.copyright) }
            }
            div id=(Region::Modal.element_id()) { (host(Region::Modal)) }
        }
    }
}

/// Which sections to watch for the reveal animation, by DOM id.
pub fn revealed_regions() -> impl Iterator<Item = Region> {
    Region::HOME
        .into_iter()
        .filter(|r| r.is_revealed() && *r != Region::Hero)
}

/// Target for a section jump: the section's top minus the fixed header.
pub fn scroll_target(section_top: f64, scroll_y: f64, nav_offset_px: u32) -> f64 {
    (section_top + scroll_y - f64::from(nav_offset_px)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::render::test_data;
    use crate::section::SectionId;
    use crate::settings::Theme;

    fn page() -> (PortfolioPage, MountTickets) {
        let mut page = PortfolioPage::new(RuntimeConfig::default());
        let tickets = page.mount();
        (page, tickets)
    }

    fn english() -> Settings {
        Settings {
            language: Language::En,
            theme: Theme::Light,
        }
    }

    fn transport(path: &str) -> ResourceError {
        ResourceError::Transport {
            path: path.into(),
            message: "offline".into(),
        }
    }

    fn with_projects(page: &mut PortfolioPage, ticket: LoadTicket) {
        let data = ProjectsData {
            projects: vec![test_data::project("p1", &[]), test_data::project("p2", &[])],
        };
        assert_eq!(
            page.settle(ticket, Loaded::Projects(Ok(data))),
            Some(Region::Projects)
        );
    }

    #[test]
    fn sections_start_as_skeletons() {
        let (page, _) = page();
        let html = page.render(Region::Skills, english()).into_string();
        assert!(html.contains("skeleton"));
    }

    #[test]
    fn sections_settle_independently() {
        let (mut page, tickets) = page();
        let region = page.settle(tickets.awards, Loaded::Awards(Ok(test_data::awards())));
        assert_eq!(region, Some(Region::Awards));

        let awards = page.render(Region::Awards, english()).into_string();
        assert!(awards.contains("AWS Solutions Architect"));
        assert!(!awards.contains("skeleton"));

        let about = page.render(Region::About, english()).into_string();
        assert!(about.contains("skeleton"));
    }

    #[test]
    fn failed_section_keeps_skeleton() {
        let (mut page, tickets) = page();
        page.settle(
            tickets.skills,
            Loaded::Skills(Err(transport("data/skills.json"))),
        );
        let html = page.render(Region::Skills, english()).into_string();
        assert!(html.contains("skeleton"));
        assert!(!html.contains("unavailable"));
    }

    #[test]
    fn failed_section_notice_when_configured() {
        let mut config = RuntimeConfig::default();
        config.behavior.show_unavailable = true;
        let mut page = PortfolioPage::new(config);
        let tickets = page.mount();
        page.settle(
            tickets.skills,
            Loaded::Skills(Err(transport("data/skills.json"))),
        );
        let html = page.render(Region::Skills, english()).into_string();
        assert!(html.contains("currently unavailable"));
    }

    #[test]
    fn contact_settles_separately_from_about() {
        let (mut page, tickets) = page();
        page.settle(tickets.contact, Loaded::Contact(Ok(test_data::profile())));
        assert!(page.render(Region::Contact, english()).into_string().contains("mailto:"));
        assert!(page.render(Region::About, english()).into_string().contains("skeleton"));
    }

    #[test]
    fn mismatched_ticket_is_dropped() {
        let (mut page, tickets) = page();
        assert_eq!(
            page.settle(tickets.about, Loaded::Contact(Ok(test_data::profile()))),
            None
        );
        assert!(page.render(Region::Contact, english()).into_string().contains("skeleton"));
        assert_eq!(
            page.settle(tickets.contact, Loaded::Contact(Ok(test_data::profile()))),
            Some(Region::Contact)
        );
    }

    #[test]
    fn results_after_unmount_are_dropped() {
        let (mut page, tickets) = page();
        page.unmount();
        assert_eq!(
            page.settle(tickets.about, Loaded::About(Ok(test_data::profile()))),
            None
        );
    }

    #[test]
    fn remount_invalidates_old_tickets() {
        let (mut page, old) = page();
        let new = page.mount();
        assert_eq!(
            page.settle(old.awards, Loaded::Awards(Ok(test_data::awards()))),
            None
        );
        assert_eq!(
            page.settle(new.awards, Loaded::Awards(Ok(test_data::awards()))),
            Some(Region::Awards)
        );
    }

    #[test]
    fn reveal_is_one_shot_per_region() {
        let (mut page, _) = page();
        assert!(page.reveal(Region::Skills));
        assert!(!page.reveal(Region::Skills));
        assert!(page.reveal(Region::Awards));
        assert!(!page.reveal(Region::Nav));
    }

    #[test]
    fn skills_bar_grows_after_reveal() {
        let (mut page, tickets) = page();
        let data = crate::resource::decode::<crate::resource::Skills>(
            r#"{"categories":[{"name":"Backend","skills":[{"name":"Go","level":80}]}]}"#,
        )
        .unwrap();
        page.settle(tickets.skills, Loaded::Skills(Ok(data)));
        assert!(page.render(Region::Skills, english()).into_string().contains("width: 0%"));
        page.reveal(Region::Skills);
        assert!(page.render(Region::Skills, english()).into_string().contains("width: 80%"));
    }

    #[test]
    fn language_round_trip_restores_markup() {
        let (mut page, tickets) = page();
        page.settle(tickets.about, Loaded::About(Ok(test_data::profile())));
        let settings = crate::settings::SettingsHandle::new(english());
        let before: Vec<String> = Region::HOME
            .iter()
            .map(|r| page.render(*r, settings.get()).into_string())
            .collect();

        settings.toggle_language();
        let korean = page.render(Region::About, settings.get()).into_string();
        assert_ne!(korean, before[3]);

        settings.toggle_language();
        let after: Vec<String> = Region::HOME
            .iter()
            .map(|r| page.render(*r, settings.get()).into_string())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn open_and_close_project() {
        let (mut page, tickets) = page();
        with_projects(&mut page, tickets.projects);

        let effects = page.handle(Action::OpenProject(1));
        assert_eq!(effects, vec![Effect::Render(Region::Modal)]);
        let modal = page.render(Region::Modal, english()).into_string();
        assert!(modal.contains("Project p2"));

        let effects = page.handle(Action::CloseProject);
        assert_eq!(effects, vec![Effect::Render(Region::Modal)]);
        assert_eq!(page.render(Region::Modal, english()).into_string(), "");
        assert!(page.handle(Action::CloseProject).is_empty());
    }

    #[test]
    fn open_project_out_of_range_is_ignored() {
        let (mut page, tickets) = page();
        assert!(page.handle(Action::OpenProject(0)).is_empty());
        with_projects(&mut page, tickets.projects);
        assert!(page.handle(Action::OpenProject(9)).is_empty());
        assert_eq!(page.selected_project(), None);
    }

    #[test]
    fn triple_logo_click_opens_admin() {
        let (mut page, _) = page();
        assert!(matches!(
            page.handle(Action::LogoClick).as_slice(),
            [Effect::ArmLogoTimer(_)]
        ));
        page.handle(Action::LogoClick);
        assert_eq!(
            page.handle(Action::LogoClick),
            vec![Effect::Navigate(Route::Admin)]
        );
    }

    #[test]
    fn single_logo_click_scrolls_to_top_after_window() {
        let (mut page, _) = page();
        let effects = page.handle(Action::LogoClick);
        let [Effect::ArmLogoTimer(ticket)] = effects.as_slice() else {
            panic!("expected a timer");
        };
        let ticket = *ticket;
        assert_eq!(ticket.delay_ms, 1000);
        assert_eq!(page.logo_timer_elapsed(ticket), vec![Effect::ScrollToTop]);
        assert!(page.logo_timer_elapsed(ticket).is_empty());
    }

    #[test]
    fn section_jump_closes_mobile_menu() {
        let (mut page, _) = page();
        page.handle(Action::ToggleMenu);
        assert!(page.nav().menu_open);
        let effects = page.handle(Action::ScrollTo(SectionId::Projects));
        assert_eq!(
            effects,
            vec![
                Effect::Render(Region::Nav),
                Effect::ScrollToSection(SectionId::Projects)
            ]
        );
        assert!(!page.nav().menu_open);
    }

    #[test]
    fn desktop_jump_leaves_nav_alone() {
        let (mut page, _) = page();
        assert_eq!(
            page.handle(Action::ScrollTo(SectionId::Home)),
            vec![Effect::ScrollToSection(SectionId::Home)]
        );
    }

    #[test]
    fn mobile_language_switch_closes_menu() {
        let (mut page, _) = page();
        page.handle(Action::ToggleMenu);
        let effects = page.handle(Action::ToggleLanguage { mobile: true });
        assert_eq!(effects, vec![Effect::ToggleLanguage]);
        assert!(!page.nav().menu_open);
    }

    #[test]
    fn scrolled_style_threshold() {
        let (mut page, _) = page();
        assert!(!page.set_scroll_y(20.0));
        assert!(page.set_scroll_y(21.0));
        assert!(!page.set_scroll_y(400.0));
        assert!(page.set_scroll_y(0.0));
    }

    #[test]
    fn splash_runs_ten_ticks() {
        let (mut page, _) = page();
        let mut ticks = 1;
        while page.splash_tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 10);
        assert_eq!(page.render(Region::Splash, english()).into_string(), "");
    }

    #[test]
    fn body_hosts_every_region() {
        let (page, _) = page();
        let html = page.render_body(english()).into_string();
        for region in Region::HOME {
            assert!(
                html.contains(&format!("id=\"{}\"", region.element_id())),
                "missing host for {region:?}"
            );
        }
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn revealed_regions_skip_hero() {
        let regions: Vec<_> = revealed_regions().collect();
        assert_eq!(regions.len(), 6);
        assert!(!regions.contains(&Region::Hero));
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(500.0, 1000.0, 80), 1420.0);
        assert_eq!(scroll_target(-10.0, 0.0, 80), 0.0);
    }
}
