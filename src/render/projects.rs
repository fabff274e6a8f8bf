//! Projects section: card grid plus the detail modal.

use super::{View, asset_url, by_state, heading, skeleton_cards};
use crate::i18n::{Bilingual, Language, text};
use crate::loader::SectionState;
use crate::types::{LinkKind, Project, ProjectsData};
use crate::visibility::{Motion, stagger_style};
use maud::{Markup, html};

/// Technology badges shown on a card before collapsing into `+N`.
pub const CARD_BADGES: usize = 4;

const CARD_STAGGER_MS: u32 = 100;

pub fn render_projects(state: &SectionState<ProjectsData>, view: View) -> Markup {
    by_state(
        state,
        view,
        || skeleton_cards(4, "skeleton-project"),
        |data| populated(data, view),
    )
}

fn populated(data: &ProjectsData, view: View) -> Markup {
    let lang = view.language;
    html! {
        div.container {
            (heading(text::PROJECTS_TITLE.pick(lang), view))
            div.projects-grid {
                @for (i, project) in data.projects.iter().enumerate() {
                    button type="button"
                        class={ "project-card card " (view.reveal(Motion::Rise)) }
                        style=(stagger_style(i, 2, CARD_STAGGER_MS))
                        data-action="project" data-index=(i) {
                        img src=(asset_url(&project.image)) alt=(project.title) loading="lazy";
                        div.project-body {
                            h3 { (project.title) }
                            p { (project.short_description) }
                            (badges(&project.technologies))
                            span.project-hint { (text::PROJECT_DETAILS_HINT.pick(lang)) }
                        }
                    }
                }
            }
        }
    }
}

fn badges(technologies: &[String]) -> Markup {
    let overflow = technologies.len().saturating_sub(CARD_BADGES);
    html! {
        div.badges {
            @for tech in technologies.iter().take(CARD_BADGES) {
                span.badge { (tech) }
            }
            @if overflow > 0 {
                span.badge.badge-more { "+" (overflow) }
            }
        }
    }
}

/// Detail view for the selected project. Renders nothing when closed.
pub fn render_project_modal(project: Option<&Project>, lang: Language) -> Markup {
    let Some(project) = project else {
        return html! {};
    };
    let links = project.links.present();

    html! {
        div.modal role="dialog" aria-modal="true" aria-labelledby="project-modal-title" {
            div.modal-backdrop data-action="close-project" {}
            div.modal-panel {
                button.modal-close type="button" data-action="close-project"
                    aria-label=(text::CLOSE.pick(lang)) { "✕" }
                img.modal-image src=(asset_url(&project.image)) alt=(project.title);
                h2 id="project-modal-title" { (project.title) }
                div.badges {
                    @for tech in &project.technologies {
                        span.badge { (tech) }
                    }
                }
                h3 { (text::PROJECT_DESCRIPTION.pick(lang)) }
                p { (project.description) }
                @if !project.contributions.is_empty() {
                    h3 { (text::PROJECT_CONTRIBUTIONS.pick(lang)) }
                    ul {
                        @for item in &project.contributions {
                            li { (item) }
                        }
                    }
                }
                @if !project.results.is_empty() {
                    h3 { (text::PROJECT_RESULTS.pick(lang)) }
                    ul {
                        @for item in &project.results {
                            li { (item) }
                        }
                    }
                }
                @if !links.is_empty() {
                    div.modal-links {
                        @for (kind, url) in &links {
                            a.btn.project-link href=(url) target="_blank" rel="noopener noreferrer" {
                                (link_label(*kind).pick(lang))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn link_label(kind: LinkKind) -> Bilingual {
    match kind {
        LinkKind::Demo => text::PROJECT_DEMO,
        LinkKind::Repository => text::PROJECT_REPOSITORY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_data::project;
    use crate::types::ProjectLinks;

    #[test]
    fn cards_open_modal_by_index() {
        let data = ProjectsData {
            projects: vec![project("p1", &["Go"]), project("p2", &["Rust"])],
        };
        let html = render_projects(&SectionState::Ready(data), View::new(Language::En)).into_string();
        assert!(html.contains("data-action=\"project\" data-index=\"0\""));
        assert!(html.contains("data-index=\"1\""));
        assert!(html.contains("Project p2"));
    }

    #[test]
    fn card_shows_four_badges_and_overflow() {
        let data = ProjectsData {
            projects: vec![project("p1", &["A", "B", "C", "D", "E", "F"])],
        };
        let html = render_projects(&SectionState::Ready(data), View::new(Language::En)).into_string();
        assert!(html.contains(">D<"));
        assert!(!html.contains(">E<"));
        assert!(html.contains("+2"));
    }

    #[test]
    fn no_overflow_badge_at_four() {
        let data = ProjectsData {
            projects: vec![project("p1", &["A", "B", "C", "D"])],
        };
        let html = render_projects(&SectionState::Ready(data), View::new(Language::En)).into_string();
        assert!(!html.contains("badge-more"));
    }

    #[test]
    fn card_image_is_relative() {
        let data = ProjectsData {
            projects: vec![project("p1", &[])],
        };
        let html = render_projects(&SectionState::Ready(data), View::new(Language::En)).into_string();
        assert!(html.contains("src=\"./placeholder.svg\""));
    }

    #[test]
    fn closed_modal_is_empty() {
        assert_eq!(render_project_modal(None, Language::En).into_string(), "");
    }

    #[test]
    fn modal_without_links_has_no_link_buttons() {
        let p = project("p1", &["Go", "Redis"]);
        assert_eq!(p.links, ProjectLinks::default());
        let html = render_project_modal(Some(&p), Language::En).into_string();
        assert!(html.contains("Long description"));
        assert!(html.contains("Designed the schema"));
        assert!(html.contains("Cut latency by 40%"));
        assert!(!html.contains("<a "));
        assert!(!html.contains("modal-links"));
    }

    #[test]
    fn modal_shows_only_present_links() {
        let mut p = project("p1", &[]);
        p.links.github = Some("https://github.com/x/y".into());
        let html = render_project_modal(Some(&p), Language::En).into_string();
        assert!(html.contains("href=\"https://github.com/x/y\""));
        assert!(!html.contains("Live Demo"));
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn modal_lists_every_technology() {
        let p = project("p1", &["A", "B", "C", "D", "E"]);
        let html = render_project_modal(Some(&p), Language::En).into_string();
        assert!(html.contains(">E<"));
        assert!(!html.contains("+1"));
    }

    #[test]
    fn modal_closes_from_backdrop() {
        let p = project("p1", &[]);
        let html = render_project_modal(Some(&p), Language::Ko).into_string();
        assert!(html.contains("modal-backdrop\" data-action=\"close-project\""));
        assert!(html.contains("설명"));
    }
}
