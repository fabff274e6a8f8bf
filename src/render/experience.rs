//! Experience section: work and education timelines side by side.

use super::{View, by_state, heading, skeleton_block};
use crate::i18n::{degree_line, text};
use crate::loader::SectionState;
use crate::types::ExperienceData;
use crate::visibility::{Motion, stagger_style};
use maud::{Markup, html};

const STAGGER_STEP_MS: u32 = 100;

pub fn render_experience(state: &SectionState<ExperienceData>, view: View) -> Markup {
    by_state(state, view, skeleton, |data| populated(data, view))
}

fn skeleton() -> Markup {
    html! {
        div.container.is-loading {
            div.section-heading { (skeleton_block("skeleton-title")) }
            div.timeline-columns {
                @for _ in 0..2 {
                    div.timeline {
                        (skeleton_block("skeleton-line"))
                        @for _ in 0..3 {
                            (skeleton_block("skeleton-card"))
                        }
                    }
                }
            }
        }
    }
}

fn populated(data: &ExperienceData, view: View) -> Markup {
    let lang = view.language;
    // Education entries continue the work column's stagger.
    let education_offset = data.work.len() + 2;

    html! {
        div.container {
            (heading(text::EXPERIENCE_TITLE.pick(lang), view))
            div.timeline-columns {
                div.timeline {
                    h3.timeline-title { (text::WORK_TITLE.pick(lang)) }
                    @for (i, job) in data.work.iter().enumerate() {
                        article class={ "timeline-item card " (view.reveal(Motion::Slide)) }
                            style=(stagger_style(i, 2, STAGGER_STEP_MS)) {
                            h4 { (job.company) }
                            p.position { (job.position) }
                            p.period { (job.period) }
                            @if !job.responsibilities.is_empty() {
                                ul.responsibilities {
                                    @for item in &job.responsibilities {
                                        li { (item) }
                                    }
                                }
                            }
                        }
                    }
                }
                div.timeline {
                    h3.timeline-title { (text::EDUCATION_TITLE.pick(lang)) }
                    @for (i, edu) in data.education.iter().enumerate() {
                        article class={ "timeline-item card " (view.reveal(Motion::Slide)) }
                            style=(stagger_style(i, education_offset, STAGGER_STEP_MS)) {
                            h4 { (degree_line(lang, &edu.degree, &edu.major)) }
                            p.institution { (edu.institution) }
                            p.period { (edu.period) }
                            @if !edu.details.is_empty() {
                                p.details { (edu.details) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::render::test_data;

    #[test]
    fn renders_both_columns() {
        let state = SectionState::Ready(test_data::experience());
        let html = render_experience(&state, View::new(Language::En)).into_string();
        assert!(html.contains("Work Experience"));
        assert!(html.contains("Acme"));
        assert!(html.contains("Built the billing API"));
        assert!(html.contains("Education"));
        assert!(html.contains("BS in Computer Science"));
        assert!(html.contains("Hanyang University"));
    }

    #[test]
    fn education_stagger_continues_after_work() {
        let state = SectionState::Ready(test_data::experience());
        let html = render_experience(&state, View::new(Language::En)).into_string();
        // one work entry: work at (0+2)*100, education at (1+0+2)*100
        assert!(html.contains("animation-delay: 200ms"));
        assert!(html.contains("animation-delay: 300ms"));
    }

    #[test]
    fn korean_degree_order() {
        let state = SectionState::Ready(test_data::experience());
        let html = render_experience(&state, View::new(Language::Ko)).into_string();
        assert!(html.contains("Computer Science BS"));
        assert!(html.contains("학력"));
    }

    #[test]
    fn empty_lists_render_headings_only() {
        let state = SectionState::Ready(ExperienceData::default());
        let html = render_experience(&state, View::new(Language::En)).into_string();
        assert!(html.contains("Work Experience"));
        assert!(!html.contains("timeline-item"));
    }
}
