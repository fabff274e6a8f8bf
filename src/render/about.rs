//! About section: biography, metrics and contact summary.

use super::{View, by_state, heading, skeleton_block};
use crate::i18n::text;
use crate::loader::SectionState;
use crate::types::Profile;
use crate::visibility::{Motion, stagger_style};
use maud::{Markup, html};

pub fn render_about(state: &SectionState<Profile>, view: View) -> Markup {
    by_state(state, view, skeleton, |profile| populated(profile, view))
}

fn skeleton() -> Markup {
    html! {
        div.container.is-loading {
            div.section-heading { (skeleton_block("skeleton-title")) }
            div.about-grid {
                div {
                    (skeleton_block("skeleton-line wide"))
                    (skeleton_block("skeleton-line"))
                    (skeleton_block("skeleton-paragraph"))
                }
                (skeleton_block("skeleton-card"))
            }
        }
    }
}

fn populated(profile: &Profile, view: View) -> Markup {
    let lang = view.language;
    html! {
        div.container {
            (heading(text::ABOUT_TITLE.pick(lang), view))
            div.about-grid {
                div class={ "about-text " (view.reveal(Motion::Slide)) } {
                    h3.about-name { (profile.name) ", " (profile.age) }
                    p.about-headline { (profile.headline) }
                    p.about-bio { (profile.bio) }
                    @if !profile.metrics.is_empty() {
                        div.metrics {
                            @for (i, metric) in profile.metrics.iter().enumerate() {
                                div class={ "metric " (view.reveal(Motion::Zoom)) }
                                    style=(stagger_style(i, 2, 100)) {
                                    span.metric-value { (metric.value) }
                                    span.metric-label { (metric.label) }
                                }
                            }
                        }
                    }
                }
                dl class={ "about-facts card " (view.reveal(Motion::Rise)) } {
                    dt { (text::CONTACT_EMAIL.pick(lang)) }
                    dd { (profile.contact.email) }
                    dt { (text::CONTACT_PHONE.pick(lang)) }
                    dd { (profile.contact.phone) }
                    dt { (text::CONTACT_LOCATION.pick(lang)) }
                    dd { (profile.contact.location) }
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
    fn loading_renders_skeleton_only() {
        let html = render_about(&SectionState::Loading, View::new(Language::En)).into_string();
        assert!(html.contains("skeleton"));
        assert!(!html.contains("About Me"));
    }

    #[test]
    fn ready_renders_profile() {
        let state = SectionState::Ready(test_data::profile());
        let html = render_about(&state, View::new(Language::En)).into_string();
        assert!(html.contains("YoonSuh Lee, 27"));
        assert!(html.contains("I build reliable services."));
        assert!(html.contains("3+"));
        assert!(html.contains("Seoul, Korea"));
        assert!(!html.contains("skeleton"));
    }

    #[test]
    fn metrics_are_staggered() {
        let state = SectionState::Ready(test_data::profile());
        let html = render_about(&state, View::new(Language::En)).into_string();
        assert!(html.contains("animation-delay: 200ms"));
    }

    #[test]
    fn title_follows_language() {
        let state = SectionState::Ready(test_data::profile());
        let html = render_about(&state, View::new(Language::Ko)).into_string();
        assert!(html.contains("소개"));
        assert!(html.contains("이메일"));
    }
}
