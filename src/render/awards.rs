//! Awards section.

use super::{View, by_state, heading, skeleton_cards};
use crate::i18n::{Bilingual, text};
use crate::loader::SectionState;
use crate::types::{AwardKind, AwardsData};
use crate::visibility::{Motion, stagger_style};
use maud::{Markup, html};

pub fn render_awards(state: &SectionState<AwardsData>, view: View) -> Markup {
    by_state(
        state,
        view,
        || skeleton_cards(3, "skeleton-card"),
        |data| populated(data, view),
    )
}

pub fn kind_label(kind: AwardKind) -> Bilingual {
    match kind {
        AwardKind::Certification => text::KIND_CERTIFICATION,
        AwardKind::Award => text::KIND_AWARD,
        AwardKind::Course => text::KIND_COURSE,
    }
}

fn populated(data: &AwardsData, view: View) -> Markup {
    let lang = view.language;
    html! {
        div.container {
            (heading(text::AWARDS_TITLE.pick(lang), view))
            div.awards-grid {
                @for (i, award) in data.awards.iter().enumerate() {
                    article class={ "award-card card " (view.reveal(Motion::Rise)) }
                        style=(stagger_style(i, 2, 100)) {
                        span class={ "award-kind kind-" (award.kind.slug()) } {
                            (kind_label(award.kind).pick(lang))
                        }
                        h3 { (award.title) }
                        p.award-meta {
                            span.issuer { (award.issuer) }
                            " · "
                            time { (award.date) }
                        }
                        @if !award.description.is_empty() {
                            p.award-description { (award.description) }
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
    fn award_card_contents() {
        let state = SectionState::Ready(test_data::awards());
        let html = render_awards(&state, View::new(Language::En)).into_string();
        assert!(html.contains("AWS Solutions Architect"));
        assert!(html.contains("Amazon"));
        assert!(html.contains("2023.05"));
        assert!(html.contains("Associate level"));
    }

    #[test]
    fn badge_is_capitalized_and_styled_per_kind() {
        let state = SectionState::Ready(test_data::awards());
        let html = render_awards(&state, View::new(Language::En)).into_string();
        assert!(html.contains("class=\"award-kind kind-certification\""));
        assert!(html.contains(">Certification<"));
    }

    #[test]
    fn badge_translates() {
        let state = SectionState::Ready(test_data::awards());
        let html = render_awards(&state, View::new(Language::Ko)).into_string();
        assert!(html.contains(">자격증<"));
        assert!(html.contains("수상 및 자격증"));
    }

    #[test]
    fn every_kind_has_a_label() {
        for kind in [AwardKind::Certification, AwardKind::Award, AwardKind::Course] {
            assert!(!kind_label(kind).pick(Language::En).is_empty());
        }
    }
}
