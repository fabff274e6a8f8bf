//! Skills section: one card per category, one progress bar per skill.
//!
//! Bars start empty and grow to their level once the section is visible, so
//! the width is part of the markup rather than the stylesheet.

use super::{View, by_state, heading, skeleton_cards};
use crate::i18n::text;
use crate::loader::SectionState;
use crate::types::{Skill, SkillsData};
use crate::visibility::{Motion, stagger_style};
use maud::{Markup, html};

const CARD_STAGGER_MS: u32 = 150;

pub fn render_skills(state: &SectionState<SkillsData>, view: View) -> Markup {
    by_state(
        state,
        view,
        || skeleton_cards(3, "skeleton-card"),
        |data| populated(data, view),
    )
}

/// Inline style of a skill bar's fill.
pub fn bar_style(level: u8, visible: bool) -> String {
    let width = if visible { level.min(100) } else { 0 };
    format!("width: {width}%")
}

fn populated(data: &SkillsData, view: View) -> Markup {
    html! {
        div.container {
            (heading(text::SKILLS_TITLE.pick(view.language), view))
            div.skills-grid {
                @for (i, category) in data.categories.iter().enumerate() {
                    div class={ "skill-card card " (view.reveal(Motion::Rise)) }
                        style=(stagger_style(i, 2, CARD_STAGGER_MS)) {
                        h3 { (category.name) }
                        @for skill in &category.skills {
                            (skill_row(skill, view.visible))
                        }
                    }
                }
            }
        }
    }
}

fn skill_row(skill: &Skill, visible: bool) -> Markup {
    html! {
        div.skill {
            div.skill-label {
                span { (skill.name) }
                span.skill-level { (skill.level) "%" }
            }
            div.skill-bar {
                div.skill-fill style=(bar_style(skill.level, visible)) {}
            }
        }
    }
}
