//! Hero banner. Built from config alone, so it never waits on a fetch.

use super::{View, asset_url};
use crate::config::SiteInfo;
use crate::i18n::text;
use crate::visibility::Motion;
use maud::{Markup, html};

pub fn render_hero(site: &SiteInfo, view: View) -> Markup {
    let lang = view.language;
    html! {
        div.container.hero-inner {
            div class={ "hero-text " (view.reveal(Motion::Rise)) } {
                h1.hero-name { (site.owner) }
                p.hero-tagline { (site.tagline) }
                div.hero-actions {
                    button.btn.btn-primary type="button" data-action="scroll" data-target="projects" {
                        (text::HERO_VIEW_WORK.pick(lang))
                    }
                    button.btn.btn-outline type="button" data-action="scroll" data-target="contact" {
                        (text::HERO_GET_IN_TOUCH.pick(lang))
                    }
                }
            }
            div class={ "hero-portrait " (view.reveal(Motion::Zoom)) } {
                img src=(asset_url(&site.profile_image)) alt=(text::HERO_PROFILE_ALT.pick(lang));
            }
        }
    }
}
