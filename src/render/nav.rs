//! Fixed navigation bar.

use crate::config::SiteInfo;
use crate::i18n::{Language, text};
use crate::section::SectionId;
use crate::settings::Settings;
use maud::{Markup, html};

/// Scroll position past which the bar switches to its solid style.
pub const SCROLLED_AFTER_PX: f64 = 20.0;

/// Local UI state of the navigation bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

pub fn render_nav(site: &SiteInfo, nav: NavState, settings: Settings) -> Markup {
    let lang = settings.language;
    let bar_class = if nav.scrolled { "navbar scrolled" } else { "navbar" };
    let theme_icon = if settings.theme.is_dark() { "☀" } else { "☾" };
    let menu_icon = if nav.menu_open { "✕" } else { "☰" };

    html! {
        nav class=(bar_class) {
            div.nav-inner {
                button.logo type="button" data-action="logo" { (site.logo) }
                ul.nav-links {
                    @for id in SectionId::ALL {
                        li {
                            (section_button(id, lang))
                        }
                    }
                }
                div.nav-controls {
                    button.lang-toggle type="button" data-action="lang" {
                        (text::SWITCH_LANGUAGE.pick(lang))
                    }
                    button.theme-toggle type="button" data-action="theme"
                        aria-label=(text::TOGGLE_THEME.pick(lang)) {
                        (theme_icon)
                    }
                    button.menu-toggle type="button" data-action="menu"
                        aria-label=(text::TOGGLE_MENU.pick(lang))
                        aria-expanded=(nav.menu_open.to_string()) {
                        (menu_icon)
                    }
                }
            }
            @if nav.menu_open {
                div.mobile-menu {
                    ul {
                        @for id in SectionId::ALL {
                            li { (section_button(id, lang)) }
                        }
                    }
                    button.lang-toggle-mobile type="button" data-action="lang-mobile" {
                        (text::SWITCH_LANGUAGE_LONG.pick(lang))
                    }
                }
            }
        }
    }
}

fn section_button(id: SectionId, lang: Language) -> Markup {
    html! {
        button.nav-link type="button" data-action="scroll" data-target=(id.as_str()) {
            (id.nav_label().pick(lang))
        }
    }
}
