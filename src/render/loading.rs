//! Splash screen shown over the page while it boots.

use crate::i18n::{Language, text};
use maud::{Markup, html};

/// Splash progress, advanced by a fixed-interval timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplashProgress {
    percent: u8,
}

impl SplashProgress {
    /// Timer period.
    pub const TICK_MS: u32 = 100;
    /// Increment per tick.
    pub const STEP: u8 = 10;

    pub fn percent(self) -> u8 {
        self.percent
    }

    pub fn is_done(self) -> bool {
        self.percent >= 100
    }

    /// Advance one step. Returns `true` when this tick completed the splash.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.percent = self.percent.saturating_add(Self::STEP).min(100);
        self.is_done()
    }
}

pub fn render_splash(progress: SplashProgress, logo: &str, lang: Language) -> Markup {
    if progress.is_done() {
        return html! {};
    }
    html! {
        div.splash role="progressbar" aria-valuemin="0" aria-valuemax="100"
            aria-valuenow=(progress.percent()) {
            div.splash-logo { (logo) }
            div.splash-track {
                div.splash-fill style={ "width: " (progress.percent()) "%" } {}
            }
            p.splash-label { (text::LOADING.pick(lang)) " " (progress.percent()) "%" }
        }
    }
}
