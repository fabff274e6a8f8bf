//! HTML for every region of the site.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every function here is pure: it takes already-loaded state plus a [`View`]
//! and returns [`Markup`]. The CLI calls them once to write the static shell;
//! the browser runtime calls them again whenever state changes and swaps the
//! result into the matching element.
//!
//! | Module | Region |
//! |--------|--------|
//! | [`nav`] | Fixed navigation bar and mobile menu |
//! | [`hero`] | Banner with owner name and the two call-to-action buttons |
//! | [`about`], [`experience`], [`skills`], [`projects`], [`awards`], [`contact`] | Content sections |
//! | [`loading`] | Splash screen |
//! | [`admin`] | Admin data viewer |
//! | [`shell`] | Full documents: `index.html`, `admin/index.html`, `404.html` |
//!
//! Interactive elements carry `data-action` (and optionally `data-target` /
//! `data-index`) attributes instead of inline handlers. See [`crate::action`].

pub mod about;
pub mod admin;
pub mod awards;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod loading;
pub mod nav;
pub mod projects;
pub mod shell;
pub mod skills;

use crate::i18n::{Language, text};
use crate::loader::SectionState;
use crate::visibility::{Motion, reveal_class};
use maud::{Markup, html};

/// Rendering context shared by the content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub language: Language,
    /// The section has entered the viewport at least once.
    pub visible: bool,
    /// Render a notice for failed sections instead of the skeleton.
    pub show_unavailable: bool,
}

impl View {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            visible: false,
            show_unavailable: false,
        }
    }

    pub fn with_visible(self, visible: bool) -> Self {
        Self { visible, ..self }
    }

    pub fn with_show_unavailable(self, show_unavailable: bool) -> Self {
        Self {
            show_unavailable,
            ..self
        }
    }

    /// Class list for an element entering with `motion`.
    pub fn reveal(&self, motion: Motion) -> String {
        reveal_class(motion, self.visible)
    }
}

/// Pick the markup for a section's current load state.
///
/// `Failed` looks exactly like `Loading` unless the view opts into the
/// unavailable notice.
pub fn by_state<T>(
    state: &SectionState<T>,
    view: View,
    skeleton: impl FnOnce() -> Markup,
    ready: impl FnOnce(&T) -> Markup,
) -> Markup {
    match state {
        SectionState::Ready(data) => ready(data),
        SectionState::Failed(_) if view.show_unavailable => unavailable(view.language),
        SectionState::Loading | SectionState::Failed(_) => skeleton(),
    }
}

fn unavailable(language: Language) -> Markup {
    html! {
        div.container {
            p.unavailable role="status" { (text::UNAVAILABLE.pick(language)) }
        }
    }
}

/// Section title with the animated underline.
pub fn heading(title: &str, view: View) -> Markup {
    html! {
        div.section-heading {
            h2 class=(view.reveal(Motion::Rise)) { (title) }
            span class={ "heading-rule " (view.reveal(Motion::Grow)) } {}
        }
    }
}

/// Grey placeholder block. `class` sets its shape.
pub fn skeleton_block(class: &str) -> Markup {
    html! {
        div class={ "skeleton " (class) } aria-hidden="true" {}
    }
}

/// Placeholder heading followed by `cards` placeholder cards.
pub fn skeleton_cards(cards: usize, card_class: &str) -> Markup {
    html! {
        div.container.is-loading {
            div.section-heading {
                (skeleton_block("skeleton-title"))
            }
            div class={ "skeleton-grid " (card_class) } {
                @for _ in 0..cards {
                    (skeleton_block(card_class))
                }
            }
        }
    }
}

/// Make a root-absolute asset path relative to the document base, so the site
/// works when served from a sub-path. Full URLs pass through.
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        path.to_string()
    } else if let Some(rest) = path.strip_prefix('/') {
        format!("./{rest}")
    } else {
        path.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_makes_root_paths_relative() {
        assert_eq!(asset_url("/placeholder.svg"), "./placeholder.svg");
        assert_eq!(asset_url("images/me.png"), "images/me.png");
        assert_eq!(asset_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    }

    #[test]
    fn failed_looks_like_loading_by_default() {
        let view = View::new(Language::En);
        let skeleton = || html! { "skeleton" };
        let loading: SectionState<u32> = SectionState::Loading;
        let failed: SectionState<u32> = SectionState::Failed("boom".into());

        let a = by_state(&loading, view, skeleton, |_| html! { "ready" });
        let b = by_state(&failed, view, skeleton, |_| html! { "ready" });
        assert_eq!(a.into_string(), b.into_string());
    }

    #[test]
    fn failed_shows_notice_when_enabled() {
        let view = View::new(Language::En).with_show_unavailable(true);
        let failed: SectionState<u32> = SectionState::Failed("boom".into());
        let html = by_state(&failed, view, || html! { "skeleton" }, |_| html! { "ready" })
            .into_string();
        assert!(html.contains("currently unavailable"));
        assert!(!html.contains("skeleton"));
    }

    #[test]
    fn ready_never_renders_skeleton() {
        let view = View::new(Language::En);
        let ready = SectionState::Ready(5u32);
        let html = by_state(&ready, view, || html! { "skeleton" }, |n| html! { "n=" (n) })
            .into_string();
        assert_eq!(html, "n=5");
    }

    #[test]
    fn heading_reveals_with_view() {
        let hidden = heading("Skills", View::new(Language::En)).into_string();
        assert!(!hidden.contains("is-visible"));
        let shown = heading("Skills", View::new(Language::En).with_visible(true)).into_string();
        assert!(shown.contains("reveal reveal-rise is-visible"));
        assert!(shown.contains("heading-rule reveal reveal-grow is-visible"));
    }
}
