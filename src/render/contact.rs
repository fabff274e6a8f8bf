//! Contact section. Renders the `contact` and `social` halves of the profile.

use super::{View, by_state, heading, skeleton_cards};
use crate::i18n::text;
use crate::loader::SectionState;
use crate::types::Profile;
use crate::visibility::{Motion, stagger_style};
use maud::{Markup, html};

pub fn render_contact(state: &SectionState<Profile>, view: View) -> Markup {
    by_state(
        state,
        view,
        || skeleton_cards(3, "skeleton-contact"),
        |profile| populated(profile, view),
    )
}

/// `tel:` target: the number with spaces and dashes removed.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

fn populated(profile: &Profile, view: View) -> Markup {
    let lang = view.language;
    let contact = &profile.contact;
    let social = [
        ("GitHub", profile.social.github.as_str()),
        ("LinkedIn", profile.social.linkedin.as_str()),
        ("Twitter", profile.social.twitter.as_str()),
    ];

    html! {
        div.container {
            (heading(text::CONTACT_TITLE.pick(lang), view))
            p class={ "contact-intro " (view.reveal(Motion::Fade)) } {
                (text::CONTACT_INTRO.pick(lang))
            }
            div.contact-grid {
                a class={ "contact-card card " (view.reveal(Motion::Rise)) }
                    style=(stagger_style(0, 2, 100))
                    href={ "mailto:" (contact.email) } {
                    span.contact-label { (text::CONTACT_EMAIL.pick(lang)) }
                    span.contact-value { (contact.email) }
                }
                a class={ "contact-card card " (view.reveal(Motion::Rise)) }
                    style=(stagger_style(1, 2, 100))
                    href=(tel_href(&contact.phone)) {
                    span.contact-label { (text::CONTACT_PHONE.pick(lang)) }
                    span.contact-value { (contact.phone) }
                }
                div class={ "contact-card card " (view.reveal(Motion::Rise)) }
                    style=(stagger_style(2, 2, 100)) {
                    span.contact-label { (text::CONTACT_LOCATION.pick(lang)) }
                    span.contact-value { (contact.location) }
                }
            }
            @if social.iter().any(|(_, url)| !url.trim().is_empty()) {
                div class={ "social " (view.reveal(Motion::Fade)) } {
                    h3 { (text::CONTACT_SOCIAL.pick(lang)) }
                    div.social-links {
                        @for (name, url) in social {
                            @if !url.trim().is_empty() {
                                a.social-link href=(url) target="_blank" rel="noopener noreferrer" {
                                    (name)
                                }
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
    fn contact_links() {
        let state = SectionState::Ready(test_data::profile());
        let html = render_contact(&state, View::new(Language::En)).into_string();
        assert!(html.contains("href=\"mailto:yoonsuh@example.com\""));
        assert!(html.contains("href=\"tel:+821000000000\""));
        assert!(html.contains("Seoul, Korea"));
    }

    #[test]
    fn blank_social_links_are_skipped() {
        let state = SectionState::Ready(test_data::profile());
        let html = render_contact(&state, View::new(Language::En)).into_string();
        assert!(html.contains("https://github.com/yoonsuh"));
        assert!(!html.contains("LinkedIn"));
        assert!(!html.contains("Twitter"));
    }

    #[test]
    fn intro_translates() {
        let state = SectionState::Ready(test_data::profile());
        let html = render_contact(&state, View::new(Language::Ko)).into_string();
        assert!(html.contains("편하게 연락주세요"));
    }

    #[test]
    fn tel_strips_formatting() {
        assert_eq!(tel_href("010 1234-5678"), "tel:01012345678");
    }
}
