//! Admin data viewer markup. English only.

use crate::admin::{AdminList, AdminTab};
use crate::bundle::PortfolioBundle;
use crate::loader::SectionState;
use crate::render::skills::bar_style;
use maud::{Markup, html};

pub fn render_admin(
    state: &SectionState<PortfolioBundle>,
    tab: AdminTab,
    notice: Option<&str>,
) -> Markup {
    html! {
        div.admin-page {
            header.admin-header {
                h1 { "Portfolio Data" }
                div.admin-actions {
                    button.btn.btn-primary type="button" data-action="admin-download" {
                        "Download all data"
                    }
                    button.btn type="button" data-action="admin-save" { "Save" }
                    button.btn.btn-outline type="button" data-action="admin-back" {
                        "Back to Portfolio"
                    }
                }
            }
            @if let Some(notice) = notice {
                div.admin-notice role="status" {
                    p { (notice) }
                    button.btn type="button" data-action="admin-dismiss" { "Dismiss" }
                }
            }
            @match state {
                SectionState::Ready(bundle) => {
                    nav.admin-tabs role="tablist" {
                        @for t in AdminTab::ALL {
                            button type="button" role="tab"
                                class=(if t == tab { "admin-tab active" } else { "admin-tab" })
                                aria-selected=((t == tab).to_string())
                                data-action="admin-tab" data-target=(t.as_str()) {
                                (t.label())
                            }
                        }
                    }
                    section.admin-panel role="tabpanel" {
                        (panel(bundle, tab))
                    }
                }
                SectionState::Failed(message) => {
                    div.admin-error role="alert" {
                        p { "Failed to load data" }
                        p.admin-error-detail { (message) }
                    }
                }
                SectionState::Loading => {
                    p.admin-loading { "Loading data..." }
                }
            }
        }
    }
}

fn panel(bundle: &PortfolioBundle, tab: AdminTab) -> Markup {
    match tab {
        AdminTab::About => about_panel(bundle),
        AdminTab::Experience => experience_panel(bundle),
        AdminTab::Skills => skills_panel(bundle),
        AdminTab::Projects => projects_panel(bundle),
        AdminTab::Awards => awards_panel(bundle),
    }
}

fn text_field(label: &str, field: &str, value: &str) -> Markup {
    html! {
        label.admin-field {
            span { (label) }
            input type="text" data-field=(field) value=(value);
        }
    }
}

fn delete_button(list: AdminList, index: usize) -> Markup {
    html! {
        button.btn.btn-danger type="button" data-action="admin-delete"
            data-target=(list.as_str()) data-index=(index) {
            "Delete"
        }
    }
}

fn about_panel(bundle: &PortfolioBundle) -> Markup {
    let about = &bundle.about;
    html! {
        div.admin-form {
            (text_field("Name", "about.name", &about.name))
            label.admin-field {
                span { "Age" }
                input type="number" min="0" data-field="about.age" value=(about.age);
            }
            (text_field("Headline", "about.headline", &about.headline))
            label.admin-field {
                span { "Bio" }
                textarea data-field="about.bio" rows="6" { (about.bio) }
            }
        }
    }
}

fn experience_panel(bundle: &PortfolioBundle) -> Markup {
    html! {
        @for (i, job) in bundle.experience.work.iter().enumerate() {
            fieldset.admin-row {
                legend { (job.company) }
                (text_field("Company", &format!("work.{i}.company"), &job.company))
                (text_field("Position", &format!("work.{i}.position"), &job.position))
                (text_field("Period", &format!("work.{i}.period"), &job.period))
                (delete_button(AdminList::Work, i))
            }
        }
    }
}

fn skills_panel(bundle: &PortfolioBundle) -> Markup {
    html! {
        @for category in &bundle.skills.categories {
            div.admin-row {
                h3 { (category.name) }
                table.admin-skills {
                    @for skill in &category.skills {
                        tr {
                            td { (skill.name) }
                            td { (skill.level) "%" }
                            td.admin-bar {
                                div.skill-bar {
                                    div.skill-fill style=(bar_style(skill.level, true)) {}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn projects_panel(bundle: &PortfolioBundle) -> Markup {
    html! {
        @for (i, project) in bundle.projects.projects.iter().enumerate() {
            fieldset.admin-row {
                legend { (project.title) }
                (text_field("Title", &format!("project.{i}.title"), &project.title))
                label.admin-field {
                    span { "Short description" }
                    textarea data-field=(format!("project.{i}.shortDescription")) rows="3" {
                        (project.short_description)
                    }
                }
                (delete_button(AdminList::Project, i))
            }
        }
    }
}

fn awards_panel(bundle: &PortfolioBundle) -> Markup {
    html! {
        @for (i, award) in bundle.awards.awards.iter().enumerate() {
            fieldset.admin-row {
                legend { (award.title) }
                (text_field("Title", &format!("award.{i}.title"), &award.title))
                (text_field("Issuer", &format!("award.{i}.issuer"), &award.issuer))
                (text_field("Date", &format!("award.{i}.date"), &award.date))
                (delete_button(AdminList::Award, i))
            }
        }
    }
}
