//! Content records loaded from the `data/*.json` resources.
//!
//! Field names follow the JSON files exactly (camelCase), so a document
//! written by hand, by `folio unpack`, or by the admin download all decode the
//! same way. Unknown keys are rejected, so a typo in a hand-edited file fails
//! the resource instead of silently dropping data. Every record is an
//! immutable value: the site only ever replaces whole records, never patches
//! them in place.

use serde::{Deserialize, Serialize};

/// The owner's profile (`data/about.json`).
///
/// Used twice on the page: the About section renders the biography and the
/// Contact section renders `contact` and `social`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub headline: String,
    pub bio: String,
    /// Highlight figures shown as a grid (e.g. "5+" / "Years").
    #[serde(default)]
    pub metrics: Vec<Metric>,
    pub contact: ContactInfo,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// Social profile URLs. Empty strings are allowed and simply not linked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

/// `data/experience.json`: the two timeline columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperienceData {
    pub work: Vec<WorkExperience>,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    /// Free-text range, e.g. "2021.03 - Present".
    pub period: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub major: String,
    pub period: String,
    #[serde(default)]
    pub details: String,
}

/// `data/skills.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillsData {
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    /// Proficiency 0-100; drives the progress bar width.
    pub level: u8,
}

/// `data/projects.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectsData {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Image path relative to the site root (a leading `/` is tolerated).
    pub image: String,
    pub short_description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub contributions: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

/// Optional outbound links for a project. `{}` is valid and yields no links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl ProjectLinks {
    /// Present, non-blank links in display order (demo first).
    pub fn present(&self) -> Vec<(LinkKind, &str)> {
        [
            (LinkKind::Demo, self.demo.as_deref()),
            (LinkKind::Repository, self.github.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, url)| {
            url.map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| (kind, u))
        })
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Demo,
    Repository,
}

/// `data/awards.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwardsData {
    pub awards: Vec<Award>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Award {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AwardKind,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AwardKind {
    Certification,
    Award,
    Course,
}

impl AwardKind {
    /// Stable identifier used for styling hooks (`kind-certification`, ...).
    pub fn slug(self) -> &'static str {
        match self {
            AwardKind::Certification => "certification",
            AwardKind::Award => "award",
            AwardKind::Course => "course",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_fields_are_camel_case() {
        let json = r#"{
            "id": "p1",
            "title": "Shop",
            "image": "/placeholder.svg",
            "shortDescription": "An online shop",
            "technologies": ["Go"],
            "description": "Long",
            "contributions": [],
            "results": [],
            "links": {}
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.short_description, "An online shop");
        assert_eq!(project.links, ProjectLinks::default());
    }

    #[test]
    fn project_links_default_when_missing() {
        let json = r#"{"id":"p","title":"t","image":"i","shortDescription":"s","description":"d"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.links.present().is_empty());
        assert!(project.technologies.is_empty());
    }

    #[test]
    fn present_links_skip_blank_urls() {
        let links = ProjectLinks {
            demo: Some("  ".into()),
            github: Some("https://github.com/x/y".into()),
        };
        assert_eq!(
            links.present(),
            vec![(LinkKind::Repository, "https://github.com/x/y")]
        );
    }

    #[test]
    fn empty_links_serialize_as_empty_object() {
        let json = serde_json::to_string(&ProjectLinks::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn award_kind_uses_type_key() {
        let json = r#"{"id":"a","title":"AWS SAA","type":"certification","issuer":"AWS","date":"2023.05"}"#;
        let award: Award = serde_json::from_str(json).unwrap();
        assert_eq!(award.kind, AwardKind::Certification);
        assert_eq!(award.description, "");

        let back = serde_json::to_value(&award).unwrap();
        assert_eq!(back["type"], "certification");
    }

    #[test]
    fn unknown_award_kind_rejected() {
        let json = r#"{"id":"a","title":"t","type":"medal","issuer":"i","date":"d"}"#;
        assert!(serde_json::from_str::<Award>(json).is_err());
    }

    #[test]
    fn experience_lists_default_to_empty() {
        let data: ExperienceData = serde_json::from_str("{}").unwrap();
        assert!(data.work.is_empty());
        assert!(data.education.is_empty());
    }

    #[test]
    fn unknown_keys_rejected() {
        let json = r#"{"id":"a","title":"t","type":"award","issuer":"i","date":"d","year":2024}"#;
        assert!(serde_json::from_str::<Award>(json).is_err());

        let json = r#"{"categories":[{"name":"Backend","skills":[{"name":"Go","level":80,"years":3}]}]}"#;
        assert!(serde_json::from_str::<SkillsData>(json).is_err());
    }

    #[test]
    fn skill_level_above_u8_is_rejected_by_serde() {
        let json = r#"{"name":"Go","level":300}"#;
        assert!(serde_json::from_str::<Skill>(json).is_err());
    }
}
