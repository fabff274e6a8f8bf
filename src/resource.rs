//! Named JSON resources and their schema checks.
//!
//! Each content section is backed by one file under `data/`. A [`Resource`]
//! ties the file's key to the record type it decodes into, so the loader can
//! stay generic: `load::<Skills>(&fetcher)` yields a [`SkillsData`] or a
//! [`ResourceError`].
//!
//! Decoding is strict. After serde succeeds the record is validated (skill
//! levels in range, ids unique within their list, required names present) so
//! a malformed document fails closed instead of rendering half a section.

use crate::types::{AwardsData, ExperienceData, Profile, ProjectsData, SkillsData};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use thiserror::Error;

/// Directory, relative to the site root, that holds every resource.
pub const DATA_DIR: &str = "data";

/// Keys of all resources, in page order.
pub const ALL_KEYS: [&str; 5] = [
    About::KEY,
    Experience::KEY,
    Skills::KEY,
    Projects::KEY,
    Awards::KEY,
];

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("failed to fetch {path}: {message}")]
    Transport { path: String, message: String },
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid {path}: {reason}")]
    Schema { path: String, reason: String },
}

impl ResourceError {
    /// The resource path the error refers to.
    pub fn path(&self) -> &str {
        match self {
            ResourceError::Transport { path, .. }
            | ResourceError::Status { path, .. }
            | ResourceError::Json { path, .. }
            | ResourceError::Schema { path, .. } => path,
        }
    }
}

/// A record that can check its own invariants after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// A named JSON document under `data/`.
pub trait Resource {
    type Record: DeserializeOwned + Serialize + Validate + Clone;

    /// File stem, e.g. `"skills"` for `data/skills.json`.
    const KEY: &'static str;

    /// Path relative to the site root.
    fn path() -> String {
        format!("{DATA_DIR}/{}.json", Self::KEY)
    }
}

pub struct About;
pub struct Experience;
pub struct Skills;
pub struct Projects;
pub struct Awards;

impl Resource for About {
    type Record = Profile;
    const KEY: &'static str = "about";
}

impl Resource for Experience {
    type Record = ExperienceData;
    const KEY: &'static str = "experience";
}

impl Resource for Skills {
    type Record = SkillsData;
    const KEY: &'static str = "skills";
}

impl Resource for Projects {
    type Record = ProjectsData;
    const KEY: &'static str = "projects";
}

impl Resource for Awards {
    type Record = AwardsData;
    const KEY: &'static str = "awards";
}

/// Decode and validate a resource body.
pub fn decode<R: Resource>(body: &str) -> Result<R::Record, ResourceError> {
    let record: R::Record = serde_json::from_str(body).map_err(|source| ResourceError::Json {
        path: R::path(),
        source,
    })?;
    record
        .validate()
        .map_err(|reason| ResourceError::Schema {
            path: R::path(),
            reason,
        })?;
    Ok(record)
}

// ============================================================================
// Schema checks
// ============================================================================

fn require(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} must not be empty"))
    } else {
        Ok(())
    }
}

fn unique_ids<'a>(list: &str, ids: impl IntoIterator<Item = &'a str>) -> Result<(), String> {
    let mut seen = HashSet::new();
    for id in ids {
        require(&format!("{list} id"), id)?;
        if !seen.insert(id) {
            return Err(format!("duplicate {list} id \"{id}\""));
        }
    }
    Ok(())
}

impl Validate for Profile {
    fn validate(&self) -> Result<(), String> {
        require("name", &self.name)
    }
}

impl Validate for ExperienceData {
    fn validate(&self) -> Result<(), String> {
        unique_ids("work", self.work.iter().map(|w| w.id.as_str()))?;
        unique_ids("education", self.education.iter().map(|e| e.id.as_str()))?;
        for job in &self.work {
            require("work company", &job.company)?;
        }
        for edu in &self.education {
            require("education institution", &edu.institution)?;
        }
        Ok(())
    }
}

impl Validate for SkillsData {
    fn validate(&self) -> Result<(), String> {
        let mut names = HashSet::new();
        for category in &self.categories {
            require("category name", &category.name)?;
            if !names.insert(category.name.as_str()) {
                return Err(format!("duplicate category \"{}\"", category.name));
            }
            for skill in &category.skills {
                require("skill name", &skill.name)?;
                if skill.level > 100 {
                    return Err(format!(
                        "skill \"{}\" level {} is outside 0-100",
                        skill.name, skill.level
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Validate for ProjectsData {
    fn validate(&self) -> Result<(), String> {
        unique_ids("project", self.projects.iter().map(|p| p.id.as_str()))?;
        for project in &self.projects {
            require("project title", &project.title)?;
        }
        Ok(())
    }
}

impl Validate for AwardsData {
    fn validate(&self) -> Result<(), String> {
        unique_ids("award", self.awards.iter().map(|a| a.id.as_str()))?;
        for award in &self.awards {
            require("award title", &award.title)?;
        }
        Ok(())
    }
}
