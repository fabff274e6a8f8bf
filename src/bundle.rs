//! The all-in-one data bundle.
//!
//! The admin viewer's "Download all data" button and `folio export` both
//! produce `portfolio_data.json`: one pretty-printed object holding all five
//! resources under their keys.
//!
//! ```json
//! {
//!   "about": { ... },
//!   "experience": { "work": [...], "education": [...] },
//!   "skills": { "categories": [...] },
//!   "projects": { "projects": [...] },
//!   "awards": { "awards": [...] }
//! }
//! ```
//!
//! `folio unpack` reverses it, splitting a bundle back into `data/*.json` so
//! an edited download can be committed and redeployed.

use crate::loader::{DirFetcher, Fetch, load};
use crate::resource::{self, Resource, ResourceError, Validate};
use crate::types::{AwardsData, ExperienceData, Profile, ProjectsData, SkillsData};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name offered by the admin download.
pub const BUNDLE_FILE_NAME: &str = "portfolio_data.json";

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioBundle {
    pub about: Profile,
    pub experience: ExperienceData,
    pub skills: SkillsData,
    pub projects: ProjectsData,
    pub awards: AwardsData,
}

/// A file for the browser to save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub body: String,
}

impl PortfolioBundle {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse and validate a bundle.
    pub fn from_json(body: &str) -> Result<Self, BundleError> {
        let bundle: PortfolioBundle = serde_json::from_str(body)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Run every resource's schema checks.
    pub fn validate(&self) -> Result<(), ResourceError> {
        check::<resource::About>(&self.about)?;
        check::<resource::Experience>(&self.experience)?;
        check::<resource::Skills>(&self.skills)?;
        check::<resource::Projects>(&self.projects)?;
        check::<resource::Awards>(&self.awards)?;
        Ok(())
    }

    pub fn download(&self) -> Result<Download, serde_json::Error> {
        Ok(Download {
            file_name: BUNDLE_FILE_NAME,
            mime: "application/json",
            body: self.to_json_pretty()?,
        })
    }

    /// Read the five resources from `<root>/data/`.
    pub fn read_data_dir(root: &Path) -> Result<Self, BundleError> {
        let fetcher = DirFetcher::new(root);
        Ok(futures::executor::block_on(load_bundle(&fetcher))?)
    }

    /// Write the five resources to `<root>/data/`, one pretty-printed file each.
    /// Returns the written paths in page order.
    pub fn write_data_dir(&self, root: &Path) -> Result<Vec<PathBuf>, BundleError> {
        fs::create_dir_all(root.join(resource::DATA_DIR))?;
        Ok(vec![
            write_record::<resource::About>(root, &self.about)?,
            write_record::<resource::Experience>(root, &self.experience)?,
            write_record::<resource::Skills>(root, &self.skills)?,
            write_record::<resource::Projects>(root, &self.projects)?,
            write_record::<resource::Awards>(root, &self.awards)?,
        ])
    }
}

/// Fetch all five resources concurrently. The first failure fails the bundle.
pub async fn load_bundle<F: Fetch>(fetcher: &F) -> Result<PortfolioBundle, ResourceError> {
    let (about, experience, skills, projects, awards) = futures::try_join!(
        load::<resource::About, _>(fetcher),
        load::<resource::Experience, _>(fetcher),
        load::<resource::Skills, _>(fetcher),
        load::<resource::Projects, _>(fetcher),
        load::<resource::Awards, _>(fetcher),
    )?;
    Ok(PortfolioBundle {
        about,
        experience,
        skills,
        projects,
        awards,
    })
}

fn check<R: Resource>(record: &R::Record) -> Result<(), ResourceError> {
    record.validate().map_err(|reason| ResourceError::Schema {
        path: R::path(),
        reason,
    })
}

fn write_record<R: Resource>(root: &Path, record: &R::Record) -> Result<PathBuf, BundleError> {
    let path = root.join(R::path());
    let mut json = serde_json::to_string_pretty(record)?;
    json.push('\n');
    fs::write(&path, json)?;
    tracing::debug!(resource = R::KEY, path = %path.display(), "wrote resource");
    Ok(path)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::render::test_data;
    use futures::executor::block_on;
    use tempfile::TempDir;

    pub(crate) fn sample() -> PortfolioBundle {
        PortfolioBundle {
            about: test_data::profile(),
            experience: test_data::experience(),
            skills: SkillsData {
                categories: vec![crate::types::SkillCategory {
                    name: "Backend".into(),
                    skills: vec![crate::types::Skill {
                        name: "Go".into(),
                        level: 80,
                    }],
                }],
            },
            projects: ProjectsData {
                projects: vec![
                    test_data::project("p1", &["Go"]),
                    test_data::project("p2", &["Rust"]),
                    test_data::project("p3", &["Kotlin"]),
                ],
            },
            awards: test_data::awards(),
        }
    }

    #[test]
    fn bundle_has_five_top_level_keys() {
        let json = sample().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        for key in resource::ALL_KEYS {
            assert!(keys.contains(&key.to_string()), "missing {key}");
        }
        assert_eq!(keys.len(), 5);
        assert!(json.contains("\n  \"about\""));
        assert!(json.contains("\"shortDescription\""));
    }

    #[test]
    fn download_is_named_portfolio_data() {
        let download = sample().download().unwrap();
        assert_eq!(download.file_name, "portfolio_data.json");
        assert_eq!(download.mime, "application/json");
    }

    #[test]
    fn from_json_validates() {
        let mut bundle = sample();
        bundle.skills.categories[0].skills[0].level = 120;
        let json = bundle.to_json_pretty().unwrap();
        let err = PortfolioBundle::from_json(&json).unwrap_err();
        assert!(matches!(err, BundleError::Resource(ResourceError::Schema { .. })));
        assert!(err.to_string().contains("data/skills.json"));
    }

    #[test]
    fn unpack_then_read_back() {
        let tmp = TempDir::new().unwrap();
        let bundle = sample();
        let written = bundle.write_data_dir(tmp.path()).unwrap();
        assert_eq!(written.len(), 5);
        assert!(tmp.path().join("data/awards.json").exists());

        let read = PortfolioBundle::read_data_dir(tmp.path()).unwrap();
        assert_eq!(read, bundle);
    }

    #[test]
    fn one_missing_resource_fails_the_bundle() {
        let tmp = TempDir::new().unwrap();
        sample().write_data_dir(tmp.path()).unwrap();
        fs::remove_file(tmp.path().join("data/projects.json")).unwrap();

        let err = block_on(load_bundle(&DirFetcher::new(tmp.path()))).unwrap_err();
        assert_eq!(err.path(), "data/projects.json");
    }
}
