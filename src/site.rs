//! Static site build.
//!
//! Turns a content directory into a deployable folder. Content is *not*
//! rendered into the pages: the browser runtime fetches `data/*.json` on every
//! visit, so the build only validates the data, writes the page shells with
//! their loading skeletons, and copies files.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # Home page shell
//! ├── admin/index.html    # Admin viewer shell
//! ├── 404.html            # Redirects unknown paths to the root
//! ├── style.css           # Palette from config.toml + base styles
//! ├── data/               # The five resources, copied verbatim
//! └── ...                 # Everything from content/assets/
//! ```
//!
//! The browser runtime itself (`pkg/folio.js` + wasm) is produced by
//! `wasm-pack build --target web --out-dir dist/pkg` and is not part of this
//! step.
//!
//! ## Cache Busting
//!
//! The stylesheet, runtime and data URLs carry `?v=<fingerprint>`, a short
//! SHA-256 over the five data files. Editing content changes every URL.

use crate::admin::AdminPage;
use crate::bundle::{PortfolioBundle, load_bundle};
use crate::config::{self, ConfigError, SiteConfig};
use crate::loader::DirFetcher;
use crate::page::PortfolioPage;
use crate::render::shell;
use crate::resource::{ALL_KEYS, DATA_DIR, ResourceError};
use crate::settings::Settings;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error("asset {0} would overwrite a generated file")]
    AssetCollision(PathBuf),
}

impl From<walkdir::Error> for SiteError {
    fn from(e: walkdir::Error) -> Self {
        SiteError::Io(e.into())
    }
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Directory of files copied verbatim to the site root.
pub const ASSETS_DIR: &str = "assets";

/// Top-level output names owned by the build (and by `wasm-pack`'s `pkg/`).
const RESERVED: [&str; 6] = [
    "index.html",
    "404.html",
    "style.css",
    crate::route::ADMIN_SEGMENT,
    DATA_DIR,
    "pkg",
];

/// A validated content directory.
#[derive(Debug)]
pub struct Content {
    pub config: SiteConfig,
    pub bundle: PortfolioBundle,
    pub fingerprint: String,
}

/// What a build wrote, relative to the output directory.
#[derive(Debug)]
pub struct BuildReport {
    pub pages: Vec<PathBuf>,
    pub data: Vec<PathBuf>,
    pub assets: Vec<PathBuf>,
    pub fingerprint: String,
}

/// Load config and all five resources, failing on the first invalid one.
pub fn check(source: &Path) -> Result<Content, SiteError> {
    let config = config::load_config(source)?;
    let fetcher = DirFetcher::new(source);
    let bundle = futures::executor::block_on(load_bundle(&fetcher))?;
    let fingerprint = data_fingerprint(source)?;
    Ok(Content {
        config,
        bundle,
        fingerprint,
    })
}

/// Short content hash over the raw data files, in page order.
pub fn data_fingerprint(source: &Path) -> Result<String, std::io::Error> {
    let mut hasher = Sha256::new();
    for key in ALL_KEYS {
        let bytes = fs::read(data_path(source, key))?;
        hasher.update(key.as_bytes());
        hasher.update(b"\0");
        hasher.update(&bytes);
    }
    let hex = format!("{:x}", hasher.finalize());
    Ok(hex[..12].to_string())
}

fn data_path(root: &Path, key: &str) -> PathBuf {
    root.join(DATA_DIR).join(format!("{key}.json"))
}

/// Build the site from `source` into `output`.
///
/// `generator` ends up in `<meta name="generator">`.
pub fn build(source: &Path, output: &Path, generator: &str) -> Result<BuildReport, SiteError> {
    let content = check(source)?;
    let assets_dir = source.join(ASSETS_DIR);
    check_asset_paths(&assets_dir)?;
    let runtime = content.config.runtime(content.fingerprint.clone());
    tracing::info!(
        source = %source.display(),
        output = %output.display(),
        version = %content.fingerprint,
        "building site"
    );

    fs::create_dir_all(output)?;
    let mut pages = Vec::new();

    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&content.config.colors),
        CSS_STATIC
    );
    fs::write(output.join("style.css"), css)?;
    pages.push(PathBuf::from("style.css"));

    let settings = Settings {
        language: runtime.behavior.default_language,
        ..Settings::default()
    };
    let mut home = PortfolioPage::new(runtime.clone());
    home.mount();
    let index = shell::base_document(&runtime, generator, home.render_body(settings))?;
    fs::write(output.join("index.html"), index.into_string())?;
    pages.push(PathBuf::from("index.html"));

    let admin_dir = output.join(crate::route::ADMIN_SEGMENT);
    fs::create_dir_all(&admin_dir)?;
    let admin = shell::base_document(&runtime, generator, AdminPage::new().render_body())?;
    fs::write(admin_dir.join("index.html"), admin.into_string())?;
    pages.push(PathBuf::from(crate::route::ADMIN_SEGMENT).join("index.html"));

    let not_found = shell::render_not_found(&runtime.site.base_path)?;
    fs::write(output.join("404.html"), not_found.into_string())?;
    pages.push(PathBuf::from("404.html"));

    let data = copy_data(source, output)?;
    let assets = copy_assets(&assets_dir, output)?;

    Ok(BuildReport {
        pages,
        data,
        assets,
        fingerprint: content.fingerprint,
    })
}

/// Copy the five resources byte for byte.
fn copy_data(source: &Path, output: &Path) -> Result<Vec<PathBuf>, SiteError> {
    fs::create_dir_all(output.join(DATA_DIR))?;
    let mut copied = Vec::new();
    for key in ALL_KEYS {
        let relative = Path::new(DATA_DIR).join(format!("{key}.json"));
        fs::copy(source.join(&relative), output.join(&relative))?;
        copied.push(relative);
    }
    Ok(copied)
}

/// Reject assets whose top-level name the build writes itself.
fn check_asset_paths(assets: &Path) -> Result<(), SiteError> {
    if !assets.is_dir() {
        return Ok(());
    }
    for entry in fs::read_dir(assets)? {
        let name = entry?.file_name();
        if RESERVED.iter().any(|reserved| name == *reserved) {
            return Err(SiteError::AssetCollision(Path::new(ASSETS_DIR).join(name)));
        }
    }
    Ok(())
}

/// Copy `assets/` into the output root, keeping its layout. A missing
/// directory copies nothing.
fn copy_assets(assets: &Path, output: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut copied = Vec::new();
    if !assets.is_dir() {
        return Ok(copied);
    }
    for entry in WalkDir::new(assets).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(assets) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }
        let target = output.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied.push(relative.to_path_buf());
        }
    }
    Ok(copied)
}
