//! The content-section loader.
//!
//! Every section of the page follows the same contract: on mount it fetches
//! one named resource, renders a skeleton while the fetch is pending, renders
//! the populated view once it succeeds, and on failure logs the error and
//! keeps its placeholder. This module holds the two halves of that contract:
//!
//! - [`load`] performs the fetch + decode for any [`Resource`] through a
//!   [`Fetch`] implementation (HTTP in the browser, a directory on disk for
//!   the CLI and tests).
//! - [`SectionSlot`] owns a section's [`SectionState`] and decides whether a
//!   completed fetch may still write to it.
//!
//! ## Stale completions
//!
//! Fetches are never cancelled. A section can be unmounted (route change) or
//! remounted while its fetch is still in flight, so each mount hands out a
//! [`LoadTicket`] and [`SectionSlot::settle`] only applies a result whose
//! ticket matches the current mount. Anything else is reported as
//! [`Settled::Stale`] and dropped. Generations come from one process-wide
//! counter, so a ticket is only ever accepted by the slot that issued it.

use crate::resource::{Resource, ResourceError, decode};
use std::future::Future;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Source of resource bodies, addressed by site-relative path.
pub trait Fetch {
    fn fetch_text(&self, path: &str) -> impl Future<Output = Result<String, ResourceError>>;
}

/// Serves resources from a local directory laid out like the deployed site.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fetch for DirFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, ResourceError> {
        std::fs::read_to_string(self.root.join(path)).map_err(|e| ResourceError::Transport {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

/// Resource URL with the data version appended as a cache-busting query.
pub fn versioned_path(path: &str, version: &str) -> String {
    if version.is_empty() {
        path.to_string()
    } else {
        format!("{path}?v={version}")
    }
}

/// Fetch and decode one resource. Failures are logged here, at the fetch
/// site, and returned so the caller can settle its slot.
pub async fn load<R: Resource, F: Fetch>(fetcher: &F) -> Result<R::Record, ResourceError> {
    let path = R::path();
    let result = match fetcher.fetch_text(&path).await {
        Ok(body) => decode::<R>(&body),
        Err(e) => Err(e),
    };
    match &result {
        Ok(_) => tracing::debug!(resource = R::KEY, "loaded {path}"),
        Err(e) => tracing::error!(resource = R::KEY, error = %e, "failed to load section data"),
    }
    result
}

/// What a section can render.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    /// Fetch pending (or never started).
    Loading,
    Ready(T),
    /// Fetch or decode failed. Holds the logged message.
    Failed(String),
}

impl<T> SectionState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            SectionState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SectionState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SectionState::Failed(_))
    }
}

/// Proof that a fetch was started by a particular mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    Stale,
}

/// State holder for one section, guarded against writes after unmount.
#[derive(Debug)]
pub struct SectionSlot<T> {
    state: SectionState<T>,
    pending: Option<u64>,
}

impl<T> Default for SectionSlot<T> {
    fn default() -> Self {
        Self {
            state: SectionState::Loading,
            pending: None,
        }
    }
}

impl<T> SectionSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SectionState<T> {
        &self.state
    }

    /// Mount the section: reset to `Loading` and issue a ticket for exactly
    /// one fetch. Any ticket from an earlier mount becomes stale.
    pub fn begin(&mut self) -> LoadTicket {
        let generation = next_generation();
        self.pending = Some(generation);
        self.state = SectionState::Loading;
        LoadTicket { generation }
    }

    /// Apply a fetch result if its ticket belongs to the current mount and
    /// has not been settled already.
    pub fn settle(&mut self, ticket: LoadTicket, result: Result<T, ResourceError>) -> Settled {
        if self.pending != Some(ticket.generation) {
            tracing::debug!(
                generation = ticket.generation,
                "dropping stale section result"
            );
            return Settled::Stale;
        }
        self.pending = None;
        self.state = match result {
            Ok(data) => SectionState::Ready(data),
            Err(e) => SectionState::Failed(e.to_string()),
        };
        Settled::Applied
    }

    /// Unmount: in-flight results will be dropped.
    pub fn unmount(&mut self) {
        self.pending = None;
        self.state = SectionState::Loading;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the ready value with `f(current)`. No-op unless `Ready`.
    pub fn replace_ready(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        match &self.state {
            SectionState::Ready(current) => {
                self.state = SectionState::Ready(f(current));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Skills;
    use futures::executor::block_on;
    use tempfile::TempDir;

    #[test]
    fn versioned_path_appends_query() {
        assert_eq!(versioned_path("data/about.json", "abc"), "data/about.json?v=abc");
        assert_eq!(versioned_path("data/about.json", ""), "data/about.json");
    }

    fn transport_error() -> ResourceError {
        ResourceError::Transport {
            path: "data/skills.json".into(),
            message: "connection refused".into(),
        }
    }

    #[test]
    fn new_slot_is_loading() {
        let slot: SectionSlot<u32> = SectionSlot::new();
        assert!(slot.state().is_loading());
        assert!(!slot.is_pending());
    }

    #[test]
    fn settle_ok_becomes_ready() {
        let mut slot = SectionSlot::new();
        let ticket = slot.begin();
        assert_eq!(slot.settle(ticket, Ok(7)), Settled::Applied);
        assert_eq!(slot.state().ready(), Some(&7));
    }

    #[test]
    fn settle_err_becomes_failed() {
        let mut slot: SectionSlot<u32> = SectionSlot::new();
        let ticket = slot.begin();
        slot.settle(ticket, Err(transport_error()));
        assert!(slot.state().is_failed());
        assert!(slot.state().ready().is_none());
    }

    #[test]
    fn result_after_unmount_is_stale() {
        let mut slot = SectionSlot::new();
        let ticket = slot.begin();
        slot.unmount();
        assert_eq!(slot.settle(ticket, Ok(1)), Settled::Stale);
        assert!(slot.state().is_loading());
    }

    #[test]
    fn result_from_previous_mount_is_stale() {
        let mut slot = SectionSlot::new();
        let first = slot.begin();
        let second = slot.begin();
        assert_eq!(slot.settle(first, Ok(1)), Settled::Stale);
        assert_eq!(slot.settle(second, Ok(2)), Settled::Applied);
        assert_eq!(slot.state().ready(), Some(&2));
    }

    #[test]
    fn ticket_settles_once() {
        let mut slot = SectionSlot::new();
        let ticket = slot.begin();
        assert_eq!(slot.settle(ticket, Ok(1)), Settled::Applied);
        assert_eq!(slot.settle(ticket, Ok(2)), Settled::Stale);
        assert_eq!(slot.state().ready(), Some(&1));
    }

    #[test]
    fn ticket_from_another_slot_is_stale() {
        let mut about: SectionSlot<u32> = SectionSlot::new();
        let mut contact = SectionSlot::new();
        let about_ticket = about.begin();
        let contact_ticket = contact.begin();
        assert_ne!(about_ticket, contact_ticket);
        assert_eq!(contact.settle(about_ticket, Ok(1)), Settled::Stale);
        assert!(contact.is_pending());
        assert_eq!(contact.settle(contact_ticket, Ok(2)), Settled::Applied);
    }

    #[test]
    fn begin_resets_to_loading() {
        let mut slot = SectionSlot::new();
        let ticket = slot.begin();
        slot.settle(ticket, Ok(1));
        slot.begin();
        assert!(slot.state().is_loading());
    }

    #[test]
    fn replace_ready_only_when_ready() {
        let mut slot = SectionSlot::new();
        assert!(!slot.replace_ready(|v: &u32| v + 1));
        let ticket = slot.begin();
        slot.settle(ticket, Ok(1));
        assert!(slot.replace_ready(|v| v + 1));
        assert_eq!(slot.state().ready(), Some(&2));
    }

    #[test]
    fn load_reads_from_directory() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("data")).unwrap();
        std::fs::write(
            tmp.path().join("data/skills.json"),
            r#"{"categories":[{"name":"Backend","skills":[{"name":"Go","level":80}]}]}"#,
        )
        .unwrap();

        let fetcher = DirFetcher::new(tmp.path());
        let skills = block_on(load::<Skills, _>(&fetcher)).unwrap();
        assert_eq!(skills.categories[0].name, "Backend");
    }

    #[test]
    fn load_missing_file_is_transport_error() {
        let tmp = TempDir::new().unwrap();
        let fetcher = DirFetcher::new(tmp.path());
        let err = block_on(load::<Skills, _>(&fetcher)).unwrap_err();
        assert!(matches!(err, ResourceError::Transport { .. }));
        assert_eq!(err.path(), "data/skills.json");
    }
}
