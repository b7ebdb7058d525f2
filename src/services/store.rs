use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::MatchEntry;

/// Errors that can occur reading or writing the local state file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("State file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreState {
    #[serde(rename = "onboardingComplete", default)]
    onboarding_complete: bool,
    #[serde(default)]
    matches: Vec<MatchEntry>,
}

/// File-backed client flags and small records.
///
/// Holds the onboarding-complete flag the entry route is decided from, and
/// the locally saved matches list. The path is injected so tests can point
/// the store at a temp file; every mutation persists immediately.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    state: StoreState,
}

impl LocalStore {
    /// Open the store at `path`, starting from empty state when the file
    /// does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreState::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn onboarding_complete(&self) -> bool {
        self.state.onboarding_complete
    }

    pub fn set_onboarding_complete(&mut self, complete: bool) -> Result<(), StoreError> {
        self.state.onboarding_complete = complete;
        self.persist()
    }

    pub fn matches(&self) -> &[MatchEntry] {
        &self.state.matches
    }

    pub fn add_match(&mut self, entry: MatchEntry) -> Result<(), StoreError> {
        self.state.matches.push(entry);
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(&self.state)?;
        fs::write(&self.path, json)?;
        tracing::trace!("Persisted local state to {}", self.path.display());
        Ok(())
    }
}
