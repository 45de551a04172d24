//! Persisted inspector state
//!
//! The state lives in `.vaultpick/state.json`. It is read once when a command
//! starts and rewritten in full after every mutation; fields missing from the
//! file are filled with defaults and unknown fields are ignored.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::eligibility::{normalize_path, FileEligibility};
use crate::error::{Result, VaultError};
use crate::map_io_err;

/// Everything vaultpick remembers between invocations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorState {
    /// Whether draw/find actions are accepted
    pub enabled: bool,

    /// Notes left in the current cycle, head first
    pub remaining_paths: Vec<String>,

    /// Normalized folder exclusions, insertion ordered
    pub excluded_folders: Vec<String>,

    /// Note most recently presented to the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    /// When the current cycle was shuffled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_started_at: Option<DateTime<Utc>>,
}

impl InspectorState {
    pub fn eligibility(&self) -> FileEligibility {
        FileEligibility::new(&self.excluded_folders)
    }

    /// Copy with `folder` added to the exclusions and the queue dropped
    pub fn excluding(&self, folder: &str) -> Self {
        let folder = normalize_path(folder);
        let mut excluded_folders = self.excluded_folders.clone();
        if !excluded_folders.contains(&folder) {
            excluded_folders.push(folder);
        }
        Self {
            excluded_folders,
            remaining_paths: Vec::new(),
            cycle_started_at: None,
            ..self.clone()
        }
    }

    /// Copy with `folder` removed from the exclusions and the queue dropped
    pub fn including(&self, folder: &str) -> Self {
        let folder = normalize_path(folder);
        Self {
            excluded_folders: self
                .excluded_folders
                .iter()
                .filter(|f| normalize_path(f) != folder)
                .cloned()
                .collect(),
            remaining_paths: Vec::new(),
            cycle_started_at: None,
            ..self.clone()
        }
    }
}

/// Where state is loaded from and saved to
pub trait StatePersistence {
    /// Load the saved state, `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<InspectorState>>;

    /// Overwrite the saved state with `state`
    fn save(&self, state: &InspectorState) -> Result<()>;
}

/// JSON file persistence
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatePersistence for StateFile {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<InspectorState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| map_io_err!("read", self.path, e))?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let state = serde_json::from_str(&content).map_err(|e| VaultError::InvalidState {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(state))
    }

    #[tracing::instrument(skip(self, state), fields(path = %self.path.display(), remaining = state.remaining_paths.len()))]
    fn save(&self, state: &InspectorState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| map_io_err!("create", parent, e))?;
        }
        let content = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, content).map_err(|e| map_io_err!("write", self.path, e))?;
        Ok(())
    }
}

/// In-process persistence, for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryState {
    saved: RefCell<Option<InspectorState>>,
    saves: Cell<usize>,
}

impl MemoryState {
    pub fn with_state(state: InspectorState) -> Self {
        Self {
            saved: RefCell::new(Some(state)),
            saves: Cell::new(0),
        }
    }

    /// Last value written through `save`
    pub fn saved(&self) -> Option<InspectorState> {
        self.saved.borrow().clone()
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StatePersistence for MemoryState {
    fn load(&self) -> Result<Option<InspectorState>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, state: &InspectorState) -> Result<()> {
        *self.saved.borrow_mut() = Some(state.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

impl<P: StatePersistence + ?Sized> StatePersistence for &P {
    fn load(&self) -> Result<Option<InspectorState>> {
        (**self).load()
    }

    fn save(&self, state: &InspectorState) -> Result<()> {
        (**self).save(state)
    }
}

/// Loaded state plus the persistence it is written back to.
///
/// Mutations always replace the whole value and persist it before the new
/// value becomes visible through [`StateStore::get`].
#[derive(Debug)]
pub struct StateStore<P: StatePersistence> {
    persistence: P,
    state: InspectorState,
}

impl<P: StatePersistence> StateStore<P> {
    pub fn open(persistence: P) -> Result<Self> {
        let state = persistence.load()?.unwrap_or_default();
        tracing::debug!(
            enabled = state.enabled,
            remaining = state.remaining_paths.len(),
            excluded = state.excluded_folders.len(),
            "state_loaded"
        );
        Ok(Self { persistence, state })
    }

    pub fn get(&self) -> &InspectorState {
        &self.state
    }

    pub fn set(&mut self, next: InspectorState) -> Result<()> {
        self.persistence.save(&next)?;
        self.state = next;
        Ok(())
    }

    pub fn update(&mut self, f: impl FnOnce(&InspectorState) -> InspectorState) -> Result<()> {
        let next = f(&self.state);
        self.set(next)
    }
}
