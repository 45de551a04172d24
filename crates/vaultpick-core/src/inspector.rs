//! Inspector actions
//!
//! Ties the vault, the persisted state and the sampling/orphan logic
//! together. Each method is one user action; each mutation builds a complete
//! new [`InspectorState`] and persists it through the [`StateStore`].

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};

use crate::bail_usage;
use crate::eligibility::normalize_path;
use crate::error::Result;
use crate::orphan;
use crate::sampler::Sampler;
use crate::state::{InspectorState, StatePersistence, StateStore};
use crate::vault::{Note, NoteHost};

/// Result of a draw or orphan search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// The inspector is off; nothing was read or written
    Disabled,
    /// No eligible note qualified
    NoneFound,
    /// The note to look at
    Found(Note),
}

/// Outcome of a folder exclusion change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderChange {
    /// Normalized folder path
    pub folder: String,
    /// Whether the exclusion set changed
    pub changed: bool,
}

pub struct Inspector<'a, H: NoteHost, P: StatePersistence> {
    host: &'a H,
    store: StateStore<P>,
}

impl<'a, H: NoteHost, P: StatePersistence> Inspector<'a, H, P> {
    pub fn new(host: &'a H, store: StateStore<P>) -> Self {
        Self { host, store }
    }

    pub fn state(&self) -> &InspectorState {
        self.store.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.store.get().enabled
    }

    /// Set the enabled flag; returns whether it changed
    pub fn set_enabled(&mut self, enabled: bool) -> Result<bool> {
        let changed = self.store.get().enabled != enabled;
        self.store.update(|prev| InspectorState {
            enabled,
            ..prev.clone()
        })?;
        info!(enabled, "inspector_toggled");
        Ok(changed)
    }

    /// Flip the enabled flag; returns the new value
    pub fn toggle(&mut self) -> Result<bool> {
        let enabled = !self.store.get().enabled;
        self.set_enabled(enabled)?;
        Ok(enabled)
    }

    /// Finish the session: disable and forget the current note.
    ///
    /// Returns the note that was current, if any.
    pub fn done(&mut self) -> Result<Option<String>> {
        let previous = self.store.get().current.clone();
        self.store.update(|prev| InspectorState {
            enabled: false,
            current: None,
            ..prev.clone()
        })?;
        Ok(previous)
    }

    /// Draw the next random note of the cycle
    pub fn inspect_random<R: Rng>(&mut self, rng: &mut R) -> Result<Inspection> {
        if !self.is_enabled() {
            return Ok(Inspection::Disabled);
        }

        let eligibility = self.store.get().eligibility();
        let queue = self.store.get().remaining_paths.clone();
        let store = &mut self.store;

        let draw = Sampler::new(self.host, &eligibility).draw_next(
            &queue,
            rng,
            |remaining, new_cycle| {
                store.update(|prev| InspectorState {
                    remaining_paths: remaining.to_vec(),
                    cycle_started_at: if new_cycle {
                        Some(Utc::now())
                    } else {
                        prev.cycle_started_at
                    },
                    ..prev.clone()
                })
            },
        )?;

        debug!(
            discarded = draw.discarded,
            reshuffles = draw.reshuffles,
            remaining = self.store.get().remaining_paths.len(),
            "draw_complete"
        );

        self.present(draw.note)
    }

    /// Find the first orphan among eligible notes
    pub fn find_orphan(&mut self) -> Result<Inspection> {
        if !self.is_enabled() {
            return Ok(Inspection::Disabled);
        }

        let eligible = self.eligible_notes()?;
        let graph = self.host.link_graph()?;
        let orphan = orphan::find_orphan(&eligible, &graph).cloned();

        self.present(orphan)
    }

    /// Every orphan among eligible notes; `None` while disabled
    pub fn list_orphans(&self) -> Result<Option<Vec<Note>>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let eligible = self.eligible_notes()?;
        let graph = self.host.link_graph()?;
        Ok(Some(
            orphan::find_orphans(&eligible, &graph)
                .into_iter()
                .cloned()
                .collect(),
        ))
    }

    /// Add `folder` to the exclusions and drop the queue
    pub fn exclude(&mut self, folder: &str) -> Result<FolderChange> {
        let folder = checked_folder(folder)?;
        let changed = !self.store.get().eligibility().is_excluded_folder(&folder);
        self.store.update(|prev| prev.excluding(&folder))?;
        info!(folder = %folder, changed, "folder_excluded");
        Ok(FolderChange { folder, changed })
    }

    /// Remove `folder` from the exclusions and drop the queue
    pub fn include(&mut self, folder: &str) -> Result<FolderChange> {
        let folder = checked_folder(folder)?;
        let changed = self.store.get().eligibility().is_excluded_folder(&folder);
        self.store.update(|prev| prev.including(&folder))?;
        info!(folder = %folder, changed, "folder_included");
        Ok(FolderChange { folder, changed })
    }

    /// Whether `path` falls under an exclusion
    pub fn is_excluded(&self, path: &str) -> bool {
        self.store.get().eligibility().is_excluded_path(path)
    }

    /// Eligible notes in host order
    pub fn eligible_notes(&self) -> Result<Vec<Note>> {
        let eligibility = self.store.get().eligibility();
        Ok(self
            .host
            .list_notes()?
            .into_iter()
            .filter(|note| !eligibility.is_excluded_path(&note.path))
            .collect())
    }

    fn present(&mut self, note: Option<Note>) -> Result<Inspection> {
        match note {
            Some(note) => {
                let path = note.path.clone();
                self.store.update(|prev| InspectorState {
                    current: Some(path),
                    ..prev.clone()
                })?;
                Ok(Inspection::Found(note))
            }
            None => Ok(Inspection::NoneFound),
        }
    }
}

fn checked_folder(folder: &str) -> Result<String> {
    let normalized = normalize_path(folder);
    if normalized.is_empty() {
        bail_usage!("the vault root cannot be excluded or included; name a folder");
    }
    Ok(normalized)
}
