//! Random sampling without replacement
//!
//! A cycle is a shuffled queue of every eligible note. Each draw pops the
//! head; paths that no longer resolve are dropped on the way. An exhausted
//! queue is reshuffled from the live note list, at most once per draw.

use rand::Rng;
use tracing::trace;

use crate::eligibility::FileEligibility;
use crate::error::Result;
use crate::vault::{Note, NoteHost};

/// Fisher-Yates shuffle in place
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Outcome of one draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// The selected note, `None` when nothing eligible exists
    pub note: Option<Note>,
    /// Stale paths dropped from the queue
    pub discarded: usize,
    /// Fresh shuffles performed during this draw
    pub reshuffles: usize,
}

/// Draws notes from one host under one exclusion set
pub struct Sampler<'a, H: NoteHost> {
    host: &'a H,
    eligibility: &'a FileEligibility,
}

impl<'a, H: NoteHost> Sampler<'a, H> {
    pub fn new(host: &'a H, eligibility: &'a FileEligibility) -> Self {
        Self { host, eligibility }
    }

    /// Eligible note paths in host order, recomputed on every call
    pub fn universe(&self) -> Result<Vec<String>> {
        let paths = self.host.list_notes()?.into_iter().map(|n| n.path);
        Ok(self.eligibility.filter_eligible(paths))
    }

    /// A fresh random permutation of the eligible universe
    pub fn shuffled_universe<R: Rng>(&self, rng: &mut R) -> Result<Vec<String>> {
        let mut paths = self.universe()?;
        shuffle(&mut paths, rng);
        Ok(paths)
    }

    /// Draw the next note of the cycle.
    ///
    /// `persist` receives every queue the caller must save, together with
    /// whether it starts a new cycle. On success it has already been called
    /// with the remaining queue before this returns.
    pub fn draw_next<R, F>(&self, queue: &[String], rng: &mut R, mut persist: F) -> Result<Draw>
    where
        R: Rng,
        F: FnMut(&[String], bool) -> Result<()>,
    {
        let mut draw = Draw {
            note: None,
            discarded: 0,
            reshuffles: 0,
        };

        let mut queue = queue.to_vec();
        if queue.is_empty() {
            queue = self.shuffled_universe(rng)?;
            draw.reshuffles += 1;
            persist(&queue, true)?;
        }

        if queue.is_empty() {
            return Ok(draw);
        }

        if let Some(note) = self.take_first_valid(&queue, false, &mut draw, &mut persist)? {
            draw.note = Some(note);
            return Ok(draw);
        }

        // Everything queued was stale: one retry over the live vault
        let refreshed = self.shuffled_universe(rng)?;
        draw.reshuffles += 1;
        if refreshed.is_empty() {
            return Ok(draw);
        }

        draw.note = self.take_first_valid(&refreshed, true, &mut draw, &mut persist)?;
        Ok(draw)
    }

    fn take_first_valid<F>(
        &self,
        queue: &[String],
        new_cycle: bool,
        draw: &mut Draw,
        persist: &mut F,
    ) -> Result<Option<Note>>
    where
        F: FnMut(&[String], bool) -> Result<()>,
    {
        for (index, path) in queue.iter().enumerate() {
            match self.host.resolve(path)? {
                Some(note) => {
                    persist(&queue[index + 1..], new_cycle)?;
                    return Ok(Some(note));
                }
                None => {
                    trace!(path = %path, "dropping stale queued path");
                    draw.discarded += 1;
                }
            }
        }

        persist(&[], false)?;
        Ok(None)
    }
}
