use std::collections::HashSet;

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::error::{Error, Result};
use crate::models::{CombineMode, MediaStatus, TitleId};

/// Draw one id with uniform probability, or `None` for an empty set.
pub fn pick_random<R: Rng + ?Sized>(ids: &HashSet<TitleId>, rng: &mut R) -> Option<TitleId> {
    ids.iter().copied().choose(rng)
}

/// Combined candidate ids plus the filter context that produced them.
///
/// Owned by a single selection call and dropped after the draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    pub ids: HashSet<TitleId>,
    pub mode: CombineMode,
    pub statuses: Vec<MediaStatus>,
}

impl CandidatePool {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Draw the answer using the thread-local RNG. Every call is independent.
    pub fn pick(&self) -> Result<TitleId> {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Draw the answer from a caller-supplied RNG.
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TitleId> {
        pick_random(&self.ids, rng)
            .ok_or_else(|| Error::EmptyPool { mode: self.mode, statuses: self.statuses.clone() })
    }
}
