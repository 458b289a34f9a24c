use crate::error::{Result, ShowroomError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum number of cars that can be compared side by side.
pub const MAX_COMPARE: usize = 4;

/// What an `add` actually did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Ordered, duplicate-free list of at most [`MAX_COMPARE`] car ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct ComparisonList {
    ids: Vec<u32>,
}

impl From<Vec<u32>> for ComparisonList {
    fn from(ids: Vec<u32>) -> Self {
        Self::from_ids(ids)
    }
}

impl From<ComparisonList> for Vec<u32> {
    fn from(list: ComparisonList) -> Self {
        list.ids
    }
}

impl ComparisonList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from untrusted ids: duplicates dropped, first
    /// [`MAX_COMPARE`] kept.
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        let mut list = Self::new();
        for id in ids {
            if list.ids.len() == MAX_COMPARE {
                break;
            }
            if !list.contains(id) {
                list.ids.push(id);
            }
        }
        list
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn add(&mut self, id: u32) -> Result<AddOutcome> {
        if self.contains(id) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        if self.is_full() {
            debug!("Comparison list full, rejecting {}", id);
            return Err(ShowroomError::ComparisonFull { max: MAX_COMPARE });
        }
        self.ids.push(id);
        Ok(AddOutcome::Added)
    }

    /// Add `id` while viewing `current`. The viewed car is inserted first
    /// when absent, but only if that still leaves room for `id`. The
    /// requested car is never displaced by the viewed one.
    pub fn add_with_current(&mut self, id: u32, current: u32) -> Result<AddOutcome> {
        if id == current {
            return self.add(id);
        }
        if !self.contains(id) && self.is_full() {
            debug!("Comparison list full, rejecting {}", id);
            return Err(ShowroomError::ComparisonFull { max: MAX_COMPARE });
        }

        let slots_needed = usize::from(!self.contains(id)) + usize::from(!self.contains(current));
        if !self.contains(current) && self.len() + slots_needed <= MAX_COMPARE {
            self.ids.push(current);
        }
        self.add(id)
    }

    /// Remove `id`; returns whether it was present.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&existing| existing != id);
        before != self.ids.len()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
