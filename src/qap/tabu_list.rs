//! Short-term memory of recently applied swaps.

use super::types::{Action, FACILITIES};
use crate::matrix::{FixedMatrix, MatrixError};

/// Default number of moves a swap stays forbidden.
pub const DEFAULT_TABU_TENURE: u32 = 12;

/// Forbid counters keyed by facility pair.
///
/// Only the strict upper triangle is used: the counter for a swap of `a`
/// and `b` lives at `(min(a, b), max(a, b))`. A non-zero counter forbids
/// the swap. Actions naming a facility outside `0..FACILITIES` are
/// rejected with [`MatrixError::OutOfBounds`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuList {
    counters: FixedMatrix<u32, FACILITIES, FACILITIES>,
    tenure: u32,
}

impl TabuList {
    pub fn new(tenure: u32) -> Self {
        Self {
            counters: FixedMatrix::new(),
            tenure,
        }
    }

    pub fn tenure(&self) -> u32 {
        self.tenure
    }

    /// Remaining forbidden moves for `action`.
    pub fn counter(&self, action: Action) -> Result<u32, MatrixError> {
        let (i, j) = action.key();
        self.counters.at(i, j).copied()
    }

    pub fn is_forbidden(&self, action: Action) -> Result<bool, MatrixError> {
        Ok(self.counter(action)? > 0)
    }

    /// Decays every counter by one, then arms `action` with the full tenure.
    ///
    /// An out-of-range action leaves the list untouched.
    pub fn register_move(&mut self, action: Action) -> Result<(), MatrixError> {
        let (low, high) = action.key();
        self.counters.at(low, high)?;
        debug_assert!(low < high);
        for j in 0..FACILITIES {
            for i in 0..j {
                let c = &mut self.counters[(i, j)];
                *c = c.saturating_sub(1);
            }
        }
        self.counters[(low, high)] = self.tenure;
        Ok(())
    }

    /// Number of currently forbidden swaps.
    pub fn active_moves(&self) -> usize {
        (0..FACILITIES)
            .flat_map(|j| (0..j).map(move |i| (i, j)))
            .filter(|&pos| self.counters[pos] > 0)
            .count()
    }
}

impl Default for TabuList {
    fn default() -> Self {
        Self::new(DEFAULT_TABU_TENURE)
    }
}
