//! Core QAP types: assignments, matrices and moves.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::matrix::{FixedMatrix, Position};

/// Rows of the facility grid.
pub const GRID_ROWS: usize = 4;
/// Columns of the facility grid.
pub const GRID_COLS: usize = 5;
/// Number of facilities (and grid cells).
pub const FACILITIES: usize = GRID_ROWS * GRID_COLS;

/// Identifier of a facility, in `0..FACILITIES`.
pub type FacilityId = usize;

/// Objective value. Lower is better.
pub type Cost = i64;

/// Facility placed at each grid cell.
pub type Assignment = FixedMatrix<FacilityId, GRID_ROWS, GRID_COLS>;

/// Pairwise flow weights between facilities.
pub type FlowMatrix = FixedMatrix<Cost, FACILITIES, FACILITIES>;

/// Pairwise grid distances between facilities under some assignment.
pub type DistanceMatrix = FixedMatrix<Cost, FACILITIES, FACILITIES>;

/// A swap of two facilities, stored with the smaller id first.
///
/// `Action::new(3, 7)` and `Action::new(7, 3)` are the same move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    low: FacilityId,
    high: FacilityId,
}

impl Action {
    /// Creates the swap of facilities `a` and `b`.
    ///
    /// Ids are not range-checked here; [`TabuList`](super::TabuList) rejects
    /// ids outside `0..FACILITIES`.
    pub const fn new(a: FacilityId, b: FacilityId) -> Self {
        if a < b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The smaller facility id.
    pub const fn low(&self) -> FacilityId {
        self.low
    }

    /// The larger facility id.
    pub const fn high(&self) -> FacilityId {
        self.high
    }

    /// `(low, high)`, the position of this move in a tabu matrix.
    pub const fn key(&self) -> Position {
        (self.low, self.high)
    }
}

/// Returns true if `assignment` holds every id in `0..FACILITIES` exactly once.
pub fn is_valid_assignment(assignment: &Assignment) -> bool {
    assignment.has_unique_entries() && assignment.iter().all(|&id| id < FACILITIES)
}

/// Facility `row * GRID_COLS + col` at every cell.
pub fn row_major_assignment() -> Assignment {
    Assignment::from_fn(|i, j| i * GRID_COLS + j)
}

/// A uniformly shuffled valid assignment.
pub fn random_assignment<R: Rng + ?Sized>(rng: &mut R) -> Assignment {
    let mut ids: Vec<FacilityId> = (0..FACILITIES).collect();
    ids.shuffle(rng);
    Assignment::from_fn(|i, j| ids[i * GRID_COLS + j])
}

/// Manhattan distance between two grid cells.
pub fn manhattan(a: Position, b: Position) -> Cost {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as Cost
}
