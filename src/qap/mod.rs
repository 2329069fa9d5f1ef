//! Tabu Search for the Quadratic Assignment Problem (QAP).
//!
//! Twenty facilities are placed on the cells of a 4×5 grid. The cost of a
//! placement is the sum, over every facility pair, of their flow weight
//! times their Manhattan distance on the grid. The search walks the swap
//! neighborhood (all 190 facility pairs), forbidding recently applied
//! swaps for a fixed tenure so that it can climb out of local optima.
//!
//! # References
//!
//! - Koopmans, T. C. & Beckmann, M. (1957). "Assignment Problems and the
//!   Location of Economic Activities", *Econometrica* 25(1), 53-76.
//! - Nugent, C. E., Vollmann, T. E. & Ruml, J. (1968). "An Experimental
//!   Comparison of Techniques for the Assignment of Facilities to
//!   Locations", *Operations Research* 16(1), 150-173.
//! - Taillard, E. (1991). "Robust taboo search for the quadratic assignment
//!   problem", *Parallel Computing* 17, 443-455.

mod combinations;
mod config;
mod cost;
mod error;
mod instance;
mod runner;
mod tabu_list;
mod types;

pub use combinations::{combinations, COMBINATIONS, COMBINATION_COUNT};
pub use config::QapConfig;
pub use cost::CostEvaluator;
pub use error::{QapError, Result};
pub use instance::{QapInstance, NUG20_OPTIMAL_COST};
pub use runner::{Progress, QapResult, QapSolver, SolverState, Step, StopReason};
pub use tabu_list::{TabuList, DEFAULT_TABU_TENURE};
pub use types::{
    is_valid_assignment, manhattan, random_assignment, row_major_assignment, Action, Assignment,
    Cost, DistanceMatrix, FacilityId, FlowMatrix, FACILITIES, GRID_COLS, GRID_ROWS,
};
