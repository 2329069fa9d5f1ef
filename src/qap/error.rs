//! Error types for the QAP solver.

use thiserror::Error;

use super::types::FacilityId;
use crate::matrix::MatrixError;

/// Errors raised while building or running a [`QapSolver`](super::QapSolver).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QapError {
    /// The initial assignment is not a permutation of the facility ids.
    #[error("initial assignment must hold every facility id exactly once")]
    InvalidAssignment,

    /// The allowed percent error lies outside `[0, 1]`.
    #[error("allowed percent error must be in [0, 1], got {0}")]
    InvalidErrorBound(f64),

    /// A configuration value that cannot drive a search.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The flow matrix is not symmetric or holds a negative weight.
    #[error("invalid flow matrix: {0}")]
    InvalidFlowMatrix(String),

    /// A facility expected in an assignment could not be located.
    ///
    /// Only reachable through a defect in move application.
    #[error("facility {facility} is missing from the assignment")]
    InternalLookupFailure { facility: FacilityId },

    /// Bounds failure from matrix access.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Result type alias for QAP operations.
pub type Result<T> = std::result::Result<T, QapError>;
