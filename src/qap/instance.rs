//! Problem instances.
//!
//! The bundled reference instance is `nug20` from QAPLIB (Nugent, Vollmann
//! and Ruml, 1968): twenty facilities on a 4×5 grid with Manhattan
//! distances. Its proven optimum is 2570.

use super::error::{QapError, Result};
use super::types::{Cost, FlowMatrix, FACILITIES};

/// Best known (and proven optimal) cost of `nug20`.
pub const NUG20_OPTIMAL_COST: Cost = 2570;

#[rustfmt::skip]
const NUG20_FLOWS: [[Cost; FACILITIES]; FACILITIES] = [
    [ 0,  0,  5,  0,  5,  2, 10,  3,  1,  5,  5,  5,  0,  0,  5,  4,  4,  0,  0,  1],
    [ 0,  0,  3, 10,  5,  1,  5,  1,  2,  4,  2,  5,  0, 10, 10,  3,  0,  5, 10,  5],
    [ 5,  3,  0,  2,  0,  5,  2,  4,  4,  5,  0,  0,  0,  5,  1,  0,  0,  5,  0,  0],
    [ 0, 10,  2,  0,  1,  0,  5,  2,  1,  0, 10,  2,  2,  0,  2,  1,  5,  2,  5,  5],
    [ 5,  5,  0,  1,  0,  5,  6,  5,  2,  5,  2,  0,  5,  1,  1,  1,  5,  2,  5,  1],
    [ 2,  1,  5,  0,  5,  0,  5,  2,  1,  6,  0,  0, 10,  0,  2,  0,  1,  0,  1,  5],
    [10,  5,  2,  5,  6,  5,  0,  0,  0,  0,  5, 10,  2,  2,  5,  1,  2,  1,  0, 10],
    [ 3,  1,  4,  2,  5,  2,  0,  0,  1,  1, 10, 10,  2,  0, 10,  2,  5,  2,  2, 10],
    [ 1,  2,  4,  1,  2,  1,  0,  1,  0,  2,  0,  3,  5,  5,  0,  5,  0,  0,  0,  2],
    [ 5,  4,  5,  0,  5,  6,  0,  1,  2,  0,  5,  5,  0,  5,  1,  0,  0,  5,  5,  2],
    [ 5,  2,  0, 10,  2,  0,  5, 10,  0,  5,  0,  5,  2,  5,  1, 10,  0,  2,  2,  5],
    [ 5,  5,  0,  2,  0,  0, 10, 10,  3,  5,  5,  0,  2, 10,  5,  0,  1,  1,  2,  5],
    [ 0,  0,  0,  2,  5, 10,  2,  2,  5,  0,  2,  2,  0,  2,  2,  1,  0,  0,  0,  5],
    [ 0, 10,  5,  0,  1,  0,  2,  0,  5,  5,  5, 10,  2,  0,  5,  5,  1,  5,  5,  0],
    [ 5, 10,  1,  2,  1,  2,  5, 10,  0,  1,  1,  5,  2,  5,  0,  3,  0,  5, 10, 10],
    [ 4,  3,  0,  1,  1,  0,  1,  2,  5,  0, 10,  0,  1,  5,  3,  0,  0,  0,  2,  0],
    [ 4,  0,  0,  5,  5,  1,  2,  5,  0,  0,  0,  1,  0,  1,  0,  0,  0,  5,  2,  0],
    [ 0,  5,  5,  2,  2,  0,  1,  2,  0,  5,  2,  1,  0,  5,  5,  0,  5,  0,  1,  1],
    [ 0, 10,  0,  5,  5,  1,  0,  2,  0,  5,  2,  2,  0,  5, 10,  2,  2,  1,  0,  6],
    [ 1,  5,  0,  5,  1,  5, 10, 10,  2,  2,  5,  5,  5,  0, 10,  0,  0,  1,  6,  0],
];

/// Flow weights plus the known optimal cost used for the stopping threshold.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QapInstance {
    flows: FlowMatrix,
    optimal_cost: Cost,
}

impl QapInstance {
    /// Validates and wraps a flow matrix.
    ///
    /// The matrix must be symmetric with non-negative weights.
    pub fn new(flows: FlowMatrix, optimal_cost: Cost) -> Result<Self> {
        if !flows.is_symmetric() {
            return Err(QapError::InvalidFlowMatrix(
                "flow matrix must be symmetric".into(),
            ));
        }
        if let Some(w) = flows.iter().find(|&&w| w < 0) {
            return Err(QapError::InvalidFlowMatrix(format!(
                "flow weights must be non-negative, got {w}"
            )));
        }
        Ok(Self {
            flows,
            optimal_cost,
        })
    }

    /// The QAPLIB `nug20` instance.
    pub fn nug20() -> Self {
        Self {
            flows: FlowMatrix::from_rows(NUG20_FLOWS),
            optimal_cost: NUG20_OPTIMAL_COST,
        }
    }

    /// Flow weights between facilities.
    pub fn flows(&self) -> &FlowMatrix {
        &self.flows
    }

    /// Known optimal cost.
    pub fn optimal_cost(&self) -> Cost {
        self.optimal_cost
    }
}

impl Default for QapInstance {
    fn default() -> Self {
        Self::nug20()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nug20_passes_validation() {
        let nug = QapInstance::nug20();
        let checked = QapInstance::new(*nug.flows(), nug.optimal_cost()).unwrap();
        assert_eq!(checked, nug);
        assert_eq!(nug.optimal_cost(), 2570);
    }

    #[test]
    fn test_nug20_has_zero_diagonal() {
        let nug = QapInstance::nug20();
        assert!((0..FACILITIES).all(|i| nug.flows()[(i, i)] == 0));
    }

    #[test]
    fn test_rejects_asymmetric_flows() {
        let mut flows = *QapInstance::nug20().flows();
        flows[(0, 1)] = 9;
        assert!(matches!(
            QapInstance::new(flows, 0),
            Err(QapError::InvalidFlowMatrix(_))
        ));
    }

    #[test]
    fn test_rejects_negative_flows() {
        let mut flows = FlowMatrix::new();
        flows[(2, 3)] = -1;
        flows[(3, 2)] = -1;
        assert!(matches!(
            QapInstance::new(flows, 0),
            Err(QapError::InvalidFlowMatrix(_))
        ));
    }
}
