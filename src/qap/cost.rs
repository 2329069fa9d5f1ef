//! Assignment cost: flow-weighted Manhattan distance over all facility pairs.

use super::error::{QapError, Result};
use super::types::{manhattan, Assignment, Cost, DistanceMatrix, FlowMatrix, FACILITIES};
use crate::matrix::Position;

/// Scores assignments against a fixed flow matrix.
///
/// The cost of an assignment is the Frobenius inner product of its
/// distance matrix and the flow matrix. Both are symmetric with a zero
/// diagonal, so every pair contributes twice and the result is even.
#[derive(Debug, Clone)]
pub struct CostEvaluator {
    flows: FlowMatrix,
}

impl CostEvaluator {
    pub fn new(flows: FlowMatrix) -> Self {
        Self { flows }
    }

    pub fn flows(&self) -> &FlowMatrix {
        &self.flows
    }

    /// Grid distance between every pair of facilities under `assignment`.
    pub fn distance_matrix(&self, assignment: &Assignment) -> Result<DistanceMatrix> {
        let mut located = [(0, 0); FACILITIES];
        for (facility, slot) in located.iter_mut().enumerate() {
            *slot = locate(assignment, facility)?;
        }

        let mut distances = DistanceMatrix::new();
        for i in 0..FACILITIES {
            for j in 0..i {
                let d = manhattan(located[i], located[j]);
                distances[(i, j)] = d;
                distances[(j, i)] = d;
            }
        }
        for i in 0..FACILITIES {
            distances[(i, i)] = 0;
        }
        debug_assert!(distances.is_symmetric());
        Ok(distances)
    }

    /// Cost of `assignment`.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<Cost> {
        let distances = self.distance_matrix(assignment)?;
        let cost = distances.frobenius_inner_product(&self.flows);
        debug_assert!(cost % 2 == 0, "cost {cost} must be even");
        Ok(cost)
    }
}

pub(super) fn locate(assignment: &Assignment, facility: usize) -> Result<Position> {
    assignment
        .find(&facility)
        .ok_or(QapError::InternalLookupFailure { facility })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qap::instance::QapInstance;
    use crate::qap::types::{random_assignment, row_major_assignment};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn evaluator() -> CostEvaluator {
        CostEvaluator::new(*QapInstance::nug20().flows())
    }

    #[test]
    fn test_row_major_cost_matches_reference() {
        assert_eq!(evaluator().evaluate(&row_major_assignment()).unwrap(), 3444);
    }

    #[test]
    fn test_distance_matrix_shape() {
        let d = evaluator().distance_matrix(&row_major_assignment()).unwrap();
        assert!(d.is_symmetric());
        assert!((0..FACILITIES).all(|i| d[(i, i)] == 0));
        // facility 0 at (0, 0), facility 19 at (3, 4)
        assert_eq!(d[(0, 19)], 7);
        assert_eq!(d[(6, 7)], 1);
    }

    #[test]
    fn test_missing_facility_is_reported() {
        let mut broken = row_major_assignment();
        broken[(2, 2)] = 3;
        assert_eq!(
            evaluator().evaluate(&broken),
            Err(QapError::InternalLookupFailure { facility: 12 })
        );
    }

    #[test]
    fn test_zero_flows_cost_nothing() {
        let zero = CostEvaluator::new(FlowMatrix::new());
        assert_eq!(zero.evaluate(&row_major_assignment()).unwrap(), 0);
    }

    #[test]
    fn test_single_pair_counted_twice() {
        let mut flows = FlowMatrix::new();
        flows[(0, 19)] = 3;
        flows[(19, 0)] = 3;
        let eval = CostEvaluator::new(flows);
        assert_eq!(eval.evaluate(&row_major_assignment()).unwrap(), 2 * 3 * 7);
    }

    proptest! {
        #[test]
        fn prop_cost_is_pure_and_even(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let assignment = random_assignment(&mut rng);
            let eval = evaluator();
            let first = eval.evaluate(&assignment).unwrap();
            let second = eval.evaluate(&assignment).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(first % 2, 0);
            prop_assert!(first >= 0);
        }
    }
}
