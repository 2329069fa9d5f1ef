//! Tabu Search for the Quadratic Assignment Problem.
//!
//! Provides the pieces of a deterministic QAP search engine:
//!
//! - **Matrix**: const-generic fixed-size matrices with bounds-checked
//!   access, symmetry and uniqueness tests, lookup and the Frobenius inner
//!   product.
//! - **QAP**: facility assignments on a 4×5 grid, the swap neighborhood,
//!   the flow × distance cost function, a decaying tabu list and the
//!   [`QapSolver`](qap::QapSolver) loop with its stopping rules.
//! - **Math**: compile-time binomial coefficients.
//!
//! # Examples
//!
//! ```
//! use u_qap::qap::{row_major_assignment, QapSolver};
//!
//! let mut solver = QapSolver::nug20(row_major_assignment(), 0.1).unwrap();
//! let (best, cost) = solver.solve().unwrap().into_pair();
//! assert!(cost < 3444);
//! assert!(best.has_unique_entries());
//! ```

pub mod math;
pub mod matrix;
pub mod qap;
