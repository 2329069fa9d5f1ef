//! Fixed-dimension matrices.
//!
//! [`FixedMatrix`] stores `R × C` cells inline with both dimensions fixed
//! by const generics, so a shape mismatch between two matrices is a type
//! error rather than a runtime failure. Indices supplied at runtime are
//! still bounds-checked through [`FixedMatrix::at`] and friends.
//!
//! # Examples
//!
//! ```
//! use u_qap::matrix::FixedMatrix;
//!
//! let m = FixedMatrix::from_rows([[1, 2], [2, 1]]);
//! assert!(m.is_symmetric());
//! assert_eq!(m.find(&2), Some((0, 1)));
//! assert_eq!(m.frobenius_inner_product(&m), 10);
//! ```

mod fixed;

pub use fixed::{FixedMatrix, MatrixError, Position};
