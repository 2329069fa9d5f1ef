//! Const-generic matrix storage.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul};

use thiserror::Error;

/// A `(row, column)` cell coordinate.
pub type Position = (usize, usize);

/// Errors raised by bounds-checked matrix access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The requested cell lies outside the matrix.
    #[error("position ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// A matrix with `R` rows and `C` columns of `T`, stored row-major.
///
/// Both dimensions must be non-zero; this is checked when the type is
/// first instantiated.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedMatrix<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    const NON_EMPTY: () = assert!(R > 0 && C > 0, "matrix dimensions must be non-zero");

    /// Builds a matrix from an array of rows.
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self { data: rows }
    }

    /// Builds a matrix by calling `f(row, col)` for every cell.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::from_rows(std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))))
    }

    /// Builds a matrix with every cell set to `value`.
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_, _| value.clone())
    }

    /// A matrix with every cell set to `T::default()`.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::from_fn(|_, _| T::default())
    }

    /// Returns `(R, C)`.
    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    /// Bounds-checked shared access to cell `(i, j)`.
    pub fn at(&self, i: usize, j: usize) -> Result<&T, MatrixError> {
        Self::check(i, j)?;
        Ok(&self.data[i][j])
    }

    /// Bounds-checked mutable access to cell `(i, j)`.
    pub fn at_mut(&mut self, i: usize, j: usize) -> Result<&mut T, MatrixError> {
        Self::check(i, j)?;
        Ok(&mut self.data[i][j])
    }

    /// Exchanges the values stored at `a` and `b`.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<(), MatrixError> {
        Self::check(a.0, a.1)?;
        Self::check(b.0, b.1)?;
        if a.0 == b.0 {
            self.data[a.0].swap(a.1, b.1);
        } else {
            let (low, high) = if a.0 < b.0 { (a, b) } else { (b, a) };
            let (top, bottom) = self.data.split_at_mut(high.0);
            std::mem::swap(&mut top[low.0][low.1], &mut bottom[0][high.1]);
        }
        Ok(())
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().flatten()
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T; C]> {
        self.data.iter()
    }

    /// Applies `f` to every cell, producing a matrix of the same shape.
    pub fn map<U, F>(&self, mut f: F) -> FixedMatrix<U, R, C>
    where
        F: FnMut(&T) -> U,
    {
        FixedMatrix::from_fn(|i, j| f(&self.data[i][j]))
    }

    /// Returns true if the matrix is square and equal to its transpose.
    pub fn is_symmetric(&self) -> bool
    where
        T: PartialEq,
    {
        if R != C {
            return false;
        }
        (0..R).all(|i| (0..i).all(|j| self.data[i][j] == self.data[j][i]))
    }

    /// Returns true if no two cells hold equal values.
    pub fn has_unique_entries(&self) -> bool
    where
        T: Ord,
    {
        let mut sorted: Vec<&T> = self.iter().collect();
        sorted.sort_unstable();
        sorted.windows(2).all(|w| w[0] != w[1])
    }

    /// Position of the first cell equal to `value`, scanning row-major.
    pub fn find(&self, value: &T) -> Option<Position>
    where
        T: PartialEq,
    {
        self.iter()
            .position(|v| v == value)
            .map(|index| (index / C, index % C))
    }

    /// Sum of the elementwise products of `self` and `other`.
    pub fn frobenius_inner_product(&self, other: &Self) -> T
    where
        T: Copy + Default + Add<Output = T> + Mul<Output = T>,
    {
        self.iter()
            .zip(other.iter())
            .fold(T::default(), |acc, (&a, &b)| acc + a * b)
    }

    fn check(i: usize, j: usize) -> Result<(), MatrixError> {
        if i < R && j < C {
            Ok(())
        } else {
            Err(MatrixError::OutOfBounds {
                row: i,
                col: j,
                rows: R,
                cols: C,
            })
        }
    }
}

impl<T: Default, const R: usize, const C: usize> Default for FixedMatrix<T, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for FixedMatrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_rows(rows)
    }
}

/// Panicking access for positions that are already known to be valid.
impl<T, const R: usize, const C: usize> Index<Position> for FixedMatrix<T, R, C> {
    type Output = T;

    fn index(&self, (i, j): Position) -> &T {
        &self.data[i][j]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<Position> for FixedMatrix<T, R, C> {
    fn index_mut(&mut self, (i, j): Position) -> &mut T {
        &mut self.data[i][j]
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for row in &self.data {
            write!(f, "{{")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f, "}}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, const R: usize, const C: usize> serde::Serialize
    for FixedMatrix<T, R, C>
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(R))?;
        for row in &self.data {
            seq.serialize_element(&row[..])?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const R: usize, const C: usize> serde::Deserialize<'de> for FixedMatrix<T, R, C>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let rows: Vec<Vec<T>> = Vec::deserialize(deserializer)?;
        if rows.len() != R {
            return Err(D::Error::invalid_length(rows.len(), &"R rows"));
        }
        let mut collected = Vec::with_capacity(R);
        for row in rows {
            let len = row.len();
            let row: [T; C] = row
                .try_into()
                .map_err(|_| D::Error::invalid_length(len, &"C columns"))?;
            collected.push(row);
        }
        let data: [[T; C]; R] = collected
            .try_into()
            .map_err(|_| D::Error::custom("row count changed during conversion"))?;
        Ok(Self::from_rows(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_shape() {
        let m = FixedMatrix::<i32, 20, 20>::new();
        assert_eq!(m.shape(), (20, 20));
        let r = FixedMatrix::<i32, 4, 5>::new();
        assert_eq!(r.shape(), (4, 5));
    }

    #[test]
    fn test_at() {
        let m = FixedMatrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.at(0, 0), Ok(&1));
        assert_eq!(m.at(0, 1), Ok(&2));
        assert_eq!(m.at(1, 0), Ok(&3));
        assert_eq!(m.at(1, 1), Ok(&4));
    }

    #[test]
    fn test_at_out_of_bounds() {
        let mut m = FixedMatrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(
            m.at(2, 0),
            Err(MatrixError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert!(m.at(0, 3).is_err());
        assert!(m.at_mut(5, 5).is_err());
    }

    #[test]
    fn test_at_mut_writes() {
        let mut m = FixedMatrix::<i32, 2, 2>::new();
        *m.at_mut(1, 0).unwrap() = 7;
        assert_eq!(m[(1, 0)], 7);
        assert_eq!(m[(0, 1)], 0);
    }

    #[test]
    fn test_symmetric() {
        let clean = FixedMatrix::from_rows([[1, 2, 3], [2, 1, 4], [3, 4, 1]]);
        assert!(clean.is_symmetric());

        let rect = FixedMatrix::from_rows([[1, 2, 3], [2, 1, 4], [3, 4, 1], [1, 2, 3]]);
        assert!(!rect.is_symmetric());

        let non_sym = FixedMatrix::from_rows([[1, 2, 10], [2, 1, 4], [3, 4, 1]]);
        assert!(!non_sym.is_symmetric());
    }

    #[test]
    fn test_unique() {
        let unique = FixedMatrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert!(unique.has_unique_entries());

        let zeros = FixedMatrix::<i32, 20, 20>::new();
        assert!(!zeros.has_unique_entries());

        let repeated = FixedMatrix::from_rows([[1, 2, 3], [4, 2, 6]]);
        assert!(!repeated.has_unique_entries());
    }

    #[test]
    fn test_unique_is_order_independent() {
        let scrambled = FixedMatrix::from_rows([[6, 1, 4], [3, 5, 2]]);
        assert!(scrambled.has_unique_entries());
    }

    #[test]
    fn test_find() {
        let m = FixedMatrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        for value in 1..=9 {
            let expected = ((value - 1) as usize / 3, (value - 1) as usize % 3);
            assert_eq!(m.find(&value), Some(expected));
        }
        assert_eq!(m.find(&10), None);
    }

    #[test]
    fn test_find_returns_first_occurrence() {
        let m = FixedMatrix::from_rows([[0, 7], [7, 0]]);
        assert_eq!(m.find(&7), Some((0, 1)));
    }

    #[test]
    fn test_swap_same_row_and_across_rows() {
        let mut m = FixedMatrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        m.swap((0, 0), (0, 2)).unwrap();
        assert_eq!(m, FixedMatrix::from_rows([[3, 2, 1], [4, 5, 6]]));

        m.swap((1, 1), (0, 1)).unwrap();
        assert_eq!(m, FixedMatrix::from_rows([[3, 5, 1], [4, 2, 6]]));

        m.swap((1, 2), (1, 2)).unwrap();
        assert_eq!(m, FixedMatrix::from_rows([[3, 5, 1], [4, 2, 6]]));
    }

    #[test]
    fn test_swap_out_of_bounds_leaves_matrix_untouched() {
        let mut m = FixedMatrix::from_rows([[1, 2], [3, 4]]);
        assert!(m.swap((0, 0), (2, 0)).is_err());
        assert_eq!(m, FixedMatrix::from_rows([[1, 2], [3, 4]]));
    }

    #[test]
    fn test_frobenius_inner_product() {
        let a = FixedMatrix::from_rows([[1, 2], [3, 4]]);
        let b = FixedMatrix::from_rows([[5, 6], [7, 8]]);
        assert_eq!(a.frobenius_inner_product(&b), 5 + 12 + 21 + 32);
    }

    #[test]
    fn test_equality() {
        let a = FixedMatrix::from_rows([[1, 2], [3, 4]]);
        let b = FixedMatrix::from_rows([[1, 2], [3, 4]]);
        let c = FixedMatrix::from_rows([[1, 2], [4, 3]]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let m = FixedMatrix::from_rows([[0, 1, 2], [3, 4, 5]]);
        assert_eq!(m.to_string(), "{\n{0 1 2}\n{3 4 5}\n}");
    }

    #[test]
    fn test_map_and_filled() {
        let m = FixedMatrix::<u8, 2, 3>::filled(3);
        let doubled = m.map(|&v| u32::from(v) * 2);
        assert!(doubled.iter().all(|&v| v == 6));
        assert_eq!(doubled.rows().count(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_and_shape_check() {
        let m = FixedMatrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1,2,3],[4,5,6]]");
        let back: FixedMatrix<i32, 2, 3> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        assert!(serde_json::from_str::<FixedMatrix<i32, 3, 2>>(&json).is_err());
        assert!(serde_json::from_str::<FixedMatrix<i32, 2, 2>>(&json).is_err());
    }

    fn square() -> impl Strategy<Value = FixedMatrix<i64, 3, 3>> {
        proptest::array::uniform3(proptest::array::uniform3(-100i64..100))
            .prop_map(FixedMatrix::from_rows)
    }

    proptest! {
        #[test]
        fn prop_frobenius_is_commutative(a in square(), b in square()) {
            prop_assert_eq!(a.frobenius_inner_product(&b), b.frobenius_inner_product(&a));
        }

        #[test]
        fn prop_frobenius_matches_manual_sum(a in square(), b in square()) {
            let mut manual = 0;
            for i in 0..3 {
                for j in 0..3 {
                    manual += a[(i, j)] * b[(i, j)];
                }
            }
            prop_assert_eq!(a.frobenius_inner_product(&b), manual);
        }

        #[test]
        fn prop_find_locates_stored_value(m in square(), i in 0usize..3, j in 0usize..3) {
            let value = *m.at(i, j).unwrap();
            let found = m.find(&value).unwrap();
            prop_assert_eq!(m[found], value);
        }

        #[test]
        fn prop_find_is_exact_for_permutations(
            perm in Just((0..12u32).collect::<Vec<_>>()).prop_shuffle()
        ) {
            let m = FixedMatrix::<u32, 3, 4>::from_fn(|i, j| perm[i * 4 + j]);
            prop_assert!(m.has_unique_entries());
            for i in 0..3 {
                for j in 0..4 {
                    prop_assert_eq!(m.find(&m[(i, j)]), Some((i, j)));
                }
            }
        }

        #[test]
        fn prop_symmetrized_matrix_is_symmetric(m in square()) {
            let sym = FixedMatrix::<i64, 3, 3>::from_fn(|i, j| m[(i, j)] + m[(j, i)]);
            prop_assert!(sym.is_symmetric());
        }
    }
}
