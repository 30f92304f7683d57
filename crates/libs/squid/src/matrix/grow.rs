//! Structural growth: adding rows and columns.
//!
//! Every operation returns a new matrix whose grown dimension is a const
//! parameter of the call. The parameter is usually inferred from the binding
//! the result is stored in; it is checked at compile time against the old
//! dimension, so growing by anything but the right amount does not build:
//!
//! ```compile_fail
//! use squid::{Matrix, Vector};
//! let m = Matrix::new([[1, 2], [3, 4]]);
//! let grown: Matrix<i32, 4, 2> = m.append_row(Vector::new([5, 6]));
//! ```

use crate::{matrix::Matrix, vector::Vector};
use std::array;

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns a matrix with `row` placed after all existing rows.
    ///
    /// `R1` must be `R + 1`.
    pub fn append_row<const R1: usize>(&self, row: Vector<T, C>) -> Matrix<T, R1, C> {
        const { assert!(R1 == R + 1, "append_row must add exactly one row") };
        Matrix::from_row_vectors(array::from_fn(|k| if k < R { self.row_at(k) } else { row }))
    }

    /// Returns a matrix with `row` placed before all existing rows.
    ///
    /// `R1` must be `R + 1`.
    pub fn push_row<const R1: usize>(&self, row: Vector<T, C>) -> Matrix<T, R1, C> {
        const { assert!(R1 == R + 1, "push_row must add exactly one row") };
        Matrix::from_row_vectors(array::from_fn(|k| if k == 0 { row } else { self.row_at(k - 1) }))
    }

    /// Returns a matrix with `col` inserted as the new first column.
    ///
    /// Each row `i` becomes `[col[i], row_i[0], ..., row_i[C - 1]]`; rows keep
    /// their top-to-bottom order. `C1` must be `C + 1`.
    pub fn push_col<const C1: usize>(&self, col: Vector<T, R>) -> Matrix<T, R, C1> {
        const { assert!(C1 == C + 1, "push_col must add exactly one column") };
        Matrix::from_row_vectors(array::from_fn(|i| self.row_at(i).push(col[i])))
    }

    /// Returns a matrix with `col` placed after all existing columns.
    ///
    /// `C1` must be `C + 1`.
    pub fn append_col<const C1: usize>(&self, col: Vector<T, R>) -> Matrix<T, R, C1> {
        const { assert!(C1 == C + 1, "append_col must add exactly one column") };
        Matrix::from_row_vectors(array::from_fn(|i| self.row_at(i).append(col[i])))
    }

    /// Stacks the rows of `other` below the rows of `self`.
    ///
    /// `R2` must be `R + R1`.
    pub fn concat_rows<const R1: usize, const R2: usize>(
        &self,
        other: &Matrix<T, R1, C>,
    ) -> Matrix<T, R2, C> {
        const { assert!(R2 == R + R1, "concat_rows must add exactly the rows of both operands") };
        Matrix::from_row_vectors(array::from_fn(|k| {
            if k < R {
                self.row_at(k)
            } else {
                other.row_at(k - R)
            }
        }))
    }
}
