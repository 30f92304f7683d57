//! Row and column traversals.

use crate::{matrix::Matrix, vector::Vector};
use std::{array, iter::FusedIterator};

/// Generates a traversal over one axis of a matrix.
///
/// `$count` is the number of lines along the axis, `$len` the length of each
/// line, `$project` the projection yielding a line and `$rebuild` the
/// constructor reassembling a matrix from all of its lines.
macro_rules! impl_line_traversal {
    ($(#[$doc:meta])* $name:ident, $count:ident, $len:ident, $project:ident, $rebuild:ident) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name<'a, T, const R: usize, const C: usize> {
            mat: &'a Matrix<T, R, C>,
            /// Position of the cursor, in `[0, end]`.
            idx: usize,
            /// One past the last line still to be yielded.
            end: usize,
        }

        impl<'a, T, const R: usize, const C: usize> $name<'a, T, R, C> {
            pub(crate) fn new(mat: &'a Matrix<T, R, C>) -> Self { Self { mat, idx: 0, end: $count } }

            /// Returns the current cursor position; it equals the number of
            /// lines along the axis once the traversal is exhausted.
            pub fn position(&self) -> usize { self.idx }
        }

        impl<'a, T: Copy, const R: usize, const C: usize> $name<'a, T, R, C> {
            /// Applies `f` to every line of the matrix, in ascending order, and
            /// reassembles the results into a new matrix of the same shape.
            ///
            /// This is eager and always covers the whole matrix, regardless of
            /// how far the traversal has advanced.
            pub fn map<U, F>(self, mut f: F) -> Matrix<U, R, C>
            where
                U: Copy,
                F: FnMut(Vector<T, $len>) -> Vector<U, $len>,
            {
                Matrix::$rebuild(array::from_fn(|i| f(self.mat.$project(i))))
            }
        }

        impl<'a, T, const R: usize, const C: usize> Clone for $name<'a, T, R, C> {
            fn clone(&self) -> Self { *self }
        }

        impl<'a, T, const R: usize, const C: usize> Copy for $name<'a, T, R, C> {}

        /// Two traversals are equal when their cursors are at the same position.
        impl<'a, T, const R: usize, const C: usize> PartialEq for $name<'a, T, R, C> {
            fn eq(&self, other: &Self) -> bool { self.idx == other.idx }
        }

        impl<'a, T, const R: usize, const C: usize> Eq for $name<'a, T, R, C> {}

        impl<'a, T: Copy, const R: usize, const C: usize> Iterator for $name<'a, T, R, C> {
            type Item = Vector<T, $len>;

            fn next(&mut self) -> Option<Self::Item> {
                if self.idx < self.end {
                    let line = self.mat.$project(self.idx);
                    self.idx += 1;
                    Some(line)
                } else {
                    None
                }
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let remaining = self.end - self.idx;
                (remaining, Some(remaining))
            }
        }

        impl<'a, T: Copy, const R: usize, const C: usize> DoubleEndedIterator for $name<'a, T, R, C> {
            fn next_back(&mut self) -> Option<Self::Item> {
                if self.idx < self.end {
                    self.end -= 1;
                    Some(self.mat.$project(self.end))
                } else {
                    None
                }
            }
        }

        impl<'a, T: Copy, const R: usize, const C: usize> ExactSizeIterator for $name<'a, T, R, C> {}

        impl<'a, T: Copy, const R: usize, const C: usize> FusedIterator for $name<'a, T, R, C> {}
    };
}

impl_line_traversal!(
    /// Traversal over the rows of a matrix, yielding each row as a
    /// [`Vector`] of length `C`.
    Rows, R, C, row_at, from_row_vectors
);

impl_line_traversal!(
    /// Traversal over the columns of a matrix, yielding each column as a
    /// [`Vector`] of length `R`.
    Cols, C, R, col_at, from_col_vectors
);
