//! Compile-time index sequences.
//!
//! The tables in this module wire flat, row-major storage to the rows,
//! columns and dot products that the matrix operations need. Every table is
//! produced by a `const fn`; the ones stored in associated constants are
//! evaluated once per distinct shape while compiling.

/// Index table wiring the output of an `R x M` by `M x P` matrix product.
///
/// Entry `[r][c]` of [`MulIdxs::PAIRS`] is the `(row, col)` pair whose dot
/// product fills output cell `(r, c)`. Read in row-major order, the first
/// components form the left-operand sequence and the second components the
/// right-operand sequence. The inner dimension `M` does not appear: each
/// output cell consumes one full dot product over it.
pub struct MulIdxs<const R: usize, const P: usize>;

impl<const R: usize, const P: usize> MulIdxs<R, P> {
    /// Pairs of `(left row, right column)` for every output cell.
    pub const PAIRS: [[(usize, usize); P]; R] = make_mul_idxs::<R, P>();

    /// Number of dot products in the product.
    pub const LEN: usize = R * P;

    /// Left-operand row index of each output cell, in row-major order.
    pub fn lhs() -> impl ExactSizeIterator<Item = usize> + Clone {
        Self::pairs().map(|(x, _)| x)
    }

    /// Right-operand column index of each output cell, in row-major order.
    pub fn rhs() -> impl ExactSizeIterator<Item = usize> + Clone {
        Self::pairs().map(|(_, y)| y)
    }

    fn pairs() -> impl ExactSizeIterator<Item = (usize, usize)> + Clone {
        // Flattening a nested array doesn't keep the exact size, index it instead.
        (0..Self::LEN).map(|k| Self::PAIRS[k / P][k % P])
    }
}

/// Generates the `(row, col)` table for an `R x P` product output.
///
/// Walks `x` from `R - 1` down to `0` and, for each `x`, `y` from `P - 1` down
/// to `0`, placing `(x, y)` in front of everything generated so far. The walk
/// ends on `(0, 0)`, leaving the table in row-major order.
pub const fn make_mul_idxs<const R: usize, const P: usize>() -> [[(usize, usize); P]; R] {
    let mut pairs = [[(0, 0); P]; R];
    // A 1x1 product is the base case: the single pair (0, 0).
    if R * P <= 1 {
        return pairs;
    }

    let mut x = R;
    while x > 0 {
        x -= 1;
        let mut y = P;
        while y > 0 {
            y -= 1;
            pairs[x][y] = (x, y);
        }
    }

    pairs
}

/// Sequence `offset, offset + 1, ..., offset + N - 1`.
pub const fn shifted_indices<const N: usize>(offset: usize) -> [usize; N] {
    strided_indices::<N>(offset, 1)
}

/// Sequence `offset, offset + stride, ..., offset + (N - 1) * stride`.
pub const fn strided_indices<const N: usize>(offset: usize, stride: usize) -> [usize; N] {
    let mut idxs = [0; N];
    let mut i = 0;
    while i < N {
        idxs[i] = offset + i * stride;
        i += 1;
    }
    idxs
}

/// Flat indices of row `n` in a row-major matrix with `C` columns.
pub const fn row_indices<const C: usize>(n: usize) -> [usize; C] { shifted_indices::<C>(n * C) }

/// Flat indices of column `n` in a row-major matrix with `R` rows and `C`
/// columns.
pub const fn col_indices<const R: usize, const C: usize>(n: usize) -> [usize; R] {
    strided_indices::<R>(n, C)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_idxs_base_case() {
        assert_eq!(MulIdxs::<1, 1>::PAIRS, [[(0, 0)]]);
        assert_eq!(MulIdxs::<1, 1>::lhs().collect::<Vec<_>>(), vec![0]);
        assert_eq!(MulIdxs::<1, 1>::rhs().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn mul_idxs_square() {
        assert_eq!(
            MulIdxs::<3, 3>::lhs().collect::<Vec<_>>(),
            vec![0, 0, 0, 1, 1, 1, 2, 2, 2]
        );
        assert_eq!(
            MulIdxs::<3, 3>::rhs().collect::<Vec<_>>(),
            vec![0, 1, 2, 0, 1, 2, 0, 1, 2]
        );
    }

    #[test]
    fn mul_idxs_rectangular() {
        assert_eq!(
            MulIdxs::<2, 3>::PAIRS,
            [[(0, 0), (0, 1), (0, 2)], [(1, 0), (1, 1), (1, 2)]]
        );
        assert_eq!(MulIdxs::<3, 1>::PAIRS, [[(0, 0)], [(1, 0)], [(2, 0)]]);
        assert_eq!(MulIdxs::<1, 4>::rhs().len(), 4);
        assert_eq!(MulIdxs::<4, 2>::LEN, 8);
    }

    #[test]
    fn mul_idxs_evaluated_in_const_context() {
        const PAIRS: [[(usize, usize); 2]; 2] = make_mul_idxs::<2, 2>();
        assert_eq!(PAIRS, [[(0, 0), (0, 1)], [(1, 0), (1, 1)]]);
    }

    #[test]
    fn projection_indices() {
        const ROW: [usize; 3] = row_indices::<3>(1);
        assert_eq!(ROW, [3, 4, 5]);
        assert_eq!(row_indices::<2>(0), [0, 1]);
        assert_eq!(col_indices::<3, 2>(1), [1, 3, 5]);
        assert_eq!(col_indices::<2, 3>(0), [0, 3]);
        assert_eq!(shifted_indices::<4>(7), [7, 8, 9, 10]);
    }
}
