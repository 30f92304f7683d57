//! Fixed-size matrices.

mod grow;
mod iter;

use crate::{
    error::{Axis, Error, Result},
    seq::{col_indices, row_indices, MulIdxs},
    utils::print_slice,
    vector::Vector,
};
use num_traits::{AsPrimitive, One, Zero};
use std::{
    array,
    fmt::{Display, Formatter, Write},
    ops::{Add, Index, Mul, Neg, Sub},
};

pub use iter::{Cols, Rows};

/// A `R x C` matrix stored inline in row-major order.
///
/// Element `(r, c)` lives at flat index `r * C + c`. Both dimensions are part
/// of the type, so multiplying matrices whose inner dimensions disagree does
/// not compile:
///
/// ```compile_fail
/// use squid::Matrix;
/// let a = Matrix::new([[1, 2], [3, 4]]);
/// let b = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
/// let _ = a * b;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;
    /// Number of columns.
    pub const COLS: usize = C;
    /// Total number of elements.
    pub const LEN: usize = R * C;

    // Evaluated by every constructor.
    const NON_EMPTY: () = assert!(R >= 1 && C >= 1, "a matrix needs at least one row and one column");

    /// Creates a new matrix from its rows.
    ///
    /// Both dimensions must be at least one; an empty shape does not build:
    ///
    /// ```compile_fail
    /// let empty = squid::Matrix::<i32, 0, 3>::new([]);
    /// ```
    pub const fn new(rows: [[T; C]; R]) -> Self {
        let () = Self::NON_EMPTY;
        Self(rows)
    }

    /// Creates a matrix whose rows are exactly the given vectors, in order.
    pub fn from_row_vectors(rows: [Vector<T, C>; R]) -> Self {
        let () = Self::NON_EMPTY;
        Self(rows.map(Vector::into_array))
    }

    /// Creates a matrix by calling `f(row, col)` for every element in
    /// row-major order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let () = Self::NON_EMPTY;
        Self(array::from_fn(|r| array::from_fn(|c| f(r, c))))
    }

    /// Returns `(rows, cols)`.
    pub const fn shape(&self) -> (usize, usize) { (R, C) }

    /// Returns the rows of the matrix as nested arrays.
    pub const fn as_rows(&self) -> &[[T; C]; R] { &self.0 }

    /// Returns the row-major flat storage.
    pub fn as_flat(&self) -> &[T] { self.0.as_flattened() }

    /// Consumes the matrix, returning its rows.
    pub fn into_rows(self) -> [[T; C]; R] { self.0 }

    /// Applies `f` to every element in row-major order.
    pub fn map<U, F>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Returns a traversal over the rows, each yielded as a [`Vector`].
    pub fn rows(&self) -> Rows<'_, T, R, C> { Rows::new(self) }

    /// Returns a traversal over the columns, each yielded as a [`Vector`].
    pub fn cols(&self) -> Cols<'_, T, R, C> { Cols::new(self) }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix from its row-major flat storage.
    ///
    /// `N` must equal `R * C`; any other length is rejected at compile time.
    ///
    /// ```compile_fail
    /// let m: squid::Matrix<i32, 2, 2> = squid::Matrix::from_flat([1, 2, 3]);
    /// ```
    ///
    /// ```compile_fail
    /// let m: squid::Matrix<i32, 3, 0> = squid::Matrix::from_flat([]);
    /// ```
    pub fn from_flat<const N: usize>(data: [T; N]) -> Self {
        const { assert!(N == R * C, "flat storage length must equal rows * cols") };
        let () = Self::NON_EMPTY;
        Self(array::from_fn(|r| row_indices::<C>(r).map(|i| data[i])))
    }

    /// Creates a matrix from a row-major slice, checking its length at
    /// runtime.
    pub fn try_from_slice(slice: &[T]) -> Result<Self> {
        let () = Self::NON_EMPTY;
        if slice.len() != R * C {
            return Err(Error::ShapeMismatch {
                expected: R * C,
                actual: slice.len(),
            });
        }
        Ok(Self(array::from_fn(|r| row_indices::<C>(r).map(|i| slice[i]))))
    }

    /// Creates a matrix whose columns are exactly the given vectors, in
    /// order.
    pub fn from_col_vectors(cols: [Vector<T, R>; C]) -> Self { Self::from_fn(|r, c| cols[c][r]) }

    /// Creates a matrix with every element set to `value`.
    pub fn full(value: T) -> Self { Self::new([[value; C]; R]) }

    /// Creates a matrix of zeros.
    pub fn zeros() -> Self
    where
        T: Zero,
    {
        Self::full(T::zero())
    }

    /// Returns the element at flat row-major index `n`.
    ///
    /// Fails with [`Error::OutOfBounds`] when `n >= R * C`.
    pub fn get(&self, n: usize) -> Result<T> {
        self.as_flat()
            .get(n)
            .copied()
            .ok_or(Error::out_of_bounds(Axis::Element, n, R * C))
    }

    /// Returns the element at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Result<T> {
        if row >= R {
            return Err(Error::out_of_bounds(Axis::Row, row, R));
        }
        if col >= C {
            return Err(Error::out_of_bounds(Axis::Column, col, C));
        }
        Ok(self.0[row][col])
    }

    /// Returns row `n` as a vector.
    ///
    /// Fails with [`Error::OutOfBounds`] when `n >= R`.
    pub fn row(&self, n: usize) -> Result<Vector<T, C>> {
        if n >= R {
            return Err(Error::out_of_bounds(Axis::Row, n, R));
        }
        Ok(self.row_at(n))
    }

    /// Returns column `n` as a vector.
    ///
    /// Fails with [`Error::OutOfBounds`] when `n >= C`.
    pub fn col(&self, n: usize) -> Result<Vector<T, R>> {
        if n >= C {
            return Err(Error::out_of_bounds(Axis::Column, n, C));
        }
        Ok(self.col_at(n))
    }

    /// Row projection; `n` must be in bounds.
    pub(crate) fn row_at(&self, n: usize) -> Vector<T, C> {
        let flat = self.as_flat();
        Vector::new(row_indices::<C>(n).map(|i| flat[i]))
    }

    /// Column projection; `n` must be in bounds.
    pub(crate) fn col_at(&self, n: usize) -> Vector<T, R> {
        let flat = self.as_flat();
        Vector::new(col_indices::<R, C>(n).map(|i| flat[i]))
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_row_vectors(array::from_fn(|c| self.col_at(c)))
    }

    /// Multiplies every element by `k` from the left (`k * m[i]`).
    pub fn scale<U>(self, k: U) -> Matrix<<U as Mul<T>>::Output, R, C>
    where
        U: Mul<T> + Copy,
    {
        self.map(|x| k * x)
    }

    /// Converts every element with an `as` cast.
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|x| x.as_())
    }
}

impl<T, const N: usize> Matrix<T, N, N>
where
    T: Copy + Zero + One,
{
    /// Creates the identity matrix.
    pub fn identity() -> Self { Self::from_fn(|r, c| if r == c { T::one() } else { T::zero() }) }
}

impl<T, U, const R: usize, const M: usize, const P: usize> Mul<Matrix<U, M, P>> for Matrix<T, R, M>
where
    T: Copy + Mul<U>,
    U: Copy,
    <T as Mul<U>>::Output: Zero,
{
    type Output = Matrix<<T as Mul<U>>::Output, R, P>;

    /// Matrix product; cell `(i, j)` is `self.row(i) . rhs.col(j)`.
    fn mul(self, rhs: Matrix<U, M, P>) -> Self::Output {
        Matrix(
            MulIdxs::<R, P>::PAIRS
                .map(|cells| cells.map(|(i, j)| self.row_at(i).dot(&rhs.col_at(j)))),
        )
    }
}

impl<T, U, const R: usize, const C: usize> Mul<Vector<U, C>> for Matrix<T, R, C>
where
    T: Copy + Mul<U>,
    U: Copy,
    <T as Mul<U>>::Output: Zero,
{
    type Output = Vector<<T as Mul<U>>::Output, R>;

    fn mul(self, rhs: Vector<U, C>) -> Self::Output {
        Vector::new(array::from_fn(|i| self.row_at(i).dot(&rhs)))
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self { Self::new(rows) }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = Error;

    fn try_from(slice: &[T]) -> Result<Self> { Self::try_from_slice(slice) }
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output { &self.as_flat()[index] }
}

impl<T, const R: usize, const C: usize> Index<[usize; 2]> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, [row, col]: [usize; 2]) -> &Self::Output { &self.0[row][col] }
}

impl<T: Display, const R: usize, const C: usize> Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            print_slice(f, row)?;
        }
        Ok(())
    }
}

macro_rules! impl_elementwise_ops {
    ($($trait:ident, $op:ident);*) => {
        $(
            impl<T, U, const R: usize, const C: usize> $trait<Matrix<U, R, C>> for Matrix<T, R, C>
            where
                T: $trait<U> + Copy,
                U: Copy,
            {
                type Output = Matrix<<T as $trait<U>>::Output, R, C>;

                fn $op(self, rhs: Matrix<U, R, C>) -> Self::Output {
                    Matrix::from_fn(|r, c| self.0[r][c].$op(rhs.0[r][c]))
                }
            }
        )*
    };
}

impl_elementwise_ops! {
    Add, add;
    Sub, sub
}

impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<<T as Neg>::Output, R, C>;

    fn neg(self) -> Self::Output { self.map(|x| -x) }
}

/// Implements `scalar * matrix` for primitive scalars.
macro_rules! impl_scalar_mul {
    ($($s:ty),*) => {
        $(
            impl<T: Copy, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for $s
            where
                $s: Mul<T>,
            {
                type Output = Matrix<<$s as Mul<T>>::Output, R, C>;

                fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output { rhs.scale(self) }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
