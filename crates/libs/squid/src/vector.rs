use crate::{
    error::{Axis, Error, Result},
    utils::print_slice,
};
use num_traits::{AsPrimitive, Zero};
use std::{
    array,
    fmt::{Display, Formatter},
    ops::{Add, Index, Mul, Neg, Sub},
};

/// A fixed-length vector of `N` elements stored inline.
///
/// The length is part of the type: constructing from an array of any other
/// length does not compile, and every operation returns a new vector instead
/// of modifying the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

impl<T, const N: usize> Vector<T, N> {
    /// Number of elements in the vector.
    pub const LEN: usize = N;

    /// Creates a new vector from exactly `N` elements.
    pub const fn new(data: [T; N]) -> Self { Self(data) }

    /// Returns the number of elements.
    pub const fn len(&self) -> usize { N }

    /// Returns true if the vector holds no elements.
    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Returns the elements as an array.
    pub const fn as_array(&self) -> &[T; N] { &self.0 }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] { &self.0 }

    /// Consumes the vector, returning its elements.
    pub fn into_array(self) -> [T; N] { self.0 }

    /// Returns an iterator over the elements in index order.
    ///
    /// Every call starts a fresh traversal.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    /// Applies `f` to every element in ascending index order, producing a new
    /// vector of the results.
    pub fn map<U, F>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Calls `f` on every element in ascending index order.
    pub fn for_each<F>(self, f: F)
    where
        F: FnMut(T),
    {
        self.0.into_iter().for_each(f)
    }

    /// Left fold in ascending index order:
    /// `f(...f(f(init, v[0]), v[1])..., v[N - 1])`.
    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.0.into_iter().fold(init, f)
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Creates a vector with every element set to `value`.
    pub fn full(value: T) -> Self { Self([value; N]) }

    /// Creates a vector of zeros.
    pub fn zeros() -> Self
    where
        T: Zero,
    {
        Self([T::zero(); N])
    }

    /// Creates a vector from a slice, checking its length at runtime.
    pub fn try_from_slice(slice: &[T]) -> Result<Self> {
        <[T; N]>::try_from(slice)
            .map(Self)
            .map_err(|_| Error::ShapeMismatch {
                expected: N,
                actual: slice.len(),
            })
    }

    /// Returns the `i`-th element.
    ///
    /// Fails with [`Error::OutOfBounds`] when `i >= N`.
    pub fn get(&self, i: usize) -> Result<T> {
        self.0
            .get(i)
            .copied()
            .ok_or(Error::out_of_bounds(Axis::Element, i, N))
    }

    /// Dot product with a vector of the same length.
    ///
    /// The element types may differ; the result has the type of their
    /// product.
    pub fn dot<U>(&self, other: &Vector<U, N>) -> <T as Mul<U>>::Output
    where
        T: Mul<U>,
        U: Copy,
        <T as Mul<U>>::Output: Zero,
    {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(Zero::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Multiplies every element by `k` from the left (`k * v[i]`).
    pub fn scale<U>(self, k: U) -> Vector<<U as Mul<T>>::Output, N>
    where
        U: Mul<T> + Copy,
    {
        self.map(|x| k * x)
    }

    /// Converts every element with an `as` cast.
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|x| x.as_())
    }

    /// Returns a vector of length `M` with `value` placed before all existing
    /// elements.
    ///
    /// `M` must be `N + 1`; any other length is rejected at compile time.
    ///
    /// ```compile_fail
    /// let v = squid::Vector::new([1, 2]);
    /// let w: squid::Vector<i32, 4> = v.push(0);
    /// ```
    pub fn push<const M: usize>(&self, value: T) -> Vector<T, M> {
        const { assert!(M == N + 1, "push must grow the vector by exactly one element") };
        Vector(array::from_fn(|i| if i == 0 { value } else { self.0[i - 1] }))
    }

    /// Returns a vector of length `M` with `value` placed after all existing
    /// elements.
    ///
    /// `M` must be `N + 1`; any other length is rejected at compile time.
    pub fn append<const M: usize>(&self, value: T) -> Vector<T, M> {
        const { assert!(M == N + 1, "append must grow the vector by exactly one element") };
        Vector(array::from_fn(|i| if i < N { self.0[i] } else { value }))
    }

    /// Concatenates `other` after the elements of `self`.
    ///
    /// `K` must be `N + M`; any other length is rejected at compile time.
    pub fn concat<const M: usize, const K: usize>(&self, other: &Vector<T, M>) -> Vector<T, K> {
        const { assert!(K == N + M, "concat length must be the sum of both lengths") };
        Vector(array::from_fn(|i| if i < N { self.0[i] } else { other.0[i - N] }))
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self { Self(data) }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self { v.0 }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(slice: &[T]) -> Result<Self> { Self::try_from_slice(slice) }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { print_slice(f, &self.0) }
}

macro_rules! impl_elementwise_ops {
    ($($trait:ident, $op:ident);*) => {
        $(
            impl<T, U, const N: usize> $trait<Vector<U, N>> for Vector<T, N>
            where
                T: $trait<U> + Copy,
                U: Copy,
            {
                type Output = Vector<<T as $trait<U>>::Output, N>;

                fn $op(self, rhs: Vector<U, N>) -> Self::Output {
                    Vector(array::from_fn(|i| self.0[i].$op(rhs.0[i])))
                }
            }
        )*
    };
}

impl_elementwise_ops! {
    Add, add;
    Sub, sub
}

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<<T as Neg>::Output, N>;

    fn neg(self) -> Self::Output { self.map(|x| -x) }
}

/// Implements `scalar * vector` for primitive scalars.
macro_rules! impl_scalar_mul {
    ($($s:ty),*) => {
        $(
            impl<T: Copy, const N: usize> Mul<Vector<T, N>> for $s
            where
                $s: Mul<T>,
            {
                type Output = Vector<<$s as Mul<T>>::Output, N>;

                fn mul(self, rhs: Vector<T, N>) -> Self::Output { rhs.scale(self) }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn vector_creation() {
        let v = Vector::new([1, 3, 5, 6]);
        assert_eq!(v.len(), 4);
        assert_eq!(Vector::<i32, 4>::LEN, 4);
        assert!(!v.is_empty());
        assert_eq!(v.as_slice(), &[1, 3, 5, 6]);
        assert_eq!(Vector::<f32, 3>::zeros(), Vector::new([0.0; 3]));
        assert_eq!(Vector::full(7u8), Vector::new([7, 7]));
        assert_eq!(crate::vector![1, 2, 3], Vector::new([1, 2, 3]));
    }

    #[test]
    fn vector_get() {
        let v = Vector::new([1, 3, 5, 6]);
        assert_eq!(v.get(0), Ok(1));
        assert_eq!(v.get(3), Ok(6));
        assert_eq!(
            v.get(4),
            Err(Error::OutOfBounds {
                axis: Axis::Element,
                index: 4,
                len: 4
            })
        );
        assert_eq!(v[2], 5);
    }

    #[test]
    #[should_panic]
    fn vector_index_out_of_bounds() {
        let v = Vector::new([1, 2]);
        let _ = v[2];
    }

    #[test]
    fn vector_try_from_slice() {
        let v = Vector::<i32, 3>::try_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v, Vector::new([1, 2, 3]));
        assert_eq!(
            Vector::<i32, 3>::try_from([1, 2].as_slice()),
            Err(Error::ShapeMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn vector_dot() {
        let v1 = Vector::new([1, 3, 5, 6]);
        let v2 = Vector::new([2, 1, 3, 9]);
        assert_eq!(v1.dot(&v2), 74);
        assert_eq!(v2.dot(&v1), 74);
        assert_eq!(Vector::<i32, 0>::new([]).dot(&Vector::<i32, 0>::new([])), 0);
    }

    #[test]
    fn vector_map_and_fold() {
        let v = Vector::new([1, 3, 5, 6]);
        assert_eq!(v.map(|x| x * 2), Vector::new([2, 6, 10, 12]));
        assert_eq!(v.map(|x| x as f32 + 0.5), Vector::new([1.5, 3.5, 5.5, 6.5]));
        assert_eq!(v.fold(0, |acc, x| acc + x), 15);
        assert_eq!(v.fold(String::new(), |acc, x| format!("{acc}{x}")), "1356");
    }

    #[test]
    fn vector_traversal_order() {
        let v = Vector::new([4, 3, 2, 1]);
        let mut seen = Vec::new();
        v.for_each(|x| seen.push(x));
        assert_eq!(seen, vec![4, 3, 2, 1]);

        let mut mapped = Vec::new();
        let _ = v.map(|x| mapped.push(x));
        assert_eq!(mapped, seen);

        // Each traversal starts from the first element.
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), seen);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), seen);
        assert_eq!((&v).into_iter().count(), 4);
        assert_eq!(v.into_iter().sum::<i32>(), 10);
    }

    #[test]
    fn vector_scalar_mul() {
        let v = Vector::new([1, 3, 5, 6]);
        assert_eq!(6i32 * v, Vector::new([6, 18, 30, 36]));
        assert_eq!(v.scale(2i32), Vector::new([2, 6, 10, 12]));
        // The operand is left untouched.
        assert_eq!(v, Vector::new([1, 3, 5, 6]));

        let w = (6i32 * v).cast::<f64>().map(|x| x / 1.21);
        let expected = [4.958677685950414, 14.87603305785124, 24.793388429752067, 29.75206611570248];
        for (a, b) in w.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
    }

    #[test]
    fn vector_elementwise_ops() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([4, 5, 6]);
        assert_eq!(a + b, Vector::new([5, 7, 9]));
        assert_eq!(b - a, Vector::new([3, 3, 3]));
        assert_eq!(-a, Vector::new([-1, -2, -3]));
    }

    #[test]
    fn vector_growth() {
        let v = Vector::new([1, 2, 3]);
        assert_eq!(v.push::<4>(0), Vector::new([0, 1, 2, 3]));
        assert_eq!(v.append::<4>(4), Vector::new([1, 2, 3, 4]));
        let w: Vector<i32, 5> = v.concat(&Vector::new([4, 5]));
        assert_eq!(w, Vector::new([1, 2, 3, 4, 5]));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn vector_display() {
        assert_eq!(Vector::new([1, 3, 5, 6]).to_string(), "[1, 3, 5, 6]");
        assert_eq!(Vector::new([0.5]).to_string(), "[0.5]");
    }

    proptest! {
        #[test]
        fn vector_get_matches_source(data in prop::array::uniform5(any::<i32>())) {
            let v = Vector::new(data);
            for (i, x) in data.iter().enumerate() {
                prop_assert_eq!(v.get(i), Ok(*x));
            }
            prop_assert!(v.get(5).is_err());
        }

        #[test]
        fn vector_dot_commutes_with_scale(
            a in prop::array::uniform4(-1000i64..1000),
            b in prop::array::uniform4(-1000i64..1000),
            k in -1000i64..1000
        ) {
            let (v1, v2) = (Vector::new(a), Vector::new(b));
            prop_assert_eq!((k * v1).dot(&v2), k * v1.dot(&v2));
            prop_assert_eq!(v1.dot(&(k * v2)), k * v1.dot(&v2));
        }

        #[test]
        fn vector_map_is_positional(data in prop::array::uniform6(-1000i32..1000)) {
            let v = Vector::new(data);
            let mapped = v.map(|x| x * 3 - 1);
            prop_assert_eq!(mapped.len(), v.len());
            for i in 0..6 {
                prop_assert_eq!(mapped.get(i).unwrap(), v.get(i).unwrap() * 3 - 1);
            }
        }

        #[test]
        fn vector_fold_is_sum(data in prop::array::uniform8(-1000i64..1000)) {
            let v = Vector::new(data);
            prop_assert_eq!(v.fold(0, |acc, x| acc + x), data.iter().sum::<i64>());
        }
    }
}
