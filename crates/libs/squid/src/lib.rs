//! # squid
//! Fixed-size vectors and matrices whose dimensions are part of their type.
//!
//! Shapes are const generic parameters: multiplying matrices with mismatched
//! inner dimensions, building a vector from the wrong number of elements or
//! growing a matrix by the wrong amount are compile errors. Index tables for
//! products and row/column projections are generated by `const fn`s in
//! [`seq`], once per shape. Only indexing with a runtime index can fail, with
//! [`Error::OutOfBounds`].
//!
//! Every value is immutable once built; operations return new values.
//!
//! ```
//! use squid::{matrix, vector, Matrix};
//!
//! let a: Matrix<i32, 3, 2> = matrix![5, 2; 1, 2; 3, 4];
//! let b: Matrix<i32, 2, 3> = matrix![1, -2, 6; 3, 4, -1];
//! assert_eq!(a * b, Matrix::from_flat([11, -2, 28, 7, 6, 4, 15, 10, 14]));
//!
//! let grown: Matrix<i32, 4, 2> = a.append_row(vector![7, 8]);
//! assert_eq!(grown.row(3), Ok(vector![7, 8]));
//! ```
#![warn(missing_docs)]

mod error;
mod matrix;
pub mod seq;
mod utils;
mod vector;

pub use error::*;
pub use matrix::*;
pub use vector::Vector;

/// Creates a [`Vector`] from its elements.
///
/// ```
/// let v = squid::vector![1, 3, 5, 6];
/// assert_eq!(v.len(), 4);
/// ```
#[macro_export]
macro_rules! vector {
    ($($x:expr),* $(,)?) => {
        $crate::Vector::new([$($x),*])
    };
}

/// Creates a [`Matrix`] from its rows; rows are separated by `;`.
///
/// ```
/// let m = squid::matrix![1, 2, 3; 4, 5, 6];
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[macro_export]
macro_rules! matrix {
    ($($($x:expr),+);+ $(;)?) => {
        $crate::Matrix::new([$([$($x),+]),+])
    };
}

// Nested row arrays must keep the layout of the flat row-major storage.
static_assertions::assert_eq_size!(Matrix<f32, 2, 3>, [f32; 6]);
static_assertions::assert_eq_size!(Matrix<u8, 1, 7>, Vector<u8, 7>);
static_assertions::assert_eq_size!(Vector<f64, 4>, [f64; 4]);
static_assertions::assert_impl_all!(Matrix<f64, 3, 3>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Vector<i32, 4>: Send, Sync, Copy);
