//! # SOP Algebra
//!
//! A two-level Boolean logic algebra engine over sum-of-products
//! representations: the packed-bitvector [`Cube`] and [`Cover`] types, the
//! algebraic operations on them (union, product, algebraic division,
//! cofactor), kernel/co-kernel enumeration, and the factoring drivers
//! built on top of them.
//!
//! ## Overview
//!
//! The engine supplies the fundamental objects of multi-level logic
//! synthesis:
//!
//! - **[`Cube`]** - a conjunction of literals, packed two bits per
//!   variable into 64-bit words
//! - **[`Cover`]** - a disjunction of cubes, always in canonical order
//!   (strictly descending, duplicate-free), so equality and hashing are
//!   plain word comparisons
//! - **[`KernelGen`]** - kernel/co-kernel enumeration with memoisation
//!   keyed by cover value
//! - **`quick_factor` / `good_factor` / `bool_factor`** - factoring
//!   drivers turning a cover into a compact [`Expr`]
//! - **[`TvFunc`]** - dense truth tables, with the BCF and MWC
//!   conversions back to prime sum-of-products covers
//!
//! All operations are synchronous, deterministic and allocation-light;
//! every value owns its storage.
//!
//! ## Quick start
//!
//! ```
//! use sop_algebra::{Cover, Literal};
//!
//! let a = Literal::positive(0);
//! let b = Literal::positive(1);
//! let c = Literal::positive(2);
//! let d = Literal::positive(3);
//!
//! // F = ac + ad + bc + bd
//! let f = Cover::from_literal_lists(
//!     4,
//!     &[vec![a, c], vec![a, d], vec![b, c], vec![b, d]],
//! )
//! .unwrap();
//!
//! // factor into (c + d)(a + b)
//! let expr = f.good_factor();
//! assert_eq!(expr.literal_num(), 4);
//! assert_eq!(expr.tvfunc(4).unwrap(), f.tvfunc());
//! ```
//!
//! ## Text format
//!
//! Covers serialise as one line per cube over `{'0', '1', '-'}`:
//!
//! ```
//! use sop_algebra::Cover;
//!
//! let f = Cover::from_text("1-1\n01-\n").unwrap();
//! assert_eq!(f.cube_num(), 2);
//! assert_eq!(f.to_text(), "1-1\n01-\n");
//! ```
//!
//! The `gen_factor` binary (cargo feature `cli`) reads this format and
//! prints a factored expression.

mod base;

pub mod cover;
pub mod cube;
pub mod error;
pub mod expression;
pub mod factor;
pub mod kernel;
pub mod literal;
pub mod litset;
pub mod tvfunc;

pub use cover::Cover;
pub use cube::{Cube, Pat};
pub use error::{ArgumentError, ExprParseError, ParseCoverError, RangeError};
pub use expression::Expr;
pub use factor::{gen_factor, weak_division, DivisorStrategy};
pub use kernel::KernelGen;
pub use literal::Literal;
pub use litset::LitSet;
pub use tvfunc::TvFunc;
