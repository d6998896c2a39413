//! # u-numkit
//!
//! Small numerical toolkit: vector/matrix primitives, uniform and normal
//! distributions, and descriptive statistics.
//!
//! This crate is a foundation layer. It holds no state; every function is
//! pure given its inputs and safe to call from any thread.
//!
//! ## Modules
//!
//! - [`linalg`] — Elementwise vector arithmetic, reductions, matrix accessors
//! - [`distributions`] — Uniform/normal pdf and cdf, bisection inverse cdf
//! - [`stats`] — Mean, median, quantile, mode, variance, covariance
//! - [`random`] — Seeded inverse-transform sampling
//! - [`error`] — Shared [`Error`] type
//!
//! ## Design Philosophy
//!
//! - **Contract errors are values**: length mismatches, empty input and
//!   out-of-range indices come back as [`Error`], never as panics
//! - **Distribution preconditions are documented, not checked**: use the
//!   validating constructors when parameters come from outside
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod distributions;
pub mod error;
pub mod linalg;
pub mod random;
pub mod stats;

pub use error::{Error, Result};
