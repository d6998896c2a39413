//! Descriptive statistics over `f64` samples.
//!
//! Central tendency ([`mean`], [`median`], [`quantile`], [`mode`]),
//! dispersion ([`data_range`], [`variance`], [`standard_deviation`],
//! [`interquantile_range`]) and association ([`covariance`],
//! [`correlation`]).
//!
//! # Conventions
//!
//! - **Variance/covariance** are *sample* estimators with Bessel's
//!   correction (denominator `n − 1`), built from [`de_mean`] and the
//!   vector reductions in [`crate::linalg`].
//! - **Quantile** is the nearest-rank estimator: the element at index
//!   `⌊p·n⌋` of the sorted sample, with no interpolation.
//! - **Mode** returns every value tied for the highest count.
//!
//! Inputs are never mutated; functions that need order sort a copy.

use std::collections::HashMap;

use crate::error::{ensure_same_len, Error, Result};
use crate::linalg::{dot, sum_of_squares};

/// Arithmetic mean, accumulated with [`kahan_sum`].
///
/// # Errors
/// [`Error::EmptyInput`] if `xs` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(xs: &[f64]) -> Result<f64> {
    if xs.is_empty() {
        return Err(Error::EmptyInput("mean"));
    }
    Ok(kahan_sum(xs) / xs.len() as f64)
}

/// Median: the middle of the sorted sample, or the average of the two
/// central elements for even length.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// [`Error::EmptyInput`] if `xs` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::median;
/// assert_eq!(median(&[1.0, 3.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// ```
pub fn median(xs: &[f64]) -> Result<f64> {
    if xs.is_empty() {
        return Err(Error::EmptyInput("median"));
    }
    let sorted = sorted_copy(xs);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Nearest-rank `p`-quantile: `sorted(xs)[⌊p·n⌋]`.
///
/// No interpolation is done, so the result is always an element of `xs`.
/// `quantile(xs, 0.5)` is the upper median for even-length samples.
///
/// # Errors
/// - [`Error::IndexOutOfRange`] if the sample is empty or `⌊p·n⌋ ≥ n`,
///   which covers `p ≥ 1` including `p = +∞`.
/// - [`Error::DomainPrecondition`] if `p` is negative or NaN. These are
///   also outside `[0, 1)`, but a negative rank has no `usize` index to
///   report, so they get the domain kind instead of the index kind.
///
/// # Examples
/// ```
/// use u_numkit::stats::quantile;
/// let xs = [5.0, 1.0, 4.0, 2.0, 3.0];
/// assert_eq!(quantile(&xs, 0.0).unwrap(), 1.0);
/// assert_eq!(quantile(&xs, 0.5).unwrap(), 3.0);
/// assert_eq!(quantile(&xs, 0.99).unwrap(), 5.0);
/// assert!(quantile(&xs, 1.0).is_err());
/// ```
pub fn quantile(xs: &[f64], p: f64) -> Result<f64> {
    if p.is_nan() || p < 0.0 {
        return Err(Error::DomainPrecondition(format!(
            "quantile requires p in [0, 1), got {p}"
        )));
    }
    let len = xs.len();
    let rank = (p * len as f64).floor();
    if len == 0 || rank >= len as f64 {
        return Err(Error::IndexOutOfRange {
            index: rank as usize,
            len,
        });
    }
    Ok(sorted_copy(xs)[rank as usize])
}

/// All values that share the highest occurrence count.
///
/// The result is a set: its order carries no meaning. `0.0` and `-0.0`
/// count as the same value.
///
/// # Errors
/// [`Error::EmptyInput`] if `xs` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::mode;
/// let mut m = mode(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
/// m.sort_by(f64::total_cmp);
/// assert_eq!(m, vec![1.0, 2.0]);
/// ```
pub fn mode(xs: &[f64]) -> Result<Vec<f64>> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut distinct = Vec::new();
    for &x in xs {
        let x = if x == 0.0 { 0.0 } else { x };
        let count = counts.entry(x.to_bits()).or_insert(0);
        if *count == 0 {
            distinct.push(x);
        }
        *count += 1;
    }
    let max_count = counts
        .values()
        .copied()
        .max()
        .ok_or(Error::EmptyInput("mode"))?;
    Ok(distinct
        .into_iter()
        .filter(|x| counts.get(&x.to_bits()) == Some(&max_count))
        .collect())
}

/// `max(xs) − min(xs)`.
///
/// # Errors
/// [`Error::EmptyInput`] if `xs` is empty.
pub fn data_range(xs: &[f64]) -> Result<f64> {
    let (&first, rest) = xs.split_first().ok_or(Error::EmptyInput("data_range"))?;
    let (lo, hi) = rest
        .iter()
        .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    Ok(hi - lo)
}

/// Subtracts the mean from every element so the result has mean 0.
///
/// # Errors
/// [`Error::EmptyInput`] if `xs` is empty.
pub fn de_mean(xs: &[f64]) -> Result<Vec<f64>> {
    let x_bar = mean(xs)?;
    Ok(xs.iter().map(|x| x - x_bar).collect())
}

/// Sample variance: `Σ(xᵢ − x̄)² / (n − 1)`.
///
/// # Errors
/// [`Error::InsufficientData`] if `xs.len() < 2`.
///
/// # Examples
/// ```
/// use u_numkit::stats::variance;
/// assert_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 2.5);
/// assert!(variance(&[5.0]).is_err());
/// ```
pub fn variance(xs: &[f64]) -> Result<f64> {
    let n = ensure_sample_size(xs.len())?;
    let deviations = de_mean(xs)?;
    Ok(sum_of_squares(&deviations) / (n - 1) as f64)
}

/// Square root of [`variance`].
///
/// # Errors
/// [`Error::InsufficientData`] if `xs.len() < 2`.
pub fn standard_deviation(xs: &[f64]) -> Result<f64> {
    variance(xs).map(f64::sqrt)
}

/// `quantile(xs, 0.75) − quantile(xs, 0.25)`.
///
/// # Errors
/// [`Error::IndexOutOfRange`] if `xs` is empty.
pub fn interquantile_range(xs: &[f64]) -> Result<f64> {
    Ok(quantile(xs, 0.75)? - quantile(xs, 0.25)?)
}

/// Sample covariance: `Σ(xᵢ − x̄)(yᵢ − ȳ) / (n − 1)`.
///
/// # Errors
/// - [`Error::ShapeMismatch`] if `xs.len() != ys.len()`.
/// - [`Error::InsufficientData`] if `n < 2`.
///
/// # Examples
/// ```
/// use u_numkit::stats::covariance;
/// assert_eq!(covariance(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap(), 2.0);
/// ```
pub fn covariance(xs: &[f64], ys: &[f64]) -> Result<f64> {
    ensure_same_len(xs.len(), ys.len())?;
    let n = ensure_sample_size(xs.len())?;
    Ok(dot(&de_mean(xs)?, &de_mean(ys)?)? / (n - 1) as f64)
}

/// Pearson correlation `Cov(x, y) / (s_x · s_y)`.
///
/// Returns `0.0` when either sample is constant, since no linear
/// association can be measured.
///
/// # Errors
/// Same as [`covariance`].
pub fn correlation(xs: &[f64], ys: &[f64]) -> Result<f64> {
    let cov = covariance(xs, ys)?;
    let sd_x = standard_deviation(xs)?;
    let sd_y = standard_deviation(ys)?;
    if sd_x > 0.0 && sd_y > 0.0 {
        Ok(cov / sd_x / sd_y)
    } else {
        Ok(0.0)
    }
}

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// An improved Kahan summation that also handles an addend larger in
/// magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
pub fn kahan_sum(xs: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in xs {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

fn ensure_sample_size(n: usize) -> Result<usize> {
    if n < 2 {
        Err(Error::InsufficientData {
            required: 2,
            actual: n,
        })
    } else {
        Ok(n)
    }
}

fn sorted_copy(xs: &[f64]) -> Vec<f64> {
    let mut sorted = xs.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
