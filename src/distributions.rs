//! Continuous probability distributions.
//!
//! Closed-form PDF/CDF for the standard uniform distribution on `[0, 1)` and
//! the normal distribution N(μ, σ²), plus a bisection inverse of the normal
//! CDF.
//!
//! | Function | Domain | Notes |
//! |---|---|---|
//! | [`uniform_pdf`] | ℝ | 1 on `[0, 1)`, else 0 |
//! | [`uniform_cdf`] | ℝ | clamp of `x` to `[0, 1]` |
//! | [`normal_pdf`] | ℝ | requires σ > 0 |
//! | [`normal_cdf`] | ℝ | requires σ > 0 |
//! | [`inverse_normal_cdf`] | p ∈ (0, 1) | bisection on `[-10, 10]` |
//!
//! # Parameters
//!
//! The bare functions take a [`NormalParams`] value and do not validate it.
//! Use [`NormalParams::new`] when the parameters come from untrusted input.

use statrs::function::erf::erf;

use crate::error::{Error, Result};

/// √(2π) ≈ 2.5066282746310002
pub const SQRT_TWO_PI: f64 = 2.506_628_274_631_000_5;

/// Lower end of the bisection bracket for [`inverse_normal_cdf`].
pub const INVERSE_CDF_LOW: f64 = -10.0;

/// Upper end of the bisection bracket for [`inverse_normal_cdf`].
pub const INVERSE_CDF_HIGH: f64 = 10.0;

/// Default bracket-width tolerance for [`inverse_normal_cdf`].
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

// ============================================================================
// Configuration values
// ============================================================================

/// Location and scale of a normal distribution.
///
/// `mu` shifts the distribution, `sigma` scales it. The default is the
/// standard normal `{ mu: 0, sigma: 1 }`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalParams {
    /// Location (mean). Default 0.
    pub mu: f64,
    /// Scale (standard deviation). Must be > 0; default 1.
    pub sigma: f64,
}

impl NormalParams {
    /// The standard normal N(0, 1).
    pub const STANDARD: Self = Self { mu: 0.0, sigma: 1.0 };

    /// Creates validated parameters.
    ///
    /// # Errors
    /// [`Error::DomainPrecondition`] unless `mu` is finite and `sigma` is
    /// finite and strictly positive.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        if !mu.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
            return Err(Error::DomainPrecondition(format!(
                "normal requires finite μ and σ > 0, got μ={mu}, σ={sigma}"
            )));
        }
        Ok(Self { mu, sigma })
    }

    /// Standard normal shifted to `mu`.
    pub fn with_mu(mu: f64) -> Self {
        Self { mu, ..Self::STANDARD }
    }

    /// Standard normal scaled by `sigma`.
    pub fn with_sigma(sigma: f64) -> Self {
        Self { sigma, ..Self::STANDARD }
    }

    /// True for exactly N(0, 1), where [`inverse_normal_cdf`] skips rescaling.
    pub fn is_standard(&self) -> bool {
        *self == Self::STANDARD
    }
}

impl Default for NormalParams {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Settings for [`inverse_normal_cdf`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InverseCdfConfig {
    /// Bisection stops once the bracket is no wider than this.
    pub tolerance: f64,
}

impl InverseCdfConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    /// [`Error::DomainPrecondition`] unless `tolerance` is finite and > 0.
    pub fn new(tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(Error::DomainPrecondition(format!(
                "tolerance must be finite and > 0, got {tolerance}"
            )));
        }
        Ok(Self { tolerance })
    }
}

impl Default for InverseCdfConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

// ============================================================================
// Uniform
// ============================================================================

/// Density of the standard uniform distribution: 1 on `[0, 1)`, 0 elsewhere.
///
/// # Examples
/// ```
/// use u_numkit::distributions::uniform_pdf;
/// assert_eq!(uniform_pdf(0.0), 1.0);
/// assert_eq!(uniform_pdf(1.0), 0.0);
/// ```
pub fn uniform_pdf(x: f64) -> f64 {
    if (0.0..1.0).contains(&x) {
        1.0
    } else {
        0.0
    }
}

/// CDF of the standard uniform distribution.
///
/// 0 for `x < 0`, `x` on `[0, 1)`, 1 for `x ≥ 1`.
pub fn uniform_cdf(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x < 1.0 {
        x
    } else {
        1.0
    }
}

// ============================================================================
// Normal
// ============================================================================

/// Gaussian density `exp(−(x−μ)²/(2σ²)) / (σ√(2π))`.
///
/// `params.sigma` must be positive; otherwise the result is non-finite or
/// meaningless.
///
/// # Examples
/// ```
/// use u_numkit::distributions::{normal_pdf, NormalParams};
/// let peak = normal_pdf(0.0, NormalParams::STANDARD);
/// assert!((peak - 0.3989422804014327).abs() < 1e-15);
/// ```
pub fn normal_pdf(x: f64, params: NormalParams) -> f64 {
    let NormalParams { mu, sigma } = params;
    let d = x - mu;
    (-d * d / (2.0 * sigma * sigma)).exp() / (SQRT_TWO_PI * sigma)
}

/// Normal CDF `(1 + erf((x−μ)/(σ√2))) / 2`.
///
/// Non-decreasing in `x` with range `[0, 1]`, and exactly `0.5` at `x = μ`.
/// The error function is `statrs`'s full-precision implementation.
///
/// # Examples
/// ```
/// use u_numkit::distributions::{normal_cdf, NormalParams};
/// assert_eq!(normal_cdf(0.0, NormalParams::STANDARD), 0.5);
/// assert!((normal_cdf(1.96, NormalParams::STANDARD) - 0.975).abs() < 1e-4);
/// ```
pub fn normal_cdf(x: f64, params: NormalParams) -> f64 {
    let NormalParams { mu, sigma } = params;
    (1.0 + erf((x - mu) / (sigma * std::f64::consts::SQRT_2))) / 2.0
}

/// Finds `x` with `normal_cdf(x, params) ≈ p` by bisection.
///
/// # Algorithm
/// Searches the standard normal on the bracket `[-10, 10]`. Each step
/// evaluates the CDF at the midpoint `(low + high) / 2` and keeps the half
/// that still contains `p`, so the bracket width halves every iteration.
/// The loop stops once `high − low ≤ tolerance` and returns the last
/// midpoint, after at most `⌈log₂(20 / tolerance)⌉` steps. It also stops
/// if the midpoint can no longer move in floating point, so a tolerance
/// below machine resolution still terminates.
///
/// Non-standard parameters are handled by solving the standard problem and
/// returning `μ + σ·z`.
///
/// # Preconditions
/// `p ∈ (0, 1)` and `σ > 0`. Outside that range the search drifts toward
/// an end of the bracket and the result is not an inverse.
///
/// # Examples
/// ```
/// use u_numkit::distributions::{inverse_normal_cdf, normal_cdf, InverseCdfConfig, NormalParams};
/// let standard = NormalParams::STANDARD;
/// let z = inverse_normal_cdf(0.975, standard, InverseCdfConfig::default());
/// assert!((z - 1.96).abs() < 1e-2);
/// assert!((normal_cdf(z, standard) - 0.975).abs() < 1e-4);
/// ```
pub fn inverse_normal_cdf(p: f64, params: NormalParams, config: InverseCdfConfig) -> f64 {
    if !params.is_standard() {
        let z = inverse_normal_cdf(p, NormalParams::STANDARD, config);
        return params.mu + params.sigma * z;
    }

    let mut low = INVERSE_CDF_LOW;
    let mut high = INVERSE_CDF_HIGH;
    let mut mid = (low + high) / 2.0;
    let mut iterations = 0_u32;

    while high - low > config.tolerance {
        mid = (low + high) / 2.0;
        if mid <= low || mid >= high {
            tracing::debug!(
                p,
                low,
                high,
                tolerance = config.tolerance,
                "inverse normal cdf bisection stalled"
            );
            break;
        }
        iterations += 1;
        if normal_cdf(mid, NormalParams::STANDARD) < p {
            low = mid;
        } else {
            high = mid;
        }
    }

    tracing::trace!(p, z = mid, iterations, "inverse normal cdf converged");
    mid
}

/// Upper bound on the bisection steps [`inverse_normal_cdf`] takes for a
/// given tolerance: `⌈log₂(20 / tolerance)⌉`, or 0 if no step is needed.
pub fn bisection_steps(tolerance: f64) -> u32 {
    let width = INVERSE_CDF_HIGH - INVERSE_CDF_LOW;
    if tolerance >= width {
        0
    } else {
        (width / tolerance).log2().ceil() as u32
    }
}

// ============================================================================
// Tests
// ============================================================================
