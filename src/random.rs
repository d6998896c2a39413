//! Seeded random sampling from the distributions in this crate.
//!
//! Normal variates are drawn by inverse-transform sampling: a standard
//! uniform draw `u ∈ (0, 1)` is mapped through
//! [`inverse_normal_cdf`](crate::distributions::inverse_normal_cdf).
//!
//! # Reproducibility
//!
//! [`create_rng`] returns a `SmallRng` that is deterministic for a given
//! seed on the same platform.

use rand::Rng;

use crate::distributions::{inverse_normal_cdf, InverseCdfConfig, NormalParams};

/// Creates a fast, seeded random number generator.
///
/// # Examples
/// ```
/// use u_numkit::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws from the standard uniform distribution on `[0, 1)`.
pub fn random_uniform<R: Rng>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Draws one normal variate by inverse-transform sampling.
///
/// `u = 0` is rejected and redrawn, since the inverse CDF is only defined
/// on the open interval.
///
/// # Examples
/// ```
/// use u_numkit::distributions::{InverseCdfConfig, NormalParams};
/// use u_numkit::random::{create_rng, random_normal};
/// let mut rng = create_rng(7);
/// let params = NormalParams { mu: 10.0, sigma: 2.0 };
/// let x = random_normal(&mut rng, params, InverseCdfConfig::default());
/// // |z| ≤ 10 on the bisection bracket
/// assert!((x - 10.0).abs() <= 20.0);
/// ```
pub fn random_normal<R: Rng>(rng: &mut R, params: NormalParams, config: InverseCdfConfig) -> f64 {
    let u = loop {
        let u = random_uniform(rng);
        if u > 0.0 {
            break u;
        }
    };
    inverse_normal_cdf(u, params, config)
}

/// Draws `n` independent normal variates.
pub fn sample_normal<R: Rng>(
    rng: &mut R,
    n: usize,
    params: NormalParams,
    config: InverseCdfConfig,
) -> Vec<f64> {
    (0..n).map(|_| random_normal(rng, params, config)).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn same_seed_same_samples(seed in 0_u64..10000, n in 0_usize..20) {
            let config = InverseCdfConfig::default();
            let a = sample_normal(&mut create_rng(seed), n, NormalParams::STANDARD, config);
            let b = sample_normal(&mut create_rng(seed), n, NormalParams::STANDARD, config);
            prop_assert_eq!(a, b);
        }
    }
}
