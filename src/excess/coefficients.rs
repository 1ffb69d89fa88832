//! Quadratic in the altitude correction ζ.
//!
//! Expanding the implicit ellipsoid equation about the radial foot point, to
//! second order in ζ, gives coA·ζ² - 2·coB·ζ + coC = 0 with
//!
//!   fgk = ½·|∇|·mu[k],  s1k = 1/(fgk + η₀),  n1k = s1k·fgk·x[k]
//!   coA = 3·Σ n1k²/mu[k]·s1k²,  coB = Σ n1k²/mu[k]·s1k,  coC = Σ n1k²/mu[k] - 1

use crate::geom::{Shape, Xyz};

/// Coefficients of the ζ quadratic for one evaluation point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZetaCoefficients {
    pub co_a: f64,
    pub co_b: f64,
    pub co_c: f64,
}

impl ZetaCoefficients {
    /// coA·coC / coB², the argument of the binomial expansion of the root.
    pub fn x_arg(&self) -> f64 {
        (self.co_a * self.co_c) / (self.co_b * self.co_b)
    }

    /// coC / coB, the leading factor of every truncated root.
    pub fn frac_co_b(&self) -> f64 {
        self.co_c / self.co_b
    }
}

/// Coefficients for point `xvec` with radial pseudo-altitude `eta0`, where
/// `grad_mag` is the gradient magnitude at the radial foot point.
pub fn zeta_coefficients(xvec: &Xyz, eta0: f64, grad_mag: f64, shape: &Shape) -> ZetaCoefficients {
    let mut co_a = 0.0;
    let mut co_b = 0.0;
    let mut co_c = 0.0;
    for (kk, &mu_sq) in shape.mu_sqs.iter().enumerate() {
        let fgk_inv = 0.5 * grad_mag * mu_sq;
        let s1k = 1.0 / (fgk_inv + eta0);
        let n1k = s1k * fgk_inv * xvec[kk];
        let n_per_mu_sq = n1k * n1k / mu_sq;

        co_a += n_per_mu_sq * s1k * s1k;
        co_b += n_per_mu_sq * s1k;
        co_c += n_per_mu_sq;
    }
    ZetaCoefficients {
        co_a: 3.0 * co_a,
        co_b,
        co_c: co_c - 1.0,
    }
}
