//! Single-pass foot-point approximation.
//!
//! The radial foot point r (where the ray through x meets the surface) is
//! exact to compute but is not the perpendicular foot point. Starting from
//! the radial pseudo-altitude η₀ = |x - r|, a correction ζ to the altitude is
//! taken from a truncated root of the ζ quadratic, and the foot point follows
//! from x = p + t·∇(p) solved per axis:
//!
//!   p[k] = x[k] / (1 + c/mu[k]),  c = 2·(ζ + η₀)/|∇(r)|

use crate::excess::coefficients::{zeta_coefficients, ZetaCoefficients};
use crate::geom::{Shape, Xyz};

/// How the altitude correction ζ is taken from its quadratic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZetaOrder {
    /// (coC/coB)·½
    First,
    /// (coC/coB)·(½ + x/8)
    #[default]
    Second,
    /// (coC/coB)·(½ + x/8 + x²/16)
    Third,
    /// (coB/coA)·(1 - √(1 - x)); NaN once x exceeds one.
    Exact,
}

impl ZetaOrder {
    pub fn zeta(&self, co: &ZetaCoefficients) -> f64 {
        let x_arg = co.x_arg();
        let frac_co_b = co.frac_co_b();
        match self {
            Self::First => 0.5 * frac_co_b,
            Self::Second => frac_co_b * (0.5 + x_arg / 8.0),
            Self::Third => 0.5 * frac_co_b * (1.0 + (0.25 + x_arg / 8.0) * x_arg),
            Self::Exact => (co.co_b / co.co_a) * (1.0 - (1.0 - x_arg).sqrt()),
        }
    }
}

/// Sign convention for the radial pseudo-altitude η₀.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadialAltitude {
    /// |x - r|, negated when x lies inside the surface.
    #[default]
    Signed,
    /// |x - r| regardless of side. Interior points come out badly wrong.
    Magnitude,
}

/// Quantities at the radial foot point that seed the expansion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialBase {
    /// Distance from the origin to the surface along x
    pub rho: f64,
    /// Radial foot point
    pub rvec: Xyz,
    /// Gradient magnitude at the radial foot point
    pub grad_mag: f64,
    /// Radial pseudo-altitude
    pub eta0: f64,
}

impl RadialBase {
    pub fn new(xvec: &Xyz, shape: &Shape, sign: RadialAltitude) -> Self {
        let xmag = xvec.magnitude();
        let rho = shape.radius_toward(xvec);
        let rvec = rho * xvec.unit();
        let grad_mag = shape.gradient_at(&rvec).magnitude();

        let dist = (*xvec - rvec).magnitude();
        let eta0 = match sign {
            RadialAltitude::Signed if xmag < rho => -dist,
            _ => dist,
        };

        Self {
            rho,
            rvec,
            grad_mag,
            eta0,
        }
    }
}

/// Perturbative foot-point solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FootPointSolver {
    pub order: ZetaOrder,
    pub radial_altitude: RadialAltitude,
}

impl FootPointSolver {
    pub fn new(order: ZetaOrder, radial_altitude: RadialAltitude) -> Self {
        Self {
            order,
            radial_altitude,
        }
    }

    /// Approximate foot point of `xvec` on `shape`.
    ///
    /// No validity flag: degenerate input (the origin, vanishing coB) gives
    /// non-finite or meaningless components.
    pub fn solve(&self, xvec: &Xyz, shape: &Shape) -> Xyz {
        let base = RadialBase::new(xvec, shape, self.radial_altitude);
        let co = zeta_coefficients(xvec, base.eta0, base.grad_mag, shape);
        let zeta = self.order.zeta(&co);

        let correction = 2.0 * (zeta + base.eta0) / base.grad_mag;
        let mu = &shape.mu_sqs;
        Xyz::new(
            xvec[0] / (1.0 + correction / mu[0]),
            xvec[1] / (1.0 + correction / mu[1]),
            xvec[2] / (1.0 + correction / mu[2]),
        )
    }
}

/// Foot point via the second-order expansion with signed pseudo-altitude.
pub fn solve_foot_point(xvec: &Xyz, shape: &Shape) -> Xyz {
    FootPointSolver::default().solve(xvec, shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{EarthModel, GeodeticTransform, Lpa, WGS84};
    use crate::sim;
    use approx::assert_relative_eq;

    #[test]
    fn test_idempotent_on_surface() {
        let earth = EarthModel::new(WGS84);
        for &lon in &sim::bulk_samples_lon(4) {
            for &par in &sim::bulk_samples_par(8) {
                let pvec = earth.xyz_for_lpa(&Lpa::new(lon, par, 0.0)).unwrap();
                let got = solve_foot_point(&pvec, &WGS84);
                assert!(
                    (got - pvec).magnitude() < 1e-6,
                    "lon={lon} par={par}: moved by {:e}",
                    (got - pvec).magnitude()
                );
            }
        }
    }

    #[test]
    fn test_sphere_matches_radial_projection() {
        let rad = 6_371_000.0;
        let sphere = Shape::from_radii(rad, rad);
        let points = [
            Xyz::new(7.0e6, 1.0e6, 2.0e6),
            Xyz::new(5.0e6, 1.0e6, 2.0e6),
            Xyz::new(-1.0e6, 3.0e6, -5.9e6),
        ];
        for order in [ZetaOrder::First, ZetaOrder::Second, ZetaOrder::Third] {
            let solver = FootPointSolver::new(order, RadialAltitude::Signed);
            for xvec in &points {
                let want = rad * xvec.unit();
                let got = solver.solve(xvec, &sphere);
                assert!((got - want).magnitude() < 1e-6, "{order:?} at {xvec:?}");
            }
        }
    }

    #[test]
    fn test_near_surface_accuracy() {
        let earth = EarthModel::new(WGS84);
        for alt in [-5_000.0, -100.0, 100.0, 5_000.0, 60_000.0] {
            let xvec = earth.xyz_for_lpa(&Lpa::new(0.8, 0.6, alt)).unwrap();
            let want = earth.xyz_for_lpa(&Lpa::new(0.8, 0.6, 0.0)).unwrap();
            let got = solve_foot_point(&xvec, &WGS84);
            assert!((got - want).magnitude() < 1e-6, "alt={alt}");
        }
    }

    #[test]
    fn test_unsigned_altitude_fails_inside() {
        let earth = EarthModel::new(WGS84);
        let inside = earth.xyz_for_lpa(&Lpa::new(0.0, 0.7, -50_000.0)).unwrap();
        let want = earth.xyz_for_lpa(&Lpa::new(0.0, 0.7, 0.0)).unwrap();

        let signed = FootPointSolver::default().solve(&inside, &WGS84);
        let unsigned =
            FootPointSolver::new(ZetaOrder::Second, RadialAltitude::Magnitude).solve(&inside, &WGS84);

        assert!((signed - want).magnitude() < 1e-6);
        assert!((unsigned - want).magnitude() > 1.0);
    }

    #[test]
    fn test_signs_agree_outside() {
        let xvec = Xyz::new(4.0e6, 2.0e6, 5.0e6);
        let signed = FootPointSolver::default().solve(&xvec, &WGS84);
        let unsigned =
            FootPointSolver::new(ZetaOrder::Second, RadialAltitude::Magnitude).solve(&xvec, &WGS84);
        assert_eq!(signed, unsigned);
    }

    #[test]
    fn test_radial_base() {
        let xvec = Xyz::new(0.0, 0.0, WGS84.rad_b + 250.0);
        let base = RadialBase::new(&xvec, &WGS84, RadialAltitude::Signed);
        assert_relative_eq!(base.rho, WGS84.rad_b);
        assert_relative_eq!(base.eta0, 250.0, epsilon = 1e-8);

        let xvec = Xyz::new(0.0, 0.0, WGS84.rad_b - 250.0);
        let base = RadialBase::new(&xvec, &WGS84, RadialAltitude::Signed);
        assert_relative_eq!(base.eta0, -250.0, epsilon = 1e-8);
    }

    #[test]
    fn test_origin_gives_non_finite() {
        assert!(!solve_foot_point(&Xyz::default(), &WGS84).is_finite());
    }

    #[test]
    fn test_exact_order_on_surface() {
        let pvec = EarthModel::new(WGS84)
            .xyz_for_lpa(&Lpa::new(1.1, -0.4, 0.0))
            .unwrap();
        let got = FootPointSolver::new(ZetaOrder::Exact, RadialAltitude::Signed).solve(&pvec, &WGS84);
        assert!((got - pvec).magnitude() < 1e-6);
    }
}
