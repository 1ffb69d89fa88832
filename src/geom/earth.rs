//! Native exact transform between Cartesian and geodetic coordinates.
//!
//! forward: x = (N+h)·cosφ·cosλ, y = (N+h)·cosφ·sinλ, z = (N(1-e²)+h)·sinφ
//! inverse: λ = atan2(y, x); φ from a Bowring start refined by fixed-point
//! iteration φ ← atan2(z + e²·N·sinφ, p); h = p·cosφ + z·sinφ - a²/N

use std::f64::consts::FRAC_PI_2;

use crate::error::GeoError;
use crate::geom::shape::{Shape, WGS84};
use crate::geom::xyz::{Lpa, Xyz};
use crate::geom::GeodeticTransform;

/// Largest number of refinement steps for the parallel angle.
const MAX_PAR_ITERATIONS: usize = 16;

/// Parallel refinement stops once a step is smaller than this (radians).
const PAR_TOLERANCE: f64 = 1e-15;

/// Distance from the polar axis (relative to the equatorial radius) below
/// which a point is treated as lying on the axis.
const POLAR_AXIS_FRAC: f64 = 1e-15;

/// Body model used as the exact reference for the foot-point approximation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EarthModel {
    shape: Shape,
}

impl Default for EarthModel {
    fn default() -> Self {
        Self::new(WGS84)
    }
}

impl EarthModel {
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Prime-vertical radius of curvature at parallel `par`.
    pub fn prime_vertical_radius(&self, par: f64) -> f64 {
        let sin_par = par.sin();
        self.shape.rad_a / (1.0 - self.shape.e2 * sin_par * sin_par).sqrt()
    }

    /// Bowring's closed-form estimate of the parallel angle.
    fn bowring_parallel(&self, p: f64, z: f64) -> f64 {
        let a = self.shape.rad_a;
        let b = self.shape.rad_b;
        let e2 = self.shape.e2;
        let ep2 = e2 * (a * a) / (b * b);

        let theta = (z * a).atan2(p * b);
        let (sin_t, cos_t) = theta.sin_cos();
        (z + ep2 * b * sin_t.powi(3)).atan2(p - e2 * a * cos_t.powi(3))
    }
}

impl GeodeticTransform for EarthModel {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn lpa_for_xyz(&self, xyz: &Xyz) -> Result<Lpa, GeoError> {
        let (x, y, z) = (xyz[0], xyz[1], xyz[2]);
        let p = x.hypot(y);

        if p == 0.0 && z == 0.0 {
            return Err(GeoError::DegeneratePoint(
                "geodetic coordinates are undefined at the origin".into(),
            ));
        }

        let lon = y.atan2(x);

        if p < POLAR_AXIS_FRAC * self.shape.rad_a {
            let par = FRAC_PI_2.copysign(z);
            return Ok(Lpa::new(lon, par, z.abs() - self.shape.rad_b));
        }

        let e2 = self.shape.e2;
        let mut par = self.bowring_parallel(p, z);
        for _ in 0..MAX_PAR_ITERATIONS {
            let n = self.prime_vertical_radius(par);
            let next = (z + e2 * n * par.sin()).atan2(p);
            let step = (next - par).abs();
            par = next;
            if step < PAR_TOLERANCE {
                break;
            }
        }

        let (sin_par, cos_par) = par.sin_cos();
        let n = self.prime_vertical_radius(par);
        let a = self.shape.rad_a;
        let alt = p * cos_par + z * sin_par - a * a / n;

        Ok(Lpa::new(lon, par, alt))
    }

    fn xyz_for_lpa(&self, lpa: &Lpa) -> Result<Xyz, GeoError> {
        let n = self.prime_vertical_radius(lpa.par);
        let (sin_par, cos_par) = lpa.par.sin_cos();
        let (sin_lon, cos_lon) = lpa.lon.sin_cos();

        Ok(Xyz::new(
            (n + lpa.alt) * cos_par * cos_lon,
            (n + lpa.alt) * cos_par * sin_lon,
            (n * (1.0 - self.shape.e2) + lpa.alt) * sin_par,
        ))
    }
}
