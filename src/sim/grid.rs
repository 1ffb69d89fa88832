//! Point sets covering a meridian half-plane.

use std::f64::consts::FRAC_PI_4;

use crate::geom::Xyz;
use crate::sim::sample::{samples_according_to, SampleSpec};

/// Longitude of the meridian plane used when none is given.
pub const DEFAULT_MERIDIAN_LON: f64 = FRAC_PI_4;

/// Samples in the meridian plane at `lon`, distributed circularly (not
/// geodetically).
///
/// Outer loop over parallel angle, inner loop over radius, so the result has
/// `par_spec.size()` runs of `rad_spec.size()` points each.
pub fn meridian_plane_samples(rad_spec: &SampleSpec, par_spec: &SampleSpec, lon: f64) -> Vec<Xyz> {
    let par_vals = samples_according_to(par_spec);
    let rad_vals = samples_according_to(rad_spec);

    let (sin_lon, cos_lon) = lon.sin_cos();
    let mut xyzs = Vec::with_capacity(par_vals.len() * rad_vals.len());
    for par in &par_vals {
        let (sin_par, cos_par) = par.sin_cos();
        let dir = Xyz::new(cos_par * cos_lon, cos_par * sin_lon, sin_par);
        for rad in &rad_vals {
            xyzs.push(*rad * dir);
        }
    }
    xyzs
}
