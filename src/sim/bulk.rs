//! Geodetic sample collections spanning the domain of validity.
//!
//! Each collection leads with a few key values (range ends, zero, quarter
//! angles) followed by uniformly spaced bulk values, so duplicates are
//! expected.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::geom::Lpa;
use crate::sim::sample::{Range, SampleSpec};

/// Multiplier placing a value just inside the open end of an interval.
pub const END_FRAC: f64 = 1.0 - f64::EPSILON;

/// Longitude range, approximating the half-open interval [-pi, pi).
pub const RANGE_LON: Range = (-PI, END_FRAC * PI);

/// Parallel (latitude) range, closed interval [-pi/2, pi/2].
pub const RANGE_PAR: Range = (-FRAC_PI_2, FRAC_PI_2);

/// Altitude band covered by the bulk altitude samples.
pub const RANGE_ALT: Range = (-100_000.0, 100_000.0);

pub fn bulk_samples_lon(num_bulk: usize) -> Vec<f64> {
    let spec = SampleSpec::new(num_bulk, RANGE_LON);
    let mut samps = Vec::with_capacity(num_bulk + 3);
    samps.extend([spec.first(), 0.0, spec.last()]);
    samps.extend(spec.values());
    samps
}

pub fn bulk_samples_par(num_bulk: usize) -> Vec<f64> {
    let spec = SampleSpec::new(num_bulk, RANGE_PAR);
    let mut samps = Vec::with_capacity(num_bulk + 5);
    samps.extend([-FRAC_PI_2, -FRAC_PI_4, 0.0, FRAC_PI_4, FRAC_PI_2]);
    samps.extend(spec.values());
    samps
}

/// Altitudes in metres. Bulk values cover the half-open band
/// [RANGE_ALT.0, RANGE_ALT.1); the upper end is among the key values.
pub fn bulk_samples_alt(num_bulk: usize) -> Vec<f64> {
    let (alt_lo, alt_hi) = RANGE_ALT;
    let mut samps = Vec::with_capacity(num_bulk + 3);
    samps.extend([alt_lo, 0.0, alt_hi]);
    if num_bulk > 0 {
        let alt_delta = (alt_hi - alt_lo) / num_bulk as f64;
        samps.extend((0..num_bulk).map(|nn| alt_lo + nn as f64 * alt_delta));
    }
    samps
}

/// Outer product of the three collections, longitude-major.
pub fn combo_samples_lpa(lons: &[f64], pars: &[f64], alts: &[f64]) -> Vec<Lpa> {
    let mut lpas = Vec::with_capacity(lons.len() * pars.len() * alts.len());
    for &lon in lons {
        for &par in pars {
            for &alt in alts {
                lpas.push(Lpa::new(lon, par, alt));
            }
        }
    }
    lpas
}

pub fn bulk_samples_lpa(lon_bulk: usize, par_bulk: usize, alt_bulk: usize) -> Vec<Lpa> {
    combo_samples_lpa(
        &bulk_samples_lon(lon_bulk),
        &bulk_samples_par(par_bulk),
        &bulk_samples_alt(alt_bulk),
    )
}
