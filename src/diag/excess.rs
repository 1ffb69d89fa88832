//! Ellipsoidal excess: how much longer the radial path from a point to the
//! surface is than the perpendicular one.

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::diag::{nan_max, nan_min};
use crate::error::GeoError;
use crate::excess::{RadialAltitude, RadialBase};
use crate::geom::{GeodeticTransform, Lpa, Xyz};

/// Excess diagnostics for one sample point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExcessRecord {
    pub xvec: Xyz,
    /// Exact geodetic coordinates of the sample point
    pub x_lpa: Lpa,
    /// Radial distance to the surface along the sample direction
    pub rho: f64,
    /// |x - r| - |x - p|
    pub excess: f64,
    /// |∇(r)| / |∇(p)| - 1, distortion between the two foot points
    pub grad_eps: f64,
}

impl ExcessRecord {
    /// Excess relative to the radial distance.
    pub fn d_eta_per_r(&self) -> f64 {
        self.excess / self.rho
    }
}

/// Per-point excess records plus their extent.
#[derive(Clone, Debug, PartialEq)]
pub struct ExcessReport {
    /// +inf when there are no records, NaN when any record is NaN
    pub min_excess: f64,
    /// -inf when there are no records, NaN when any record is NaN
    pub max_excess: f64,
    pub records: Vec<ExcessRecord>,
}

impl ExcessReport {
    fn from_records(records: Vec<ExcessRecord>) -> Self {
        let (min_excess, max_excess) = records
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), rec| {
                (nan_min(lo, rec.excess), nan_max(hi, rec.excess))
            });
        Self {
            min_excess,
            max_excess,
            records,
        }
    }

    /// (min, max) excess, or `None` for an empty grid.
    pub fn extent(&self) -> Option<(f64, f64)> {
        if self.records.is_empty() {
            None
        } else {
            Some((self.min_excess, self.max_excess))
        }
    }
}

/// Excess diagnostics for a single point.
pub fn excess_at<M>(xvec: &Xyz, model: &M) -> Result<ExcessRecord, GeoError>
where
    M: GeodeticTransform + ?Sized,
{
    let shape = model.shape();
    let (x_lpa, pvec) = model.foot_point_exact(xvec)?;
    let base = RadialBase::new(xvec, shape, RadialAltitude::Signed);

    let xr_mag = (*xvec - base.rvec).magnitude();
    let xp_mag = (*xvec - pvec).magnitude();

    let gp_mag = shape.gradient_at(&pvec).magnitude();

    Ok(ExcessRecord {
        xvec: *xvec,
        x_lpa,
        rho: base.rho,
        excess: xr_mag - xp_mag,
        grad_eps: base.grad_mag / gp_mag - 1.0,
    })
}

/// Evaluate the excess at every grid point and reduce to its extent.
///
/// Points are evaluated in parallel; records keep grid order.
#[instrument(skip_all, fields(points = grid.len()))]
pub fn run_excess_diagnostic<M>(grid: &[Xyz], model: &M) -> Result<ExcessReport, GeoError>
where
    M: GeodeticTransform + ?Sized,
{
    debug!("evaluating ellipsoidal excess");
    let records = grid
        .par_iter()
        .map(|xvec| excess_at(xvec, model))
        .collect::<Result<Vec<_>, _>>()?;

    let report = ExcessReport::from_records(records);
    if let Some((min_excess, max_excess)) = report.extent() {
        info!(min_excess, max_excess, "excess extent");
    }
    Ok(report)
}
