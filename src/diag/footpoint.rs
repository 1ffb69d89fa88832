//! Foot-point error: approximate solver against the exact transform.

use ndarray::{Array1, Array2, Axis};
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::diag::nan_max;
use crate::error::GeoError;
use crate::excess::FootPointSolver;
use crate::geom::{GeodeticTransform, Lpa, Xyz};

/// Solver result and reference foot point for one sample point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FootPointRecord {
    /// Exact geodetic coordinates of the sample point
    pub x_lpa: Lpa,
    pub p_got: Xyz,
    pub p_exact: Xyz,
}

impl FootPointRecord {
    pub fn p_dif(&self) -> Xyz {
        self.p_got - self.p_exact
    }

    pub fn p_mag_dif(&self) -> f64 {
        self.p_dif().magnitude()
    }
}

pub fn foot_point_at<M>(
    xvec: &Xyz,
    model: &M,
    solver: &FootPointSolver,
) -> Result<FootPointRecord, GeoError>
where
    M: GeodeticTransform + ?Sized,
{
    let p_got = solver.solve(xvec, model.shape());
    let (x_lpa, p_exact) = model.foot_point_exact(xvec)?;
    Ok(FootPointRecord {
        x_lpa,
        p_got,
        p_exact,
    })
}

/// Solve every grid point and pair it with its exact foot point.
///
/// Records keep grid order; nothing is aggregated.
#[instrument(skip_all, fields(points = grid.len(), order = ?solver.order))]
pub fn run_foot_point_diagnostic<M>(
    grid: &[Xyz],
    model: &M,
    solver: &FootPointSolver,
) -> Result<Vec<FootPointRecord>, GeoError>
where
    M: GeodeticTransform + ?Sized,
{
    debug!("evaluating foot-point error");
    grid.par_iter()
        .map(|xvec| foot_point_at(xvec, model, solver))
        .collect()
}

/// Foot-point error magnitudes laid out over a meridian-plane grid.
///
/// Rows follow parallel samples, columns radius samples, matching the order
/// of [`meridian_plane_samples`](crate::sim::meridian_plane_samples).
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorGrid {
    errors: Array2<f64>,
}

impl ErrorGrid {
    pub fn from_records(records: &[FootPointRecord], shape: (usize, usize)) -> Result<Self, GeoError> {
        let errors: Vec<f64> = records.iter().map(FootPointRecord::p_mag_dif).collect();
        let errors = Array2::from_shape_vec(shape, errors).map_err(|e| {
            GeoError::InvalidConfig(format!(
                "{} records do not fill a {}x{} grid: {e}",
                records.len(),
                shape.0,
                shape.1
            ))
        })?;
        Ok(Self { errors })
    }

    pub fn errors(&self) -> &Array2<f64> {
        &self.errors
    }

    /// Largest error anywhere on the grid (zero for an empty grid, NaN if
    /// any point diverged).
    pub fn max_error(&self) -> f64 {
        self.errors.fold(0.0_f64, |acc, &err| nan_max(acc, err))
    }

    /// Largest error along each parallel, NaN for parallels with a
    /// diverged point.
    pub fn row_maxima(&self) -> Array1<f64> {
        self.errors
            .map_axis(Axis(1), |row| row.fold(0.0_f64, |acc, &err| nan_max(acc, err)))
    }

    /// Number of points whose error is NaN or infinite.
    pub fn non_finite_count(&self) -> usize {
        self.errors.iter().filter(|err| !err.is_finite()).count()
    }

    /// (parallel index, radius index) of the largest error. A NaN error
    /// outranks every number, whatever its sign bit.
    pub fn worst_index(&self) -> Option<(usize, usize)> {
        self.errors
            .indexed_iter()
            .max_by(|a, b| {
                a.1.is_nan()
                    .cmp(&b.1.is_nan())
                    .then_with(|| a.1.total_cmp(b.1))
            })
            .map(|(ndx, _)| ndx)
    }
}
