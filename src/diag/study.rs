//! End-to-end accuracy study over one meridian plane.

use std::f64::consts::FRAC_PI_2;
use std::io::Write;

use tracing::{info, instrument};

use crate::diag::excess::{run_excess_diagnostic, ExcessReport};
use crate::diag::footpoint::{run_foot_point_diagnostic, ErrorGrid, FootPointRecord};
use crate::diag::report::{write_excess_records, write_excess_summary, write_foot_point_records};
use crate::error::GeoError;
use crate::excess::FootPointSolver;
use crate::geom::{EarthModel, Shape, WGS84};
use crate::sim::{meridian_plane_samples, SampleSpec, DEFAULT_MERIDIAN_LON};

/// Sampling plan and solver settings for a study.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StudyConfig {
    /// Radius samples per parallel
    pub num_rad: usize,
    /// Parallel samples over [0, pi/2]
    pub num_par: usize,
    /// Lowest sample altitude, as an offset from `shape.lambda()`
    pub alt_lo: f64,
    /// Highest sample altitude, as an offset from `shape.lambda()`
    pub alt_hi: f64,
    /// Longitude of the meridian plane
    pub lon: f64,
    pub shape: Shape,
    pub solver: FootPointSolver,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            num_rad: 33,
            num_par: 33,
            alt_lo: -100_000.0,
            alt_hi: 100_000.0,
            lon: DEFAULT_MERIDIAN_LON,
            shape: WGS84,
            solver: FootPointSolver::default(),
        }
    }
}

impl StudyConfig {
    /// WGS84 scaled to unit characteristic radius, with the altitude band
    /// scaled to match (100 km of a 6370 km body).
    pub fn normalized() -> Self {
        Self {
            alt_lo: -100.0 / 6370.0,
            alt_hi: 100.0 / 6370.0,
            shape: WGS84.normalized(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GeoError> {
        if self.num_rad < 2 || self.num_par < 2 {
            return Err(GeoError::InvalidConfig(format!(
                "need at least 2 samples per axis, got {} radii and {} parallels",
                self.num_rad, self.num_par
            )));
        }
        if !(self.alt_lo <= self.alt_hi) {
            return Err(GeoError::InvalidConfig(format!(
                "altitude band [{}, {}] is empty",
                self.alt_lo, self.alt_hi
            )));
        }
        if self.alt_lo <= -self.shape.lambda() {
            return Err(GeoError::InvalidConfig(format!(
                "altitude {} reaches the centre of the body",
                self.alt_lo
            )));
        }
        Ok(())
    }

    pub fn rad_spec(&self) -> SampleSpec {
        let lambda = self.shape.lambda();
        SampleSpec::new(self.num_rad, (lambda + self.alt_lo, lambda + self.alt_hi))
    }

    pub fn par_spec(&self) -> SampleSpec {
        SampleSpec::new(self.num_par, (0.0, FRAC_PI_2))
    }
}

/// Everything a study produced.
#[derive(Clone, Debug)]
pub struct StudyOutcome {
    pub excess: ExcessReport,
    pub foot_points: Vec<FootPointRecord>,
    pub error_grid: ErrorGrid,
}

impl StudyOutcome {
    /// Write the excess log (records then extent) and the foot-point log.
    pub fn write_to<E, F>(&self, excess_out: &mut E, foot_out: &mut F) -> Result<(), GeoError>
    where
        E: Write,
        F: Write,
    {
        write_excess_records(excess_out, &self.excess)?;
        write_excess_summary(excess_out, &self.excess)?;
        write_foot_point_records(foot_out, &self.foot_points)?;
        Ok(())
    }
}

/// Run both diagnostics over the meridian-plane grid described by `config`.
#[instrument(skip_all, fields(num_rad = config.num_rad, num_par = config.num_par))]
pub fn run_study(config: &StudyConfig) -> Result<StudyOutcome, GeoError> {
    config.validate()?;

    let earth = EarthModel::new(config.shape);
    let rad_spec = config.rad_spec();
    let par_spec = config.par_spec();
    let grid = meridian_plane_samples(&rad_spec, &par_spec, config.lon);

    let excess = run_excess_diagnostic(&grid, &earth)?;
    let foot_points = run_foot_point_diagnostic(&grid, &earth, &config.solver)?;
    let error_grid = ErrorGrid::from_records(&foot_points, (par_spec.size(), rad_spec.size()))?;

    info!(
        max_error = error_grid.max_error(),
        non_finite = error_grid.non_finite_count(),
        "study complete"
    );
    Ok(StudyOutcome {
        excess,
        foot_points,
        error_grid,
    })
}
