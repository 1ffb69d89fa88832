//! Validation harness: measures the foot-point approximation against the
//! exact transform over a sample grid.

pub mod excess;
pub mod footpoint;
pub mod report;
pub mod study;

pub use excess::{excess_at, run_excess_diagnostic, ExcessRecord, ExcessReport};
pub use footpoint::{foot_point_at, run_foot_point_diagnostic, ErrorGrid, FootPointRecord};
pub use study::{run_study, StudyConfig, StudyOutcome};

/// Larger of `acc` and `val`. NaN is sticky, so a diverged point is never
/// hidden by a finite maximum.
pub(crate) fn nan_max(acc: f64, val: f64) -> f64 {
    if acc.is_nan() || val.is_nan() {
        f64::NAN
    } else {
        acc.max(val)
    }
}

/// Smaller of `acc` and `val`, with NaN sticky as in [`nan_max`].
pub(crate) fn nan_min(acc: f64, val: f64) -> f64 {
    if acc.is_nan() || val.is_nan() {
        f64::NAN
    } else {
        acc.min(val)
    }
}
