//! Sampling engine: uniform sample plans and the point sets built from them.

pub mod bulk;
pub mod grid;
pub mod sample;

pub use bulk::{
    bulk_samples_alt, bulk_samples_lon, bulk_samples_lpa, bulk_samples_par, combo_samples_lpa,
    END_FRAC, RANGE_ALT, RANGE_LON, RANGE_PAR,
};
pub use grid::{meridian_plane_samples, DEFAULT_MERIDIAN_LON};
pub use sample::{samples_according_to, Range, SampleSpec};
