pub mod diag;
pub mod error;
pub mod excess;
pub mod geom;
pub mod sim;

pub use error::GeoError;
