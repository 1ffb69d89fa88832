pub mod earth;
pub mod proj4;
pub mod shape;
pub mod xyz;

pub use earth::EarthModel;
pub use proj4::Proj4Geocentric;
pub use shape::{Shape, GRS80, WGS84};
pub use xyz::{Lpa, Xyz};

use crate::error::GeoError;

/// Exact transform between Cartesian and geodetic coordinates on a shape.
pub trait GeodeticTransform: Send + Sync {
    /// Ellipsoid the transform is defined on.
    fn shape(&self) -> &Shape;

    /// Inverse: Cartesian -> (lon, par, alt)
    fn lpa_for_xyz(&self, xyz: &Xyz) -> Result<Lpa, GeoError>;

    /// Forward: (lon, par, alt) -> Cartesian
    fn xyz_for_lpa(&self, lpa: &Lpa) -> Result<Xyz, GeoError>;

    /// Exact perpendicular foot point of `xyz`, along with the geodetic
    /// coordinates of `xyz` itself.
    fn foot_point_exact(&self, xyz: &Xyz) -> Result<(Lpa, Xyz), GeoError> {
        let lpa = self.lpa_for_xyz(xyz)?;
        let pvec = self.xyz_for_lpa(&lpa.on_surface())?;
        Ok((lpa, pvec))
    }
}
