use proj4rs::Proj;

use crate::error::GeoError;
use crate::geom::shape::Shape;
use crate::geom::xyz::{Lpa, Xyz};
use crate::geom::GeodeticTransform;

/// Exact transform delegated to proj4rs (`longlat` <-> `geocent`).
///
/// Independent of [`EarthModel`](crate::geom::EarthModel), so the two can be
/// compared against each other. Angles are radians, as proj4rs expects for
/// geographic CRS.
pub struct Proj4Geocentric {
    shape: Shape,
    geodetic: Proj,
    geocentric: Proj,
}

impl Proj4Geocentric {
    pub fn new(shape: Shape) -> Result<Self, GeoError> {
        let axes = format!("+a={} +b={}", shape.rad_a, shape.rad_b);
        let geodetic = Proj::from_proj_string(&format!("+proj=longlat {axes}"))
            .map_err(|e| GeoError::Proj(format!("longlat: {e}")))?;
        let geocentric = Proj::from_proj_string(&format!("+proj=geocent {axes}"))
            .map_err(|e| GeoError::Proj(format!("geocent: {e}")))?;
        Ok(Self {
            shape,
            geodetic,
            geocentric,
        })
    }
}

impl GeodeticTransform for Proj4Geocentric {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn lpa_for_xyz(&self, xyz: &Xyz) -> Result<Lpa, GeoError> {
        let mut point = (xyz[0], xyz[1], xyz[2]);
        proj4rs::transform::transform(&self.geocentric, &self.geodetic, &mut point)
            .map_err(|e| GeoError::Proj(e.to_string()))?;
        Ok(Lpa::new(point.0, point.1, point.2))
    }

    fn xyz_for_lpa(&self, lpa: &Lpa) -> Result<Xyz, GeoError> {
        let mut point = (lpa.lon, lpa.par, lpa.alt);
        proj4rs::transform::transform(&self.geodetic, &self.geocentric, &mut point)
            .map_err(|e| GeoError::Proj(e.to_string()))?;
        Ok(Xyz::new(point.0, point.1, point.2))
    }
}
