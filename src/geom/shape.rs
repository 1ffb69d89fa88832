//! Biaxial ellipsoid shape in implicit form.
//!
//! A point p lies on the surface when Σ p[k]² / mu_sqs[k] = 1, with
//! mu_sqs = [a², a², b²] for equatorial radius a and polar radius b.

use crate::error::GeoError;
use crate::geom::xyz::Xyz;

/// Reference ellipsoid geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    /// Equatorial semi-axis
    pub rad_a: f64,
    /// Polar semi-axis
    pub rad_b: f64,
    /// Squared semi-axis lengths per Cartesian axis
    pub mu_sqs: [f64; 3],
    /// First eccentricity squared: 1 - b²/a² (negative when prolate)
    pub e2: f64,
}

impl Shape {
    /// Unchecked constructor for compile-time constants.
    pub const fn from_radii(rad_a: f64, rad_b: f64) -> Self {
        let a2 = rad_a * rad_a;
        let b2 = rad_b * rad_b;
        Self {
            rad_a,
            rad_b,
            mu_sqs: [a2, a2, b2],
            e2: 1.0 - b2 / a2,
        }
    }

    /// Shape from equatorial radius and flattening.
    pub const fn from_flattening(rad_a: f64, f: f64) -> Self {
        Self::from_radii(rad_a, rad_a * (1.0 - f))
    }

    /// Validating constructor: both radii must be finite and positive.
    pub fn new(rad_a: f64, rad_b: f64) -> Result<Self, GeoError> {
        for (name, rad) in [("equatorial", rad_a), ("polar", rad_b)] {
            if !(rad.is_finite() && rad > 0.0) {
                return Err(GeoError::InvalidShape(format!(
                    "{name} radius must be finite and positive, got {rad}"
                )));
            }
        }
        Ok(Self::from_radii(rad_a, rad_b))
    }

    /// Characteristic radius, the mean of the two semi-axes.
    pub fn lambda(&self) -> f64 {
        0.5 * (self.rad_a + self.rad_b)
    }

    /// The same shape scaled so that `lambda()` is one.
    pub fn normalized(&self) -> Shape {
        let lambda = self.lambda();
        Shape::from_radii(self.rad_a / lambda, self.rad_b / lambda)
    }

    /// Gradient of the implicit function at any point (on or off the surface).
    pub fn gradient_at(&self, xyz: &Xyz) -> Xyz {
        Xyz::new(
            2.0 * xyz[0] / self.mu_sqs[0],
            2.0 * xyz[1] / self.mu_sqs[1],
            2.0 * xyz[2] / self.mu_sqs[2],
        )
    }

    /// Distance from the origin to the surface along `dir`.
    ///
    /// `dir` need not be unit length; it is normalised first.
    pub fn radius_toward(&self, dir: &Xyz) -> f64 {
        let u = dir.unit();
        let sum: f64 = (0..3).map(|k| u[k] * u[k] / self.mu_sqs[k]).sum();
        1.0 / sum.sqrt()
    }

    /// Value of Σ p[k]² / mu_sqs[k] - 1; zero on the surface.
    pub fn implicit_value(&self, xyz: &Xyz) -> f64 {
        (0..3).map(|k| xyz[k] * xyz[k] / self.mu_sqs[k]).sum::<f64>() - 1.0
    }
}

pub const WGS84: Shape = Shape::from_flattening(6_378_137.0, 1.0 / 298.257_223_563);
pub const GRS80: Shape = Shape::from_flattening(6_378_137.0, 1.0 / 298.257_222_101);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wgs84_constants() {
        assert_relative_eq!(WGS84.rad_a, 6_378_137.0);
        assert_relative_eq!(WGS84.rad_b, 6_356_752.314_245_179, epsilon = 0.001);
        assert_relative_eq!(WGS84.e2.sqrt(), 0.081_819_190_842_622, epsilon = 1e-12);
        assert_relative_eq!(WGS84.mu_sqs[0], WGS84.mu_sqs[1]);
    }

    #[test]
    fn test_grs80_close_to_wgs84() {
        assert_relative_eq!(WGS84.rad_a, GRS80.rad_a);
        assert!((WGS84.rad_b - GRS80.rad_b).abs() < 0.001);
    }

    #[test]
    fn test_invalid_radii() {
        assert!(Shape::new(0.0, 1.0).is_err());
        assert!(Shape::new(1.0, -2.0).is_err());
        assert!(Shape::new(f64::NAN, 1.0).is_err());
        assert!(Shape::new(6_378_137.0, 6_356_752.0).is_ok());
    }

    #[test]
    fn test_radius_toward_axes() {
        let shape = WGS84;
        assert_relative_eq!(shape.radius_toward(&Xyz::new(1.0, 0.0, 0.0)), shape.rad_a, epsilon = 1e-6);
        assert_relative_eq!(shape.radius_toward(&Xyz::new(0.0, 1.0, 0.0)), shape.rad_a, epsilon = 1e-6);
        assert_relative_eq!(shape.radius_toward(&Xyz::new(0.0, 0.0, -1.0)), shape.rad_b, epsilon = 1e-6);
        // Non-unit direction gives the same answer
        assert_relative_eq!(shape.radius_toward(&Xyz::new(0.0, 0.0, 42.0)), shape.rad_b, epsilon = 1e-6);
    }

    #[test]
    fn test_radial_point_is_on_surface() {
        let dir = Xyz::new(0.3, -0.7, 0.6).unit();
        let rho = WGS84.radius_toward(&dir);
        let rvec = rho * dir;
        assert!(WGS84.implicit_value(&rvec).abs() < 1e-14);
    }

    #[test]
    fn test_gradient_is_normal_at_pole_and_equator() {
        let grad = WGS84.gradient_at(&Xyz::new(0.0, 0.0, WGS84.rad_b));
        assert_relative_eq!(grad[0], 0.0);
        assert_relative_eq!(grad[2], 2.0 / WGS84.rad_b, max_relative = 1e-12);

        let grad = WGS84.gradient_at(&Xyz::new(WGS84.rad_a, 0.0, 0.0));
        assert_relative_eq!(grad.magnitude(), 2.0 / WGS84.rad_a, max_relative = 1e-12);
    }

    #[test]
    fn test_normalized_has_unit_lambda() {
        let unit = WGS84.normalized();
        assert_relative_eq!(unit.lambda(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(unit.rad_a / unit.rad_b, WGS84.rad_a / WGS84.rad_b, epsilon = 1e-15);
        assert_relative_eq!(unit.e2, WGS84.e2, epsilon = 1e-12);
    }
}
