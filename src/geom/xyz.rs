//! Cartesian and geodetic coordinate triples.

use std::ops::{Add, Index, Mul, Sub};

/// Cartesian location in a right-handed frame centred on the ellipsoid (metres).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Xyz(pub [f64; 3]);

impl Xyz {
    pub const fn new(x0: f64, x1: f64, x2: f64) -> Self {
        Self([x0, x1, x2])
    }

    pub fn dot(&self, other: &Xyz) -> f64 {
        self.0[0] * other.0[0] + self.0[1] * other.0[1] + self.0[2] * other.0[2]
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. The zero vector yields NaN components.
    pub fn unit(&self) -> Xyz {
        (1.0 / self.magnitude()) * *self
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl Index<usize> for Xyz {
    type Output = f64;

    fn index(&self, ndx: usize) -> &f64 {
        &self.0[ndx]
    }
}

impl Add for Xyz {
    type Output = Xyz;

    fn add(self, rhs: Xyz) -> Xyz {
        Xyz::new(self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2])
    }
}

impl Sub for Xyz {
    type Output = Xyz;

    fn sub(self, rhs: Xyz) -> Xyz {
        Xyz::new(self[0] - rhs[0], self[1] - rhs[1], self[2] - rhs[2])
    }
}

impl Mul<Xyz> for f64 {
    type Output = Xyz;

    fn mul(self, rhs: Xyz) -> Xyz {
        Xyz::new(self * rhs[0], self * rhs[1], self * rhs[2])
    }
}

/// Geodetic coordinates: longitude and parallel (latitude) in radians,
/// altitude in the length unit of the shape.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lpa {
    pub lon: f64,
    pub par: f64,
    pub alt: f64,
}

impl Lpa {
    pub const fn new(lon: f64, par: f64, alt: f64) -> Self {
        Self { lon, par, alt }
    }

    /// Same horizontal location, projected onto the surface.
    pub fn on_surface(&self) -> Lpa {
        Lpa::new(self.lon, self.par, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude_and_unit() {
        let v = Xyz::new(3.0, 4.0, 12.0);
        assert_relative_eq!(v.magnitude(), 13.0);
        assert_relative_eq!(v.unit().magnitude(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(v.unit()[2], 12.0 / 13.0, epsilon = 1e-15);
    }

    #[test]
    fn test_arithmetic() {
        let a = Xyz::new(1.0, 2.0, 3.0);
        let b = Xyz::new(0.5, -1.0, 4.0);
        assert_eq!(a + b, Xyz::new(1.5, 1.0, 7.0));
        assert_eq!(a - b, Xyz::new(0.5, 3.0, -1.0));
        assert_eq!(2.0 * a, Xyz::new(2.0, 4.0, 6.0));
        assert_relative_eq!(a.dot(&b), 0.5 - 2.0 + 12.0);
    }

    #[test]
    fn test_unit_of_zero_is_not_finite() {
        assert!(!Xyz::default().unit().is_finite());
    }

    #[test]
    fn test_on_surface_drops_altitude() {
        let lpa = Lpa::new(0.1, -0.2, 1234.5);
        assert_eq!(lpa.on_surface(), Lpa::new(0.1, -0.2, 0.0));
    }
}
