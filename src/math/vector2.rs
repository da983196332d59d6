use core::ops::{Add, AddAssign, Mul, Neg, Sub};

use libm::hypotf;
use nalgebra as na;
use num_traits::Zero;

use super::MathError;

/// A 2D value used for chassis positions (mm) and velocities (mm/s, mm/rev).
///
/// Every operation returns a new vector. The only in-place operation is
/// `+=`, meant for accumulation loops.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }

    pub fn scale(self, k: f32) -> Vector2 {
        Vector2::new(k * self.x, k * self.y)
    }

    /// Componentwise division, refusing an exactly zero divisor.
    pub fn checked_div(self, k: f32) -> Result<Vector2, MathError> {
        if k == 0.0 {
            return Err(MathError::DivisionByZero);
        }

        Ok(Vector2::new(self.x / k, self.y / k))
    }

    pub fn dot(self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar z component of the 3D cross product, zero when the two are parallel.
    pub fn perp_dot(self, other: Vector2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Rotates by -90 degrees, (x, y) -> (y, -x).
    ///
    /// With +Y forward and +X to the right this turns a radius vector into
    /// the direction a point moves under clockwise rotation.
    pub fn perpendicular(self) -> Vector2 {
        Vector2::new(self.y, -self.x)
    }

    // hypotf keeps large components from overflowing the intermediate square
    pub fn magnitude(self) -> f32 {
        hypotf(self.x, self.y)
    }

    pub fn magnitude_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction. The zero vector comes back unchanged.
    pub fn normalized(self) -> Vector2 {
        let d = self.magnitude();
        if d == 0.0 {
            return self;
        }

        Vector2::new(self.x / d, self.y / d)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::sub(self, rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::neg(self)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, k: f32) -> Vector2 {
        self.scale(k)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        v.scale(self)
    }
}

impl Zero for Vector2 {
    fn zero() -> Self {
        Vector2::ZERO
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<na::Vector2<f32>> for Vector2 {
    fn from(v: na::Vector2<f32>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for na::Vector2<f32> {
    fn from(v: Vector2) -> Self {
        na::Vector2::new(v.x, v.y)
    }
}
