//! 2D vector type used for path vertices and displacements

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Relative tolerance of [`is_close`].
pub const REL_TOL: f64 = 1e-9;
/// Absolute tolerance of [`is_close`].
pub const ABS_TOL: f64 = 1e-12;

/// Compare two floats with a relative tolerance of 1e-9 and a small
/// absolute tolerance for values near zero.
pub fn is_close(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    diff <= (REL_TOL * a.abs().max(b.abs())).max(ABS_TOL)
}

/// 2D vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Zero vector
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector2 = Vector2::new(1.0, 0.0);

    /// Vector of `length` in direction `angle` (radians)
    pub fn from_angle(angle: f64, length: f64) -> Self {
        Vector2::new(angle.cos() * length, angle.sin() * length)
    }

    /// Calculate the length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance to another point
    pub fn distance(&self, other: &Vector2) -> f64 {
        (*self - *other).length()
    }

    /// Angle of the direction from `self` to `other` in radians
    pub fn angle_to(&self, other: &Vector2) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Component-wise [`is_close`]
    pub fn is_close(&self, other: &Vector2) -> bool {
        is_close(self.x, other.x) && is_close(self.y, other.y)
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Vector2::ZERO
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
