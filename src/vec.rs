//! Planar point/vector type used for positions, velocities and forces.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub};

/// 2D point or displacement.
///
/// Positions are mutated in place through [`move_to`](Vec2::move_to),
/// [`move_at_angle`](Vec2::move_at_angle), [`translate`](Vec2::translate) and
/// [`rotate`](Vec2::rotate). None of the helpers reject NaN or infinite
/// components; they propagate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    pub fn is_zero(self) -> bool {
        self.x == F::zero() && self.y == F::zero()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    pub fn length_sq(self) -> F { self.dot(self) }

    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Componentwise difference `self - other`.
    pub fn delta(self, other: Self) -> Self { self - other }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Self) -> F { (other - self).length() }

    /// Angle in radians of the direction from `self` towards `other`.
    pub fn angle_to(self, other: Self) -> F {
        F::atan2(other.y - self.y, other.x - self.x)
    }

    /// Same as [`angle_to`](Vec2::angle_to), in degrees.
    pub fn angle_deg_to(self, other: Self) -> F {
        self.angle_to(other).to_degrees()
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }

    pub fn move_to(&mut self, x: F, y: F) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Displace by `distance` along `angle` (radians).
    pub fn move_at_angle(&mut self, angle: F, distance: F) -> &mut Self {
        self.x = self.x + angle.cos() * distance;
        self.y = self.y + angle.sin() * distance;
        self
    }

    /// Displace by a velocity.
    pub fn translate(&mut self, velocity: Self) -> &mut Self {
        *self += velocity;
        self
    }

    /// Rotate about `origin` by `radians`.
    ///
    /// The rotation is clockwise in a y-up frame, which reads as
    /// counter-clockwise on a y-down screen.
    pub fn rotate(&mut self, origin: Self, radians: F) -> &mut Self {
        let (sin, cos) = (radians.sin(), radians.cos());
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;
        self.x = cos * dx + sin * dy + origin.x;
        self.y = cos * dy - sin * dx + origin.y;
        self
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}
