mod conv;
mod flo;

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// A point in three dimensional space. Bezier control points and evaluation results are both
/// expressed as Vector3s.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One of the three spatial axes, used to project control points onto a single ordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[macro_export]
macro_rules! vec3 {
    ($x: expr, $y: expr, $z: expr) => {
        $crate::vector::Vector3 {x: $x, y: $y, z: $z}
    };
}

impl Vector3 {
    pub fn from_components(x: f64, y: f64, z: f64) -> Self
    {
        Vector3{ x: x, y: y, z: z }
    }

    pub fn is_near(self, v1: Vector3, eps: f64) -> bool
    {
        self.x - v1.x <= eps && self.x - v1.x >= -eps &&
        self.y - v1.y <= eps && self.y - v1.y >= -eps &&
        self.z - v1.z <= eps && self.z - v1.z >= -eps
    }

    pub fn is_finite(self) -> bool
    {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn add(self, v1: Vector3) -> Self
    {
        vec3!(self.x + v1.x, self.y + v1.y, self.z + v1.z)
    }

    pub fn sub(self, v1: Vector3) -> Self
    {
        vec3!(self.x - v1.x, self.y - v1.y, self.z - v1.z)
    }

    pub fn mul(self, v1: Vector3) -> Self
    {
        vec3!(self.x * v1.x, self.y * v1.y, self.z * v1.z)
    }

    pub fn multiply_scalar(self, s: f64) -> Self
    {
        vec3!(self.x * s, self.y * s, self.z * s)
    }

    pub fn magnitude(self) -> f64
    {
        f64::sqrt(self.dot(self))
    }

    pub fn distance(self, v1: Vector3) -> f64
    {
        self.sub(v1).magnitude()
    }

    pub fn dot(self, v1: Vector3) -> f64
    {
        self.x * v1.x + self.y * v1.y + self.z * v1.z
    }

    pub fn lerp(self, v1: Vector3, t: f64) -> Self
    {
        let v0 = self;
        Vector3 {
            x: (1. - t) * v0.x + t * v1.x,
            y: (1. - t) * v0.y + t * v1.y,
            z: (1. - t) * v0.z + t * v1.z,
        }
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64)
    {
        self.x = x;
        self.y = y;
        self.z = z;
    }
}

impl Coordinate for Vector3 {
    fn origin() -> Self
    {
        vec3!(0., 0., 0.)
    }

    fn magnitude(self) -> f64
    {
        self.magnitude()
    }

    fn distance(self, v1: Self) -> f64
    {
        self.distance(v1)
    }

    fn lerp(self, v1: Self, t: f64) -> Self
    {
        self.lerp(v1, t)
    }

    fn is_near(self, v1: Self, eps: f64) -> bool
    {
        self.is_near(v1, eps)
    }
}
