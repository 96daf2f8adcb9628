/// Conversion boilerplate
use std::ops::{Add, Mul, Div, Neg, Sub};
use std::ops::{AddAssign, MulAssign, SubAssign};
use std::ops::{Index, IndexMut};

use super::{Axis, Vector3};

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Vector3 {
        Vector3::from_components(x, y, z)
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(v: Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(s: [f64; 3]) -> Vector3 {
        Vector3::from_components(s[0], s[1], s[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(s: [f32; 3]) -> Vector3 {
        Vector3::from_components(s[0] as f64, s[1] as f64, s[2] as f64)
    }
}

impl From<f64> for Vector3 {
    fn from(f: f64) -> Vector3 {
        Vector3::from_components(f, f, f)
    }
}

impl std::cmp::PartialEq for Vector3 {
    fn eq(&self, other: &Vector3) -> bool {
        return self.x == other.x && self.y == other.y && self.z == other.z;
    }
}

impl Add<Vector3> for Vector3 {
    type Output = Vector3;
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::add(self, other)
    }
}

impl AddAssign<Vector3> for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        *self = Vector3::add(*self, other);
    }
}

impl Sub<Vector3> for Vector3 {
    type Output = Vector3;
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::sub(self, other)
    }
}

impl SubAssign<Vector3> for Vector3 {
    fn sub_assign(&mut self, other: Vector3) {
        *self = Vector3::sub(*self, other);
    }
}

impl Mul<Vector3> for Vector3 {
    type Output = Vector3;
    fn mul(self, other: Vector3) -> Vector3 {
        Vector3::mul(self, other)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, s: f64) -> Vector3 {
        self.multiply_scalar(s)
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, s: f64) {
        *self = self.multiply_scalar(s);
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, s: f64) -> Vector3 {
        Vector3::from_components(self.x / s, self.y / s, self.z / s)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::from_components(-self.x, -self.y, -self.z)
    }
}

impl Index<Axis> for Vector3 {
    type Output = f64;
    fn index(&self, axis: Axis) -> &f64 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for Vector3 {
    fn index_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}
