use std::cmp::PartialEq;
use std::ops::*;

// Anything we can take a weighted sum of. Both a single axis ordinate (f64) and a full point
// (Vector3) implement this, which is what lets the vector and recursive evaluators and the
// subdivider work over either one.
pub trait Coordinate:
    Sized + Copy + Add<Self, Output = Self> + Sub<Self, Output = Self> + Mul<f64, Output = Self> + PartialEq
{
    fn origin() -> Self;
    fn magnitude(self) -> f64;
    fn distance(self, v1: Self) -> f64;
    fn lerp(self, v1: Self, t: f64) -> Self;

    fn is_near(self, v1: Self, eps: f64) -> bool {
        self.distance(v1) <= eps
    }
}

impl Coordinate for f64 {
    fn origin() -> Self {
        0.
    }

    fn magnitude(self) -> Self {
        return f64::abs(self);
    }

    fn distance(self, v1: Self) -> Self {
        return f64::abs(self - v1);
    }

    fn lerp(self, v1: Self, t: f64) -> Self {
        return (1. - t) * self + t * v1;
    }
}
