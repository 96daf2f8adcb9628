use flo_curves::bezier::{de_casteljau2, de_casteljau3, de_casteljau4};

use super::NDegreeBezier;
use crate::Vector3;

impl NDegreeBezier {
    /// Closed form evaluation for lines, quadratics and cubics. Returns `None` for any other
    /// degree, in which case [`NDegreeBezier::point`] is the way to go.
    pub fn fast_path_at(&self, t: f64) -> Option<Vector3> {
        match self.control_points.as_slice() {
            &[w1, w2] => Some(de_casteljau2(t, w1, w2)),
            &[w1, w2, w3] => Some(de_casteljau3(t, w1, w2, w3)),
            &[w1, w2, w3, w4] => Some(de_casteljau4(t, w1, w2, w3, w4)),
            _ => None,
        }
    }
}
