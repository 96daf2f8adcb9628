use std::sync::Arc;

use crate::binomial::{BinomialCache, BinomialRow};
use crate::error::{BezierError, Result};
use crate::interpolation::{self, EvaluationStrategy};
use crate::subdivide::subdivide_control_points;
use crate::vector::{Axis, Vector3};

mod evaluate;
mod flo;

/// A bezier curve of any degree in three dimensions.
///
/// The per axis ordinates and the binomial row are derived from the control points whenever
/// those are set and are never handed in separately, so the three always agree.
#[derive(Clone, Debug)]
pub struct NDegreeBezier {
    control_points: Vec<Vector3>,
    ordinates: [Vec<f64>; 3],
    coefficients: BinomialRow,
}

impl NDegreeBezier {
    /// Builds a curve using the process wide [`BinomialCache`].
    pub fn new(control_points: Vec<Vector3>) -> Result<Self> {
        Self::with_cache(control_points, BinomialCache::global())
    }

    pub fn with_cache(control_points: Vec<Vector3>, cache: &BinomialCache) -> Result<Self> {
        if control_points.is_empty() {
            return Err(BezierError::too_few_points(1, 0));
        }
        let coefficients = cache.row_for_points(control_points.len());
        log::debug!("Built a degree {} bezier", control_points.len() - 1);

        Ok(Self::from_parts(control_points, coefficients))
    }

    pub fn from_points(control_points: &[Vector3]) -> Result<Self> {
        Self::new(control_points.to_vec())
    }

    // The row must belong to a curve with as many points as `control_points`.
    fn from_parts(control_points: Vec<Vector3>, coefficients: BinomialRow) -> Self {
        debug_assert_eq!(control_points.len(), coefficients.len());
        let ordinates = derive_ordinates(&control_points);
        NDegreeBezier {
            control_points,
            ordinates,
            coefficients,
        }
    }

    /// Replaces every control point at once, re-deriving ordinates and coefficients.
    pub fn set_control_points(&mut self, control_points: Vec<Vector3>) -> Result<()> {
        self.set_control_points_with_cache(control_points, BinomialCache::global())
    }

    pub fn set_control_points_with_cache(&mut self, control_points: Vec<Vector3>, cache: &BinomialCache) -> Result<()> {
        *self = Self::with_cache(control_points, cache)?;
        Ok(())
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn control_points(&self) -> &[Vector3] {
        &self.control_points
    }

    pub fn ordinates(&self, axis: Axis) -> &[f64] {
        &self.ordinates[axis.index()]
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The point at `t`, computed one axis at a time.
    pub fn point(&self, t: f64) -> Vector3 {
        let mut target = Vector3::default();
        self.point_into(t, &mut target);
        target
    }

    /// Like [`NDegreeBezier::point`], writing into `target`.
    pub fn point_into(&self, t: f64, target: &mut Vector3) {
        if !t.is_finite() {
            log::warn!("Evaluating a bezier at non-finite t {}", t);
        }
        target.set(
            interpolation::component_sum(t, &self.ordinates[0], &self.coefficients),
            interpolation::component_sum(t, &self.ordinates[1], &self.coefficients),
            interpolation::component_sum(t, &self.ordinates[2], &self.coefficients),
        );
    }

    /// The point at `t` through a chosen evaluator. Only `Recursive` can fail, for curves of
    /// degree above [`interpolation::MAX_RECURSIVE_DEGREE`].
    pub fn point_with(&self, t: f64, strategy: EvaluationStrategy) -> Result<Vector3> {
        match strategy {
            EvaluationStrategy::Component => Ok(self.point(t)),
            EvaluationStrategy::Vector => interpolation::n_degree_bezier(t, self.control_points.as_slice(), &self.coefficients),
            EvaluationStrategy::Recursive => interpolation::n_degree_bezier_recursive(t, self.control_points.as_slice()),
        }
    }

    /// Splits the curve at `balance` into two curves of the same degree. Neither shares any
    /// point storage with `self`.
    pub fn subdivide(&self, balance: f64) -> Result<(NDegreeBezier, NDegreeBezier)> {
        let (left, right) = subdivide_control_points(&self.control_points, balance)?;

        Ok((
            Self::from_parts(left, Arc::clone(&self.coefficients)),
            Self::from_parts(right, Arc::clone(&self.coefficients)),
        ))
    }

    /// The same path traced from the other end.
    pub fn reverse(&self) -> Self {
        let mut points = self.control_points.clone();
        points.reverse();
        // binomial rows are symmetric
        Self::from_parts(points, Arc::clone(&self.coefficients))
    }
}

fn derive_ordinates(control_points: &[Vector3]) -> [Vec<f64>; 3] {
    let project = |axis: Axis| control_points.iter().map(|p| p[axis]).collect::<Vec<f64>>();
    Axis::ALL.map(project)
}
