//! N-degree bezier evaluation in Bernstein form,
//! B(t) = sum over i of C(n, i) * t^i * (1 - t)^(n - i) * P_i.
//!
//! Three evaluators live here and agree to within floating point error:
//!
//! * [`n_degree_bezier`] accumulates whole points.
//! * [`n_degree_bezier_component`] works on one axis of ordinates at a time. Curves use this
//!   one since it never builds intermediate points.
//! * [`n_degree_bezier_recursive`] is the textbook de Casteljau recursion. It needs no binomial
//!   coefficients but makes 2^n calls, so it is only a reference oracle and refuses anything
//!   above [`MAX_RECURSIVE_DEGREE`].
//!
//! `t` is not restricted to [0, 1]; outside of it the formula extrapolates.

use crate::coordinate::Coordinate;
use crate::error::{BezierError, Result};

/// Highest degree the recursive evaluator accepts. 2^6 calls per point is still cheap.
pub const MAX_RECURSIVE_DEGREE: usize = 6;

/// Which evaluator a curve should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvaluationStrategy {
    /// Per axis scalar sums.
    Component,
    /// Whole point accumulation.
    Vector,
    /// Naive de Casteljau recursion, bounded by [`MAX_RECURSIVE_DEGREE`].
    Recursive,
}

impl Default for EvaluationStrategy {
    fn default() -> Self {
        EvaluationStrategy::Component
    }
}

fn check_lengths(control_values: usize, coefficients: usize) -> Result<()> {
    if control_values == 0 {
        return Err(BezierError::too_few_points(1, 0));
    }
    if control_values != coefficients {
        return Err(BezierError::InvalidCurveDegree {
            expected: coefficients,
            provided: control_values,
        });
    }

    Ok(())
}

/// Bernstein weight of control value `i` on a curve of degree `n`.
#[inline]
pub(crate) fn bernstein_weight(t: f64, i: usize, n: usize, coefficient: f64) -> f64 {
    coefficient * f64::powi(t, i as i32) * f64::powi(1. - t, (n - i) as i32)
}

/// Evaluates a curve by summing weighted control points.
pub fn n_degree_bezier<C: Coordinate>(t: f64, control_points: &[C], coefficients: &[f64]) -> Result<C> {
    check_lengths(control_points.len(), coefficients.len())?;
    let n = control_points.len() - 1;

    let mut evaluated = C::origin();
    for (i, (p, c)) in control_points.iter().zip(coefficients).enumerate() {
        evaluated = evaluated + *p * bernstein_weight(t, i, n, *c);
    }

    Ok(evaluated)
}

/// Evaluates one axis of a curve from its ordinates.
pub fn n_degree_bezier_component(t: f64, ordinates: &[f64], coefficients: &[f64]) -> Result<f64> {
    check_lengths(ordinates.len(), coefficients.len())?;
    Ok(component_sum(t, ordinates, coefficients))
}

// Callers have already checked that the lengths agree and are non-zero.
pub(crate) fn component_sum(t: f64, ordinates: &[f64], coefficients: &[f64]) -> f64 {
    let n = ordinates.len() - 1;
    ordinates
        .iter()
        .zip(coefficients)
        .enumerate()
        .map(|(i, (p, c))| bernstein_weight(t, i, n, *c) * p)
        .sum()
}

/// Evaluates a curve by recursive de Casteljau interpolation.
///
/// This is exponential in the degree and exists to cross check the other two evaluators.
/// Curves above [`MAX_RECURSIVE_DEGREE`] are rejected with `DegreeExceedsCeiling`.
pub fn n_degree_bezier_recursive<C: Coordinate>(t: f64, control_points: &[C]) -> Result<C> {
    if control_points.is_empty() {
        return Err(BezierError::too_few_points(1, 0));
    }
    let degree = control_points.len() - 1;
    if degree > MAX_RECURSIVE_DEGREE {
        return Err(BezierError::DegreeExceedsCeiling {
            degree,
            ceiling: MAX_RECURSIVE_DEGREE,
        });
    }

    Ok(de_casteljau(t, control_points, 0, degree))
}

fn de_casteljau<C: Coordinate>(t: f64, control_points: &[C], current: usize, degree: usize) -> C {
    if degree == 0 {
        return control_points[current];
    }

    let left = de_casteljau(t, control_points, current, degree - 1) * (1. - t);
    let right = de_casteljau(t, control_points, current + 1, degree - 1) * t;
    left + right
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUBIC: [f64; 4] = [0., 2., 2., 0.];
    const CUBIC_ROW: [f64; 4] = [1., 3., 3., 1.];

    #[test]
    fn weights_partition_unity() {
        for &t in &[0., 0.2, 0.5, 0.9, 1.] {
            let sum: f64 = (0..=3).map(|i| bernstein_weight(t, i, 3, CUBIC_ROW[i])).sum();
            assert!((sum - 1.).abs() < 1e-12);
        }
    }

    #[test]
    fn component_matches_hand_computed_value() {
        // 3 * 0.125 * 2 + 3 * 0.125 * 2
        let y = n_degree_bezier_component(0.5, &CUBIC, &CUBIC_ROW).unwrap();
        assert!((y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn all_three_agree_on_scalars() {
        for &t in &[-0.5, 0., 0.3, 0.5, 0.8, 1., 1.25] {
            let a = n_degree_bezier(t, &CUBIC, &CUBIC_ROW).unwrap();
            let b = n_degree_bezier_component(t, &CUBIC, &CUBIC_ROW).unwrap();
            let c = n_degree_bezier_recursive(t, &CUBIC).unwrap();
            assert!((a - b).abs() < 1e-9);
            assert!((a - c).abs() < 1e-9);
        }
    }

    #[test]
    fn mismatched_coefficients_are_rejected() {
        let err = n_degree_bezier_component(0.5, &CUBIC, &[1., 2., 1.]).unwrap_err();
        assert!(matches!(err, BezierError::InvalidCurveDegree { expected: 3, provided: 4 }));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(n_degree_bezier::<f64>(0.5, &[], &[]).is_err());
        assert!(n_degree_bezier_component(0.5, &[], &[]).is_err());
        assert!(n_degree_bezier_recursive::<f64>(0.5, &[]).is_err());
    }

    #[test]
    fn recursion_has_a_ceiling() {
        let ok = [1.0f64; MAX_RECURSIVE_DEGREE + 1];
        assert!(n_degree_bezier_recursive(0.5, &ok).is_ok());
        let too_high = [1.0f64; MAX_RECURSIVE_DEGREE + 2];
        assert!(matches!(
            n_degree_bezier_recursive(0.5, &too_high),
            Err(BezierError::DegreeExceedsCeiling { degree: 7, ceiling: 6 })
        ));
    }
}
