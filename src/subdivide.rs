use crate::coordinate::Coordinate;
use crate::error::{BezierError, Result};

pub trait Subdivide {
    fn split(&self, t: f64) -> Result<(Self, Self)>
    where
        Self: Sized;

    fn split_at_multiple_t(&self, mut t_values: Vec<f64>) -> Result<Vec<Self>>
    where
        Self: Sized + Clone,
    {
        // Sort the t-values to make it easier to split the curve
        t_values.retain(|t| t.is_finite());
        t_values.sort_by(f64::total_cmp);
        t_values.dedup();

        let mut beziers: Vec<Self> = Vec::new();
        let mut last_t: f64 = 0.0;

        // Store the current segment; initially, it's the whole Bezier curve
        let mut current_bezier = self.clone();

        for &t in &t_values {
            if t <= last_t || t >= 1.0 {
                continue;
            }

            // Normalize t to the remaining part of the curve
            let local_t = (t - last_t) / (1.0 - last_t);

            let (left, right) = current_bezier.split(local_t)?;
            beziers.push(left);
            current_bezier = right;
            last_t = t;
        }

        // Add the remaining part of the curve
        beziers.push(current_bezier);

        Ok(beziers)
    }
}

/// Checks a subdivision balance. Without the `strict` feature every finite value passes, and
/// the ends of the curve only earn a warning since they produce a zero length half.
pub(crate) fn check_balance(balance: f64) -> Result<()> {
    if cfg!(feature = "strict") && !(0.0..=1.0).contains(&balance) {
        return Err(BezierError::ParameterOutOfDomain { parameter: balance });
    }
    if balance == 0. || balance == 1. {
        log::warn!("Subdividing at balance {}; one half collapses to a point", balance);
    }

    Ok(())
}

/// Splits control points at `balance` by repeated interpolation between neighbours.
///
/// Each pass shrinks the working row by one point. The first point of every pass goes onto the
/// left curve and the last onto the right, so both come out with as many points as went in and
/// meet at the single point left after the final pass.
pub fn subdivide_control_points<C: Coordinate>(control_points: &[C], balance: f64) -> Result<(Vec<C>, Vec<C>)> {
    if control_points.len() < 2 {
        return Err(BezierError::too_few_points(2, control_points.len()));
    }
    check_balance(balance)?;

    let mut left = Vec::with_capacity(control_points.len());
    let mut right = Vec::with_capacity(control_points.len());
    left.push(control_points[0]);
    right.push(control_points[control_points.len() - 1]);

    let mut interim = control_points.to_vec();
    while interim.len() > 1 {
        interim = interim.windows(2).map(|pair| pair[0].lerp(pair[1], balance)).collect();
        log::trace!("Subdivision pass left {} points", interim.len());

        left.push(interim[0]);
        right.push(interim[interim.len() - 1]);
    }
    right.reverse();

    Ok((left, right))
}
