use super::vector::Vector3;

// Anything that can be evaluated with respect to time t and give back a point. Curves built on
// top of this get translation and scaling for free through apply_transform.
pub trait Evaluate {
    type EvalResult;

    fn at(&self, t: f64) -> Self::EvalResult;
    fn start_point(&self) -> Self::EvalResult;
    fn end_point(&self) -> Self::EvalResult;
    fn apply_transform<F>(&self, transform: F) -> Self
    where
        F: Fn(&Self::EvalResult) -> Self::EvalResult;

    /// Writes the point at `t` into `target` instead of returning a new one.
    fn at_into(&self, t: f64, target: &mut Self::EvalResult) {
        *target = self.at(t);
    }

    /// `divisions + 1` evenly spaced samples from t = 0 to t = 1 inclusive.
    fn sample(&self, divisions: usize) -> Vec<Self::EvalResult> {
        if divisions == 0 {
            return vec![self.start_point()];
        }

        (0..=divisions)
            .map(|i| self.at(i as f64 / divisions as f64))
            .collect()
    }
}

pub trait EvalTranslate: Evaluate {
    fn translate(&self, t: Vector3) -> Self;
}

pub trait EvalScale: Evaluate {
    fn scale(&self, s: Vector3) -> Self;
}

impl<T: Evaluate<EvalResult = Vector3>> EvalTranslate for T {
    fn translate(&self, t: Vector3) -> Self {
        let transform = |v: &Vector3| {
            return *v + t;
        };

        return self.apply_transform(&transform);
    }
}

impl<T: Evaluate<EvalResult = Vector3>> EvalScale for T {
    fn scale(&self, s: Vector3) -> Self {
        let transform = |v: &Vector3| {
            return *v * s;
        };

        return self.apply_transform(&transform);
    }
}
