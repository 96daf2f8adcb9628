use thiserror::Error;

/// Everything that can go wrong while building, evaluating, splitting or restoring a curve.
#[derive(Debug, Error)]
pub enum BezierError {
    /// Control data was empty, too short for the requested operation, or its ordinates and
    /// coefficients disagree in length.
    #[error("Invalid curve degree: expected at least {expected} control values, provided {provided}")]
    InvalidCurveDegree {
        /// Minimum (or exact, for coefficient rows) number of control values required
        expected: usize,
        /// Number of control values actually supplied
        provided: usize,
    },
    /// A subdivision balance outside [0, 1]. Only raised with the `strict` feature.
    #[error("Parameter {parameter} lies outside of the [0, 1] domain")]
    ParameterOutOfDomain { parameter: f64 },
    /// The recursive evaluator was asked for a curve it cannot evaluate in reasonable time.
    #[error("Degree {degree} exceeds the recursive evaluation ceiling of {ceiling}")]
    DegreeExceedsCeiling { degree: usize, ceiling: usize },
    /// Persisted state carried a type tag other than ours.
    #[error("Expected a curve of type {expected}, found {found}")]
    UnknownCurveType {
        expected: &'static str,
        found: String,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BezierError>;

impl BezierError {
    pub(crate) fn too_few_points(expected: usize, provided: usize) -> Self {
        BezierError::InvalidCurveDegree { expected, provided }
    }
}
