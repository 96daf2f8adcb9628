pub mod bezier;
pub mod binomial;
pub mod coordinate;
pub mod curve;
pub mod error;
pub mod evaluate;
pub mod interpolation;
pub mod subdivide;
pub mod vector;

pub use self::bezier::NDegreeBezier;
pub use self::binomial::{BinomialCache, BinomialRow};
pub use self::coordinate::Coordinate;
pub use self::curve::{Curve, CurveJson};
pub use self::error::{BezierError, Result};
pub use self::interpolation::{EvaluationStrategy, MAX_RECURSIVE_DEGREE};
pub use self::subdivide::Subdivide;
pub use self::vector::{Axis, Vector3};

pub use self::evaluate::Evaluate;
pub use self::evaluate::{EvalScale, EvalTranslate};
