use serde::{Deserialize, Serialize};

use crate::error::{BezierError, Result};
use crate::evaluate::Evaluate;
use crate::vector::Vector3;

pub const FORMAT_VERSION: f64 = 4.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveMetadata {
    pub version: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub generator: String,
}

impl Default for CurveMetadata {
    fn default() -> Self {
        CurveMetadata {
            version: FORMAT_VERSION,
            kind: "Curve".to_owned(),
            generator: "Curve.toJSON".to_owned(),
        }
    }
}

/// Persisted form of a curve. Only the control points are stored; everything derived from
/// them is rebuilt on restore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveJson {
    #[serde(default)]
    pub metadata: CurveMetadata,
    #[serde(rename = "type")]
    pub kind: String,
    pub control_points: Vec<Vector3>,
}

/// A curve that can be copied, persisted and restored on top of being evaluated.
pub trait Curve: Evaluate<EvalResult = Vector3> + Sized {
    /// Type tag written to and expected back from persisted state.
    const TYPE: &'static str;

    fn copy_from(&mut self, source: &Self) -> &mut Self;
    fn to_json(&self) -> CurveJson;
    fn from_json(&mut self, json: &CurveJson) -> Result<&mut Self>;

    fn curve_type(&self) -> &'static str {
        Self::TYPE
    }

    fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    fn from_json_str(&mut self, s: &str) -> Result<&mut Self> {
        let json: CurveJson = serde_json::from_str(s)?;
        self.from_json(&json)
    }
}

pub(crate) fn check_type(expected: &'static str, json: &CurveJson) -> Result<()> {
    if json.kind != expected {
        return Err(BezierError::UnknownCurveType {
            expected,
            found: json.kind.clone(),
        });
    }

    Ok(())
}
