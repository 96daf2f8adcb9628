use std::sync::Arc;

use super::NDegreeBezier;
use crate::curve::{check_type, Curve, CurveJson, CurveMetadata};
use crate::error::Result;
use crate::subdivide::Subdivide;
use crate::{Evaluate, Vector3};

impl Evaluate for NDegreeBezier {
    type EvalResult = Vector3;

    fn at(&self, t: f64) -> Vector3
    {
        self.point(t)
    }

    fn at_into(&self, t: f64, target: &mut Vector3)
    {
        self.point_into(t, target)
    }

    fn start_point(&self) -> Vector3
    {
        return self.control_points[0];
    }

    fn end_point(&self) -> Vector3
    {
        return self.control_points[self.control_points.len() - 1];
    }

    fn apply_transform<F>(&self, transform: F) -> Self where F: Fn(&Vector3) -> Vector3
    {
        let tp = self.control_points.iter().map(|p| transform(p)).collect();
        NDegreeBezier::from_parts(tp, Arc::clone(&self.coefficients))
    }
}

impl Subdivide for NDegreeBezier {
    fn split(&self, t: f64) -> Result<(NDegreeBezier, NDegreeBezier)> {
        self.subdivide(t)
    }
}

impl Curve for NDegreeBezier {
    const TYPE: &'static str = "NDegreeBezierCurve3";

    fn copy_from(&mut self, source: &Self) -> &mut Self {
        *self = NDegreeBezier::from_parts(source.control_points.clone(), Arc::clone(&source.coefficients));
        self
    }

    fn to_json(&self) -> CurveJson {
        CurveJson {
            metadata: CurveMetadata::default(),
            kind: Self::TYPE.to_owned(),
            control_points: self.control_points.clone(),
        }
    }

    fn from_json(&mut self, json: &CurveJson) -> Result<&mut Self> {
        check_type(Self::TYPE, json)?;
        self.set_control_points(json.control_points.clone())?;
        Ok(self)
    }
}
