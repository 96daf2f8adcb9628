use ndbezier::{vec3, Axis, BezierError, Curve, CurveJson, Evaluate, NDegreeBezier};

fn quartic() -> NDegreeBezier {
    NDegreeBezier::new(vec![
        vec3!(0., 0., 0.),
        vec3!(1., 2., 3.),
        vec3!(2., -1., 0.5),
        vec3!(3., 4., -2.),
        vec3!(4., 0., 1.),
    ])
    .unwrap()
}

#[test]
fn json_layout() {
    let bez = NDegreeBezier::new(vec![vec3!(0., 1., 2.), vec3!(3., 4., 5.)]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&bez.to_json_string().unwrap()).unwrap();

    assert_eq!(value["type"], "NDegreeBezierCurve3");
    assert_eq!(value["metadata"]["type"], "Curve");
    assert_eq!(value["controlPoints"], serde_json::json!([[0., 1., 2.], [3., 4., 5.]]));
}

#[test]
fn restore_rederives_state() {
    let source = quartic();
    let json = source.to_json_string().unwrap();

    let mut restored = NDegreeBezier::new(vec![vec3!(9., 9., 9.)]).unwrap();
    restored.from_json_str(&json).unwrap();

    assert_eq!(restored.control_points(), source.control_points());
    assert_eq!(restored.coefficients(), &[1., 4., 6., 4., 1.]);
    assert_eq!(restored.ordinates(Axis::Z), source.ordinates(Axis::Z));
    assert_eq!(restored.at(0.3), source.at(0.3));
}

#[test]
fn restore_checks_the_type_tag() {
    let mut json = quartic().to_json();
    json.kind = "CubicBezierCurve3".to_owned();

    let mut bez = quartic();
    match bez.from_json(&json) {
        Err(BezierError::UnknownCurveType { found, .. }) => assert_eq!(found, "CubicBezierCurve3"),
        other => panic!("expected UnknownCurveType, got {:?}", other.map(|b| b.degree())),
    }
}

#[test]
fn restore_rejects_empty_control_points() {
    let json = CurveJson {
        metadata: Default::default(),
        kind: NDegreeBezier::TYPE.to_owned(),
        control_points: Vec::new(),
    };
    let mut bez = quartic();
    assert!(matches!(bez.from_json(&json), Err(BezierError::InvalidCurveDegree { .. })));
    assert_eq!(bez.degree(), 4);
}

#[test]
fn restore_rejects_malformed_documents() {
    let mut bez = quartic();
    let res = bez.from_json_str(r#"{"type": "NDegreeBezierCurve3", "controlPoints": [[1, 2]]}"#);
    assert!(matches!(res, Err(BezierError::Json(_))));
}

#[test]
fn metadata_is_optional_on_restore() {
    let mut bez = quartic();
    bez.from_json_str(r#"{"type": "NDegreeBezierCurve3", "controlPoints": [[1, 2, 3]]}"#)
        .unwrap();
    assert_eq!(bez.degree(), 0);
    assert_eq!(bez.at(0.5), vec3!(1., 2., 3.));
}

#[test]
fn copy_from_takes_everything() {
    let source = quartic();
    let mut target = NDegreeBezier::new(vec![vec3!(0., 0., 0.), vec3!(1., 1., 1.)]).unwrap();
    target.copy_from(&source);

    assert_eq!(target.curve_type(), "NDegreeBezierCurve3");
    assert_eq!(target.degree(), 4);
    assert_eq!(target.coefficients(), source.coefficients());
    assert_eq!(target.ordinates(Axis::X), source.ordinates(Axis::X));
    assert_eq!(target.at(0.7), source.at(0.7));
}
