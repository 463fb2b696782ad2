use super::*;

fn sample_payload() -> DrawPayload {
    DrawPayload::new(vec![
        Position::new(10.0, 10.0),
        Position::new(12.0, 11.0),
        Position::new(15.0, 9.0),
    ])
}

#[test]
fn event_name_is_drawing() {
    assert_eq!(DRAWING_EVENT, "drawing");
}

#[test]
fn position_stores_coordinates() {
    let p = Position::new(3.5, -2.0);
    assert_eq!(p.x, 3.5);
    assert_eq!(p.y, -2.0);
}

#[test]
fn payload_json_round_trip() {
    let payload = sample_payload();
    let text = payload.to_json().expect("serialize");
    let parsed = DrawPayload::from_json(&text).expect("parse");
    assert_eq!(parsed, payload);
}

#[test]
fn payload_serializes_under_res_key() {
    let text = sample_payload().to_json().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert!(value.get("res").is_some());
    assert_eq!(value["res"][0]["x"], 10.0);
    assert_eq!(value["res"][2]["y"], 9.0);
}

#[test]
fn empty_res_is_a_valid_payload() {
    let parsed = DrawPayload::from_json(r#"{"res": []}"#).expect("parse");
    assert!(parsed.res.is_empty());
}

#[test]
fn missing_res_is_rejected() {
    let err = DrawPayload::from_json(r#"{"points": []}"#).expect_err("should fail");
    assert!(matches!(err, PayloadError::Malformed(_)));
}

#[test]
fn mistyped_res_is_rejected() {
    let err = DrawPayload::from_json(r#"{"res": "oops"}"#).expect_err("should fail");
    assert!(matches!(err, PayloadError::Malformed(_)));
}

#[test]
fn mistyped_point_is_rejected() {
    let err = DrawPayload::from_json(r#"{"res": [{"x": "a", "y": 2}]}"#).expect_err("should fail");
    assert!(matches!(err, PayloadError::Malformed(_)));
}

#[test]
fn non_json_body_is_rejected() {
    let err = DrawPayload::from_json("definitely not json").expect_err("should fail");
    assert!(matches!(err, PayloadError::Malformed(_)));
}

#[test]
fn unknown_extra_fields_are_tolerated() {
    let parsed = DrawPayload::from_json(r#"{"res": [{"x": 1.0, "y": 2.0}], "extra": 42}"#)
        .expect("parse");
    assert_eq!(parsed.res, vec![Position::new(1.0, 2.0)]);
}

#[test]
fn error_message_names_the_payload() {
    let err = DrawPayload::from_json("{").expect_err("should fail");
    assert!(err.to_string().starts_with("malformed drawing payload"));
}
