use rectangle_core::{
    PositiveDimensions, Rectangle, RectangleInput, RectangleValidationError, ValidationErrorKind,
};
use serde_json::json;

#[test]
fn new_does_not_validate() {
    let rect = Rectangle::new(-5, 0);

    assert_eq!(rect.id, None);
    assert_eq!(rect.length, -5);
    assert_eq!(rect.width, 0);
    assert!(!rect.is_saved());
}

#[test]
fn display_uses_fixed_shape() {
    let rect = Rectangle::new(5, 10);
    assert_eq!(rect.to_string(), "Rectangle (Length: 5, Width: 10)");
}

#[test]
fn fields_yield_length_then_width() {
    let rect = Rectangle::new(5, 10);

    let fields: Vec<_> = rect.fields().map(|f| (f.name, f.value)).collect();
    assert_eq!(fields, vec![("length", 5), ("width", 10)]);
    assert_eq!(rect.fields().len(), 2);
}

#[test]
fn fields_are_restartable() {
    let rect = Rectangle::new(7, 3);

    let first: Vec<_> = rect.fields().collect();
    let second: Vec<_> = (&rect).into_iter().collect();
    assert_eq!(first, second);
}

#[test]
fn fields_serialize_as_single_key_objects() {
    let rect = Rectangle::new(5, 10);

    let json = serde_json::to_value(rect.fields().collect::<Vec<_>>()).unwrap();
    assert_eq!(json, json!([{ "length": 5 }, { "width": 10 }]));

    let printed: Vec<String> = rect.fields().map(|f| f.to_string()).collect();
    assert_eq!(printed, vec!["{'length': 5}", "{'width': 10}"]);
}

#[test]
fn validate_rejects_non_positive_dimensions() {
    for (length, width) in [(0, 10), (-5, 10), (5, 0), (5, -1)] {
        let err = Rectangle::new(length, width).validate().unwrap_err();
        assert_eq!(err, RectangleValidationError::NonPositive { length, width });
        assert_eq!(err.kind(), ValidationErrorKind::Value);
        assert_eq!(err.to_string(), "Length and width must be positive.");
    }
}

#[test]
fn validate_returns_positive_dimensions() {
    let dims = Rectangle::new(1, 2).validate().unwrap();
    assert_eq!(dims, PositiveDimensions::new(1, 2).unwrap());
    assert_eq!((dims.length(), dims.width()), (1, 2));
}

#[test]
fn input_rejects_non_integral_values() {
    let cases = [
        RectangleInput::new(5, "10"),
        RectangleInput::new(5.0, 10),
        RectangleInput::new(5, true),
        RectangleInput::new(json!(null), 10),
    ];

    for input in cases {
        let err = Rectangle::try_from(input).unwrap_err();
        assert_eq!(err, RectangleValidationError::NotInteger);
        assert_eq!(err.kind(), ValidationErrorKind::Type);
        assert_eq!(err.to_string(), "Length and width must be integers.");
    }
}

#[test]
fn type_check_dominates_value_check() {
    let err = Rectangle::try_from(RectangleInput::new(0, "10")).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::Type);
}

#[test]
fn input_accepts_non_positive_integers_without_value_check() {
    let rect = Rectangle::try_from(RectangleInput::new(-5, 10)).unwrap();
    assert_eq!((rect.length, rect.width), (-5, 10));
}

#[test]
fn deserialize_runs_type_check() {
    let rect: Rectangle =
        serde_json::from_value(json!({ "id": 3, "length": 5, "width": 10 })).unwrap();
    assert_eq!(rect.id, Some(3));
    assert_eq!(rect.to_string(), "Rectangle (Length: 5, Width: 10)");

    let err = serde_json::from_value::<Rectangle>(json!({ "length": 5, "width": "10" }))
        .unwrap_err();
    assert!(
        err.to_string().contains("Length and width must be integers."),
        "unexpected error: {err}"
    );

    let err = serde_json::from_value::<Rectangle>(json!({ "length": 5 })).unwrap_err();
    assert!(err.to_string().contains("must be integers"));
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut rect = Rectangle::new(5, 10);
    rect.id = Some(1);

    let json = serde_json::to_value(&rect).unwrap();
    assert_eq!(json, json!({ "id": 1, "length": 5, "width": 10 }));

    let decoded: Rectangle = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, rect);
}
