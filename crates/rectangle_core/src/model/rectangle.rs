//! Rectangle domain model.
//!
//! # Responsibility
//! - Define the canonical rectangle record and its presentation helpers.
//! - Provide the two-step guard (integral type, then positivity) used by
//!   every persistence path.
//!
//! # Invariants
//! - A persisted rectangle always has `length > 0` and `width > 0`.
//! - The type check dominates the value check: non-integral input is reported
//!   as `NotInteger` even when the other field is also non-positive.
//! - `fields()` always yields `length` then `width`.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage identifier assigned on first successful save.
pub type RectangleId = i64;

const NOT_INTEGER_MESSAGE: &str = "Length and width must be integers.";
const NON_POSITIVE_MESSAGE: &str = "Length and width must be positive.";

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A dimension was not an integral value.
    Type,
    /// A dimension was integral but not strictly positive.
    Value,
}

impl ValidationErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Value => "value",
        }
    }
}

impl Display for ValidationErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection raised by the rectangle save guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectangleValidationError {
    /// `length` or `width` is text, a float, a boolean, null, or out of range.
    NotInteger,
    /// `length` or `width` is zero or negative.
    NonPositive { length: i64, width: i64 },
}

impl RectangleValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::NotInteger => ValidationErrorKind::Type,
            Self::NonPositive { .. } => ValidationErrorKind::Value,
        }
    }
}

impl Display for RectangleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInteger => f.write_str(NOT_INTEGER_MESSAGE),
            Self::NonPositive { .. } => f.write_str(NON_POSITIVE_MESSAGE),
        }
    }
}

impl Error for RectangleValidationError {}

/// Dimensions that have passed the positivity check.
///
/// The only way to build one is [`PositiveDimensions::new`] (or
/// [`Rectangle::validate`]), so storage code taking this type cannot be
/// handed unchecked values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveDimensions {
    length: i64,
    width: i64,
}

impl PositiveDimensions {
    /// # Errors
    /// - `NonPositive` when either dimension is `<= 0`.
    pub fn new(length: i64, width: i64) -> Result<Self, RectangleValidationError> {
        if length <= 0 || width <= 0 {
            return Err(RectangleValidationError::NonPositive { length, width });
        }
        Ok(Self { length, width })
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    pub fn width(&self) -> i64 {
        self.width
    }
}

/// Untyped rectangle input as it arrives from JSON or other loose sources.
///
/// Missing dimensions deserialize as `null` and fail the integral check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleInput {
    #[serde(default)]
    pub id: Option<RectangleId>,
    #[serde(default)]
    pub length: Value,
    #[serde(default)]
    pub width: Value,
}

impl RectangleInput {
    pub fn new(length: impl Into<Value>, width: impl Into<Value>) -> Self {
        Self {
            id: None,
            length: length.into(),
            width: width.into(),
        }
    }
}

/// Canonical rectangle record.
///
/// Deserialization runs the integral check only; positivity is checked when
/// the record is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RectangleInput")]
pub struct Rectangle {
    /// `None` until the record has been saved once.
    pub id: Option<RectangleId>,
    pub length: i64,
    pub width: i64,
}

impl Rectangle {
    /// Creates an unsaved rectangle. Values are not validated here.
    pub fn new(length: i64, width: i64) -> Self {
        Self {
            id: None,
            length,
            width,
        }
    }

    /// Runs the positivity check and returns the storable dimensions.
    ///
    /// # Errors
    /// - `NonPositive` when `length <= 0` or `width <= 0`.
    pub fn validate(&self) -> Result<PositiveDimensions, RectangleValidationError> {
        PositiveDimensions::new(self.length, self.width)
    }

    /// Returns whether this record has been persisted at least once.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// Yields `{"length": ..}` then `{"width": ..}`.
    ///
    /// Each call starts a fresh sequence over the current values.
    pub fn fields(&self) -> Fields {
        Fields {
            length: self.length,
            width: self.width,
            position: 0,
        }
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rectangle (Length: {}, Width: {})",
            self.length, self.width
        )
    }
}

impl<'a> IntoIterator for &'a Rectangle {
    type Item = RectangleField;
    type IntoIter = Fields;

    fn into_iter(self) -> Self::IntoIter {
        self.fields()
    }
}

impl TryFrom<RectangleInput> for Rectangle {
    type Error = RectangleValidationError;

    /// Rejects any dimension that is not an `i64`-representable integer.
    fn try_from(input: RectangleInput) -> Result<Self, Self::Error> {
        match (integral(&input.length), integral(&input.width)) {
            (Some(length), Some(width)) => Ok(Self {
                id: input.id,
                length,
                width,
            }),
            _ => Err(RectangleValidationError::NotInteger),
        }
    }
}

// Floats are rejected even with a zero fraction (`10.0`).
fn integral(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        _ => None,
    }
}

/// One single-key mapping produced by [`Rectangle::fields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleField {
    pub name: &'static str,
    pub value: i64,
}

impl Display for RectangleField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{'{}': {}}}", self.name, self.value)
    }
}

impl Serialize for RectangleField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name, &self.value)?;
        map.end()
    }
}

/// Iterator over a rectangle's fields in declaration order.
#[derive(Debug, Clone)]
pub struct Fields {
    length: i64,
    width: i64,
    position: u8,
}

impl Iterator for Fields {
    type Item = RectangleField;

    fn next(&mut self) -> Option<Self::Item> {
        let field = match self.position {
            0 => RectangleField {
                name: "length",
                value: self.length,
            },
            1 => RectangleField {
                name: "width",
                value: self.width,
            },
            _ => return None,
        };
        self.position += 1;
        Some(field)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 2usize.saturating_sub(usize::from(self.position));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fields {}
