//! Typed views of the JSON "common value" records.
//!
//! Common values arrive as loosely-typed JSON dictionaries:
//!
//! | `type`      | `numeric.type` | Record                                      |
//! |-------------|----------------|---------------------------------------------|
//! | `"numeric"` | `"scalar"`     | [`ScalarRecord`]: `name`, `description`, `numeric.unit`, `numeric.value` |
//! | `"failure"` | -              | [`FailureRecord`]: `stack`                   |
//!
//! Every field is checked here, once, so translation works on typed data only.

use serde::Serializer;
use serde_json::Value as JsonValue;

use crate::value::error::{MalformedRecordError, Result};

pub const NUMERIC_TYPE: &str = "numeric";
pub const SCALAR_TYPE: &str = "scalar";
pub const FAILURE_TYPE: &str = "failure";

/// Which translation path a record takes.
#[derive(Debug, Clone, PartialEq)]
pub enum CommonValueKind {
    Scalar,
    Failure,
    /// Well-formed tags that have no translation, e.g. a numeric histogram.
    Unsupported(MalformedRecordError),
}

/// Classifies a record by its `type` and `numeric.type` tags.
pub fn classify(record: &JsonValue) -> Result<CommonValueKind> {
    let kind = match str_field(record, "type", "type")? {
        NUMERIC_TYPE => {
            let numeric = object_field(record, "numeric", "numeric")?;
            match str_field(numeric, "type", "numeric.type")? {
                SCALAR_TYPE => CommonValueKind::Scalar,
                other => CommonValueKind::Unsupported(MalformedRecordError::UnexpectedType {
                    field: "numeric.type",
                    expected: SCALAR_TYPE,
                    found: other.to_string(),
                }),
            }
        }
        FAILURE_TYPE => CommonValueKind::Failure,
        other => CommonValueKind::Unsupported(MalformedRecordError::UnexpectedType {
            field: "type",
            expected: "numeric or failure",
            found: other.to_string(),
        }),
    };

    Ok(kind)
}

/// A `numeric`/`scalar` common value with all fields validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarRecord<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub unit: &'a str,
    pub value: Option<f64>,
}

impl<'a> ScalarRecord<'a> {
    pub fn from_json(record: &'a JsonValue) -> Result<Self> {
        expect_tag(record, "type", "type", NUMERIC_TYPE)?;
        let numeric = object_field(record, "numeric", "numeric")?;
        expect_tag(numeric, "type", "numeric.type", SCALAR_TYPE)?;

        let name = str_field(record, "name", "name")?;
        if name.is_empty() {
            return Err(MalformedRecordError::InvalidField {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }

        let value = numeric
            .get("value")
            .ok_or(MalformedRecordError::MissingField("numeric.value"))?;

        Ok(ScalarRecord {
            name,
            description: str_field(record, "description", "description")?,
            unit: str_field(numeric, "unit", "numeric.unit")?,
            value: parse_scalar_number(value)?,
        })
    }
}

/// A map-reduce failure record.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureRecord<'a> {
    pub stack: &'a str,
}

impl<'a> FailureRecord<'a> {
    pub fn from_json(record: &'a JsonValue) -> Result<Self> {
        expect_tag(record, "type", "type", FAILURE_TYPE)?;
        Ok(FailureRecord {
            stack: str_field(record, "stack", "stack")?,
        })
    }
}

/// `null` is the absence marker. The strings `Infinity`, `-Infinity` and
/// `NaN` stand in for the floats JSON cannot encode.
fn parse_scalar_number(value: &JsonValue) -> Result<Option<f64>> {
    match value {
        JsonValue::Null => Ok(None),
        JsonValue::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| MalformedRecordError::InvalidField {
                field: "numeric.value",
                reason: format!("{} is not representable as a float", n),
            }),
        JsonValue::String(s) => match s.as_str() {
            "Infinity" => Ok(Some(f64::INFINITY)),
            "-Infinity" => Ok(Some(f64::NEG_INFINITY)),
            "NaN" => Ok(Some(f64::NAN)),
            other => Err(MalformedRecordError::InvalidField {
                field: "numeric.value",
                reason: format!("unexpected string '{}'", other),
            }),
        },
        other => Err(MalformedRecordError::InvalidField {
            field: "numeric.value",
            reason: format!("expected a number or null, found {}", json_kind(other)),
        }),
    }
}

/// Writes a scalar number back in its common value form: the non-finite
/// floats become the same strings [`parse_scalar_number`] accepts.
pub fn serialize_scalar_number<S>(
    value: &Option<f64>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        None => serializer.serialize_none(),
        Some(v) if v.is_nan() => serializer.serialize_str("NaN"),
        Some(v) if *v == f64::INFINITY => serializer.serialize_str("Infinity"),
        Some(v) if *v == f64::NEG_INFINITY => serializer.serialize_str("-Infinity"),
        Some(v) => serializer.serialize_f64(*v),
    }
}

fn expect_tag(
    record: &JsonValue,
    key: &str,
    field: &'static str,
    expected: &'static str,
) -> Result<()> {
    let found = str_field(record, key, field)?;
    if found != expected {
        return Err(MalformedRecordError::UnexpectedType {
            field,
            expected,
            found: found.to_string(),
        });
    }
    Ok(())
}

fn str_field<'a>(record: &'a JsonValue, key: &str, field: &'static str) -> Result<&'a str> {
    match field_value(record, key, field)? {
        JsonValue::String(s) => Ok(s),
        other => Err(MalformedRecordError::InvalidField {
            field,
            reason: format!("expected a string, found {}", json_kind(other)),
        }),
    }
}

fn object_field<'a>(
    record: &'a JsonValue,
    key: &str,
    field: &'static str,
) -> Result<&'a JsonValue> {
    let value = field_value(record, key, field)?;
    if !value.is_object() {
        return Err(MalformedRecordError::InvalidField {
            field,
            reason: format!("expected an object, found {}", json_kind(value)),
        });
    }
    Ok(value)
}

fn field_value<'a>(record: &'a JsonValue, key: &str, field: &'static str) -> Result<&'a JsonValue> {
    let obj = record
        .as_object()
        .ok_or_else(|| MalformedRecordError::InvalidField {
            field: "record",
            reason: format!("expected an object, found {}", json_kind(record)),
        })?;
    obj.get(key).ok_or(MalformedRecordError::MissingField(field))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
