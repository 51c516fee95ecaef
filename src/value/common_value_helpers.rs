//! Translation of JSON common values into page-bound [`Value`]s.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::story::Page;
use crate::value::Value;
use crate::value::common::{self, CommonValueKind, FailureRecord, ScalarRecord};
use crate::value::error::{MalformedRecordError, Result};
use crate::value::failure::FailureValue;
use crate::value::improvement_direction::ImprovementDirection;
use crate::value::scalar::ScalarValue;

/// What to do with well-formed records that have no translation.
#[derive(Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedPolicy {
    #[default]
    Skip,
    Error,
}

pub fn is_scalar_numeric_value(record: &JsonValue) -> bool {
    matches!(common::classify(record), Ok(CommonValueKind::Scalar))
}

/// Translates a `numeric`/`scalar` common value into a [`ScalarValue`] on `page`.
pub fn translate_scalar_value(record: &JsonValue, page: &Arc<Page>) -> Result<ScalarValue> {
    let scalar = ScalarRecord::from_json(record)?;
    let (units, direction) = split_unit(scalar.name, scalar.unit)?;

    debug!(
        name = scalar.name,
        units,
        %direction,
        page = %page,
        "translated common scalar value"
    );

    Ok(ScalarValue::new(
        Arc::clone(page),
        scalar.name,
        units,
        scalar.value,
        direction,
        scalar.description,
    ))
}

/// Translates a map-reduce failure record into a [`FailureValue`] on `page`.
pub fn translate_mre_failure(record: &JsonValue, page: &Arc<Page>) -> Result<FailureValue> {
    let failure = FailureRecord::from_json(record)?;
    debug!(page = %page, "translated failure value");
    Ok(FailureValue::from_message(Arc::clone(page), failure.stack))
}

/// Translates each record on its own, keeping input order.
pub fn translate_common_values(
    records: &[JsonValue],
    page: &Arc<Page>,
    policy: UnsupportedPolicy,
) -> Result<Vec<Value>> {
    let mut values = Vec::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        match common::classify(record)? {
            CommonValueKind::Scalar => {
                values.push(Value::Scalar(translate_scalar_value(record, page)?));
            }
            CommonValueKind::Failure => {
                values.push(Value::Failure(translate_mre_failure(record, page)?));
            }
            CommonValueKind::Unsupported(err) => match policy {
                UnsupportedPolicy::Skip => {
                    warn!(index = idx, "skipping unsupported common value: {}", err);
                }
                UnsupportedPolicy::Error => return Err(err),
            },
        }
    }

    Ok(values)
}

/// Splits `timeInMs_smallerIsBetter` into `("timeInMs", Down)` on the last underscore.
fn split_unit<'a>(name: &str, unit: &'a str) -> Result<(&'a str, ImprovementDirection)> {
    let (raw_unit, token) = unit.rsplit_once('_').ok_or_else(|| {
        MalformedRecordError::MissingImprovementDirection {
            name: name.to_string(),
            unit: unit.to_string(),
        }
    })?;

    let direction = ImprovementDirection::from_suffix(token).ok_or_else(|| {
        MalformedRecordError::UnknownImprovementDirection {
            name: name.to_string(),
            token: token.to_string(),
        }
    })?;

    if raw_unit.is_empty() {
        return Err(MalformedRecordError::InvalidField {
            field: "numeric.unit",
            reason: format!("no unit name before '_{}'", token),
        });
    }

    Ok((raw_unit, direction))
}
