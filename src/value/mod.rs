//! Page-bound measurement values and their translation from common values.

use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::story::Page;

pub mod common;
pub mod common_value_helpers;
pub mod error;
pub mod failure;
pub mod improvement_direction;
pub mod scalar;

pub use error::MalformedRecordError;
pub use failure::FailureValue;
pub use improvement_direction::ImprovementDirection;
pub use scalar::ScalarValue;

/// Any value a common value can translate into.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(ScalarValue),
    Failure(FailureValue),
}

impl Value {
    pub fn name(&self) -> &str {
        match self {
            Value::Scalar(v) => v.name(),
            Value::Failure(v) => v.name(),
        }
    }

    pub fn page(&self) -> &Arc<Page> {
        match self {
            Value::Scalar(v) => v.page(),
            Value::Failure(v) => v.page(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Value::Failure(_))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Scalar(v) => v.serialize(serializer),
            Value::Failure(v) => v.serialize(serializer),
        }
    }
}
