use std::sync::Arc;

use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::story::Page;
use crate::value::common::serialize_scalar_number;
use crate::value::improvement_direction::ImprovementDirection;

pub const NONE_VALUE_REASON: &str = "Common scalar contained None";

/// A single-number measurement taken on a page.
#[derive(Clone, Debug)]
pub struct ScalarValue {
    page: Arc<Page>,
    name: String,
    units: String,
    value: Option<f64>,
    improvement_direction: ImprovementDirection,
    description: String,
}

impl ScalarValue {
    pub fn new(
        page: Arc<Page>,
        name: impl Into<String>,
        units: impl Into<String>,
        value: Option<f64>,
        improvement_direction: ImprovementDirection,
        description: impl Into<String>,
    ) -> Self {
        ScalarValue {
            page,
            name: name.into(),
            units: units.into(),
            value,
            improvement_direction,
            description: description.into(),
        }
    }

    pub fn page(&self) -> &Arc<Page> {
        &self.page
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn improvement_direction(&self) -> ImprovementDirection {
        self.improvement_direction
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set exactly when the value is absent.
    pub fn none_value_reason(&self) -> Option<&'static str> {
        self.value.is_none().then_some(NONE_VALUE_REASON)
    }
}

/// NaN values compare equal, so translating the same record twice gives equal values.
impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        let same_value = match (self.value, other.value) {
            (Some(a), Some(b)) => a == b || (a.is_nan() && b.is_nan()),
            (a, b) => a == b,
        };

        same_value
            && self.page == other.page
            && self.name == other.name
            && self.units == other.units
            && self.improvement_direction == other.improvement_direction
            && self.description == other.description
    }
}

#[derive(Serialize)]
struct ScalarValueDict<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
    units: &'a str,
    #[serde(serialize_with = "serialize_scalar_number")]
    value: Option<f64>,
    improvement_direction: ImprovementDirection,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    none_value_reason: Option<&'static str>,
    page_id: Uuid,
}

impl Serialize for ScalarValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ScalarValueDict {
            kind: "scalar",
            name: &self.name,
            units: &self.units,
            value: self.value,
            improvement_direction: self.improvement_direction,
            description: &self.description,
            none_value_reason: self.none_value_reason(),
            page_id: self.page.id(),
        }
        .serialize(serializer)
    }
}
