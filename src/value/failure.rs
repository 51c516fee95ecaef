use std::sync::Arc;

use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::story::Page;

pub const FAILURE_VALUE_NAME: &str = "Exception";

/// A failure reported while measuring a page, carrying the failure's stack.
#[derive(Clone, Debug, PartialEq)]
pub struct FailureValue {
    page: Arc<Page>,
    message: String,
}

impl FailureValue {
    pub fn from_message(page: Arc<Page>, message: impl Into<String>) -> Self {
        FailureValue {
            page,
            message: message.into(),
        }
    }

    pub fn page(&self) -> &Arc<Page> {
        &self.page
    }

    pub fn name(&self) -> &'static str {
        FAILURE_VALUE_NAME
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Serialize)]
struct FailureValueDict<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'static str,
    value: &'a str,
    page_id: Uuid,
}

impl Serialize for FailureValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        FailureValueDict {
            kind: "failure",
            name: FAILURE_VALUE_NAME,
            value: &self.message,
            page_id: self.page.id(),
        }
        .serialize(serializer)
    }
}
