use std::sync::Arc;

use serde_json::{Value as JsonValue, json};
use telemetry_values::story::Page;
use url::Url;

pub const FOO_URL: &str = "http://www.foo.com/";

pub fn foo_page() -> Arc<Page> {
    Arc::new(Page::new(
        Url::parse(FOO_URL).unwrap(),
        Some("foo".to_string()),
    ))
}

pub fn scalar_value(value: JsonValue) -> JsonValue {
    json!({
        "type": "numeric",
        "numeric": {
            "type": "scalar",
            "unit": "timeInMs_smallerIsBetter",
            "value": value
        },
        "name": "foo",
        "description": "desc"
    })
}
