use serde::Deserialize;

use crate::value::common_value_helpers::UnsupportedPolicy;

#[derive(Deserialize, Debug, Clone)]
pub struct SystemConfig {
    /// Default log filter, used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub on_unsupported: UnsupportedPolicy,
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            log_level: default_log_level(),
            on_unsupported: UnsupportedPolicy::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
