use anyhow::Context;
use serde::Deserialize;
use url::Url;

use crate::config::system::SystemConfig;

pub mod system;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub page: PageConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let cfg = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path))?;
        Self::from_toml(&cfg).with_context(|| format!("failed to parse config file: {}", path))
    }

    pub fn from_toml(cfg: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(cfg)?)
    }
}

/// The page every translated value is bound to.
#[derive(Deserialize, Debug, Clone)]
pub struct PageConfig {
    pub url: String,
    pub name: Option<String>,
}

impl PageConfig {
    pub fn parsed_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.url).with_context(|| format!("invalid page url: {}", self.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::common_value_helpers::UnsupportedPolicy;

    #[test]
    fn parses_full_config() {
        let config = Config::from_toml(
            r#"
            [page]
            url = "http://www.foo.com/"
            name = "foo"

            [system]
            log_level = "debug"
            on_unsupported = "error"
            "#,
        )
        .unwrap();

        assert_eq!(config.page.url, "http://www.foo.com/");
        assert_eq!(config.page.name.as_deref(), Some("foo"));
        assert_eq!(config.system.log_level, "debug");
        assert_eq!(config.system.on_unsupported, UnsupportedPolicy::Error);
    }

    #[test]
    fn system_section_is_optional() {
        let config = Config::from_toml(
            r#"
            [page]
            url = "http://www.foo.com/"
            "#,
        )
        .unwrap();

        assert!(config.page.name.is_none());
        assert_eq!(config.system.log_level, "info");
        assert_eq!(config.system.on_unsupported, UnsupportedPolicy::Skip);
    }

    #[test]
    fn page_section_is_required() {
        assert!(Config::from_toml("[system]\nlog_level = \"info\"").is_err());
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Config::from_toml(
            r#"
            [page]
            url = "http://www.foo.com/"

            [system]
            on_unsupported = "ignore"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn parsed_url_validates() {
        let page = PageConfig {
            url: "not a url".to_string(),
            name: None,
        };
        let err = page.parsed_url().unwrap_err();
        assert!(err.to_string().contains("invalid page url"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load("/nonexistent/telemetry-values.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
