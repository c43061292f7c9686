/// Shell configuration
///
/// Titles, redirect destinations and clock settings for the dashboard shell.

use chrono::format::{Item, StrftimeItems};
use leptos::use_context;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

/// Environment variable naming an optional TOML file with shell settings
pub const CONFIG_ENV: &str = "CAMPUS_SHELL_CONFIG";

/// Name of the `<meta>` tag that carries the server's settings to the browser
pub const CONFIG_META: &str = "campus-shell-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Title shown in the sidebar brand and when no entry is active
    #[serde(default = "default_app_title")]
    pub app_title: String,

    /// Where unauthenticated visitors and logged-out users are sent
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Landing route after sign in and for `/`
    #[serde(default = "default_home_path")]
    pub home_path: String,

    /// Topbar clock refresh period in milliseconds
    #[serde(default = "default_clock_tick_ms")]
    pub clock_tick_ms: u32,

    /// strftime pattern for the topbar clock
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_title: default_app_title(),
            login_path: default_login_path(),
            home_path: default_home_path(),
            clock_tick_ms: default_clock_tick_ms(),
            clock_format: default_clock_format(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ShellConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.login_path.starts_with('/') {
            return Err(ShellError::config(format!(
                "login_path must be absolute, got {:?}",
                self.login_path
            )));
        }

        if !self.home_path.starts_with('/') {
            return Err(ShellError::config(format!(
                "home_path must be absolute, got {:?}",
                self.home_path
            )));
        }

        if self.login_path == self.home_path {
            return Err(ShellError::config("login_path and home_path must differ"));
        }

        if self.clock_tick_ms == 0 {
            return Err(ShellError::config("clock_tick_ms must be greater than zero"));
        }

        if StrftimeItems::new(&self.clock_format).any(|item| matches!(item, Item::Error)) {
            return Err(ShellError::config(format!(
                "clock_format is not a valid strftime pattern: {:?}",
                self.clock_format
            )));
        }

        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Load from the file named by `CAMPUS_SHELL_CONFIG`, or fall back to defaults
    #[cfg(feature = "ssr")]
    pub fn load_from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                tracing::info!("Loading shell config from {}", path);
                let content = std::fs::read_to_string(&path)?;
                Self::from_toml_str(&content)
            }
            Err(_) => {
                tracing::info!("{} not set, using default shell config", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    /// Read the settings the server embedded in the page head
    #[cfg(feature = "hydrate")]
    pub fn load_from_document() -> Self {
        let selector = format!("meta[name=\"{}\"]", CONFIG_META);
        let content = leptos::document()
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"));

        let Some(content) = content else {
            log::warn!("No {} meta tag, using default shell config", CONFIG_META);
            return Self::default();
        };

        Self::from_toml_str(&content).unwrap_or_else(|e| {
            log::warn!("Ignoring embedded shell config: {}", e);
            Self::default()
        })
    }
}

/// Shell configuration from context, defaults when the host provided none
pub fn use_shell_config() -> ShellConfig {
    use_context::<ShellConfig>().unwrap_or_default()
}

fn default_app_title() -> String {
    "Campus".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_home_path() -> String {
    "/dashboard".to_string()
}

fn default_clock_tick_ms() -> u32 {
    1000
}

fn default_clock_format() -> String {
    "%H:%M:%S".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ShellConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.clock_tick_ms, 1000);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ShellConfig::from_toml_str(
            r#"
            app_title = "Northside High"
            clock_format = "%H:%M"
            "#,
        )
        .unwrap();

        assert_eq!(config.app_title, "Northside High");
        assert_eq!(config.clock_format, "%H:%M");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.home_path, "/dashboard");
    }

    #[test]
    fn example_file_parses() {
        let config =
            ShellConfig::from_toml_str(include_str!("../campus-shell.example.toml")).unwrap();
        assert_eq!(config.app_title, "Northside High");
        assert_eq!(config.clock_tick_ms, 1000);
    }

    #[test]
    fn embedded_form_reads_back_identically() {
        let config = ShellConfig {
            app_title: "Northside \"High\"".to_string(),
            login_path: "/sign-in".to_string(),
            home_path: "/students".to_string(),
            clock_tick_ms: 500,
            clock_format: "%H:%M".to_string(),
        };

        let embedded = config.to_toml_string().unwrap();
        assert_eq!(ShellConfig::from_toml_str(&embedded).unwrap(), config);
    }

    #[test]
    fn relative_login_path_is_rejected() {
        let err = ShellConfig::from_toml_str(r#"login_path = "login""#).unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }

    #[test]
    fn zero_tick_is_rejected() {
        let err = ShellConfig::from_toml_str("clock_tick_ms = 0").unwrap_err();
        assert!(err.to_string().contains("clock_tick_ms"));
    }

    #[test]
    fn broken_clock_format_is_rejected() {
        let err = ShellConfig::from_toml_str(r#"clock_format = "%Q""#).unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ShellConfig::from_toml_str("app_title = ").unwrap_err();
        assert!(matches!(err, ShellError::TomlParse(_)));
    }
}
