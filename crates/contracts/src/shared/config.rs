use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// URL absoluta da API. Vazia: mesmo host da página, na `fallback_port`.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_fallback_port")]
    pub fallback_port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_poll_secs")]
    pub notification_poll_secs: u32,
    #[serde(default = "default_analytics_days")]
    pub analytics_days: u32,
}

fn default_fallback_port() -> u16 {
    3333
}

fn default_page_size() -> usize {
    crate::shared::pagination::DEFAULT_PAGE_SIZE
}

fn default_poll_secs() -> u32 {
    30
}

fn default_analytics_days() -> u32 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            fallback_port: default_fallback_port(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            notification_poll_secs: default_poll_secs(),
            analytics_days: default_analytics_days(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Configuração padrão embutida no bundle.
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
fallback_port = 3333

[ui]
page_size = 20
notification_poll_secs = 30
analytics_days = 30
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuração inválida: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("configuração inválida: {0}")]
    Invalid(String),
}

/// Lê e valida um documento TOML de configuração.
pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = toml::from_str(text)?;

    if config.ui.page_size == 0 {
        return Err(ConfigError::Invalid("ui.page_size deve ser maior que zero".into()));
    }
    if config.ui.notification_poll_secs == 0 {
        return Err(ConfigError::Invalid(
            "ui.notification_poll_secs deve ser maior que zero".into(),
        ));
    }

    let trimmed = config.api.base_url.trim().trim_end_matches('/').to_string();
    config.api.base_url = trimmed;

    Ok(config)
}

impl AppConfig {
    /// Base da API a partir da localização da página (`protocol`, `hostname`).
    pub fn api_base(&self, protocol: &str, hostname: &str) -> String {
        if !self.api.base_url.is_empty() {
            return self.api.base_url.clone();
        }
        format!("{}//{}:{}", protocol, hostname, self.api.fallback_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ui.notification_poll_secs, 30);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://api.barber.test/\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://api.barber.test");
        assert_eq!(config.ui.page_size, 20);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            parse_config("[ui]\npage_size = 0\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            parse_config("[ui]\npage_size = \"dez\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_api_base_resolution() {
        let config = AppConfig::default();
        assert_eq!(config.api_base("https:", "admin.local"), "https://admin.local:3333");

        let config = parse_config("[api]\nbase_url = \"http://10.0.0.2:8080\"\n").unwrap();
        assert_eq!(config.api_base("https:", "admin.local"), "http://10.0.0.2:8080");
    }
}
