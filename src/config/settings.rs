use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variables checked for the provider key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GOOGLE_API_KEY", "API_KEY"];

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct CredentialsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub use_colors: bool,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path_static()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::from_toml(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))
        } else {
            // Return default settings if config doesn't exist
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn get_config_path(&self) -> Result<PathBuf> {
        Self::get_config_path_static()
    }

    fn get_config_path_static() -> Result<PathBuf> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;

        Ok(home_dir.join(".schemefinder").join("config.toml"))
    }

    /// Resolves the provider key: environment first, then the config file.
    /// Blank values are treated as unset.
    pub fn api_key(&self) -> Option<String> {
        let from_env = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.trim().is_empty());

        from_env.or_else(|| {
            self.credentials
                .api_key
                .clone()
                .filter(|value| !value.trim().is_empty())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let settings = Settings::from_toml("[output]\nuse_colors = false\n").unwrap();
        assert!(!settings.output.use_colors);
        assert_eq!(settings.model.name, "gemini-1.5-flash");
        assert_eq!(settings.model.timeout_secs, 30);
        assert!(settings.credentials.api_key.is_none());
    }

    #[test]
    fn partial_model_table_keeps_other_defaults() {
        let settings = Settings::from_toml("[model]\nname = \"gemini-2.0-flash\"\n").unwrap();
        assert_eq!(settings.model.name, "gemini-2.0-flash");
        assert_eq!(
            settings.model.base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(settings.model.timeout_secs, 30);

        let settings = Settings::from_toml("[output]\n").unwrap();
        assert!(settings.output.use_colors);
    }

    #[test]
    fn reads_model_and_credentials() {
        let settings = Settings::from_toml(
            r#"
[model]
name = "gemini-2.0-flash"
base_url = "http://localhost:9000"
timeout_secs = 5

[credentials]
api_key = "from-file"
"#,
        )
        .unwrap();

        assert_eq!(settings.model.name, "gemini-2.0-flash");
        assert_eq!(settings.model.base_url, "http://localhost:9000");
        assert_eq!(settings.credentials.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn debug_output_hides_key() {
        let credentials = CredentialsConfig {
            api_key: Some("secret-value".to_string()),
        };
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("secret-value"));
        assert!(rendered.contains("REDACTED"));
    }
}
