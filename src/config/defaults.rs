use crate::config::Settings;

pub struct DefaultConfig;

impl DefaultConfig {
    pub fn create_default_config_file() -> String {
        r#"[model]
name = "gemini-1.5-flash"
base_url = "https://generativelanguage.googleapis.com"
timeout_secs = 30

# GOOGLE_API_KEY or API_KEY in the environment take precedence.
[credentials]
# api_key = ""

[output]
use_colors = true
"#
        .to_string()
    }

    pub fn get_default_settings() -> Settings {
        Settings::default()
    }
}
