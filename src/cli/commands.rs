use anyhow::Result;
use log::{debug, info};
use std::fs;

use crate::ai::{GeminiClient, PromptBuilder, TextGenerator};
use crate::cli::{Commands, OutputFormatter, ProfileArgs, ProfileForm, Spinner};
use crate::config::{DefaultConfig, Settings, API_KEY_ENV_VARS};
use crate::profile::Profile;
use crate::recommender::{Outcome, Recommender};

/// Text for the terminal plus whether the command achieved what was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }
}

pub struct CommandHandler<G: TextGenerator = GeminiClient> {
    recommender: Recommender<G>,
    settings: Settings,
    formatter: OutputFormatter,
    config_error: Option<String>,
}

pub fn version_info() -> String {
    format!(
        "schemefinder {}\nRust version: {}\nTarget: {}",
        env!("CARGO_PKG_VERSION"),
        env!("SCHEMEFINDER_RUST_VERSION"),
        env!("SCHEMEFINDER_TARGET")
    )
}

impl CommandHandler<GeminiClient> {
    pub fn new(settings: Settings, use_colors: bool) -> Result<Self> {
        let client = GeminiClient::new(&settings)?;
        Ok(Self::with_generator(settings, client, use_colors))
    }

    pub async fn handle_command(&mut self, command: Commands) -> Result<CommandOutput> {
        match command {
            Commands::Form => self.run_form().await,
            Commands::Recommend(args) => {
                let mut output = self.handle_profile(&Profile::from(&args)).await;
                let caption = self.formatter.format_disclaimer();
                output.text = format!("{}\n{caption}", output.text);
                Ok(output)
            }
            Commands::Prompt(args) => Ok(self.handle_prompt_preview(&args)),
            Commands::Init => self.handle_init(),
            Commands::Config => self.handle_config(),
            Commands::Doctor => self.handle_doctor(),
            Commands::Version => Ok(self.handle_version()),
        }
    }

    fn handle_doctor(&self) -> Result<CommandOutput> {
        let mut diagnostics = Vec::new();
        let mut healthy = true;

        let config_path = self.settings.get_config_path()?;
        if let Some(error) = &self.config_error {
            healthy = false;
            diagnostics.push(format!(
                "✗ Config file {} could not be loaded, using defaults: {error}",
                config_path.display()
            ));
        } else if config_path.exists() {
            diagnostics.push(format!("✓ Config file found at {}", config_path.display()));
        } else {
            diagnostics.push("✗ No config file (run: schemefinder init), using defaults".to_string());
        }

        let client = self.recommender.generator();
        if client.has_api_key() {
            diagnostics.push("✓ API key configured".to_string());
        } else {
            healthy = false;
            diagnostics.push(format!(
                "✗ API key missing (set {} or [credentials] api_key)",
                API_KEY_ENV_VARS.join(" or ")
            ));
        }

        match client.endpoint() {
            Ok(url) => diagnostics.push(format!("✓ Model endpoint {url}")),
            Err(e) => {
                healthy = false;
                diagnostics.push(format!("✗ Model endpoint: {e}"));
            }
        }

        let report = format!("Scheme Finder Health Check:\n{}", diagnostics.join("\n"));
        Ok(if healthy {
            CommandOutput::ok(report)
        } else {
            CommandOutput::failed(report)
        })
    }
}

impl<G: TextGenerator> CommandHandler<G> {
    pub fn with_generator(settings: Settings, generator: G, use_colors: bool) -> Self {
        Self {
            recommender: Recommender::new(generator),
            settings,
            formatter: OutputFormatter::new(use_colors),
            config_error: None,
        }
    }

    /// Keeps a settings load failure around so diagnostics can report it.
    pub fn with_config_error(mut self, error: impl Into<String>) -> Self {
        self.config_error = Some(error.into());
        self
    }

    /// Submits one profile and renders whatever came back.
    pub async fn handle_profile(&mut self, profile: &Profile) -> CommandOutput {
        debug!("Submitting profile: {profile:?}");
        let outcome = self.recommender.submit(profile, &Spinner::new()).await;
        let text = self.formatter.format_outcome(&outcome);

        match outcome {
            Outcome::Recommendations(_) => CommandOutput::ok(text),
            Outcome::Warning(_) | Outcome::Failed(_) => CommandOutput::failed(text),
        }
    }

    /// Interactive loop. The last values entered become the starting point
    /// of the next round, whatever the outcome was.
    pub async fn run_form(&mut self) -> Result<CommandOutput> {
        let form = ProfileForm::new();
        let mut previous = Profile::default();

        println!("{}", self.formatter.format_banner());

        loop {
            let profile = form.fill(&previous)?;

            if form.confirm_submit()? {
                let output = self.handle_profile(&profile).await;
                println!("{}\n", output.text);
            }

            previous = profile;
            if !form.confirm_again()? {
                break;
            }
        }

        Ok(CommandOutput::ok(self.formatter.format_disclaimer()))
    }

    fn handle_prompt_preview(&self, args: &ProfileArgs) -> CommandOutput {
        let profile = Profile::from(args);
        match profile.validate() {
            Ok(()) => CommandOutput::ok(PromptBuilder::new().build_recommendation_prompt(&profile)),
            Err(e) => CommandOutput::failed(self.formatter.format_warning(&e.to_string())),
        }
    }

    fn handle_init(&self) -> Result<CommandOutput> {
        let config_path = self.settings.get_config_path()?;

        if config_path.exists() {
            return Ok(CommandOutput::ok(self.formatter.format_info(&format!(
                "Config already exists at {}",
                config_path.display()
            ))));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, DefaultConfig::create_default_config_file())?;
        info!("Wrote default config to {}", config_path.display());

        Ok(CommandOutput::ok(self.formatter.format_success(&format!(
            "Created {}",
            config_path.display()
        ))))
    }

    fn handle_config(&self) -> Result<CommandOutput> {
        let key_status = match self.settings.api_key() {
            Some(_) => "configured (hidden)",
            None => "not set",
        };

        Ok(CommandOutput::ok(format!(
            "Scheme Finder Configuration:\n\
            - Config file: {}\n\
            - Model: {}\n\
            - Endpoint base: {}\n\
            - Request timeout: {}s\n\
            - API key: {}\n\
            - Use colors: {}",
            self.settings.get_config_path()?.display(),
            self.settings.model.name,
            self.settings.model.base_url,
            self.settings.model.timeout_secs,
            key_status,
            self.settings.output.use_colors
        )))
    }

    fn handle_version(&self) -> CommandOutput {
        CommandOutput::ok(version_info())
    }

    pub fn format_error(&self, message: &str) -> String {
        self.formatter.format_error(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use async_trait::async_trait;
    use clap::Parser;

    struct Canned(&'static str);

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    fn args(extra: &[&str]) -> ProfileArgs {
        let argv = ["schemefinder", "prompt"].iter().chain(extra.iter()).copied();
        match crate::cli::Cli::parse_from(argv).command {
            Some(Commands::Prompt(args)) => args,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn profile_success_renders_model_text() {
        let mut handler = CommandHandler::with_generator(
            Settings::default(),
            Canned("Scheme A: ..."),
            false,
        );
        let profile = Profile::from(&args(&[
            "--education",
            "12th",
            "--caste",
            "ST",
            "--state",
            "Assam",
        ]));

        let output = handler.handle_profile(&profile).await;

        assert!(output.success);
        assert!(output.text.contains("\n\nScheme A: ...\n\n---\n"));
        assert!(output.text.contains("https://scholarships.gov.in"));
    }

    #[tokio::test]
    async fn incomplete_profile_is_unsuccessful() {
        let mut handler =
            CommandHandler::with_generator(Settings::default(), Canned("unused"), false);
        let output = handler.handle_profile(&Profile::default()).await;

        assert!(!output.success);
        assert_eq!(output.text, "⚠ Please fill all required fields");
    }

    #[test]
    fn prompt_preview_requires_complete_profile() {
        let handler = CommandHandler::with_generator(Settings::default(), Canned("unused"), false);

        let rejected = handler.handle_prompt_preview(&args(&["--state", "Goa"]));
        assert!(!rejected.success);

        let accepted = handler.handle_prompt_preview(&args(&[
            "--education",
            "Diploma",
            "--caste",
            "EWS",
            "--state",
            "Goa",
        ]));
        assert!(accepted.success);
        assert!(accepted.text.contains("- State: Goa"));
    }

    #[test]
    fn doctor_lists_config_load_failure() {
        let client =
            GeminiClient::with_api_key(&Settings::default(), Some("key".into())).unwrap();
        let handler = CommandHandler::with_generator(Settings::default(), client, false)
            .with_config_error("invalid table header");

        let output = handler.handle_doctor().unwrap();

        assert!(!output.success);
        assert!(output.text.contains("✗ Config file"));
        assert!(output.text.contains("invalid table header"));
        assert!(output.text.contains("✓ API key configured"));
    }

    #[test]
    fn version_names_the_binary() {
        let handler = CommandHandler::with_generator(Settings::default(), Canned("unused"), false);
        assert!(handler.handle_version().text.starts_with("schemefinder "));
    }
}
