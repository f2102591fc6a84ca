use console::{style, Color};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::recommender::{Outcome, ProgressIndicator};

pub const TITLE: &str = "🇮🇳 Student Scheme Recommender";
pub const INTRO: &str = "Find government schemes and scholarships tailored to your profile in India.\n\
Fill in your details below to get personalized recommendations.";
pub const SUCCESS_HEADER: &str = "Here are your personalized scheme recommendations:";
pub const VERIFICATION_URL: &str = "https://scholarships.gov.in";
pub const RETRY_HINT: &str = "Please try again later or check your internet connection.";
pub const DISCLAIMER: &str =
    "This tool helps identify potential government schemes but doesn't guarantee eligibility.";

pub struct OutputFormatter {
    use_colors: bool,
}

/// Spinner drawn on stderr while the model is working.
pub struct Spinner {
    bar: ProgressBar,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl ProgressIndicator for Spinner {
    fn start(&self, message: &str) {
        self.bar.set_draw_target(ProgressDrawTarget::stderr());
        if let Ok(spinner_style) = ProgressStyle::with_template("{spinner} {msg}") {
            self.bar.set_style(
                spinner_style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]),
            );
        }
        self.bar.set_message(message.to_string());
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl OutputFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn format_outcome(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Warning(message) => self.format_warning(message),
            Outcome::Recommendations(text) => self.format_recommendations(text),
            Outcome::Failed(message) => format!(
                "{}\n{}",
                self.format_error(&format!("An error occurred: {message}")),
                self.format_info(RETRY_HINT)
            ),
        }
    }

    /// Model text is printed exactly as received, followed by the
    /// verification note.
    pub fn format_recommendations(&self, text: &str) -> String {
        format!(
            "{}\n\n{}\n\n---\n{}",
            self.format_success(SUCCESS_HEADER),
            text,
            self.verification_footer()
        )
    }

    pub fn verification_footer(&self) -> String {
        format!(
            "{} Always verify details on official government websites before applying.\n\
             For more schemes, visit {}",
            self.style_bold("Note:"),
            self.style_text(VERIFICATION_URL, Color::Cyan)
        )
    }

    pub fn format_banner(&self) -> String {
        format!("{}\n{}\n", self.style_bold(TITLE), INTRO)
    }

    pub fn format_disclaimer(&self) -> String {
        format!("---\n{}", self.style_text(DISCLAIMER, Color::White))
    }

    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_text("Error:", Color::Red), message)
    }

    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_text("✓", Color::Green), message)
    }

    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_text("⚠", Color::Yellow), message)
    }

    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_text("ℹ", Color::Blue), message)
    }

    fn style_bold(&self, text: &str) -> String {
        if self.use_colors {
            style(text).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn style_text(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            style(text).fg(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}
