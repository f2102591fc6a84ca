use log::{debug, info, warn};
use tokio::sync::watch;

use crate::ai::{PromptBuilder, TextGenerator};
use crate::error::SchemeError;
use crate::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    Idle,
    Processing,
}

/// What the user sees after pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Required fields were missing; nothing was sent.
    Warning(String),
    /// Model text, exactly as returned.
    Recommendations(String),
    /// The provider call failed; carries the failure description.
    Failed(String),
}

/// Shown while waiting on the model.
pub trait ProgressIndicator {
    fn start(&self, message: &str);
    fn finish(&self);
}

pub struct NoProgress;

impl ProgressIndicator for NoProgress {
    fn start(&self, _message: &str) {}
    fn finish(&self) {}
}

pub const LOADING_MESSAGE: &str = "Finding the best schemes for you...";

pub struct Recommender<G: TextGenerator> {
    generator: G,
    prompts: PromptBuilder,
    state: watch::Sender<AdapterState>,
}

impl<G: TextGenerator> Recommender<G> {
    pub fn new(generator: G) -> Self {
        let (state, _) = watch::channel(AdapterState::Idle);
        Self {
            generator,
            prompts: PromptBuilder::new(),
            state,
        }
    }

    pub fn state(&self) -> AdapterState {
        *self.state.borrow()
    }

    /// Follows Idle/Processing transitions as they happen.
    pub fn subscribe(&self) -> watch::Receiver<AdapterState> {
        self.state.subscribe()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Validates the profile and, if complete, asks the model for
    /// recommendations. Always leaves the adapter idle again.
    pub async fn submit<P: ProgressIndicator>(
        &mut self,
        profile: &Profile,
        progress: &P,
    ) -> Outcome {
        if let Err(SchemeError::Validation(message)) = profile.validate() {
            return Outcome::Warning(message);
        }

        let prompt = self.prompts.build_recommendation_prompt(profile);
        debug!("Built prompt ({} bytes)", prompt.len());

        self.state.send_replace(AdapterState::Processing);
        progress.start(LOADING_MESSAGE);
        let result = self.generator.generate(&prompt).await;
        progress.finish();
        self.state.send_replace(AdapterState::Idle);

        match result {
            Ok(text) => {
                if text.trim().is_empty() {
                    warn!("Model returned an empty response");
                }
                info!("Recommendations received ({} bytes)", text.len());
                Outcome::Recommendations(text)
            }
            Err(e) => {
                warn!("Recommendation request failed: {e}");
                Outcome::Failed(e.to_string())
            }
        }
    }
}
