pub mod gemini_client;
pub mod generator;
pub mod prompt;
pub mod response;

pub use gemini_client::GeminiClient;
pub use generator::TextGenerator;
pub use prompt::PromptBuilder;
pub use response::ResponseParser;
