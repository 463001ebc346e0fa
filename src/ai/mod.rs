mod ai_error;
pub(crate) mod gateway;
mod gemini;
mod prompt;

pub use ai_error::GatewayError;
pub use gateway::{AiSearchGateway, SearchProvider, FAILURE_SUMMARY, UNAVAILABLE_SUMMARY};
pub use gemini::GeminiProvider;
pub use prompt::SearchPrompt;
