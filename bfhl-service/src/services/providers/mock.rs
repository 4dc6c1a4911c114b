//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

enum Script {
    Reply(String),
    Empty,
    Fail(String),
}

/// Mock text provider with a scripted response.
pub struct MockTextProvider {
    script: Script,
}

impl MockTextProvider {
    /// Always replies with the given candidate text.
    pub fn replying(text: &str) -> Self {
        Self {
            script: Script::Reply(text.to_string()),
        }
    }

    /// Replies with a response missing the candidate text.
    pub fn empty() -> Self {
        Self {
            script: Script::Empty,
        }
    }

    /// Always fails with an API error carrying the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            script: Script::Fail(message.to_string()),
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, ProviderError> {
        match &self.script {
            Script::Reply(text) => Ok(Some(text.clone())),
            Script::Empty => Ok(None),
            Script::Fail(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}
