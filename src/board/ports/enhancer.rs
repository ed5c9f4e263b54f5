//! External text-generation collaborator that rewrites task descriptions.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for description enhancer operations.
pub type EnhancerResult<T> = Result<T, EnhancerError>;

/// Rewrites a task description into a brief professional form.
#[async_trait]
pub trait DescriptionEnhancer: Send + Sync {
    /// Produces an enhanced description for the task.
    ///
    /// `current_description` may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`EnhancerError`] when the collaborator cannot produce text.
    async fn enhance(&self, title: &str, current_description: &str) -> EnhancerResult<String>;
}

/// Errors returned by description enhancer adapters.
#[derive(Debug, Clone, Error)]
pub enum EnhancerError {
    /// No credential is configured for the collaborator.
    #[error("no credential configured for the description enhancer")]
    MissingCredential,

    /// The prompt could not be rendered.
    #[error("failed to render enhancement prompt: {0}")]
    Prompt(String),

    /// The collaborator answered with a non-success status.
    #[error("description enhancer returned HTTP status {0}")]
    Status(u16),

    /// The collaborator's response could not be decoded.
    #[error("malformed description enhancer response: {0}")]
    MalformedResponse(String),

    /// The request did not complete.
    #[error("description enhancer transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl EnhancerError {
    /// Wraps a transport-layer error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
