//! Fallback discipline around the description enhancer.

use crate::board::ports::DescriptionEnhancer;
use std::sync::Arc;
use std::time::Duration;

/// Wraps a [`DescriptionEnhancer`] so enhancement never fails.
///
/// Whatever goes wrong (missing credential, transport error, malformed or
/// empty response, timeout) the caller gets the description it passed in.
/// Dropping the returned future abandons the call with nothing to clean up.
pub struct DescriptionEnhancementService<E>
where
    E: DescriptionEnhancer,
{
    enhancer: Arc<E>,
    timeout: Option<Duration>,
}

impl<E> Clone for DescriptionEnhancementService<E>
where
    E: DescriptionEnhancer,
{
    fn clone(&self) -> Self {
        Self {
            enhancer: Arc::clone(&self.enhancer),
            timeout: self.timeout,
        }
    }
}

impl<E> DescriptionEnhancementService<E>
where
    E: DescriptionEnhancer,
{
    /// Creates a service that waits as long as the enhancer takes.
    #[must_use]
    pub const fn new(enhancer: Arc<E>) -> Self {
        Self {
            enhancer,
            timeout: None,
        }
    }

    /// Bounds each call by `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns an enhanced description, or `current_description` unchanged.
    ///
    /// An empty title skips the collaborator entirely. A reply is used
    /// verbatim unless it is empty.
    pub async fn enhance(&self, title: &str, current_description: &str) -> String {
        if title.is_empty() {
            return current_description.to_owned();
        }

        let call = self.enhancer.enhance(title, current_description);
        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(
                        timeout = ?limit,
                        "description enhancement timed out; keeping original description"
                    );
                    return current_description.to_owned();
                }
            },
            None => call.await,
        };

        match outcome {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                tracing::debug!("description enhancer returned no text; keeping original");
                current_description.to_owned()
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "description enhancement failed; keeping original description"
                );
                current_description.to_owned()
            }
        }
    }
}
