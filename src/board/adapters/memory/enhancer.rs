//! Deterministic description enhancer for tests and offline use.

use crate::board::ports::{DescriptionEnhancer, EnhancerError, EnhancerResult};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone)]
enum Script {
    Reply(String),
    Echo,
    Fail(EnhancerError),
    Hang,
}

/// Description enhancer that follows a fixed script and records every call.
#[derive(Debug, Clone)]
pub struct ScriptedDescriptionEnhancer {
    script: Script,
    calls: Arc<RwLock<Vec<(String, String)>>>,
}

impl ScriptedDescriptionEnhancer {
    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: Arc::default(),
        }
    }

    /// Answers every call with `text`.
    #[must_use]
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_script(Script::Reply(text.into()))
    }

    /// Answers every call with the current description unchanged.
    #[must_use]
    pub fn echoing() -> Self {
        Self::with_script(Script::Echo)
    }

    /// Fails every call with `error`.
    #[must_use]
    pub fn failing(error: EnhancerError) -> Self {
        Self::with_script(Script::Fail(error))
    }

    /// Never completes a call.
    #[must_use]
    pub fn hanging() -> Self {
        Self::with_script(Script::Hang)
    }

    /// Returns the `(title, current_description)` pairs received so far.
    ///
    /// # Errors
    ///
    /// Returns [`EnhancerError::Transport`] when lock acquisition fails.
    pub fn calls(&self) -> EnhancerResult<Vec<(String, String)>> {
        let calls = self
            .calls
            .read()
            .map_err(|err| EnhancerError::transport(std::io::Error::other(err.to_string())))?;
        Ok(calls.clone())
    }
}

#[async_trait]
impl DescriptionEnhancer for ScriptedDescriptionEnhancer {
    async fn enhance(&self, title: &str, current_description: &str) -> EnhancerResult<String> {
        {
            let mut calls = self
                .calls
                .write()
                .map_err(|err| EnhancerError::transport(std::io::Error::other(err.to_string())))?;
            calls.push((title.to_owned(), current_description.to_owned()));
        }

        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Echo => Ok(current_description.to_owned()),
            Script::Fail(error) => Err(error.clone()),
            Script::Hang => std::future::pending().await,
        }
    }
}
