//! Scripted generator for tests and offline runs.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::AiError;
use crate::generator::TextGenerator;

/// A recorded `generate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationCall {
    pub model: String,
    pub prompt: String,
}

/// Returns a fixed reply, or fails with HTTP 503 when built with
/// [`MockGenerator::unavailable`]. Every call is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    reply: Option<String>,
    calls: Arc<Mutex<Vec<GenerationCall>>>,
}

impl MockGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            calls: Arc::default(),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<GenerationCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, AiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(GenerationCall {
                model: model.to_string(),
                prompt: prompt.to_string(),
            });
        }

        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(AiError::Http {
                status: 503,
                body: "mock backend unavailable".to_string(),
            }),
        }
    }
}
