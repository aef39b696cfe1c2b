//! Scripted provider for engine and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::llm_client::{CompletionProvider, LlmError};

pub enum Script {
    Reply(String),
    Fail { status: u16, message: String },
}

pub struct ScriptedProvider {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            script: Script::Fail {
                status,
                message: message.into(),
            },
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
