//! Application state: the optional model backend, prompts and request limits.
//!
//! Built once at startup and shared read-only across requests.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::config::{Prompts, Settings};
use crate::groq::{CompletionBackend, Groq};

#[derive(Clone)]
pub struct AppState {
    /// `None` when the credential is missing or unusable.
    pub backend: Option<Arc<dyn CompletionBackend>>,
    /// Reported by `/health` even when the backend is absent.
    pub model: String,
    pub prompts: Prompts,
    pub max_questions: usize,
}

impl AppState {
    /// Build state from settings. A missing/placeholder key leaves the backend unset.
    #[instrument(level = "info", skip_all)]
    pub fn from_settings(settings: &Settings) -> Self {
        let backend: Option<Arc<dyn CompletionBackend>> = match Groq::from_settings(settings) {
            Ok(groq) => {
                info!(target: "quizgen_backend", base_url = %groq.base_url, model = %groq.model, "Groq client initialized");
                Some(Arc::new(groq))
            }
            Err(e) => {
                warn!(target: "quizgen_backend", error = %e, "Groq client not initialized; get a key at https://console.groq.com/keys");
                None
            }
        };

        Self {
            backend,
            model: settings.model.clone(),
            prompts: settings.prompts.clone(),
            max_questions: settings.max_questions,
        }
    }

    /// State around an already-built backend.
    pub fn with_backend(backend: Arc<dyn CompletionBackend>, settings: &Settings) -> Self {
        Self {
            model: backend.model().to_string(),
            backend: Some(backend),
            prompts: settings.prompts.clone(),
            max_questions: settings.max_questions,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.backend.is_some()
    }
}
