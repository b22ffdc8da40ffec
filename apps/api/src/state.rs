use std::sync::Arc;

use crate::config::Config;
use crate::emotion::classifier::{EmotionClassifier, FixedEmotionClassifier};
use crate::intake::extractor::{PlaceholderTextExtractor, TextExtractor};
use crate::intake::questions::{QuestionGenerator, TemplateQuestionGenerator};
use crate::intake::storage::UploadStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub uploads: UploadStore,
    /// Pluggable text extractor. Default: PlaceholderTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable question generator. Default: TemplateQuestionGenerator.
    pub question_generator: Arc<dyn QuestionGenerator>,
    /// Pluggable emotion classifier. Default: FixedEmotionClassifier.
    pub emotion_classifier: Arc<dyn EmotionClassifier>,
}

impl AppState {
    /// Builds state with the built-in placeholder collaborators.
    pub fn new(config: Config) -> Self {
        Self {
            uploads: UploadStore::new(config.upload_dir.clone()),
            config,
            extractor: Arc::new(PlaceholderTextExtractor),
            question_generator: Arc::new(TemplateQuestionGenerator),
            emotion_classifier: Arc::new(FixedEmotionClassifier),
        }
    }
}
