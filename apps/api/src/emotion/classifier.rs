//! Emotion Classifier — pluggable backend that labels a webcam frame.
//!
//! Default: `FixedEmotionClassifier`, which ignores the image and always reports
//! `neutral`. Carried in `AppState` as `Arc<dyn EmotionClassifier>`.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Label produced by a classifier. The set is open-ended; only a few values
/// have bespoke follow-up questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmotionLabel(String);

impl EmotionLabel {
    pub const NEUTRAL: &'static str = "neutral";
    pub const NERVOUS: &'static str = "nervous";
    pub const CONFIDENT: &'static str = "confident";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn neutral() -> Self {
        Self::new(Self::NEUTRAL)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classifier backend failed: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// `image_data` is the payload as sent by the client, usually a
    /// `data:image/jpeg;base64,...` URL. Decoding is left to the backend.
    async fn classify(&self, image_data: &str) -> Result<EmotionLabel, ClassifyError>;
}

pub struct FixedEmotionClassifier;

#[async_trait]
impl EmotionClassifier for FixedEmotionClassifier {
    async fn classify(&self, image_data: &str) -> Result<EmotionLabel, ClassifyError> {
        info!("Analyzing emotion ({} bytes of image data)", image_data.len());
        let label = EmotionLabel::neutral();
        info!("Detected emotion (fixed): {label}");
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_classifier_ignores_image() {
        let blank = FixedEmotionClassifier.classify("").await.unwrap();
        let frame = FixedEmotionClassifier
            .classify("data:image/jpeg;base64,/9j/4AAQSkZJRg==")
            .await
            .unwrap();
        assert_eq!(blank, EmotionLabel::neutral());
        assert_eq!(frame.as_str(), "neutral");
    }

    #[test]
    fn test_label_serializes_as_plain_string() {
        let json = serde_json::to_string(&EmotionLabel::new("nervous")).unwrap();
        assert_eq!(json, "\"nervous\"");
    }
}
