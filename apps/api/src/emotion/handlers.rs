//! Axum route handler for the webcam emotion endpoint.

use axum::{extract::State, Json};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::emotion::classifier::EmotionLabel;
use crate::emotion::follow_up::next_question;
use crate::errors::AppError;
use crate::state::AppState;

const IMAGE_DATA_FIELD: &str = "imageData";

#[derive(Debug, Serialize)]
pub struct AnalyzeFaceResponse {
    pub emotion: EmotionLabel,
    pub next_question: String,
}

/// POST /api/analyze-face
///
/// The body is parsed by hand rather than through `Json<T>` so that a missing
/// content type, malformed JSON and a missing key all map to the same 400.
pub async fn handle_analyze_face(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeFaceResponse>, AppError> {
    let image_data = image_data_from_body(&body)
        .ok_or_else(|| AppError::Validation("No image data received".to_string()))?;

    let emotion = state
        .emotion_classifier
        .classify(&image_data)
        .await
        .map_err(|e| AppError::processing("Failed to analyze facial expression", e))?;

    let next_question = next_question(&emotion);

    Ok(Json(AnalyzeFaceResponse {
        emotion,
        next_question,
    }))
}

/// Pulls `imageData` out of a JSON object body. Any value is accepted as long as
/// the key is present; non-string values are handed on as their JSON text.
fn image_data_from_body(body: &[u8]) -> Option<String> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Rejected analyze-face body: {e}");
            return None;
        }
    };

    let Some(image_data) = value.as_object().and_then(|obj| obj.get(IMAGE_DATA_FIELD)) else {
        warn!("Analyze-face body has no '{IMAGE_DATA_FIELD}' key");
        return None;
    };

    Some(match image_data {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_image_data_passes_through() {
        let body = br#"{"imageData":"data:image/jpeg;base64,/9j/"}"#;
        assert_eq!(
            image_data_from_body(body).as_deref(),
            Some("data:image/jpeg;base64,/9j/")
        );
    }

    #[test]
    fn test_non_string_image_data_is_kept_as_json_text() {
        assert_eq!(image_data_from_body(br#"{"imageData":null}"#).as_deref(), Some("null"));
        assert_eq!(image_data_from_body(br#"{"imageData":123}"#).as_deref(), Some("123"));
    }

    #[test]
    fn test_body_must_be_an_object_with_the_key() {
        assert!(image_data_from_body(br#"["data:image/jpeg;base64,x"]"#).is_none());
        assert!(image_data_from_body(br#""imageData""#).is_none());
        assert!(image_data_from_body(br#"{"image":"x"}"#).is_none());
        assert!(image_data_from_body(b"").is_none());
    }
}
