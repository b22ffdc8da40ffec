//! Question Generator — pluggable, trait-based source of interview questions.
//!
//! Default: `TemplateQuestionGenerator` (fixed templates keyed on text length).
//! Carried in `AppState` as `Arc<dyn QuestionGenerator>`.

use async_trait::async_trait;
use tracing::info;

/// Texts shorter than this (in characters) are treated as a failed extraction.
pub const MIN_TEXT_CHARS: usize = 50;

pub const FALLBACK_QUESTIONS: [&str; 2] = [
    "Could you please tell me about yourself?",
    "What are your strengths?",
];

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, text: Option<&str>) -> anyhow::Result<Vec<String>>;
}

pub struct TemplateQuestionGenerator;

#[async_trait]
impl QuestionGenerator for TemplateQuestionGenerator {
    async fn generate(&self, text: Option<&str>) -> anyhow::Result<Vec<String>> {
        info!("Generating questions based on extracted text...");
        let questions = template_questions(text);
        info!("Generated {} template questions.", questions.len());
        Ok(questions)
    }
}

fn template_questions(text: Option<&str>) -> Vec<String> {
    let length = text.map(|t| t.chars().count()).unwrap_or(0);
    if length < MIN_TEXT_CHARS {
        return FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect();
    }

    vec![
        "Tell me about your experience relevant to this resume.".to_string(),
        "Can you elaborate on [mention a specific point - requires text analysis]?".to_string(),
        "What was a challenging project mentioned here?".to_string(),
        "Why are you interested in this type of role?".to_string(),
        format!("Based on your resume (length: {length} chars), what makes you a good fit?"),
    ]
}
