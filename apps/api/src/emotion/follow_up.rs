use crate::emotion::classifier::EmotionLabel;

/// Picks the next interview question for a detected emotion.
pub fn next_question(emotion: &EmotionLabel) -> String {
    match emotion.as_str() {
        EmotionLabel::NERVOUS => {
            "It's okay to take a moment. Can you tell me about a time you felt successful?"
                .to_string()
        }
        EmotionLabel::CONFIDENT => {
            "Great! Let's dive deeper. Can you elaborate on your technical skills?".to_string()
        }
        other => format!("This is a follow-up question based on your (simulated) emotion: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nervous_gets_reassurance() {
        let q = next_question(&EmotionLabel::new("nervous"));
        assert!(q.starts_with("It's okay to take a moment."));
    }

    #[test]
    fn test_confident_goes_deeper() {
        let q = next_question(&EmotionLabel::new("confident"));
        assert!(q.contains("technical skills"));
    }

    #[test]
    fn test_other_labels_are_embedded() {
        assert!(next_question(&EmotionLabel::neutral()).ends_with("emotion: neutral"));
        assert!(next_question(&EmotionLabel::new("surprised")).contains("surprised"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let q = next_question(&EmotionLabel::new("Nervous"));
        assert!(q.contains("(simulated) emotion: Nervous"));
    }
}
