use serde::{Deserialize, Serialize};

/// A single quiz question as served by the question endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctOption")]
    pub correct_option: usize,
    pub points: u32,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "question": "Which is the most popular JavaScript framework?",
            "options": ["Angular", "React", "Svelte", "Vue"],
            "correctOption": 1,
            "points": 10,
            "id": "ignored"
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.options.len(), 4);
        assert_eq!(question.correct_option, 1);
        assert_eq!(question.points, 10);
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let json = r#"{ "question": "?", "options": ["a", "b"] }"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
