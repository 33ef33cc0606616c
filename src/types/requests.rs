use serde::{Deserialize, Deserializer};

/// Body of `POST /questions`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    pub category: i64,
    #[serde(alias = "difficulty")]
    pub difficulty_score: i64,
}

/// Body of `POST /search`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Body of `POST /quiz`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    #[serde(default)]
    pub previous_questions: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QuizCategory {
    /// `0` selects from every category. Browser clients send this as either
    /// a number or a numeric string.
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub id: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

fn int_or_numeric_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(v) => Ok(v),
        IntOrString::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_accepts_difficulty_alias() {
        let body = json!({"question": "q", "answer": "a", "category": 4, "difficulty": 2});
        let req: CreateQuestionRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.difficulty_score, 2);
    }

    #[test]
    fn create_rejects_missing_fields() {
        let body = json!({"question": "q", "category": 4, "difficulty_score": 2});
        assert!(serde_json::from_value::<CreateQuestionRequest>(body).is_err());
    }

    #[test]
    fn quiz_category_id_accepts_numeric_string() {
        let body = json!({
            "previous_questions": [],
            "quiz_category": {"type": "Entertainment", "id": "5"}
        });
        let req: QuizRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.quiz_category.id, 5);
    }

    #[test]
    fn quiz_previous_questions_default_to_empty() {
        let req: QuizRequest = serde_json::from_value(json!({"quiz_category": {"id": 0}})).unwrap();
        assert!(req.previous_questions.is_empty());
    }

    #[test]
    fn quiz_rejects_non_numeric_category() {
        let body = json!({"quiz_category": {"id": "science"}, "previous_questions": []});
        assert!(serde_json::from_value::<QuizRequest>(body).is_err());
    }
}
