use axum::{Json, extract::State};
use tracing::debug;

use crate::middleware::JsonBody;
use crate::service::quiz::{category_filter, pick_question};
use crate::types::requests::QuizRequest;
use crate::types::responses::QuizResponse;
use crate::{TriviaError, router::TriviaState};

/// POST /quiz -> a random question not yet asked in this quiz session.
pub async fn next_quiz_question(
    State(state): State<TriviaState>,
    JsonBody(body): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, TriviaError> {
    let category = category_filter(body.quiz_category.id);
    let candidates = state
        .storage
        .quiz_candidates(&body.previous_questions, category)
        .await?;

    let Some(question) = pick_question(&candidates, &mut rand::thread_rng()) else {
        debug!(?category, asked = body.previous_questions.len(), "no quiz candidates left");
        return Err(TriviaError::NotFound);
    };

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
