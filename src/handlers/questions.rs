use axum::{Json, extract::State};
use tracing::{info, warn};

use crate::db::{NewQuestion, category_map};
use crate::middleware::{IdPath, JsonBody, PageQuery};
use crate::service::paginate;
use crate::types::requests::{CreateQuestionRequest, SearchRequest};
use crate::types::responses::{
    CreatedResponse, DeletedResponse, QuestionListResponse, SearchResponse,
};
use crate::{TriviaError, router::TriviaState};

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<TriviaState>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionListResponse>, TriviaError> {
    let selection = state.storage.list_questions().await?;
    let questions = paginate(&selection, page);
    if questions.is_empty() {
        return Err(TriviaError::NotFound);
    }

    let categories = state.storage.list_categories().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions: selection.len(),
        categories: category_map(&categories),
    }))
}

/// DELETE /questions/{id}
///
/// A missing id is reported as 422, not 404; clients of this API rely on it.
pub async fn delete_question(
    State(state): State<TriviaState>,
    IdPath(id): IdPath,
    PageQuery(page): PageQuery,
) -> Result<Json<DeletedResponse>, TriviaError> {
    let existing = state
        .storage
        .get_question(id)
        .await
        .map_err(|e| TriviaError::Unprocessable(e.to_string()))?;
    if existing.is_none() {
        return Err(TriviaError::Unprocessable(format!("question {id} does not exist")));
    }

    let removed = state
        .storage
        .delete_question(id)
        .await
        .map_err(|e| TriviaError::Unprocessable(e.to_string()))?;
    if removed == 0 {
        // lost a race with a concurrent delete
        return Err(TriviaError::Unprocessable(format!("question {id} does not exist")));
    }
    info!(id, "question deleted");

    let selection = state.storage.list_questions().await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        questions: paginate(&selection, page),
        total_questions: selection.len(),
    }))
}

/// POST /questions
pub async fn create_question(
    State(state): State<TriviaState>,
    PageQuery(page): PageQuery,
    JsonBody(body): JsonBody<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, TriviaError> {
    let new = NewQuestion {
        question: body.question,
        answer: body.answer,
        category: body.category,
        difficulty: body.difficulty_score,
    };

    let created = state.storage.insert_question(new).await.map_err(|e| {
        warn!(error = %e, "failed to insert question");
        TriviaError::Unprocessable(e.to_string())
    })?;
    info!(id = created, "question created");

    let selection = state.storage.list_questions().await?;

    Ok(Json(CreatedResponse {
        success: true,
        created,
        questions: paginate(&selection, page),
        total_questions: selection.len(),
    }))
}

/// POST /search -> case-insensitive substring match on question text.
pub async fn search_questions(
    State(state): State<TriviaState>,
    PageQuery(page): PageQuery,
    JsonBody(body): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, TriviaError> {
    let selection = state.storage.search_questions(&body.search_term).await?;
    let questions = paginate(&selection, page);
    if questions.is_empty() {
        return Err(TriviaError::NotFound);
    }

    Ok(Json(SearchResponse {
        success: true,
        questions,
        total_questions: selection.len(),
    }))
}
