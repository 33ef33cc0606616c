use axum::{Json, extract::State};
use tracing::debug;

use crate::db::category_map;
use crate::middleware::{IdPath, PageQuery};
use crate::service::paginate;
use crate::types::responses::{CategoriesResponse, CategoryQuestionsResponse};
use crate::{TriviaError, router::TriviaState};

/// GET /categories -> every category as an `{id: type}` mapping.
pub async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<CategoriesResponse>, TriviaError> {
    let categories = state.storage.list_categories().await?;
    if categories.is_empty() {
        return Err(TriviaError::NotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// GET /categories/{id}/questions -> one page of the category's questions.
pub async fn questions_by_category(
    State(state): State<TriviaState>,
    IdPath(category_id): IdPath,
    PageQuery(page): PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, TriviaError> {
    let Some(category) = state.storage.get_category(category_id).await? else {
        debug!(category_id, "unknown category");
        return Err(TriviaError::NotFound);
    };

    let selection = state.storage.questions_in_category(category_id).await?;
    let questions = paginate(&selection, page);
    if questions.is_empty() {
        return Err(TriviaError::NotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions: selection.len(),
        current_category: category,
    }))
}
