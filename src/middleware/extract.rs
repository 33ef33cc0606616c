//! Request extractors that turn axum's default rejections into the
//! trivia error envelope.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::TriviaError;

/// JSON body decoded into `T`. Any decode failure (missing content type,
/// malformed JSON, missing or mistyped field) is a `BadRequest`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(TriviaError::BadRequest(rejection.body_text())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPage {
    page: Option<i64>,
}

/// 1-based `?page=N`, defaulting to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery(pub usize);

impl Default for PageQuery {
    fn default() -> Self {
        PageQuery(1)
    }
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPage>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| TriviaError::BadRequest(rejection.body_text()))?;

        match raw.page {
            None => Ok(PageQuery::default()),
            Some(page) if page >= 1 => usize::try_from(page)
                .map(PageQuery)
                .map_err(|e| TriviaError::BadRequest(e.to_string())),
            Some(page) => Err(TriviaError::BadRequest(format!(
                "page must be at least 1, got {page}"
            ))),
        }
    }
}

/// Integer id from the path. A non-integer segment is treated like an
/// unknown route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(IdPath(id)),
            Err(rejection) => {
                debug!(path = %parts.uri.path(), reason = %rejection.body_text(), "invalid id segment");
                Err(TriviaError::NotFound)
            }
        }
    }
}
