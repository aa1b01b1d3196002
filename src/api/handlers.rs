use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::Movie;
use crate::services::FindMovieView;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct UpdateQueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AddMovieResponse {
    /// False when the movie was already in the collection
    pub added: bool,
    pub view: FindMovieView,
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    t: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Get the current form view
pub async fn get_form(State(state): State<AppState>) -> Json<FindMovieView> {
    let inner = state.inner.read().await;
    Json(inner.form.view())
}

/// Replace the query text (clears the error state)
pub async fn update_query(
    State(state): State<AppState>,
    Json(request): Json<UpdateQueryRequest>,
) -> Json<FindMovieView> {
    let mut inner = state.inner.write().await;
    inner.form.set_query(request.query);
    Json(inner.form.view())
}

/// Look up the current query and stage the result as the preview
///
/// The lock is not held while the lookup runs. The lookup and its state update
/// run in their own task so an abandoned request still completes the submit.
pub async fn submit(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<FindMovieView>> {
    let query = {
        let mut inner = state.inner.write().await;
        if inner.form.is_loading() {
            return Err(AppError::Conflict(
                "A movie lookup is already in progress".to_string(),
            ));
        }
        inner
            .form
            .begin_submit()
            .ok_or_else(|| AppError::InvalidInput("Search query cannot be empty".to_string()))?
    };

    tracing::info!(request_id = %request_id, query = %query, "Submitting movie lookup");

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let outcome = task_state.lookup.lookup(&query).await;
        task_state.inner.write().await.form.finish_submit(outcome);
    });

    if let Err(e) = task.await {
        state.inner.write().await.form.abort_submit(e);
    }

    let inner = state.inner.read().await;
    Ok(Json(inner.form.view()))
}

/// Commit the staged preview into the movie collection
pub async fn add_movie(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<AddMovieResponse>> {
    let mut guard = state.inner.write().await;
    let inner = &mut *guard;

    let added = inner
        .form
        .add(inner.movies.as_mut())
        .ok_or_else(|| AppError::InvalidInput("No movie to add".to_string()))?;

    tracing::info!(request_id = %request_id, added, "Add movie handled");

    Ok(Json(AddMovieResponse {
        added,
        view: inner.form.view(),
    }))
}

/// Get the accepted movies in insertion order
pub async fn get_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    let inner = state.inner.read().await;
    Json(inner.movies.get())
}

/// Look up a title without touching the form
pub async fn lookup_movie(
    State(state): State<AppState>,
    Query(params): Query<LookupQuery>,
) -> AppResult<Json<Movie>> {
    let query = params.t.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput(
            "Search query cannot be empty".to_string(),
        ));
    }

    let found = state.lookup.lookup(query).await?;
    Ok(Json(Movie::from_lookup(found, &state.default_poster)))
}
