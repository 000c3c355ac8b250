//! Genre HTTP routes.
//!
//! Same contract as the director routes, operating on the genre
//! entity. The create handler builds a Genre, not any other record
//! type.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::catalog::{Catalog, Genre, GenreDraft};

use super::errors::{ApiError, ApiResult};
use super::response::CreatedResponse;

const RESOURCE: &str = "Genre";

/// Create genre routes
pub fn genre_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/", get(list_genres_handler).post(create_genre_handler))
        .route(
            "/:id",
            get(get_genre_handler)
                .put(update_genre_handler)
                .delete(delete_genre_handler),
        )
        .with_state(catalog)
}

async fn list_genres_handler(State(catalog): State<Arc<Catalog>>) -> ApiResult<Json<Vec<Genre>>> {
    let genres = catalog
        .list_genres()
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(Json(genres))
}

async fn create_genre_handler(
    State(catalog): State<Arc<Catalog>>,
    Json(draft): Json<GenreDraft>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let id = catalog
        .create_genre(&draft)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

async fn get_genre_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Genre>> {
    let genre = catalog
        .get_genre(id)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(Json(genre))
}

async fn update_genre_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<i64>,
    Json(draft): Json<GenreDraft>,
) -> ApiResult<StatusCode> {
    catalog
        .update_genre(id, &draft)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_genre_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    catalog
        .delete_genre(id)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(StatusCode::NO_CONTENT)
}
