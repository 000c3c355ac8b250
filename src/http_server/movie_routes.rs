//! Movie HTTP routes.
//!
//! Collection endpoint supports exact-match `director_id` and
//! `genre_id` query filters; both may be combined.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::catalog::{Catalog, Movie, MovieDraft, MovieFilter};

use super::errors::{ApiError, ApiResult};
use super::response::CreatedResponse;

const RESOURCE: &str = "Movie";

/// Create movie routes
pub fn movie_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/", get(list_movies_handler).post(create_movie_handler))
        .route(
            "/:id",
            get(get_movie_handler)
                .put(update_movie_handler)
                .delete(delete_movie_handler),
        )
        .with_state(catalog)
}

async fn list_movies_handler(
    State(catalog): State<Arc<Catalog>>,
    Query(filter): Query<MovieFilter>,
) -> ApiResult<Json<Vec<Movie>>> {
    let movies = catalog
        .list_movies(&filter)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(Json(movies))
}

async fn create_movie_handler(
    State(catalog): State<Arc<Catalog>>,
    Json(draft): Json<MovieDraft>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let id = catalog
        .create_movie(&draft)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

async fn get_movie_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Movie>> {
    let movie = catalog
        .get_movie(id)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(Json(movie))
}

async fn update_movie_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<i64>,
    Json(patch): Json<MovieDraft>,
) -> ApiResult<StatusCode> {
    catalog
        .update_movie(id, &patch)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_movie_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    catalog
        .delete_movie(id)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(StatusCode::NO_CONTENT)
}
