//! Director HTTP routes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::catalog::{Catalog, Director, DirectorDraft};

use super::errors::{ApiError, ApiResult};
use super::response::CreatedResponse;

const RESOURCE: &str = "Director";

/// Create director routes
pub fn director_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/", get(list_directors_handler).post(create_director_handler))
        .route(
            "/:id",
            get(get_director_handler)
                .put(update_director_handler)
                .delete(delete_director_handler),
        )
        .with_state(catalog)
}

async fn list_directors_handler(
    State(catalog): State<Arc<Catalog>>,
) -> ApiResult<Json<Vec<Director>>> {
    let directors = catalog
        .list_directors()
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(Json(directors))
}

async fn create_director_handler(
    State(catalog): State<Arc<Catalog>>,
    Json(draft): Json<DirectorDraft>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let id = catalog
        .create_director(&draft)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

async fn get_director_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Director>> {
    let director = catalog
        .get_director(id)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(Json(director))
}

async fn update_director_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<i64>,
    Json(draft): Json<DirectorDraft>,
) -> ApiResult<StatusCode> {
    catalog
        .update_director(id, &draft)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_director_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    catalog
        .delete_director(id)
        .map_err(|e| ApiError::from_catalog(RESOURCE, e))?;

    Ok(StatusCode::NO_CONTENT)
}
