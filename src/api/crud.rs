//! Generic CRUD handlers, instantiated once per resource.
//!
//! Update and delete look the record up first (update inside the service),
//! so a missing id answers 404 whatever the store would have reported.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use super::error::ApiError;
use crate::resources::Resource;
use crate::services::CrudService;

/// Routes `/{path}`, `/{path}/` and `/{path}/:id` for resource `R`
pub fn resource_router<R: Resource>(service: CrudService<R>) -> Router {
    let collection = format!("/{}", R::PATH);

    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(
            &format!("{}/", collection),
            get(list::<R>).post(create::<R>),
        )
        .route(
            &format!("{}/:id", collection),
            get(get_by_id::<R>)
                .put(update::<R>)
                .delete(delete::<R>),
        )
        .with_state(service)
}

pub async fn list<R: Resource>(
    State(service): State<CrudService<R>>,
) -> Result<Json<Vec<R::Dto>>, ApiError> {
    Ok(Json(service.find_all().await?))
}

pub async fn get_by_id<R: Resource>(
    State(service): State<CrudService<R>>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    match service.find_by_id(id).await? {
        Some(record) => Ok((StatusCode::OK, Json(record)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub async fn create<R: Resource>(
    State(service): State<CrudService<R>>,
    Json(payload): Json<R::Dto>,
) -> Result<(StatusCode, Json<R::Dto>), ApiError> {
    let saved = service.save(payload).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn update<R: Resource>(
    State(service): State<CrudService<R>>,
    Path(id): Path<i64>,
    Json(payload): Json<R::Dto>,
) -> Result<Response, ApiError> {
    match service.update(id, payload).await? {
        Some(_) => Ok((
            StatusCode::OK,
            format!("Object with id {} was updated.", id),
        )
            .into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub async fn delete<R: Resource>(
    State(service): State<CrudService<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if service.find_by_id(id).await?.is_none() {
        return Ok(StatusCode::NOT_FOUND);
    }

    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
