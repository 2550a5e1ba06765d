use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::application::{DogDto, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

use super::super::{ApiError, Container, RequestCancellation};

/// Query string of `GET /dogs`. Paging defaults are applied here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDogsParams {
    pub attribute: Option<String>,
    pub order: Option<String>,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

/// GET /dogs
pub async fn list_dogs(
    State(container): State<Arc<Container>>,
    cancellation: RequestCancellation,
    params: Result<Query<ListDogsParams>, QueryRejection>,
) -> Result<Json<Vec<DogDto>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let dogs = container
        .get_dogs_use_case()
        .execute(
            params.attribute.as_deref(),
            params.order.as_deref(),
            params.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            cancellation.token(),
        )
        .await?;

    Ok(Json(dogs))
}

/// POST /dogs
///
/// Responds 201 with the stored dog (including its id) and a `Location`
/// header pointing at `GET /dogs/{id}`.
pub async fn create_dog(
    State(container): State<Arc<Container>>,
    cancellation: RequestCancellation,
    payload: Result<Json<DogDto>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(dto) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let dog = container
        .create_dog_use_case()
        .execute(dto, cancellation.token())
        .await?;

    let location = format!("/dogs/{}", dog.id());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dog)).into_response())
}

/// GET /dogs/{id}
pub async fn get_dog_by_id(
    State(container): State<Arc<Container>>,
    cancellation: RequestCancellation,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DogDto>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let dog = container
        .get_dog_by_id_use_case()
        .execute(id, cancellation.token())
        .await?;

    Ok(Json(dog))
}
