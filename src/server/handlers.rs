//! Request handlers and error classification.
//!
//! This is the only place that turns [`ApiError`] kinds into
//! client-visible statuses and messages. Internal causes are logged here
//! and reduced to a generic body; raw storage errors never reach the
//! client.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ApiError;
use crate::models::Contact;
use crate::server::AppState;

/// Client-facing error body: stable machine code, human message, and
/// optional detail strings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

fn error_body(code: &str, message: &str, details: Vec<String>) -> ErrorBody {
    ErrorBody {
        code: code.to_string(),
        message: message.to_string(),
        details,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                error_body("NOT_FOUND", "resource not found", vec![self.to_string()]),
            ),
            ApiError::InvalidInput(reason) => (
                StatusCode::BAD_REQUEST,
                error_body("INVALID_INPUT", "invalid input", vec![reason.clone()]),
            ),
            ApiError::AlreadyExists(_) => (
                StatusCode::CONFLICT,
                error_body(
                    "ALREADY_EXISTS",
                    "resource already exists",
                    vec![self.to_string()],
                ),
            ),
            ApiError::Database(_) | ApiError::Internal(_) => {
                error!("internal error: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_body(
                        "INTERNAL_ERROR",
                        "internal server error",
                        vec!["please try again later".to_string()],
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Optional list filters; absent or empty values mean "no filter".
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListFilters {
    pub name: String,
    pub number: String,
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidInput(format!("contact id must be an integer, got '{raw}'")))
}

fn parse_body(body: Result<Json<Contact>, JsonRejection>) -> Result<Contact, ApiError> {
    match body {
        Ok(Json(contact)) => Ok(contact),
        Err(rejection) => Err(ApiError::InvalidInput(rejection.body_text())),
    }
}

pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<Contact>, JsonRejection>,
) -> Result<Response, ApiError> {
    let contact = parse_body(body)?;
    state.service.create(&contact).await?;
    Ok((StatusCode::CREATED, Json(contact)).into_response())
}

pub async fn list_contacts(
    State(state): State<AppState>,
    Query(filters): Query<ListFilters>,
) -> Result<Response, ApiError> {
    let contacts = state
        .service
        .find_with_filters(&filters.name, &filters.number)
        .await?;
    Ok(Json(contacts).into_response())
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let contact = state.service.find_by_id(id).await?;
    Ok(Json(contact).into_response())
}

pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Contact>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let mut contact = parse_body(body)?;
    // The path id is authoritative over whatever the body carries.
    contact.id = id;

    state.service.update(&contact).await?;
    Ok(Json(contact).into_response())
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    state.service.delete(id).await?;

    // Post-commit side effect: recorded after the delete is final, and
    // its failure cannot change the outcome.
    state.audit.record(id).await;

    Ok(StatusCode::NO_CONTENT.into_response())
}
