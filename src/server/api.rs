//! JSON API handlers

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use super::ServerState;
use crate::bio::{generate_personalized_bio, BioInput};
use crate::error::Error;
use crate::mail::{send_contact_email, ContactMessage};
use crate::store::SaveError;
use crate::upload::{sign_upload, SignRequest};

/// Health check endpoint
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": "stagefront",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

/// GET /api/content
///
/// Public read contract: the current document, reconciled against defaults.
pub async fn get_content(State(state): State<Arc<ServerState>>) -> Json<Value> {
    Json(state.repo.load_document().await)
}

/// GET /api/admin/content
pub async fn admin_get_content(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    Json(state.repo.load_document().await).into_response()
}

/// PUT /api/admin/content
///
/// Replace the stored document with a validated one. On success the page
/// cache is dropped and open pages are told to reload.
pub async fn admin_put_content(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    Json(document): Json<Value>,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    match state.repo.save(&document).await {
        Ok(_) => {
            state.page_cache.invalidate();
            let _ = state.reload_tx.send(());
            Json(json!({
                "success": true,
                "message": "Content saved successfully!",
            }))
            .into_response()
        }
        Err(SaveError::Invalid(violations)) => {
            let summary = violations
                .iter()
                .map(|v| v.message.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "success": false,
                    "message": format!("Validation failed: {summary}"),
                    "violations": violations,
                })),
            )
                .into_response()
        }
        Err(e) => {
            warn!("Failed to save site content: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "success": false, "message": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// POST /api/contact
///
/// Validate a contact-form submission, then hand it to the email boundary.
pub async fn submit_contact(
    State(state): State<Arc<ServerState>>,
    Form(message): Form<ContactMessage>,
) -> Response {
    if let Err(violations) = message.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "success": false,
                "message": "Please correct the highlighted fields.",
                "violations": violations,
            })),
        )
            .into_response();
    }

    match send_contact_email(&state.http, &state.config.mail, &message).await {
        Ok(()) => Json(json!({
            "success": true,
            "message": "Thanks for reaching out! Your message has been sent.",
        }))
        .into_response(),
        Err(e @ Error::NotConfigured(_)) => user_facing_error(StatusCode::BAD_REQUEST, e),
        Err(e) => user_facing_error(StatusCode::BAD_GATEWAY, e),
    }
}

/// POST /api/upload/sign
///
/// Sign image-upload parameters for the client-side widget.
pub async fn sign_upload_params(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SignRequest>,
) -> Response {
    match sign_upload(&state.config.uploads, &request) {
        Ok(signed) => Json(signed).into_response(),
        Err(e) => user_facing_error(StatusCode::BAD_REQUEST, e),
    }
}

#[derive(Debug, Deserialize)]
pub struct BioRequestBody {
    pub visitor_location: String,
}

/// POST /api/bio
///
/// Personalize the artist biography for a visitor's location. Falls back
/// to the stored biography when generation is unavailable.
pub async fn personalized_bio(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<BioRequestBody>,
) -> Json<Value> {
    let document = state.repo.load_document().await;
    let artist_name = document["artistName"].as_str().unwrap_or_default();
    let artist_bio = document["artistBio"].as_str().unwrap_or_default();

    let input = BioInput {
        artist_name: artist_name.to_string(),
        artist_bio: artist_bio.to_string(),
        visitor_location: request.visitor_location,
    };

    match generate_personalized_bio(&state.http, &state.config.bio, &input).await {
        Ok(output) => Json(json!({ "personalizedBio": output.personalized_bio })),
        Err(e) => {
            warn!("Failed to generate personalized bio: {}", e);
            Json(json!({ "personalizedBio": input.artist_bio }))
        }
    }
}

fn authorize(state: &ServerState, headers: &HeaderMap) -> Result<(), Response> {
    let provided = headers
        .get("x-admin-password")
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(password) if password == state.config.admin_password => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Invalid admin password." })),
        )
            .into_response()),
    }
}

fn user_facing_error(status: StatusCode, error: Error) -> Response {
    (
        status,
        Json(json!({ "success": false, "message": error.to_string() })),
    )
        .into_response()
}
