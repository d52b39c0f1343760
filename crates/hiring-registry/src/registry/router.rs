use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::error::RegistryError;
use super::shared::SharedRegistry;

/// Router builder exposing the registry operations over HTTP.
pub fn registry_router(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/api/v1/skills", post(add_skills_handler))
        .route("/api/v1/skills/:name", get(skill_handler))
        .route("/api/v1/positions", post(add_position_handler))
        .route("/api/v1/positions/:name", get(position_handler))
        .route("/api/v1/positions/:name/winner", put(set_winner_handler))
        .route("/api/v1/applicants", post(add_applicant_handler))
        .route(
            "/api/v1/applicants/:name/capabilities",
            get(capabilities_handler),
        )
        .route("/api/v1/applications", post(enter_application_handler))
        .route("/api/v1/stats/skills", get(skill_counts_handler))
        .route("/api/v1/stats/max-position", get(max_position_handler))
        .with_state(registry)
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AddSkillsRequest {
    pub(crate) names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AddPositionRequest {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) required_skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AddApplicantRequest {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) capabilities: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ApplicationRequest {
    pub(crate) applicant: String,
    pub(crate) position: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct WinnerRequest {
    pub(crate) applicant: String,
}

fn rejection(error: RegistryError) -> Response {
    let status = if error.is_not_found() {
        StatusCode::NOT_FOUND
    } else if error.is_conflict() {
        StatusCode::CONFLICT
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    warn!(kind = error.kind(), %error, "registry operation rejected");

    let payload = json!({
        "error": error.to_string(),
        "kind": error.kind(),
    });
    (status, Json(payload)).into_response()
}

fn created() -> Response {
    (StatusCode::CREATED, Json(json!({ "status": "created" }))).into_response()
}

fn absent(entity: &str, name: &str) -> Response {
    let payload = json!({
        "error": format!("{entity} '{name}' not found"),
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

pub(crate) async fn add_skills_handler(
    State(registry): State<SharedRegistry>,
    Json(request): Json<AddSkillsRequest>,
) -> Response {
    match registry.with(|registry| registry.add_skills(request.names)) {
        Ok(()) => created(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn skill_handler(
    State(registry): State<SharedRegistry>,
    Path(name): Path<String>,
) -> Response {
    match registry.with(|registry| registry.skill(&name).map(|skill| skill.view())) {
        Some(view) => (StatusCode::OK, Json(view)).into_response(),
        None => absent("skill", &name),
    }
}

pub(crate) async fn add_position_handler(
    State(registry): State<SharedRegistry>,
    Json(request): Json<AddPositionRequest>,
) -> Response {
    match registry.with(|registry| registry.add_position(&request.name, &request.required_skills))
    {
        Ok(()) => created(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn position_handler(
    State(registry): State<SharedRegistry>,
    Path(name): Path<String>,
) -> Response {
    match registry.with(|registry| registry.position(&name).map(|position| position.view())) {
        Some(view) => (StatusCode::OK, Json(view)).into_response(),
        None => absent("position", &name),
    }
}

pub(crate) async fn add_applicant_handler(
    State(registry): State<SharedRegistry>,
    Json(request): Json<AddApplicantRequest>,
) -> Response {
    match registry.with(|registry| registry.add_applicant(&request.name, &request.capabilities)) {
        Ok(()) => created(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn capabilities_handler(
    State(registry): State<SharedRegistry>,
    Path(name): Path<String>,
) -> Response {
    match registry.with(|registry| registry.capabilities(&name)) {
        Ok(capabilities) => {
            let payload = json!({
                "applicant": name,
                "capabilities": capabilities,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => rejection(error),
    }
}

pub(crate) async fn enter_application_handler(
    State(registry): State<SharedRegistry>,
    Json(request): Json<ApplicationRequest>,
) -> Response {
    match registry.with(|registry| registry.enter_application(&request.applicant, &request.position))
    {
        Ok(()) => created(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn set_winner_handler(
    State(registry): State<SharedRegistry>,
    Path(position): Path<String>,
    Json(request): Json<WinnerRequest>,
) -> Response {
    match registry.with(|registry| registry.set_winner(&position, &request.applicant)) {
        Ok(score) => {
            let payload = json!({
                "position": position,
                "winner": request.applicant,
                "score": score,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => rejection(error),
    }
}

pub(crate) async fn skill_counts_handler(State(registry): State<SharedRegistry>) -> Response {
    let counts = registry.with(|registry| registry.skill_applicant_counts());
    (StatusCode::OK, Json(counts)).into_response()
}

pub(crate) async fn max_position_handler(State(registry): State<SharedRegistry>) -> Response {
    let position = registry.with(|registry| registry.max_position().map(str::to_string));
    (StatusCode::OK, Json(json!({ "position": position }))).into_response()
}
