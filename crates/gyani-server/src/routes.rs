//! Route handlers.
//!
//! Every failure the backend itself produces is answered with HTTP 200 and a
//! `{"error": message}` body. Only malformed requests rejected by actix's
//! extractors (e.g. `/ai` without `prompt`) get a 4xx.

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use gyani_core::registry::MODELS;
use gyani_core::utils::{timestamp, truncate_string};

use crate::state::AppState;

/// Prompt characters kept in log lines.
const PROMPT_LOG_CHARS: usize = 50;

// ─────────────────────────────────────────────
// Request / response bodies
// ─────────────────────────────────────────────

/// Query of `GET /ai`.
#[derive(Debug, Deserialize)]
pub struct AiQuery {
    pub prompt: String,
    pub model: Option<String>,
    /// Set to `false` to skip the rewriting pass for this request.
    pub humanize: Option<bool>,
}

/// Body of `POST /api/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    pub model: Option<String>,
    pub humanize: Option<bool>,
}

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthBody<'a> {
    status: &'static str,
    app: &'a str,
    timestamp: String,
}

#[derive(Serialize)]
struct CompletionBody {
    response: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ModelsBody<'a> {
    default: &'a str,
    models: Vec<ModelEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelKeyEntry {
    id: &'static str,
    key_name: &'static str,
    env_var: &'static str,
    configured: bool,
}

#[derive(Serialize)]
struct ModelKeysBody {
    models: Vec<ModelKeyEntry>,
}

#[derive(Serialize)]
struct ModelEntry {
    id: &'static str,
    name: &'static str,
    configured: bool,
}

fn error_response(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(ErrorBody {
        error: message.into(),
    })
}

// ─────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────

/// Register every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root)
        .service(health)
        .service(ai)
        .service(generate)
        .service(list_models)
        .service(list_model_keys);
}

#[get("/")]
async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageBody {
        message: "Backend is running with CORS enabled!",
    })
}

#[get("/health")]
async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthBody {
        status: "ok",
        app: &state.config.app.name,
        timestamp: timestamp(),
    })
}

#[get("/ai")]
async fn ai(state: web::Data<AppState>, query: web::Query<AiQuery>) -> impl Responder {
    let query = query.into_inner();
    answer(
        &state,
        &query.prompt,
        query.model.as_deref(),
        query.humanize.unwrap_or(true),
    )
    .await
}

#[post("/api/generate")]
async fn generate(state: web::Data<AppState>, body: web::Json<GenerateRequest>) -> impl Responder {
    let body = body.into_inner();
    answer(
        &state,
        &body.prompt,
        body.model.as_deref(),
        body.humanize.unwrap_or(true),
    )
    .await
}

#[get("/api/models")]
async fn list_models(state: web::Data<AppState>) -> impl Responder {
    let entries = MODELS
        .iter()
        .map(|spec| ModelEntry {
            id: spec.id,
            name: spec.display_name,
            configured: state.config.has_key_for(spec.id),
        })
        .collect();

    HttpResponse::Ok().json(ModelsBody {
        default: &state.config.models.default_model,
        models: entries,
    })
}

/// Where each model's key comes from. Reports presence only, never the value.
#[get("/api/model-keys")]
async fn list_model_keys(state: web::Data<AppState>) -> impl Responder {
    let entries = MODELS
        .iter()
        .map(|spec| ModelKeyEntry {
            id: spec.id,
            key_name: spec.key_name,
            env_var: spec.env_key,
            configured: state.config.has_key_for(spec.id),
        })
        .collect();

    HttpResponse::Ok().json(ModelKeysBody { models: entries })
}

/// Completion, then the optional rewriting pass.
async fn answer(state: &AppState, prompt: &str, model: Option<&str>, humanize: bool) -> HttpResponse {
    info!(
        prompt = %truncate_string(prompt, PROMPT_LOG_CHARS),
        model = model.unwrap_or("default"),
        "Received request"
    );

    if prompt.trim().is_empty() {
        return error_response("Prompt cannot be empty");
    }

    match state.completer.request_completion(prompt, model).await {
        Ok(text) => {
            let response = if humanize {
                state.humanizer.apply(&text)
            } else {
                text
            };
            HttpResponse::Ok().json(CompletionBody { response })
        }
        Err(e) => {
            error!(error = %e, "Completion failed");
            error_response(e.to_string())
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
