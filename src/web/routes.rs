use super::error::AppError;
use super::render::{form_page, result_page};
use super::SharedState;
use crate::application::run_pipeline::RunRequest;
use crate::domain::entities::run_report::RunReport;
use crate::domain::error::DomainError;
use crate::domain::values::language::Language;
use crate::domain::values::market_query::MarketQuery;
use axum::{
    extract::{Query, State},
    response::Html,
    Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct FormQuery {
    lang: Option<String>,
}

// ─── GET / ──────────────────────────────────────────────────────────────────

pub async fn show_form(Query(params): Query<FormQuery>) -> Html<String> {
    let language = params
        .lang
        .and_then(|l| l.parse::<Language>().ok())
        .unwrap_or_default();
    Html(form_page(language, &MarketQuery::default(), None))
}

// ─── POST /run ──────────────────────────────────────────────────────────────

/// Form submission. A blank credential re-renders the form with one error
/// and nothing is fetched.
pub async fn submit_form(
    State(state): State<SharedState>,
    Form(request): Form<RunRequest>,
) -> Html<String> {
    match state.run(&request).await {
        Ok(report) => Html(result_page(&report)),
        Err(DomainError::MissingCredentials(_)) => {
            let t = request.language.texts();
            Html(form_page(request.language, &request.query, Some(t.error_api)))
        }
        Err(e) => Html(form_page(request.language, &request.query, Some(&e.to_string()))),
    }
}

// ─── POST /api/run ──────────────────────────────────────────────────────────

pub async fn run_json(
    State(state): State<SharedState>,
    Json(request): Json<RunRequest>,
) -> Result<Json<RunReport>, AppError> {
    let report = state.run(&request).await?;
    Ok(Json(report))
}

// ─── GET /health ────────────────────────────────────────────────────────────

pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    let settings = state.settings();
    Json(json!({
        "ok":        true,
        "period":    settings.period,
        "model":     settings.model,
        "max_leads": settings.max_leads,
    }))
}
