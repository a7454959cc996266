//! API request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::state::AppState;
use crate::{
    espn::compute::{self, TOP_PERFORMER_COUNT},
    models::{LeagueTeam, MatchupSummary, Projections, TeamOverview, TopPerformer},
    prompt::{self, STATIC_INSTRUCTION},
    templates::INDEX_TEMPLATE,
    FflError, Result,
};

type JsonResult<T> = Result<Json<T>>;

// Request bodies

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

// Response types

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// Handlers

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    Ok(Html(state.templates.render(INDEX_TEMPLATE).await?))
}

pub async fn team_overview(State(state): State<AppState>) -> JsonResult<TeamOverview> {
    let snapshot = state.league.fetch_league().await?;
    Ok(Json(compute::team_overview(&snapshot, state.team_index)?))
}

pub async fn top_performers(State(state): State<AppState>) -> JsonResult<Vec<TopPerformer>> {
    let snapshot = state.league.fetch_league().await?;
    Ok(Json(compute::top_performers(
        &snapshot,
        state.team_index,
        TOP_PERFORMER_COUNT,
    )?))
}

pub async fn projections(State(state): State<AppState>) -> JsonResult<Projections> {
    let snapshot = state.league.fetch_league().await?;
    Ok(Json(compute::projections(&snapshot, state.team_index)?))
}

pub async fn league_info(State(state): State<AppState>) -> JsonResult<Vec<LeagueTeam>> {
    let snapshot = state.league.fetch_league().await?;
    Ok(Json(compute::league_info(&snapshot)))
}

pub async fn matchups(State(state): State<AppState>) -> JsonResult<Vec<MatchupSummary>> {
    let snapshot = state.league.fetch_league().await?;
    Ok(Json(compute::matchups(&snapshot)))
}

/// Forward one user message to the completion provider.
///
/// Validation happens before any upstream call, so a bad body never reaches
/// either provider.
pub async fn chat(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> JsonResult<ChatResponse> {
    let Json(request) = payload.map_err(|rejection| FflError::InvalidBody {
        message: rejection.body_text(),
    })?;

    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| FflError::MissingField {
            field: "message".to_string(),
        })?;

    let system_context = if state.chat_context.needs_league() {
        let snapshot = state.league.fetch_league().await?;
        prompt::league_context(&snapshot, state.team_index)?
    } else {
        STATIC_INSTRUCTION.to_string()
    };

    debug!(
        mode = ?state.chat_context,
        context_len = system_context.len(),
        "sending chat message"
    );

    let messages = prompt::build_exchange(system_context, &message);
    let reply = state.completion.complete(&messages).await?;

    Ok(Json(ChatResponse { reply }))
}
