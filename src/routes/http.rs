//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented; invalid input is the only caller-visible error.

use std::sync::Arc;
use axum::{extract::{State, Query}, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::domain::ApiError;
use crate::logic;
use crate::protocol::*;
use crate::scoring;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state, q))]
pub async fn http_get_questions(
  State(state): State<Arc<AppState>>,
  Query(q): Query<QuestionsQuery>,
) -> Result<Json<QuestionsOut>, ApiError> {
  let category = logic::resolve_category(q.category.as_deref())?;
  let difficulty = logic::resolve_difficulty(q.difficulty.as_deref())?;
  let count = logic::resolve_count(q.count)?;

  let questions =
    logic::get_questions(&state.fallback, category, difficulty, count, &mut rand::thread_rng());
  info!(target: "interview", %category, %difficulty, served = questions.len(), "HTTP questions served");
  Ok(Json(QuestionsOut { questions }))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_start_session(
  State(state): State<Arc<AppState>>,
  Json(body): Json<StartSessionIn>,
) -> Result<Json<StartSessionOut>, ApiError> {
  let category = logic::resolve_category(body.category.as_deref())?;
  let difficulty = logic::resolve_difficulty(body.difficulty.as_deref())?;
  let count = logic::resolve_count(body.count)?;
  let mode = body.mode.unwrap_or_default();

  let session = logic::start_session(&state, category, difficulty, mode, count, body.user_id).await;
  info!(target: "interview", id = %session.id, "HTTP session started");
  Ok(Json(StartSessionOut { session_id: session.id, questions: session.questions }))
}

#[instrument(level = "info", skip(state, body), fields(%body.session_id, answer_len = body.answer.len()))]
pub async fn http_submit_answer(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AnswerIn>,
) -> Result<Json<AnswerOut>, ApiError> {
  if body.answer.trim().is_empty() {
    return Err(ApiError::MissingField("answer"));
  }
  let outcome = logic::submit_answer(&state, &body.session_id, body.answer).await?;
  info!(target: "interview", id = %body.session_id, score = outcome.score,
        answered = outcome.answered, total = outcome.total, "HTTP answer evaluated");
  Ok(Json(AnswerOut {
    score: outcome.score,
    answered: outcome.answered,
    total: outcome.total,
    completed: outcome.summary.is_some(),
    summary: outcome.summary,
  }))
}

/// Pure scoring over caller-supplied lists; does no I/O and touches no state.
#[instrument(level = "info", skip(body), fields(questions = body.questions.len(), answers = body.answers.len()))]
pub async fn http_score_session(
  Json(body): Json<ScoreSessionIn>,
) -> Json<scoring::SessionScore> {
  Json(scoring::score_session(&body.questions, &body.answers))
}

#[instrument(level = "info", skip(state, q))]
pub async fn http_get_results(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ResultsQuery>,
) -> Result<Json<ResultsOut>, ApiError> {
  let user_id = q
    .user_id
    .as_deref()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .ok_or(ApiError::MissingField("userId"))?;
  let results = state.results_for(user_id).await;
  info!(target: "interview", %user_id, count = results.len(), "HTTP results served");
  Ok(Json(ResultsOut { results }))
}
