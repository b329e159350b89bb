//! Core behaviors shared by the HTTP handlers.
//!
//! This includes:
//!   - Request-field resolution (category/difficulty/count)
//!   - Question issuance (composer first, fallback selector on empty)
//!   - Answer scoring (sentiment-assisted when available, keyword baseline otherwise)
//!   - Session start / answer / finalize

use rand::Rng;
use tracing::{error, info, instrument, warn};

use crate::compose::compose;
use crate::domain::{ApiError, Category, Difficulty, Mode, Question};
use crate::fallback::FallbackBank;
use crate::scoring;
use crate::session::{InterviewSession, SessionSummary};
use crate::state::AppState;

pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const MAX_QUESTION_COUNT: usize = 10;

/// Missing category is an input error; an *unknown* category name resolves to
/// the default category so requests like "quantum" still get questions.
pub fn resolve_category(raw: Option<&str>) -> Result<Category, ApiError> {
  let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(ApiError::MissingField("category"))?;
  match Category::parse(raw) {
    Some(cat) => Ok(cat),
    None => {
      warn!(target: "interview", category = raw, resolved = %Category::default(),
            "Unknown category requested; using default");
      Ok(Category::default())
    }
  }
}

pub fn resolve_difficulty(raw: Option<&str>) -> Result<Difficulty, ApiError> {
  let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(ApiError::MissingField("difficulty"))?;
  Difficulty::parse(raw).ok_or_else(|| ApiError::InvalidDifficulty(raw.to_string()))
}

pub fn resolve_count(raw: Option<usize>) -> Result<usize, ApiError> {
  let count = raw.unwrap_or(DEFAULT_QUESTION_COUNT);
  if count == 0 || count > MAX_QUESTION_COUNT {
    return Err(ApiError::InvalidCount { got: count, max: MAX_QUESTION_COUNT });
  }
  Ok(count)
}

/// Issue questions: composer first; an empty composition is recovered
/// silently by the deterministic fallback selector. Always returns between 1
/// and `count` questions for any valid enum pair.
#[instrument(level = "info", skip(fallback, rng), fields(%category, %difficulty, count))]
pub fn get_questions(
  fallback: &FallbackBank,
  category: Category,
  difficulty: Difficulty,
  count: usize,
  rng: &mut impl Rng,
) -> Vec<Question> {
  let composed = compose(category, difficulty, count, rng);
  if !composed.is_empty() {
    info!(target: "interview", %category, %difficulty, served = composed.len(),
          source = "composer", "Questions issued");
    return composed;
  }

  let selected = fallback.select(category, difficulty, count);
  warn!(target: "interview", %category, %difficulty, served = selected.len(),
        source = "fallback", "Composer produced nothing; serving curated questions");
  selected
}

/// Score one answer. The enhanced path calls the sentiment collaborator; any
/// failure or timeout degrades to the keyword baseline without surfacing.
#[instrument(level = "info", skip(state, question, answer), fields(question_id = %question.id, answer_len = answer.len()))]
pub async fn score_answer(state: &AppState, question: &Question, answer: &str) -> u8 {
  if let Some(sc) = &state.sentiment {
    match sc.classify(answer).await {
      Ok(sentiment) => return scoring::enhanced_score(question, answer, &sentiment),
      Err(e) => {
        error!(target: "interview", question_id = %question.id, error = %e,
               "Sentiment classification failed; using keyword baseline.");
      }
    }
  }
  scoring::keyword_score(question, answer)
}

/// Start an interview: issue questions, register the session.
#[instrument(level = "info", skip(state), fields(%category, %difficulty, ?mode, count, has_user = user_id.is_some()))]
pub async fn start_session(
  state: &AppState,
  category: Category,
  difficulty: Difficulty,
  mode: Mode,
  count: usize,
  user_id: Option<String>,
) -> InterviewSession {
  let questions = get_questions(&state.fallback, category, difficulty, count, &mut rand::thread_rng());
  let mut session = InterviewSession::new(category, difficulty, mode, user_id);
  session.issue(questions);
  info!(target: "interview", id = %session.id, questions = session.questions.len(), "Session started");
  let snapshot = session.clone();
  state.insert_session(session).await;
  snapshot
}

/// Result of one answer submission.
#[derive(Debug)]
pub struct AnswerOutcome {
  pub score: u8,
  pub answered: usize,
  pub total: usize,
  pub summary: Option<SessionSummary>,
}

/// Append one answer to a session. Completing the last question finalizes the
/// session and, when it has an owner, persists the summary to their history.
#[instrument(level = "info", skip(state, answer), fields(%session_id, answer_len = answer.len()))]
pub async fn submit_answer(
  state: &AppState,
  session_id: &str,
  answer: String,
) -> Result<AnswerOutcome, ApiError> {
  // Score outside the write lock; the collaborator call can take seconds.
  let snapshot = state
    .session_snapshot(session_id)
    .await
    .ok_or_else(|| ApiError::UnknownSession(session_id.to_string()))?;
  if snapshot.is_completed() {
    return Err(ApiError::SessionCompleted(session_id.to_string()));
  }
  let question = snapshot
    .current_question()
    .cloned()
    .ok_or_else(|| ApiError::SessionCompleted(session_id.to_string()))?;

  let score = score_answer(state, &question, &answer).await;

  let (outcome, owner) = {
    let mut sessions = state.sessions.write().await;
    let session = sessions
      .get_mut(session_id)
      .ok_or_else(|| ApiError::UnknownSession(session_id.to_string()))?;
    session.record_answer(answer, score)?;

    let summary = session.is_completed().then(|| session.summary());
    let owner = if session.is_completed() { session.user_id.clone() } else { None };
    (
      AnswerOutcome {
        score,
        answered: session.answers.len(),
        total: session.questions.len(),
        summary,
      },
      owner,
    )
  };

  if let (Some(user_id), Some(summary)) = (owner, outcome.summary.as_ref()) {
    state.persist_result(&user_id, summary.clone()).await;
    info!(target: "interview", %session_id, %user_id,
          aggregate = summary.aggregate_score, "Completed session persisted");
  }

  Ok(outcome)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::{rngs::StdRng, SeedableRng};

  #[test]
  fn category_resolution_rules() {
    assert!(matches!(resolve_category(None), Err(ApiError::MissingField("category"))));
    assert!(matches!(resolve_category(Some("  ")), Err(ApiError::MissingField("category"))));
    assert_eq!(resolve_category(Some("backend")).unwrap(), Category::Backend);
    // Undefined labels resolve to the default set instead of failing.
    assert_eq!(resolve_category(Some("quantum")).unwrap(), Category::Fullstack);
  }

  #[test]
  fn difficulty_resolution_rules() {
    assert!(matches!(resolve_difficulty(None), Err(ApiError::MissingField("difficulty"))));
    assert!(matches!(resolve_difficulty(Some("impossible")), Err(ApiError::InvalidDifficulty(_))));
    assert_eq!(resolve_difficulty(Some("beginner")).unwrap(), Difficulty::Beginner);
  }

  #[test]
  fn count_resolution_rules() {
    assert_eq!(resolve_count(None).unwrap(), DEFAULT_QUESTION_COUNT);
    assert_eq!(resolve_count(Some(2)).unwrap(), 2);
    assert!(matches!(resolve_count(Some(0)), Err(ApiError::InvalidCount { .. })));
    assert!(matches!(resolve_count(Some(99)), Err(ApiError::InvalidCount { .. })));
  }

  #[test]
  fn get_questions_always_serves_between_one_and_count() {
    let bank = FallbackBank::new(None);
    let mut rng = StdRng::seed_from_u64(11);
    for cat in Category::ALL {
      for diff in Difficulty::ALL {
        let qs = get_questions(&bank, cat, diff, 3, &mut rng);
        assert!((1..=3).contains(&qs.len()), "{cat}/{diff}: {}", qs.len());
        for q in &qs {
          assert_eq!(q.category, cat);
          assert_eq!(q.difficulty, diff);
        }
      }
    }
  }

  #[tokio::test]
  async fn score_answer_uses_baseline_without_collaborator() {
    let state = AppState::new();
    assert!(state.sentiment.is_none(), "test env must not configure SENTIMENT_API_TOKEN");
    let bank = FallbackBank::new(None);
    let q = bank.select(Category::Fullstack, Difficulty::Beginner, 1).remove(0);
    let all = q.keywords.join(" ");
    assert_eq!(score_answer(&state, &q, &all).await, 100);
    assert_eq!(score_answer(&state, &q, "unrelated words entirely").await, 0);
  }

  #[tokio::test]
  async fn full_session_flow_persists_owned_results() {
    let state = AppState::new();
    let session = start_session(
      &state,
      Category::Frontend,
      Difficulty::Beginner,
      Mode::Typed,
      2,
      Some("user-1".into()),
    )
    .await;
    assert_eq!(session.questions.len(), 2);

    let first = submit_answer(&state, &session.id, "css javascript html".into()).await.unwrap();
    assert!(first.summary.is_none());
    assert_eq!(first.answered, 1);

    let second = submit_answer(&state, &session.id, "responsive viewport css".into()).await.unwrap();
    let summary = second.summary.expect("second answer completes the session");
    assert_eq!(summary.total_questions, 2);

    let history = state.results_for("user-1").await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].session_id, session.id);

    // Completed sessions reject further answers.
    let err = submit_answer(&state, &session.id, "extra".into()).await.unwrap_err();
    assert!(matches!(err, ApiError::SessionCompleted(_)));
  }

  #[tokio::test]
  async fn guest_sessions_are_not_persisted() {
    let state = AppState::new();
    let session =
      start_session(&state, Category::Hr, Difficulty::Beginner, Mode::Voice, 1, None).await;
    let outcome = submit_answer(&state, &session.id, "my background and skills".into()).await.unwrap();
    assert!(outcome.summary.is_some());
    assert!(state.results.read().await.is_empty());
  }

  #[tokio::test]
  async fn unknown_session_is_an_error() {
    let state = AppState::new();
    let err = submit_answer(&state, "missing", "answer".into()).await.unwrap_err();
    assert!(matches!(err, ApiError::UnknownSession(_)));
  }
}
