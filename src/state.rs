//! Application state: in-memory stores, the curated question bank, and the
//! optional sentiment collaborator.
//!
//! This module owns:
//!   - the fallback question bank (built-ins + TOML config)
//!   - active interview sessions (by id)
//!   - completed results per user (history, newest first)
//!   - optional sentiment client
//!
//! The composer and fallback selector are pure over this immutable data;
//! only the session and result maps are behind locks.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::config::load_bank_config_from_env;
use crate::fallback::FallbackBank;
use crate::sentiment::SentimentClient;
use crate::session::{InterviewSession, SessionSummary};

#[derive(Clone)]
pub struct AppState {
    pub fallback: Arc<FallbackBank>,
    pub sessions: Arc<RwLock<HashMap<String, InterviewSession>>>,
    pub results: Arc<RwLock<HashMap<String, Vec<SessionSummary>>>>,
    pub sentiment: Option<SentimentClient>,
}

impl AppState {
    /// Build state from env: load the optional TOML bank, build the fallback
    /// store, init the sentiment client if configured.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_bank_config_from_env();
        let fallback = FallbackBank::new(cfg.as_ref());
        let (keys, questions) = fallback.inventory();
        info!(target: "interview", keys, questions, "Startup fallback question inventory");

        let sentiment = SentimentClient::from_env();
        if let Some(sc) = &sentiment {
            info!(target: "mockmate_backend", base_url = %sc.base_url, model = %sc.model,
                  "Sentiment scoring enabled.");
        } else {
            info!(target: "mockmate_backend",
                  "Sentiment scoring disabled (no SENTIMENT_API_TOKEN). Using keyword baseline only.");
        }

        Self {
            fallback: Arc::new(fallback),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            results: Arc::new(RwLock::new(HashMap::new())),
            sentiment,
        }
    }

    /// Register a freshly started session.
    #[instrument(level = "debug", skip(self, session), fields(id = %session.id))]
    pub async fn insert_session(&self, session: InterviewSession) {
        self.sessions.write().await.insert(session.id.clone(), session);
    }

    /// Read-only snapshot of a session by id.
    pub async fn session_snapshot(&self, id: &str) -> Option<InterviewSession> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Persist a completed session's summary under its owning user.
    /// Guest sessions never reach this point.
    #[instrument(level = "debug", skip(self, summary), fields(%user_id, session = %summary.session_id))]
    pub async fn persist_result(&self, user_id: &str, summary: SessionSummary) {
        self.results
            .write()
            .await
            .entry(user_id.to_string())
            .or_default()
            .push(summary);
    }

    /// Completed-session history for one user, newest first.
    pub async fn results_for(&self, user_id: &str) -> Vec<SessionSummary> {
        let mut out = self
            .results
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default();
        out.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Difficulty, Mode};
    use chrono::{Duration, Utc};

    fn summary(id: &str, completed_offset_secs: i64) -> SessionSummary {
        SessionSummary {
            session_id: id.to_string(),
            category: Category::Frontend,
            difficulty: Difficulty::Beginner,
            mode: Mode::Typed,
            total_questions: 1,
            per_answer_scores: vec![50],
            aggregate_score: 50,
            strengths: vec![],
            weaknesses: vec![],
            completed_at: Some(Utc::now() + Duration::seconds(completed_offset_secs)),
        }
    }

    #[tokio::test]
    async fn results_are_listed_newest_first() {
        let state = AppState::new();
        state.persist_result("u1", summary("old", 0)).await;
        state.persist_result("u1", summary("new", 60)).await;
        let listed = state.results_for("u1").await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].session_id, "new");
        assert!(state.results_for("someone-else").await.is_empty());
    }

    #[tokio::test]
    async fn sessions_round_trip_through_the_store() {
        let state = AppState::new();
        let s = InterviewSession::new(Category::Hr, Difficulty::Advanced, Mode::Voice, None);
        let id = s.id.clone();
        state.insert_session(s).await;
        assert!(state.session_snapshot(&id).await.is_some());
        assert!(state.session_snapshot("nope").await.is_none());
    }
}
