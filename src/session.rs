//! One interview attempt, from question issuance to the final aggregate.
//!
//! State machine: NotStarted -> InProgress (questions issued) -> Completed
//! (every issued question answered, aggregate computed once). There is no way
//! back from Completed; a new attempt is a new session.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Answer, ApiError, Category, Difficulty, Mode, Question};
use crate::scoring;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
  NotStarted,
  InProgress,
  Completed,
}

#[derive(Clone, Debug)]
pub struct InterviewSession {
  pub id: String,
  pub category: Category,
  pub difficulty: Difficulty,
  pub mode: Mode,
  /// Owning user when authenticated; ephemeral (never persisted) otherwise.
  pub user_id: Option<String>,
  pub questions: Vec<Question>,
  pub answers: Vec<Answer>,
  pub status: SessionStatus,
  pub aggregate_score: Option<u8>,
  pub started_at: DateTime<Utc>,
  pub completed_at: Option<DateTime<Utc>>,
}

/// Read-only view of a finished (or finishing) session, shared by the answer
/// and history endpoints.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSummary {
  pub session_id: String,
  pub category: Category,
  pub difficulty: Difficulty,
  pub mode: Mode,
  pub total_questions: usize,
  pub per_answer_scores: Vec<u8>,
  pub aggregate_score: u8,
  pub strengths: Vec<String>,
  pub weaknesses: Vec<String>,
  pub completed_at: Option<DateTime<Utc>>,
}

impl InterviewSession {
  pub fn new(category: Category, difficulty: Difficulty, mode: Mode, user_id: Option<String>) -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      category,
      difficulty,
      mode,
      user_id,
      questions: Vec::new(),
      answers: Vec::new(),
      status: SessionStatus::NotStarted,
      aggregate_score: None,
      started_at: Utc::now(),
      completed_at: None,
    }
  }

  /// Issue the session's question set. Only valid once, on a fresh session.
  pub fn issue(&mut self, questions: Vec<Question>) {
    debug_assert_eq!(self.status, SessionStatus::NotStarted);
    self.questions = questions;
    if !self.questions.is_empty() {
      self.status = SessionStatus::InProgress;
    }
  }

  /// The question the next answer is for, if any remain.
  pub fn current_question(&self) -> Option<&Question> {
    self.questions.get(self.answers.len())
  }

  /// Append one scored answer. Answering the last issued question finalizes
  /// the session: the aggregate is computed exactly once and the state moves
  /// to Completed. The answer count can never exceed the question count.
  pub fn record_answer(&mut self, text: String, score: u8) -> Result<(), ApiError> {
    match self.status {
      SessionStatus::NotStarted => return Err(ApiError::SessionNotStarted(self.id.clone())),
      SessionStatus::Completed => return Err(ApiError::SessionCompleted(self.id.clone())),
      SessionStatus::InProgress => {}
    }

    let question_id = self
      .current_question()
      .map(|q| q.id.clone())
      .ok_or_else(|| ApiError::SessionCompleted(self.id.clone()))?;

    self.answers.push(Answer {
      question_id,
      text,
      score,
      submitted_at: Utc::now(),
    });

    if self.answers.len() == self.questions.len() {
      let scores: Vec<u8> = self.answers.iter().map(|a| a.score).collect();
      self.aggregate_score = Some(scoring::aggregate(&scores));
      self.completed_at = Some(Utc::now());
      self.status = SessionStatus::Completed;
    }
    Ok(())
  }

  pub fn is_completed(&self) -> bool {
    self.status == SessionStatus::Completed
  }

  pub fn summary(&self) -> SessionSummary {
    SessionSummary {
      session_id: self.id.clone(),
      category: self.category,
      difficulty: self.difficulty,
      mode: self.mode,
      total_questions: self.questions.len(),
      per_answer_scores: self.answers.iter().map(|a| a.score).collect(),
      aggregate_score: self.aggregate_score.unwrap_or(0),
      strengths: self.strengths(),
      weaknesses: self.weaknesses(),
      completed_at: self.completed_at,
    }
  }

  /// Feedback lines derived from answer lengths. Deliberately simple.
  fn strengths(&self) -> Vec<String> {
    let mut out = Vec::new();
    if self.answers.iter().any(|a| a.text.len() > 100) {
      out.push("Detailed responses".to_string());
    }
    if out.is_empty() {
      out.push("Completed the interview".to_string());
    }
    out
  }

  fn weaknesses(&self) -> Vec<String> {
    let mut out = Vec::new();
    if self.answers.iter().any(|a| a.text.len() < 50) {
      out.push("Consider providing more detailed answers".to_string());
    }
    if out.is_empty() {
      out.push("Keep practicing to improve further".to_string());
    }
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Provenance;

  fn questions(n: usize) -> Vec<Question> {
    (0..n)
      .map(|i| Question {
        id: format!("q-{i}"),
        text: format!("question {i}"),
        category: Category::Backend,
        difficulty: Difficulty::Beginner,
        keywords: vec!["api".into()],
        provenance: Provenance::Fallback,
      })
      .collect()
  }

  fn in_progress(n: usize) -> InterviewSession {
    let mut s = InterviewSession::new(Category::Backend, Difficulty::Beginner, Mode::Typed, None);
    s.issue(questions(n));
    s
  }

  #[test]
  fn issuing_questions_moves_to_in_progress() {
    let s = in_progress(2);
    assert_eq!(s.status, SessionStatus::InProgress);
    assert_eq!(s.current_question().unwrap().id, "q-0");
  }

  #[test]
  fn answering_before_issuance_is_rejected() {
    let mut s = InterviewSession::new(Category::Hr, Difficulty::Beginner, Mode::Voice, None);
    assert!(matches!(s.record_answer("hi".into(), 10), Err(ApiError::SessionNotStarted(_))));
  }

  #[test]
  fn last_answer_completes_and_computes_aggregate_once() {
    let mut s = in_progress(2);
    s.record_answer("first answer".into(), 100).unwrap();
    assert_eq!(s.status, SessionStatus::InProgress);
    assert!(s.aggregate_score.is_none());

    s.record_answer("second answer".into(), 0).unwrap();
    assert_eq!(s.status, SessionStatus::Completed);
    assert_eq!(s.aggregate_score, Some(50));
    assert!(s.completed_at.is_some());
  }

  #[test]
  fn no_answers_past_completion() {
    let mut s = in_progress(1);
    s.record_answer("only answer".into(), 80).unwrap();
    assert!(matches!(s.record_answer("extra".into(), 80), Err(ApiError::SessionCompleted(_))));
    assert_eq!(s.answers.len(), 1);
    assert!(s.answers.len() <= s.questions.len());
  }

  #[test]
  fn summary_feedback_tracks_answer_lengths() {
    let mut s = in_progress(2);
    let long = "x".repeat(150);
    s.record_answer(long, 90).unwrap();
    s.record_answer("short".into(), 10).unwrap();
    let sum = s.summary();
    assert!(sum.strengths.contains(&"Detailed responses".to_string()));
    assert!(sum.weaknesses.contains(&"Consider providing more detailed answers".to_string()));
    assert_eq!(sum.per_answer_scores, vec![90, 10]);
    assert_eq!(sum.aggregate_score, 50);
  }
}
