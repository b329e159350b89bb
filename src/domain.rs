//! Domain models: interview categories, difficulties, questions, answers,
//! and the caller-visible error taxonomy.

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Interview domain the questions are drawn from.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Fullstack,
  Frontend,
  Backend,
  Hr,
  Python,
}

impl Category {
  pub const ALL: [Category; 5] = [
    Category::Fullstack,
    Category::Frontend,
    Category::Backend,
    Category::Hr,
    Category::Python,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Fullstack => "fullstack",
      Category::Frontend => "frontend",
      Category::Backend => "backend",
      Category::Hr => "hr",
      Category::Python => "python",
    }
  }

  /// Parse a known category name. Callers decide what to do with `None`;
  /// the question endpoints resolve unknown names to the default category
  /// so an undefined label never fails a request.
  pub fn parse(s: &str) -> Option<Category> {
    match s.trim().to_lowercase().as_str() {
      "fullstack" | "full-stack" => Some(Category::Fullstack),
      "frontend" => Some(Category::Frontend),
      "backend" => Some(Category::Backend),
      "hr" => Some(Category::Hr),
      "python" => Some(Category::Python),
      _ => None,
    }
  }
}

impl Default for Category {
  fn default() -> Self { Category::Fullstack }
}

impl std::fmt::Display for Category {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Beginner,
  Intermediate,
  Advanced,
}

impl Difficulty {
  pub const ALL: [Difficulty; 3] =
    [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];

  pub fn as_str(&self) -> &'static str {
    match self {
      Difficulty::Beginner => "beginner",
      Difficulty::Intermediate => "intermediate",
      Difficulty::Advanced => "advanced",
    }
  }

  pub fn parse(s: &str) -> Option<Difficulty> {
    match s.trim().to_lowercase().as_str() {
      "beginner" => Some(Difficulty::Beginner),
      "intermediate" => Some(Difficulty::Intermediate),
      "advanced" => Some(Difficulty::Advanced),
      _ => None,
    }
  }
}

impl Default for Difficulty {
  fn default() -> Self { Difficulty::Intermediate }
}

impl std::fmt::Display for Difficulty {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// How the candidate answers: typed into the page or dictated
/// (the client transcribes voice before it reaches us).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
  Typed,
  Voice,
}

impl Default for Mode {
  fn default() -> Self { Mode::Typed }
}

/// Where did a question come from?
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
  Generated,   // composed from the concept/template bank
  Fallback,    // statically curated list
}

/// One interview question. Immutable once produced; the keyword list is
/// what the baseline scorer matches against (non-empty for every curated
/// question, best-effort for generated ones).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
  pub id: String,
  pub text: String,
  pub category: Category,
  pub difficulty: Difficulty,
  pub keywords: Vec<String>,
  pub provenance: Provenance,
}

/// One submitted answer, appended to a session's ordered list.
/// Never mutated after creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Answer {
  pub question_id: String,
  pub text: String,
  pub score: u8,
  pub submitted_at: DateTime<Utc>,
}

/// The only errors a caller ever sees. Everything else (empty generation,
/// scorer dependency failures, zero-keyword questions) is recovered
/// internally and at most logged.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("missing required field: {0}")]
  MissingField(&'static str),
  #[error("unknown difficulty: {0}")]
  InvalidDifficulty(String),
  #[error("question count must be between 1 and {max}, got {got}")]
  InvalidCount { got: usize, max: usize },
  #[error("unknown session: {0}")]
  UnknownSession(String),
  #[error("session {0} has no questions issued yet")]
  SessionNotStarted(String),
  #[error("session {0} is already completed")]
  SessionCompleted(String),
}

impl ApiError {
  fn status(&self) -> StatusCode {
    match self {
      ApiError::MissingField(_)
      | ApiError::InvalidDifficulty(_)
      | ApiError::InvalidCount { .. } => StatusCode::BAD_REQUEST,
      ApiError::UnknownSession(_) => StatusCode::NOT_FOUND,
      ApiError::SessionNotStarted(_) | ApiError::SessionCompleted(_) => StatusCode::CONFLICT,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let body = serde_json::json!({ "message": self.to_string() });
    (self.status(), Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_parse_known_and_unknown() {
    assert_eq!(Category::parse("Frontend"), Some(Category::Frontend));
    assert_eq!(Category::parse("full-stack"), Some(Category::Fullstack));
    assert_eq!(Category::parse("quantum"), None);
  }

  #[test]
  fn difficulty_parse_is_case_insensitive() {
    assert_eq!(Difficulty::parse(" ADVANCED "), Some(Difficulty::Advanced));
    assert_eq!(Difficulty::parse("impossible"), None);
  }
}
