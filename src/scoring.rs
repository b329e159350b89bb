//! Answer Scorer: keyword-match baseline plus the sentiment-assisted variant.
//!
//! The baseline is pure string matching over a question's keyword list. The
//! enhanced path folds in an external sentiment classification; it is only an
//! additive refinement, and callers degrade to the baseline whenever the
//! collaborator is missing or fails.

use serde::Serialize;

use crate::domain::Question;
use crate::sentiment::{Sentiment, SentimentLabel};
use crate::util::word_count;

/// Score for a question that has no keywords to match against.
/// Keeps the pipeline total instead of dividing by zero.
pub const NEUTRAL_SCORE: u8 = 50;

fn matched_keywords(question: &Question, answer: &str) -> usize {
  let answer = answer.to_lowercase();
  question
    .keywords
    .iter()
    .filter(|k| answer.contains(&k.to_lowercase()))
    .count()
}

/// Baseline: fraction of the question's keywords present in the answer,
/// case-insensitive, as a rounded 0-100 score.
pub fn keyword_score(question: &Question, answer: &str) -> u8 {
  let total = question.keywords.len();
  if total == 0 {
    return NEUTRAL_SCORE;
  }
  let matched = matched_keywords(question, answer);
  ((100.0 * matched as f64) / total as f64).round() as u8
}

/// Sentiment-assisted score: base 50, a bounded answer-length bonus, a bonus
/// scaled by the sentiment confidence, and +3 per matched keyword. Clamped
/// to [0, 100].
pub fn enhanced_score(question: &Question, answer: &str, sentiment: &Sentiment) -> u8 {
  let mut score: i32 = 50;

  let words = word_count(answer);
  if (50..=200).contains(&words) {
    score += 20;
  } else if (20..50).contains(&words) {
    score += 10;
  } else if words > 200 {
    score += 5;
  }

  score += match sentiment.label {
    SentimentLabel::Positive => (sentiment.confidence * 20.0).round() as i32,
    SentimentLabel::Neutral => (sentiment.confidence * 10.0).round() as i32,
    SentimentLabel::Negative => 0,
  };

  score += 3 * matched_keywords(question, answer) as i32;

  score.clamp(0, 100) as u8
}

/// Rounded arithmetic mean. An empty list scores zero.
pub fn aggregate(scores: &[u8]) -> u8 {
  if scores.is_empty() {
    return 0;
  }
  let sum: u32 = scores.iter().map(|s| *s as u32).sum();
  ((sum as f64) / (scores.len() as f64)).round() as u8
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionScore {
  pub per_answer_scores: Vec<u8>,
  pub aggregate_score: u8,
}

/// Pure scoring of a whole session: answers aligned with questions by index,
/// baseline algorithm only, no I/O. Calling it twice with the same inputs
/// yields the same result.
pub fn score_session(questions: &[Question], answers: &[String]) -> SessionScore {
  let per_answer_scores: Vec<u8> = questions
    .iter()
    .zip(answers.iter())
    .map(|(q, a)| keyword_score(q, a))
    .collect();
  let aggregate_score = aggregate(&per_answer_scores);
  SessionScore { per_answer_scores, aggregate_score }
}
