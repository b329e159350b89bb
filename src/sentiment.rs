//! Minimal sentiment-classification client (HuggingFace-style inference API).
//!
//! This is the scorer's optional external collaborator: text in, label plus
//! confidence out. Calls carry a fixed timeout and every failure mode is an
//! `Err(String)` the caller recovers from by degrading to the keyword
//! baseline — the interview flow never blocks on this service.
//!
//! NOTE: We never log the API token and we don't log answer contents.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Hard ceiling on one classification call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
  Positive,
  Neutral,
  Negative,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Sentiment {
  pub label: SentimentLabel,
  pub confidence: f32,
}

#[derive(Clone)]
pub struct SentimentClient {
  client: reqwest::Client,
  api_token: String,
  pub base_url: String,
  pub model: String,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
  inputs: &'a str,
}

#[derive(Deserialize)]
struct LabelScore {
  label: String,
  score: f32,
}

/// Map provider label spellings onto our three-way enum.
/// Unrecognized labels are treated as neutral rather than failing the call.
fn parse_label(label: &str) -> SentimentLabel {
  match label.to_uppercase().as_str() {
    "POSITIVE" | "LABEL_2" => SentimentLabel::Positive,
    "NEGATIVE" | "LABEL_0" => SentimentLabel::Negative,
    _ => SentimentLabel::Neutral,
  }
}

/// The inference API answers either `[[{label, score}, ...]]` or a flat
/// `[{label, score}, ...]`, best candidate first.
fn parse_response(body: &str) -> Result<Sentiment, String> {
  let top = if let Ok(nested) = serde_json::from_str::<Vec<Vec<LabelScore>>>(body) {
    nested.into_iter().flatten().next()
  } else {
    serde_json::from_str::<Vec<LabelScore>>(body)
      .map_err(|e| format!("unexpected response shape: {}", e))?
      .into_iter()
      .next()
  };
  match top {
    Some(ls) => Ok(Sentiment { label: parse_label(&ls.label), confidence: ls.score }),
    None => Err("empty classification response".into()),
  }
}

impl SentimentClient {
  /// Construct the client if we find SENTIMENT_API_TOKEN; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let api_token = std::env::var("SENTIMENT_API_TOKEN").ok()?;
    let base_url = std::env::var("SENTIMENT_API_URL")
      .unwrap_or_else(|_| "https://api-inference.huggingface.co/models".into());
    let model = std::env::var("SENTIMENT_MODEL")
      .unwrap_or_else(|_| "cardiffnlp/twitter-roberta-base-sentiment-latest".into());

    let client = reqwest::Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .build()
      .ok()?;

    Some(Self { client, api_token, base_url, model })
  }

  /// Classify one answer. Timeouts and HTTP/parse errors all come back as
  /// `Err(String)`; the caller logs and falls back to baseline scoring.
  #[instrument(level = "info", skip(self, text), fields(model = %self.model, text_len = text.len()))]
  pub async fn classify(&self, text: &str) -> Result<Sentiment, String> {
    let url = format!("{}/{}", self.base_url, self.model);
    let start = std::time::Instant::now();

    let res = self.client.post(&url)
      .header(USER_AGENT, "mockmate-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_token))
      .json(&ClassifyRequest { inputs: text })
      .send().await.map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      return Err(format!("sentiment HTTP {}: {}", status, crate::util::trunc_for_log(&body, 200)));
    }

    let body = res.text().await.map_err(|e| e.to_string())?;
    let sentiment = parse_response(&body)?;
    info!(elapsed = ?start.elapsed(), label = ?sentiment.label, confidence = sentiment.confidence,
          "Sentiment classified");
    Ok(sentiment)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn maps_provider_label_spellings() {
    assert_eq!(parse_label("POSITIVE"), SentimentLabel::Positive);
    assert_eq!(parse_label("LABEL_2"), SentimentLabel::Positive);
    assert_eq!(parse_label("label_0"), SentimentLabel::Negative);
    assert_eq!(parse_label("NEUTRAL"), SentimentLabel::Neutral);
    assert_eq!(parse_label("whatever"), SentimentLabel::Neutral);
  }

  #[test]
  fn parses_nested_and_flat_responses() {
    let nested = r#"[[{"label":"POSITIVE","score":0.91},{"label":"NEGATIVE","score":0.09}]]"#;
    let s = parse_response(nested).unwrap();
    assert_eq!(s.label, SentimentLabel::Positive);
    assert!((s.confidence - 0.91).abs() < 1e-6);

    let flat = r#"[{"label":"LABEL_0","score":0.7}]"#;
    let s = parse_response(flat).unwrap();
    assert_eq!(s.label, SentimentLabel::Negative);
  }

  #[test]
  fn rejects_empty_or_malformed_bodies() {
    assert!(parse_response("[]").is_err());
    assert!(parse_response("{\"oops\":1}").is_err());
  }
}
