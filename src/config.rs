//! Loading the optional curated-question bank from TOML.
//!
//! The file (env `BANK_CONFIG_PATH`) may add interview questions on top of the
//! built-in fallback lists. Entries with an unknown category/difficulty or an
//! empty keyword list are skipped at load time with an error log.

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct BankConfig {
  #[serde(default)]
  pub questions: Vec<QuestionCfg>,
}

/// Question entry accepted in TOML configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct QuestionCfg {
  pub category: String,
  pub difficulty: String,
  pub text: String,
  #[serde(default)] pub keywords: Vec<String>,
}

/// Attempt to load `BankConfig` from BANK_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_bank_config_from_env() -> Option<BankConfig> {
  let path = std::env::var("BANK_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<BankConfig>(&s) {
      Ok(cfg) => {
        info!(target: "mockmate_backend", %path, entries = cfg.questions.len(), "Loaded question bank config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "mockmate_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "mockmate_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_question_entries() {
    let raw = r#"
      [[questions]]
      category = "backend"
      difficulty = "beginner"
      text = "What is an index and when would you add one?"
      keywords = ["index", "query", "performance"]
    "#;
    let cfg: BankConfig = toml::from_str(raw).unwrap();
    assert_eq!(cfg.questions.len(), 1);
    assert_eq!(cfg.questions[0].keywords.len(), 3);
  }

  #[test]
  fn empty_config_is_valid() {
    let cfg: BankConfig = toml::from_str("").unwrap();
    assert!(cfg.questions.is_empty());
  }
}
