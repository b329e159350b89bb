//! Fallback Selector: pre-written questions keyed by (category, difficulty).
//!
//! This is the last line of defense against an empty question set: no
//! randomness, never fails for any valid enum pair, and resolves absent keys
//! to the default (fullstack, intermediate) list. The built-in texts are the
//! product's curated interview bank; a TOML config may add more at startup.

use std::collections::HashMap;

use tracing::error;

use crate::config::BankConfig;
use crate::domain::{Category, Difficulty, Provenance, Question};

const DEFAULT_KEY: (Category, Difficulty) = (Category::Fullstack, Difficulty::Intermediate);

/// (category, difficulty, text, keywords) rows for the built-in bank.
/// Keywords are lowercase; every row has at least one so each question is
/// scorable by the baseline keyword matcher.
#[rustfmt::skip]
const BUILTIN: &[(Category, Difficulty, &str, &[&str])] = &[
  (Category::Fullstack, Difficulty::Beginner,
   "What is the difference between frontend and backend development?",
   &["frontend", "backend", "client", "server"]),
  (Category::Fullstack, Difficulty::Beginner,
   "Explain what a database is and why it's important in web development.",
   &["database", "storage", "data", "sql"]),
  (Category::Fullstack, Difficulty::Beginner,
   "What is a RESTful API and what are the main HTTP methods?",
   &["rest", "api", "http", "get", "post"]),

  (Category::Fullstack, Difficulty::Intermediate,
   "How do you handle state management in a React application?",
   &["state", "react", "redux", "props", "context"]),
  (Category::Fullstack, Difficulty::Intermediate,
   "What is the purpose of middleware in Express.js?",
   &["middleware", "express", "request", "response", "next"]),
  (Category::Fullstack, Difficulty::Intermediate,
   "Explain what MVC architecture is and why it's useful.",
   &["mvc", "model", "view", "controller", "architecture"]),

  (Category::Fullstack, Difficulty::Advanced,
   "How would you design a scalable microservices architecture?",
   &["microservices", "scalability", "services", "communication", "deployment"]),
  (Category::Fullstack, Difficulty::Advanced,
   "Explain the concepts of load balancing and horizontal scaling.",
   &["load balancing", "horizontal scaling", "servers", "traffic", "distribution"]),
  (Category::Fullstack, Difficulty::Advanced,
   "How would you design a system to handle millions of users?",
   &["scalability", "caching", "load", "architecture", "database"]),

  (Category::Frontend, Difficulty::Beginner,
   "What is the difference between HTML, CSS, and JavaScript?",
   &["html", "css", "javascript", "structure", "styling"]),
  (Category::Frontend, Difficulty::Beginner,
   "How do you make a website responsive?",
   &["responsive", "media queries", "viewport", "mobile", "css"]),
  (Category::Frontend, Difficulty::Beginner,
   "What is the DOM and how do you manipulate it?",
   &["dom", "document", "elements", "javascript"]),

  (Category::Frontend, Difficulty::Intermediate,
   "What are React hooks and how do you use them?",
   &["hooks", "usestate", "useeffect", "react", "state"]),
  (Category::Frontend, Difficulty::Intermediate,
   "Explain the concept of the virtual DOM.",
   &["virtual dom", "react", "rendering", "diffing", "performance"]),
  (Category::Frontend, Difficulty::Intermediate,
   "What is event delegation and why is it useful?",
   &["event delegation", "bubbling", "listener", "events"]),

  (Category::Frontend, Difficulty::Advanced,
   "How do you optimize the performance of a React application?",
   &["performance", "memoization", "lazy loading", "rendering"]),
  (Category::Frontend, Difficulty::Advanced,
   "What are the benefits of using a bundler like Webpack?",
   &["webpack", "bundler", "modules", "build", "optimization"]),
  (Category::Frontend, Difficulty::Advanced,
   "How would you implement code splitting in a large single-page app?",
   &["code splitting", "lazy loading", "bundles", "routes"]),

  (Category::Backend, Difficulty::Beginner,
   "What is an API and how does it work?",
   &["api", "request", "response", "endpoint", "http"]),
  (Category::Backend, Difficulty::Beginner,
   "Explain the difference between SQL and NoSQL databases.",
   &["sql", "nosql", "database", "relational", "document"]),
  (Category::Backend, Difficulty::Beginner,
   "What are environment variables and why are they important?",
   &["environment", "variables", "config", "security", "deployment"]),

  (Category::Backend, Difficulty::Intermediate,
   "How do you implement authentication in a Node.js application?",
   &["authentication", "jwt", "tokens", "sessions", "security"]),
  (Category::Backend, Difficulty::Intermediate,
   "How do you handle errors in an HTTP API?",
   &["errors", "status codes", "handling", "logging", "response"]),
  (Category::Backend, Difficulty::Intermediate,
   "What is the purpose of middleware in a web framework?",
   &["middleware", "request", "response", "pipeline"]),

  (Category::Backend, Difficulty::Advanced,
   "Explain the concept of database indexing and its benefits.",
   &["indexing", "database", "query", "performance"]),
  (Category::Backend, Difficulty::Advanced,
   "How would you design a rate limiter for a public API?",
   &["rate limiting", "throttling", "tokens", "api", "abuse"]),
  (Category::Backend, Difficulty::Advanced,
   "Explain eventual consistency and where you would accept it.",
   &["eventual consistency", "distributed", "replication", "trade-offs"]),

  (Category::Hr, Difficulty::Beginner,
   "Tell me about yourself and your background.",
   &["experience", "background", "skills", "education"]),
  (Category::Hr, Difficulty::Beginner,
   "Why are you interested in this position?",
   &["interest", "motivation", "role", "company"]),
  (Category::Hr, Difficulty::Beginner,
   "What are your greatest strengths and weaknesses?",
   &["strengths", "weaknesses", "improvement"]),

  (Category::Hr, Difficulty::Intermediate,
   "Describe a challenging project you worked on and how you overcame obstacles.",
   &["project", "challenge", "obstacles", "solution", "teamwork"]),
  (Category::Hr, Difficulty::Intermediate,
   "How do you handle working in a team environment?",
   &["team", "collaboration", "communication", "roles"]),
  (Category::Hr, Difficulty::Intermediate,
   "Tell me about a time you received difficult feedback.",
   &["feedback", "growth", "listening", "improvement"]),

  (Category::Hr, Difficulty::Advanced,
   "Tell me about a time when you had to lead a project or team.",
   &["leadership", "project", "team", "decisions"]),
  (Category::Hr, Difficulty::Advanced,
   "How do you handle conflicts with team members or stakeholders?",
   &["conflict", "resolution", "stakeholders", "communication"]),
  (Category::Hr, Difficulty::Advanced,
   "Describe a decision you made with incomplete information.",
   &["decision", "risk", "judgment", "outcome"]),

  (Category::Python, Difficulty::Beginner,
   "What are the basic data types in Python and how do you use them?",
   &["data types", "int", "str", "list", "dict"]),
  (Category::Python, Difficulty::Beginner,
   "Explain the difference between lists, tuples, and dictionaries in Python.",
   &["list", "tuple", "dictionary", "mutable", "immutable"]),
  (Category::Python, Difficulty::Beginner,
   "How do you handle exceptions and errors in Python?",
   &["exceptions", "try", "except", "finally", "error handling"]),

  (Category::Python, Difficulty::Intermediate,
   "What are context managers and how do you create them?",
   &["context managers", "with", "enter", "exit", "resources"]),
  (Category::Python, Difficulty::Intermediate,
   "How do you handle concurrent programming in Python?",
   &["concurrency", "threading", "multiprocessing", "asyncio", "gil"]),
  (Category::Python, Difficulty::Intermediate,
   "How would you implement caching in a Python application?",
   &["caching", "lru_cache", "memoization", "performance"]),

  (Category::Python, Difficulty::Advanced,
   "Explain memory profiling and optimization techniques in Python.",
   &["memory", "profiling", "optimization", "garbage collection"]),
  (Category::Python, Difficulty::Advanced,
   "Explain the implementation of Python's coroutines and event loops.",
   &["coroutines", "event loop", "asyncio", "await", "generators"]),
  (Category::Python, Difficulty::Advanced,
   "How would you implement a high-performance Python application?",
   &["performance", "profiling", "cython", "optimization"]),
];

/// Curated questions, built once at startup and read-only afterwards.
pub struct FallbackBank {
  by_key: HashMap<(Category, Difficulty), Vec<Question>>,
}

impl FallbackBank {
  /// Built-in bank plus any valid entries from the optional TOML config.
  pub fn new(cfg: Option<&BankConfig>) -> Self {
    let mut bank = Self { by_key: HashMap::new() };
    for (i, (cat, diff, text, keywords)) in BUILTIN.iter().enumerate() {
      bank.insert(Question {
        id: format!("fb-{}-{}-{}", cat, diff, i),
        text: (*text).to_string(),
        category: *cat,
        difficulty: *diff,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        provenance: Provenance::Fallback,
      });
    }

    if let Some(cfg) = cfg {
      for (i, q) in cfg.questions.iter().enumerate() {
        let (Some(cat), Some(diff)) = (Category::parse(&q.category), Difficulty::parse(&q.difficulty))
        else {
          error!(target: "interview", category = %q.category, difficulty = %q.difficulty,
                 "Skipping bank config entry: unknown category/difficulty");
          continue;
        };
        if q.text.trim().is_empty() || q.keywords.is_empty() {
          error!(target: "interview", %cat, %diff, "Skipping bank config entry: empty text or keywords");
          continue;
        }
        bank.insert(Question {
          id: format!("cfg-{}-{}-{}", cat, diff, i),
          text: q.text.clone(),
          category: cat,
          difficulty: diff,
          keywords: q.keywords.iter().map(|k| k.to_lowercase()).collect(),
          provenance: Provenance::Fallback,
        });
      }
    }
    bank
  }

  fn insert(&mut self, q: Question) {
    self.by_key.entry((q.category, q.difficulty)).or_default().push(q);
  }

  /// Deterministic selection: exactly min(count, available) questions for the
  /// key, resolving to the default key when the exact one is absent or empty.
  pub fn select(&self, category: Category, difficulty: Difficulty, count: usize) -> Vec<Question> {
    let list = match self.by_key.get(&(category, difficulty)) {
      Some(list) if !list.is_empty() => list,
      _ => match self.by_key.get(&DEFAULT_KEY) {
        Some(list) => list,
        None => return Vec::new(),
      },
    };
    list.iter().take(count).cloned().collect()
  }

  /// (key count, question count) pairs for the startup inventory log.
  pub fn inventory(&self) -> (usize, usize) {
    (self.by_key.len(), self.by_key.values().map(Vec::len).sum())
  }

  #[cfg(test)]
  fn only_default() -> Self {
    let mut bank = Self { by_key: HashMap::new() };
    bank.insert(Question {
      id: "fb-default-0".into(),
      text: "Explain what MVC architecture is and why it's useful.".into(),
      category: DEFAULT_KEY.0,
      difficulty: DEFAULT_KEY.1,
      keywords: vec!["mvc".into(), "architecture".into()],
      provenance: Provenance::Fallback,
    });
    bank
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_enum_pair_has_questions() {
    let bank = FallbackBank::new(None);
    for cat in Category::ALL {
      for diff in Difficulty::ALL {
        let qs = bank.select(cat, diff, 2);
        assert_eq!(qs.len(), 2, "{cat}/{diff}");
        for q in &qs {
          assert_eq!(q.category, cat);
          assert_eq!(q.difficulty, diff);
          assert_eq!(q.provenance, Provenance::Fallback);
          assert!(!q.keywords.is_empty());
        }
      }
    }
  }

  #[test]
  fn selection_is_deterministic() {
    let bank = FallbackBank::new(None);
    let a = bank.select(Category::Backend, Difficulty::Advanced, 3);
    let b = bank.select(Category::Backend, Difficulty::Advanced, 3);
    let texts_a: Vec<_> = a.iter().map(|q| q.text.as_str()).collect();
    let texts_b: Vec<_> = b.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts_a, texts_b);
  }

  #[test]
  fn caps_at_available_questions() {
    let bank = FallbackBank::new(None);
    let qs = bank.select(Category::Hr, Difficulty::Beginner, 50);
    assert_eq!(qs.len(), 3);
  }

  #[test]
  fn missing_key_resolves_to_default_list() {
    let bank = FallbackBank::only_default();
    let qs = bank.select(Category::Python, Difficulty::Advanced, 1);
    assert_eq!(qs.len(), 1);
    assert_eq!(qs[0].category, Category::Fullstack);
    assert_eq!(qs[0].difficulty, Difficulty::Intermediate);
  }

  #[test]
  fn config_entries_are_merged_and_invalid_ones_skipped() {
    let cfg: BankConfig = toml::from_str(
      r#"
      [[questions]]
      category = "backend"
      difficulty = "beginner"
      text = "What is an index and when would you add one?"
      keywords = ["Index", "QUERY"]

      [[questions]]
      category = "quantum"
      difficulty = "beginner"
      text = "bad entry"
      keywords = ["x"]

      [[questions]]
      category = "backend"
      difficulty = "beginner"
      text = "no keywords, should be skipped"
      keywords = []
      "#,
    )
    .unwrap();

    let bank = FallbackBank::new(Some(&cfg));
    let qs = bank.select(Category::Backend, Difficulty::Beginner, 10);
    assert_eq!(qs.len(), 4); // 3 built-in + 1 valid config entry
    let added = qs.iter().find(|q| q.id.starts_with("cfg-")).unwrap();
    assert_eq!(added.keywords, vec!["index", "query"]);
  }
}
