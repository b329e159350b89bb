//! Concept/Template Bank: the static material the question composer draws
//! from, indexed per category, plus the difficulty closing lines.
//!
//! Pure lookup, no runtime mutation. Every `Category` variant resolves to
//! material (unknown request labels are mapped to the default category before
//! they get here), so the composer always has something to work with.

use crate::domain::{Category, Difficulty};

/// Everything the composer needs for one category.
pub struct CategoryBank {
  /// Phrase prepended to every generated question, e.g. "As a backend developer, ".
  pub prefix: &'static str,
  /// Real-world situations for the scenario strategy.
  pub scenarios: &'static [&'static str],
  /// Problem-solving templates with one `{concept}` placeholder.
  pub problem_templates: &'static [&'static str],
  /// Explanation templates with `{a}` and `{b}` placeholders.
  pub explain_templates: &'static [&'static str],
  /// Concepts substituted into `problem_templates`.
  pub concepts: &'static [&'static str],
  /// Concept pairs substituted into `explain_templates`.
  pub concept_pairs: &'static [(&'static str, &'static str)],
  /// Keywords every generated question in this category is tagged with.
  pub core_keywords: &'static [&'static str],
}

static FULLSTACK: CategoryBank = CategoryBank {
  prefix: "As a full-stack developer, ",
  scenarios: &[
    "your team is building an e-commerce checkout that must stay responsive during a sale",
    "a startup asks you to ship a working web app MVP in two weeks",
    "your company is splitting a monolith into separately deployed services",
    "a product page takes six seconds to load for users on mobile networks",
  ],
  problem_templates: &[
    "how would you debug an issue where {concept} is failing in production?",
    "how would you design {concept} for a brand-new web application?",
    "what steps would you take to improve {concept} in an existing codebase?",
  ],
  explain_templates: &[
    "explain the difference between {a} and {b}. When would you choose each?",
    "how do {a} and {b} work together in a modern web application?",
  ],
  concepts: &[
    "session management", "api versioning", "database indexing",
    "caching", "file uploads", "background jobs",
  ],
  concept_pairs: &[
    ("rest", "graphql"),
    ("sql", "nosql"),
    ("authentication", "authorization"),
    ("server-side rendering", "client-side rendering"),
    ("monolith", "microservices"),
  ],
  core_keywords: &["frontend", "backend", "api", "database", "server", "client"],
};

static FRONTEND: CategoryBank = CategoryBank {
  prefix: "As a frontend developer, ",
  scenarios: &[
    "a marketing page must score above 90 on Lighthouse before launch",
    "users on slow connections stare at a blank screen for three seconds",
    "the design team hands you a pixel-perfect mockup that must also work on phones",
  ],
  problem_templates: &[
    "how would you approach {concept} in a component-based application?",
    "what would you check first when {concept} breaks only in one browser?",
    "how would you improve {concept} without rewriting the whole page?",
  ],
  explain_templates: &[
    "explain the difference between {a} and {b}. When would you choose each?",
    "how do {a} and {b} affect what the user actually sees?",
  ],
  concepts: &[
    "responsive layout", "state management", "lazy loading",
    "form validation", "accessibility", "component reuse",
  ],
  concept_pairs: &[
    ("flexbox", "grid"),
    ("props", "state"),
    ("localstorage", "cookies"),
    ("debouncing", "throttling"),
    ("virtual dom", "shadow dom"),
  ],
  core_keywords: &["css", "javascript", "component", "browser", "ui"],
};

static BACKEND: CategoryBank = CategoryBank {
  prefix: "As a backend developer, ",
  scenarios: &[
    "an endpoint starts timing out once traffic doubles overnight",
    "a nightly batch job is locking the orders table during business hours",
    "you must expose a public API to third-party partners next sprint",
  ],
  problem_templates: &[
    "how would you add {concept} to a service that is already in production?",
    "how would you diagnose {concept} going wrong under real traffic?",
    "what trade-offs come up when you introduce {concept}?",
  ],
  explain_templates: &[
    "explain the difference between {a} and {b}. When would you choose each?",
    "how would you combine {a} and {b} in one service?",
  ],
  concepts: &[
    "rate limiting", "connection pooling", "schema migrations",
    "input validation", "message queues", "structured logging",
  ],
  concept_pairs: &[
    ("sql", "nosql"),
    ("rest", "grpc"),
    ("vertical scaling", "horizontal scaling"),
    ("sessions", "tokens"),
    ("caching", "denormalization"),
  ],
  core_keywords: &["api", "server", "database", "security", "performance"],
};

static HR: CategoryBank = CategoryBank {
  prefix: "Thinking about how you work with others, ",
  scenarios: &[
    "a teammate repeatedly misses deadlines on a deliverable you share",
    "your manager asks you to take over a struggling project mid-quarter",
    "two stakeholders want conflicting features in the same release",
  ],
  problem_templates: &[
    "tell me about a time you dealt with {concept}. What did you actually do?",
    "how do you approach {concept} when priorities change quickly?",
    "what have you learned about {concept} from a project that went badly?",
  ],
  explain_templates: &[
    "what is the difference between {a} and {b} in your experience?",
    "when has {a} mattered more than {b} for you, and why?",
  ],
  concepts: &[
    "conflict resolution", "tight deadlines", "constructive feedback",
    "onboarding a new teammate", "unclear requirements",
  ],
  concept_pairs: &[
    ("mentoring", "managing"),
    ("leadership", "ownership"),
    ("collaboration", "independence"),
  ],
  core_keywords: &["team", "communication", "feedback", "experience"],
};

static PYTHON: CategoryBank = CategoryBank {
  prefix: "As a Python developer, ",
  scenarios: &[
    "a data pipeline slows to a crawl on a 10 GB CSV file",
    "a Flask service needs to handle many concurrent requests",
    "a script works on your laptop but fails inside the deployment container",
  ],
  problem_templates: &[
    "how would you debug {concept} misbehaving in production?",
    "how would you structure {concept} in a medium-sized project?",
    "what tooling would you reach for to improve {concept}?",
  ],
  explain_templates: &[
    "explain the difference between {a} and {b} in Python. When would you choose each?",
    "how do {a} and {b} interact, and what surprises people about them?",
  ],
  concepts: &[
    "virtual environments", "error handling", "type hints",
    "packaging", "testing with pytest", "logging",
  ],
  concept_pairs: &[
    ("list", "tuple"),
    ("threading", "multiprocessing"),
    ("generators", "lists"),
    ("deep copy", "shallow copy"),
    ("asyncio", "threads"),
  ],
  core_keywords: &["python", "function", "module", "exception", "performance"],
};

/// Material lookup. Total over the enum, so the composer never comes up
/// empty-handed; `default()` is what unknown request labels resolve to
/// before reaching this point.
pub fn material(category: Category) -> &'static CategoryBank {
  match category {
    Category::Fullstack => &FULLSTACK,
    Category::Frontend => &FRONTEND,
    Category::Backend => &BACKEND,
    Category::Hr => &HR,
    Category::Python => &PYTHON,
  }
}

/// Difficulty-specific closing instruction appended to generated questions.
pub fn closing(difficulty: Difficulty) -> &'static str {
  match difficulty {
    Difficulty::Beginner => "Explain the fundamentals clearly and keep your example simple.",
    Difficulty::Intermediate => "Walk through the trade-offs you would weigh in a production codebase.",
    Difficulty::Advanced => "Design your answer for enterprise scale and justify the architecture choices.",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_category_has_material_for_all_strategies() {
    for cat in Category::ALL {
      let m = material(cat);
      assert!(!m.scenarios.is_empty(), "{cat} scenarios");
      assert!(!m.problem_templates.is_empty(), "{cat} problem templates");
      assert!(!m.explain_templates.is_empty(), "{cat} explain templates");
      assert!(!m.concepts.is_empty(), "{cat} concepts");
      assert!(!m.concept_pairs.is_empty(), "{cat} concept pairs");
      assert!(!m.core_keywords.is_empty(), "{cat} core keywords");
      assert!(m.prefix.ends_with(' '), "{cat} prefix should end with a space");
    }
  }

  #[test]
  fn templates_carry_their_placeholders() {
    for cat in Category::ALL {
      let m = material(cat);
      for t in m.problem_templates {
        assert!(t.contains("{concept}"), "{t}");
      }
      for t in m.explain_templates {
        assert!(t.contains("{a}") && t.contains("{b}"), "{t}");
      }
    }
  }

  #[test]
  fn every_difficulty_has_a_closing_line() {
    for d in Difficulty::ALL {
      assert!(!closing(d).is_empty());
    }
  }
}
