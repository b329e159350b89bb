//! Question Composer: turns bank material into interview questions.
//!
//! Each question picks one of three strategies (scenario, problem-solving
//! template, concept-pair explanation), fills placeholders, then wraps the
//! body with the category prefix and the difficulty closing line. The random
//! source is injected so tests can seed it.

use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::bank;
use crate::domain::{Category, Difficulty, Provenance, Question};
use crate::util::fill_template;

/// Best-effort unique id: category + difficulty + ms timestamp + random
/// suffix. Collisions are operationally negligible but possible; nothing
/// security-relevant may depend on these ids.
fn question_id(category: Category, difficulty: Difficulty, rng: &mut impl Rng) -> String {
  format!(
    "{}-{}-{}-{:04x}",
    category,
    difficulty,
    Utc::now().timestamp_millis(),
    rng.gen::<u16>()
  )
}

fn pick<'a, T>(items: &'a [T], rng: &mut impl Rng) -> &'a T {
  &items[rng.gen_range(0..items.len())]
}

/// Compose up to `count` questions. Returns an empty list (never an error)
/// when the bank has no usable material, signalling the caller to use the
/// fallback selector instead.
pub fn compose(
  category: Category,
  difficulty: Difficulty,
  count: usize,
  rng: &mut impl Rng,
) -> Vec<Question> {
  let m = bank::material(category);
  if m.scenarios.is_empty() && m.concepts.is_empty() && m.concept_pairs.is_empty() {
    return Vec::new();
  }

  let mut out = Vec::with_capacity(count);
  for _ in 0..count {
    let (body, mut keywords): (String, Vec<String>) = match rng.gen_range(0..3u8) {
      0 if !m.scenarios.is_empty() => {
        let scenario = pick(m.scenarios, rng);
        (
          format!("imagine {}. How would you approach it, and what would you watch out for?", scenario),
          Vec::new(),
        )
      }
      1 if !m.concepts.is_empty() && !m.problem_templates.is_empty() => {
        let concept = *pick(m.concepts, rng);
        (
          fill_template(*pick(m.problem_templates, rng), &[("concept", concept)]),
          vec![concept.to_string()],
        )
      }
      _ if !m.concept_pairs.is_empty() && !m.explain_templates.is_empty() => {
        let (a, b) = *pick(m.concept_pairs, rng);
        (
          fill_template(*pick(m.explain_templates, rng), &[("a", a), ("b", b)]),
          vec![a.to_string(), b.to_string()],
        )
      }
      // Chosen strategy has no material; fall back to a scenario if any exists.
      _ => {
        if m.scenarios.is_empty() {
          continue;
        }
        let scenario = pick(m.scenarios, rng);
        (
          format!("imagine {}. How would you approach it, and what would you watch out for?", scenario),
          Vec::new(),
        )
      }
    };

    keywords.extend(m.core_keywords.iter().map(|k| k.to_string()));

    let text = format!("{}{} {}", m.prefix, body, bank::closing(difficulty));
    let q = Question {
      id: question_id(category, difficulty, rng),
      text,
      category,
      difficulty,
      keywords,
      provenance: Provenance::Generated,
    };
    debug!(target: "interview", id = %q.id, %category, %difficulty, "Composed question");
    out.push(q);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::{rngs::StdRng, SeedableRng};

  #[test]
  fn composes_requested_count_with_matching_tags() {
    let mut rng = StdRng::seed_from_u64(7);
    let qs = compose(Category::Frontend, Difficulty::Beginner, 5, &mut rng);
    assert_eq!(qs.len(), 5);
    for q in &qs {
      assert_eq!(q.category, Category::Frontend);
      assert_eq!(q.difficulty, Difficulty::Beginner);
      assert_eq!(q.provenance, Provenance::Generated);
      assert!(!q.keywords.is_empty());
    }
  }

  #[test]
  fn wraps_with_prefix_and_closing() {
    let mut rng = StdRng::seed_from_u64(1);
    let qs = compose(Category::Backend, Difficulty::Advanced, 3, &mut rng);
    for q in &qs {
      assert!(q.text.starts_with("As a backend developer, "), "{}", q.text);
      assert!(q.text.ends_with(bank::closing(Difficulty::Advanced)), "{}", q.text);
    }
  }

  #[test]
  fn fixed_seed_gives_deterministic_text() {
    let a = compose(Category::Python, Difficulty::Intermediate, 4, &mut StdRng::seed_from_u64(42));
    let b = compose(Category::Python, Difficulty::Intermediate, 4, &mut StdRng::seed_from_u64(42));
    let texts_a: Vec<_> = a.iter().map(|q| q.text.clone()).collect();
    let texts_b: Vec<_> = b.iter().map(|q| q.text.clone()).collect();
    assert_eq!(texts_a, texts_b);
    let kw_a: Vec<_> = a.iter().map(|q| q.keywords.clone()).collect();
    let kw_b: Vec<_> = b.iter().map(|q| q.keywords.clone()).collect();
    assert_eq!(kw_a, kw_b);
  }

  #[test]
  fn ids_carry_category_and_difficulty() {
    let mut rng = StdRng::seed_from_u64(3);
    let qs = compose(Category::Hr, Difficulty::Beginner, 2, &mut rng);
    for q in &qs {
      assert!(q.id.starts_with("hr-beginner-"), "{}", q.id);
    }
  }
}
