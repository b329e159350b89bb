//! Public request/response structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Mode, Question};
use crate::session::SessionSummary;

//
// Question issuance
//

#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub count: Option<usize>,
}

#[derive(Serialize)]
pub struct QuestionsOut {
    pub questions: Vec<Question>,
}

//
// Session lifecycle
//

#[derive(Debug, Deserialize)]
pub struct StartSessionIn {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    #[serde(default)]
    pub mode: Option<Mode>,
    pub count: Option<usize>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct StartSessionOut {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub questions: Vec<Question>,
}

#[derive(Deserialize)]
pub struct AnswerIn {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub answer: String,
}

#[derive(Serialize)]
pub struct AnswerOut {
    pub score: u8,
    pub answered: usize,
    pub total: usize,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SessionSummary>,
}

//
// Pure session scoring (no I/O, caller supplies both lists)
//

#[derive(Deserialize)]
pub struct ScoreSessionIn {
    pub questions: Vec<Question>,
    pub answers: Vec<String>,
}

//
// History
//

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct ResultsOut {
    pub results: Vec<SessionSummary>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
