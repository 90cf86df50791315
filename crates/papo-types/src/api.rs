//! Wire types for the chatbot HTTP API.
//!
//! The backend speaks Portuguese field names (`pergunta`, `resposta`,
//! `positivo`, `erro`). The serde renames pin those exact names to the
//! wire while the Rust fields stay English. Both endpoints take and
//! return a single small JSON object; there is no envelope and no
//! correlation identifier anywhere in the protocol.

use serde::{Deserialize, Serialize};

/// Request body for `POST /pergunta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    /// The question exactly as the user entered it, surrounding
    /// whitespace included.
    #[serde(rename = "pergunta")]
    pub question: String,
}

/// Response body for a successful `POST /pergunta`.
///
/// Unknown fields are ignored so the backend can grow its payload
/// without breaking older clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerResponse {
    /// The bot's answer: markdown text with `\n` line breaks.
    #[serde(rename = "resposta")]
    pub answer: String,
}

/// Request body for `POST /feedback`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    #[serde(rename = "positivo")]
    pub positive: bool,
}

/// Error body the backend attaches to a rejected question, e.g.
/// `400 {"erro": "Nenhuma pergunta foi recebida."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "erro")]
    pub message: String,
}
