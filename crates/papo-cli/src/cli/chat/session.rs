//! Chat session state: the API client plus the append-only transcript.
//!
//! `ChatSession` owns the two submission flows. The transcript only grows
//! when the backend actually answers; a failed question leaves it exactly
//! as it was, so a retry does not produce duplicate entries.

use uuid::Uuid;

use papo_client::client::ChatApiClient;
use papo_types::error::ApiError;
use papo_types::feedback::Feedback;
use papo_types::transcript::Transcript;

/// Outcome of a question submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The question was empty after trimming; nothing was sent.
    EmptyQuestion,
    /// The backend answered; question and answer are now in the transcript.
    Answered(String),
    /// The request failed; the transcript is unchanged.
    Failed(ApiError),
}

/// A single interactive chat session.
pub struct ChatSession {
    id: Uuid,
    client: ChatApiClient,
    transcript: Transcript,
}

impl ChatSession {
    /// Start a fresh session against the given client.
    pub fn new(client: ChatApiClient) -> Self {
        Self {
            id: Uuid::now_v7(),
            client,
            transcript: Transcript::new(),
        }
    }

    /// Session identifier. Display only; the protocol never sees it.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The transcript so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Submit a question.
    ///
    /// Only the emptiness check trims; the sent text is exactly what the
    /// user typed. On success the question and the answer are appended to
    /// the transcript, in that order.
    pub async fn submit_question(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            return SubmitOutcome::EmptyQuestion;
        }

        match self.client.ask(text).await {
            Ok(answer) => {
                self.transcript.push_user(text.to_string());
                self.transcript.push_bot(answer.clone());
                SubmitOutcome::Answered(answer)
            }
            Err(e) => SubmitOutcome::Failed(e),
        }
    }

    /// Submit feedback about the most recent answer.
    ///
    /// Carries only the thumbs direction; the transcript is not involved
    /// and is not modified.
    pub async fn submit_feedback(&self, feedback: Feedback) -> Result<(), ApiError> {
        self.client.send_feedback(feedback).await
    }
}
