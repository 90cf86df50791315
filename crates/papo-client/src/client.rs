//! ChatApiClient -- HTTP client for the chatbot's two-endpoint API.
//!
//! Sends questions to `POST /pergunta` and feedback to `POST /feedback`,
//! both as a single JSON request/response round trip. There is no
//! authentication and no streaming.

use papo_types::api::{AnswerResponse, ErrorBody, FeedbackRequest, QuestionRequest};
use papo_types::error::ApiError;
use papo_types::feedback::Feedback;

/// Client for the chatbot backend.
///
/// Holds a shared `reqwest::Client` and the deployment-specific base URL
/// under which the two fixed endpoint paths live.
///
/// No request timeout is configured: the backend answers questions with
/// live Wikipedia and web lookups, and long round trips are expected.
#[derive(Debug, Clone)]
pub struct ChatApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ChatApiClient {
    /// Path of the question endpoint.
    const QUESTION_PATH: &'static str = "/pergunta";
    /// Path of the feedback endpoint.
    const FEEDBACK_PATH: &'static str = "/feedback";

    /// Create a client for the backend at `base_url`.
    ///
    /// A trailing slash on the base URL is dropped so the fixed paths
    /// join cleanly.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a given endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit a question and return the bot's answer.
    ///
    /// The text is sent exactly as given; emptiness checks and trimming
    /// are the caller's concern. On a non-success status the backend's
    /// `{"erro": ...}` body, when present, becomes [`ApiError::Backend`].
    pub async fn ask(&self, question: &str) -> Result<String, ApiError> {
        let body = QuestionRequest {
            question: question.to_string(),
        };
        let url = self.url(Self::QUESTION_PATH);

        tracing::debug!(url = %url, "submitting question");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorBody>(&error_body) {
                Ok(parsed) => ApiError::Backend {
                    message: parsed.message,
                },
                Err(_) => ApiError::Status {
                    status: status.as_u16(),
                    body: error_body,
                },
            });
        }

        let answer: AnswerResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(format!("failed to parse answer: {e}")))?;

        Ok(answer.answer)
    }

    /// Submit a thumbs-up / thumbs-down signal.
    ///
    /// Any HTTP response counts as delivered: status line and body are
    /// ignored. Only a failure to reach the backend at all is an error.
    pub async fn send_feedback(&self, feedback: Feedback) -> Result<(), ApiError> {
        let body = FeedbackRequest {
            positive: feedback.is_positive(),
        };
        let url = self.url(Self::FEEDBACK_PATH);

        tracing::debug!(url = %url, feedback = %feedback, "submitting feedback");

        self.client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(())
    }
}
