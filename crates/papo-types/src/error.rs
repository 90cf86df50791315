//! Error types for the papo client.

use thiserror::Error;

/// Errors from talking to the chatbot backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS failure,
    /// connection refused, connection reset mid-transfer).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend rejected the request and said why in an `erro` body.
    #[error("backend error: {message}")]
    Backend { message: String },

    /// Non-success status without a parseable `erro` body.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response arrived but its body was not the expected shape.
    #[error("invalid response: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let request = ApiError::Request("connection refused".to_string());
        assert_eq!(request.to_string(), "request failed: connection refused");

        let backend = ApiError::Backend {
            message: "Nenhuma pergunta foi recebida.".to_string(),
        };
        assert_eq!(
            backend.to_string(),
            "backend error: Nenhuma pergunta foi recebida."
        );

        let status = ApiError::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(status.to_string(), "unexpected status 502: Bad Gateway");

        let deser = ApiError::Deserialization("missing field `resposta`".to_string());
        assert_eq!(
            deser.to_string(),
            "invalid response: missing field `resposta`"
        );
    }
}
