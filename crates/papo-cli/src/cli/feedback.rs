//! One-shot feedback command.

use anyhow::{Context, Result};
use console::style;

use papo_client::client::ChatApiClient;
use papo_types::feedback::Feedback;

/// Send a single thumbs-up/down signal and confirm delivery.
pub async fn send(client: &ChatApiClient, feedback: Feedback, json: bool) -> Result<()> {
    client
        .send_feedback(feedback)
        .await
        .context("erro ao enviar feedback")?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "enviado": true, "positivo": feedback.is_positive() })
        );
    } else {
        println!(
            "  {} Feedback enviado {}",
            style("✓").green().bold(),
            feedback.glyph()
        );
    }

    Ok(())
}
