//! One-shot question command.

use anyhow::{Context, Result};
use console::style;

use papo_client::client::ChatApiClient;
use papo_types::config::ClientConfig;

use super::chat::renderer::{ChatRenderer, parse_accent};

/// Send a single question and print the rendered answer.
///
/// Renders with the configured accent color, same as the interactive loop.
/// An empty (or whitespace-only) question never reaches the network; the
/// warning line is printed instead and the command exits cleanly.
pub async fn ask(
    client: &ChatApiClient,
    config: &ClientConfig,
    question: &str,
    json: bool,
) -> Result<()> {
    if question.trim().is_empty() {
        eprintln!(
            "  {} Por favor, insira uma pergunta.",
            style("!").yellow().bold()
        );
        return Ok(());
    }

    let answer = client
        .ask(question)
        .await
        .context("erro ao processar a pergunta")?;

    if json {
        println!("{}", serde_json::json!({ "resposta": answer }));
        return Ok(());
    }

    let accent = config.accent_color.as_deref().and_then(parse_accent);
    let renderer = ChatRenderer::new(accent);
    println!("{}", renderer.render_final(&answer).trim_end());
    Ok(())
}
