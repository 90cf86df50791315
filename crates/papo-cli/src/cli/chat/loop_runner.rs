//! Main chat loop orchestration.
//!
//! Coordinates the complete conversation lifecycle: welcome banner, input
//! loop, slash commands, question submission with a thinking spinner,
//! markdown answer rendering, and feedback submission.

use console::style;
use tracing::{error, info, warn};

use papo_client::client::ChatApiClient;
use papo_types::config::ClientConfig;
use papo_types::feedback::Feedback;
use papo_types::transcript::Speaker;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::{ChatRenderer, parse_accent};
use super::session::{ChatSession, SubmitOutcome};

/// Run the interactive chat loop.
pub async fn run_chat_loop(client: &ChatApiClient, config: &ClientConfig) -> anyhow::Result<()> {
    let mut session = ChatSession::new(client.clone());
    let session_id = session.id().to_string();

    print_welcome_banner(&config.bot_name, client.base_url(), &session_id);
    info!(session = %session_id, "Chat session started");

    let accent = config.accent_color.as_deref().and_then(parse_accent);
    let renderer = ChatRenderer::new(accent);

    let prompt = format!(
        "  {} ",
        style(format!("{} >", config.user_name)).green().bold()
    );
    let (mut chat_input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Até logo!").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Ctrl+D encerra; pode continuar perguntando.").dim()
                );
                continue;
            }
            InputEvent::Line(text) => {
                // Slash commands
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Até logo!").dim());
                            break;
                        }
                        ChatCommand::History => {
                            print_history(&session, config);
                            continue;
                        }
                        ChatCommand::Feedback(feedback) => {
                            send_feedback(&session, feedback).await;
                            continue;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Comando desconhecido: {}. Digite /ajuda para ver os comandos.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                submit_question(&mut session, &renderer, config, &text).await;
            }
        }
    }

    info!(session = %session_id, entries = session.transcript().len(), "Chat session ended");
    Ok(())
}

/// Drive one question through the session, with a thinking spinner.
async fn submit_question(
    session: &mut ChatSession,
    renderer: &ChatRenderer,
    config: &ClientConfig,
    text: &str,
) {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("pensando...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let outcome = session.submit_question(text).await;
    spinner.finish_and_clear();

    match outcome {
        SubmitOutcome::EmptyQuestion => {
            println!(
                "\n  {} Por favor, insira uma pergunta.\n",
                style("!").yellow().bold()
            );
        }
        SubmitOutcome::Answered(answer) => {
            println!(
                "\n  {}",
                style(format!("{}:", config.bot_name)).cyan().bold()
            );
            print!("{}", renderer.render_final(&answer));
            println!();
        }
        SubmitOutcome::Failed(e) => {
            error!(error = %e, "Erro ao processar a pergunta");
            eprintln!(
                "\n  {} Erro ao processar a pergunta: {e}",
                style("!").red().bold()
            );
            eprintln!(
                "  {}\n",
                style("A conversa continua; tente novamente.").dim()
            );
        }
    }
}

/// Send feedback and confirm on the console.
async fn send_feedback(session: &ChatSession, feedback: Feedback) {
    match session.submit_feedback(feedback).await {
        Ok(()) => {
            info!(feedback = %feedback, "Feedback enviado");
            println!(
                "\n  {} Feedback enviado {}\n",
                style("✓").green().bold(),
                feedback.glyph()
            );
        }
        Err(e) => {
            warn!(error = %e, "Erro ao enviar feedback");
            eprintln!(
                "\n  {} Erro ao enviar feedback: {e}\n",
                style("!").red().bold()
            );
        }
    }
}

/// Replay the in-memory transcript.
fn print_history(session: &ChatSession, config: &ClientConfig) {
    let entries = session.transcript().entries();
    if entries.is_empty() {
        println!("\n  {}\n", style("Nenhuma mensagem ainda.").dim());
        return;
    }

    println!();
    for entry in entries {
        let label = match entry.speaker {
            Speaker::User => style(config.user_name.as_str()).green().bold(),
            Speaker::Bot => style(config.bot_name.as_str()).cyan().bold(),
        };
        // Truncate long entries on a char boundary (answers are UTF-8 heavy)
        let preview = if entry.text.chars().count() > 100 {
            let cut: String = entry.text.chars().take(97).collect();
            format!("{cut}...")
        } else {
            entry.text.clone()
        };
        println!(
            "  {} {} {}",
            style(entry.sent_at.format("%H:%M")).dim(),
            label,
            preview
        );
    }
    println!();
}
