//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a chat session starts, showing the bot's
//! name, the backend it talks to, and the session identifier.

use console::style;

/// Print the welcome banner at the start of a chat session.
///
/// Includes a hint about slash commands and how to leave.
pub fn print_welcome_banner(bot_name: &str, base_url: &str, session_id: &str) {
    println!();
    println!("  💬 {}", style(bot_name).cyan().bold());
    println!(
        "  {}",
        style("Pergunte qualquer coisa; eu busco a resposta para você.").dim()
    );
    println!();
    println!(
        "  {}  {}",
        style("Servidor:").bold(),
        style(base_url).dim()
    );
    println!(
        "  {}  {}",
        style("Sessão:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Digite /ajuda para comandos, Ctrl+D para sair").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
