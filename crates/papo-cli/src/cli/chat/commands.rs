//! Slash command parsing and execution for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for feedback,
//! history, help, and leaving the session. Portuguese forms are primary;
//! English aliases are accepted.

use console::style;

use papo_types::feedback::Feedback;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Replay the transcript so far.
    History,
    /// Send thumbs-up/down feedback.
    Feedback(Feedback),
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`, in which case the
/// text is a question for the bot.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();

    match cmd.as_str() {
        "/ajuda" | "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/limpar" | "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/sair" | "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/historico" | "/histórico" | "/history" => Some(ChatCommand::History),
        "/gostei" | "/like" | "/+1" => Some(ChatCommand::Feedback(Feedback::Positive)),
        "/naogostei" | "/dislike" | "/-1" => Some(ChatCommand::Feedback(Feedback::Negative)),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Comandos disponíveis:").bold());
    println!();
    println!(
        "  {}      {}",
        style("/ajuda").cyan(),
        "Mostra esta ajuda"
    );
    println!(
        "  {}     {}",
        style("/gostei").cyan(),
        "Envia feedback positivo 👍"
    );
    println!(
        "  {}  {}",
        style("/naogostei").cyan(),
        "Envia feedback negativo 👎"
    );
    println!(
        "  {}  {}",
        style("/historico").cyan(),
        "Repete a conversa até aqui"
    );
    println!(
        "  {}     {}",
        style("/limpar").cyan(),
        "Limpa a tela"
    );
    println!(
        "  {}       {}",
        style("/sair").cyan(),
        "Encerra a conversa"
    );
    println!();
    println!(
        "  {}",
        style("Ctrl+D encerra, Ctrl+C é seguro (nada se perde)").dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/ajuda"), Some(ChatCommand::Help));
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/sair"), Some(ChatCommand::Exit));
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_clear() {
        assert_eq!(parse("/limpar"), Some(ChatCommand::Clear));
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("/cls"), Some(ChatCommand::Clear));
    }

    #[test]
    fn test_parse_history() {
        assert_eq!(parse("/historico"), Some(ChatCommand::History));
        assert_eq!(parse("/histórico"), Some(ChatCommand::History));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_feedback_positive() {
        assert_eq!(
            parse("/gostei"),
            Some(ChatCommand::Feedback(Feedback::Positive))
        );
        assert_eq!(
            parse("/like"),
            Some(ChatCommand::Feedback(Feedback::Positive))
        );
        assert_eq!(
            parse("/+1"),
            Some(ChatCommand::Feedback(Feedback::Positive))
        );
    }

    #[test]
    fn test_parse_feedback_negative() {
        assert_eq!(
            parse("/naogostei"),
            Some(ChatCommand::Feedback(Feedback::Negative))
        );
        assert_eq!(
            parse("/dislike"),
            Some(ChatCommand::Feedback(Feedback::Negative))
        );
        assert_eq!(
            parse("/-1"),
            Some(ChatCommand::Feedback(Feedback::Negative))
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse("/AJUDA"), Some(ChatCommand::Help));
        assert_eq!(parse("/Gostei"), Some(ChatCommand::Feedback(Feedback::Positive)));
    }

    #[test]
    fn test_parse_ignores_trailing_words() {
        assert_eq!(
            parse("/gostei muito dessa resposta"),
            Some(ChatCommand::Feedback(Feedback::Positive))
        );
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("qual a capital da França?"), None);
        assert_eq!(parse("  oi  "), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("/foo"),
            Some(ChatCommand::Unknown("/foo".to_string()))
        );
    }
}
