//! CLI command definitions and dispatch for the `papo` binary.
//!
//! Uses clap derive macros for argument parsing. Running `papo` with no
//! subcommand starts the interactive chat, so `papo` and `papo chat` are
//! the same thing.

pub mod ask;
pub mod chat;
pub mod feedback;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use papo_types::feedback::Feedback;

/// Chat with your chatbot from the terminal.
#[derive(Parser)]
#[command(name = "papo", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Base URL of the chatbot backend (overrides config.toml).
    #[arg(long, env = "PAPO_BASE_URL", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session (the default).
    Chat,

    /// Send a single question and print the answer.
    Ask {
        /// The question to send.
        #[arg(value_name = "PERGUNTA")]
        question: String,
    },

    /// Send thumbs-up/down feedback about the last answer.
    Feedback {
        /// Which way the thumb points.
        #[arg(value_enum)]
        vote: FeedbackVote,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Feedback direction as it appears on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeedbackVote {
    /// The answer helped (👍).
    Up,
    /// The answer did not help (👎).
    Down,
}

impl From<FeedbackVote> for Feedback {
    fn from(vote: FeedbackVote) -> Self {
        match vote {
            FeedbackVote::Up => Feedback::Positive,
            FeedbackVote::Down => Feedback::Negative,
        }
    }
}
