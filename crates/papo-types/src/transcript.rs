//! The append-only chat transcript.
//!
//! Mirrors the terminal scrollback: entries go in at the end, in submission
//! order, and are never removed or rewritten. Nothing here persists across
//! runs; a new session starts from an empty transcript.

use chrono::{DateTime, Utc};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

/// A single entry in the transcript.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// An append-only sequence of transcript entries.
///
/// The API is deliberately narrow: callers can append and read, never
/// remove, so submission order is display order by construction.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a user question.
    pub fn push_user(&mut self, text: String) {
        self.entries.push(TranscriptEntry {
            speaker: Speaker::User,
            text,
            sent_at: Utc::now(),
        });
    }

    /// Append a bot answer.
    pub fn push_bot(&mut self, text: String) {
        self.entries.push(TranscriptEntry {
            speaker: Speaker::Bot,
            text,
            sent_at: Utc::now(),
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
