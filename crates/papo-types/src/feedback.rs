//! Binary feedback about bot answers.

use std::fmt;

/// A thumbs-up / thumbs-down signal.
///
/// Feedback travels alone: the protocol attaches no question, answer, or
/// session identifier to a submission, so a signal cannot be tied back to
/// a specific exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Positive,
    Negative,
}

impl Feedback {
    /// The boolean that goes on the wire as `positivo`.
    pub fn is_positive(self) -> bool {
        matches!(self, Feedback::Positive)
    }

    /// The glyph shown next to feedback confirmations.
    pub fn glyph(self) -> &'static str {
        match self {
            Feedback::Positive => "👍",
            Feedback::Negative => "👎",
        }
    }
}

// Log form; the wire carries only the `positivo` boolean.
impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Positive => write!(f, "positive"),
            Feedback::Negative => write!(f, "negative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_a_lowercase_word() {
        assert_eq!(Feedback::Positive.to_string(), "positive");
        assert_eq!(Feedback::Negative.to_string(), "negative");
    }

    #[test]
    fn is_positive_matches_variant() {
        assert!(Feedback::Positive.is_positive());
        assert!(!Feedback::Negative.is_positive());
    }

    #[test]
    fn glyphs_are_thumbs() {
        assert_eq!(Feedback::Positive.glyph(), "👍");
        assert_eq!(Feedback::Negative.glyph(), "👎");
    }
}
