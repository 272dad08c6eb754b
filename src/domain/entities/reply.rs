use std::fmt;

use crate::application::errors::RollError;

/// Kind of a failed or advisory reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FormatError,
    ValueError,
    /// Advisory only, sent ahead of the main reply
    TooManyArgs,
    MessageTooLong,
    DeliveryFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::FormatError => "format_error",
            ErrorKind::ValueError => "value_error",
            ErrorKind::TooManyArgs => "too_many_args",
            ErrorKind::MessageTooLong => "message_too_long",
            ErrorKind::DeliveryFailure => "delivery_failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the bot says back for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Success { text: String },
    Error { kind: ErrorKind, detail: String },
}

impl Reply {
    pub fn success(text: impl Into<String>) -> Self {
        Reply::Success { text: text.into() }
    }

    pub fn error(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Reply::Error {
            kind,
            detail: detail.into(),
        }
    }

    pub fn too_many_args(given: usize, max: usize) -> Self {
        Self::error(
            ErrorKind::TooManyArgs,
            format!("provided {} dice, only the first {} will be rolled.", given, max),
        )
    }

    pub fn message_too_long(length: usize, max: usize) -> Self {
        Self::error(
            ErrorKind::MessageTooLong,
            format!(
                "the result is too long to send ({} of at most {} characters). Try fewer or smaller dice.",
                length, max
            ),
        )
    }

    pub fn delivery_failure() -> Self {
        Self::error(
            ErrorKind::DeliveryFailure,
            "the roll could not be delivered because of a communication error.",
        )
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Reply::Success { .. } => None,
            Reply::Error { kind, .. } => Some(*kind),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success { .. })
    }

    /// Fill the reply template with the author's mention
    pub fn render(&self, mention: &str) -> String {
        match self {
            Reply::Success { text } => format!("{} rolled:\n{}", mention, text),
            Reply::Error { kind: ErrorKind::TooManyArgs, detail } => {
                format!("Warning: {} {}", mention, detail)
            }
            Reply::Error { detail, .. } => format!("Error: {} {}", mention, detail),
        }
    }
}

impl From<RollError> for Reply {
    fn from(err: RollError) -> Self {
        let kind = match err {
            RollError::Format(_) => ErrorKind::FormatError,
            RollError::Value { .. } => ErrorKind::ValueError,
        };
        Reply::error(kind, err.to_string())
    }
}

/// Result of composing one roll command: an optional warning and the main reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub advisory: Option<Reply>,
    pub reply: Reply,
}

impl Composition {
    pub fn new(reply: Reply) -> Self {
        Self { advisory: None, reply }
    }

    pub fn with_advisory(mut self, advisory: Option<Reply>) -> Self {
        self.advisory = advisory;
        self
    }

    /// Replies in the order they must be sent
    pub fn into_replies(self) -> Vec<Reply> {
        self.advisory.into_iter().chain(std::iter::once(self.reply)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_templates() {
        assert_eq!(Reply::success("1d20: 7").render("@dave"), "@dave rolled:\n1d20: 7");
        assert_eq!(
            Reply::too_many_args(15, 10).render("@dave"),
            "Warning: @dave provided 15 dice, only the first 10 will be rolled."
        );
        assert!(Reply::delivery_failure().render("@dave").starts_with("Error: @dave "));
    }

    #[test]
    fn test_from_roll_error_keeps_token() {
        let reply = Reply::from(RollError::Format("bad".to_string()));
        assert_eq!(reply.kind(), Some(ErrorKind::FormatError));
        let Reply::Error { detail, .. } = reply else { panic!("expected error") };
        assert!(detail.contains("`bad`"));
        assert!(detail.contains("<x>d<y>[(+|-)<z>]"));

        let reply = Reply::from(RollError::Value {
            token: "1001d6".to_string(),
            max_count: 1000,
            max_sides: 1000,
        });
        assert_eq!(reply.kind(), Some(ErrorKind::ValueError));
        let Reply::Error { detail, .. } = reply else { panic!("expected error") };
        assert!(detail.contains("`1001d6`"));
        assert!(detail.contains("1000"));
    }

    #[test]
    fn test_advisory_comes_first() {
        let composition = Composition::new(Reply::success("1d4: 2"))
            .with_advisory(Some(Reply::too_many_args(11, 10)));
        let replies = composition.into_replies();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].kind(), Some(ErrorKind::TooManyArgs));
        assert!(replies[1].is_success());
    }
}
