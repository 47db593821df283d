//! Message displayed to the user.
use crate::Error;

/// Message types.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageType {
    /// Error message.
    Error,
}

impl MessageType {
    /// CSS class applied to a message of this type.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Error => "message-error",
        }
    }
}

/// A Message.
#[derive(Clone, PartialEq, Debug)]
pub struct Message {
    /// Message to display.
    pub message: String,

    /// Type of message.
    pub kind: MessageType,
}

impl Message {
    /// Create a `Message` with a `kind` of [`MessageType::Error`].
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: MessageType::Error,
        }
    }
}

impl From<&Error> for Message {
    fn from(err: &Error) -> Self {
        Self::error(err.to_string())
    }
}

#[cfg(test)]
#[path = "./message_test.rs"]
mod message_test;
