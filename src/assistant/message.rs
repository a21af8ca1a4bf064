use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-session message identifier, increasing in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Urgency of an assistant reply. Only drives presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Warning,
    Emergency,
}

/// One immutable transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    content: String,
    timestamp: DateTime<Local>,
    severity: Severity,
}

impl Message {
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            sender: Sender::User,
            content: content.into(),
            timestamp: Local::now(),
            severity: Severity::Normal,
        }
    }

    pub fn assistant(id: MessageId, content: impl Into<String>, severity: Severity) -> Self {
        Self {
            id,
            sender: Sender::Assistant,
            content: content.into(),
            timestamp: Local::now(),
            severity,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Display lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_normal_severity() {
        let msg = Message::user(MessageId(2), "hello");
        assert!(msg.is_user());
        assert_eq!(msg.severity(), Severity::Normal);
    }

    #[test]
    fn lines_keep_blank_lines() {
        let msg = Message::assistant(MessageId(3), "a\n\nb", Severity::Warning);
        assert_eq!(msg.lines().collect::<Vec<_>>(), vec!["a", "", "b"]);
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Emergency).unwrap();
        assert_eq!(json, "\"emergency\"");
    }
}
