use super::message::IncomingChatMessage;

/// One rendered chat line: sender, text and the server's timestamp (or empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub username: String,
    pub message: String,
    pub timestamp: String,
}

impl DisplayEntry {
    /// Plain-text form of the entry: `"{username}: {message} {timestamp}"`.
    pub fn display_text(&self) -> String {
        format!("{}: {} {}", self.username, self.message, self.timestamp)
    }
}

impl From<IncomingChatMessage> for DisplayEntry {
    fn from(message: IncomingChatMessage) -> Self {
        Self {
            username: message.username,
            message: message.message,
            timestamp: message.timestamp.unwrap_or_default(),
        }
    }
}

/// Append-only list of received chat entries, kept in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayList {
    entries: Vec<DisplayEntry>,
    scroll_index: Option<usize>,
}

impl DisplayList {
    pub fn entries(&self) -> &[DisplayEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry and scrolls to it.
    pub fn append(&mut self, entry: DisplayEntry) {
        self.entries.push(entry);
        self.scroll_index = Some(self.entries.len() - 1);
    }

    /// Index of the entry the view must keep visible.
    pub fn scroll_index(&self) -> Option<usize> {
        self.scroll_index
    }
}
