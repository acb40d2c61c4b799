use chrono::{DateTime, Local};

/// One line of the on-screen event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    pub received: DateTime<Local>,
}

/// Append-only history shown in the "Event Log" view.
///
/// Entries are never removed or reordered. The rendered text is every
/// message followed by a line terminator, in arrival order.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
    text: String,
    scroll_to_bottom: bool,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `message` at the end and asks the view to scroll to it.
    pub fn append(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.text.push_str(&message);
        self.text.push('\n');
        self.entries.push(LogEntry {
            message,
            received: Local::now(),
        });
        self.scroll_to_bottom = true;
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    // Returns true once per append batch; the view consumes it when drawing.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_prior_content() {
        let mut log = EventLog::new();
        log.append("first");
        log.append("second");
        assert_eq!(log.text(), "first\nsecond\n");
        assert_eq!(log.lines().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(log.last().map(|e| e.message.as_str()), Some("second"));
    }

    #[test]
    fn timestamps_follow_arrival_order() {
        let mut log = EventLog::new();
        log.append("a");
        log.append("b");
        let entries = log.entries();
        assert!(entries[0].received <= entries[1].received);
    }

    #[test]
    fn scroll_request_is_consumed() {
        let mut log = EventLog::new();
        assert!(!log.take_scroll_request());
        log.append("line");
        assert!(log.take_scroll_request());
        assert!(!log.take_scroll_request());
    }
}
