use crate::model::CommandRecord;

pub mod add;
pub mod copy;
pub mod delete;
pub mod edit;
pub mod export;
pub mod find;
pub mod import;
pub mod list;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of the overview table (`kvs list`).
#[derive(Debug, Clone)]
pub struct CommandSummary {
    pub command: String,
    pub display_name: String,
    pub usage_count: usize,
    pub tags: Vec<String>,
}

impl CommandSummary {
    pub fn from_record(command: &str, record: &CommandRecord) -> Self {
        Self {
            command: command.to_string(),
            display_name: record.name.clone(),
            usage_count: record.examples.len(),
            tags: record.tags.clone(),
        }
    }
}

/// One usage row, as shown by `list <cmd>`, `add` and `find`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRow {
    pub command: String,
    pub display_name: String,
    pub index: usize,
    pub usage: String,
    pub note: String,
}

/// What a command operation hands back to the caller: plain data rows for
/// rendering, an optional raw payload (clipboard text), and leveled
/// messages. No I/O happens below this type.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub summaries: Vec<CommandSummary>,
    pub rows: Vec<UsageRow>,
    pub payload: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_summaries(mut self, summaries: Vec<CommandSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn with_rows(mut self, rows: Vec<UsageRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_payload(mut self, payload: String) -> Self {
        self.payload = Some(payload);
        self
    }
}
