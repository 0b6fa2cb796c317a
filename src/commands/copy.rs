use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CommandStore;

/// Resolve the usage string to copy. The actual clipboard call is the CLI
/// layer's job; this stays a pure lookup.
pub fn run(db: &CommandStore, cmd: &str, index: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !db.contains(cmd) {
        result.add_message(CmdMessage::error(format!("Command not found: '{}'", cmd)));
        return Ok(result);
    }

    match db.usage_at(cmd, index) {
        Some(example) => {
            result.payload = Some(example.usage.clone());
            result.add_message(CmdMessage::success(format!(
                "Copied usage #{} of '{}' to the clipboard",
                index, cmd
            )));
        }
        None => {
            let count = db.examples(cmd).len();
            result.add_message(CmdMessage::error(format!(
                "Usage index {} out of range: '{}' has {} usage(s) (0-{})",
                index,
                cmd,
                count,
                count.saturating_sub(1)
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn seeded() -> CommandStore {
        let mut db = CommandStore::new();
        add::run(&mut db, "git", None, "git status", None, None).unwrap();
        add::run(&mut db, "git", None, "git log", None, None).unwrap();
        db
    }

    #[test]
    fn resolves_usage_text_as_payload() {
        let db = seeded();
        let result = run(&db, "git", 1).unwrap();
        assert_eq!(result.payload.as_deref(), Some("git log"));
    }

    #[test]
    fn out_of_range_index_has_no_payload() {
        let db = seeded();
        let result = run(&db, "git", 2).unwrap();
        assert!(result.payload.is_none());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Error
        ));
    }

    #[test]
    fn unknown_command_has_no_payload() {
        let db = seeded();
        assert!(run(&db, "svn", 0).unwrap().payload.is_none());
    }
}
