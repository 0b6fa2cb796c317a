use crate::commands::{CmdMessage, CmdResult, UsageRow};
use crate::error::{KvsError, Result};
use crate::model::{CommandStore, UsageExample};

/// Append a usage example to `cmd`, creating the record on first use.
///
/// A provided display name only fills an empty one; it never clobbers a
/// name the record already carries. Provided tags are unioned into the tag
/// set; `add` never removes a tag (that is `update::tags`' job).
pub fn run(
    db: &mut CommandStore,
    cmd: &str,
    display_name: Option<&str>,
    usage: &str,
    note: Option<&str>,
    tags: Option<&[String]>,
) -> Result<CmdResult> {
    if cmd.trim().is_empty() {
        return Err(KvsError::Validation(
            "command name cannot be empty".to_string(),
        ));
    }
    if usage.trim().is_empty() {
        return Err(KvsError::Validation(
            "usage example cannot be empty".to_string(),
        ));
    }

    let record = db.entry(cmd);

    if let Some(name) = display_name {
        if !name.is_empty() && record.name.is_empty() {
            record.name = name.to_string();
        }
    }

    if let Some(tags) = tags {
        record.merge_tags(tags);
    }

    record
        .examples
        .push(UsageExample::new(usage, note.unwrap_or_default()));
    let index = record.examples.len() - 1;

    let row = UsageRow {
        command: cmd.to_string(),
        display_name: record.name.clone(),
        index,
        usage: usage.to_string(),
        note: note.unwrap_or_default().to_string(),
    };

    let mut result = CmdResult::default().with_rows(vec![row]);
    result.add_message(CmdMessage::success(format!(
        "Added usage #{} to '{}'",
        index, cmd
    )));
    Ok(result)
}
