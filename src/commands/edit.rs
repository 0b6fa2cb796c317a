use crate::commands::{CmdMessage, CmdResult, UsageRow};
use crate::error::Result;
use crate::model::CommandStore;

/// Replace the usage and/or note of one example in place.
///
/// `None` means "leave the field alone"; `Some("")` is an explicit
/// replacement with the empty string. Either both provided fields apply or
/// nothing does.
pub fn run(
    db: &mut CommandStore,
    cmd: &str,
    index: usize,
    new_usage: Option<&str>,
    new_note: Option<&str>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !apply(db, cmd, index, new_usage, new_note) {
        result.add_message(CmdMessage::error(format!(
            "Cannot edit: no usage #{} under '{}'",
            index, cmd
        )));
        return Ok(result);
    }

    let record = db.get(cmd).expect("record exists after successful edit");
    let example = &record.examples[index];
    result.rows.push(UsageRow {
        command: cmd.to_string(),
        display_name: record.name.clone(),
        index,
        usage: example.usage.clone(),
        note: example.note.clone(),
    });
    result.add_message(CmdMessage::success(format!(
        "Edited usage #{} of '{}'",
        index, cmd
    )));
    Ok(result)
}

/// Sentinel-return core of `run`: false when `cmd` is unknown or `index`
/// is out of range, in which case nothing is touched.
pub fn apply(
    db: &mut CommandStore,
    cmd: &str,
    index: usize,
    new_usage: Option<&str>,
    new_note: Option<&str>,
) -> bool {
    let Some(record) = db.get_mut(cmd) else {
        return false;
    };
    let Some(example) = record.examples.get_mut(index) else {
        return false;
    };

    if let Some(usage) = new_usage {
        example.usage = usage.to_string();
    }
    if let Some(note) = new_note {
        example.note = note.to_string();
    }
    true
}
