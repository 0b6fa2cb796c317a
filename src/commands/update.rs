use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CommandStore;

/// Replace the display name of `cmd` unconditionally (empty allowed).
pub fn name(db: &mut CommandStore, cmd: &str, new_name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match rename(db, cmd, new_name) {
        true => result.add_message(CmdMessage::success(format!(
            "Display name of '{}' is now '{}'",
            cmd, new_name
        ))),
        false => result.add_message(CmdMessage::error(format!("Command not found: '{}'", cmd))),
    }
    Ok(result)
}

/// Replace the whole tag set of `cmd`: overwrite, not merge. The merging
/// counterpart lives in `add`.
pub fn tags(db: &mut CommandStore, cmd: &str, new_tags: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match retag(db, cmd, new_tags) {
        true => {
            let tag_list = db.get(cmd).map(|r| r.tags.join(", ")).unwrap_or_default();
            result.add_message(CmdMessage::success(format!(
                "Tags of '{}' are now [{}]",
                cmd, tag_list
            )));
        }
        false => result.add_message(CmdMessage::error(format!("Command not found: '{}'", cmd))),
    }
    Ok(result)
}

/// Sentinel-return core of `name`: false when `cmd` is unknown.
pub fn rename(db: &mut CommandStore, cmd: &str, new_name: &str) -> bool {
    match db.get_mut(cmd) {
        Some(record) => {
            record.name = new_name.to_string();
            true
        }
        None => false,
    }
}

/// Sentinel-return core of `tags`: false when `cmd` is unknown.
pub fn retag(db: &mut CommandStore, cmd: &str, new_tags: &[String]) -> bool {
    match db.get_mut(cmd) {
        Some(record) => {
            record.set_tags(new_tags);
            true
        }
        None => false,
    }
}
