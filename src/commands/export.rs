use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CommandStore;
use std::path::Path;

/// Write the entire store to `path` as pretty-printed JSON, the same
/// shape the main data file uses, so an exported file can be imported (or
/// dropped in as a data file) as-is. No filtering, no transformation.
pub fn run(db: &CommandStore, path: &Path) -> Result<CmdResult> {
    let json = serde_json::to_string_pretty(db)?;
    std::fs::write(path, json)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} command(s) to '{}'",
        db.len(),
        path.display()
    )));
    Ok(result)
}
