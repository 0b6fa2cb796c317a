use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KvsError, Result};
use crate::model::{normalize_tags, CommandStore};
use std::path::Path;

/// Counters reported by a merge: commands that were new to the store, and
/// records replaced (overwrite mode) or usages appended (merge mode).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub new_commands: usize,
    pub merged: usize,
}

/// Import a snapshot file into the store.
///
/// The file must hold the same JSON shape `export` writes: one object
/// keyed by command name. A missing file and a file that does not parse as
/// that mapping are hard errors; a half-imported batch is worse than none.
pub fn run(db: &mut CommandStore, path: &Path, overwrite: bool) -> Result<CmdResult> {
    if !path.exists() {
        return Err(KvsError::ImportSourceMissing(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)?;
    let incoming: CommandStore = serde_json::from_str(&raw)?;

    let stats = merge(db, incoming, overwrite);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported from '{}': {} new command(s), {} merged/overwritten",
        path.display(),
        stats.new_commands,
        stats.merged
    )));
    if !overwrite {
        result.add_message(CmdMessage::info(
            "Existing commands were merged, not replaced (use --overwrite to replace)",
        ));
    }
    Ok(result)
}

/// Fold `incoming` into `db`.
///
/// Per incoming command: unknown names are inserted wholesale; known names
/// are replaced when `overwrite` is set, otherwise merged. A merge appends
/// only usages whose `(usage, note)` pair is not already present, adopts a
/// non-empty incoming display name, and unions incoming tags in. Incoming
/// records without a single usage are skipped, so a command with zero usages
/// never enters the store.
pub fn merge(db: &mut CommandStore, incoming: CommandStore, overwrite: bool) -> MergeStats {
    let mut stats = MergeStats::default();

    for (cmd, mut record) in incoming.into_inner() {
        if record.examples.is_empty() {
            continue;
        }
        record.tags = normalize_tags(record.tags);

        match db.get_mut(&cmd) {
            None => {
                db.insert(cmd, record);
                stats.new_commands += 1;
            }
            Some(_) if overwrite => {
                db.insert(cmd, record);
                stats.merged += 1;
            }
            Some(existing) => {
                for example in record.examples {
                    if !existing.examples.contains(&example) {
                        existing.examples.push(example);
                        stats.merged += 1;
                    }
                }
                if !record.name.is_empty() {
                    existing.name = record.name;
                }
                if !record.tags.is_empty() {
                    existing.merge_tags(&record.tags);
                }
            }
        }
    }

    stats
}
