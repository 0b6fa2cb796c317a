use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CommandStore, DeleteTarget, UsageExample};

/// Remove one usage from `cmd`, addressed by index or keyword.
pub fn run(db: &mut CommandStore, cmd: &str, target: &DeleteTarget) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match remove_usage(db, cmd, target) {
        Some((removed, command_gone)) => {
            result.add_message(CmdMessage::success(format!(
                "Removed usage '{}' from '{}'",
                removed.usage, cmd
            )));
            if command_gone {
                result.add_message(CmdMessage::warning(format!(
                    "'{}' has no usages left and was removed",
                    cmd
                )));
            }
        }
        None => {
            let what = match target {
                DeleteTarget::Index(i) => format!("index {}", i),
                DeleteTarget::Keyword(kw) => format!("keyword '{}'", kw),
            };
            result.add_message(CmdMessage::error(format!(
                "Nothing to delete: no usage of '{}' matches {}",
                cmd, what
            )));
        }
    }

    Ok(result)
}

/// Sentinel-return core of `run`.
///
/// Returns the removed example and whether removing it emptied (and
/// therefore deleted) the whole command record. `None` when the command
/// is unknown, the index is out of range, or no usage/note contains the
/// keyword (matched case-insensitively, first hit wins).
pub fn remove_usage(
    db: &mut CommandStore,
    cmd: &str,
    target: &DeleteTarget,
) -> Option<(UsageExample, bool)> {
    let record = db.get_mut(cmd)?;

    let index = match target {
        DeleteTarget::Index(i) => {
            if *i >= record.examples.len() {
                return None;
            }
            *i
        }
        DeleteTarget::Keyword(kw) => {
            let kw = kw.to_lowercase();
            record.examples.iter().position(|ex| {
                ex.usage.to_lowercase().contains(&kw) || ex.note.to_lowercase().contains(&kw)
            })?
        }
    };

    let removed = record.examples.remove(index);
    let command_gone = record.examples.is_empty();
    if command_gone {
        db.remove(cmd);
    }
    Some((removed, command_gone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn seeded() -> CommandStore {
        let mut db = CommandStore::new();
        add::run(&mut db, "git", None, "git status", Some("check"), None).unwrap();
        add::run(&mut db, "git", None, "git log", None, None).unwrap();
        add::run(&mut db, "git", None, "git checkout -b", Some("branch"), None).unwrap();
        db
    }

    #[test]
    fn removes_by_index_and_shifts_later_ones() {
        let mut db = seeded();
        let (removed, gone) = remove_usage(&mut db, "git", &DeleteTarget::Index(0)).unwrap();
        assert_eq!(removed.usage, "git status");
        assert!(!gone);
        // "git log" moved down into slot 0.
        assert_eq!(db.usage_at("git", 0).unwrap().usage, "git log");
    }

    #[test]
    fn index_out_of_range_fails() {
        let mut db = seeded();
        assert!(remove_usage(&mut db, "git", &DeleteTarget::Index(3)).is_none());
        assert_eq!(db.examples("git").len(), 3);
    }

    #[test]
    fn unknown_command_fails() {
        let mut db = seeded();
        assert!(remove_usage(&mut db, "svn", &DeleteTarget::Index(0)).is_none());
    }

    #[test]
    fn keyword_matches_usage_case_insensitively() {
        let mut db = seeded();
        let target = DeleteTarget::Keyword("CHECKOUT".to_string());
        let (removed, _) = remove_usage(&mut db, "git", &target).unwrap();
        assert_eq!(removed.usage, "git checkout -b");
    }

    #[test]
    fn keyword_matches_note_and_first_hit_wins() {
        let mut db = seeded();
        // "check" occurs in the note of #0 and the usage of #2; #0 goes.
        let target = DeleteTarget::Keyword("check".to_string());
        let (removed, _) = remove_usage(&mut db, "git", &target).unwrap();
        assert_eq!(removed.usage, "git status");
    }

    #[test]
    fn keyword_without_match_fails() {
        let mut db = seeded();
        let target = DeleteTarget::Keyword("rebase".to_string());
        assert!(remove_usage(&mut db, "git", &target).is_none());
    }

    #[test]
    fn removing_last_usage_removes_the_command() {
        let mut db = CommandStore::new();
        add::run(&mut db, "ls", None, "ls -l", None, None).unwrap();

        let (removed, gone) = remove_usage(&mut db, "ls", &DeleteTarget::Index(0)).unwrap();
        assert_eq!(removed.usage, "ls -l");
        assert!(gone);
        assert!(!db.contains("ls"));
    }

    #[test]
    fn messages_distinguish_outcomes() {
        let mut db = seeded();
        let ok = run(&mut db, "git", &DeleteTarget::Index(0)).unwrap();
        assert!(matches!(
            ok.messages[0].level,
            crate::commands::MessageLevel::Success
        ));

        let missing = run(&mut db, "git", &DeleteTarget::Index(99)).unwrap();
        assert!(matches!(
            missing.messages[0].level,
            crate::commands::MessageLevel::Error
        ));
    }
}
