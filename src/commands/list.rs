use crate::commands::{CmdMessage, CmdResult, CommandSummary, UsageRow};
use crate::error::Result;
use crate::model::CommandStore;

/// With no argument: one summary row per command. With a command name:
/// its usage rows, or an error message if the name is unknown.
pub fn run(db: &CommandStore, cmd: Option<&str>) -> Result<CmdResult> {
    match cmd {
        None => Ok(CmdResult::default().with_summaries(
            db.iter()
                .map(|(name, record)| CommandSummary::from_record(name, record))
                .collect(),
        )),
        Some(cmd) => {
            let Some(record) = db.get(cmd) else {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(format!(
                    "Command not found: '{}'",
                    cmd
                )));
                return Ok(result);
            };

            let rows = record
                .examples
                .iter()
                .enumerate()
                .map(|(index, example)| UsageRow {
                    command: cmd.to_string(),
                    display_name: record.name.clone(),
                    index,
                    usage: example.usage.clone(),
                    note: example.note.clone(),
                })
                .collect();
            Ok(CmdResult::default().with_rows(rows))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn seeded() -> CommandStore {
        let mut db = CommandStore::new();
        add::run(
            &mut db,
            "git",
            Some("版本管理"),
            "git status",
            None,
            Some(&["dev".to_string()]),
        )
        .unwrap();
        add::run(&mut db, "git", None, "git log", None, None).unwrap();
        add::run(&mut db, "ls", None, "ls -l", None, None).unwrap();
        db
    }

    #[test]
    fn overview_has_one_summary_per_command() {
        let db = seeded();
        let summaries = run(&db, None).unwrap().summaries;
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].command, "git");
        assert_eq!(summaries[0].usage_count, 2);
        assert_eq!(summaries[0].tags, vec!["dev"]);
        assert_eq!(summaries[1].command, "ls");
    }

    #[test]
    fn single_command_lists_usages_in_order() {
        let db = seeded();
        let rows = run(&db, Some("git")).unwrap().rows;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[1].usage, "git log");
        assert_eq!(rows[0].display_name, "版本管理");
    }

    #[test]
    fn unknown_command_yields_error_message() {
        let db = seeded();
        let result = run(&db, Some("svn")).unwrap();
        assert!(result.rows.is_empty());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Error
        ));
    }
}
