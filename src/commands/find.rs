use crate::commands::{CmdResult, UsageRow};
use crate::error::Result;
use crate::model::CommandStore;

/// Case-insensitive substring search over the whole dictionary.
///
/// A query that hits the command name, the display name, or any tag
/// surfaces every usage of that command; otherwise usages are matched one
/// by one against their usage string and note. A record is matched by one
/// rule only: a name/tag hit already includes everything, so the
/// per-usage rule never runs for it and no row is emitted twice.
///
/// Rows come back sorted by command name (case-insensitive), then by usage
/// index. There is no relevance scoring.
pub fn run(db: &CommandStore, query: &str) -> Result<CmdResult> {
    let q = query.to_lowercase();
    let mut rows = Vec::new();

    for (cmd, record) in db.iter() {
        let whole_command = cmd.to_lowercase().contains(&q)
            || record.name.to_lowercase().contains(&q)
            || record.tags.iter().any(|t| t.to_lowercase().contains(&q));

        for (index, example) in record.examples.iter().enumerate() {
            if whole_command
                || example.usage.to_lowercase().contains(&q)
                || example.note.to_lowercase().contains(&q)
            {
                rows.push(UsageRow {
                    command: cmd.clone(),
                    display_name: record.name.clone(),
                    index,
                    usage: example.usage.clone(),
                    note: example.note.clone(),
                });
            }
        }
    }

    rows.sort_by(|a, b| {
        a.command
            .to_lowercase()
            .cmp(&b.command.to_lowercase())
            .then(a.index.cmp(&b.index))
    });

    Ok(CmdResult::default().with_rows(rows))
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
            Some("check"),
            Some(&["dev".to_string()]),
        )
        .unwrap();
        add::run(&mut db, "git", None, "git log", None, None).unwrap();
        add::run(&mut db, "ls", Some("列文件"), "ls -l", Some("detail"), None).unwrap();
        db
    }

    #[test]
    fn name_hit_surfaces_every_usage() {
        let db = seeded();
        let rows = run(&db, "git").unwrap().rows;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].usage, "git status");
        assert_eq!(rows[1].usage, "git log");
    }

    #[test]
    fn display_name_and_tag_hits_count_as_command_hits() {
        let db = seeded();
        assert_eq!(run(&db, "版本").unwrap().rows.len(), 2);
        assert_eq!(run(&db, "dev").unwrap().rows.len(), 2);
    }

    #[test]
    fn usage_hit_returns_single_row() {
        let db = seeded();
        let rows = run(&db, "log").unwrap().rows;
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(
            (
                row.command.as_str(),
                row.display_name.as_str(),
                row.index,
                row.usage.as_str(),
                row.note.as_str()
            ),
            ("git", "版本管理", 1, "git log", "")
        );
    }

    #[test]
    fn note_hit_matches_case_insensitively() {
        let db = seeded();
        let rows = run(&db, "DETAIL").unwrap().rows;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].command, "ls");
    }

    #[test]
    fn command_hit_never_duplicates_usage_hits() {
        let mut db = CommandStore::new();
        // Query "git" hits both the command name and the usage text; the
        // usage must appear once.
        add::run(&mut db, "git", None, "git status", None, None).unwrap();
        assert_eq!(run(&db, "git").unwrap().rows.len(), 1);
    }

    #[test]
    fn rows_sort_by_command_then_index() {
        let mut db = CommandStore::new();
        add::run(&mut db, "b", None, "run x", Some("shared"), None).unwrap();
        add::run(&mut db, "a", None, "run y", Some("shared"), None).unwrap();
        add::run(&mut db, "a", None, "run z", Some("shared"), None).unwrap();

        let rows = run(&db, "shared").unwrap().rows;
        let order: Vec<(&str, usize)> = rows
            .iter()
            .map(|r| (r.command.as_str(), r.index))
            .collect();
        assert_eq!(order, vec![("a", 0), ("a", 1), ("b", 0)]);
    }

    #[test]
    fn ordering_ignores_case_of_command_names() {
        let mut db = CommandStore::new();
        add::run(&mut db, "Zed", None, "zed .", Some("shared"), None).unwrap();
        add::run(&mut db, "awk", None, "awk '{print}'", Some("shared"), None).unwrap();

        let rows = run(&db, "shared").unwrap().rows;
        assert_eq!(rows[0].command, "awk");
        assert_eq!(rows[1].command, "Zed");
    }

    #[test]
    fn no_match_yields_no_rows() {
        let db = seeded();
        assert!(run(&db, "rsync").unwrap().rows.is_empty());
    }
}
