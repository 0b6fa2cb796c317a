use super::styles;
use colored::Colorize;
use console::Style;
use kvs::api::{CmdMessage, CommandSummary, MessageLevel, UsageRow};
use unicode_width::UnicodeWidthStr;

const GUTTER: &str = "   ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// The `kvs list` overview: one row per command.
pub(super) fn print_overview(summaries: &[CommandSummary]) {
    if summaries.is_empty() {
        println!("No commands yet. Add one with 'kvs add'.");
        return;
    }

    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.command.clone(),
                dash_if_empty(&s.display_name),
                s.usage_count.to_string(),
                dash_if_empty(&s.tags.join(", ")),
            ]
        })
        .collect();

    let column_styles: [&Style; 4] = [
        &styles::COMMAND,
        &styles::NAME,
        &styles::INDEX,
        &styles::TAGS,
    ];
    print_table(&["COMMAND", "NAME", "USAGES", "TAGS"], &column_styles, &rows);
}

/// Usage rows of one command, preceded by a `command (display name)` title.
pub(super) fn print_usage_rows(rows: &[UsageRow]) {
    let Some(first) = rows.first() else {
        return;
    };

    println!();
    println!(
        "{} {}",
        styles::COMMAND.apply_to(&first.command),
        styles::NOTE.apply_to(format!("({})", dash_if_empty(&first.display_name)))
    );

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.index.to_string(), r.usage.clone(), r.note.clone()])
        .collect();

    let column_styles: [&Style; 3] = [&styles::INDEX, &styles::USAGE, &styles::NOTE];
    print_table(&["#", "USAGE", "NOTE"], &column_styles, &cells);
}

/// Search results, with every occurrence of `query` highlighted in the
/// usage and note columns (global replace, exact case; presentation
/// only, the match itself was case-insensitive).
pub(super) fn print_search_results(rows: &[UsageRow], query: &str) {
    if rows.is_empty() {
        println!("No matches for '{}'.", query);
        return;
    }

    let headers = ["COMMAND", "NAME", "#", "USAGE", "NOTE"];
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.command.clone(),
                dash_if_empty(&r.display_name),
                r.index.to_string(),
                r.usage.clone(),
                r.note.clone(),
            ]
        })
        .collect();
    let widths = column_widths(&headers, &cells);

    println!();
    print_header(&headers, &widths);
    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                // Pad from the plain text; highlighting adds invisible
                // escape codes that would skew the width.
                let padding = " ".repeat(widths[i].saturating_sub(cell.width()));
                let display = match i {
                    0 => styles::COMMAND.apply_to(cell.as_str()).to_string(),
                    1 => styles::NAME.apply_to(cell.as_str()).to_string(),
                    2 => styles::INDEX.apply_to(cell.as_str()).to_string(),
                    _ => highlight(cell, query),
                };
                format!("{}{}", display, padding)
            })
            .collect();
        println!("{}", line.join(GUTTER));
    }
    println!();
}

fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() || !text.contains(query) {
        return text.to_string();
    }
    text.replace(query, &styles::MATCH.apply_to(query).to_string())
}

fn dash_if_empty(text: &str) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}

fn print_header(headers: &[&str], widths: &[usize]) {
    let line: Vec<String> = headers
        .iter()
        .zip(widths)
        .map(|(h, w)| styles::HEADER.apply_to(pad(h, *w)).to_string())
        .collect();
    println!("{}", line.join(GUTTER));
}

fn print_table(headers: &[&str], column_styles: &[&Style], rows: &[Vec<String>]) {
    let widths = column_widths(headers, rows);

    println!();
    print_header(headers, &widths);
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| column_styles[i].apply_to(pad(cell, widths[i])).to_string())
            .collect();
        println!("{}", line.join(GUTTER));
    }
    println!();
}

/// Pad `text` with spaces up to `width` terminal columns. Display names
/// are often CJK, so this counts rendered width, not chars.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}
