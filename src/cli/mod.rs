//! CLI layer: argument parsing, dispatch, prompts, and table output.
//!
//! This is the only module that touches stdout/stderr, the clipboard, or
//! the process environment. Everything below it works on plain data.

use clap::Parser;
use directories::ProjectDirs;
use kvs::api::KvsApi;
use kvs::clipboard::copy_to_clipboard;
use kvs::config::KvsConfig;
use kvs::error::Result;
use kvs::model::{CommandStore, DeleteTarget};
use kvs::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;

mod args;
mod render;
mod styles;

use args::{Cli, Commands, UpdateCommands};

struct AppContext {
    api: KvsApi<FileStore>,
    config: KvsConfig,
    data_dir: PathBuf,
    skip_confirm: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { command }) => handle_list(&ctx, command.as_deref()),
        Some(Commands::Add {
            command,
            name,
            usage,
            note,
            tags,
            interactive,
        }) => handle_add(&mut ctx, command, name, usage, note, tags, interactive),
        Some(Commands::Update { what }) => match what {
            UpdateCommands::Name { command, new_name } => {
                let result = ctx.api.update_name(&command, &new_name)?;
                render::print_messages(&result.messages);
                Ok(())
            }
            UpdateCommands::Tag { command, new_tags } => {
                let result = ctx.api.update_tags(&command, &split_tags(&new_tags))?;
                render::print_messages(&result.messages);
                Ok(())
            }
        },
        Some(Commands::Delete {
            command,
            identifier,
        }) => handle_delete(&mut ctx, &command, &identifier),
        Some(Commands::Edit {
            command,
            index,
            usage,
            note,
        }) => {
            let result = ctx
                .api
                .edit(&command, index, usage.as_deref(), note.as_deref())?;
            render::print_usage_rows(&result.rows);
            render::print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Find { keywords }) => {
            let query = keywords.join(" ");
            let result = ctx.api.find(&query)?;
            render::print_search_results(&result.rows, &query);
            render::print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Copy { command, index }) => handle_copy(&ctx, &command, index),
        Some(Commands::Import { path, overwrite }) => {
            let result = ctx.api.import(&path, overwrite)?;
            render::print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Export { path }) => {
            let result = ctx.api.export(&path)?;
            render::print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

/// Data directory resolution: an explicit KVS_DATA_DIR wins (scripts and
/// tests), otherwise the platform data dir.
fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("KVS_DATA_DIR") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "kvs", "kvs")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".kvs"))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir();
    let config = KvsConfig::load(&data_dir).unwrap_or_default();
    let api = KvsApi::open(FileStore::new(data_dir.clone()))?;

    Ok(AppContext {
        api,
        config,
        data_dir,
        skip_confirm: cli.yes,
    })
}

fn handle_list(ctx: &AppContext, command: Option<&str>) -> Result<()> {
    let result = ctx.api.list(command)?;
    if command.is_some() {
        render::print_usage_rows(&result.rows);
    } else {
        render::print_overview(&result.summaries);
    }
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    command: Option<String>,
    name: Option<String>,
    usage: Option<String>,
    note: Option<String>,
    tags: Option<String>,
    interactive: bool,
) -> Result<()> {
    let (command, name, usage, note, tags) = if interactive || command.is_none() || usage.is_none()
    {
        println!("Interactive add (empty answers leave a field blank).");
        let command = prompt("Main command (e.g. git)")?;
        let name = prompt("Display name (optional)")?;
        let usage = prompt("Usage example (e.g. git pull --rebase)")?;
        let note = prompt("Note (optional)")?;
        let tags = prompt("Tags, comma-separated (optional)")?;
        (
            command,
            non_empty(name),
            usage,
            non_empty(note),
            non_empty(tags),
        )
    } else {
        (command.unwrap(), name, usage.unwrap(), note, tags)
    };

    let tags = tags.map(|t| split_tags(&t));
    let result = ctx.api.add(
        &command,
        name.as_deref(),
        &usage,
        note.as_deref(),
        tags.as_deref(),
    )?;

    render::print_usage_rows(&result.rows);
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, command: &str, identifier: &str) -> Result<()> {
    let target = DeleteTarget::from(identifier);

    if ctx.config.confirm_delete && !ctx.skip_confirm {
        if let Some(usage) = peek_removal(ctx.api.db(), command, &target) {
            print!("Delete usage '{}' of '{}'? [Y] to confirm: ", usage, command);
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if input.trim() != "Y" {
                println!("Operation cancelled.");
                return Ok(());
            }
        }
    }

    let result = ctx.api.delete(command, &target)?;
    render::print_messages(&result.messages);
    Ok(())
}

/// What `delete` would remove, without mutating, shown in the
/// confirmation prompt.
fn peek_removal(db: &CommandStore, command: &str, target: &DeleteTarget) -> Option<String> {
    match target {
        DeleteTarget::Index(i) => db.usage_at(command, *i).map(|ex| ex.usage.clone()),
        DeleteTarget::Keyword(kw) => {
            let kw = kw.to_lowercase();
            db.examples(command)
                .iter()
                .find(|ex| {
                    ex.usage.to_lowercase().contains(&kw) || ex.note.to_lowercase().contains(&kw)
                })
                .map(|ex| ex.usage.clone())
        }
    }
}

fn handle_copy(ctx: &AppContext, command: &str, index: usize) -> Result<()> {
    let result = ctx.api.copy(command, index)?;
    if let Some(text) = &result.payload {
        copy_to_clipboard(text)?;
    }
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for (k, v) in ctx.config.list_all() {
                println!("{} = {}", k, v);
            }
        }
        (Some(key), None) => match ctx.config.get(&key) {
            Some(v) => println!("{} = {}", key, v),
            None => println!("Unknown config key: {}", key),
        },
        (Some(key), Some(value)) => {
            if ctx.config.set(&key, &value) {
                ctx.config.save(&ctx.data_dir)?;
                println!("{} = {}", key, value);
            } else {
                println!("Unknown config key or invalid value: {} = {}", key, value);
            }
        }
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// "dev, git,,basic" -> ["dev", "git", "basic"]
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
