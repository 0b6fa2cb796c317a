use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kvs")]
#[command(about = "A personal command dictionary with styled terminal output", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Skip confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all commands, or the usages of one command
    #[command(alias = "ls")]
    List {
        /// Command to list usages for
        command: Option<String>,
    },

    /// Add a usage under a command (creates the command if needed)
    #[command(alias = "a")]
    Add {
        /// Main command name (e.g. "git")
        command: Option<String>,

        /// Display name (e.g. "版本管理")
        name: Option<String>,

        /// Usage example (e.g. "git commit -m")
        usage: Option<String>,

        /// Optional note
        note: Option<String>,

        /// Comma-separated tags (e.g. "dev,git,basic")
        #[arg(long)]
        tags: Option<String>,

        /// Prompt for each field instead of taking arguments
        #[arg(short, long)]
        interactive: bool,
    },

    /// Update command properties
    Update {
        #[command(subcommand)]
        what: UpdateCommands,
    },

    /// Delete a usage by index or first keyword match
    #[command(alias = "rm")]
    Delete {
        /// Main command name
        command: String,

        /// Usage index (e.g. 0) or keyword (e.g. "checkout")
        identifier: String,
    },

    /// Edit a usage in place
    Edit {
        /// Main command name
        command: String,

        /// Index of the usage to edit
        index: usize,

        /// New usage string
        #[arg(long)]
        usage: Option<String>,

        /// New note string
        #[arg(long)]
        note: Option<String>,
    },

    /// Search commands, tags and usages by substring
    #[command(alias = "f")]
    Find {
        /// Keywords, joined with spaces into one query
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,
    },

    /// Copy a usage to the system clipboard
    Copy {
        /// Main command name
        command: String,

        /// Index of the usage to copy
        #[arg(default_value_t = 0)]
        index: usize,
    },

    /// Import commands from a JSON snapshot
    Import {
        /// Path of the snapshot file
        path: PathBuf,

        /// Replace existing commands instead of merging usages
        #[arg(long)]
        overwrite: bool,
    },

    /// Export all commands to a JSON snapshot
    Export {
        /// Path of the file to write
        path: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UpdateCommands {
    /// Replace the display name of a command
    Name {
        command: String,
        new_name: String,
    },

    /// Replace the whole tag set of a command
    #[command(alias = "tags")]
    Tag {
        command: String,
        /// New comma-separated tags (e.g. "dev,git")
        new_tags: String,
    },
}
