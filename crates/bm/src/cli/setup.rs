use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "bm",
    bin_name = "bm",
    version,
    about = "Bookmark directories by name",
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Initialize bookmark system
    Init,

    /// Add a bookmark
    Add {
        name: String,
        #[arg(allow_hyphen_values = true)]
        path: String,
    },

    /// List all bookmarks
    #[command(alias = "ls")]
    List,

    /// Delete a bookmark
    #[command(alias = "rm")]
    Delete { name: String },

    /// Rename a bookmark
    #[command(alias = "mv")]
    Rename { old_name: String, new_name: String },

    /// Edit a bookmark's path
    Edit {
        name: String,
        #[arg(allow_hyphen_values = true)]
        new_path: String,
    },

    /// Print path of a bookmark
    Go { name: String },

    /// Print this message
    Help { command: Option<String> },
}

pub struct CommandHelp {
    pub name: &'static str,
    pub synopsis: &'static str,
    pub usage: &'static str,
    pub about: &'static str,
}

pub const COMMANDS: &[CommandHelp] = &[
    CommandHelp {
        name: "init",
        synopsis: "init",
        usage: "bm init",
        about: "Initialize bookmark system",
    },
    CommandHelp {
        name: "add",
        synopsis: "add <name> <path>",
        usage: "bm add <name> <path>",
        about: "Add a bookmark",
    },
    CommandHelp {
        name: "delete",
        synopsis: "delete <name>",
        usage: "bm delete <name>",
        about: "Delete a bookmark",
    },
    CommandHelp {
        name: "list",
        synopsis: "list",
        usage: "bm list",
        about: "List all bookmarks",
    },
    CommandHelp {
        name: "rename",
        synopsis: "rename <old_name> <new_name>",
        usage: "bm rename <current_name> <new_name>",
        about: "Rename a bookmark",
    },
    CommandHelp {
        name: "edit",
        synopsis: "edit <name> <new_path>",
        usage: "bm edit <name> <new_path>",
        about: "Edit a bookmark's path",
    },
    CommandHelp {
        name: "go",
        synopsis: "go <name>",
        usage: "bm go <name>",
        about: "Print path of a bookmark",
    },
    CommandHelp {
        name: "help",
        synopsis: "help",
        usage: "bm help [<command>]",
        about: "Print this message",
    },
];

const SYNOPSIS_WIDTH: usize = 38;

pub fn help_text() -> String {
    let mut out = String::from("Usage: bm <command> [<args>]\nCommands:\n");
    for cmd in COMMANDS {
        out.push_str(&format!(
            "  {:<width$}{}\n",
            cmd.synopsis,
            cmd.about,
            width = SYNOPSIS_WIDTH
        ));
    }
    out.push_str("Options:\n");
    out.push_str("  -v, --verbose    Debug logging on stderr\n");
    out.push_str("  -h, --help       Print this message\n");
    out.push_str("  -V, --version    Print version\n");
    out
}

/// Help entry for a command name or alias.
pub fn find_command(name: &str) -> Option<&'static CommandHelp> {
    let cli = Cli::command();
    let canonical = cli.find_subcommand(name)?.get_name().to_string();
    COMMANDS.iter().find(|cmd| cmd.name == canonical)
}

pub fn usage_line(cmd: &CommandHelp) -> String {
    format!("'{}' usage: {}", cmd.name, cmd.usage)
}

/// What to tell the user when clap rejects the arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseFailure {
    /// `--version`: not a failure at all.
    Version(String),
    /// A known command with the wrong arguments.
    Usage(String),
    /// Unknown command or stray flag.
    InvalidCommand,
}

/// Classifies a parse error by the first non-flag word of `args` (which
/// includes the binary name).
pub fn classify_parse_error(err: &clap::Error, args: &[OsString]) -> ParseFailure {
    if err.kind() == ErrorKind::DisplayVersion {
        return ParseFailure::Version(err.to_string());
    }

    args.iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy())
        .find(|arg| !arg.starts_with('-'))
        .and_then(|word| find_command(&word))
        .map(|cmd| ParseFailure::Usage(usage_line(cmd)))
        .unwrap_or(ParseFailure::InvalidCommand)
}
