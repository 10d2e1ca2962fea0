//! # Dispatch
//!
//! Parses arguments, sets up logging, builds the context from `HOME` and
//! routes each command to a handler. Handlers call the API and print; errors
//! travel back to `main` as `anyhow::Error`.

use super::render::{print_messages, render_bookmark_table};
use super::setup::{
    classify_parse_error, find_command, help_text, usage_line, Cli, Commands, ParseFailure,
};
use super::styles::ERROR;
use anyhow::Result;
use bmapp::api::BmApi;
use bmapp::init::initialize_from_env;
use bmapp::store::fs::FileStore;
use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use std::ffi::OsString;
use std::process::ExitCode;

pub fn run() -> Result<ExitCode> {
    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => return Ok(report_parse_failure(classify_parse_error(&e, &args))),
    };

    init_logging(cli.verbose);

    if cli.help {
        print!("{}", help_text());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        eprint!("{}", help_text());
        return Ok(ExitCode::FAILURE);
    };
    log::debug!("dispatching {command:?}");

    match command {
        Commands::Help { command } => return Ok(handle_help(command.as_deref())),
        Commands::Init => handle_init(&mut api()?)?,
        Commands::Add { name, path } => handle_add(&mut api()?, &name, &path)?,
        Commands::List => handle_list(&api()?)?,
        Commands::Delete { name } => handle_delete(&mut api()?, &name)?,
        Commands::Rename { old_name, new_name } => {
            handle_rename(&mut api()?, &old_name, &new_name)?
        }
        Commands::Edit { name, new_path } => handle_edit(&mut api()?, &name, &new_path)?,
        Commands::Go { name } => handle_go(&api()?, &name)?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Production API over `$HOME/.bm`. Fails when `HOME` is not set.
fn api() -> Result<BmApi<FileStore>> {
    Ok(initialize_from_env()?.api)
}

fn init_logging(verbose: bool) {
    let env = Env::default().default_filter_or("warn");
    // A logger may already be installed (tests); keep it.
    let _ = logger_builder(env, verbose).try_init();
}

/// Filters come from `env` (`RUST_LOG` in production). `--verbose` raises the
/// default level to debug; module directives from `env` still apply.
fn logger_builder(env: Env<'_>, verbose: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp(None);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
}

fn report_parse_failure(failure: ParseFailure) -> ExitCode {
    match failure {
        ParseFailure::Version(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        ParseFailure::Usage(line) => {
            eprintln!("{line}");
            ExitCode::FAILURE
        }
        ParseFailure::InvalidCommand => {
            print_invalid_command();
            ExitCode::FAILURE
        }
    }
}

fn print_invalid_command() {
    eprintln!("{}", ERROR.apply_to("Invalid command!"));
    eprint!("{}", help_text());
}

fn handle_help(command: Option<&str>) -> ExitCode {
    match command {
        None => {
            print!("{}", help_text());
            ExitCode::SUCCESS
        }
        Some(name) => match find_command(name) {
            Some(cmd) => {
                println!("{}", usage_line(cmd));
                println!("{}", cmd.about);
                ExitCode::SUCCESS
            }
            None => {
                print_invalid_command();
                ExitCode::FAILURE
            }
        },
    }
}

fn handle_init(api: &mut BmApi<FileStore>) -> Result<()> {
    let result = api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut BmApi<FileStore>, name: &str, path: &str) -> Result<()> {
    let result = api.add(name, path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &BmApi<FileStore>) -> Result<()> {
    let result = api.list()?;
    print!("{}", render_bookmark_table(&result.listed_bookmarks));
    Ok(())
}

fn handle_delete(api: &mut BmApi<FileStore>, name: &str) -> Result<()> {
    let result = api.delete(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(api: &mut BmApi<FileStore>, old_name: &str, new_name: &str) -> Result<()> {
    let result = api.rename(old_name, new_name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut BmApi<FileStore>, name: &str, new_path: &str) -> Result<()> {
    let result = api.edit(name, new_path)?;
    print_messages(&result.messages);
    Ok(())
}

/// Prints the path and nothing else, so `cd "$(bm go x)"` works.
fn handle_go(api: &BmApi<FileStore>, name: &str) -> Result<()> {
    let result = api.go(name)?;
    if let Some(path) = result.resolved_path {
        println!("{path}");
    }
    Ok(())
}
