//! CLI definition and command dispatch for conio.
//!
//! This module defines the command-line interface using `clap` and provides
//! the `run()` function that dispatches commands to `conio-core`.
//!
//! ## Configuration Precedence
//!
//! Configuration is resolved with the following precedence (highest to lowest):
//! 1. CLI flags (`--color`, `--config`, `--verbose`)
//! 2. Environment variables (`CONIO_COLOR`, `CONIO_CONFIG`, `CONIO_VERBOSE`)
//! 3. Config file (`~/.conio/config.yaml` or path from `--config`/`CONIO_CONFIG`)
//! 4. Built-in defaults
//!
//! ## Streams
//!
//! Prompts go to stderr and answers go to stdout. Color support is probed
//! separately for each stream.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use conio_core::{Answer, ColorMode, ConsoleConfig, ConsoleError, ConsoleInput, ConsoleOutput};

// ============================================================================
// CLI Definition
// ============================================================================

/// Version string including git commit hash
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Exit code for a negative answer or closed input.
const EXIT_NO: u8 = 1;

/// Exit code for invalid prompt arguments.
const EXIT_USAGE: u8 = 2;

/// Styled output and interactive prompts for shell scripts
#[derive(Parser, Debug)]
#[command(name = "conio")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, env = "CONIO_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file (default: ~/.conio/config.yaml)
    #[arg(long, global = true, env = "CONIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Color output mode: always, never, or auto (default: from config, else auto)
    #[arg(long, global = true, env = "CONIO_COLOR")]
    pub color: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Default answer for `confirm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum YesNo {
    Yes,
    No,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print text with <style> markup rendered
    #[command(after_help = r#"EXAMPLES:
    conio say "<bold>Build</bold> finished in <green>3.2s</green>"
    conio say -n "no trailing newline"
"#)]
    Say {
        /// Text with markup tags such as <red>...</red>
        text: String,

        /// Do not print the trailing newline
        #[arg(short = 'n', long)]
        no_newline: bool,
    },

    /// Print a success message
    Success {
        /// Message text
        message: String,
    },

    /// Print a warning message
    Warning {
        /// Message text
        message: String,
    },

    /// Print an error message
    Error {
        /// Message text
        message: String,
    },

    /// Ask a question and print the answer
    #[command(after_help = r#"EXAMPLES:
    name=$(conio ask "Project name" --default demo)

    # Exit code 1 when input is closed before an answer
    conio ask "Token" < /dev/null || echo "no answer"
"#)]
    Ask {
        /// Question to show
        question: String,

        /// Answer used when the reply is blank
        #[arg(long)]
        default: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Ask a yes/no question; exit code 0 means yes
    #[command(after_help = r#"EXAMPLES:
    conio confirm "Delete build artifacts?" --default no && rm -rf target
"#)]
    Confirm {
        /// Question to show
        question: String,

        /// Answer used when the reply is blank or input is closed
        #[arg(long, value_enum, default_value = "yes")]
        default: YesNo,
    },

    /// Pick one option from a numbered list and print it
    #[command(after_help = r#"EXAMPLES:
    env=$(conio choose "Deploy to" staging production --default 1)
"#)]
    Choose {
        /// Question to show
        question: String,

        /// Options to pick from
        #[arg(required = true)]
        choices: Vec<String>,

        /// 1-based option used when the reply is blank or input is closed
        #[arg(long)]
        default: Option<usize>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Render rows read from stdin as a table
    #[command(after_help = r#"EXAMPLES:
    printf 'api\tup\nworker\tdown\n' | conio table --header SERVICE --header STATE
    cut -d: -f1,7 /etc/passwd | conio table --header USER --header SHELL --delimiter :
"#)]
    Table {
        /// Column header (repeat for each column)
        #[arg(long = "header", required = true)]
        headers: Vec<String>,

        /// Cell delimiter for stdin rows
        #[arg(long, default_value = "\t")]
        delimiter: char,
    },
}

#[derive(Serialize)]
struct AskReport {
    outcome: &'static str,
    answer: Option<String>,
}

#[derive(Serialize)]
struct ChoiceReport {
    choice: String,
}

// ============================================================================
// Entry point
// ============================================================================

/// Main entry point for the CLI.
///
/// # Returns
///
/// Returns `ExitCode::SUCCESS` on success, the command's own exit code for
/// negative answers, or `ExitCode::FAILURE` on error.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries answers
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = format!("conio_core={},conio_cli={}", log_level, log_level);

    tracing_subscriber::fmt()
        .with_env_filter(&filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let color = match resolve_color_mode(&cli) {
        Ok(mode) => mode,
        Err(e) => {
            let mut stderr = ConsoleOutput::stderr();
            let _ = stderr.error(&format!("{:#}", e));
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(%color, "color mode");

    let result = match cli.command {
        Command::Say { text, no_newline } => handle_say(color, &text, no_newline),
        Command::Success { message } => handle_message(color, |out| out.success(&message)),
        Command::Warning { message } => handle_message(color, |out| out.warning(&message)),
        Command::Error { message } => handle_message(color, |out| out.error(&message)),
        Command::Ask {
            question,
            default,
            json,
        } => handle_ask(color, &question, default.as_deref(), json),
        Command::Confirm { question, default } => {
            handle_confirm(color, &question, default == YesNo::Yes)
        }
        Command::Choose {
            question,
            choices,
            default,
            json,
        } => handle_choose(color, &question, &choices, default, json),
        Command::Table { headers, delimiter } => handle_table(color, &headers, delimiter),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            let mut stderr = ConsoleOutput::terminal(io::stderr(), color);
            let _ = stderr.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Resolve the color mode: flag or env var first, then the config file.
fn resolve_color_mode(cli: &Cli) -> Result<ColorMode> {
    if let Some(value) = &cli.color {
        return value
            .parse::<ColorMode>()
            .map_err(anyhow::Error::msg)
            .context("Invalid --color value");
    }

    let config = match &cli.config {
        Some(path) => ConsoleConfig::from_path(path)
            .with_context(|| format!("Check your config at {}", path.display()))?,
        None => ConsoleConfig::load_default()
            .context("Check your global config at ~/.conio/config.yaml")?,
    };

    Ok(config.color)
}

/// Prompt engine reading stdin and prompting on stderr.
fn prompter(color: ColorMode) -> ConsoleInput<io::StdinLock<'static>, io::Stderr> {
    ConsoleInput::new(io::stdin().lock(), ConsoleOutput::terminal(io::stderr(), color))
}

// ============================================================================
// Command handlers
// ============================================================================

fn handle_say(color: ColorMode, text: &str, no_newline: bool) -> Result<ExitCode> {
    let mut out = ConsoleOutput::terminal(io::stdout(), color);
    if no_newline {
        out.write(text)?;
    } else {
        out.write_ln(text)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_message<F>(color: ColorMode, print: F) -> Result<ExitCode>
where
    F: FnOnce(&mut ConsoleOutput<io::Stdout>) -> conio_core::Result<()>,
{
    let mut out = ConsoleOutput::terminal(io::stdout(), color);
    print(&mut out)?;
    Ok(ExitCode::SUCCESS)
}

fn handle_ask(
    color: ColorMode,
    question: &str,
    default: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let answer = prompter(color).ask(question, default)?;

    let outcome = match &answer {
        Answer::Given(_) => "given",
        Answer::Defaulted(_) => "defaulted",
        Answer::EndOfInput => "end_of_input",
    };
    let closed = answer.is_end_of_input();

    if json {
        let report = AskReport {
            outcome,
            answer: answer.into_value(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else if !closed {
        println!("{}", answer.into_value().unwrap_or_default());
    }

    if closed {
        tracing::debug!("input closed before an answer");
        Ok(ExitCode::from(EXIT_NO))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn handle_confirm(color: ColorMode, question: &str, default: bool) -> Result<ExitCode> {
    if prompter(color).confirm(question, default)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_NO))
    }
}

fn handle_choose(
    color: ColorMode,
    question: &str,
    choices: &[String],
    default: Option<usize>,
    json: bool,
) -> Result<ExitCode> {
    let mut input = prompter(color);
    let choice = match input.choice(question, choices, default) {
        Ok(choice) => choice,
        Err(e @ (ConsoleError::InvalidDefaultChoice { .. } | ConsoleError::NoChoices)) => {
            input.output().error(&e.to_string())?;
            return Ok(ExitCode::from(EXIT_USAGE));
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string(&ChoiceReport { choice })?);
    } else {
        println!("{}", choice);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_table(color: ColorMode, headers: &[String], delimiter: char) -> Result<ExitCode> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read table rows from stdin")?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        rows.push(line.split(delimiter).map(str::to_string).collect());
    }
    tracing::debug!(rows = rows.len(), columns = headers.len(), "rendering table");

    let mut out = ConsoleOutput::terminal(io::stdout(), color);
    out.table(headers, &rows)?;
    Ok(ExitCode::SUCCESS)
}
