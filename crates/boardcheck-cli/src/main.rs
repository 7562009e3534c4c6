// crates/boardcheck-cli/src/main.rs
// ============================================================================
// Module: Boardcheck CLI Entry Point
// Description: Command dispatcher for the API verification harness.
// Purpose: Run the basic and enhanced suites against a target service and
//          report an auditable summary with a threshold-driven exit code.
// Dependencies: clap, boardcheck-core, boardcheck-client, boardcheck-suites,
//               thiserror, tokio.
// ============================================================================

//! ## Overview
//! The Boardcheck CLI runs black-box verification suites against a
//! project-management HTTP API. Target selection comes from flags first and
//! the environment second; the process exit code reflects whether every
//! selected suite met the pass threshold, so the binary slots directly into
//! CI gates.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub(crate) mod env;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use boardcheck_client::ApiClient;
use boardcheck_client::DEFAULT_TIMEOUT;
use boardcheck_core::RunReport;
use boardcheck_core::SuiteRunner;
use boardcheck_core::TestResult;
use boardcheck_suites::SuiteContext;
use boardcheck_suites::basic;
use boardcheck_suites::enhanced;
use clap::ArgAction;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use thiserror::Error;

use crate::env::HarnessConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Base URL used when neither the flag nor the environment provides one.
const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Width of the summary separator line.
const SUMMARY_RULE_WIDTH: usize = 50;

// ============================================================================
// SECTION: Command Line Interface
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "boardcheck", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run verification suites against a target service.
    Run(RunCommand),
}

/// Arguments for the `run` command.
#[derive(clap::Args, Debug)]
struct RunCommand {
    /// Which suite to run.
    #[arg(long, value_enum, default_value_t = SuiteArg::All)]
    suite: SuiteArg,
    /// Base URL of the target API (overrides `BOARDCHECK_BASE_URL`).
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// Per-request timeout in seconds (overrides `BOARDCHECK_TIMEOUT_SEC`).
    #[arg(long, value_name = "SECONDS")]
    timeout_sec: Option<u64>,
}

/// Suite selection for the `run` command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SuiteArg {
    /// Core lifecycle coverage.
    Basic,
    /// Collaborative feature coverage.
    Enhanced,
    /// Both suites, basic first.
    All,
}

impl SuiteArg {
    /// Returns the suites to run, in execution order.
    fn selected(self) -> Vec<SuiteKind> {
        match self {
            Self::Basic => vec![SuiteKind::Basic],
            Self::Enhanced => vec![SuiteKind::Enhanced],
            Self::All => vec![SuiteKind::Basic, SuiteKind::Enhanced],
        }
    }
}

/// One runnable suite variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuiteKind {
    /// Core lifecycle coverage.
    Basic,
    /// Collaborative feature coverage.
    Enhanced,
}

impl SuiteKind {
    /// Returns the display name used in progress and summary output.
    const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Enhanced => "enhanced",
        }
    }

    /// Builds the suite's runner.
    fn runner(self) -> SuiteRunner<SuiteContext> {
        match self {
            Self::Basic => basic::suite(),
            Self::Enhanced => enhanced::suite(),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("boardcheck {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Run(command) => command_run(command).await,
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = <Cli as clap::CommandFactory>::command();
    let rendered = command.render_long_help();
    write_stdout_line(&rendered.to_string())
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Run Command
// ============================================================================

/// Executes the `run` command.
async fn command_run(command: RunCommand) -> CliResult<ExitCode> {
    let config = HarnessConfig::load().map_err(CliError::new)?;
    let base_url = command
        .base_url
        .or(config.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout = command
        .timeout_sec
        .map(Duration::from_secs)
        .or(config.timeout)
        .unwrap_or(DEFAULT_TIMEOUT);

    let mut all_met = true;
    for kind in command.suite.selected() {
        let api = ApiClient::new(&base_url, timeout)
            .map_err(|err| CliError::new(err.to_string()))?;
        let report = run_suite(kind, api).await?;
        if !report.meets_threshold() {
            all_met = false;
        }
    }

    if all_met {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Runs one suite, streaming per-case progress and printing the summary.
async fn run_suite(kind: SuiteKind, api: ApiClient) -> CliResult<RunReport> {
    write_stdout_line(&format!("Running {} suite against {}", kind.name(), api.base_url()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;

    let mut ctx = SuiteContext::new(api);
    let mut progress_error: Option<std::io::Error> = None;
    let report = kind
        .runner()
        .run(&mut ctx, &mut |result| {
            if progress_error.is_none() {
                if let Err(err) = write_progress_line(result) {
                    progress_error = Some(err);
                }
            }
        })
        .await;
    if let Some(err) = progress_error {
        return Err(CliError::new(output_error("stdout", &err)));
    }

    print_summary(kind, &report)?;
    Ok(report)
}

/// Writes one progress line for a finished case.
fn write_progress_line(result: &TestResult) -> std::io::Result<()> {
    if result.passed {
        write_stdout_line(&format!("PASS: {}", result.name))
    } else {
        write_stdout_line(&format!("FAIL: {}", result.name))?;
        write_stdout_line(&format!("  {}", result.message))
    }
}

/// Renders the post-run summary for one suite.
fn print_summary(kind: SuiteKind, report: &RunReport) -> CliResult<()> {
    for line in summary_lines(kind.name(), report) {
        write_stdout_line(&line).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(())
}

/// Builds the summary block as a list of lines.
fn summary_lines(suite_name: &str, report: &RunReport) -> Vec<String> {
    let mut lines = vec![
        "=".repeat(SUMMARY_RULE_WIDTH),
        format!("Suite summary: {suite_name}"),
        format!("Passed: {}", report.passed()),
        format!("Failed: {}", report.failed()),
        format!("Total:  {}", report.total()),
    ];
    if !report.failures().is_empty() {
        lines.push("Failed cases:".to_string());
        for failure in report.failures() {
            lines.push(format!("  - {failure}"));
        }
    }
    lines.push(format!("Success rate: {:.1}%", report.success_rate()));
    lines.push(format!("Verdict: {}", report.verdict().label()));
    lines
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message for a named stream.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error to stderr and returns the failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
