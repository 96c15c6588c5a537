//! # edi834
//!
//! Command line interface for building X12 834 enrollment files from
//! declarative segment documents.
//!
//! Exit codes: `0` success, `1` usage or I/O failure, `2` the document has
//! validation issues.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use edi_x12::{BuildReport, DocumentSpec, SegmentIssue};
use edi_x12_codes::{Code, catalog, find_code_list};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXIT_ISSUES: u8 = 2;

#[derive(Parser)]
#[command(name = "edi834")]
#[command(about = "Build, validate and render X12 834 enrollment files")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a document and write its X12 rendering
    Render {
        /// Document file (YAML, or JSON with a .json extension)
        document: PathBuf,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render the segments without ISA/GS/ST and SE/GE/IEA
        #[arg(long)]
        no_envelope: bool,
    },

    /// Build a document and report every issue
    Validate {
        /// Document file (YAML, or JSON with a .json extension)
        document: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// List code lists, their members, or resolve input against one
    Codes {
        /// Code list name (e.g. "Individual Relationship Code"); lists all
        /// code lists when omitted
        list: Option<String>,

        #[command(subcommand)]
        action: Option<CodesAction>,
    },
}

#[derive(Subcommand)]
enum CodesAction {
    /// Resolve a code, name, description or synonym
    Resolve {
        input: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    document: String,
    valid: bool,
    segments: usize,
    issues: &'a [SegmentIssue],
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            document,
            output,
            no_envelope,
        } => render(&document, output.as_deref(), no_envelope),
        Commands::Validate { document, format } => validate(&document, format),
        Commands::Codes { list, action } => codes(list.as_deref(), action),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn load(path: &Path) -> Result<DocumentSpec> {
    DocumentSpec::load(path).with_context(|| format!("failed to load {}", path.display()))
}

fn print_issues(report: &BuildReport) {
    for issue in &report.issues {
        eprintln!("  {issue}");
    }
}

fn render(path: &Path, output: Option<&Path>, no_envelope: bool) -> Result<ExitCode> {
    let mut document = load(path)?;
    if no_envelope {
        document.envelope = false;
    }
    tracing::info!(
        document = %path.display(),
        segments = document.segments.len(),
        envelope = document.envelope,
        "rendering document"
    );

    let report = document.build();
    if !report.is_ok() {
        eprintln!("{} has {} issue(s):", path.display(), report.issues.len());
        print_issues(&report);
        return Ok(ExitCode::from(EXIT_ISSUES));
    }

    let rendered = report.render()?;
    match output {
        Some(out) => {
            fs::write(out, &rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;
            tracing::info!(output = %out.display(), "wrote X12 output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn validate(path: &Path, format: ReportFormat) -> Result<ExitCode> {
    let document = load(path)?;
    let report = document.build();
    tracing::debug!(issues = report.issues.len(), "validation finished");

    match format {
        ReportFormat::Text => {
            println!("Document: {}", path.display());
            println!("Segments: {}", document.segments.len());
            println!("Issues: {}", report.issues.len());
            for issue in &report.issues {
                println!("  {issue}");
            }
            if report.is_ok() {
                println!("Validation passed.");
            }
        }
        ReportFormat::Json => {
            let json = JsonReport {
                document: path.display().to_string(),
                valid: report.is_ok(),
                segments: document.segments.len(),
                issues: &report.issues,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_ISSUES)
    })
}

fn print_code(code: &Code) {
    println!("{:<4} {}", code.code, code.description);
}

fn codes(list: Option<&str>, action: Option<CodesAction>) -> Result<ExitCode> {
    let Some(name) = list else {
        for list in catalog() {
            println!("{}", list.enumeration);
        }
        return Ok(ExitCode::SUCCESS);
    };

    let list = find_code_list(name)?;
    match action {
        None => {
            for code in list.members() {
                print_code(&code);
            }
        }
        Some(CodesAction::Resolve { input }) => match list.resolve(&input) {
            Ok(code) => print_code(&code),
            Err(err) => {
                eprintln!("{err}");
                return Ok(ExitCode::from(EXIT_ISSUES));
            }
        },
    }
    Ok(ExitCode::SUCCESS)
}
