// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! cursorkit CLI.
//!
//! Reads a serialized translation unit, classifies every node through the
//! cursor layer, and reports the results. Successful output goes to stdout;
//! errors are reported on stdout as JSON, and the exit code matches the
//! error's code.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use cursorkit::ast::TranslationUnit;
use cursorkit::boundary::{exported_functions, BoundaryFn};
use cursorkit::error::{CursorError, OutputErrorCode};
use cursorkit::inspect::inspect_unit;
use cursorkit::output::{
    emit_response, emit_response_compact, ClassifyResponse, CursorRecord, ErrorResponse,
    KindRecord, SCHEMA_VERSION,
};
use cursorkit::CursorKind;

// ============================================================================
// CLI Structure
// ============================================================================

/// Cursor layer over a parsed C-family syntax tree.
#[derive(Parser)]
#[command(name = "cursorkit")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

/// Global arguments shared by every subcommand.
#[derive(Args)]
struct GlobalArgs {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Classify every node of a serialized translation unit.
    Classify {
        /// Path to the translation unit JSON.
        tree: PathBuf,
        /// Byte offset of the region of interest.
        #[arg(long)]
        at: Option<u32>,
        /// Output format.
        #[arg(long, value_enum, default_value = "lines")]
        format: Format,
    },
    /// List every cursor kind with its stable value.
    Kinds {
        /// Output format.
        #[arg(long, value_enum, default_value = "lines")]
        format: Format,
    },
    /// List the boundary function symbols.
    Exports,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Output format for listing commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per entry (default).
    #[default]
    Lines,
    /// Full JSON response.
    Json,
}

/// Response for `cursorkit kinds --format json`.
#[derive(Serialize)]
struct KindsResponse {
    status: String,
    schema_version: String,
    kinds: Vec<KindRecord>,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli.global);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let error_code = OutputErrorCode::from(&err);
            let response = ErrorResponse::from_error(&err);

            let _ = emit_response(&response, &mut io::stdout());
            let _ = io::stdout().flush();

            ExitCode::from(error_code.code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(global: &GlobalArgs) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(global.log_level.to_tracing_level().to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr);

    if global.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn execute(cli: Cli) -> Result<(), CursorError> {
    match cli.command {
        Command::Classify { tree, at, format } => execute_classify(&tree, at, format),
        Command::Kinds { format } => execute_kinds(format),
        Command::Exports => execute_exports(),
    }
}

// ============================================================================
// Command Executors
// ============================================================================

/// Execute classify command.
fn execute_classify(tree: &Path, at: Option<u32>, format: Format) -> Result<(), CursorError> {
    let tu = load_unit(tree)?;
    let records = inspect_unit(&tu, at)?;

    let mut stdout = io::stdout();
    match format {
        Format::Json => {
            let response = ClassifyResponse::new(tu.name.clone(), records);
            emit_response(&response, &mut stdout).map_err(write_error)?;
        }
        Format::Lines => {
            for record in &records {
                writeln!(stdout, "{}", format_record(record)).map_err(write_error)?;
            }
        }
    }
    Ok(())
}

/// Execute kinds command.
fn execute_kinds(format: Format) -> Result<(), CursorError> {
    let kinds: Vec<KindRecord> = CursorKind::ALL
        .iter()
        .map(|&kind| KindRecord::from_kind(kind))
        .collect();

    let mut stdout = io::stdout();
    match format {
        Format::Json => {
            let response = KindsResponse {
                status: "ok".to_string(),
                schema_version: SCHEMA_VERSION.to_string(),
                kinds,
            };
            emit_response(&response, &mut stdout).map_err(write_error)?;
        }
        Format::Lines => {
            for kind in &kinds {
                emit_response_compact(kind, &mut stdout).map_err(write_error)?;
            }
        }
    }
    Ok(())
}

/// Execute exports command.
fn execute_exports() -> Result<(), CursorError> {
    let mut stdout = io::stdout();
    for export in exported_functions() {
        let signature = match export.function {
            BoundaryFn::String(_) => "cursor -> string",
            BoundaryFn::Opcode(_) => "cursor -> opcode",
            BoundaryFn::Part(_) => "cursor -> cursor",
        };
        writeln!(stdout, "{}\t{}", export.symbol, signature).map_err(write_error)?;
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn load_unit(path: &Path) -> Result<TranslationUnit, CursorError> {
    let json = fs::read_to_string(path)
        .map_err(|_| CursorError::file_not_found(path.display().to_string()))?;
    let tu = TranslationUnit::from_json(&json)?;
    info!(path = %path.display(), decls = tu.decls().len(), bodies = tu.bodies().len(), "loaded translation unit");
    Ok(tu)
}

fn write_error(err: io::Error) -> CursorError {
    CursorError::internal(format!("failed to write output: {}", err))
}

/// `body:begin-end Class -> Kind [extras]`
fn format_record(record: &CursorRecord) -> String {
    let offset = |loc: cursorkit::SourceLocation| {
        loc.offset()
            .map(|o| o.to_string())
            .unwrap_or_else(|| "?".to_string())
    };
    let mut line = format!(
        "{}:{}-{} {} -> {}",
        record.body,
        offset(record.range.begin),
        offset(record.range.end),
        record.class,
        record.kind
    );
    if let Some(op) = &record.operator {
        line.push_str(&format!(" op={:?}({})", op.spelling, op.opcode));
    }
    if let Some(literal) = &record.literal {
        line.push_str(&format!(" literal={:?}", literal));
    }
    if let Some(index) = record.selector_index {
        line.push_str(&format!(" selector={}", index));
    }
    if let Some(parts) = &record.loop_parts {
        line.push_str(&format!(
            " init={} cond={} inc={} body={}",
            parts.init, parts.cond, parts.inc, parts.body
        ));
    }
    line
}
