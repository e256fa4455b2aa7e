//! CLI entry point for the gradebook summary tool.
//!
//! Provides subcommands for serving the upload form and for summarizing a
//! single gradebook export from a file or URL.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gradebook_summary::{
    config::{ServerSettings, Settings},
    fetch::read_source,
    output::{OutputFormat, write_summary},
    parser::parse_table,
    summary::summarize,
    web,
};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook_summary")]
#[command(about = "Summarize gradebook CSV exports into per-module averages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the upload form and results page
    Serve {
        /// Address to listen on (overrides GRADEBOOK_BIND)
        #[arg(short, long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Summarize a gradebook CSV from a file or URL
    Summarize {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// File to write the summary to (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();

    let settings = Settings::from_env();
    let _file_guard = init_tracing(&settings.log_file_path);

    match cli.command {
        Commands::Serve { bind } => {
            let server = ServerSettings::from_env(bind.as_deref())?;
            let listener = tokio::net::TcpListener::bind(server.bind_addr)
                .await
                .with_context(|| format!("binding {}", server.bind_addr))?;
            web::serve(listener, &server).await?;
        }
        Commands::Summarize {
            source,
            output,
            format,
        } => {
            let bytes = read_source(&source).await?;
            let table = parse_table(&bytes).with_context(|| format!("reading {source}"))?;
            let summary = summarize(&table);

            match output {
                Some(path) => {
                    let file =
                        File::create(&path).with_context(|| format!("creating {path}"))?;
                    write_summary(&summary, format, BufWriter::new(file))?;
                    info!(path = %path, students = summary.rows.len(), "Summary written");
                }
                None => write_summary(&summary, format, std::io::stdout().lock())?,
            }
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing(log_file_path: &Path) -> WorkerGuard {
    let log_dir = log_file_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("gradebook_summary.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    file_guard
}
