//! Command-line entry point: serve the upload form or convert a workbook on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use shift_calendar::api::{AppState, ShiftsResponse, create_router};
use shift_calendar::config::{ConfigLoader, EngineConfig};
use shift_calendar::error::{EngineError, EngineResult};
use shift_calendar::extraction::ShiftExtractor;

#[derive(Parser)]
#[command(name = "shift-calendar", version, about = "Turn a roster workbook into calendar events")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP upload service
    Serve {
        /// Address to bind, overriding the configuration
        #[arg(long)]
        bind: Option<String>,
    },
    /// Extract shifts from a workbook on disk
    Extract {
        /// The .xlsx roster
        file: PathBuf,
        /// Name to search for
        #[arg(short, long)]
        name: String,
        /// Reference date for year inference (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Print the shifts as JSON instead of an iCalendar document
        #[arg(long)]
        json: bool,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = ConfigLoader::load_or_default(cli.config.as_ref()).and_then(|config| {
        match cli.command {
            Commands::Serve { bind } => serve(config, bind),
            Commands::Extract {
                file,
                name,
                today,
                json,
                output,
            } => extract(config, &file, &name, today, json, output),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "shift-calendar failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn serve(config: EngineConfig, bind: Option<String>) -> EngineResult<()> {
    let address = bind.unwrap_or_else(|| config.bind_address.clone());
    let state = AppState::new(config)?;

    let runtime = tokio::runtime::Runtime::new().map_err(io_error("tokio runtime"))?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .map_err(io_error(&address))?;
        info!(address = %address, "Listening");
        axum::serve(listener, create_router(state))
            .await
            .map_err(io_error(&address))
    })
}

fn extract(
    config: EngineConfig,
    file: &Path,
    name: &str,
    today: Option<NaiveDate>,
    json: bool,
    output: Option<PathBuf>,
) -> EngineResult<()> {
    let now = Utc::now();
    let tz = config.tz()?;
    let reference = today.unwrap_or_else(|| now.with_timezone(&tz).date_naive());

    let bytes = fs::read(file).map_err(|e| EngineError::WorkbookUnreadable {
        message: format!("{}: {}", file.display(), e),
    })?;

    let extractor = ShiftExtractor::new(config)?;
    let rendered = if json {
        let extraction = extractor.extract(&bytes, name, reference)?;
        serde_json::to_string_pretty(&ShiftsResponse::new(name, &extraction))
            .map_err(|e| EngineError::Io {
                context: "json output".to_string(),
                message: e.to_string(),
            })?
    } else {
        extractor.to_calendar(&bytes, name, reference, now)?
    };

    match output {
        Some(path) => {
            fs::write(&path, rendered).map_err(io_error(&path.display().to_string()))?;
            info!(path = %path.display(), "Wrote output");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn io_error(context: &str) -> impl Fn(std::io::Error) -> EngineError + '_ {
    move |e| EngineError::Io {
        context: context.to_string(),
        message: e.to_string(),
    }
}
