use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use report_core::LookupKey;
use services::{
    DatasetSource, FileDatasetSource, HttpDatasetSource, ReportController, ReportService,
    ViewState,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DATA_URL: &str = "http://localhost:5173/ClassReport/reportData.json";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDataUrl { raw: String },
    InvalidDataFile { raw: String },
    Logging(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDataUrl { raw } => write!(f, "invalid --data-url value: {raw}"),
            ArgsError::InvalidDataFile { raw } => write!(f, "invalid --data-file value: {raw}"),
            ArgsError::Logging(msg) => write!(f, "failed to init logging: {msg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    report_service: Arc<ReportService>,
}

impl UiApp for DesktopApp {
    fn report_service(&self) -> Arc<ReportService> {
        Arc::clone(&self.report_service)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--data-url <url> | --data-file <path>] [--log-level <filter>] [--log-json]");
    eprintln!("  cargo run -p app -- check [--data-url <url> | --data-file <path>] [--name <student>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data-url {DEFAULT_DATA_URL}");
    eprintln!("  --log-level info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CLASSREPORT_DATA_URL, CLASSREPORT_DATA_FILE, CLASSREPORT_LOG, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DataLocation {
    Url(String),
    File(PathBuf),
}

struct Args {
    data: DataLocation,
    log_level: String,
    log_json: bool,
    name: Option<String>,
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let env_url = std::env::var("CLASSREPORT_DATA_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let env_file = std::env::var("CLASSREPORT_DATA_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty());
        // A configured file wins over a URL.
        let mut data = match (env_file, env_url) {
            (Some(file), _) => DataLocation::File(PathBuf::from(file)),
            (None, Some(url)) => DataLocation::Url(url),
            (None, None) => DataLocation::Url(DEFAULT_DATA_URL.to_string()),
        };
        let mut log_level = std::env::var("CLASSREPORT_LOG").unwrap_or_else(|_| "info".into());
        let mut log_json = false;
        let mut name = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-url" => {
                    let value = require_value(args, "--data-url")?;
                    if !value.starts_with("http://") && !value.starts_with("https://") {
                        return Err(ArgsError::InvalidDataUrl { raw: value });
                    }
                    data = DataLocation::Url(value);
                }
                "--data-file" => {
                    let value = require_value(args, "--data-file")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataFile { raw: value });
                    }
                    data = DataLocation::File(PathBuf::from(value));
                }
                "--log-level" => {
                    log_level = require_value(args, "--log-level")?;
                }
                "--log-json" => {
                    log_json = true;
                }
                "--name" if cmd == Command::Check => {
                    // Kept raw: lookups are exact-match.
                    name = Some(require_value(args, "--name")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            data,
            log_level,
            log_json,
            name,
        })
    }
}

fn init_logging(level: &str, json: bool) -> Result<(), ArgsError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_target(true).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| ArgsError::Logging(e.to_string()))
}

fn build_source(data: &DataLocation) -> Arc<dyn DatasetSource> {
    match data {
        DataLocation::Url(url) => Arc::new(HttpDatasetSource::new(url.clone())),
        DataLocation::File(path) => Arc::new(FileDatasetSource::new(path.clone())),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging(&parsed.log_level, parsed.log_json)?;

    let report_service = Arc::new(ReportService::new(build_source(&parsed.data)));
    info!(source = %report_service.source_description(), ?cmd, "starting");

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { report_service });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("생글방글 학생 리포트")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(check(&report_service, parsed.name))
        }
    }
}

/// Load the dataset once and report what it contains. With `name`, run the
/// same lookup the UI would and print the outcome.
async fn check(
    service: &ReportService,
    name: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = service.load_dataset().await?;
    if dataset.is_empty() {
        return Err(Box::new(std::io::Error::other("report data contains no students")));
    }
    println!("{} students", dataset.len());
    for student in dataset.names() {
        println!("  {student}");
    }

    let Some(name) = name else {
        return Ok(());
    };

    let mut controller = ReportController::new();
    let ticket = controller.submit_name(LookupKey::new(name.clone()));
    controller.apply(&ticket, Ok(Arc::clone(&dataset)));

    match controller.view() {
        ViewState::Displaying(report) => {
            println!(
                "{name}: {} ({}, {})",
                report.info.title, report.info.class_label, report.info.period
            );
            Ok(())
        }
        ViewState::NotFound => {
            println!("{name}: not found");
            Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("student not found: {name}"),
            )))
        }
        ViewState::Loading | ViewState::Searching => Err(Box::new(std::io::Error::other(
            "report data did not load",
        ))),
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
