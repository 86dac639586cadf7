use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, Clock, DataSource, DirDataSource, HttpDataSource, LoadFailure, ProgressService,
    QuizService, TrainingData,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};
use url::Url;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidDataUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidDataUrl { raw } => write!(f, "invalid --data value: {raw}"),
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
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn data(&self) -> Result<Arc<TrainingData>, LoadFailure> {
        self.services.data()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }
}

/// Where the catalog and quiz documents are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DataLocation {
    Http(Url),
    Dir(PathBuf),
}

impl DataLocation {
    fn parse(raw: &str) -> Result<Self, ArgsError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ArgsError::InvalidDataUrl { raw: raw.to_string() });
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let url = Url::parse(trimmed)
                .map_err(|_| ArgsError::InvalidDataUrl { raw: raw.to_string() })?;
            return Ok(Self::Http(url));
        }
        Ok(Self::Dir(PathBuf::from(trimmed)))
    }

    fn into_source(self) -> Arc<dyn DataSource> {
        match self {
            DataLocation::Http(url) => Arc::new(HttpDataSource::new(url)),
            DataLocation::Dir(root) => Arc::new(DirDataSource::new(root)),
        }
    }
}

struct Args {
    db_url: String,
    data: DataLocation,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--data <url-or-dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://training.sqlite3");
    eprintln!("  --data .   (reads assets/data/catalog.json and assets/data/quizzes.json)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRAINING_DB_URL, TRAINING_DATA, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("TRAINING_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://training.sqlite3".into(), normalize_sqlite_url);
        let mut data = match std::env::var("TRAINING_DATA") {
            Ok(raw) => DataLocation::parse(&raw)?,
            Err(_) => DataLocation::Dir(PathBuf::from(".")),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--data" => {
                    let value = require_value(args, "--data")?;
                    data = DataLocation::parse(&value)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, data })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    prepare_sqlite_file(&parsed.db_url)?;
    tracing::info!(db = %parsed.db_url, data = ?parsed.data, "starting");
    let services =
        AppServices::boot_sqlite(&parsed.db_url, Clock::system(), parsed.data.into_source())
            .await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Product Training")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
