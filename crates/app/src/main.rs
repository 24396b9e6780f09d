use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, ExplanationService, ProfileService, ProgressService};
use ui::context::build_app_context;
use ui::platform::{LinkOpenerRef, SystemLinkOpener};
use ui::{App, UiApp};

const DEFAULT_DB_URL: &str = "sqlite://dsa-tracker.sqlite3";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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
    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn profile(&self) -> Arc<ProfileService> {
        self.services.profile()
    }

    fn explanations(&self) -> Arc<ExplanationService> {
        self.services.explanations()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(SystemLinkOpener)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>] [--log-level <level>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --log-level {DEFAULT_LOG_LEVEL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DSA_DB_URL, DSA_LOG, RUST_LOG");
    eprintln!("  DSA_AI_API_KEY, DSA_AI_BASE_URL, DSA_AI_MODEL");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    log_level: String,
}

impl Args {
    /// Parse everything after the program name. `db_env` and `log_env` are the
    /// values of `DSA_DB_URL` and `DSA_LOG`; flags override them.
    fn parse(
        argv: Vec<String>,
        db_env: Option<String>,
        log_env: Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut iter = argv.into_iter().peekable();
        match iter.peek().map(String::as_str) {
            Some("ui") => {
                iter.next();
            }
            Some(first) if !first.starts_with('-') => {
                return Err(ArgsError::UnknownCommand(first.to_string()));
            }
            _ => {}
        }

        let mut db_url = db_env
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut log_level = log_env
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut iter, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--log-level" => {
                    log_level = require_value(&mut iter, "--log-level")?;
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { db_url, log_level }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim();
    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = std::path::Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
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

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = Args::parse(
        argv,
        std::env::var("DSA_DB_URL").ok(),
        std::env::var("DSA_LOG").ok(),
    )
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    init_tracing(&args.log_level);

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&args.db_url)?;
    let services = AppServices::new_sqlite(&args.db_url, ExplanationService::from_env()).await?;
    tracing::info!(db = %args.db_url, "storage ready");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("DSA Explorer")
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
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults_without_args_or_env() {
        let parsed = Args::parse(Vec::new(), None, None).unwrap();
        assert_eq!(
            parsed,
            Parsed::Run(Args {
                db_url: DEFAULT_DB_URL.to_string(),
                log_level: "info".to_string(),
            })
        );
    }

    #[test]
    fn flags_override_env() {
        let parsed = Args::parse(
            argv(&["ui", "--db", "sqlite::memory:", "--log-level", "debug"]),
            Some("sqlite:///tmp/env.sqlite3".to_string()),
            Some("warn".to_string()),
        )
        .unwrap();
        assert_eq!(
            parsed,
            Parsed::Run(Args {
                db_url: "sqlite::memory:".to_string(),
                log_level: "debug".to_string(),
            })
        );
    }

    #[test]
    fn env_values_apply_when_flags_absent() {
        let parsed = Args::parse(
            Vec::new(),
            Some("sqlite:///tmp/env.sqlite3".to_string()),
            Some("warn".to_string()),
        )
        .unwrap();
        let Parsed::Run(args) = parsed else {
            panic!("expected run");
        };
        assert_eq!(args.db_url, "sqlite:///tmp/env.sqlite3");
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Args::parse(argv(&["seed"]), None, None),
            Err(ArgsError::UnknownCommand(_))
        ));
        assert!(matches!(
            Args::parse(argv(&["--db"]), None, None),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            Args::parse(argv(&["--db", "  "]), None, None),
            Err(ArgsError::InvalidDbUrl { .. })
        ));
        assert!(matches!(
            Args::parse(argv(&["--verbose"]), None, None),
            Err(ArgsError::UnknownArg(_))
        ));
        assert_eq!(Args::parse(argv(&["--help"]), None, None).unwrap(), Parsed::Help);
    }

    #[test]
    fn relative_paths_become_absolute_urls() {
        let url = normalize_sqlite_url("sqlite:data/dsa.sqlite3".to_string());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/dsa.sqlite3"), "{url}");
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".to_string()),
            "sqlite::memory:"
        );
    }
}
