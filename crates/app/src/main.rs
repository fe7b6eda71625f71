use std::fmt;
use std::sync::Arc;

use chrono::{Duration, Utc};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{
    Category, CategoryId, OptionSlot, Question, QuestionId, Quiz, QuizId, StatisticsSnapshot,
};
use services::{ApiConfig, BASE_URL_ENV, ConfigError, HttpQuizApi, InMemoryQuizApi, QuizApi};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const LOG_ENV: &str = "QUIZ_CMS_LOG";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBaseUrl { source: ConfigError },
    InvalidLogLevel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBaseUrl { source } => write!(f, "invalid --base-url value: {source}"),
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log-level value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidBaseUrl { source } => Some(source),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    api: Arc<dyn QuizApi>,
    backend_label: String,
}

impl UiApp for DesktopApp {
    fn api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.api)
    }

    fn backend_label(&self) -> String {
        self.backend_label.clone()
    }
}

#[derive(Debug)]
struct Args {
    api_config: ApiConfig,
    log_level: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--base-url <url>] [--log-level <filter>]");
    eprintln!("  cargo run -p app -- demo [--log-level <filter>]  # in-memory sample data");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url {}", services::DEFAULT_BASE_URL);
    eprintln!("  --log-level {DEFAULT_LOG_LEVEL}");
    eprintln!();
    eprintln!("Environment (a .env file is read if present):");
    eprintln!("  {BASE_URL_ENV}, {LOG_ENV}");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Demo,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "demo" => Some(Self::Demo),
            _ => None,
        }
    }
}

impl Args {
    /// Flags win over the environment.
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_config =
            ApiConfig::from_env().map_err(|source| ArgsError::InvalidBaseUrl { source })?;
        let mut log_level = std::env::var(LOG_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    api_config = ApiConfig::new(&value)
                        .map_err(|source| ArgsError::InvalidBaseUrl { source })?;
                }
                "--log-level" => {
                    log_level = require_value(args, "--log-level")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_config,
            log_level,
        })
    }
}

fn init_tracing(level: &str) -> Result<(), ArgsError> {
    let filter = EnvFilter::try_new(level).map_err(|_| ArgsError::InvalidLogLevel {
        raw: level.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    Ok(())
}

/// Sample content for exploring the UI without a backend.
fn demo_api() -> InMemoryQuizApi {
    let now = Utc::now();
    let geography = QuizId::from(1);

    InMemoryQuizApi::new()
        .with_quizzes(vec![
            Quiz::new(
                geography.clone(),
                "World Capitals",
                "Match each country to its capital city.",
                Some(now - Duration::days(3)),
            ),
            Quiz::new(
                QuizId::from(2),
                "Basic Arithmetic",
                "Warm-up questions on addition and multiplication.",
                Some(now - Duration::days(1)),
            ),
        ])
        .with_questions(
            geography,
            vec![
                Question::new(
                    QuestionId::from(101),
                    "What is the capital of France?",
                    ["Berlin".into(), "Paris".into(), "Rome".into(), "Madrid".into()],
                    OptionSlot::new(2).ok(),
                ),
                Question::new(
                    QuestionId::from(102),
                    "What is the capital of Japan?",
                    ["Tokyo".into(), "Osaka".into(), "Kyoto".into(), "Nagoya".into()],
                    OptionSlot::new(1).ok(),
                ),
            ],
        )
        .with_categories(vec![
            Category::new(CategoryId::new(1), "Geography"),
            Category::new(CategoryId::new(2), "Mathematics"),
        ])
        .with_statistics(StatisticsSnapshot {
            total_quizzes: Some(2),
            total_attempts: Some(37),
            average_score: Some(71.5),
            highest_score: Some(100.0),
            most_popular_quiz: Some("World Capitals".into()),
        })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

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
            ArgsError::UnknownArg(first.to_string())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    init_tracing(&parsed.log_level)?;

    let app = match cmd {
        Command::Ui => {
            let base_url = parsed.api_config.base_url().to_string();
            info!(%base_url, "using HTTP backend");
            DesktopApp {
                api: Arc::new(HttpQuizApi::new(&parsed.api_config)),
                backend_label: base_url,
            }
        }
        Command::Demo => {
            info!("using in-memory demo backend");
            DesktopApp {
                api: Arc::new(demo_api()),
                backend_label: "demo (in-memory)".to_string(),
            }
        }
    };

    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz CMS")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
