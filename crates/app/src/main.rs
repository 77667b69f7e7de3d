use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::{Animal, QuestionBank, ShareSettings};
use services::catalog::{load_catalog, to_json};
use services::config::{ENV_QUESTIONS, ENV_SEED, ENV_SHARE_BASE, ENV_SITE_URL};
use services::{ConfigOverrides, QuizConfig};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
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
    bank: Arc<QuestionBank<Animal>>,
    share: ShareSettings,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBank<Animal>> {
        Arc::clone(&self.bank)
    }

    fn share_settings(&self) -> ShareSettings {
        self.share.clone()
    }

    fn shuffle_seed(&self) -> Option<u64> {
        self.seed
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui               [options]");
    eprintln!("  cargo run -p app -- export-questions [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --site-url <url>     Link appended to the share text");
    eprintln!("  --share-base <url>   Compose endpoint for the share link");
    eprintln!("  --seed <u64>         Fixed seed for answer shuffling");
    eprintln!("  --questions <path>   JSON question catalog (default: built-in)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_SITE_URL}, {ENV_SHARE_BASE}, {ENV_SEED}, {ENV_QUESTIONS}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    ExportQuestions,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "export-questions" => Some(Self::ExportQuestions),
            _ => None,
        }
    }
}

fn parse_overrides(
    args: &mut impl Iterator<Item = String>,
) -> Result<Option<ConfigOverrides>, ArgsError> {
    let mut overrides = ConfigOverrides::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--site-url" => overrides.site_url = Some(require_value(args, "--site-url")?),
            "--share-base" => overrides.share_base = Some(require_value(args, "--share-base")?),
            "--seed" => overrides.seed = Some(require_value(args, "--seed")?),
            "--questions" => {
                overrides.questions = Some(PathBuf::from(require_value(args, "--questions")?));
            }
            "--help" | "-h" => return Ok(None),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Some(overrides))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Launching the UI is the default when no subcommand is given.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            ArgsError::UnknownCommand(first.to_string())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with('-') {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let Some(overrides) = parse_overrides(&mut iter).inspect_err(|_| print_usage())? else {
        print_usage();
        return Ok(());
    };

    let config = QuizConfig::from_env(overrides)?;
    let bank = match config.questions.as_deref() {
        Some(path) => load_catalog::<Animal>(path)?,
        None => QuestionBank::reference(),
    };

    match cmd {
        Command::Ui => {
            tracing::info!(
                questions = bank.len(),
                site_url = %config.share.site_url(),
                seeded = config.seed.is_some(),
                "starting animal quiz"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                bank: Arc::new(bank),
                share: config.share,
                seed: config.seed,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Animal Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::ExportQuestions => {
            println!("{}", to_json(&bank)?);
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
