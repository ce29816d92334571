use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, LessonCatalog, StudyFlowService};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG   log filter (default: info)");
}

struct EcoApp {
    catalog: Arc<LessonCatalog>,
    study_flow: Arc<StudyFlowService>,
}

impl UiApp for EcoApp {
    fn catalog(&self) -> Arc<LessonCatalog> {
        Arc::clone(&self.catalog)
    }

    fn study_flow(&self) -> Arc<StudyFlowService> {
        Arc::clone(&self.study_flow)
    }
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<(), ArgsError> {
    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(ArgsError::UnknownArg(other.to_string())),
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    parse_args(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Content is built into the binary; a validation failure here is a
    // content bug and stops startup.
    let catalog = Arc::new(LessonCatalog::builtin()?);
    let study_flow = Arc::new(StudyFlowService::new(
        Clock::default_clock(),
        Arc::clone(&catalog),
    ));
    tracing::info!("catalog loaded, launching desktop window");

    let app: Arc<dyn UiApp> = Arc::new(EcoApp {
        catalog,
        study_flow,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("EcoAprende")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
