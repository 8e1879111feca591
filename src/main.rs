//! Activity Signup CLI
//!
//! Command-line front end for the activities server:
//! - List activities with their participants
//! - Sign a participant up
//! - Unregister a participant
//! - Generate a config file

use activity_signup::config::generate_default_config;
use activity_signup::{
    ActivityController, Config, HttpActivityApi, LoadReport, LoggingConfig, MemorySurface,
    ViewState,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "signup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse activities and manage signups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Activities server URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List activities and participants
    List,

    /// Sign a participant up for an activity
    Signup {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// Remove a participant from an activity
    Unregister {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Config { output } => return write_config(output),
        command => command,
    };

    let (mut config, report) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, LoadReport::from_path(path)),
        None => Config::load_default_with_report(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    // Logging settings come from the config, so its load is reported afterwards
    init_logging(&config.logging);
    report.log();
    tracing::debug!("Using activities server at {}", config.api.base_url);

    let api = HttpActivityApi::new(&config.api)?;
    let controller = ActivityController::new(api, MemorySurface::new(), config.notices.timings());

    match command {
        Commands::List => controller.load_catalog().await,
        Commands::Signup { activity, email } => controller.submit_signup(&email, &activity).await,
        Commands::Unregister { activity, email } => {
            controller.remove_participant(&activity, &email).await
        }
        Commands::Config { .. } => {}
    }

    let surface = controller.surface();
    let mut failed = false;

    if let Some(notice) = surface.last_notice() {
        if notice.is_error() {
            eprintln!("{}", notice.text);
            failed = true;
        } else {
            println!("{}", notice.text);
        }
    }

    match surface.view_state() {
        ViewState::Loading => {}
        ViewState::Failed => {
            eprintln!("{}", ViewState::Failed.text_content());
            failed = true;
        }
        ready => print!("{}", ready.text_content()),
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn write_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("writing config to {:?}", path))?;
            println!("Wrote config to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Filter used when `RUST_LOG` is unset: the library and this binary
fn default_directives(level: &str) -> String {
    format!("activity_signup={level},signup={level}")
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
