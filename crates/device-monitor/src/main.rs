use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use device_monitor::{Services, Shell};
use infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Override the device file
    #[arg(long)]
    devices_file: Option<String>,

    /// Override the activity log file
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> Result<()> {
    dotenv().ok();

    // Diagnostics go to stderr, the menu owns stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load(&args.config_dir)?;
    if let Some(path) = args.devices_file {
        config.storage.devices_file = path;
    }
    if let Some(path) = args.log_file {
        config.storage.log_file = path;
    }
    info!(config = ?config, "Loaded configuration");

    let services = Services::from_config(&config);
    services.log.log("Application started.");

    println!("Welcome to IoT Device Monitor System");
    let stdin = io::stdin();
    let mut shell = Shell::new(services, stdin.lock(), io::stdout());
    shell.run()
}
