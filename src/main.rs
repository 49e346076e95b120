mod app;
mod cli;
mod config;
mod form;
mod matching;
mod notify;
mod resume;
mod state;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

fn run_gui() -> Result<()> {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([900.0, 720.0])
        .with_min_inner_size([640.0, 480.0])
        .with_title("AI Job Matcher");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true, // Save/restore window size and position
        ..Default::default()
    };

    eframe::run_native(
        "AI Job Matcher",
        native_options,
        Box::new(|cc| Ok(Box::new(app::JobMatcherApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so CLI output on stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "jobmatch=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            if let Err(e) = cli::run(command, &cli.output).await {
                cli::print_error(&e.to_string());
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            tracing::info!("Starting AI Job Matcher");
            run_gui()
        }
    }
}
