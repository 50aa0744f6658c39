//! awsutil - interactive SQS/S3 operations CLI
//!
//! A menu-driven tool for inspecting and feeding SQS queues and mirroring
//! local files into S3 buckets. All parameters are collected through the
//! interactive prompts; there are no operational flags.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod menu;
mod prompt;
mod ui;

use awsutil_core::SettingsStore;
use prompt::TermPrompt;
use ui::Ui;

/// awsutil - interactive SQS/S3 operations CLI
#[derive(Parser, Debug)]
#[command(name = "awsutil")]
#[command(author, version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let Cli {} = Cli::parse();

    let store = SettingsStore::new()?;
    let prompt = TermPrompt::new();
    let ui = Ui::new();

    ui.banner("Welcome to awsutil!\n");
    menu::run_root(&prompt, &ui, &store).await
}
