//! Menu state machine
//!
//! Maps user selections to bound operations through closed enums — one
//! variant per operation — so no unmapped selection can reach a dispatcher.
//! Each resource sub-menu constructs one fresh session from the current
//! settings and loops until Back; operation failures are reported and the
//! menu re-displays, never crashing the session.

use anyhow::Result;
use awsutil_aws::{build_session, S3Api, SqsApi};
use awsutil_core::{BucketClient, QueueClient, Settings, SettingsStore};

use crate::prompt::Prompt;
use crate::ui::Ui;

mod configure;
mod queue;
mod storage;

/// Top-level resource choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootChoice {
    Queues,
    Buckets,
    Configure,
    Exit,
}

impl RootChoice {
    pub const ALL: [RootChoice; 4] = [
        RootChoice::Queues,
        RootChoice::Buckets,
        RootChoice::Configure,
        RootChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RootChoice::Queues => "SQS",
            RootChoice::Buckets => "S3",
            RootChoice::Configure => "Configure",
            RootChoice::Exit => "Exit",
        }
    }

    fn labels() -> Vec<String> {
        Self::ALL.iter().map(|c| c.label().to_string()).collect()
    }
}

/// Run the root menu loop until the user exits
pub async fn run_root(prompt: &dyn Prompt, ui: &Ui, store: &SettingsStore) -> Result<()> {
    loop {
        let index = prompt.select(
            "Which AWS resource would you like to manage?",
            &RootChoice::labels(),
        )?;

        let choice = RootChoice::ALL[index];
        tracing::debug!(?choice, "root menu selection");

        match choice {
            RootChoice::Queues => {
                let settings = load_settings(store, ui);
                let session = build_session(&settings).await;
                let api = SqsApi::new(&session);
                let client = QueueClient::new(&api);
                queue::run(&client, prompt, ui, &settings).await?;
            }
            RootChoice::Buckets => {
                let settings = load_settings(store, ui);
                let session = build_session(&settings).await;
                let api = S3Api::new(&session);
                let client = BucketClient::new(&api);
                storage::run(&client, prompt, ui, &settings).await?;
            }
            RootChoice::Configure => configure::run(prompt, ui, store)?,
            RootChoice::Exit => {
                ui.destructive("Exiting awsutil.");
                return Ok(());
            }
        }
    }
}

/// Load settings, falling back to defaults on a persistence fault
fn load_settings(store: &SettingsStore, ui: &Ui) -> Settings {
    match store.load() {
        Ok(settings) => settings,
        Err(e) => {
            ui.warning(&format!("Could not read configuration ({e}); using defaults"));
            Settings::default()
        }
    }
}

/// Resolve a region: prompt input wins, then the configured default
fn resolve_region(entered: String, settings: &Settings) -> Option<String> {
    if !entered.is_empty() {
        return Some(entered);
    }
    if !settings.region.is_empty() {
        return Some(settings.region.clone());
    }
    None
}
