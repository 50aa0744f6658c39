//! Queue sub-menu
//!
//! Binds each selection to one queue client operation. Remote failures are
//! reported and the menu re-displays; only Back leaves the loop.

use anyhow::Result;
use awsutil_core::{QueueApi, QueueClient, Settings};

use super::resolve_region;
use crate::prompt::Prompt;
use crate::ui::Ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueAction {
    ListQueues,
    MessageCount,
    OpenConsole,
    ViewSettings,
    Purge,
    ScanMessages,
    SendMessage,
    SendBatch,
    Back,
}

impl QueueAction {
    const ALL: [QueueAction; 9] = [
        QueueAction::ListQueues,
        QueueAction::MessageCount,
        QueueAction::OpenConsole,
        QueueAction::ViewSettings,
        QueueAction::Purge,
        QueueAction::ScanMessages,
        QueueAction::SendMessage,
        QueueAction::SendBatch,
        QueueAction::Back,
    ];

    fn label(self) -> &'static str {
        match self {
            QueueAction::ListQueues => "List queues",
            QueueAction::MessageCount => "Count messages in queue",
            QueueAction::OpenConsole => "Open queue in console",
            QueueAction::ViewSettings => "View queue settings",
            QueueAction::Purge => "Clear queue",
            QueueAction::ScanMessages => "Scan messages",
            QueueAction::SendMessage => "Post message",
            QueueAction::SendBatch => "Post messages from file",
            QueueAction::Back => "Back",
        }
    }

    fn labels() -> Vec<String> {
        Self::ALL.iter().map(|a| a.label().to_string()).collect()
    }
}

/// Run the queue sub-menu loop until Back
pub async fn run<A: QueueApi>(
    client: &QueueClient<'_, A>,
    prompt: &dyn Prompt,
    ui: &Ui,
    settings: &Settings,
) -> Result<()> {
    loop {
        let index = prompt.select("What would you like to do with SQS?", &QueueAction::labels())?;
        let action = QueueAction::ALL[index];
        if action == QueueAction::Back {
            return Ok(());
        }

        if let Err(e) = dispatch(client, prompt, ui, settings, action).await {
            ui.error(&e.to_string());
        }
    }
}

async fn dispatch<A: QueueApi>(
    client: &QueueClient<'_, A>,
    prompt: &dyn Prompt,
    ui: &Ui,
    settings: &Settings,
    action: QueueAction,
) -> Result<()> {
    match action {
        QueueAction::ListQueues => {
            let queues = client.list_queues().await?;
            ui.heading("Found queues:");
            for queue in &queues {
                ui.item(&queue.url);
            }
        }
        QueueAction::MessageCount => {
            let queue_url = select_queue(client, prompt, ui, settings).await?;
            let count = client.message_count(&queue_url).await?;
            ui.heading(&format!("Message count: {count}"));
        }
        QueueAction::OpenConsole => {
            let queue_url = select_queue(client, prompt, ui, settings).await?;
            let entered = prompt.input("Enter region (or leave blank for default):")?;
            match resolve_region(entered, settings) {
                Some(region) => {
                    ui.heading("Open this link in your browser:");
                    ui.item(&client.console_url(&queue_url, &region));
                }
                None => ui.warning("No region given and none configured; use Configure first"),
            }
        }
        QueueAction::ViewSettings => {
            let queue_url = select_queue(client, prompt, ui, settings).await?;
            let attrs = client.attributes(&queue_url).await?;
            ui.heading("Queue settings:");
            for (key, value) in &attrs {
                ui.item(&format!("{key}: {value}"));
            }
        }
        QueueAction::Purge => {
            let queue_url = select_queue(client, prompt, ui, settings).await?;
            if prompt.confirm(&format!(
                "Are you sure you want to clear the queue?\n{queue_url}"
            ))? {
                client.purge(&queue_url).await?;
                ui.destructive("Queue cleared successfully!");
            }
        }
        QueueAction::ScanMessages => {
            let queue_url = select_queue(client, prompt, ui, settings).await?;
            let messages = client.receive_sample(&queue_url).await?;
            if messages.is_empty() {
                ui.item("No messages found.");
            } else {
                ui.heading(&format!("Found {} messages:", messages.len()));
                for message in &messages {
                    ui.item(&message.body);
                }
            }
        }
        QueueAction::SendMessage => {
            let queue_url = select_queue(client, prompt, ui, settings).await?;
            let body = prompt.input("Enter message:")?;
            let receipt = client.send(&queue_url, &body).await?;
            ui.success(&format!("Message sent! id={}", receipt.message_id));
        }
        QueueAction::SendBatch => {
            let queue_url = select_queue(client, prompt, ui, settings).await?;
            let path = prompt.input("Enter file path:")?;
            let report = client
                .send_batch_from_lines(&queue_url, std::path::Path::new(&path))
                .await?;
            report_batch(ui, &report);
        }
        QueueAction::Back => unreachable!("handled by the menu loop"),
    }
    Ok(())
}

/// Per-chunk batch reporting: chunks fail independently, so every chunk's
/// outcome is shown and partial success is the caller's to reconcile.
fn report_batch(ui: &Ui, report: &awsutil_core::BatchReport) {
    for chunk in &report.chunks {
        match &chunk.outcome {
            Ok(outcome) if outcome.failed.is_empty() => {
                ui.success(&format!(
                    "Chunk {}: {} message(s) sent",
                    chunk.index,
                    outcome.successful.len()
                ));
            }
            Ok(outcome) => {
                ui.warning(&format!(
                    "Chunk {}: {} sent, {} rejected",
                    chunk.index,
                    outcome.successful.len(),
                    outcome.failed.len()
                ));
                for failure in &outcome.failed {
                    ui.item(&format!("  entry {}: {}", failure.id, failure.reason));
                }
            }
            Err(e) => ui.error(&format!("Chunk {} failed: {e}", chunk.index)),
        }
    }

    if report.fully_successful() {
        ui.success(&format!("Batch messages sent! ({} total)", report.total_entries));
    } else {
        ui.warning("Batch finished with failures; unsent lines must be resent manually");
    }
}

/// Offer the configured default, the listed queues, and manual entry
async fn select_queue<A: QueueApi>(
    client: &QueueClient<'_, A>,
    prompt: &dyn Prompt,
    ui: &Ui,
    settings: &Settings,
) -> Result<String> {
    const MANUAL: &str = "Enter manually";

    let mut options = Vec::new();
    if !settings.default_queue.is_empty() {
        options.push(format!("Default ({})", settings.default_queue));
    }

    let queues = match client.list_queues().await {
        Ok(queues) => queues,
        Err(e) => {
            ui.warning(&format!("Could not list queues: {e}"));
            Vec::new()
        }
    };
    options.extend(queues.iter().map(|q| q.url.clone()));
    options.push(MANUAL.to_string());

    let index = prompt.select("Select a queue or enter manually:", &options)?;

    let has_default = !settings.default_queue.is_empty();
    if has_default && index == 0 {
        return Ok(settings.default_queue.clone());
    }
    if index == options.len() - 1 {
        return Ok(prompt.input("Enter queue URL:")?);
    }
    Ok(queues[index - usize::from(has_default)].url.clone())
}
