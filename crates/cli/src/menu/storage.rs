//! Storage sub-menu
//!
//! Binds each selection to one bucket client operation.

use std::path::Path;

use anyhow::Result;
use awsutil_core::{BucketClient, Settings, StorageApi};

use super::resolve_region;
use crate::prompt::Prompt;
use crate::ui::Ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StorageAction {
    ListBuckets,
    OpenConsole,
    DeleteObject,
    UploadFile,
    UploadDirectory,
    Back,
}

impl StorageAction {
    const ALL: [StorageAction; 6] = [
        StorageAction::ListBuckets,
        StorageAction::OpenConsole,
        StorageAction::DeleteObject,
        StorageAction::UploadFile,
        StorageAction::UploadDirectory,
        StorageAction::Back,
    ];

    fn label(self) -> &'static str {
        match self {
            StorageAction::ListBuckets => "List buckets",
            StorageAction::OpenConsole => "Open bucket in console",
            StorageAction::DeleteObject => "Delete file",
            StorageAction::UploadFile => "Upload file",
            StorageAction::UploadDirectory => "Upload directory",
            StorageAction::Back => "Back",
        }
    }

    fn labels() -> Vec<String> {
        Self::ALL.iter().map(|a| a.label().to_string()).collect()
    }
}

/// Run the storage sub-menu loop until Back
pub async fn run<S: StorageApi>(
    client: &BucketClient<'_, S>,
    prompt: &dyn Prompt,
    ui: &Ui,
    settings: &Settings,
) -> Result<()> {
    loop {
        let index = prompt.select("What would you like to do with S3?", &StorageAction::labels())?;
        let action = StorageAction::ALL[index];
        if action == StorageAction::Back {
            return Ok(());
        }

        if let Err(e) = dispatch(client, prompt, ui, settings, action).await {
            ui.error(&e.to_string());
        }
    }
}

async fn dispatch<S: StorageApi>(
    client: &BucketClient<'_, S>,
    prompt: &dyn Prompt,
    ui: &Ui,
    settings: &Settings,
    action: StorageAction,
) -> Result<()> {
    match action {
        StorageAction::ListBuckets => {
            let buckets = client.list_buckets().await?;
            ui.heading("Found buckets:");
            for bucket in &buckets {
                ui.item(bucket);
            }
        }
        StorageAction::OpenConsole => {
            let bucket = select_bucket(prompt, settings)?;
            let entered = prompt.input("Enter region (or leave blank for default):")?;
            match resolve_region(entered, settings) {
                Some(region) => {
                    ui.heading("Open this link in your browser:");
                    ui.item(&client.console_url(&bucket, &region));
                }
                None => ui.warning("No region given and none configured; use Configure first"),
            }
        }
        StorageAction::DeleteObject => {
            let bucket = select_bucket(prompt, settings)?;
            let key = prompt.input("Key (path/file) to delete:")?;
            client.delete_object(&bucket, &key).await?;
            ui.destructive("File deleted!");
        }
        StorageAction::UploadFile => {
            let bucket = select_bucket(prompt, settings)?;
            let path = prompt.input("Local file path:")?;
            let entered = prompt.input("Destination key in bucket (or leave blank to use file name):")?;
            let key = if entered.is_empty() { None } else { Some(entered.as_str()) };
            let stored = client.upload_file(Path::new(&path), &bucket, key).await?;
            ui.success(&format!("File uploaded as '{stored}'!"));
        }
        StorageAction::UploadDirectory => {
            let bucket = select_bucket(prompt, settings)?;
            let dir = prompt.input("Local directory path:")?;
            let prefix = prompt.input("Destination prefix in bucket (optional):")?;
            let uploaded = client
                .upload_directory(Path::new(&dir), &bucket, &prefix)
                .await?;
            ui.success(&format!("Directory uploaded ({} file(s))!", uploaded.len()));
        }
        StorageAction::Back => unreachable!("handled by the menu loop"),
    }
    Ok(())
}

/// Prompt for a bucket, falling back to the configured default on blank input
fn select_bucket(prompt: &dyn Prompt, settings: &Settings) -> Result<String> {
    let label = if settings.default_bucket.is_empty() {
        "Bucket:".to_string()
    } else {
        format!("Bucket (blank for {}):", settings.default_bucket)
    };

    let entered = prompt.input(&label)?;
    if entered.is_empty() {
        return Ok(settings.default_bucket.clone());
    }
    Ok(entered)
}
