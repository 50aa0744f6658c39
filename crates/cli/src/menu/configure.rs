//! Configure menu
//!
//! Edits the persisted settings record. Settings are only ever mutated here,
//! through an explicit save; every other menu treats them as read-only.

use anyhow::Result;
use awsutil_core::{Settings, SettingsStore};

use crate::prompt::Prompt;
use crate::ui::Ui;

/// Prompt for all settings fields and save the record
pub fn run(prompt: &dyn Prompt, ui: &Ui, store: &SettingsStore) -> Result<()> {
    let current = store.load().unwrap_or_default();

    let settings = Settings {
        region: field(prompt, "Enter default region", &current.region)?,
        profile: field(prompt, "Enter default profile", &current.profile)?,
        default_queue: field(prompt, "Enter default queue URL", &current.default_queue)?,
        default_bucket: field(prompt, "Enter default bucket", &current.default_bucket)?,
    };

    match store.save(&settings) {
        Ok(()) => ui.success("Configuration saved successfully!"),
        Err(e) => ui.error(&format!("Could not save configuration: {e}")),
    }
    Ok(())
}

/// One field edit: entered text replaces the stored value, blank clears it
fn field(prompt: &dyn Prompt, label: &str, current: &str) -> Result<String> {
    let label = if current.is_empty() {
        format!("{label}:")
    } else {
        format!("{label} (current: {current}):")
    };
    Ok(prompt.input(&label)?.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::ScriptedPrompt;
    use tempfile::TempDir;

    #[test]
    fn test_configure_saves_trimmed_fields() {
        let temp = TempDir::new().unwrap();
        let store = SettingsStore::with_path(temp.path().join("config.toml"));
        let prompt = ScriptedPrompt::new(&[" eu-west-1 ", "dev", "", "artifacts"]);

        run(&prompt, &Ui::new(), &store).unwrap();

        let saved = store.load().unwrap();
        assert_eq!(saved.region, "eu-west-1");
        assert_eq!(saved.profile, "dev");
        assert_eq!(saved.default_queue, "");
        assert_eq!(saved.default_bucket, "artifacts");
    }

    #[test]
    fn test_configure_blank_input_clears_fields() {
        let temp = TempDir::new().unwrap();
        let store = SettingsStore::with_path(temp.path().join("config.toml"));
        store
            .save(&Settings {
                region: "us-east-1".into(),
                ..Settings::default()
            })
            .unwrap();

        let prompt = ScriptedPrompt::new(&["", "", "", ""]);
        run(&prompt, &Ui::new(), &store).unwrap();

        assert_eq!(store.load().unwrap(), Settings::default());
    }
}
