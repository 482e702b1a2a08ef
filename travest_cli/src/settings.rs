use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prompt::Prompter;

const SETTINGS_FILENAME: &str = ".travest-settings.json";
const API_KEY_LABEL: &str = "Google Maps API Key";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Keys written by other versions are kept as-is
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$USERPROFILE/.travest-settings.json`, or `$HOME/...` when unset.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let home = std::env::var_os("USERPROFILE")
            .or_else(|| std::env::var_os("HOME"))
            .context("Neither USERPROFILE nor HOME is set")?;

        Ok(Path::new(&home).join(SETTINGS_FILENAME))
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> anyhow::Result<Option<Settings>> {
        if !self.path.is_file() {
            return Ok(None);
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        let settings = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        Ok(Some(settings))
    }

    pub fn write(&self, settings: &Settings) -> anyhow::Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))?;
        restrict_permissions(&file)?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, settings)?;
        writer.flush()?;

        debug!("Saved settings to {}", self.path.display());

        Ok(())
    }

    /// Reads the settings, prompting for and saving the API key when the file
    /// is missing or holds no key. A blank answer is rejected and nothing is
    /// written.
    pub fn load_or_prompt<R, W>(&self, prompter: &mut Prompter<R, W>) -> anyhow::Result<Settings>
    where
        R: BufRead,
        W: Write,
    {
        let mut settings = self.read()?.unwrap_or_default();

        if is_blank(settings.api_key.as_deref()) {
            let api_key = prompter.ask(API_KEY_LABEL)?;
            if is_blank(Some(&api_key)) {
                anyhow::bail!("A Google Maps API key is required");
            }

            settings.api_key = Some(api_key);
            self.write(&settings)?;
        }

        Ok(settings)
    }

    pub fn update<R, W>(&self, prompter: &mut Prompter<R, W>) -> anyhow::Result<Settings>
    where
        R: BufRead,
        W: Write,
    {
        let mut settings = self.read()?.unwrap_or_default();

        prompter.println("\nUpdating saved settings ...\n")?;
        let current = settings.api_key.clone().unwrap_or_default();
        let api_key = prompter.ask_with_default(&format!("New {API_KEY_LABEL}"), &current)?;
        if is_blank(Some(&api_key)) {
            anyhow::bail!("A Google Maps API key is required");
        }
        settings.api_key = Some(api_key);

        self.write(&settings)?;
        prompter.println("\nSettings updated!")?;

        Ok(settings)
    }
}

fn is_blank(api_key: Option<&str>) -> bool {
    api_key.is_none_or(|key| key.trim().is_empty())
}

#[cfg(unix)]
fn restrict_permissions(file: &File) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &File) -> anyhow::Result<()> {
    Ok(())
}
