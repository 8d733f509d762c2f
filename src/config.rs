use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use people_core::csv::{CsvContactReader, CsvTemplate};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ImportConfig {
    /// chrono format strings for Birthday/Anniversary columns. `None`
    /// uses the built-in list.
    #[serde(default)]
    pub date_formats: Option<Vec<String>>,
}

impl ImportConfig {
    pub fn csv_reader(&self) -> CsvContactReader {
        match &self.date_formats {
            Some(formats) => CsvContactReader::with_date_formats(formats.clone()),
            None => CsvContactReader::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_csv_template")]
    pub csv_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_template: default_csv_template(),
        }
    }
}

fn default_csv_template() -> String {
    "full".to_string()
}

impl ExportConfig {
    pub fn template(&self) -> Result<CsvTemplate> {
        self.csv_template.parse()
    }
}

impl Config {
    /// Config pointing at `db_path` with every other setting defaulted.
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db: DbConfig {
                path: db_path.into(),
            },
            import: ImportConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if let Some(formats) = &config.import.date_formats {
        if formats.is_empty() {
            anyhow::bail!("import.date_formats must not be empty when set");
        }
        if formats.iter().any(|f| f.trim().is_empty()) {
            anyhow::bail!("import.date_formats must not contain blank formats");
        }
    }

    config
        .export
        .template()
        .with_context(|| "Invalid export.csv_template")?;

    Ok(config)
}
