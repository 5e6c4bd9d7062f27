//! Configuration for the command-line front end

use anyhow::Context;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use mushaf_index::Edition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Edition JSON file; the bundled Hafs edition when unset
    pub edition_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            edition_path: env::var_os("MUSHAF_EDITION").map(PathBuf::from),
            output: env::var("MUSHAF_OUTPUT")
                .map(|v| OutputFormat::from_name(&v))
                .unwrap_or_default(),
        }
    }

    pub fn load_edition(&self) -> anyhow::Result<Edition> {
        let Some(path) = &self.edition_path else {
            tracing::debug!("Using bundled Hafs edition");
            return Ok(Edition::hafs());
        };

        tracing::info!("Loading edition from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("Failed to open edition file {}", path.display()))?;
        Edition::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to load edition from {}", path.display()))
    }
}
