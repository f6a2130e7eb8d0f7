use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_commands")]
    pub commands: Vec<String>,
    #[serde(default = "default_imports")]
    pub imports: Vec<String>,
    #[serde(default = "default_write_dirs")]
    pub write_dirs: Vec<String>,
    #[serde(default)]
    pub python: Option<PathBuf>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(path) = Self::project_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        if let Ok(path) = Self::default_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        let base = BaseDirs::new().context("unable to resolve home directory")?;
        Ok(base.config_dir().join("check-gpu-env").join("config.json"))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.commands.iter().any(|name| name.trim().is_empty()) {
            bail!("commands entries must not be empty");
        }

        if self.imports.iter().any(|name| name.trim().is_empty()) {
            bail!("imports entries must not be empty");
        }

        for dir in &self.write_dirs {
            if dir.trim().is_empty() {
                bail!("write_dirs entries must not be empty");
            }
            if Path::new(dir).is_absolute() {
                bail!("write_dirs entries must be relative to the project root: {dir}");
            }
        }

        Ok(())
    }

    fn project_path() -> Option<PathBuf> {
        Some(PathBuf::from("check-gpu-env.json"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commands: default_commands(),
            imports: default_imports(),
            write_dirs: default_write_dirs(),
            python: None,
        }
    }
}

fn default_commands() -> Vec<String> {
    vec![
        "ffmpeg".to_string(),
        "nvidia-smi".to_string(),
        "git".to_string(),
    ]
}

fn default_imports() -> Vec<String> {
    vec![
        "numpy".to_string(),
        "sklearn".to_string(),
        "faiss".to_string(),
        "librosa".to_string(),
        "soundfile".to_string(),
        "ffmpeg".to_string(),
        "av".to_string(),
    ]
}

fn default_write_dirs() -> Vec<String> {
    vec![
        "dataset_raw".to_string(),
        "logs".to_string(),
        "models".to_string(),
        "api_data".to_string(),
        "exports".to_string(),
    ]
}
