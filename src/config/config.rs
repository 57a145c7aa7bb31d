use crate::cdr3::{Anchors, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, MAX_HISTOGRAM_LENGTH};
use crate::error::Cdr3Error;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_preseq")]
    pub preseq: String,
    #[serde(default = "default_postseq")]
    pub postseq: String,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_preseq() -> String {
    Anchors::DEFAULT_PRESEQ.to_string()
}

fn default_postseq() -> String {
    Anchors::DEFAULT_POSTSEQ.to_string()
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preseq: default_preseq(),
            postseq: default_postseq(),
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "cdr3", "cdr3-extract")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Reads `config.toml` from the platform config directory. A missing or
    /// unreadable file yields the defaults.
    pub fn load() -> Self {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                if let Ok(content) = fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
                eprintln!(
                    "Ignoring unreadable config file {}",
                    config_path.display()
                );
            }
        }
        Config::default()
    }

    /// Reads an explicitly requested config file; unlike `load`, failures are errors.
    pub fn from_path(path: &Path) -> Result<Self, Cdr3Error> {
        let content = fs::read_to_string(path).map_err(|e| Cdr3Error::ConfigParse {
            file: path.display().to_string(),
            source: Box::new(e),
        })?;
        toml::from_str(&content).map_err(|e| Cdr3Error::ConfigParse {
            file: path.display().to_string(),
            source: Box::new(e),
        })
    }

    pub fn with_overrides(
        mut self,
        preseq: Option<String>,
        postseq: Option<String>,
        min_length: Option<usize>,
        max_length: Option<usize>,
    ) -> Self {
        if let Some(preseq) = preseq {
            self.preseq = preseq;
        }
        if let Some(postseq) = postseq {
            self.postseq = postseq;
        }
        if let Some(min_length) = min_length {
            self.min_length = min_length;
        }
        if let Some(max_length) = max_length {
            self.max_length = max_length;
        }
        self
    }

    pub fn validate(&self) -> Result<(), Cdr3Error> {
        if self.preseq.is_empty() || self.postseq.is_empty() {
            return Err(Cdr3Error::InvalidConfig(
                "anchor motifs must not be empty".to_string(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(Cdr3Error::InvalidConfig(format!(
                "min_length ({}) is greater than max_length ({})",
                self.min_length, self.max_length
            )));
        }
        if self.max_length > MAX_HISTOGRAM_LENGTH {
            return Err(Cdr3Error::InvalidConfig(format!(
                "max_length ({}) is greater than {}",
                self.max_length, MAX_HISTOGRAM_LENGTH
            )));
        }
        Ok(())
    }

    pub fn anchors(&self) -> Anchors {
        Anchors::new(self.preseq.clone(), self.postseq.clone())
    }

    pub fn length_bounds(&self) -> RangeInclusive<usize> {
        self.min_length..=self.max_length
    }
}
