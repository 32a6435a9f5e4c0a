//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is honoured) and can be
//! overridden on the command line.
//!
//! - `GIFT_DATA_DIR`: directory holding `questions.json` and `exams.json`
//! - `GIFT_SOURCE_DIR`: directory of `.gift` files to import (default `./data`)
//! - `GIFT_EXPORT_DIR`: where exports are written (default `{data_dir}/exports`)
//! - `GIFT_AUTO_IMPORT`: `true`/`1` to import the source directory before every command

use std::path::PathBuf;

const APP_DIR: &str = "gift-bank";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub source_dir: PathBuf,
    pub export_dir: PathBuf,
    pub auto_import: bool,
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env(overrides: Overrides) -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok(), overrides)
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F, overrides: Overrides) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = overrides
            .data_dir
            .or_else(|| var("GIFT_DATA_DIR").map(PathBuf::from))
            .unwrap_or_else(default_data_dir);

        let source_dir = overrides
            .source_dir
            .or_else(|| var("GIFT_SOURCE_DIR").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("data"));

        let export_dir = var("GIFT_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("exports"));

        let auto_import = var("GIFT_AUTO_IMPORT")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            data_dir,
            source_dir,
            export_dir,
            auto_import,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("data-store"))
}
