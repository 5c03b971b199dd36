//! Configuration
//!
//! 設定ファイル（JSON）の読み込み

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "./.elearning/data";

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// コレクションファイルを置くディレクトリ（`~` 展開あり）
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// JSONを整形して保存するかどうか
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            pretty: default_pretty(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// 設定ファイルが無ければデフォルト値を使う
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// `~` を展開したデータディレクトリ
    pub fn resolved_data_dir(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir);
        PathBuf::from(expanded.as_ref())
    }
}
