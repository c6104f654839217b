//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use portfolio_core::types::SiteConfig;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置文件路径环境变量
const CONFIG_ENV: &str = "PORTFOLIO_CONFIG";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    /// 页面文案与配色
    pub site: SiteConfig,
    /// 自定义作品与文章 JSON，缺省使用内置内容
    pub content_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Site,
            language: "en-US".to_string(),
            site: SiteConfig::default(),
            content_path: None,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务
///
/// 路径优先取 `$PORTFOLIO_CONFIG`，否则为 `<config_dir>/portfolio-tui/config.json`。
/// 文件不存在时使用默认配置。
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    pub fn new() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("portfolio-tui").join("config.json")));
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn read(path: &Path) -> Result<AppConfig> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: AppConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        // 相对路径按配置文件所在目录解析
        if let (Some(content), Some(base)) = (config.content_path.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = base.join(&*content);
            }
        }
        Ok(config)
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        match &self.path {
            Some(path) if path.exists() => {
                let config = Self::read(path)?;
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            _ => {
                log::info!("No config file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }
}
