use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

const APP_DIR: &str = "menuboard";

/// 配置文件结构 (config.toml)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub welcome: WelcomeConfig,
    pub menu: MenuConfig,
    pub log: LogConfig,
}

/// 欢迎页文案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WelcomeConfig {
    pub title: String,
    pub tagline: String,
    pub button: String,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            title: "Chef Christoffel's Culinary Creations".to_string(),
            tagline: "Personalized culinary experiences brought to your table.".to_string(),
            button: "Get Started".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub currency_symbol: String,
    /// 为 true 时拒绝无法解析的价格，而不是保存 NaN
    pub strict_prices: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R".to_string(),
            strict_prices: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// 默认配置文件路径 (~/.config/menuboard/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// 默认日志文件路径 (~/.local/share/menuboard/menuboard.log)
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join("menuboard.log"))
}

/// 加载配置
///
/// 显式指定的文件必须存在；默认位置不存在时使用内置默认值。
pub fn load_config(explicit: Option<&Path>) -> Result<Config, AppError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// 将配置序列化为 TOML 文本
pub fn render_config(config: &Config) -> Result<String, AppError> {
    Ok(toml::to_string_pretty(config)?)
}

/// 确保文件所在目录存在
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
