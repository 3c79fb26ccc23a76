//! 日志初始化
//!
//! 终端由 UI 独占，日志只写入文件。

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::config::{self, LogConfig};

/// 覆盖配置中日志级别的环境变量
pub const LOG_ENV: &str = "MENUBOARD_LOG";

/// 初始化文件日志，返回日志文件路径；无法打开文件时不启用日志
pub fn init(log: &LogConfig) -> Option<PathBuf> {
    let path = log.file.clone().or_else(config::default_log_path)?;
    config::ensure_parent_dir(&path).ok()?;
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&log.level));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(path)
}
