// ==========================================
// 战略防务仪表盘 - 配置层错误类型
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::types::InvalidYearRange;

/// 配置层错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {0}")]
    FileNotFound(PathBuf),

    #[error("配置文件读取失败: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置格式错误: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置值无效: key={key}, value={value}")]
    InvalidValue { key: String, value: String },

    #[error(transparent)]
    YearRange(#[from] InvalidYearRange),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
