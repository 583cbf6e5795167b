// ==========================================
// 战略防务仪表盘 - API 层错误类型
// ==========================================
// 职责: 外层接口（控件校验、配置、渲染、导出）的统一错误
// 说明: 合成器与组装器是全函数，不产生错误
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

use crate::config::error::ConfigError;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum DashboardError {
    // ==========================================
    // 控件输入错误
    // ==========================================
    #[error("无效选择: mode={mode}, item={item}")]
    InvalidSelection { mode: String, item: String },

    #[error("未知分析模式: {0}")]
    UnknownMode(String),

    #[error("未知模拟情景: {0}")]
    UnknownScenario(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error("配置文件不存在: {0}")]
    ConfigNotFound(PathBuf),

    // ==========================================
    // 输出错误
    // ==========================================
    #[error("输出写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV 导出失败: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::FileNotFound(path) => DashboardError::ConfigNotFound(path),
            ConfigError::Io { path, source } => DashboardError::InvalidConfig(format!(
                "{} 读取失败: {}",
                path.display(),
                source
            )),
            ConfigError::Parse(e) => DashboardError::InvalidConfig(format!("格式错误: {}", e)),
            ConfigError::InvalidValue { key, value } => {
                DashboardError::InvalidConfig(format!("{}={}", key, value))
            }
            ConfigError::YearRange(e) => DashboardError::InvalidConfig(e.to_string()),
        }
    }
}

/// Result 类型别名
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::InvalidYearRange;

    #[test]
    fn test_config_error_conversion() {
        let err: DashboardError = ConfigError::YearRange(InvalidYearRange {
            start: 2020,
            end: 2010,
        })
        .into();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
        assert!(err.to_string().contains("2020"));

        let err: DashboardError = ConfigError::FileNotFound(PathBuf::from("/nope.json")).into();
        assert!(matches!(err, DashboardError::ConfigNotFound(_)));
    }
}
