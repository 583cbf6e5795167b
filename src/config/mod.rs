// ==========================================
// 战略防务仪表盘 - 配置层
// ==========================================
// 职责: 运行配置（文件 + 环境变量）与情景目录
// ==========================================

pub mod config_manager;
pub mod error;
pub mod scenario_catalog;

// 重导出核心配置类型
pub use config_manager::{config_keys, default_config_path, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use scenario_catalog::{
    ScenarioCatalog, AIR_FORCE_KEY, MILITARY_INTELLIGENCE_KEY, OVERVIEW_KEY,
    SECURITY_SCENARIOS_KEY, STRATEGIC_ALLIANCES_KEY,
};
