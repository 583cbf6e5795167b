// ==========================================
// 战略防务仪表盘 - 核心库
// ==========================================
// 职责: 合成年度防务指标 → 组装数据集 → 构建视图 → 渲染输出
// 分层: domain → config → engine → view → api → render
// 说明: 数据为确定性合成值，不读取任何外部数据源
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "fr");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 年份区间、指标、情景配置、数据集
pub mod domain;

// 配置层 - 运行配置与情景目录
pub mod config;

// 引擎层 - 公式、合成器、数据集组装
pub mod engine;

// 视图层 - 面板注册表与视图构建
pub mod view;

// API 层 - 选择控件与仪表盘接口
pub mod api;

// 输出层 - HTML / SVG / CSV / JSON
pub mod render;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DisplayToggles, OutputFormat, PriorityTag, Year, YearRange};

// 领域实体
pub use domain::dataset::Dataset;
pub use domain::metric::{MetricId, MetricSeries, MetricUnit};
pub use domain::scenario::ScenarioConfig;

// 配置
pub use config::{ConfigManager, ScenarioCatalog};

// 引擎
pub use engine::{DatasetAssembler, Formula};

// 视图
pub use view::{DashboardView, ViewBuilder};

// API
pub use api::{
    AnalysisMode, DashboardApi, DashboardError, DashboardResult, SelectionControls,
    SimulationScenario,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "战略防务仪表盘";
