// ==========================================
// 战略防务仪表盘 - 领域层
// ==========================================
// 职责: 年份区间、情景配置、指标序列、数据集、静态参考数据
// ==========================================

pub mod dataset;
pub mod metric;
pub mod reference;
pub mod scenario;
pub mod types;

// 重导出核心类型
pub use dataset::{
    AllianceBlock, BaseMetrics, Dataset, InnovationBlock, IntelligenceBlock, MissileDefenseBlock,
};
pub use metric::{MetricId, MetricSeries, MetricUnit};
pub use reference::{
    alliance_projects, branch_capabilities, reference_table, AllianceProject, BranchCapability,
    CategoricalTable, NumericColumn, ReferenceTableId,
};
pub use scenario::ScenarioConfig;
pub use types::{
    DisplayToggles, InvalidYearRange, OutputFormat, PriorityTag, Year, YearRange, BASELINE_YEAR,
    MAX_YEAR, MIN_YEAR,
};
