// ==========================================
// 战略防务仪表盘 - API 层
// ==========================================
// 职责: 选择控件、控件校验、仪表盘视图接口
// ==========================================

pub mod controls;
pub mod dashboard_api;
pub mod error;
pub mod validator;

// 重导出核心类型
pub use controls::{
    AnalysisMode, SelectionControls, SimulationScenario, BRANCH_OPTIONS, OVERVIEW_OPTIONS,
    PROGRAM_OPTIONS,
};
pub use dashboard_api::DashboardApi;
pub use error::{DashboardError, DashboardResult};
pub use validator::ControlValidator;
