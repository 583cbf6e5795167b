// ==========================================
// 战略防务仪表盘 - 视图层
// ==========================================
// 职责: 把数据集与静态参考数据组织为已本地化的标签页/面板结构
// 红线: 不做 I/O；渲染格式交给 render 层
// ==========================================

pub mod builder;
pub mod cards;
pub mod models;
pub mod registry;

pub use builder::{ViewBuilder, ViewInput};
pub use models::{
    CardStyle, ChartData, ChartKind, ChartSpec, ControlSummary, DashboardView, MetricCard,
    NamedSeries, NarrativeLine, PanelContent, PanelView, ProjectEntry, ScatterPoint, TabId,
    TabView, TreemapNode,
};
pub use registry::{PanelSource, PanelSpec, PANELS};
