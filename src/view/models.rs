// ==========================================
// 战略防务仪表盘 - 视图模型
// ==========================================
// 职责: 渲染器无关的仪表盘结构（标签页 / 面板 / 图表数据）
// 说明: 所有文案已按 locale 本地化；渲染器只负责排版
// ==========================================

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::scenario::ScenarioConfig;
use crate::domain::types::{DisplayToggles, Year, YearRange};

// ==========================================
// 标签页标识 (Tab Id)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    Dashboard,
    Technical,
    Regional,
    Branches,
    Threats,
    Alliances,
    Synthesis,
}

impl TabId {
    /// 固定展示顺序
    pub const ALL: [TabId; 7] = [
        TabId::Dashboard,
        TabId::Technical,
        TabId::Regional,
        TabId::Branches,
        TabId::Threats,
        TabId::Alliances,
        TabId::Synthesis,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            TabId::Dashboard => "dashboard",
            TabId::Technical => "technical",
            TabId::Regional => "regional",
            TabId::Branches => "branches",
            TabId::Threats => "threats",
            TabId::Alliances => "alliances",
            TabId::Synthesis => "synthesis",
        }
    }

    pub fn title_key(&self) -> String {
        format!("tabs.{}", self.slug())
    }

    /// 开关关闭时该页保留但不渲染内容
    pub fn is_visible(&self, toggles: &DisplayToggles) -> bool {
        match self {
            TabId::Technical => toggles.show_technical,
            TabId::Regional => toggles.show_regional,
            TabId::Threats => toggles.threat_assessment,
            TabId::Alliances => toggles.show_alliances,
            TabId::Dashboard | TabId::Branches | TabId::Synthesis => true,
        }
    }
}

// ==========================================
// 仪表盘视图
// ==========================================

/// 选择控件摘要（已本地化）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlSummary {
    pub mode: String,
    pub item: String,
    pub simulation: String,
    pub toggles: DisplayToggles,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// 单次渲染标识，仅用于日志关联
    pub render_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub locale: String,
    pub title: String,
    pub subtitle: String,
    pub controls: ControlSummary,
    pub scenario_key: String,
    pub config: ScenarioConfig,
    pub years: YearRange,
    pub tabs: Vec<TabView>,
}

impl DashboardView {
    pub fn tab(&self, id: TabId) -> Option<&TabView> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// 全部可见面板
    pub fn panels(&self) -> impl Iterator<Item = &PanelView> {
        self.tabs.iter().flat_map(|t| t.panels.iter())
    }

    pub fn panel(&self, id: &str) -> Option<&PanelView> {
        self.panels().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub id: TabId,
    pub title: String,
    /// 为 true 时 panels 恒为空
    pub hidden: bool,
    pub panels: Vec<PanelView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub id: String,
    pub title: String,
    pub content: PanelContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelContent {
    Cards { cards: Vec<MetricCard> },
    Chart { chart: ChartSpec },
    Narrative { lines: Vec<NarrativeLine> },
    ProjectList { projects: Vec<ProjectEntry> },
}

// ==========================================
// 指标卡
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStyle {
    /// 大号高亮卡
    Highlight,
    /// 防务主题卡
    Defense,
    /// 联盟主题卡
    Alliance,
    /// 普通指标（带变化量）
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub id: String,
    pub label: String,
    pub value: String,
    pub caption: Option<String>,
    pub delta: Option<String>,
    pub style: CardStyle,
}

// ==========================================
// 叙述与项目列表
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeLine {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub countries: String,
    pub kind: String,
    pub status: String,
    pub details: String,
}

// ==========================================
// 图表
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    GroupedBar,
    Bar,
    /// 气泡散点
    Scatter,
    Treemap,
    /// 柱 + 次坐标折线
    BarLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub y2_label: Option<String>,
    pub data: ChartData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ChartData {
    /// 按年序列
    TimeSeries {
        years: Vec<Year>,
        series: Vec<NamedSeries>,
    },
    /// 分类轴
    Categorical {
        categories: Vec<String>,
        series: Vec<NamedSeries>,
    },
    /// 散点；y_categories 存在时 y 为分类下标
    Points {
        points: Vec<ScatterPoint>,
        y_categories: Option<Vec<String>>,
    },
    /// 两级层次（分组 → 叶子）
    Hierarchy { nodes: Vec<TreemapNode> },
}

impl ChartData {
    /// 序列数量（散点/层次为点数）
    pub fn len(&self) -> usize {
        match self {
            ChartData::TimeSeries { series, .. } | ChartData::Categorical { series, .. } => {
                series.len()
            }
            ChartData::Points { points, .. } => points.len(),
            ChartData::Hierarchy { nodes } => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn series(&self) -> &[NamedSeries] {
        match self {
            ChartData::TimeSeries { series, .. } | ChartData::Categorical { series, .. } => series,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    /// 稳定键（指标列名或参考表列键）
    pub key: String,
    pub name: String,
    pub values: Vec<f64>,
    /// 是否使用次坐标轴
    pub secondary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub label: String,
    pub group: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapNode {
    pub group: String,
    pub label: String,
    pub weight: f64,
}
