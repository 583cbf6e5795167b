// ==========================================
// 战略防务仪表盘 - 面板注册表
// ==========================================
// 职责: 声明式列出每个标签页的面板（标签页, 面板 id, 图表类型, 数据源）
// 说明: 视图构建器逐条解释；新增面板只需在此追加一条
// 约定: 面板标题键为 panels.<id>；叙述行键为 narrative.<id>.l<n>.{label,text}
// ==========================================

use crate::domain::metric::MetricId;
use crate::domain::reference::ReferenceTableId;
use crate::view::models::{ChartKind, TabId};

/// 坐标轴
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Primary,
    Secondary,
}

/// 数据集指标引用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricRef {
    pub metric: MetricId,
    pub axis: Axis,
}

const fn primary(metric: MetricId) -> MetricRef {
    MetricRef {
        metric,
        axis: Axis::Primary,
    }
}

const fn secondary(metric: MetricId) -> MetricRef {
    MetricRef {
        metric,
        axis: Axis::Secondary,
    }
}

/// 参考表列引用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef {
    pub key: &'static str,
    pub axis: Axis,
}

const fn column(key: &'static str) -> ColumnRef {
    ColumnRef {
        key,
        axis: Axis::Primary,
    }
}

const fn column_secondary(key: &'static str) -> ColumnRef {
    ColumnRef {
        key,
        axis: Axis::Secondary,
    }
}

/// 散点 y 轴来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointY {
    Column(&'static str),
    /// 使用行分组作为分类 y 轴
    Groups,
}

/// 参考表到图表的映射
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMapping {
    /// 行标签为分类轴，每列一条序列
    Columns(&'static [ColumnRef]),
    /// 每行一个气泡
    Points {
        x: &'static str,
        y: PointY,
        size: &'static str,
    },
}

/// 面板数据源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSource {
    /// 战略指标卡
    Cards,
    /// 数据集指标（缺失指标被丢弃；全部缺失则跳过面板）
    Metrics {
        kind: ChartKind,
        metrics: &'static [MetricRef],
    },
    /// 静态参考表
    Table {
        kind: ChartKind,
        table: ReferenceTableId,
        mapping: TableMapping,
    },
    /// 联盟项目按类型分组的层次图
    ProjectTreemap,
    /// 联盟项目列表
    ProjectList,
    /// 叙述文本，lines 为行数
    Narrative { lines: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
    pub tab: TabId,
    pub id: &'static str,
    pub source: PanelSource,
}

impl PanelSpec {
    pub fn title_key(&self) -> String {
        format!("panels.{}", self.id)
    }

    /// 数据集指标面板引用的指标
    pub fn metrics(&self) -> &'static [MetricRef] {
        match self.source {
            PanelSource::Metrics { metrics, .. } => metrics,
            _ => &[],
        }
    }
}

const fn panel(tab: TabId, id: &'static str, source: PanelSource) -> PanelSpec {
    PanelSpec { tab, id, source }
}

// ==========================================
// 面板数据引用
// ==========================================

const CAPABILITY_EVOLUTION: &[MetricRef] = &[
    primary(MetricId::Readiness),
    primary(MetricId::Deterrence),
    primary(MetricId::CyberCapabilities),
    primary(MetricId::AllianceCooperation),
];

const TECHNOLOGY_COMPARISON: &[MetricRef] = &[
    primary(MetricId::TechDevelopment),
    secondary(MetricId::CyberCapabilities),
    secondary(MetricId::WeaponProduction),
];

const BUDGET_TREND: &[MetricRef] = &[primary(MetricId::Budget), secondary(MetricId::GdpShare)];

const FORCE_POSTURE: &[MetricRef] = &[
    primary(MetricId::Exercises),
    primary(MetricId::JointExercises),
    secondary(MetricId::MobilizationDays),
];

const MISSILE_DEFENSE_TRENDS: &[MetricRef] = &[
    primary(MetricId::InterceptionRate),
    primary(MetricId::MissileDefenseCoverage),
    secondary(MetricId::DeployedAdSystems),
];

const INTELLIGENCE_TRENDS: &[MetricRef] = &[
    primary(MetricId::Sigint),
    primary(MetricId::CyberOperations),
    primary(MetricId::EarlyWarning),
];

const INNOVATION_TRENDS: &[MetricRef] = &[
    primary(MetricId::DefenseResearch),
    primary(MetricId::EmergingTech),
    secondary(MetricId::WeaponExports),
];

const ALLIANCE_TRENDS: &[MetricRef] = &[
    primary(MetricId::UsExercises),
    primary(MetricId::StrategicPartnerships),
    primary(MetricId::RegionalCooperation),
];

const TECH_SUPERIORITY: &[ColumnRef] = &[
    column("columns.lead_years"),
    column_secondary("columns.exports_bn"),
];

const DEFENSE_SYSTEMS: &[ColumnRef] = &[column("columns.interception_rate")];

const BRANCH_BUDGETS: &[ColumnRef] = &[column("columns.budget_bn")];

const COMPARATIVE_ADVANTAGES: &[ColumnRef] = &[
    column("columns.score_israel"),
    column("columns.score_neighbors"),
];

const RESPONSE_CAPABILITIES: &[ColumnRef] = &[
    column("columns.air_force"),
    column("columns.missile_defense"),
    column("columns.cybersecurity"),
    column("columns.ground_forces"),
];

const FUTURE_COOPERATION: &[ColumnRef] = &[column("columns.potential")];

const fn metrics(kind: ChartKind, metrics: &'static [MetricRef]) -> PanelSource {
    PanelSource::Metrics { kind, metrics }
}

const fn table(kind: ChartKind, table: ReferenceTableId, mapping: TableMapping) -> PanelSource {
    PanelSource::Table {
        kind,
        table,
        mapping,
    }
}

const fn narrative(lines: usize) -> PanelSource {
    PanelSource::Narrative { lines }
}

// ==========================================
// 注册表
// ==========================================

pub static PANELS: &[PanelSpec] = &[
    // ----- 战略仪表盘 -----
    panel(TabId::Dashboard, "strategic_metrics", PanelSource::Cards),
    panel(
        TabId::Dashboard,
        "capability_evolution",
        metrics(ChartKind::Line, CAPABILITY_EVOLUTION),
    ),
    panel(
        TabId::Dashboard,
        "technology_comparison",
        metrics(ChartKind::Line, TECHNOLOGY_COMPARISON),
    ),
    panel(
        TabId::Dashboard,
        "budget_trend",
        metrics(ChartKind::BarLine, BUDGET_TREND),
    ),
    panel(
        TabId::Dashboard,
        "force_posture",
        metrics(ChartKind::Line, FORCE_POSTURE),
    ),
    panel(
        TabId::Dashboard,
        "missile_defense_trends",
        metrics(ChartKind::Line, MISSILE_DEFENSE_TRENDS),
    ),
    panel(
        TabId::Dashboard,
        "intelligence_trends",
        metrics(ChartKind::Line, INTELLIGENCE_TRENDS),
    ),
    // ----- 技术分析 -----
    panel(
        TabId::Technical,
        "weapon_systems",
        table(
            ChartKind::Scatter,
            ReferenceTableId::WeaponSystems,
            TableMapping::Points {
                x: "columns.range_power",
                y: PointY::Groups,
                size: "columns.range_power",
            },
        ),
    ),
    panel(
        TabId::Technical,
        "tech_superiority",
        table(
            ChartKind::BarLine,
            ReferenceTableId::TechSuperiority,
            TableMapping::Columns(TECH_SUPERIORITY),
        ),
    ),
    panel(TabId::Technical, "ongoing_innovations", narrative(5)),
    panel(
        TabId::Technical,
        "innovation_trends",
        metrics(ChartKind::Line, INNOVATION_TRENDS),
    ),
    // ----- 地区背景 -----
    panel(TabId::Regional, "regional_architecture", narrative(4)),
    panel(TabId::Regional, "regional_dynamics", narrative(4)),
    panel(
        TabId::Regional,
        "regional_threats",
        table(
            ChartKind::Scatter,
            ReferenceTableId::RegionalThreats,
            TableMapping::Points {
                x: "columns.distance_km",
                y: PointY::Column("columns.enemy_capability"),
                size: "columns.alert_level",
            },
        ),
    ),
    panel(
        TabId::Regional,
        "defense_systems",
        table(
            ChartKind::Bar,
            ReferenceTableId::DefenseSystems,
            TableMapping::Columns(DEFENSE_SYSTEMS),
        ),
    ),
    // ----- 军种 -----
    panel(
        TabId::Branches,
        "branch_budgets",
        table(
            ChartKind::Bar,
            ReferenceTableId::BranchBudgets,
            TableMapping::Columns(BRANCH_BUDGETS),
        ),
    ),
    panel(TabId::Branches, "strategic_specializations", narrative(5)),
    panel(
        TabId::Branches,
        "comparative_advantages",
        table(
            ChartKind::GroupedBar,
            ReferenceTableId::ComparativeAdvantages,
            TableMapping::Columns(COMPARATIVE_ADVANTAGES),
        ),
    ),
    // ----- 威胁评估 -----
    panel(
        TabId::Threats,
        "threat_matrix",
        table(
            ChartKind::Scatter,
            ReferenceTableId::ThreatMatrix,
            TableMapping::Points {
                x: "columns.probability",
                y: PointY::Column("columns.impact"),
                size: "columns.preparedness",
            },
        ),
    ),
    panel(
        TabId::Threats,
        "response_capabilities",
        table(
            ChartKind::GroupedBar,
            ReferenceTableId::ResponseCapabilities,
            TableMapping::Columns(RESPONSE_CAPABILITIES),
        ),
    ),
    panel(TabId::Threats, "strategic_recommendations", narrative(6)),
    // ----- 联盟 -----
    panel(TabId::Alliances, "alliance_map", PanelSource::ProjectTreemap),
    panel(TabId::Alliances, "strategic_projects", PanelSource::ProjectList),
    panel(
        TabId::Alliances,
        "alliance_network",
        table(
            ChartKind::Scatter,
            ReferenceTableId::AllianceNetwork,
            TableMapping::Points {
                x: "columns.start_year",
                y: PointY::Column("columns.cooperation_level"),
                size: "columns.cooperation_level",
            },
        ),
    ),
    panel(TabId::Alliances, "alliance_advantages", narrative(5)),
    panel(
        TabId::Alliances,
        "future_cooperation",
        table(
            ChartKind::Bar,
            ReferenceTableId::FutureCooperation,
            TableMapping::Columns(FUTURE_COOPERATION),
        ),
    ),
    panel(
        TabId::Alliances,
        "alliance_trends",
        metrics(ChartKind::Line, ALLIANCE_TRENDS),
    ),
    // ----- 战略综合 -----
    panel(TabId::Synthesis, "decisive_advantages", narrative(4)),
    panel(TabId::Synthesis, "strategic_challenges", narrative(4)),
    panel(TabId::Synthesis, "outlook", narrative(3)),
    panel(TabId::Synthesis, "final_recommendations", narrative(2)),
];

/// 指定标签页的面板（保持注册顺序）
pub fn panels_for(tab: TabId) -> impl Iterator<Item = &'static PanelSpec> {
    PANELS.iter().filter(move |p| p.tab == tab)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference::reference_table;

    #[test]
    fn test_panel_ids_unique() {
        let mut ids: Vec<_> = PANELS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PANELS.len());
    }

    #[test]
    fn test_every_tab_has_panels() {
        for tab in TabId::ALL {
            assert!(panels_for(tab).count() > 0, "{:?} 没有面板", tab);
        }
    }

    #[test]
    fn test_table_columns_exist() {
        for spec in PANELS {
            let PanelSource::Table { table, mapping, .. } = spec.source else {
                continue;
            };
            let table = reference_table(table);
            let keys: Vec<&str> = match mapping {
                TableMapping::Columns(cols) => cols.iter().map(|c| c.key).collect(),
                TableMapping::Points { x, y, size } => {
                    let mut keys = vec![x, size];
                    if let PointY::Column(k) = y {
                        keys.push(k);
                    }
                    keys
                }
            };
            for key in keys {
                assert!(table.column(key).is_some(), "{}: 缺少列 {}", spec.id, key);
            }
        }
    }

    #[test]
    fn test_gated_panels_reference_only_gated_metrics() {
        let spec = PANELS
            .iter()
            .find(|p| p.id == "missile_defense_trends")
            .unwrap();
        assert!(spec.metrics().iter().all(|m| m.metric.gate().is_some()));
    }
}
