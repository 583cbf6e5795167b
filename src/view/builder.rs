// ==========================================
// 战略防务仪表盘 - 视图构建器
// ==========================================
// 职责: (Dataset, ScenarioConfig, 控件) → DashboardView
// 规则:
// - 7 个标签页固定顺序；开关关闭的页保留为 hidden 且无面板
// - 数据集面板: 缺失指标丢弃；全部缺失则跳过整个面板
// - 所有文案按显式 locale 翻译，不读全局语言
// ==========================================

use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::dataset::Dataset;
use crate::domain::reference::{alliance_projects, reference_table, CategoricalTable};
use crate::domain::scenario::ScenarioConfig;
use crate::i18n::{tr, tr_with_args};
use crate::view::cards::strategic_cards;
use crate::view::models::{
    ChartData, ChartKind, ChartSpec, ControlSummary, DashboardView, NamedSeries, NarrativeLine,
    PanelContent, PanelView, ProjectEntry, ScatterPoint, TabId, TabView, TreemapNode,
};
use crate::view::registry::{self, Axis, MetricRef, PanelSource, PanelSpec, PointY, TableMapping};

/// 视图构建输入
#[derive(Debug, Clone, Copy)]
pub struct ViewInput<'a> {
    pub dataset: &'a Dataset,
    pub config: &'a ScenarioConfig,
    pub scenario_key: &'a str,
    pub controls: &'a ControlSummary,
}

// ==========================================
// ViewBuilder - 视图构建器
// ==========================================
#[derive(Debug, Clone)]
pub struct ViewBuilder {
    locale: String,
}

impl ViewBuilder {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn tr(&self, key: &str) -> String {
        tr(key, &self.locale)
    }

    // ==========================================
    // 核心方法
    // ==========================================

    #[instrument(skip(self, input), fields(locale = %self.locale, key = input.scenario_key))]
    pub fn build(&self, input: ViewInput<'_>) -> DashboardView {
        let years = *input.dataset.years();
        let tabs = TabId::ALL
            .iter()
            .map(|tab| self.build_tab(*tab, &input))
            .collect();

        DashboardView {
            render_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            locale: self.locale.clone(),
            title: self.tr("header.title"),
            subtitle: tr_with_args(
                "header.subtitle",
                &self.locale,
                &[
                    ("start", &years.start().to_string()),
                    ("end", &years.end().to_string()),
                ],
            ),
            controls: input.controls.clone(),
            scenario_key: input.scenario_key.to_string(),
            config: input.config.clone(),
            years,
            tabs,
        }
    }

    fn build_tab(&self, tab: TabId, input: &ViewInput<'_>) -> TabView {
        let title = self.tr(&tab.title_key());
        if !tab.is_visible(&input.controls.toggles) {
            tracing::debug!(tab = tab.slug(), "标签页已关闭");
            return TabView {
                id: tab,
                title,
                hidden: true,
                panels: Vec::new(),
            };
        }

        let panels = registry::panels_for(tab)
            .filter_map(|spec| self.build_panel(spec, input.dataset))
            .collect();
        TabView {
            id: tab,
            title,
            hidden: false,
            panels,
        }
    }

    /// 解释一条面板声明；数据全部缺失时返回 None
    pub fn build_panel(&self, spec: &PanelSpec, dataset: &Dataset) -> Option<PanelView> {
        let content = match spec.source {
            PanelSource::Cards => PanelContent::Cards {
                cards: strategic_cards(dataset, &self.locale),
            },
            PanelSource::Metrics { kind, metrics } => {
                let chart = self.metric_chart(kind, metrics, dataset);
                if chart.is_none() {
                    tracing::debug!(panel = spec.id, "面板指标全部缺失，跳过");
                }
                PanelContent::Chart { chart: chart? }
            }
            PanelSource::Table {
                kind,
                table,
                mapping,
            } => PanelContent::Chart {
                chart: self.table_chart(kind, &reference_table(table), mapping),
            },
            PanelSource::ProjectTreemap => PanelContent::Chart {
                chart: self.project_treemap(),
            },
            PanelSource::ProjectList => PanelContent::ProjectList {
                projects: alliance_projects()
                    .iter()
                    .map(|p| ProjectEntry {
                        name: p.name.to_string(),
                        countries: p.countries.to_string(),
                        kind: p.kind.to_string(),
                        status: p.status.to_string(),
                        details: p.details().to_string(),
                    })
                    .collect(),
            },
            PanelSource::Narrative { lines } => PanelContent::Narrative {
                lines: (1..=lines)
                    .map(|n| NarrativeLine {
                        label: self.tr(&format!("narrative.{}.l{}.label", spec.id, n)),
                        text: self.tr(&format!("narrative.{}.l{}.text", spec.id, n)),
                    })
                    .collect(),
            },
        };

        if matches!(content, PanelContent::Chart { .. }) {
            crate::perf::record_chart();
        }

        Some(PanelView {
            id: spec.id.to_string(),
            title: self.tr(&spec.title_key()),
            content,
        })
    }

    // ==========================================
    // 图表构建
    // ==========================================

    fn metric_chart(
        &self,
        kind: ChartKind,
        metrics: &[MetricRef],
        dataset: &Dataset,
    ) -> Option<ChartSpec> {
        let present: Vec<(&MetricRef, &crate::domain::metric::MetricSeries)> = metrics
            .iter()
            .filter_map(|m| dataset.series(m.metric).map(|s| (m, s)))
            .collect();
        let (first, _) = present.first()?;

        let y_label = present
            .iter()
            .find(|(m, _)| m.axis == Axis::Primary)
            .map_or(first.metric.unit(), |(m, _)| m.metric.unit());
        let y2_label = present
            .iter()
            .find(|(m, _)| m.axis == Axis::Secondary)
            .map(|(m, _)| self.tr(m.metric.unit().label_key()));

        let series = present
            .iter()
            .map(|(m, s)| NamedSeries {
                key: m.metric.column_name().to_string(),
                name: self.tr(&m.metric.label_key()),
                values: s.values().to_vec(),
                secondary: m.axis == Axis::Secondary,
            })
            .collect();

        Some(ChartSpec {
            kind,
            x_label: self.tr("ui.year"),
            y_label: self.tr(y_label.label_key()),
            y2_label,
            data: ChartData::TimeSeries {
                years: dataset.years().iter().collect(),
                series,
            },
        })
    }

    fn table_chart(
        &self,
        kind: ChartKind,
        table: &CategoricalTable,
        mapping: TableMapping,
    ) -> ChartSpec {
        match mapping {
            TableMapping::Columns(columns) => {
                let series: Vec<NamedSeries> = columns
                    .iter()
                    .filter_map(|c| {
                        table.column(c.key).map(|col| NamedSeries {
                            key: c.key.to_string(),
                            name: self.tr(c.key),
                            values: col.values.clone(),
                            secondary: c.axis == Axis::Secondary,
                        })
                    })
                    .collect();
                let y_label = series
                    .iter()
                    .find(|s| !s.secondary)
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                let y2_label = series.iter().find(|s| s.secondary).map(|s| s.name.clone());

                ChartSpec {
                    kind,
                    x_label: String::new(),
                    y_label,
                    y2_label,
                    data: ChartData::Categorical {
                        categories: table.labels.clone(),
                        series,
                    },
                }
            }
            TableMapping::Points { x, y, size } => {
                let column = |key: &str| {
                    table
                        .column(key)
                        .map(|c| c.values.clone())
                        .unwrap_or_else(|| vec![0.0; table.rows()])
                };
                let xs = column(x);
                let sizes = column(size);

                let (ys, y_categories, y_label) = match y {
                    PointY::Column(key) => (column(key), None, self.tr(key)),
                    PointY::Groups => {
                        let mut categories: Vec<String> = Vec::new();
                        let ys = table
                            .groups
                            .iter()
                            .map(|g| {
                                let idx = categories.iter().position(|c| c == g).unwrap_or_else(
                                    || {
                                        categories.push(g.clone());
                                        categories.len() - 1
                                    },
                                );
                                idx as f64
                            })
                            .collect();
                        (ys, Some(categories), self.tr("columns.category"))
                    }
                };

                let points = (0..table.rows())
                    .map(|i| ScatterPoint {
                        label: table.labels[i].clone(),
                        group: table.groups[i].clone(),
                        x: xs[i],
                        y: ys[i],
                        size: sizes[i],
                    })
                    .collect();

                ChartSpec {
                    kind,
                    x_label: self.tr(x),
                    y_label,
                    y2_label: None,
                    data: ChartData::Points {
                        points,
                        y_categories,
                    },
                }
            }
        }
    }

    fn project_treemap(&self) -> ChartSpec {
        let nodes = alliance_projects()
            .iter()
            .map(|p| TreemapNode {
                group: p.kind.to_string(),
                label: p.name.to_string(),
                weight: 1.0,
            })
            .collect();
        ChartSpec {
            kind: ChartKind::Treemap,
            x_label: String::new(),
            y_label: String::new(),
            y2_label: None,
            data: ChartData::Hierarchy { nodes },
        }
    }
}
