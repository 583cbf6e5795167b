// ==========================================
// 战略防务仪表盘 - 仪表盘 API
// ==========================================
// 职责: 控件校验 → 数据集组装 → 视图构建
// 架构: API 层 → 引擎层 (DatasetAssembler) → 视图层 (ViewBuilder)
// 线程模型: 单线程同步；情景目录通过 Arc 只读共享
// ==========================================

use std::sync::Arc;

use crate::api::controls::{AnalysisMode, SelectionControls};
use crate::api::error::DashboardResult;
use crate::api::validator::ControlValidator;
use crate::config::{ConfigManager, ScenarioCatalog};
use crate::domain::dataset::Dataset;
use crate::domain::scenario::ScenarioConfig;
use crate::domain::types::YearRange;
use crate::engine::DatasetAssembler;
use crate::i18n::{is_supported, tr, DEFAULT_LOCALE};
use crate::view::{ControlSummary, DashboardView, ViewBuilder, ViewInput};

// ==========================================
// DashboardApi - 仪表盘 API
// ==========================================
#[derive(Debug, Clone)]
pub struct DashboardApi {
    assembler: DatasetAssembler,
    validator: ControlValidator,
    locale: String,
}

impl DashboardApi {
    /// 创建新的 DashboardApi 实例
    ///
    /// # 参数
    /// - catalog: 情景目录（只读共享）
    /// - years: 合成的年份区间
    pub fn new(catalog: Arc<ScenarioCatalog>, years: YearRange) -> Self {
        Self {
            assembler: DatasetAssembler::new(catalog, years),
            validator: ControlValidator::new(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// 按运行配置创建（年份区间 + 默认语言），使用内置情景目录
    pub fn from_config(config: &ConfigManager) -> DashboardResult<Self> {
        let years = config.get_year_range()?;
        Ok(Self::new(Arc::new(ScenarioCatalog::builtin()), years).with_locale(config.get_locale()))
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn years(&self) -> &YearRange {
        self.assembler.years()
    }

    /// 全部分析模式及其选项
    pub fn options() -> Vec<(AnalysisMode, &'static [&'static str])> {
        AnalysisMode::ALL.iter().map(|m| (*m, m.options())).collect()
    }

    // ==========================================
    // 数据接口
    // ==========================================

    /// 按选择键组装数据集（未知键走兜底配置）
    pub fn assemble(&self, key: &str) -> (Dataset, ScenarioConfig) {
        self.assembler.assemble(key)
    }

    /// 校验控件后组装数据集
    pub fn dataset_for(&self, controls: &SelectionControls) -> DashboardResult<Dataset> {
        self.validator.validate(controls)?;
        let (dataset, _) = self.assembler.assemble(controls.selection_key());
        Ok(dataset)
    }

    // ==========================================
    // 视图接口
    // ==========================================

    /// 使用 API 默认语言构建视图
    pub fn build_view(&self, controls: &SelectionControls) -> DashboardResult<DashboardView> {
        self.build_view_localized(controls, &self.locale)
    }

    /// 使用指定语言构建视图
    pub fn build_view_localized(
        &self,
        controls: &SelectionControls,
        locale: &str,
    ) -> DashboardResult<DashboardView> {
        let _perf = crate::perf::PerfGuard::new("build_view");
        self.validator.validate(controls)?;

        let locale = if is_supported(locale) {
            locale
        } else {
            tracing::warn!(locale, "不支持的语言，使用默认语言");
            DEFAULT_LOCALE
        };

        let key = controls.selection_key();
        let (dataset, config) = self.assembler.assemble(key);

        let summary = ControlSummary {
            mode: tr(&controls.mode.label_key(), locale),
            item: controls.item.clone(),
            simulation: tr(&controls.scenario.label_key(), locale),
            toggles: controls.toggles,
        };
        let view = ViewBuilder::new(locale).build(ViewInput {
            dataset: &dataset,
            config: &config,
            scenario_key: key,
            controls: &summary,
        });

        tracing::info!(
            render_id = %view.render_id,
            mode = %controls.mode,
            key,
            locale,
            hidden_tabs = view.tabs.iter().filter(|t| t.hidden).count(),
            panels = view.panels().count(),
            "仪表盘视图已生成"
        );
        Ok(view)
    }
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new(Arc::new(ScenarioCatalog::builtin()), YearRange::standard())
    }
}
