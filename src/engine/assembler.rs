// ==========================================
// 战略防务仪表盘 - 数据集组装引擎
// ==========================================
// 职责: 选择键 → (Dataset, ScenarioConfig)
// 输入: 情景目录（注入，只读）+ 年份区间
// 输出: 基础指标恒存在；四个门控标签各自决定一个扩展块
// 红线: 不读全局状态；未知键走兜底配置，不报错
// ==========================================

use std::sync::Arc;

use tracing::instrument;

use crate::config::ScenarioCatalog;
use crate::domain::dataset::{
    AllianceBlock, BaseMetrics, Dataset, InnovationBlock, IntelligenceBlock, MissileDefenseBlock,
};
use crate::domain::scenario::ScenarioConfig;
use crate::domain::types::{PriorityTag, YearRange};
use crate::engine::synthesizers as syn;

// ==========================================
// DatasetAssembler - 数据集组装引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct DatasetAssembler {
    catalog: Arc<ScenarioCatalog>,
    years: YearRange,
}

impl DatasetAssembler {
    pub fn new(catalog: Arc<ScenarioCatalog>, years: YearRange) -> Self {
        Self { catalog, years }
    }

    pub fn years(&self) -> &YearRange {
        &self.years
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 按选择键组装数据集
    #[instrument(skip(self), fields(years = %self.years))]
    pub fn assemble(&self, key: &str) -> (Dataset, ScenarioConfig) {
        let _perf = crate::perf::PerfGuard::new("assemble_dataset");

        let config = self.catalog.lookup(key);
        let dataset = self.assemble_for(&config);

        tracing::debug!(
            kind = %config.kind,
            blocks = dataset.active_tags().len(),
            "数据集组装完成"
        );
        (dataset, config)
    }

    /// 按给定配置组装（不经目录查询）
    pub fn assemble_for(&self, config: &ScenarioConfig) -> Dataset {
        let years = &self.years;
        let mut dataset = Dataset::new(*years, Self::base_metrics(years, config));

        if config.has_priority(PriorityTag::MissileDefense) {
            dataset = dataset.with_missile_defense(MissileDefenseBlock {
                interception_rate: syn::interception_rate(years),
                missile_defense_coverage: syn::missile_defense_coverage(years),
                deployed_ad_systems: syn::deployed_ad_systems(years),
            });
        }
        if config.has_priority(PriorityTag::Intelligence) {
            dataset = dataset.with_intelligence(IntelligenceBlock {
                sigint: syn::sigint(years),
                cyber_operations: syn::cyber_operations(years),
                early_warning: syn::early_warning(years),
            });
        }
        if config.has_priority(PriorityTag::Innovation) {
            dataset = dataset.with_innovation(InnovationBlock {
                defense_research: syn::defense_research(years),
                emerging_tech: syn::emerging_tech(years),
                weapon_exports: syn::weapon_exports(years),
            });
        }
        if config.has_priority(PriorityTag::Alliances) {
            dataset = dataset.with_alliances(AllianceBlock {
                us_exercises: syn::us_exercises(years),
                strategic_partnerships: syn::strategic_partnerships(years),
                regional_cooperation: syn::regional_cooperation(years),
            });
        }
        dataset
    }

    fn base_metrics(years: &YearRange, config: &ScenarioConfig) -> BaseMetrics {
        BaseMetrics {
            budget: syn::budget(years, config),
            personnel: syn::personnel(years, config),
            gdp_share: syn::gdp_share(years),
            exercises: syn::exercises(years, config),
            readiness: syn::readiness(years),
            deterrence: syn::deterrence(years),
            mobilization_days: syn::mobilization_days(years),
            joint_exercises: syn::joint_exercises(years),
            tech_development: syn::tech_development(years),
            air_capacity: syn::air_capacity(years),
            air_defense_coverage: syn::air_defense_coverage(years),
            alliance_cooperation: syn::alliance_cooperation(years),
            cyber_capabilities: syn::cyber_capabilities(years),
            weapon_production: syn::weapon_production(years),
        }
    }
}

impl Default for DatasetAssembler {
    fn default() -> Self {
        Self::new(Arc::new(ScenarioCatalog::builtin()), YearRange::standard())
    }
}
