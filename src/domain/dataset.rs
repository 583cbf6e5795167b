// ==========================================
// 战略防务仪表盘 - 数据集
// ==========================================
// 职责: 固定基础指标记录 + 按标签可选的扩展块
// 说明: "哪些列存在"由类型表达，不依赖运行期字典形状
// ==========================================

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::metric::{MetricId, MetricSeries};
use crate::domain::types::{PriorityTag, Year, YearRange};

/// 基础指标（任何配置都会计算）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseMetrics {
    pub budget: MetricSeries,
    pub personnel: MetricSeries,
    pub gdp_share: MetricSeries,
    pub exercises: MetricSeries,
    pub readiness: MetricSeries,
    pub deterrence: MetricSeries,
    pub mobilization_days: MetricSeries,
    pub joint_exercises: MetricSeries,
    pub tech_development: MetricSeries,
    pub air_capacity: MetricSeries,
    pub air_defense_coverage: MetricSeries,
    pub alliance_cooperation: MetricSeries,
    pub cyber_capabilities: MetricSeries,
    pub weapon_production: MetricSeries,
}

/// 反导扩展块（missile-defense）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissileDefenseBlock {
    pub interception_rate: MetricSeries,
    pub missile_defense_coverage: MetricSeries,
    pub deployed_ad_systems: MetricSeries,
}

/// 情报扩展块（intelligence）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntelligenceBlock {
    pub sigint: MetricSeries,
    pub cyber_operations: MetricSeries,
    pub early_warning: MetricSeries,
}

/// 创新扩展块（innovation）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InnovationBlock {
    pub defense_research: MetricSeries,
    pub emerging_tech: MetricSeries,
    pub weapon_exports: MetricSeries,
}

/// 联盟扩展块（alliances）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllianceBlock {
    pub us_exercises: MetricSeries,
    pub strategic_partnerships: MetricSeries,
    pub regional_cooperation: MetricSeries,
}

/// 按年份索引的数据集
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    years: YearRange,
    base: BaseMetrics,
    missile_defense: Option<MissileDefenseBlock>,
    intelligence: Option<IntelligenceBlock>,
    innovation: Option<InnovationBlock>,
    alliances: Option<AllianceBlock>,
}

impl Dataset {
    /// 仅含基础指标的数据集
    pub fn new(years: YearRange, base: BaseMetrics) -> Self {
        Self {
            years,
            base,
            missile_defense: None,
            intelligence: None,
            innovation: None,
            alliances: None,
        }
    }

    pub fn with_missile_defense(mut self, block: MissileDefenseBlock) -> Self {
        self.missile_defense = Some(block);
        self
    }

    pub fn with_intelligence(mut self, block: IntelligenceBlock) -> Self {
        self.intelligence = Some(block);
        self
    }

    pub fn with_innovation(mut self, block: InnovationBlock) -> Self {
        self.innovation = Some(block);
        self
    }

    pub fn with_alliances(mut self, block: AllianceBlock) -> Self {
        self.alliances = Some(block);
        self
    }

    pub fn years(&self) -> &YearRange {
        &self.years
    }

    pub fn base(&self) -> &BaseMetrics {
        &self.base
    }

    pub fn missile_defense(&self) -> Option<&MissileDefenseBlock> {
        self.missile_defense.as_ref()
    }

    pub fn intelligence(&self) -> Option<&IntelligenceBlock> {
        self.intelligence.as_ref()
    }

    pub fn innovation(&self) -> Option<&InnovationBlock> {
        self.innovation.as_ref()
    }

    pub fn alliances(&self) -> Option<&AllianceBlock> {
        self.alliances.as_ref()
    }

    /// 已存在的扩展块对应的标签
    pub fn active_tags(&self) -> BTreeSet<PriorityTag> {
        let mut tags = BTreeSet::new();
        if self.missile_defense.is_some() {
            tags.insert(PriorityTag::MissileDefense);
        }
        if self.intelligence.is_some() {
            tags.insert(PriorityTag::Intelligence);
        }
        if self.innovation.is_some() {
            tags.insert(PriorityTag::Innovation);
        }
        if self.alliances.is_some() {
            tags.insert(PriorityTag::Alliances);
        }
        tags
    }

    /// 按指标标识取列；扩展块缺失时返回 None
    pub fn series(&self, id: MetricId) -> Option<&MetricSeries> {
        let base = &self.base;
        match id {
            MetricId::Budget => Some(&base.budget),
            MetricId::Personnel => Some(&base.personnel),
            MetricId::GdpShare => Some(&base.gdp_share),
            MetricId::Exercises => Some(&base.exercises),
            MetricId::Readiness => Some(&base.readiness),
            MetricId::Deterrence => Some(&base.deterrence),
            MetricId::MobilizationDays => Some(&base.mobilization_days),
            MetricId::JointExercises => Some(&base.joint_exercises),
            MetricId::TechDevelopment => Some(&base.tech_development),
            MetricId::AirCapacity => Some(&base.air_capacity),
            MetricId::AirDefenseCoverage => Some(&base.air_defense_coverage),
            MetricId::AllianceCooperation => Some(&base.alliance_cooperation),
            MetricId::CyberCapabilities => Some(&base.cyber_capabilities),
            MetricId::WeaponProduction => Some(&base.weapon_production),
            MetricId::InterceptionRate => self.missile_defense().map(|b| &b.interception_rate),
            MetricId::MissileDefenseCoverage => {
                self.missile_defense().map(|b| &b.missile_defense_coverage)
            }
            MetricId::DeployedAdSystems => self.missile_defense().map(|b| &b.deployed_ad_systems),
            MetricId::Sigint => self.intelligence().map(|b| &b.sigint),
            MetricId::CyberOperations => self.intelligence().map(|b| &b.cyber_operations),
            MetricId::EarlyWarning => self.intelligence().map(|b| &b.early_warning),
            MetricId::DefenseResearch => self.innovation().map(|b| &b.defense_research),
            MetricId::EmergingTech => self.innovation().map(|b| &b.emerging_tech),
            MetricId::WeaponExports => self.innovation().map(|b| &b.weapon_exports),
            MetricId::UsExercises => self.alliances().map(|b| &b.us_exercises),
            MetricId::StrategicPartnerships => self.alliances().map(|b| &b.strategic_partnerships),
            MetricId::RegionalCooperation => self.alliances().map(|b| &b.regional_cooperation),
        }
    }

    pub fn has(&self, id: MetricId) -> bool {
        self.series(id).is_some()
    }

    /// 指定列、指定年份的值
    pub fn value(&self, id: MetricId, year: Year) -> Option<f64> {
        self.series(id).and_then(|s| s.get(year))
    }

    /// 当前存在的全部列（固定顺序）
    pub fn columns(&self) -> Vec<(MetricId, &MetricSeries)> {
        MetricId::ALL
            .iter()
            .filter_map(|id| self.series(*id).map(|s| (*id, s)))
            .collect()
    }
}
