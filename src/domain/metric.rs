// ==========================================
// 战略防务仪表盘 - 指标标识与指标序列
// ==========================================
// 职责: 定义全部指标列 (MetricId) 与按年序列 (MetricSeries)
// 红线: 序列与年份区间一一对应，无缺口、无重复
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::types::{PriorityTag, Year, YearRange};

// ==========================================
// 指标单位
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricUnit {
    /// 十亿美元
    BillionUsd,
    /// 千人
    Thousands,
    /// 百分比 (0-100)
    Percent,
    /// 次数/数量
    Count,
    /// 天
    Days,
}

impl MetricUnit {
    /// i18n 标签键
    pub fn label_key(&self) -> &'static str {
        match self {
            MetricUnit::BillionUsd => "units.billion_usd",
            MetricUnit::Thousands => "units.thousands",
            MetricUnit::Percent => "units.percent",
            MetricUnit::Count => "units.count",
            MetricUnit::Days => "units.days",
        }
    }
}

// ==========================================
// 指标标识 (Metric Id)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    // 基础指标（始终存在）
    Budget,
    Personnel,
    GdpShare,
    Exercises,
    Readiness,
    Deterrence,
    MobilizationDays,
    JointExercises,
    TechDevelopment,
    AirCapacity,
    AirDefenseCoverage,
    AllianceCooperation,
    CyberCapabilities,
    WeaponProduction,
    // 反导扩展
    InterceptionRate,
    MissileDefenseCoverage,
    DeployedAdSystems,
    // 情报扩展
    Sigint,
    CyberOperations,
    EarlyWarning,
    // 创新扩展
    DefenseResearch,
    EmergingTech,
    WeaponExports,
    // 联盟扩展
    UsExercises,
    StrategicPartnerships,
    RegionalCooperation,
}

impl MetricId {
    /// 基础指标（列顺序即导出顺序）
    pub const BASE: [MetricId; 14] = [
        MetricId::Budget,
        MetricId::Personnel,
        MetricId::GdpShare,
        MetricId::Exercises,
        MetricId::Readiness,
        MetricId::Deterrence,
        MetricId::MobilizationDays,
        MetricId::JointExercises,
        MetricId::TechDevelopment,
        MetricId::AirCapacity,
        MetricId::AirDefenseCoverage,
        MetricId::AllianceCooperation,
        MetricId::CyberCapabilities,
        MetricId::WeaponProduction,
    ];

    /// 全部指标
    pub const ALL: [MetricId; 26] = [
        MetricId::Budget,
        MetricId::Personnel,
        MetricId::GdpShare,
        MetricId::Exercises,
        MetricId::Readiness,
        MetricId::Deterrence,
        MetricId::MobilizationDays,
        MetricId::JointExercises,
        MetricId::TechDevelopment,
        MetricId::AirCapacity,
        MetricId::AirDefenseCoverage,
        MetricId::AllianceCooperation,
        MetricId::CyberCapabilities,
        MetricId::WeaponProduction,
        MetricId::InterceptionRate,
        MetricId::MissileDefenseCoverage,
        MetricId::DeployedAdSystems,
        MetricId::Sigint,
        MetricId::CyberOperations,
        MetricId::EarlyWarning,
        MetricId::DefenseResearch,
        MetricId::EmergingTech,
        MetricId::WeaponExports,
        MetricId::UsExercises,
        MetricId::StrategicPartnerships,
        MetricId::RegionalCooperation,
    ];

    /// 导出列名（CSV 表头）
    pub fn column_name(&self) -> &'static str {
        match self {
            MetricId::Budget => "Budget_Defense_Mds",
            MetricId::Personnel => "Personnel_Milliers",
            MetricId::GdpShare => "PIB_Militaire_Pourcent",
            MetricId::Exercises => "Exercices_Militaires",
            MetricId::Readiness => "Readiness_Operative",
            MetricId::Deterrence => "Capacite_Dissuasion",
            MetricId::MobilizationDays => "Temps_Mobilisation_Jours",
            MetricId::JointExercises => "Exercices_Conjoints",
            MetricId::TechDevelopment => "Developpement_Technologique",
            MetricId::AirCapacity => "Capacite_Aerienne",
            MetricId::AirDefenseCoverage => "Couverture_AD",
            MetricId::AllianceCooperation => "Cooperation_Alliances",
            MetricId::CyberCapabilities => "Cyber_Capabilities",
            MetricId::WeaponProduction => "Production_Armements",
            MetricId::InterceptionRate => "Interceptions_Dome_Fer",
            MetricId::MissileDefenseCoverage => "Couverture_Defense_Missile",
            MetricId::DeployedAdSystems => "Systemes_AD_Deployes",
            MetricId::Sigint => "Capacites_SIGINT",
            MetricId::CyberOperations => "Operations_Cyber",
            MetricId::EarlyWarning => "Alertes_Prevention",
            MetricId::DefenseResearch => "Recherche_Defense",
            MetricId::EmergingTech => "Technologies_Emergentes",
            MetricId::WeaponExports => "Exportations_Armes",
            MetricId::UsExercises => "Exercices_USA",
            MetricId::StrategicPartnerships => "Partenariats_Strategiques",
            MetricId::RegionalCooperation => "Cooperation_Regionale",
        }
    }

    /// i18n 标签键
    pub fn label_key(&self) -> String {
        format!("metrics.{}", self.as_snake())
    }

    fn as_snake(&self) -> &'static str {
        match self {
            MetricId::Budget => "budget",
            MetricId::Personnel => "personnel",
            MetricId::GdpShare => "gdp_share",
            MetricId::Exercises => "exercises",
            MetricId::Readiness => "readiness",
            MetricId::Deterrence => "deterrence",
            MetricId::MobilizationDays => "mobilization_days",
            MetricId::JointExercises => "joint_exercises",
            MetricId::TechDevelopment => "tech_development",
            MetricId::AirCapacity => "air_capacity",
            MetricId::AirDefenseCoverage => "air_defense_coverage",
            MetricId::AllianceCooperation => "alliance_cooperation",
            MetricId::CyberCapabilities => "cyber_capabilities",
            MetricId::WeaponProduction => "weapon_production",
            MetricId::InterceptionRate => "interception_rate",
            MetricId::MissileDefenseCoverage => "missile_defense_coverage",
            MetricId::DeployedAdSystems => "deployed_ad_systems",
            MetricId::Sigint => "sigint",
            MetricId::CyberOperations => "cyber_operations",
            MetricId::EarlyWarning => "early_warning",
            MetricId::DefenseResearch => "defense_research",
            MetricId::EmergingTech => "emerging_tech",
            MetricId::WeaponExports => "weapon_exports",
            MetricId::UsExercises => "us_exercises",
            MetricId::StrategicPartnerships => "strategic_partnerships",
            MetricId::RegionalCooperation => "regional_cooperation",
        }
    }

    /// 触发该指标的优先级标签（基础指标返回 None）
    pub fn gate(&self) -> Option<PriorityTag> {
        match self {
            MetricId::InterceptionRate
            | MetricId::MissileDefenseCoverage
            | MetricId::DeployedAdSystems => Some(PriorityTag::MissileDefense),
            MetricId::Sigint | MetricId::CyberOperations | MetricId::EarlyWarning => {
                Some(PriorityTag::Intelligence)
            }
            MetricId::DefenseResearch | MetricId::EmergingTech | MetricId::WeaponExports => {
                Some(PriorityTag::Innovation)
            }
            MetricId::UsExercises
            | MetricId::StrategicPartnerships
            | MetricId::RegionalCooperation => Some(PriorityTag::Alliances),
            _ => None,
        }
    }

    pub fn unit(&self) -> MetricUnit {
        match self {
            MetricId::Budget | MetricId::WeaponExports => MetricUnit::BillionUsd,
            MetricId::Personnel => MetricUnit::Thousands,
            MetricId::MobilizationDays => MetricUnit::Days,
            MetricId::Exercises
            | MetricId::JointExercises
            | MetricId::DeployedAdSystems
            | MetricId::UsExercises => MetricUnit::Count,
            _ => MetricUnit::Percent,
        }
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ==========================================
// 指标序列 (Metric Series)
// ==========================================

/// 一条按年升序的指标序列
///
/// 只能由 `from_fn` / `from_values` 构造，长度恒等于年份区间长度。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    start: Year,
    values: Vec<f64>,
}

impl MetricSeries {
    /// 由已按年升序排好的值构造；长度不符视为编程错误
    pub(crate) fn from_values(years: &YearRange, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            years.len(),
            "序列长度 {} 与年份区间 {} 不一致",
            values.len(),
            years
        );
        Self {
            start: years.start(),
            values,
        }
    }

    /// 对区间内每一年求值
    pub fn from_fn<F>(years: &YearRange, f: F) -> Self
    where
        F: FnMut(Year) -> f64,
    {
        Self {
            start: years.start(),
            values: years.iter().map(f).collect(),
        }
    }

    pub fn start(&self) -> Year {
        self.start
    }

    pub fn end(&self) -> Year {
        self.start + self.values.len() as Year - 1
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// 指定年份的值
    pub fn get(&self, year: Year) -> Option<f64> {
        if year < self.start {
            return None;
        }
        self.values.get((year - self.start) as usize).copied()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// (年份, 值) 升序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Year, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(i, v)| (self.start + i as Year, *v))
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names_unique() {
        let mut names: Vec<_> = MetricId::ALL.iter().map(|m| m.column_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), MetricId::ALL.len());
    }

    #[test]
    fn test_base_metrics_are_ungated() {
        for metric in MetricId::BASE {
            assert!(metric.gate().is_none(), "{} 不应有标签门控", metric);
        }
    }

    #[test]
    fn test_each_gating_tag_owns_three_metrics() {
        for tag in PriorityTag::GATING {
            let count = MetricId::ALL.iter().filter(|m| m.gate() == Some(tag)).count();
            assert_eq!(count, 3, "标签 {} 应门控 3 个指标", tag);
        }
    }

    #[test]
    fn test_series_from_fn_covers_range() {
        let years = YearRange::new(2005, 2010).unwrap();
        let series = MetricSeries::from_fn(&years, |y| (y - 2000) as f64);
        assert_eq!(series.len(), 6);
        assert_eq!(series.start(), 2005);
        assert_eq!(series.end(), 2010);
        assert_eq!(series.get(2005), Some(5.0));
        assert_eq!(series.get(2010), Some(10.0));
        assert_eq!(series.get(2004), None);
        assert_eq!(series.get(2011), None);
    }

    #[test]
    fn test_series_iter_ascending() {
        let years = YearRange::new(2000, 2003).unwrap();
        let series = MetricSeries::from_fn(&years, |y| y as f64);
        let collected: Vec<_> = series.iter().map(|(y, _)| y).collect();
        assert_eq!(collected, vec![2000, 2001, 2002, 2003]);
        assert_eq!(series.max(), Some(2003.0));
    }
}
