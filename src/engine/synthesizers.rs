// ==========================================
// 战略防务仪表盘 - 指标合成器
// ==========================================
// 职责: 每个指标一条闭式公式，输出与年份区间等长的序列
// 输入: 年份区间 + 情景配置（仅预算/人员/演习三个基线参数）
// 红线: 纯函数，相同输入得到逐位相同的输出
// ==========================================
// 时间变量 t = year - 2000，与区间起点无关
// ==========================================

use crate::domain::metric::{MetricId, MetricSeries};
use crate::domain::scenario::ScenarioConfig;
use crate::domain::types::YearRange;
use crate::engine::formula::{EventWindow, Formula, Saturation, Segment, Step};

// ==========================================
// 基础指标公式参数
// ==========================================

/// 预算年增长率
pub const BUDGET_GROWTH: f64 = 0.035;

/// 预算历史事件窗口（第二次起义、黎巴嫩战争、铸铅行动、铁穹部署、近年冲突）
pub const BUDGET_EVENTS: [EventWindow; 5] = [
    EventWindow::closed(2000, 2005, 1.15),
    EventWindow::closed(2006, 2007, 1.20),
    EventWindow::closed(2008, 2009, 1.18),
    EventWindow::closed(2012, 2014, 1.12),
    EventWindow::open(2020, 1.25),
];

pub const PERSONNEL_GROWTH: f64 = 0.008;

pub const GDP_SHARE: Formula = Formula::Affine {
    intercept: 6.5,
    slope: 0.05,
};

/// 战备度: 92 起，按事件累计上调，封顶 98
pub const READINESS_STEPS: [Step; 3] = [
    Step {
        from: 2006,
        delta: 3.0,
    },
    Step {
        from: 2014,
        delta: 2.0,
    },
    Step {
        from: 2020,
        delta: 3.0,
    },
];

pub const READINESS: Formula = Formula::Stepped {
    base: 92.0,
    steps: &READINESS_STEPS,
    cap: 98.0,
};

pub const DETERRENCE_STEPS: [Step; 3] = [
    Step {
        from: 2007,
        delta: 3.0,
    },
    Step {
        from: 2010,
        delta: 4.0,
    },
    Step {
        from: 2020,
        delta: 3.0,
    },
];

pub const DETERRENCE: Formula = Formula::Stepped {
    base: 88.0,
    steps: &DETERRENCE_STEPS,
    cap: 95.0,
};

pub const MOBILIZATION_DAYS: Formula = Formula::Floored {
    intercept: 48.0,
    slope: 1.2,
    floor: 24.0,
};

/// 联合演习: 2005 前恒定 15；2005-2009 每年 +1；2010 起每年 +2
pub const JOINT_EXERCISE_SEGMENTS: [Segment; 3] = [
    Segment {
        until: Some(2005),
        intercept: 15.0,
        slope: 0.0,
        anchor: 2005,
    },
    Segment {
        until: Some(2010),
        intercept: 25.0,
        slope: 1.0,
        anchor: 2005,
    },
    Segment {
        until: None,
        intercept: 35.0,
        slope: 2.0,
        anchor: 2010,
    },
];

pub const JOINT_EXERCISES: Formula = Formula::Piecewise {
    segments: &JOINT_EXERCISE_SEGMENTS,
};

pub const TECH_DEVELOPMENT: Formula = Formula::Saturating(Saturation::new(85.0, 1.8, 96.0));
pub const AIR_CAPACITY: Formula = Formula::Saturating(Saturation::new(90.0, 1.2, 97.0));
pub const AIR_DEFENSE_COVERAGE: Formula = Formula::Saturating(Saturation::new(75.0, 2.0, 95.0));
pub const ALLIANCE_COOPERATION: Formula = Formula::Saturating(Saturation::new(70.0, 1.5, 90.0));
pub const CYBER_CAPABILITIES: Formula = Formula::Saturating(Saturation::new(90.0, 1.5, 98.0));
pub const WEAPON_PRODUCTION: Formula = Formula::Saturating(Saturation::new(75.0, 1.8, 92.0));

// ==========================================
// 扩展块公式参数
// ==========================================

/// 铁穹部署年份
pub const IRON_DOME_ONSET: i32 = 2011;

pub const INTERCEPTION_RATE: Formula = Formula::Onset {
    onset: IRON_DOME_ONSET,
    fill: 0.0,
    growth: Saturation::anchored(75.0, 2.5, 95.0, IRON_DOME_ONSET),
};
pub const MISSILE_DEFENSE_COVERAGE: Formula =
    Formula::Saturating(Saturation::new(60.0, 2.0, 90.0));
pub const DEPLOYED_AD_SYSTEMS: Formula = Formula::Saturating(Saturation::new(5.0, 0.8, 25.0));

pub const SIGINT: Formula = Formula::Saturating(Saturation::new(85.0, 1.5, 96.0));
pub const CYBER_OPERATIONS: Formula = Formula::Saturating(Saturation::new(80.0, 2.0, 95.0));
pub const EARLY_WARNING: Formula = Formula::Saturating(Saturation::new(75.0, 1.5, 92.0));

pub const DEFENSE_RESEARCH: Formula = Formula::Saturating(Saturation::new(88.0, 1.2, 96.0));
pub const EMERGING_TECH: Formula = Formula::Saturating(Saturation::new(85.0, 1.8, 95.0));
pub const WEAPON_EXPORTS: Formula = Formula::Saturating(Saturation::new(3.0, 0.5, 12.5));

/// 亚伯拉罕协议年份
pub const ABRAHAM_ACCORDS_ONSET: i32 = 2020;

pub const US_EXERCISES: Formula = Formula::Saturating(Saturation::new(20.0, 1.5, 45.0));
pub const STRATEGIC_PARTNERSHIPS: Formula = Formula::Saturating(Saturation::new(50.0, 2.0, 85.0));
pub const REGIONAL_COOPERATION: Formula = Formula::Onset {
    onset: ABRAHAM_ACCORDS_ONSET,
    fill: 10.0,
    growth: Saturation::anchored(20.0, 3.0, 65.0, ABRAHAM_ACCORDS_ONSET),
};

// ==========================================
// 公式分派
// ==========================================

/// 指标 → 公式；只有预算/人员/演习依赖情景基线
pub fn formula_for(metric: MetricId, config: &ScenarioConfig) -> Formula {
    match metric {
        MetricId::Budget => Formula::EventScaled {
            base: config.budget_or_default(),
            rate: BUDGET_GROWTH,
            events: &BUDGET_EVENTS,
        },
        MetricId::Personnel => Formula::Linear {
            base: config.personnel_or_default(),
            rate: PERSONNEL_GROWTH,
        },
        MetricId::GdpShare => GDP_SHARE,
        MetricId::Exercises => Formula::Seasonal {
            base: config.exercises_or_default(),
            slope: 3.0,
            amplitude: 5.0,
            period: 4.0,
        },
        MetricId::Readiness => READINESS,
        MetricId::Deterrence => DETERRENCE,
        MetricId::MobilizationDays => MOBILIZATION_DAYS,
        MetricId::JointExercises => JOINT_EXERCISES,
        MetricId::TechDevelopment => TECH_DEVELOPMENT,
        MetricId::AirCapacity => AIR_CAPACITY,
        MetricId::AirDefenseCoverage => AIR_DEFENSE_COVERAGE,
        MetricId::AllianceCooperation => ALLIANCE_COOPERATION,
        MetricId::CyberCapabilities => CYBER_CAPABILITIES,
        MetricId::WeaponProduction => WEAPON_PRODUCTION,
        MetricId::InterceptionRate => INTERCEPTION_RATE,
        MetricId::MissileDefenseCoverage => MISSILE_DEFENSE_COVERAGE,
        MetricId::DeployedAdSystems => DEPLOYED_AD_SYSTEMS,
        MetricId::Sigint => SIGINT,
        MetricId::CyberOperations => CYBER_OPERATIONS,
        MetricId::EarlyWarning => EARLY_WARNING,
        MetricId::DefenseResearch => DEFENSE_RESEARCH,
        MetricId::EmergingTech => EMERGING_TECH,
        MetricId::WeaponExports => WEAPON_EXPORTS,
        MetricId::UsExercises => US_EXERCISES,
        MetricId::StrategicPartnerships => STRATEGIC_PARTNERSHIPS,
        MetricId::RegionalCooperation => REGIONAL_COOPERATION,
    }
}

/// 合成单个指标序列
pub fn synthesize(metric: MetricId, years: &YearRange, config: &ScenarioConfig) -> MetricSeries {
    fixed(formula_for(metric, config), years)
}

fn fixed(formula: Formula, years: &YearRange) -> MetricSeries {
    crate::perf::record_series();
    formula.synthesize(years)
}

// ==========================================
// 具名合成器
// ==========================================

/// 国防预算（十亿美元）
pub fn budget(years: &YearRange, config: &ScenarioConfig) -> MetricSeries {
    synthesize(MetricId::Budget, years, config)
}

/// 现役人员（千人）
pub fn personnel(years: &YearRange, config: &ScenarioConfig) -> MetricSeries {
    synthesize(MetricId::Personnel, years, config)
}

/// 军费占 GDP 比例
pub fn gdp_share(years: &YearRange) -> MetricSeries {
    fixed(GDP_SHARE, years)
}

/// 年度军事演习次数（四年周期波动）
pub fn exercises(years: &YearRange, config: &ScenarioConfig) -> MetricSeries {
    synthesize(MetricId::Exercises, years, config)
}

pub fn readiness(years: &YearRange) -> MetricSeries {
    fixed(READINESS, years)
}

pub fn deterrence(years: &YearRange) -> MetricSeries {
    fixed(DETERRENCE, years)
}

pub fn mobilization_days(years: &YearRange) -> MetricSeries {
    fixed(MOBILIZATION_DAYS, years)
}

pub fn joint_exercises(years: &YearRange) -> MetricSeries {
    fixed(JOINT_EXERCISES, years)
}

pub fn tech_development(years: &YearRange) -> MetricSeries {
    fixed(TECH_DEVELOPMENT, years)
}

pub fn air_capacity(years: &YearRange) -> MetricSeries {
    fixed(AIR_CAPACITY, years)
}

pub fn air_defense_coverage(years: &YearRange) -> MetricSeries {
    fixed(AIR_DEFENSE_COVERAGE, years)
}

pub fn alliance_cooperation(years: &YearRange) -> MetricSeries {
    fixed(ALLIANCE_COOPERATION, years)
}

pub fn cyber_capabilities(years: &YearRange) -> MetricSeries {
    fixed(CYBER_CAPABILITIES, years)
}

pub fn weapon_production(years: &YearRange) -> MetricSeries {
    fixed(WEAPON_PRODUCTION, years)
}

/// 铁穹拦截率: 部署前为 0
pub fn interception_rate(years: &YearRange) -> MetricSeries {
    fixed(INTERCEPTION_RATE, years)
}

pub fn missile_defense_coverage(years: &YearRange) -> MetricSeries {
    fixed(MISSILE_DEFENSE_COVERAGE, years)
}

pub fn deployed_ad_systems(years: &YearRange) -> MetricSeries {
    fixed(DEPLOYED_AD_SYSTEMS, years)
}

pub fn sigint(years: &YearRange) -> MetricSeries {
    fixed(SIGINT, years)
}

pub fn cyber_operations(years: &YearRange) -> MetricSeries {
    fixed(CYBER_OPERATIONS, years)
}

pub fn early_warning(years: &YearRange) -> MetricSeries {
    fixed(EARLY_WARNING, years)
}

pub fn defense_research(years: &YearRange) -> MetricSeries {
    fixed(DEFENSE_RESEARCH, years)
}

pub fn emerging_tech(years: &YearRange) -> MetricSeries {
    fixed(EMERGING_TECH, years)
}

/// 武器出口（十亿美元）
pub fn weapon_exports(years: &YearRange) -> MetricSeries {
    fixed(WEAPON_EXPORTS, years)
}

pub fn us_exercises(years: &YearRange) -> MetricSeries {
    fixed(US_EXERCISES, years)
}

pub fn strategic_partnerships(years: &YearRange) -> MetricSeries {
    fixed(STRATEGIC_PARTNERSHIPS, years)
}

/// 地区合作: 2020 年前为 10
pub fn regional_cooperation(years: &YearRange) -> MetricSeries {
    fixed(REGIONAL_COOPERATION, years)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_budget_uses_first_matching_window() {
        let years = YearRange::standard();
        let config = ScenarioConfig::new("x").with_budget(10.0);
        let series = budget(&years, &config);
        assert!(close(series.get(2000).unwrap(), 10.0 * 1.15));
        assert!(close(series.get(2006).unwrap(), 10.0 * 1.21 * 1.20));
        assert!(close(series.get(2010).unwrap(), 10.0 * 1.35));
        assert!(close(series.get(2020).unwrap(), 10.0 * 1.7 * 1.25));
    }

    #[test]
    fn test_readiness_and_deterrence_caps() {
        let years = YearRange::standard();
        let r = readiness(&years);
        assert_eq!(r.get(2005), Some(92.0));
        assert_eq!(r.get(2006), Some(95.0));
        assert_eq!(r.get(2014), Some(97.0));
        assert_eq!(r.get(2020), Some(98.0));

        let d = deterrence(&years);
        assert_eq!(d.get(2006), Some(88.0));
        assert_eq!(d.get(2007), Some(91.0));
        assert_eq!(d.get(2010), Some(95.0));
        assert_eq!(d.get(2020), Some(95.0));
    }

    #[test]
    fn test_joint_exercise_segments() {
        let years = YearRange::standard();
        let j = joint_exercises(&years);
        assert_eq!(j.get(2004), Some(15.0));
        assert_eq!(j.get(2005), Some(25.0));
        assert_eq!(j.get(2009), Some(29.0));
        assert_eq!(j.get(2010), Some(35.0));
        assert_eq!(j.get(2015), Some(45.0));
    }

    #[test]
    fn test_regional_cooperation_fill() {
        let years = YearRange::standard();
        let r = regional_cooperation(&years);
        assert_eq!(r.get(2019), Some(10.0));
        assert_eq!(r.get(2020), Some(20.0));
        assert_eq!(r.get(2027), Some(41.0));
    }

    #[test]
    fn test_generic_defaults_apply() {
        let years = YearRange::standard();
        let generic = ScenarioConfig::generic_default();
        assert!(close(
            personnel(&years, &generic).get(2000).unwrap(),
            generic.personnel_or_default()
        ));
        assert!(close(
            exercises(&years, &generic).get(2000).unwrap(),
            generic.exercises_or_default()
        ));
    }

    #[test]
    fn test_every_metric_has_full_length() {
        let years = YearRange::new(2003, 2012).unwrap();
        let config = ScenarioConfig::generic_default();
        for metric in MetricId::ALL {
            assert_eq!(synthesize(metric, &years, &config).len(), 10, "{}", metric);
        }
    }
}
