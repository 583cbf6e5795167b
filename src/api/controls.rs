// ==========================================
// 战略防务仪表盘 - 选择控件
// ==========================================
// 职责: 分析模式 / 选项列表 / 模拟情景 / 显示开关
// 说明: 模拟情景只做展示，不影响数据
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::error::DashboardError;
use crate::config::{
    AIR_FORCE_KEY, MILITARY_INTELLIGENCE_KEY, OVERVIEW_KEY, SECURITY_SCENARIOS_KEY,
    STRATEGIC_ALLIANCES_KEY,
};
use crate::domain::types::DisplayToggles;

/// 全局视图下的分析层级
pub const OVERVIEW_OPTIONS: [&str; 8] = [
    OVERVIEW_KEY,
    "Forces de Défense Israéliennes (Tsahal)",
    AIR_FORCE_KEY,
    "Forces Terrestres",
    "Marine Israélienne",
    MILITARY_INTELLIGENCE_KEY,
    STRATEGIC_ALLIANCES_KEY,
    "Coopérations Sécuritaires",
];

/// 军种
pub const BRANCH_OPTIONS: [&str; 5] = [
    "Forces de Défense Israéliennes (Tsahal)",
    AIR_FORCE_KEY,
    "Forces Terrestres",
    "Marine Israélienne",
    MILITARY_INTELLIGENCE_KEY,
];

/// 战略项目
pub const PROGRAM_OPTIONS: [&str; 7] = [
    "Défense Anti-Missile (Dôme de Fer)",
    "Supériorité Aérienne",
    "Renseignement Électronique",
    "Guerre Cyber Offensive",
    "Forces Spéciales",
    "Armement de Précision",
    "Coopération Régionale",
];

const SCENARIO_OPTIONS: [&str; 1] = [SECURITY_SCENARIOS_KEY];

// ==========================================
// 分析模式 (Analysis Mode)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMode {
    Overview,
    ByBranch,
    StrategicPrograms,
    SecurityScenarios,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 4] = [
        AnalysisMode::Overview,
        AnalysisMode::ByBranch,
        AnalysisMode::StrategicPrograms,
        AnalysisMode::SecurityScenarios,
    ];

    /// 该模式下可选的项目
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            AnalysisMode::Overview => &OVERVIEW_OPTIONS,
            AnalysisMode::ByBranch => &BRANCH_OPTIONS,
            AnalysisMode::StrategicPrograms => &PROGRAM_OPTIONS,
            AnalysisMode::SecurityScenarios => &SCENARIO_OPTIONS,
        }
    }

    /// 默认项目（选项列表第一项）
    pub fn default_item(&self) -> &'static str {
        self.options()[0]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            AnalysisMode::Overview => "overview",
            AnalysisMode::ByBranch => "by-branch",
            AnalysisMode::StrategicPrograms => "strategic-programs",
            AnalysisMode::SecurityScenarios => "security-scenarios",
        }
    }

    pub fn label_key(&self) -> String {
        format!("modes.{}", self.slug().replace('-', "_"))
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AnalysisMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" | "vue d'ensemble israël" => Ok(AnalysisMode::Overview),
            "by-branch" | "branch" | "analyse par branche" => Ok(AnalysisMode::ByBranch),
            "strategic-programs" | "programs" | "alliances stratégiques" => {
                Ok(AnalysisMode::StrategicPrograms)
            }
            "security-scenarios" | "scenarios" | "scénarios sécuritaires" => {
                Ok(AnalysisMode::SecurityScenarios)
            }
            _ => Err(DashboardError::UnknownMode(s.to_string())),
        }
    }
}

// ==========================================
// 模拟情景 (Simulation Scenario)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulationScenario {
    #[default]
    StatusQuo,
    MajorRegionalConflict,
    NorthernEscalation,
    PreemptiveOperation,
}

impl SimulationScenario {
    pub const ALL: [SimulationScenario; 4] = [
        SimulationScenario::StatusQuo,
        SimulationScenario::MajorRegionalConflict,
        SimulationScenario::NorthernEscalation,
        SimulationScenario::PreemptiveOperation,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            SimulationScenario::StatusQuo => "status-quo",
            SimulationScenario::MajorRegionalConflict => "regional-conflict",
            SimulationScenario::NorthernEscalation => "northern-escalation",
            SimulationScenario::PreemptiveOperation => "preemptive-operation",
        }
    }

    pub fn label_key(&self) -> String {
        format!("simulation.{}", self.slug().replace('-', "_"))
    }
}

impl fmt::Display for SimulationScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SimulationScenario {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|sc| sc.slug() == needle)
            .ok_or_else(|| DashboardError::UnknownScenario(s.to_string()))
    }
}

// ==========================================
// 选择控件 (Selection Controls)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionControls {
    pub mode: AnalysisMode,
    pub item: String,
    pub scenario: SimulationScenario,
    pub toggles: DisplayToggles,
}

impl SelectionControls {
    /// 指定模式，项目取该模式默认项
    pub fn new(mode: AnalysisMode) -> Self {
        Self {
            mode,
            item: mode.default_item().to_string(),
            scenario: SimulationScenario::default(),
            toggles: DisplayToggles::default(),
        }
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = item.into();
        self
    }

    pub fn with_scenario(mut self, scenario: SimulationScenario) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn with_toggles(mut self, toggles: DisplayToggles) -> Self {
        self.toggles = toggles;
        self
    }

    /// 送入情景目录的选择键
    pub fn selection_key(&self) -> &str {
        match self.mode {
            AnalysisMode::SecurityScenarios => SECURITY_SCENARIOS_KEY,
            _ => &self.item,
        }
    }
}

impl Default for SelectionControls {
    fn default() -> Self {
        Self::new(AnalysisMode::Overview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_counts() {
        assert_eq!(AnalysisMode::Overview.options().len(), 8);
        assert_eq!(AnalysisMode::ByBranch.options().len(), 5);
        assert_eq!(AnalysisMode::StrategicPrograms.options().len(), 7);
        assert_eq!(
            AnalysisMode::SecurityScenarios.options(),
            &[SECURITY_SCENARIOS_KEY]
        );
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("by-branch".parse::<AnalysisMode>().unwrap(), AnalysisMode::ByBranch);
        assert_eq!(
            "Scénarios Sécuritaires".parse::<AnalysisMode>().unwrap(),
            AnalysisMode::SecurityScenarios
        );

        let err = "naval".parse::<AnalysisMode>().unwrap_err();
        assert!(matches!(&err, DashboardError::UnknownMode(raw) if raw == "naval"));
        assert!(err.to_string().contains("naval"));
    }

    #[test]
    fn test_scenario_parse() {
        assert_eq!(
            "northern-escalation".parse::<SimulationScenario>().unwrap(),
            SimulationScenario::NorthernEscalation
        );

        let err = " Invasion ".parse::<SimulationScenario>().unwrap_err();
        assert!(matches!(err, DashboardError::UnknownScenario(raw) if raw == " Invasion "));
    }

    #[test]
    fn test_security_scenarios_uses_fixed_key() {
        let controls =
            SelectionControls::new(AnalysisMode::SecurityScenarios).with_item("ignoré");
        assert_eq!(controls.selection_key(), SECURITY_SCENARIOS_KEY);
    }

    #[test]
    fn test_default_controls() {
        let controls = SelectionControls::default();
        assert_eq!(controls.item, OVERVIEW_KEY);
        assert_eq!(controls.scenario, SimulationScenario::StatusQuo);
    }
}
