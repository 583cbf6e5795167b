// ==========================================
// 战略防务仪表盘 - 情景目录
// ==========================================
// 职责: 选择键 → ScenarioConfig 的只读映射
// 生命周期: 进程启动时构建一次，之后只读；通过构造参数注入组装器
// 兜底: 未命中的键返回通用默认配置（静默降级，不报错）
// ==========================================

use std::collections::BTreeMap;

use crate::domain::scenario::ScenarioConfig;
use crate::domain::types::PriorityTag;

/// 全局总览
pub const OVERVIEW_KEY: &str = "Israël - Vue d'Ensemble";
/// 空军
pub const AIR_FORCE_KEY: &str = "Force Aérienne Israélienne";
/// 军事情报局
pub const MILITARY_INTELLIGENCE_KEY: &str = "Renseignement Militaire (Aman)";
/// 战略联盟
pub const STRATEGIC_ALLIANCES_KEY: &str = "Alliances Stratégiques";
/// 安全情景模式使用的固定键（目录中不存在，走兜底）
pub const SECURITY_SCENARIOS_KEY: &str = "Scénarios Sécuritaires";

/// 情景目录
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    entries: BTreeMap<String, ScenarioConfig>,
    fallback: ScenarioConfig,
}

impl ScenarioCatalog {
    /// 由条目构建目录，兜底配置为通用默认配置
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ScenarioConfig)>,
    {
        Self {
            entries: entries.into_iter().collect(),
            fallback: ScenarioConfig::generic_default(),
        }
    }

    /// 内置目录
    pub fn builtin() -> Self {
        use PriorityTag::*;

        let overview = ScenarioConfig::new("puissance_regionale_avancee")
            .with_budget(24.3)
            .with_personnel(646.5)
            .with_exercises(85.0)
            .with_priorities(&[
                MissileDefense,
                Intelligence,
                Innovation,
                Cyber,
                Alliances,
                Precision,
            ])
            .with_doctrines(&[
                "Dissuasion qualitative",
                "Défense active",
                "Frappe préemptive",
            ])
            .with_objectives("Maintien de l'avantage qualitatif et sécurité nationale");

        let air_force = ScenarioConfig::new("suprematie_aerienne_regionale")
            .with_budget(8.7)
            .with_personnel(34.0)
            .with_priorities(&[FifthGenAircraft, Drones, AirCyber, Intelligence])
            .with_capabilities(&[
                "F-35I Adir, F-16I Sufa",
                "Flotte de drones avancés",
                "Guerre électronique",
            ])
            .with_doctrines(&["Qualitative Military Edge"]);

        let intelligence = ScenarioConfig::new("excellence_renseignement")
            .with_budget(4.5)
            .with_personnel(7.0)
            .with_priorities(&[CyberIntelligence, Sigint, Humint, AiAnalysis])
            .with_capabilities(&[
                "Unit 8200",
                "Cyber-renseignement",
                "Surveillance régionale",
            ])
            .with_doctrines(&["Prévention et anticipation"]);

        let alliances = ScenarioConfig::new("cooperation_internationale")
            .with_budget(3.8)
            .with_priorities(&[UsCooperation, ArabNormalization, TechPartnerships])
            .with_projects(&["Dôme de Fer", "Arrow System", "Exercices conjoints"])
            .with_objectives("Renforcement des alliances stratégiques");

        Self::from_entries([
            (OVERVIEW_KEY.to_string(), overview),
            (AIR_FORCE_KEY.to_string(), air_force),
            (MILITARY_INTELLIGENCE_KEY.to_string(), intelligence),
            (STRATEGIC_ALLIANCES_KEY.to_string(), alliances),
        ])
    }

    /// 精确匹配查询；未命中返回兜底配置
    pub fn lookup(&self, key: &str) -> ScenarioConfig {
        match self.get(key) {
            Some(config) => config.clone(),
            None => {
                tracing::debug!(key, "情景键未命中，使用通用默认配置");
                self.fallback.clone()
            }
        }
    }

    /// 精确匹配查询（不兜底）
    pub fn get(&self, key: &str) -> Option<&ScenarioConfig> {
        self.entries.get(key)
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
