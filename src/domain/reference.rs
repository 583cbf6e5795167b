// ==========================================
// 战略防务仪表盘 - 静态参考数据
// ==========================================
// 职责: 展示层使用的小型分类表（军种能力、联盟项目、威胁矩阵等）
// 说明: 纯静态数据，不参与指标合成
// ==========================================

use serde::{Deserialize, Serialize};

/// 预备役人数（千人，指标卡展示用）
pub const RESERVISTS_THOUSANDS: f64 = 465.0;

/// 美国年度军援（十亿美元，指标卡展示用）
pub const US_AID_BILLIONS: f64 = 3.8;

// ==========================================
// 军种能力 (Branch Capability)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BranchCapability {
    pub name: &'static str,
    /// 十亿美元
    pub budget: f64,
    /// 千人
    pub personnel: f64,
}

const fn branch(name: &'static str, budget: f64, personnel: f64) -> BranchCapability {
    BranchCapability {
        name,
        budget,
        personnel,
    }
}

pub fn branch_capabilities() -> Vec<BranchCapability> {
    vec![
        branch("Forces de Défense Israéliennes (Tsahal)", 24.3, 646.5),
        branch("Force Aérienne Israélienne", 8.7, 34.0),
        branch("Forces Terrestres", 6.2, 133.0),
        branch("Marine Israélienne", 2.8, 9.5),
        branch("Renseignement Militaire (Aman)", 4.5, 7.0),
    ]
}

// ==========================================
// 联盟项目 (Alliance Project)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllianceProject {
    pub name: &'static str,
    pub countries: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
    /// 项目附加属性（键, 值）
    pub attributes: Vec<(&'static str, &'static str)>,
}

impl AllianceProject {
    /// 详情字段: 依次取 financement / interceptions / portee，均缺失时为 "N/A"
    pub fn details(&self) -> &'static str {
        ["financement", "interceptions", "portee"]
            .iter()
            .find_map(|key| {
                self.attributes
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| *v)
            })
            .unwrap_or("N/A")
    }
}

pub fn alliance_projects() -> Vec<AllianceProject> {
    vec![
        AllianceProject {
            name: "Coopération USA-Israël",
            countries: "États-Unis",
            kind: "Soutien militaire",
            status: "Actif",
            attributes: vec![("financement", "3.8 Md$/an")],
        },
        AllianceProject {
            name: "Dôme de Fer",
            countries: "Israël/USA",
            kind: "Défense anti-missile",
            status: "Opérationnel",
            attributes: vec![("interceptions", "90%+")],
        },
        AllianceProject {
            name: "Arrow System",
            countries: "Israël/USA",
            kind: "Defense missile balistique",
            status: "Opérationnel",
            attributes: vec![("portee", "Haute altitude")],
        },
        AllianceProject {
            name: "Exercice Juniper Cobra",
            countries: "USA/Israël",
            kind: "Exercice conjoint",
            status: "Biannuel",
            attributes: vec![("effectifs", "5000+")],
        },
        AllianceProject {
            name: "Accords d'Abraham",
            countries: "EAU/Bahreïn/Maroc/Soudan",
            kind: "Normalisation",
            status: "Actif",
            attributes: vec![("domaines", "Sécurité, Économie")],
        },
        AllianceProject {
            name: "Coopération Grèce-Chypre",
            countries: "Grèce/Chypre",
            kind: "Partage gaz/security",
            status: "Renforcement",
            attributes: vec![("exercices", "Trident")],
        },
    ]
}

// ==========================================
// 分类参考表 (Categorical Table)
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceTableId {
    RegionalThreats,
    DefenseSystems,
    BranchBudgets,
    ComparativeAdvantages,
    WeaponSystems,
    TechSuperiority,
    AllianceNetwork,
    FutureCooperation,
    ThreatMatrix,
    ResponseCapabilities,
}

/// 数值列；key 同时是 i18n 标签键
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericColumn {
    pub key: &'static str,
    pub values: Vec<f64>,
}

/// 小型分类表: 行标签 + 可选分组 + 若干数值列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalTable {
    pub id: ReferenceTableId,
    pub labels: Vec<String>,
    /// 与 labels 等长；无分组时等于 labels
    pub groups: Vec<String>,
    pub columns: Vec<NumericColumn>,
}

impl CategoricalTable {
    fn new(id: ReferenceTableId, labels: &[&str]) -> Self {
        let labels: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        Self {
            id,
            groups: labels.clone(),
            labels,
            columns: Vec::new(),
        }
    }

    fn with_groups(mut self, groups: &[&str]) -> Self {
        self.groups = groups.iter().map(|s| s.to_string()).collect();
        self
    }

    fn with_column(mut self, key: &'static str, values: &[f64]) -> Self {
        self.columns.push(NumericColumn {
            key,
            values: values.to_vec(),
        });
        self
    }

    pub fn rows(&self) -> usize {
        self.labels.len()
    }

    pub fn column(&self, key: &str) -> Option<&NumericColumn> {
        self.columns.iter().find(|c| c.key == key)
    }
}

/// 加载参考表
pub fn reference_table(id: ReferenceTableId) -> CategoricalTable {
    use ReferenceTableId::*;

    match id {
        RegionalThreats => CategoricalTable::new(
            id,
            &[
                "Iran Nucléaire",
                "Hezbollah (Roquettes)",
                "Hamas (Gaza)",
                "Syrie (Conventionnel)",
                "Cyber Attaques",
                "Terrorisme",
            ],
        )
        .with_column("columns.distance_km", &[1000.0, 120.0, 60.0, 70.0, 0.0, 0.0])
        .with_column("columns.enemy_capability", &[9.0, 8.0, 7.0, 6.0, 9.0, 6.0])
        .with_column("columns.alert_level", &[9.0, 8.0, 7.0, 5.0, 8.0, 6.0]),

        DefenseSystems => CategoricalTable::new(
            id,
            &["Dôme de Fer", "Arrow 2/3", "David's Sling", "Barrière Gaza", "Barrière Liban"],
        )
        .with_column("columns.range_km", &[70.0, 100.0, 300.0, 0.0, 0.0])
        .with_column("columns.interception_rate", &[90.0, 90.0, 90.0, 95.0, 95.0])
        .with_column("columns.deployment_year", &[2011.0, 2000.0, 2017.0, 2021.0, 2018.0]),

        BranchBudgets => {
            let branches = branch_capabilities();
            let labels: Vec<&str> = branches.iter().map(|b| b.name).collect();
            let budgets: Vec<f64> = branches.iter().map(|b| b.budget).collect();
            let personnel: Vec<f64> = branches.iter().map(|b| b.personnel).collect();
            CategoricalTable::new(id, &labels)
                .with_column("columns.budget_bn", &budgets)
                .with_column("columns.personnel_k", &personnel)
        }

        ComparativeAdvantages => CategoricalTable::new(
            id,
            &[
                "Renseignement Cyber",
                "Force Aérienne",
                "Défense Anti-Missile",
                "Forces Spéciales",
                "Guerre Électronique",
                "Drones",
                "Précision",
            ],
        )
        .with_column("columns.score_israel", &[10.0, 9.0, 10.0, 9.0, 10.0, 9.0, 10.0])
        .with_column("columns.score_neighbors", &[4.0, 6.0, 3.0, 5.0, 4.0, 5.0, 4.0]),

        WeaponSystems => CategoricalTable::new(
            id,
            &[
                "F-35I Adir",
                "Dôme de Fer",
                "Arrow 3",
                "Merkava IV",
                "Classe Sa'ar 6",
                "Système Trophy",
                "Eitan APC",
            ],
        )
        .with_groups(&["Air Force", "Défense", "Défense", "Armée", "Marine", "Armée", "Armée"])
        .with_column("columns.range_power", &[2200.0, 70.0, 2400.0, 0.0, 0.0, 0.0, 0.0]),

        TechSuperiority => CategoricalTable::new(
            id,
            &[
                "Défense Anti-Missile",
                "Drones de Combat",
                "Guerre Cyber",
                "Renseignement SIGINT",
                "Guerre Électronique",
                "Armes de Précision",
            ],
        )
        .with_column("columns.lead_years", &[15.0, 10.0, 8.0, 12.0, 10.0, 8.0])
        .with_column("columns.exports_bn", &[2.5, 1.2, 1.8, 0.9, 0.7, 3.2]),

        AllianceNetwork => CategoricalTable::new(
            id,
            &[
                "USA-Israël",
                "Accords Abraham (EAU)",
                "Accords Abraham (Bahreïn)",
                "Grèce-Israël",
                "Chypre-Israël",
                "Coopération Jordanienne",
                "Coopération Égyptienne",
                "Inde-Israël",
            ],
        )
        .with_groups(&[
            "Militaire",
            "Économie/Sécurité",
            "Économie/Sécurité",
            "Énergie/Sécurité",
            "Énergie/Sécurité",
            "Sécurité/Eau",
            "Sécurité/Gaz",
            "Militaire/Techno",
        ])
        .with_column(
            "columns.start_year",
            &[1948.0, 2020.0, 2020.0, 2010.0, 2010.0, 1994.0, 1979.0, 1992.0],
        )
        .with_column(
            "columns.cooperation_level",
            &[10.0, 7.0, 6.0, 8.0, 8.0, 6.0, 5.0, 8.0],
        ),

        FutureCooperation => CategoricalTable::new(
            id,
            &[
                "Défense Anti-Missile Régionale",
                "Guerre Cyber Collective",
                "Surveillance Spatiale",
                "Guerre Électronique",
                "Renseignement Artificiel",
                "Exercices Conjoints Avancés",
            ],
        )
        .with_column("columns.potential", &[8.0, 9.0, 7.0, 8.0, 9.0, 8.0]),

        ThreatMatrix => CategoricalTable::new(
            id,
            &[
                "Iran Nucléaire",
                "Hezbollah (Liban)",
                "Hamas (Gaza)",
                "Syrie (Conventionnel)",
                "Guerre Cyber Iranienne",
                "Terrorisme Transfrontalier",
                "Crise Jérusalem",
                "Prolifération Missiles",
            ],
        )
        .with_column("columns.probability", &[0.7, 0.8, 0.9, 0.6, 0.8, 0.7, 0.5, 0.8])
        .with_column("columns.impact", &[0.9, 0.8, 0.7, 0.6, 0.7, 0.6, 0.8, 0.7])
        .with_column("columns.preparedness", &[0.9, 0.8, 0.9, 0.7, 0.8, 0.9, 0.6, 0.8]),

        ResponseCapabilities => CategoricalTable::new(
            id,
            &[
                "Frappe Iranienne",
                "Attaque Hezbollah",
                "Escalade Gaza",
                "Conflit Syrie",
                "Cyber Attaque Majeure",
                "Crise Multifront",
            ],
        )
        .with_column("columns.air_force", &[0.9, 0.8, 0.9, 0.8, 0.3, 0.8])
        .with_column("columns.missile_defense", &[0.8, 0.9, 0.9, 0.7, 0.2, 0.8])
        .with_column("columns.cybersecurity", &[0.7, 0.6, 0.5, 0.4, 0.9, 0.6])
        .with_column("columns.ground_forces", &[0.4, 0.7, 0.6, 0.5, 0.2, 0.7]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TABLES: [ReferenceTableId; 10] = [
        ReferenceTableId::RegionalThreats,
        ReferenceTableId::DefenseSystems,
        ReferenceTableId::BranchBudgets,
        ReferenceTableId::ComparativeAdvantages,
        ReferenceTableId::WeaponSystems,
        ReferenceTableId::TechSuperiority,
        ReferenceTableId::AllianceNetwork,
        ReferenceTableId::FutureCooperation,
        ReferenceTableId::ThreatMatrix,
        ReferenceTableId::ResponseCapabilities,
    ];

    #[test]
    fn test_tables_are_rectangular() {
        for id in ALL_TABLES {
            let table = reference_table(id);
            assert_eq!(table.groups.len(), table.rows(), "{:?} 分组长度不一致", id);
            for column in &table.columns {
                assert_eq!(
                    column.values.len(),
                    table.rows(),
                    "{:?}.{} 列长度不一致",
                    id,
                    column.key
                );
            }
        }
    }

    #[test]
    fn test_branch_budget_table_follows_capabilities() {
        let table = reference_table(ReferenceTableId::BranchBudgets);
        assert_eq!(table.rows(), 5);
        let budgets = table.column("columns.budget_bn").unwrap();
        assert_eq!(budgets.values[1], 8.7);
    }

    #[test]
    fn test_alliance_project_details_precedence() {
        let projects = alliance_projects();
        let details: Vec<_> = projects.iter().map(|p| p.details()).collect();
        assert_eq!(
            details,
            vec!["3.8 Md$/an", "90%+", "Haute altitude", "N/A", "N/A", "N/A"]
        );
    }
}
