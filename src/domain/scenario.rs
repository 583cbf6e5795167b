// ==========================================
// 战略防务仪表盘 - 情景配置
// ==========================================
// 职责: 定义 ScenarioConfig（只读静态数据）
// 说明: 基线缺省时使用文档化默认值；条令/能力字段仅用于展示
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::types::PriorityTag;

/// 预算基线默认值（十亿美元）
pub const DEFAULT_BUDGET_BASE: f64 = 24.3;

/// 人员基线默认值（千人）
pub const DEFAULT_PERSONNEL_BASE: f64 = 646.5;

/// 演习次数基线默认值
pub const DEFAULT_EXERCISES_BASE: f64 = 85.0;

/// 通用兜底配置的类型标签
pub const GENERIC_KIND: &str = "branche_militaire";

/// 情景配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// 类型标签
    pub kind: String,

    /// 预算基线（十亿美元）
    #[serde(default)]
    pub budget_base: Option<f64>,

    /// 人员基线（千人）
    #[serde(default)]
    pub personnel_base: Option<f64>,

    /// 年度演习次数基线
    #[serde(default)]
    pub exercises_base: Option<f64>,

    /// 优先级标签集合
    #[serde(default)]
    pub priorities: BTreeSet<PriorityTag>,

    /// 条令（仅展示）
    #[serde(default)]
    pub doctrines: Vec<String>,

    /// 能力（仅展示）
    #[serde(default)]
    pub capabilities: Vec<String>,

    /// 项目（仅展示）
    #[serde(default)]
    pub projects: Vec<String>,

    /// 目标（仅展示）
    #[serde(default)]
    pub objectives: Option<String>,
}

impl ScenarioConfig {
    /// 创建只有类型标签的空配置
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            budget_base: None,
            personnel_base: None,
            exercises_base: None,
            priorities: BTreeSet::new(),
            doctrines: Vec::new(),
            capabilities: Vec::new(),
            projects: Vec::new(),
            objectives: None,
        }
    }

    /// 通用兜底配置: 最小基线 + 空标签集合
    pub fn generic_default() -> Self {
        Self {
            personnel_base: Some(100.0),
            exercises_base: Some(20.0),
            ..Self::new(GENERIC_KIND)
        }
    }

    pub fn budget_or_default(&self) -> f64 {
        self.budget_base.unwrap_or(DEFAULT_BUDGET_BASE)
    }

    pub fn personnel_or_default(&self) -> f64 {
        self.personnel_base.unwrap_or(DEFAULT_PERSONNEL_BASE)
    }

    pub fn exercises_or_default(&self) -> f64 {
        self.exercises_base.unwrap_or(DEFAULT_EXERCISES_BASE)
    }

    pub fn has_priority(&self, tag: PriorityTag) -> bool {
        self.priorities.contains(&tag)
    }

    /// 触发扩展块的标签（按固定顺序）
    pub fn gating_tags(&self) -> Vec<PriorityTag> {
        PriorityTag::GATING
            .into_iter()
            .filter(|tag| self.has_priority(*tag))
            .collect()
    }

    // ===== 构造辅助（目录构建使用） =====

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget_base = Some(budget);
        self
    }

    pub fn with_personnel(mut self, personnel: f64) -> Self {
        self.personnel_base = Some(personnel);
        self
    }

    pub fn with_exercises(mut self, exercises: f64) -> Self {
        self.exercises_base = Some(exercises);
        self
    }

    pub fn with_priorities(mut self, tags: &[PriorityTag]) -> Self {
        self.priorities.extend(tags.iter().copied());
        self
    }

    pub fn with_doctrines(mut self, items: &[&str]) -> Self {
        self.doctrines.extend(items.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_capabilities(mut self, items: &[&str]) -> Self {
        self.capabilities.extend(items.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_projects(mut self, items: &[&str]) -> Self {
        self.projects.extend(items.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_objectives(mut self, objectives: &str) -> Self {
        self.objectives = Some(objectives.to_string());
        self
    }
}
