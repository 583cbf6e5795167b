// ==========================================
// 战略防务仪表盘 - 领域类型定义
// ==========================================
// 职责: 年份区间、优先级标签、显示开关等基础类型
// 红线: 年份区间为闭区间，每条序列每年恰好一个值
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// 年份（唯一自变量）
pub type Year = i32;

/// 公式基准年: 所有线性公式中的 t = year - BASELINE_YEAR
pub const BASELINE_YEAR: Year = 2000;

/// 默认年份区间起点
pub const DEFAULT_START_YEAR: Year = 2000;

/// 默认年份区间终点（含）
pub const DEFAULT_END_YEAR: Year = 2027;

/// 允许的最早年份
pub const MIN_YEAR: Year = 1900;

/// 允许的最晚年份
pub const MAX_YEAR: Year = 2200;

// ==========================================
// 年份区间 (Year Range)
// ==========================================

/// 年份区间构造失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("年份区间无效: start={start}, end={end}（须满足 1900 <= start <= end <= 2200）")]
pub struct InvalidYearRange {
    pub start: Year,
    pub end: Year,
}

/// 闭区间 [start, end]
///
/// 构造时保证 MIN_YEAR <= start <= end <= MAX_YEAR，因此区间永不为空，
/// 年份相减也不会溢出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearRange {
    start: Year,
    end: Year,
}

impl YearRange {
    /// 创建年份区间
    pub fn new(start: Year, end: Year) -> Result<Self, InvalidYearRange> {
        if start > end || start < MIN_YEAR || end > MAX_YEAR {
            return Err(InvalidYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// 标准区间 2000-2027
    pub const fn standard() -> Self {
        Self {
            start: DEFAULT_START_YEAR,
            end: DEFAULT_END_YEAR,
        }
    }

    pub fn start(&self) -> Year {
        self.start
    }

    pub fn end(&self) -> Year {
        self.end
    }

    /// 区间内年份数量
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// 区间永不为空（构造保证）
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, year: Year) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// 年份在区间内的下标
    pub fn index_of(&self, year: Year) -> Option<usize> {
        if self.contains(year) {
            Some((year - self.start) as usize)
        } else {
            None
        }
    }

    /// 区间内早于 `year` 的年份数量（onset 填充长度）
    pub fn count_before(&self, year: Year) -> usize {
        if year <= self.start {
            0
        } else if year > self.end {
            self.len()
        } else {
            (year - self.start) as usize
        }
    }

    /// 升序遍历
    pub fn iter(&self) -> RangeInclusive<Year> {
        self.start..=self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ==========================================
// 优先级标签 (Priority Tag)
// ==========================================
// 固定词表; 仅 4 个标签会触发扩展指标块
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityTag {
    MissileDefense,
    Intelligence,
    Innovation,
    Alliances,
    Cyber,
    Precision,
    // 以下为各军种目录项自带的标签，不触发扩展指标
    FifthGenAircraft,
    Drones,
    AirCyber,
    CyberIntelligence,
    Sigint,
    Humint,
    AiAnalysis,
    UsCooperation,
    ArabNormalization,
    TechPartnerships,
}

impl PriorityTag {
    /// 触发扩展指标块的标签（按扩展块顺序）
    pub const GATING: [PriorityTag; 4] = [
        PriorityTag::MissileDefense,
        PriorityTag::Intelligence,
        PriorityTag::Innovation,
        PriorityTag::Alliances,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTag::MissileDefense => "missile-defense",
            PriorityTag::Intelligence => "intelligence",
            PriorityTag::Innovation => "innovation",
            PriorityTag::Alliances => "alliances",
            PriorityTag::Cyber => "cyber",
            PriorityTag::Precision => "precision",
            PriorityTag::FifthGenAircraft => "fifth-gen-aircraft",
            PriorityTag::Drones => "drones",
            PriorityTag::AirCyber => "air-cyber",
            PriorityTag::CyberIntelligence => "cyber-intelligence",
            PriorityTag::Sigint => "sigint",
            PriorityTag::Humint => "humint",
            PriorityTag::AiAnalysis => "ai-analysis",
            PriorityTag::UsCooperation => "us-cooperation",
            PriorityTag::ArabNormalization => "arab-normalization",
            PriorityTag::TechPartnerships => "tech-partnerships",
        }
    }

    /// 是否触发扩展指标块
    pub fn is_gating(&self) -> bool {
        Self::GATING.contains(self)
    }
}

impl fmt::Display for PriorityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// 显示开关 (Display Toggles)
// ==========================================
// 4 个独立开关，分别控制可选标签页是否渲染
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayToggles {
    /// 地区背景
    pub show_regional: bool,
    /// 联盟数据库
    pub show_alliances: bool,
    /// 技术细节
    pub show_technical: bool,
    /// 威胁评估
    pub threat_assessment: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            show_regional: true,
            show_alliances: true,
            show_technical: true,
            threat_assessment: true,
        }
    }
}

// ==========================================
// 输出格式 (Output Format)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("未知输出格式: {}", other)),
        }
    }
}
