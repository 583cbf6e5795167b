// ==========================================
// 战略防务仪表盘 - 闭式公式
// ==========================================
// 职责: 定义指标合成使用的公式形状并逐年求值
// 形状: 线性+事件窗口 / 饱和增长 / 分段阈值 / 起始年前填充
//       以及基础指标需要的线性、下限衰减、累计台阶、季节性
// 红线: 所有公式对定义域是全函数；饱和值永不超过上限
// ==========================================

use std::f64::consts::PI;

use crate::domain::metric::MetricSeries;
use crate::domain::types::{Year, YearRange, BASELINE_YEAR};

/// t = year - 基准年
fn elapsed(year: Year, anchor: Year) -> f64 {
    (year - anchor) as f64
}

// ==========================================
// 事件窗口
// ==========================================

/// 历史事件窗口: [from, to] 内乘以 multiplier；to 为 None 表示无上界
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventWindow {
    pub from: Year,
    pub to: Option<Year>,
    pub multiplier: f64,
}

impl EventWindow {
    pub const fn closed(from: Year, to: Year, multiplier: f64) -> Self {
        Self {
            from,
            to: Some(to),
            multiplier,
        }
    }

    pub const fn open(from: Year, multiplier: f64) -> Self {
        Self {
            from,
            to: None,
            multiplier,
        }
    }

    pub fn contains(&self, year: Year) -> bool {
        year >= self.from && self.to.map_or(true, |to| year <= to)
    }
}

// ==========================================
// 饱和增长
// ==========================================

/// min(intercept + slope * (year - anchor), cap)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saturation {
    pub intercept: f64,
    pub slope: f64,
    pub cap: f64,
    pub anchor: Year,
}

impl Saturation {
    pub const fn new(intercept: f64, slope: f64, cap: f64) -> Self {
        Self {
            intercept,
            slope,
            cap,
            anchor: BASELINE_YEAR,
        }
    }

    pub const fn anchored(intercept: f64, slope: f64, cap: f64, anchor: Year) -> Self {
        Self {
            intercept,
            slope,
            cap,
            anchor,
        }
    }

    pub fn value(&self, year: Year) -> f64 {
        (self.intercept + self.slope * elapsed(year, self.anchor)).min(self.cap)
    }
}

// ==========================================
// 台阶与分段
// ==========================================

/// 自 from 年起累计加 delta
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub from: Year,
    pub delta: f64,
}

/// 分段线性: year < until 时使用 intercept + slope * (year - anchor)
///
/// until 为 None 表示最后一段。段与段之间不保证连续。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub until: Option<Year>,
    pub intercept: f64,
    pub slope: f64,
    pub anchor: Year,
}

impl Segment {
    fn applies(&self, year: Year) -> bool {
        self.until.map_or(true, |until| year < until)
    }

    fn value(&self, year: Year) -> f64 {
        self.intercept + self.slope * elapsed(year, self.anchor)
    }
}

// ==========================================
// Formula - 公式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formula {
    /// base * (1 + rate * t)
    Linear { base: f64, rate: f64 },

    /// intercept + slope * t
    Affine { intercept: f64, slope: f64 },

    /// base * (1 + rate * t) * 首个命中窗口的乘数（升序检查）
    EventScaled {
        base: f64,
        rate: f64,
        events: &'static [EventWindow],
    },

    /// min(intercept + slope * t, cap)
    Saturating(Saturation),

    /// max(intercept - slope * t, floor)
    Floored { intercept: f64, slope: f64, floor: f64 },

    /// min(base + Σ 已生效台阶, cap)
    Stepped {
        base: f64,
        steps: &'static [Step],
        cap: f64,
    },

    /// 分段阈值（首个命中段）
    Piecewise { segments: &'static [Segment] },

    /// year < onset 时取 fill，否则饱和增长
    Onset {
        onset: Year,
        fill: f64,
        growth: Saturation,
    },

    /// base + slope * t + amplitude * sin(2π t / period)
    Seasonal {
        base: f64,
        slope: f64,
        amplitude: f64,
        period: f64,
    },
}

impl Formula {
    /// 单年求值
    pub fn evaluate(&self, year: Year) -> f64 {
        let t = elapsed(year, BASELINE_YEAR);
        match *self {
            Formula::Linear { base, rate } => base * (1.0 + rate * t),
            Formula::Affine { intercept, slope } => intercept + slope * t,
            Formula::EventScaled { base, rate, events } => {
                let multiplier = events
                    .iter()
                    .find(|w| w.contains(year))
                    .map_or(1.0, |w| w.multiplier);
                base * (1.0 + rate * t) * multiplier
            }
            Formula::Saturating(sat) => sat.value(year),
            Formula::Floored {
                intercept,
                slope,
                floor,
            } => (intercept - slope * t).max(floor),
            Formula::Stepped { base, steps, cap } => {
                let raised: f64 = steps
                    .iter()
                    .filter(|s| year >= s.from)
                    .map(|s| s.delta)
                    .sum();
                (base + raised).min(cap)
            }
            Formula::Piecewise { segments } => segments
                .iter()
                .find(|s| s.applies(year))
                .map_or(0.0, |s| s.value(year)),
            Formula::Onset {
                onset,
                fill,
                growth,
            } => {
                if year < onset {
                    fill
                } else {
                    growth.value(year)
                }
            }
            Formula::Seasonal {
                base,
                slope,
                amplitude,
                period,
            } => base + slope * t + amplitude * (2.0 * PI * t / period).sin(),
        }
    }

    /// 在整个年份区间上合成序列
    ///
    /// Onset 形状先填充区间内早于 onset 的年份（数量恰为 `count_before(onset)`），
    /// 再按年份升序追加增长段。
    pub fn synthesize(&self, years: &YearRange) -> MetricSeries {
        match *self {
            Formula::Onset {
                onset,
                fill,
                growth,
            } => {
                let fill_len = years.count_before(onset);
                let values = std::iter::repeat(fill)
                    .take(fill_len)
                    .chain(years.iter().filter(|y| *y >= onset).map(|y| growth.value(y)))
                    .collect();
                MetricSeries::from_values(years, values)
            }
            _ => MetricSeries::from_fn(years, |year| self.evaluate(year)),
        }
    }

    /// 上限（饱和类形状）
    pub fn cap(&self) -> Option<f64> {
        match *self {
            Formula::Saturating(sat) => Some(sat.cap),
            Formula::Onset { growth, .. } => Some(growth.cap),
            Formula::Stepped { cap, .. } => Some(cap),
            _ => None,
        }
    }
}
