// ==========================================
// 战略防务仪表盘 - 性能统计
// ==========================================
// 职责: 统计一次操作内合成的序列数、生成的图表数与耗时
// 开关:
// - Debug 默认开启；Release 默认关闭（可通过环境变量开启）
// - `DEFENSE_DASHBOARD_PERF=1` 强制开启
// - `DEFENSE_DASHBOARD_SLOW_MS=50` 配置慢操作阈值（毫秒）
// ==========================================

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Once;
use std::time::Instant;

use crate::config::config_manager::is_true;

pub const PERF_ENV: &str = "DEFENSE_DASHBOARD_PERF";
pub const SLOW_MS_ENV: &str = "DEFENSE_DASHBOARD_SLOW_MS";

static PERF_ENABLED: AtomicBool = AtomicBool::new(false);
static SLOW_OP_THRESHOLD_MS: AtomicU64 = AtomicU64::new(0);
static INSTALL: Once = Once::new();

thread_local! {
    static PERF_DEPTH: Cell<u32> = Cell::new(0);
    static SERIES_COUNT: Cell<u64> = Cell::new(0);
    static CHART_COUNT: Cell<u64> = Cell::new(0);
}

/// 读取环境变量并安装开关（幂等）
pub fn install() {
    INSTALL.call_once(|| {
        let enabled = match std::env::var(PERF_ENV) {
            Ok(v) => is_true(&v),
            Err(_) => cfg!(debug_assertions),
        };
        PERF_ENABLED.store(enabled, Ordering::Relaxed);

        let slow_ms = std::env::var(SLOW_MS_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(if cfg!(debug_assertions) { 50 } else { 200 });
        SLOW_OP_THRESHOLD_MS.store(slow_ms, Ordering::Relaxed);
    });
}

pub fn is_enabled() -> bool {
    PERF_ENABLED.load(Ordering::Relaxed)
}

fn active() -> bool {
    is_enabled() && PERF_DEPTH.with(|d| d.get() > 0)
}

/// 记录一条序列合成
pub fn record_series() {
    if active() {
        SERIES_COUNT.with(|c| c.set(c.get().saturating_add(1)));
    }
}

/// 记录一张图表
pub fn record_chart() {
    if active() {
        CHART_COUNT.with(|c| c.set(c.get().saturating_add(1)));
    }
}

/// 性能统计 Guard：记录 elapsed_ms + 序列数 + 图表数
///
/// 使用方式：
/// ```ignore
/// let _perf = defense_posture_dashboard::perf::PerfGuard::new("build_view");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    series_start: u64,
    chart_start: u64,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        install();
        PERF_DEPTH.with(|d| d.set(d.get().saturating_add(1)));
        Self {
            op,
            start: Instant::now(),
            series_start: SERIES_COUNT.with(|c| c.get()),
            chart_start: CHART_COUNT.with(|c| c.get()),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
        if !is_enabled() {
            return;
        }

        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        let series_count = SERIES_COUNT
            .with(|c| c.get())
            .saturating_sub(self.series_start);
        let chart_count = CHART_COUNT.with(|c| c.get()).saturating_sub(self.chart_start);

        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            series_count,
            chart_count,
            "done"
        );

        let threshold = SLOW_OP_THRESHOLD_MS.load(Ordering::Relaxed);
        if threshold > 0 && elapsed_ms >= threshold {
            tracing::warn!(target: "slow_op", op = self.op, elapsed_ms, "slow op");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_only_inside_guard() {
        install();
        let before = SERIES_COUNT.with(|c| c.get());
        record_series();
        assert_eq!(SERIES_COUNT.with(|c| c.get()), before);

        {
            let _perf = PerfGuard::new("test");
            record_series();
            record_chart();
        }
        if is_enabled() {
            assert_eq!(SERIES_COUNT.with(|c| c.get()), before + 1);
        }
        assert_eq!(PERF_DEPTH.with(|d| d.get()), 0);
    }
}
