// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的 API 实例、数据集、临时配置文件
// ==========================================

#![allow(dead_code)]

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use defense_posture_dashboard::config::OVERVIEW_KEY;
use defense_posture_dashboard::domain::types::DisplayToggles;
use defense_posture_dashboard::{DashboardApi, Dataset, ScenarioConfig};
use tempfile::NamedTempFile;

/// 浮点比较容差
pub const EPS: f64 = 1e-9;

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

/// 默认 API（内置目录 + 2000-2027）
pub fn default_api() -> DashboardApi {
    defense_posture_dashboard::logging::init_test();
    DashboardApi::default()
}

/// 全局视图数据集
pub fn overview_dataset() -> (Dataset, ScenarioConfig) {
    default_api().assemble(OVERVIEW_KEY)
}

/// 仅关闭一个开关
pub fn toggles_without(name: &str) -> DisplayToggles {
    let mut toggles = DisplayToggles::default();
    match name {
        "regional" => toggles.show_regional = false,
        "alliances" => toggles.show_alliances = false,
        "technical" => toggles.show_technical = false,
        "threats" => toggles.threat_assessment = false,
        other => panic!("未知开关: {}", other),
    }
    toggles
}

/// 写入临时 JSON 配置文件
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
/// - PathBuf: 文件路径
pub fn write_config_file(json: &str) -> Result<(NamedTempFile, PathBuf), Box<dyn Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    let path = file.path().to_path_buf();
    Ok((file, path))
}
