// ==========================================
// 战略防务仪表盘 - 输出层
// ==========================================
// 职责: 视图/数据集 → HTML / JSON / CSV 文本
// ==========================================

pub mod export;
pub mod html;
pub mod svg;

pub use export::{dataset_to_csv, view_to_json, write_dataset_csv, write_view_json, YEAR_COLUMN};
pub use html::render_page;
pub use svg::render_chart;

use crate::api::{DashboardApi, DashboardResult, SelectionControls};
use crate::domain::types::OutputFormat;

/// 按输出格式生成完整文本
///
/// CSV 只导出数据集，不经过视图构建。
pub fn render(
    api: &DashboardApi,
    controls: &SelectionControls,
    format: OutputFormat,
    locale: &str,
) -> DashboardResult<String> {
    let _perf = crate::perf::PerfGuard::new("render");
    match format {
        OutputFormat::Html => Ok(render_page(&api.build_view_localized(controls, locale)?)),
        OutputFormat::Json => view_to_json(&api.build_view_localized(controls, locale)?),
        OutputFormat::Csv => dataset_to_csv(&api.dataset_for(controls)?),
    }
}
