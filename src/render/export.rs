// ==========================================
// 战略防务仪表盘 - 数据导出
// ==========================================
// 职责: 数据集 → CSV（年份 + 当前存在的列）；视图 → JSON
// 说明: 列顺序与 Dataset::columns 一致（基础列在前，附加块在后）
// ==========================================

use std::io::Write;

use crate::api::error::{DashboardError, DashboardResult};
use crate::domain::dataset::Dataset;
use crate::view::models::DashboardView;

/// CSV 年份列表头
pub const YEAR_COLUMN: &str = "Annee";

/// 导出数据集为 CSV
pub fn write_dataset_csv<W: Write>(dataset: &Dataset, writer: W) -> DashboardResult<()> {
    let columns = dataset.columns();
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push(YEAR_COLUMN);
    header.extend(columns.iter().map(|(id, _)| id.column_name()));
    wtr.write_record(&header)?;

    for (row, year) in dataset.years().iter().enumerate() {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(year.to_string());
        record.extend(columns.iter().map(|(_, series)| series.values()[row].to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    tracing::debug!(
        rows = dataset.years().len(),
        columns = columns.len() + 1,
        "数据集已导出为 CSV"
    );
    Ok(())
}

/// 导出数据集为 CSV 字符串
pub fn dataset_to_csv(dataset: &Dataset) -> DashboardResult<String> {
    let mut buf = Vec::new();
    write_dataset_csv(dataset, &mut buf)?;
    String::from_utf8(buf).map_err(|e| DashboardError::Other(e.into()))
}

/// 视图 → 格式化 JSON
pub fn view_to_json(view: &DashboardView) -> DashboardResult<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

/// 视图 → JSON 写入
pub fn write_view_json<W: Write>(view: &DashboardView, writer: W) -> DashboardResult<()> {
    serde_json::to_writer_pretty(writer, view)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::ScenarioConfig;
    use crate::engine::DatasetAssembler;

    #[test]
    fn test_csv_header_for_generic_dataset() {
        let dataset = DatasetAssembler::default().assemble_for(&ScenarioConfig::generic_default());
        let csv = dataset_to_csv(&dataset).unwrap();
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("Annee,Budget_Defense_Mds,Personnel_Milliers"));
        assert!(!header.contains("Interceptions_Dome_Fer"));
        assert_eq!(lines.count(), 28);
    }
}
