// ==========================================
// 战略防务仪表盘 - 引擎层
// ==========================================
// 职责: 闭式公式求值、指标合成、数据集组装
// 红线: 引擎只做确定性计算，不涉及展示与本地化
// ==========================================

pub mod assembler;
pub mod formula;
pub mod synthesizers;

// 重导出核心引擎
pub use assembler::DatasetAssembler;
pub use formula::{EventWindow, Formula, Saturation, Segment, Step};
