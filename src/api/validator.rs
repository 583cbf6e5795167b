// ==========================================
// 战略防务仪表盘 - 控件校验器
// ==========================================
// 职责: 校验项目属于当前模式的选项列表
// 说明: 这是输入错误；与情景目录的静默兜底相互独立
//       （合法选项但目录中无记录时仍走兜底）
// ==========================================

use crate::api::controls::SelectionControls;
use crate::api::error::{DashboardError, DashboardResult};

// ==========================================
// ControlValidator - 控件校验器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlValidator;

impl ControlValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验选择控件
    ///
    /// # 返回
    /// - Ok(()): 项目属于模式选项
    /// - Err(DashboardError::InvalidSelection): 项目不在选项列表中（精确匹配）
    pub fn validate(&self, controls: &SelectionControls) -> DashboardResult<()> {
        if controls.mode.options().contains(&controls.item.as_str()) {
            return Ok(());
        }

        tracing::warn!(
            mode = %controls.mode,
            item = %controls.item,
            "选择项不属于当前分析模式"
        );
        Err(DashboardError::InvalidSelection {
            mode: controls.mode.to_string(),
            item: controls.item.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::controls::AnalysisMode;

    #[test]
    fn test_every_listed_option_is_valid() {
        let validator = ControlValidator::new();
        for mode in AnalysisMode::ALL {
            for item in mode.options() {
                let controls = SelectionControls::new(mode).with_item(*item);
                assert!(validator.validate(&controls).is_ok(), "{} / {}", mode, item);
            }
        }
    }

    #[test]
    fn test_item_from_other_mode_rejected() {
        let validator = ControlValidator::new();
        let controls =
            SelectionControls::new(AnalysisMode::ByBranch).with_item("Supériorité Aérienne");
        let err = validator.validate(&controls).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidSelection { .. }));
    }

    #[test]
    fn test_match_is_exact() {
        let validator = ControlValidator::new();
        let controls =
            SelectionControls::new(AnalysisMode::ByBranch).with_item("marine israélienne");
        assert!(validator.validate(&controls).is_err());
    }
}
