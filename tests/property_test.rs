// ==========================================
// 指标合成属性测试
// ==========================================
// 测试范围:
// 1. 任意年份区间: 每个指标序列长度等于区间长度
// 2. 饱和公式: 值不超过上限且随年份单调不减
// 3. 组装器: 任意区间下列集合只由优先级决定
// ==========================================

mod test_helpers;

use std::sync::Arc;

use defense_posture_dashboard::config::OVERVIEW_KEY;
use defense_posture_dashboard::engine::synthesizers::{self, formula_for};
use defense_posture_dashboard::engine::{Formula, Saturation};
use defense_posture_dashboard::{
    DatasetAssembler, MetricId, ScenarioCatalog, ScenarioConfig, YearRange,
};
use proptest::prelude::*;

fn year_range() -> impl Strategy<Value = YearRange> {
    (1990i32..2060, 0i32..40).prop_map(|(start, span)| {
        YearRange::new(start, start + span).expect("start <= end")
    })
}

fn saturation() -> impl Strategy<Value = Saturation> {
    (0.0f64..100.0, 0.0f64..5.0, 0.0f64..120.0)
        .prop_map(|(intercept, slope, cap)| Saturation::new(intercept, slope, cap))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_series_length_matches_range(years in year_range()) {
        let config = ScenarioConfig::generic_default();
        for metric in MetricId::ALL {
            let series = synthesizers::synthesize(metric, &years, &config);
            prop_assert_eq!(series.len(), years.len());
            prop_assert_eq!(series.start(), years.start());
            prop_assert_eq!(series.end(), years.end());
        }
    }

    #[test]
    fn prop_saturating_never_exceeds_cap(sat in saturation(), years in year_range()) {
        let series = Formula::Saturating(sat).synthesize(&years);
        for (_, value) in series.iter() {
            prop_assert!(value <= sat.cap);
        }
        for pair in series.values().windows(2) {
            prop_assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn prop_catalog_caps_hold(years in year_range()) {
        let config = ScenarioConfig::generic_default();
        for metric in MetricId::ALL {
            let formula = formula_for(metric, &config);
            if let Some(cap) = formula.cap() {
                let series = formula.synthesize(&years);
                prop_assert!(series.values().iter().all(|v| *v <= cap), "{}", metric);
            }
        }
    }

    #[test]
    fn prop_interception_fill_precedes_growth(years in year_range()) {
        let series = synthesizers::interception_rate(&years);
        let fill = years.count_before(synthesizers::IRON_DOME_ONSET);
        prop_assert!(series.values()[..fill].iter().all(|v| *v == 0.0));
        prop_assert!(series.values()[fill..].iter().all(|v| (75.0..=95.0).contains(v)));
    }

    #[test]
    fn prop_assembled_columns_ignore_range(years in year_range()) {
        let assembler = DatasetAssembler::new(Arc::new(ScenarioCatalog::builtin()), years);
        let (dataset, _) = assembler.assemble(OVERVIEW_KEY);
        prop_assert_eq!(dataset.columns().len(), MetricId::ALL.len());
        for (_, series) in dataset.columns() {
            prop_assert_eq!(series.len(), years.len());
        }
    }
}
