// ==========================================
// DashboardApi 集成测试
// ==========================================
// 测试范围:
// 1. 视图结构: 7 个标签页固定顺序
// 2. 显示开关: 每个开关只隐藏对应标签页
// 3. 控件校验: 非法选择项报错；合法但无目录记录的选择走兜底
// 4. 本地化: 同一控件在 fr / en 下生成不同文案
// ==========================================

mod test_helpers;

use defense_posture_dashboard::api::{
    AnalysisMode, DashboardError, SelectionControls, SimulationScenario,
};
use defense_posture_dashboard::config::{ConfigManager, OVERVIEW_KEY, SECURITY_SCENARIOS_KEY};
use defense_posture_dashboard::view::{PanelContent, TabId};
use defense_posture_dashboard::DashboardApi;
use test_helpers::{default_api, toggles_without};

// ==========================================
// 视图结构
// ==========================================

#[test]
fn test_default_view_has_seven_tabs_in_order() {
    let view = default_api()
        .build_view(&SelectionControls::default())
        .expect("构建失败");

    let ids: Vec<TabId> = view.tabs.iter().map(|t| t.id).collect();
    assert_eq!(ids, TabId::ALL.to_vec());
    assert!(view.tabs.iter().all(|t| !t.hidden && !t.panels.is_empty()));
    assert_eq!(view.scenario_key, OVERVIEW_KEY);
    assert_eq!(view.locale, "fr");
}

#[test]
fn test_overview_cards() {
    let view = default_api()
        .build_view(&SelectionControls::default())
        .expect("构建失败");
    let panel = view.panel("strategic_metrics").expect("缺少指标卡面板");
    let PanelContent::Cards { cards } = &panel.content else {
        panic!("应为指标卡");
    };

    let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "budget",
            "personnel",
            "interception",
            "us_cooperation",
            "mobilization",
            "air_power",
            "missile_coverage",
            "readiness"
        ]
    );
    // 2027 拦截率已封顶
    assert_eq!(cards[2].value, "95.0%");
    // 动员时间缩短 50%
    assert_eq!(cards[4].delta.as_deref(), Some("+50.0%"));
}

#[test]
fn test_generic_selection_skips_missile_card_and_gated_panels() {
    let controls = SelectionControls::new(AnalysisMode::ByBranch).with_item("Marine Israélienne");
    let view = default_api().build_view(&controls).expect("构建失败");

    let panel = view.panel("strategic_metrics").expect("缺少指标卡面板");
    let PanelContent::Cards { cards } = &panel.content else {
        panic!("应为指标卡");
    };
    assert_eq!(cards.len(), 7);
    assert_eq!(cards[2].value, "0.0%");
    assert!(cards.iter().all(|c| c.id != "missile_coverage"));

    assert!(view.panel("missile_defense_trends").is_none());
    assert!(view.panel("intelligence_trends").is_none());
    assert!(view.panel("innovation_trends").is_none());
    assert!(view.panel("alliance_trends").is_none());
    // 静态参考面板不受标签影响
    assert!(view.panel("threat_matrix").is_some());
}

// ==========================================
// 显示开关
// ==========================================

#[test]
fn test_each_toggle_hides_exactly_its_tab() {
    let api = default_api();
    let cases = [
        ("regional", TabId::Regional),
        ("alliances", TabId::Alliances),
        ("technical", TabId::Technical),
        ("threats", TabId::Threats),
    ];

    for (name, tab) in cases {
        let controls = SelectionControls::default().with_toggles(toggles_without(name));
        let view = api.build_view(&controls).expect("构建失败");

        for t in &view.tabs {
            if t.id == tab {
                assert!(t.hidden, "{} 应隐藏", name);
                assert!(t.panels.is_empty());
                assert!(!t.title.is_empty());
            } else {
                assert!(!t.hidden, "{} 不应影响 {:?}", name, t.id);
            }
        }
    }
}

// ==========================================
// 控件校验
// ==========================================

#[test]
fn test_invalid_selection_is_rejected() {
    let controls =
        SelectionControls::new(AnalysisMode::StrategicPrograms).with_item("Forces Terrestres");
    let err = default_api().build_view(&controls).unwrap_err();
    assert!(matches!(err, DashboardError::InvalidSelection { .. }));

    let err = default_api().dataset_for(&controls).unwrap_err();
    assert!(matches!(err, DashboardError::InvalidSelection { .. }));
}

#[test]
fn test_security_scenarios_resolve_to_default_record() {
    let controls = SelectionControls::new(AnalysisMode::SecurityScenarios)
        .with_scenario(SimulationScenario::NorthernEscalation);
    let view = default_api().build_view(&controls).expect("构建失败");
    assert_eq!(view.scenario_key, SECURITY_SCENARIOS_KEY);
    assert_eq!(view.config.kind, "branche_militaire");
    assert_eq!(view.controls.simulation, "Escalade Nord");
}

#[test]
fn test_simulation_scenario_does_not_change_data() {
    let api = default_api();
    let base = api.build_view(&SelectionControls::default()).unwrap();
    let other = api
        .build_view(
            &SelectionControls::default().with_scenario(SimulationScenario::PreemptiveOperation),
        )
        .unwrap();
    assert_eq!(
        base.panel("capability_evolution"),
        other.panel("capability_evolution")
    );
}

#[test]
fn test_every_listed_option_builds() {
    let api = default_api();
    for (mode, items) in DashboardApi::options() {
        for item in items {
            let controls = SelectionControls::new(mode).with_item(*item);
            assert!(api.build_view(&controls).is_ok(), "{} / {}", mode, item);
        }
    }
}

// ==========================================
// 本地化与配置
// ==========================================

#[test]
fn test_localized_titles() {
    let api = default_api();
    let controls = SelectionControls::default();
    let fr = api.build_view_localized(&controls, "fr").unwrap();
    let en = api.build_view_localized(&controls, "en").unwrap();

    assert_eq!(fr.tab(TabId::Dashboard).unwrap().title, "Tableau de Bord");
    assert_eq!(en.tab(TabId::Dashboard).unwrap().title, "Dashboard");
    assert_ne!(fr.title, en.title);
    assert!(en.subtitle.contains("2000-2027"));
}

#[test]
fn test_unsupported_locale_falls_back() {
    let view = default_api()
        .build_view_localized(&SelectionControls::default(), "de")
        .unwrap();
    assert_eq!(view.locale, "fr");
}

#[test]
fn test_from_config_year_range() {
    let mut config = ConfigManager::new();
    config.set("year_start", "2010");
    config.set("year_end", "2015");
    config.set("locale", "en");

    let api = DashboardApi::from_config(&config).expect("配置有效");
    assert_eq!(api.locale(), "en");
    let view = api.build_view(&SelectionControls::default()).unwrap();
    assert_eq!(view.years.len(), 6);
    assert!(view.subtitle.contains("2010-2015"));
}

#[test]
fn test_from_config_rejects_inverted_range() {
    let mut config = ConfigManager::new();
    config.set("year_start", "2020");
    config.set("year_end", "2010");
    let err = DashboardApi::from_config(&config).unwrap_err();
    assert!(matches!(err, DashboardError::InvalidConfig(_)));
}
