// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置文件、环境变量覆写、年份区间校验
// ==========================================

mod test_helpers;

use std::path::Path;

use defense_posture_dashboard::api::SelectionControls;
use defense_posture_dashboard::config::{config_keys, ConfigError, ConfigManager};
use defense_posture_dashboard::domain::types::{MAX_YEAR, MIN_YEAR};
use defense_posture_dashboard::{DashboardApi, OutputFormat, YearRange};
use test_helpers::write_config_file;

#[test]
fn test_defaults_without_file() {
    let config = ConfigManager::new();
    assert_eq!(config.get_year_range().unwrap(), YearRange::standard());
    assert_eq!(config.get_locale(), "fr");
    assert_eq!(config.get_output_format(), OutputFormat::Html);
    assert!(!config.is_json_logging());

    let toggles = config.get_display_toggles();
    assert!(toggles.show_regional && toggles.show_alliances);
    assert!(toggles.show_technical && toggles.threat_assessment);
}

#[test]
fn test_from_file() {
    let (_file, path) = write_config_file(
        r#"{
            "year_start": 2005,
            "year_end": "2020",
            "locale": "en",
            "output_format": "csv",
            "show_alliances": false,
            "log_format": "json",
            "unused": null
        }"#,
    )
    .expect("写入临时配置失败");

    let config = ConfigManager::from_file(&path).expect("加载失败");
    assert_eq!(config.source(), Some(path.as_path()));
    assert_eq!(config.get_year_range().unwrap(), YearRange::new(2005, 2020).unwrap());
    assert_eq!(config.get_locale(), "en");
    assert_eq!(config.get_output_format(), OutputFormat::Csv);
    assert!(!config.get_display_toggles().show_alliances);
    assert!(config.get_display_toggles().show_regional);
    assert!(config.is_json_logging());
    assert_eq!(config.get_global_config_value("unused"), None);
}

#[test]
fn test_missing_file() {
    let err = ConfigManager::from_file(Path::new("/nonexistent/dashboard.json")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn test_malformed_file() {
    let (_file, path) = write_config_file("{ not json").unwrap();
    let err = ConfigManager::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let (_file, path) = write_config_file(r#"{"year_start": [2000]}"#).unwrap();
    let err = ConfigManager::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_year_range_errors() {
    let mut config = ConfigManager::new();
    config.set(config_keys::YEAR_START, "deux mille");
    assert!(matches!(
        config.get_year_range(),
        Err(ConfigError::InvalidValue { .. })
    ));

    config.set(config_keys::YEAR_START, "2021");
    config.set(config_keys::YEAR_END, "2020");
    assert!(matches!(
        config.get_year_range(),
        Err(ConfigError::YearRange(_))
    ));
}

#[test]
fn test_extreme_years_rejected() {
    for (start, end) in [
        ("-2147483648", "-2147483648"),
        ("-2147483648", "2147483647"),
        ("1899", "2000"),
        ("2000", "2201"),
    ] {
        let mut config = ConfigManager::new();
        config.set(config_keys::YEAR_START, start);
        config.set(config_keys::YEAR_END, end);

        assert!(
            matches!(config.get_year_range(), Err(ConfigError::YearRange(_))),
            "{}..{}",
            start,
            end
        );
        assert!(DashboardApi::from_config(&config).is_err());
    }
}

#[test]
fn test_widest_allowed_range_builds() {
    let mut config = ConfigManager::new();
    config.set(config_keys::YEAR_START, MIN_YEAR.to_string());
    config.set(config_keys::YEAR_END, MAX_YEAR.to_string());

    let api = DashboardApi::from_config(&config).expect("边界年份有效");
    assert_eq!(api.years().len(), (MAX_YEAR - MIN_YEAR + 1) as usize);
    let view = api
        .build_view(&SelectionControls::default())
        .expect("构建失败");
    assert_eq!(view.tabs.len(), 7);
}

#[test]
fn test_env_overrides_only_known_keys() {
    let mut config = ConfigManager::new();
    let applied = config.apply_overrides(vec![
        ("DEFENSE_DASHBOARD_LOCALE", "en"),
        ("DEFENSE_DASHBOARD_SHOW_TECHNICAL", "off"),
        ("DEFENSE_DASHBOARD_UNKNOWN", "x"),
        ("PATH", "/usr/bin"),
    ]);

    assert_eq!(applied, 2);
    assert_eq!(config.get_locale(), "en");
    assert!(!config.get_display_toggles().show_technical);
    assert_eq!(config.get_global_config_value("unknown"), None);
}

#[test]
fn test_invalid_values_fall_back() {
    let mut config = ConfigManager::new();
    config.set(config_keys::LOCALE, "de");
    config.set(config_keys::OUTPUT_FORMAT, "pdf");
    config.set(config_keys::SHOW_REGIONAL, "peut-être");

    assert_eq!(config.get_locale(), "fr");
    assert_eq!(config.get_output_format(), OutputFormat::Html);
    assert!(config.get_display_toggles().show_regional);
}

#[test]
fn test_api_from_file_config() {
    let (_file, path) =
        write_config_file(r#"{"year_start": 2012, "year_end": 2014, "locale": "en"}"#).unwrap();
    let config = ConfigManager::load(Some(&path)).unwrap();
    let api = DashboardApi::from_config(&config).unwrap();

    assert_eq!(api.years(), &YearRange::new(2012, 2014).unwrap());
    assert_eq!(api.locale(), "en");
}
