// ==========================================
// 战略防务仪表盘 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: 扁平 key-value（JSON 文件 + 环境变量覆写）
// 优先级: 环境变量 > 配置文件 > 内置默认值
// ==========================================

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::{
    DisplayToggles, OutputFormat, Year, YearRange, DEFAULT_END_YEAR, DEFAULT_START_YEAR,
};
use crate::i18n::{DEFAULT_LOCALE, SUPPORTED_LOCALES};

/// 环境变量前缀: DEFENSE_DASHBOARD_<KEY>
pub const ENV_PREFIX: &str = "DEFENSE_DASHBOARD_";

/// 用户配置目录下的子目录名
pub const CONFIG_DIR_NAME: &str = "defense-posture-dashboard";

pub(crate) fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

fn is_false(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "n" | "off"
    )
}

/// 默认配置文件路径: <config_dir>/defense-posture-dashboard/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.json"))
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: BTreeMap<String, String>,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 空配置（全部取内置默认值）
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: BTreeMap<String, String>) -> Self {
        Self {
            values,
            source: None,
        }
    }

    /// 解析扁平 JSON 对象
    ///
    /// 标量值统一转为字符串；嵌套对象/数组视为无效值。
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let parsed: BTreeMap<String, Value> = serde_json::from_str(raw)?;

        let mut values = BTreeMap::new();
        for (key, value) in parsed {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => continue,
                other => {
                    return Err(ConfigError::InvalidValue {
                        key,
                        value: other.to_string(),
                    })
                }
            };
            values.insert(key, text);
        }

        Ok(Self::from_map(values))
    }

    /// 从配置文件加载
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut manager = Self::from_json_str(&raw)?;
        manager.source = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), keys = manager.values.len(), "配置文件已加载");
        Ok(manager)
    }

    /// 加载配置
    ///
    /// # 参数
    /// - explicit: 显式指定的配置文件（必须存在）
    ///
    /// 未指定时尝试默认路径（不存在则使用内置默认值），最后应用环境变量覆写。
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let mut manager = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::new(),
            },
        };

        let applied = manager.apply_overrides(std::env::vars());
        if applied > 0 {
            tracing::debug!(applied, "环境变量覆写已应用");
        }
        Ok(manager)
    }

    /// 应用 DEFENSE_DASHBOARD_* 覆写，只接受已知配置键
    ///
    /// # 返回
    /// - 实际应用的覆写数量
    pub fn apply_overrides<I, K, V>(&mut self, vars: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut applied = 0;
        for (name, value) in vars {
            let Some(suffix) = name.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let key = suffix.to_lowercase();
            if config_keys::ALL.contains(&key.as_str()) {
                self.values.insert(key, value.into());
                applied += 1;
            }
        }
        applied
    }

    /// 配置来源文件（无文件时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// 读取配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_global_config_value(key)
            .unwrap_or(default)
            .trim()
            .to_string()
    }

    fn get_year(&self, key: &str, default: Year) -> ConfigResult<Year> {
        let value = self.get_config_or_default(key, &default.to_string());
        value
            .parse::<Year>()
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            })
    }

    // ===== 年份区间 =====

    /// 获取年份区间（默认 2000-2027）
    ///
    /// 年份不可解析或 start > end 时返回错误，不做静默修正。
    pub fn get_year_range(&self) -> ConfigResult<YearRange> {
        let start = self.get_year(config_keys::YEAR_START, DEFAULT_START_YEAR)?;
        let end = self.get_year(config_keys::YEAR_END, DEFAULT_END_YEAR)?;
        Ok(YearRange::new(start, end)?)
    }

    // ===== 展示配置 =====

    /// 获取界面语言（默认 fr）
    pub fn get_locale(&self) -> String {
        let value = self.get_config_or_default(config_keys::LOCALE, DEFAULT_LOCALE);
        if SUPPORTED_LOCALES.contains(&value.as_str()) {
            value
        } else {
            tracing::warn!(
                config_key = config_keys::LOCALE,
                raw_value = %value,
                "不支持的语言，使用默认语言"
            );
            DEFAULT_LOCALE.to_string()
        }
    }

    /// 获取输出格式（默认 html）
    pub fn get_output_format(&self) -> OutputFormat {
        let value = self.get_config_or_default(config_keys::OUTPUT_FORMAT, "html");
        value.parse::<OutputFormat>().unwrap_or_else(|_| {
            tracing::warn!(
                config_key = config_keys::OUTPUT_FORMAT,
                raw_value = %value,
                "输出格式配置错误，使用 html"
            );
            OutputFormat::Html
        })
    }

    /// 读取布尔配置；无法识别的值回落到默认值
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get_global_config_value(key) {
            Some(v) if is_true(v) => true,
            Some(v) if is_false(v) => false,
            Some(v) => {
                tracing::warn!(config_key = key, raw_value = %v, "布尔配置格式错误，使用默认值");
                default
            }
            None => default,
        }
    }

    /// 获取默认显示开关（全部默认开启）
    pub fn get_display_toggles(&self) -> DisplayToggles {
        DisplayToggles {
            show_regional: self.get_bool(config_keys::SHOW_REGIONAL, true),
            show_alliances: self.get_bool(config_keys::SHOW_ALLIANCES, true),
            show_technical: self.get_bool(config_keys::SHOW_TECHNICAL, true),
            threat_assessment: self.get_bool(config_keys::THREAT_ASSESSMENT, true),
        }
    }

    /// 是否输出 JSON 日志
    pub fn is_json_logging(&self) -> bool {
        self.get_config_or_default(config_keys::LOG_FORMAT, "text")
            .eq_ignore_ascii_case("json")
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 年份区间
    pub const YEAR_START: &str = "year_start";
    pub const YEAR_END: &str = "year_end";

    // 展示
    pub const LOCALE: &str = "locale";
    pub const OUTPUT_FORMAT: &str = "output_format";

    // 显示开关
    pub const SHOW_REGIONAL: &str = "show_regional";
    pub const SHOW_ALLIANCES: &str = "show_alliances";
    pub const SHOW_TECHNICAL: &str = "show_technical";
    pub const THREAT_ASSESSMENT: &str = "threat_assessment";

    // 日志
    pub const LOG_FORMAT: &str = "log_format";

    /// 全部已知键（环境变量覆写白名单）
    pub const ALL: [&str; 9] = [
        YEAR_START,
        YEAR_END,
        LOCALE,
        OUTPUT_FORMAT,
        SHOW_REGIONAL,
        SHOW_ALLIANCES,
        SHOW_TECHNICAL,
        THREAT_ASSESSMENT,
        LOG_FORMAT,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let manager = ConfigManager::new();
        assert_eq!(manager.get_year_range().unwrap(), YearRange::standard());
        assert_eq!(manager.get_locale(), "fr");
        assert_eq!(manager.get_output_format(), OutputFormat::Html);
        assert_eq!(manager.get_display_toggles(), DisplayToggles::default());
        assert!(!manager.is_json_logging());
    }

    #[test]
    fn test_from_json_stringifies_scalars() {
        let manager = ConfigManager::from_json_str(
            r#"{"year_start": 2005, "show_regional": false, "locale": "en", "unused": null}"#,
        )
        .unwrap();
        assert_eq!(manager.get_global_config_value("year_start"), Some("2005"));
        assert_eq!(manager.get_year_range().unwrap().start(), 2005);
        assert!(!manager.get_display_toggles().show_regional);
        assert_eq!(manager.get_locale(), "en");
        assert_eq!(manager.get_global_config_value("unused"), None);
    }

    #[test]
    fn test_nested_value_rejected() {
        let err = ConfigManager::from_json_str(r#"{"year_start": [2000]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_invalid_year_range() {
        let mut manager = ConfigManager::new();
        manager.set(config_keys::YEAR_START, "2020");
        manager.set(config_keys::YEAR_END, "2010");
        assert!(matches!(
            manager.get_year_range(),
            Err(ConfigError::YearRange(_))
        ));

        manager.set(config_keys::YEAR_START, "deux mille");
        assert!(matches!(
            manager.get_year_range(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_unsupported_locale_falls_back() {
        let mut manager = ConfigManager::new();
        manager.set(config_keys::LOCALE, "de");
        assert_eq!(manager.get_locale(), "fr");
    }

    #[test]
    fn test_overrides_only_known_keys() {
        let mut manager = ConfigManager::new();
        let applied = manager.apply_overrides(vec![
            ("DEFENSE_DASHBOARD_YEAR_END", "2030"),
            ("DEFENSE_DASHBOARD_PERF", "1"),
            ("HOME", "/root"),
        ]);
        assert_eq!(applied, 1);
        assert_eq!(manager.get_year_range().unwrap().end(), 2030);
        assert_eq!(manager.get_global_config_value("perf"), None);
    }

    #[test]
    fn test_get_bool_garbage_uses_default() {
        let mut manager = ConfigManager::new();
        manager.set(config_keys::SHOW_TECHNICAL, "peut-être");
        assert!(manager.get_bool(config_keys::SHOW_TECHNICAL, true));
        manager.set(config_keys::SHOW_TECHNICAL, "off");
        assert!(!manager.get_bool(config_keys::SHOW_TECHNICAL, true));
    }
}
