// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持法语（默认）和英语
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 所有翻译都显式传入 locale，不读写全局语言
// ==========================================

/// 默认语言（同时是回退语言）
pub const DEFAULT_LOCALE: &str = "fr";

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["fr", "en"];

/// 是否为支持的语言
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 翻译消息（指定语言）
pub fn tr(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（指定语言，带参数）
///
/// # 示例
/// ```no_run
/// use defense_posture_dashboard::i18n::tr_with_args;
/// let msg = tr_with_args("cards.delta_since", "fr", &[("year", "2000")]);
/// ```
pub fn tr_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    substitute(tr(key, locale), args)
}

fn substitute(mut result: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_simple() {
        assert_eq!(tr("modes.overview", "fr"), "Vue d'Ensemble Israël");
        assert_eq!(tr("modes.overview", "en"), "Israel Overview");
    }

    #[test]
    fn test_unknown_locale_uses_fallback() {
        assert_eq!(tr("tabs.dashboard", "de"), "Tableau de Bord");
    }

    #[test]
    fn test_translate_with_args() {
        let msg = tr_with_args("cards.delta_since", "fr", &[("year", "2000")]);
        assert!(msg.contains("2000"));
        let msg = tr_with_args("cards.delta_since", "en", &[("year", "2000")]);
        assert!(msg.contains("since 2000"));
    }

    #[test]
    fn test_missing_arg_keeps_placeholder() {
        let msg = tr_with_args("header.subtitle", "en", &[("start", "2000")]);
        assert!(msg.contains("2000-%{end}"));
    }

    #[test]
    fn test_supported_locales() {
        assert!(is_supported("fr"));
        assert!(is_supported("en"));
        assert!(!is_supported("de"));
    }
}
