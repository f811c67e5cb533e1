// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持繁体中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-TW", "en"];

/// 默认语言
pub const DEFAULT_LOCALE: &str = "zh-TW";

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-TW" 或 "en"），不支持的代码忽略
pub fn set_locale(locale: &str) {
    if SUPPORTED_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
    } else {
        tracing::warn!(locale = locale, "不支持的语言，保持当前设置");
    }
}

/// 把配置中的语言代码收窄到支持的语言，不支持时回退 zh-TW
pub fn resolve_locale(locale: &str) -> &'static str {
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|supported| *supported == locale.trim())
        .unwrap_or(DEFAULT_LOCALE)
}

/// 翻译消息（无参数，当前语言）
///
/// # 示例
/// ```no_run
/// use service_roster::i18n::t;
/// let msg = t("roster.empty_schedule_type");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数，当前语言）
///
/// # 示例
/// ```no_run
/// use service_roster::i18n::t_with_args;
/// let msg = t_with_args("warning.no_worker", &[("date", "2025-01-05"), ("role", "司琴")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    fill_args(rust_i18n::t!(key).to_string(), args)
}

/// 翻译消息（带参数，指定语言，不读写全局 locale）
pub fn t_with_args_in(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let locale = resolve_locale(locale);
    fill_args(rust_i18n::t!(key, locale = locale).to_string(), args)
}

fn fill_args(mut result: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // locale 为全局状态，测试默认并行执行，这里串行化
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-TW");
        assert_eq!(current_locale(), "zh-TW");

        set_locale("en");
        assert_eq!(current_locale(), "en");

        // 不支持的语言不生效
        set_locale("fr");
        assert_eq!(current_locale(), "en");

        set_locale("zh-TW");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-TW");
        assert_eq!(t("roster.empty_schedule_type"), "服事表類型不可為空");

        set_locale("en");
        assert_eq!(t("roster.empty_schedule_type"), "Schedule type must not be empty");

        set_locale("zh-TW");
    }

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("en"), "en");
        assert_eq!(resolve_locale(" zh-TW "), "zh-TW");
        assert_eq!(resolve_locale("fr"), "zh-TW");
    }

    #[test]
    fn test_explicit_locale_leaves_global_untouched() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-TW");

        let msg = t_with_args_in(
            "en",
            "warning.no_worker",
            &[("date", "2025-01-05"), ("role", "Piano")],
        );
        assert_eq!(msg, "No available worker for \"Piano\" on 2025-01-05");
        assert_eq!(current_locale(), "zh-TW");

        let msg = t_with_args_in(
            "zh-TW",
            "warning.no_worker",
            &[("date", "2025-01-05"), ("role", "司琴")],
        );
        assert_eq!(msg, "2025-01-05 的「司琴」沒有可用同工");
    }

    #[test]
    fn test_used_keys_exist_in_every_locale() {
        let keys = [
            "warning.no_worker",
            "warning.no_key_worker",
            "warning.below_min",
            "roster.empty_schedule_type",
        ];
        for locale in SUPPORTED_LOCALES {
            for key in keys {
                let msg = t_with_args_in(locale, key, &[]);
                assert!(!msg.is_empty());
                assert!(!msg.contains(key), "{} 缺少 {}", locale, key);
            }
        }
    }

    #[test]
    fn test_translate_warning_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-TW");
        let msg = t_with_args(
            "warning.no_worker",
            &[("date", "2025-01-05"), ("role", "司琴")],
        );
        assert_eq!(msg, "2025-01-05 的「司琴」沒有可用同工");

        let msg = t_with_args(
            "warning.below_min",
            &[("worker", "小明"), ("achieved", "1"), ("required", "3")],
        );
        assert_eq!(msg, "小明 本季服事 1 次，低於最低要求 3 次");

        set_locale("en");
        let msg = t_with_args(
            "warning.no_key_worker",
            &[("date", "2025-01-05"), ("role", "Vocals")],
        );
        assert!(msg.contains("No key worker"));
        assert!(msg.contains("2025-01-05"));

        set_locale("zh-TW");
    }
}
