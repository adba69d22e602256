//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Tag written back to the config file
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh-CN",
        }
    }

    /// Parse a BCP 47-ish tag ("zh", "zh-CN", "en_US"). Unknown tags map to English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }

    /// Detect the locale of the running system
    pub fn from_system() -> Self {
        Self::from_tag(&locale_config::Locale::current().to_string())
    }

    /// Configured tag if present, otherwise the system locale
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured {
            Some(tag) if !tag.trim().is_empty() => Self::from_tag(tag),
            _ => Self::from_system(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Archive Demo", "归档演示"));

    // Navigation
    map.insert("nav-counter", ("Counter", "计数器"));
    map.insert("nav-archive", ("Archive", "归档"));
    map.insert("nav-welcome", ("Welcome", "欢迎"));

    // Endpoint status
    map.insert("status-checking", ("Checking", "检测中"));
    map.insert("status-online", ("Online", "在线"));
    map.insert("status-offline", ("Offline", "离线"));

    // Actions
    map.insert("action-submit", ("Submit", "提交"));
    map.insert("action-save", ("Save", "保存"));
    map.insert("action-clear", ("Clear", "清除"));
    map.insert("action-click-me", ("Click Me!", "点我！"));

    // Counter page
    map.insert("counter-title", ("Counter", "计数器"));
    map.insert("counter-current", ("Current count", "当前计数"));

    // Table columns
    map.insert("col-id", ("ID", "编号"));
    map.insert("col-name", ("Name", "名称"));
    map.insert("col-description", ("Description", "描述"));
    map.insert("col-status", ("Status", "状态"));
    map.insert("col-date", ("Date", "日期"));

    // Welcome page
    map.insert("welcome-title", ("Welcome to Our App!", "欢迎使用！"));
    map.insert("welcome-clicked-prefix", ("You have clicked the button", "你已点击按钮"));
    map.insert("welcome-time", ("time!", "次！"));
    map.insert("welcome-times", ("times!", "次！"));
    map.insert("welcome-footer", ("Built with Rust, GPUI and gpui-component", "基于 Rust、GPUI 与 gpui-component 构建"));

    // Archive page
    map.insert("archive-title", ("Submit Archive", "提交归档"));
    map.insert("archive-endpoint", ("Endpoint", "服务地址"));
    map.insert("archive-number", ("Reading", "读数"));
    map.insert("archive-source", ("Source", "来源"));
    map.insert("archive-location", ("Location", "位置"));
    map.insert("archive-unit", ("Unit", "单位"));
    map.insert("archive-device-id", ("Device ID", "设备号"));
    map.insert("archive-battery-level", ("Battery level (optional)", "电量（可选）"));
    map.insert("archive-calibrated", ("Calibrated", "已校准"));
    map.insert("archive-updated", ("Updated", "已更新"));
    map.insert("archive-history", ("Recent submissions", "最近提交"));
    map.insert("archive-pending", ("Pending", "提交中"));
    map.insert("archive-submitting", ("Submitting...", "提交中..."));
    map.insert("archive-no-history", ("No submissions yet", "暂无提交"));
    map.insert("archive-created", ("Archive created", "归档已创建"));
    map.insert("archive-invalid-form", ("Please fix the highlighted fields", "请修正标出的字段"));
    map.insert("archive-endpoint-saved", ("Endpoint saved", "服务地址已保存"));
    map.insert("archive-endpoint-invalid", ("Endpoint must be an http(s) URL", "服务地址必须为 http(s) URL"));
    map.insert("archive-endpoint-save-failed", ("Could not save endpoint", "服务地址保存失败"));

    // Field errors
    map.insert("field-required", ("This field is required", "此项必填"));
    map.insert("field-not-a-number", ("Must be a number", "必须为数字"));
    map.insert("field-out-of-range", ("Must be between 0 and 100", "必须在 0 到 100 之间"));

    // Submission failures
    map.insert("error-validation", ("Validation error", "数据校验失败"));
    map.insert("error-cors", ("Request blocked (CORS)", "请求被拦截（跨域）"));
    map.insert("error-not-found", ("Archive endpoint not found", "归档接口不存在"));
    map.insert("error-server", ("Server error", "服务器错误"));
    map.insert("error-unexpected-status", ("Unexpected response", "意外的响应"));
    map.insert("error-malformed", ("Malformed response", "响应格式错误"));
    map.insert("error-timeout", ("Request timed out", "请求超时"));
    map.insert("error-network", ("Network error", "网络错误"));

    // Log panel
    map.insert("log-title", ("Logs", "日志"));
    map.insert("log-clear", ("Clear", "清除"));

    // Table
    map.insert("table-no-data", ("No data", "无数据"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// "You have clicked the button N time(s)!"
pub fn clicked_message(locale: Locale, count: u64) -> String {
    let suffix = if count == 1 { "welcome-time" } else { "welcome-times" };
    format!(
        "{} {} {}",
        t(locale, "welcome-clicked-prefix"),
        count,
        t(locale, suffix)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_and_fallback() {
        assert_eq!(t(Locale::EnUS, "nav-archive").as_ref(), "Archive");
        assert_eq!(t(Locale::ZhCN, "nav-archive").as_ref(), "归档");
        assert_eq!(t(Locale::EnUS, "missing-key").as_ref(), "missing-key");
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("ZH"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("en-US"), Locale::EnUS);
        assert_eq!(Locale::from_tag("de"), Locale::EnUS);
        assert_eq!(Locale::resolve(Some("zh")), Locale::ZhCN);
        assert_eq!(Locale::EnUS.toggled(), Locale::ZhCN);
        for locale in [Locale::EnUS, Locale::ZhCN] {
            assert_eq!(Locale::from_tag(locale.tag()), locale);
        }
    }

    #[test]
    fn test_clicked_message_pluralization() {
        assert_eq!(
            clicked_message(Locale::EnUS, 0),
            "You have clicked the button 0 times!"
        );
        assert_eq!(
            clicked_message(Locale::EnUS, 1),
            "You have clicked the button 1 time!"
        );
        assert_eq!(
            clicked_message(Locale::EnUS, 2),
            "You have clicked the button 2 times!"
        );
    }

    #[test]
    fn test_submit_error_keys_are_translated() {
        use crate::domain::archive::SubmitError;

        for err in [
            SubmitError::Cors,
            SubmitError::NotFound,
            SubmitError::Server { status: 500 },
            SubmitError::Timeout { secs: 1 },
        ] {
            let key = err.message_key();
            assert_ne!(t(Locale::EnUS, key).as_ref(), key);
            assert_ne!(t(Locale::ZhCN, key).as_ref(), key);
        }
    }
}
