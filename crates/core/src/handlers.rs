//! 规则处理函数使用的值解析工具
//!
//! 所有函数都是纯函数，遇到无法解析的输入返回 `None`，
//! 由调用方把它当作 "该规则不适用"。

/// 数字刻度到 rem 的换算系数（`4` → `1rem`）
pub const SIZE_SCALE: f64 = 4.0;

/// 从方括号中提取任意值
///
/// 例如：`"[3px]"` → `Some("3px")`，`"4"` → `None`，`"[]"` → `None`
pub fn bracket(s: &str) -> Option<&str> {
    s.strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .filter(|inner| !inner.is_empty())
}

/// `"50"` → `"50%"`
pub fn percent(s: &str) -> Option<String> {
    parse_number(s).map(|n| format!("{}%", n))
}

/// 将尺寸片段规范化为 CSS 长度
///
/// - `"4"` → `"1rem"`（按刻度换算）
/// - `"4px"` / `"50%"` → 原样返回
/// - `"[calc(100%-1px)]"` → `"calc(100%-1px)"`
pub fn size(s: &str) -> Option<String> {
    if let Some(value) = bracket(s) {
        return Some(value.to_string());
    }

    if let Some(n) = parse_number(s) {
        return Some(format!("{}rem", n / SIZE_SCALE));
    }

    let split = s.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
    let (number, unit) = s.split_at(split);
    let unit_ok = unit == "%" || unit.chars().all(|c| c.is_ascii_alphabetic());
    if parse_number(number).is_some() && unit_ok {
        Some(s.to_string())
    } else {
        None
    }
}

/// 只接受 `123` / `1.5` 这类纯数字，拒绝 `inf`、`1e3`、`-1`
fn parse_number(s: &str) -> Option<f64> {
    let valid = s.chars().any(|c| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !valid {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket() {
        assert_eq!(bracket("[3px]"), Some("3px"));
        assert_eq!(bracket("[#ff0000]"), Some("#ff0000"));
        assert_eq!(bracket("3px"), None);
        assert_eq!(bracket("[3px"), None);
        assert_eq!(bracket("[]"), None);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent("50").as_deref(), Some("50%"));
        assert_eq!(percent("100").as_deref(), Some("100%"));
        assert_eq!(percent("7.5").as_deref(), Some("7.5%"));
        assert_eq!(percent("abc"), None);
        assert_eq!(percent(""), None);
        assert_eq!(percent("."), None);
        assert_eq!(percent("1.2.3"), None);
    }

    #[test]
    fn test_size_scaled() {
        assert_eq!(size("4").as_deref(), Some("1rem"));
        assert_eq!(size("1").as_deref(), Some("0.25rem"));
        assert_eq!(size("10").as_deref(), Some("2.5rem"));
        assert_eq!(size("0").as_deref(), Some("0rem"));
        assert_eq!(size("0.5").as_deref(), Some("0.125rem"));
    }

    #[test]
    fn test_size_with_unit() {
        assert_eq!(size("4px").as_deref(), Some("4px"));
        assert_eq!(size("1.5em").as_deref(), Some("1.5em"));
        assert_eq!(size("50%").as_deref(), Some("50%"));
    }

    #[test]
    fn test_size_bracket_bypasses_scaling() {
        assert_eq!(size("[4]").as_deref(), Some("4"));
        assert_eq!(size("[calc(100%-1px)]").as_deref(), Some("calc(100%-1px)"));
    }

    #[test]
    fn test_size_rejects_malformed() {
        assert_eq!(size("px"), None);
        assert_eq!(size("auto"), None);
        assert_eq!(size("4p4"), None);
        assert_eq!(size(""), None);
    }
}
