use breeze_core::handlers::{bracket, percent};
use breeze_core::{
    group, hex_to_rgba, Captures, ConfigError, Declaration, Rule, RuleOutput, Theme,
    DEFAULT_SHADE,
};

/// 解析颜色主体 `main[/opacity]` 并生成 `property` 的声明
///
/// - `red-300` / `red300` → 主题中 `red.300`
/// - `red` → 主题中 `red.DEFAULT`
/// - `[#ff0000]` / `hex-ff0000` → 字面量颜色
/// - `transparent` / `inherit` / `current` → 关键字，不参与透明度计算
///
/// 未显式给出透明度时使用颜色自身的 alpha；透明度无法解析时退回到
/// `--un-{var_name}-opacity` 变量，交给单独的透明度规则覆盖。
pub fn resolve_color(
    body: &str,
    property: &str,
    var_name: &str,
    theme: &Theme,
) -> Option<Vec<Declaration>> {
    let (main, opacity) = match body.split_once('/') {
        Some((main, rest)) => (main, rest.split('/').next()),
        None => (body, None),
    };

    let (name, shade) = split_shade(main);
    if name.is_empty() {
        return None;
    }

    let literal = bracket(main).unwrap_or(main);
    let mut color = literal
        .strip_prefix('#')
        .or_else(|| literal.strip_prefix("hex-"))
        .filter(|hex| !hex.is_empty());

    if color.is_none() {
        let keyword = match name {
            "transparent" => Some("transparent"),
            "inherit" => Some("inherit"),
            "current" => Some("currentColor"),
            _ => None,
        };
        if let Some(keyword) = keyword {
            return Some(vec![Declaration::new(property, keyword)]);
        }
        color = theme.color(name, shade);
    }

    let rgba = hex_to_rgba(color?)?;
    let alpha = match opacity {
        Some(opacity) => opacity
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(|n| n / 100.0),
        None => Some(rgba.alpha),
    };

    match alpha {
        Some(alpha) => Some(vec![Declaration::new(
            property,
            rgba.with_alpha(alpha).to_string(),
        )]),
        None => {
            let variable = format!("--un-{}-opacity", var_name);
            let value = rgba.to_css_with(&format!("var({})", variable));
            Some(vec![
                Declaration::new(variable, "1"),
                Declaration::new(property, value),
            ])
        }
    }
}

/// 在 "小写字母 → 数字" 的边界处拆出颜色名和色阶
///
/// `red-300` → (`red`, `300`)，`red300` → (`red`, `300`)，`red` → (`red`, `DEFAULT`)
fn split_shade(main: &str) -> (&str, &str) {
    let Some((name_end, shade_start)) = shade_boundary(main) else {
        return (main, DEFAULT_SHADE);
    };

    let rest = &main[shade_start..];
    let shade = match shade_boundary(rest) {
        Some((end, _)) => &rest[..end],
        None => rest,
    };
    (&main[..name_end], shade)
}

/// 返回 (名称结束位置, 色阶开始位置)，中间可以夹一个 `-`
fn shade_boundary(s: &str) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    (1..bytes.len()).find_map(|i| {
        if !bytes[i - 1].is_ascii_lowercase() {
            return None;
        }
        match bytes[i] {
            b'0'..=b'9' => Some((i, i)),
            b'-' if bytes.get(i + 1).is_some_and(u8::is_ascii_digit) => Some((i, i + 1)),
            _ => None,
        }
    })
}

fn color_rule(
    pattern: &str,
    property: &'static str,
    var_name: &'static str,
) -> Result<Rule, ConfigError> {
    Rule::new(pattern, move |caps: &Captures<'_>, theme: &Theme| {
        resolve_color(group(caps, 1), property, var_name, theme).into()
    })
}

fn opacity_variable_rule(pattern: &str, variable: &'static str) -> Result<Rule, ConfigError> {
    Rule::new(pattern, move |caps, _| {
        percent(group(caps, 1))
            .map(|value| vec![Declaration::new(variable, value)])
            .into()
    })
}

/// @example op10 op-30 opacity-100
pub fn opacity() -> Result<Vec<Rule>, ConfigError> {
    Ok(vec![Rule::new(r"^op(?:acity)?-?(\d+)$", |caps, _| {
        percent(group(caps, 1))
            .map(|value| vec![Declaration::new("opacity", value)])
            .into()
    })?])
}

/// 透明度规则排在颜色规则之前，避免 `text-op-50` 被当成名为 `op` 的颜色
///
/// @example c-red color-red5 text-red-300 text-op-50
pub fn text_colors() -> Result<Vec<Rule>, ConfigError> {
    Ok(vec![
        opacity_variable_rule(r"^(?:text|color|c)-op(?:acity)?-?(\d+)$", "--un-text-opacity")?,
        color_rule(r"^(?:text|color|c)-(.+)$", "color", "text")?,
    ])
}

/// @example bg-white bg-blue-500/20 bg-op-50
pub fn bg_colors() -> Result<Vec<Rule>, ConfigError> {
    Ok(vec![
        opacity_variable_rule(r"^bg-op(?:acity)?-?(\d+)$", "--un-bg-opacity")?,
        color_rule(r"^bg-(.+)$", "background-color", "bg")?,
    ])
}

/// @example border-gray-200 border-[#ccc] border-op-40
pub fn border_colors() -> Result<Vec<Rule>, ConfigError> {
    Ok(vec![
        opacity_variable_rule(r"^border-op(?:acity)?-?(\d+)$", "--un-border-opacity")?,
        color_rule(r"^border-(.+)$", "border-color", "border")?,
    ])
}
