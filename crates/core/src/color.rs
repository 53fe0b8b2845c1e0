use std::fmt;

/// RGBA 颜色，`alpha` 取值 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// `rgba(r,g,b,<alpha>)`，alpha 部分由调用方给出（如 CSS 变量引用）
    pub fn to_css_with(&self, alpha: &str) -> String {
        format!("rgba({},{},{},{})", self.red, self.green, self.blue, alpha)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// 解析 hex 颜色
///
/// 支持 3 / 4 / 6 / 8 位格式，`#` 前缀可选。没有 alpha 通道时 alpha 为 1。
/// 长度不对或包含非 hex 字符时返回 `None`。
pub fn hex_to_rgba(hex: &str) -> Option<Rgba> {
    let body = hex.strip_prefix('#').unwrap_or(hex);
    if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channels: Vec<u8> = match body.len() {
        // 短格式：每位重复一次（#f00 → #ff0000）
        3 | 4 => body
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| (d * 17) as u8)
            .collect(),
        6 | 8 => (0..body.len())
            .step_by(2)
            .filter_map(|i| u8::from_str_radix(&body[i..i + 2], 16).ok())
            .collect(),
        _ => return None,
    };

    let alpha = match channels.get(3) {
        Some(&a) => (a as f64 / 255.0 * 100.0).round() / 100.0,
        None => 1.0,
    };

    Some(Rgba {
        red: channels[0],
        green: channels[1],
        blue: channels[2],
        alpha,
    })
}
