//! CSS 标识符转义
//!
//! 实现 CSSOM 规范中的 "serialize an identifier" 算法：
//! <https://drafts.csswg.org/cssom/#serialize-an-identifier>
//!
//! 转义后的字符串可以直接用作类选择器，不需要再做任何处理。

use std::fmt::Write;

/// 将任意字符串转义为合法的 CSS 标识符
///
/// - `"p-4"` → `"p-4"`
/// - `"text-red-300/50"` → `"text-red-300\/50"`
/// - `"2xl"` → `"\32 xl"`
/// - `"-"` → `"\-"`
pub fn escape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let first = input.chars().next();
    let is_lone_hyphen = input == "-";

    for (index, ch) in input.chars().enumerate() {
        match ch {
            '\0' => result.push('\u{FFFD}'),
            ',' => result.push_str("\\2c "),
            '\u{1}'..='\u{1f}' | '\u{7f}' => push_code_point(&mut result, ch),
            '0'..='9' if index == 0 => push_code_point(&mut result, ch),
            '0'..='9' if index == 1 && first == Some('-') => push_code_point(&mut result, ch),
            '-' if is_lone_hyphen => result.push_str("\\-"),
            '-' | '_' | '0'..='9' | 'A'..='Z' | 'a'..='z' => result.push(ch),
            c if (c as u32) >= 0x80 => result.push(c),
            c => {
                result.push('\\');
                result.push(c);
            }
        }
    }

    result
}

/// https://drafts.csswg.org/cssom/#escape-a-character-as-code-point
fn push_code_point(out: &mut String, ch: char) {
    // 写入 String 不会失败
    let _ = write!(out, "\\{:x} ", ch as u32);
}
