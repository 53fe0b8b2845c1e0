mod colors;
mod gap;
mod layouts;
mod spacing;

use breeze_core::{ConfigError, Rule};

pub use colors::resolve_color;

/// 默认规则集
///
/// 顺序即优先级：同一个 token 由第一条产生输出的规则决定。
pub fn rules() -> Result<Vec<Rule>, ConfigError> {
    let mut rules = Vec::new();
    rules.extend(spacing::paddings()?);
    rules.extend(spacing::margins()?);
    rules.extend(spacing::space_between()?);
    rules.extend(colors::opacity()?);
    rules.extend(colors::text_colors()?);
    rules.extend(colors::bg_colors()?);
    rules.extend(colors::border_colors()?);
    rules.extend(gap::gaps()?);
    rules.extend(layouts::overflows()?);
    Ok(rules)
}
