use breeze_core::handlers::size;
use breeze_core::{group, ConfigError, Declaration, Rule};

/// 同时输出旧的 `grid-*-gap` 属性和标准属性
fn gap_rule(pattern: &str, legacy: &'static str, standard: &'static str) -> Result<Rule, ConfigError> {
    Rule::new(pattern, move |caps, _| {
        size(group(caps, 1))
            .map(|value| {
                vec![
                    Declaration::new(legacy, value.clone()),
                    Declaration::new(standard, value),
                ]
            })
            .into()
    })
}

/// `flex-` / `grid-` 前缀可选，语义相同
///
/// @example gap-4 gap-x-2px flex-gap-y-[3px]
pub fn gaps() -> Result<Vec<Rule>, ConfigError> {
    Ok(vec![
        gap_rule(r"^(?:flex-|grid-)?gap-([^-]+)$", "grid-gap", "gap")?,
        gap_rule(r"^(?:flex-|grid-)?gap-x-([^-]+)$", "grid-column-gap", "column-gap")?,
        gap_rule(r"^(?:flex-|grid-)?gap-y-([^-]+)$", "grid-row-gap", "row-gap")?,
    ])
}
