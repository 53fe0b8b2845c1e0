use breeze_core::{group, ConfigError, Declaration, Rule, RuleOutput};
use phf::phf_set;

static OVERFLOW_VALUES: phf::Set<&'static str> = phf_set! {
    "auto",
    "hidden",
    "visible",
    "scroll",
};

/// 取值不在 `OVERFLOW_VALUES` 中时视为不匹配
///
/// @example overflow-hidden overflow-x-auto
pub fn overflows() -> Result<Vec<Rule>, ConfigError> {
    Ok(vec![
        Rule::new(r"^overflow-(.+)$", |caps, _| {
            let value = group(caps, 1);
            if OVERFLOW_VALUES.contains(value) {
                vec![Declaration::new("overflow", value)].into()
            } else {
                RuleOutput::NoMatch
            }
        })?,
        Rule::new(r"^overflow-([xy])-(.+)$", |caps, _| {
            let value = group(caps, 2);
            if OVERFLOW_VALUES.contains(value) {
                vec![Declaration::new(format!("overflow-{}", group(caps, 1)), value)].into()
            } else {
                RuleOutput::NoMatch
            }
        })?,
    ])
}
