use breeze_core::handlers::size;
use breeze_core::{group, ConfigError, Declaration, Rule, RuleOutput};
use phf::phf_map;

/// 方向缩写 → 属性后缀
static DIRECTIONS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "t" => &["-top"],
    "r" => &["-right"],
    "b" => &["-bottom"],
    "l" => &["-left"],
    "x" => &["-left", "-right"],
    "y" => &["-top", "-bottom"],
};

const SPACE_BETWEEN_SELECTOR: &str = ">:not([hidden])~:not([hidden])";

fn direction_suffixes(direction: &str) -> Option<&'static [&'static str]> {
    if direction.is_empty() {
        Some(&[""])
    } else {
        DIRECTIONS.get(direction).copied()
    }
}

fn spacing(property: &str, direction: &str, raw: &str) -> Option<Vec<Declaration>> {
    let value = size(raw)?;
    let suffixes = direction_suffixes(direction)?;
    Some(
        suffixes
            .iter()
            .map(|suffix| Declaration::new(format!("{}{}", property, suffix), value.clone()))
            .collect(),
    )
}

/// `p-4` / `pt-2px` / `px-[3px]` 这一类规则
fn spacing_rules(prefix: &str, property: &'static str) -> Result<Vec<Rule>, ConfigError> {
    Ok(vec![
        Rule::new(&format!(r"^{}-(\d+)([a-z]*)$", prefix), move |caps, _| {
            let raw = format!("{}{}", group(caps, 1), group(caps, 2));
            spacing(property, "", &raw).into()
        })?,
        Rule::new(&format!(r"^{}([trblxy])-(\d+)([a-z]*)$", prefix), move |caps, _| {
            let raw = format!("{}{}", group(caps, 2), group(caps, 3));
            spacing(property, group(caps, 1), &raw).into()
        })?,
        Rule::new(&format!(r"^{}([trblxy])?-(\[[^\]]+\])$", prefix), move |caps, _| {
            spacing(property, group(caps, 1), group(caps, 2)).into()
        })?,
    ])
}

/// @example p-4 pt-2 px-4px p-[3px]
pub fn paddings() -> Result<Vec<Rule>, ConfigError> {
    spacing_rules("p", "padding")
}

/// @example m-4 mt-2 my-4px m-[auto]
pub fn margins() -> Result<Vec<Rule>, ConfigError> {
    spacing_rules("m", "margin")
}

/// 子元素间距，选择器带 `> :not([hidden]) ~ :not([hidden])` 后缀
///
/// @example space-x-4 space-y-2px
pub fn space_between() -> Result<Vec<Rule>, ConfigError> {
    Ok(vec![Rule::new(r"^space-([xy])-(.+)$", |caps, _| {
        let property = match group(caps, 1) {
            "x" => "margin-left",
            _ => "margin-top",
        };
        match size(group(caps, 2)) {
            Some(value) => RuleOutput::WithSelectorSuffix {
                suffix: SPACE_BETWEEN_SELECTOR.to_string(),
                declarations: vec![Declaration::new(property, value)],
            },
            None => RuleOutput::NoMatch,
        }
    })?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use breeze_core::Theme;

    fn apply(rules: &[Rule], token: &str) -> RuleOutput {
        let theme = Theme::default();
        rules
            .iter()
            .map(|rule| rule.apply(token, &theme))
            .find(RuleOutput::is_match)
            .unwrap_or(RuleOutput::NoMatch)
    }

    fn decls(pairs: &[(&str, &str)]) -> RuleOutput {
        RuleOutput::Declarations(
            pairs
                .iter()
                .map(|(p, v)| Declaration::new(*p, *v))
                .collect(),
        )
    }

    #[test]
    fn test_padding_scaled() {
        let rules = paddings().unwrap();
        assert_eq!(apply(&rules, "p-4"), decls(&[("padding", "1rem")]));
        assert_eq!(apply(&rules, "p-3"), decls(&[("padding", "0.75rem")]));
    }

    #[test]
    fn test_padding_with_unit() {
        let rules = paddings().unwrap();
        assert_eq!(apply(&rules, "p-4px"), decls(&[("padding", "4px")]));
        assert_eq!(apply(&rules, "pt-2em"), decls(&[("padding-top", "2em")]));
    }

    #[test]
    fn test_padding_directions() {
        let rules = paddings().unwrap();
        assert_eq!(apply(&rules, "pt-1"), decls(&[("padding-top", "0.25rem")]));
        assert_eq!(apply(&rules, "pr-1"), decls(&[("padding-right", "0.25rem")]));
        assert_eq!(apply(&rules, "pb-1"), decls(&[("padding-bottom", "0.25rem")]));
        assert_eq!(apply(&rules, "pl-1"), decls(&[("padding-left", "0.25rem")]));
        assert_eq!(
            apply(&rules, "px-2"),
            decls(&[("padding-left", "0.5rem"), ("padding-right", "0.5rem")])
        );
        assert_eq!(
            apply(&rules, "py-2"),
            decls(&[("padding-top", "0.5rem"), ("padding-bottom", "0.5rem")])
        );
    }

    #[test]
    fn test_padding_bracket() {
        let rules = paddings().unwrap();
        assert_eq!(apply(&rules, "p-[3px]"), decls(&[("padding", "3px")]));
        assert_eq!(
            apply(&rules, "pt-[calc(1rem+2px)]"),
            decls(&[("padding-top", "calc(1rem+2px)")])
        );
    }

    #[test]
    fn test_padding_rejects() {
        let rules = paddings().unwrap();
        assert_eq!(apply(&rules, "p-auto"), RuleOutput::NoMatch);
        assert_eq!(apply(&rules, "pz-4"), RuleOutput::NoMatch);
        assert_eq!(apply(&rules, "p-4PX"), RuleOutput::NoMatch);
    }

    #[test]
    fn test_margin() {
        let rules = margins().unwrap();
        assert_eq!(apply(&rules, "m-2"), decls(&[("margin", "0.5rem")]));
        assert_eq!(
            apply(&rules, "mx-[auto]"),
            decls(&[("margin-left", "auto"), ("margin-right", "auto")])
        );
    }

    #[test]
    fn test_space_between() {
        let rules = space_between().unwrap();
        assert_eq!(
            apply(&rules, "space-x-4"),
            RuleOutput::WithSelectorSuffix {
                suffix: SPACE_BETWEEN_SELECTOR.to_string(),
                declarations: vec![Declaration::new("margin-left", "1rem")],
            }
        );
        assert_eq!(apply(&rules, "space-z-4"), RuleOutput::NoMatch);
        assert_eq!(apply(&rules, "space-y-auto"), RuleOutput::NoMatch);
    }
}
