/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// CSS 属性名（如 "padding"）
    pub property: String,
    /// CSS 属性值（如 "1rem"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// 规则处理函数的返回值
///
/// `NoMatch` 表示该规则不适用，生成器会继续尝试后面的规则；
/// 空的声明列表仍然算作命中，会输出一个空的声明块。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutput {
    NoMatch,
    /// 以转义后的 token 作为类选择器
    Declarations(Vec<Declaration>),
    /// 以转义后的 token 拼接 `suffix` 作为选择器
    WithSelectorSuffix {
        suffix: String,
        declarations: Vec<Declaration>,
    },
}

impl RuleOutput {
    pub fn is_match(&self) -> bool {
        !matches!(self, RuleOutput::NoMatch)
    }
}

impl From<Option<Vec<Declaration>>> for RuleOutput {
    fn from(value: Option<Vec<Declaration>>) -> Self {
        match value {
            Some(declarations) => RuleOutput::Declarations(declarations),
            None => RuleOutput::NoMatch,
        }
    }
}

impl From<Vec<Declaration>> for RuleOutput {
    fn from(declarations: Vec<Declaration>) -> Self {
        RuleOutput::Declarations(declarations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option() {
        let none: Option<Vec<Declaration>> = None;
        assert_eq!(RuleOutput::from(none), RuleOutput::NoMatch);

        let some = Some(vec![Declaration::new("gap", "1rem")]);
        assert!(RuleOutput::from(some).is_match());
    }

    #[test]
    fn test_empty_declarations_still_match() {
        let output = RuleOutput::from(Vec::new());
        assert!(output.is_match());
    }
}
