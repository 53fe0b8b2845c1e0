use crate::error::ConfigError;
use crate::theme::Theme;
use crate::types::RuleOutput;
use regex::{Captures, Regex};
use std::fmt;
use std::sync::Arc;

/// 规则处理函数：(匹配结果, 主题) → 输出
pub type Handler = dyn Fn(&Captures<'_>, &Theme) -> RuleOutput + Send + Sync;

/// 一条规则：匹配模式 + 处理函数
///
/// 规则集按声明顺序尝试，对同一个 token 第一条产生输出的规则生效。
#[derive(Clone)]
pub struct Rule {
    matcher: Regex,
    handler: Arc<Handler>,
}

impl Rule {
    pub fn new<F>(pattern: &str, handler: F) -> Result<Self, ConfigError>
    where
        F: Fn(&Captures<'_>, &Theme) -> RuleOutput + Send + Sync + 'static,
    {
        let matcher = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            matcher,
            handler: Arc::new(handler),
        })
    }

    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    /// 对 token 应用规则，模式不匹配时返回 `NoMatch`
    pub fn apply(&self, token: &str, theme: &Theme) -> RuleOutput {
        match self.matcher.captures(token) {
            Some(caps) => (self.handler)(&caps, theme),
            None => RuleOutput::NoMatch,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.matcher.as_str())
            .finish_non_exhaustive()
    }
}

/// 取第 `i` 个捕获组，未参与匹配的组视为空字符串
pub fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// 生成器配置：有序规则集 + 主题
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rules: Vec<Rule>,
    pub theme: Theme,
}

impl Config {
    pub fn new(rules: Vec<Rule>, theme: Theme) -> Self {
        Self { rules, theme }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Declaration;

    #[test]
    fn test_rule_apply() {
        let rule = Rule::new(r"^z-(\d+)$", |caps, _| {
            vec![Declaration::new("z-index", group(caps, 1))].into()
        })
        .unwrap();

        let theme = Theme::default();
        assert_eq!(
            rule.apply("z-10", &theme),
            RuleOutput::Declarations(vec![Declaration::new("z-index", "10")])
        );
        assert_eq!(rule.apply("z-auto", &theme), RuleOutput::NoMatch);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Rule::new(r"^p-(\d+$", |_, _| RuleOutput::NoMatch).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
        assert!(err.to_string().contains(r"^p-(\d+$"));
    }

    #[test]
    fn test_missing_group_is_empty() {
        let rule = Rule::new(r"^p([trbl])?-(\d+)$", |caps, _| {
            vec![Declaration::new("dir", group(caps, 1))].into()
        })
        .unwrap();
        assert_eq!(
            rule.apply("p-4", &Theme::default()),
            RuleOutput::Declarations(vec![Declaration::new("dir", "")])
        );
    }

    #[test]
    fn test_debug_shows_pattern() {
        let rule = Rule::new("^flex$", |_, _| RuleOutput::NoMatch).unwrap();
        assert!(format!("{:?}", rule).contains("^flex$"));
    }
}
