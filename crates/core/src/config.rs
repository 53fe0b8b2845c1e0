use crate::error::ConfigError;
use crate::rule::{Config, Rule};
use crate::theme::Theme;
use crate::types::{Declaration, RuleOutput};
use indexmap::IndexMap;
use serde::Deserialize;

/// JSON 配置文件
///
/// ```json
/// {
///   "theme": { "colors": { "brand": { "DEFAULT": "#0ea5e9" } } },
///   "rules": [
///     { "pattern": "^z-(\\d+)$", "declarations": { "z-index": "$1" } }
///   ]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub rules: Vec<StaticRule>,
}

/// 声明固定的规则，值中可以用 `$1` / `${1}` 引用捕获组
#[derive(Debug, Clone, Deserialize)]
pub struct StaticRule {
    pub pattern: String,
    pub declarations: IndexMap<String, String>,
    #[serde(default)]
    pub selector_suffix: Option<String>,
}

impl StaticRule {
    pub fn into_rule(self) -> Result<Rule, ConfigError> {
        let StaticRule {
            pattern,
            declarations,
            selector_suffix,
        } = self;

        Rule::new(&pattern, move |caps, _| {
            let declarations: Vec<Declaration> = declarations
                .iter()
                .map(|(property, template)| {
                    let mut value = String::new();
                    caps.expand(template, &mut value);
                    Declaration::new(property.as_str(), value)
                })
                .collect();

            match &selector_suffix {
                Some(suffix) => RuleOutput::WithSelectorSuffix {
                    suffix: suffix.clone(),
                    declarations,
                },
                None => RuleOutput::Declarations(declarations),
            }
        })
    }
}

impl ConfigFile {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 叠加到 `base` 之上
    ///
    /// 用户规则排在 `base` 的规则之前（先匹配者生效），主题同名项覆盖 `base`。
    pub fn into_config(self, base: Config) -> Result<Config, ConfigError> {
        let mut rules = self
            .rules
            .into_iter()
            .map(StaticRule::into_rule)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(user_rules = rules.len(), "loaded config");

        rules.extend(base.rules);
        Ok(Config::new(rules, base.theme.merge(self.theme)))
    }
}
