use crate::cache::{Cache, Lookup};
use crate::css::to_css_block;
use crate::escape::escape;
use crate::merge::merge_declarations;
use crate::rule::Config;
use crate::tokenize::tokenize;
use crate::types::RuleOutput;
use std::collections::HashMap;

/// 按需生成原子化 CSS
///
/// 一个 Generator 持有一份只读配置和一份只增不改的缓存。
/// 配置变化时需要创建新的 Generator。
#[derive(Debug)]
pub struct Generator {
    config: Config,
    cache: Cache,
    /// token → 进入规则匹配的次数
    resolutions: HashMap<String, usize>,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cache: Cache::new(),
            resolutions: HashMap::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// 某个 token 在本实例中经过规则匹配的次数（0 或 1）
    pub fn resolution_count(&self, token: &str) -> usize {
        self.resolutions.get(token).copied().unwrap_or(0)
    }

    /// 从源码中提取 token 并生成 CSS
    ///
    /// 输出顺序：
    /// 1. 命中缓存的 token，按 token 首次出现顺序
    /// 2. 新解析的 token，先按规则顺序、再按 token 首次出现顺序
    ///
    /// 各 CSS 块以换行连接。不会失败，最坏情况返回空字符串。
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = code.len()))]
    pub fn generate(&mut self, code: &str) -> String {
        let mut pending = tokenize(code);
        let mut css: Vec<String> = Vec::new();

        // 1. 缓存
        let cache = &self.cache;
        pending.retain(|token| match cache.lookup(token) {
            Lookup::Miss => true,
            Lookup::Unresolved => false,
            Lookup::Css(block) => {
                css.push(block.to_string());
                false
            }
        });

        for token in &pending {
            *self.resolutions.entry(token.to_string()).or_insert(0) += 1;
        }

        // 2. 规则：外层按规则顺序，已命中的 token 不再参与后续规则
        for (index, rule) in self.config.rules.iter().enumerate() {
            if pending.is_empty() {
                break;
            }
            let theme = &self.config.theme;
            let cache = &mut self.cache;
            pending.retain(|token| {
                let block = match rule.apply(token, theme) {
                    RuleOutput::NoMatch => return true,
                    RuleOutput::Declarations(declarations) => {
                        to_css_block(&format!(".{}", escape(token)), &merge_declarations(declarations))
                    }
                    RuleOutput::WithSelectorSuffix {
                        suffix,
                        declarations,
                    } => to_css_block(
                        &format!(".{}{}", escape(token), suffix),
                        &merge_declarations(declarations),
                    ),
                };
                tracing::trace!(token = *token, rule = index, "matched");
                cache.insert_css(token, block.clone());
                css.push(block);
                false
            });
        }

        // 3. 剩余 token 记为永久未命中
        if !pending.is_empty() {
            tracing::debug!(count = pending.len(), "unresolved tokens");
        }
        for token in &pending {
            self.cache.insert_unresolved(token);
        }

        css.join("\n")
    }
}
