use std::collections::HashMap;

/// 缓存查询结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// 从未解析过
    Miss,
    /// 已确认不匹配任何规则
    Unresolved,
    /// 已生成的 CSS
    Css(&'a str),
}

/// token → 生成结果的缓存
///
/// 条目一旦写入就不会再改变：同一个 token 在 Generator 生命周期内
/// 只会被规则集解析一次。
#[derive(Debug, Clone, Default)]
pub struct Cache {
    entries: HashMap<String, Option<String>>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, token: &str) -> Lookup<'_> {
        match self.entries.get(token) {
            None => Lookup::Miss,
            Some(None) => Lookup::Unresolved,
            Some(Some(css)) => Lookup::Css(css),
        }
    }

    /// 记录生成的 CSS；已存在的条目保持不变
    pub fn insert_css(&mut self, token: &str, css: String) {
        self.entries.entry(token.to_string()).or_insert(Some(css));
    }

    /// 记录为永久未命中；已存在的条目保持不变
    pub fn insert_unresolved(&mut self, token: &str) {
        self.entries.entry(token.to_string()).or_insert(None);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
