use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 未指定色阶时使用的键（`text-red` → `red.DEFAULT`）
pub const DEFAULT_SHADE: &str = "DEFAULT";

/// 调色板中的一项：单一颜色或色阶表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Flat(String),
    Shades(IndexMap<String, String>),
}

/// 主题配置，在一个 Generator 的生命周期内只读
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub colors: IndexMap<String, ThemeColor>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, name: impl Into<String>, color: ThemeColor) -> Self {
        self.colors.insert(name.into(), color);
        self
    }

    /// 查询颜色
    ///
    /// 色阶表按 `shade` 取值；单一颜色忽略 `shade`。
    pub fn color(&self, name: &str, shade: &str) -> Option<&str> {
        match self.colors.get(name)? {
            ThemeColor::Flat(value) => Some(value),
            ThemeColor::Shades(shades) => shades.get(shade).map(String::as_str),
        }
    }

    /// 用 `other` 中的同名项覆盖当前主题
    pub fn merge(mut self, other: Theme) -> Self {
        self.colors.extend(other.colors);
        self
    }
}
