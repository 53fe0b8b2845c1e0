pub mod rules;
pub mod theme_values;

use breeze_core::{Config, ConfigError, ConfigFile, Theme, ThemeColor};

pub use rules::rules;

/// 由内置调色板构建的默认主题
pub fn default_theme() -> Theme {
    let mut theme = Theme::new();

    for (name, value) in theme_values::FLAT_COLORS.entries() {
        theme = theme.with_color(*name, ThemeColor::Flat(value.to_string()));
    }

    for (name, shades) in theme_values::SHADED_COLORS.entries() {
        let shades = shades
            .iter()
            .map(|(shade, value)| (shade.to_string(), value.to_string()))
            .collect();
        theme = theme.with_color(*name, ThemeColor::Shades(shades));
    }

    theme
}

/// 默认规则集 + 默认主题
pub fn preset_config() -> Result<Config, ConfigError> {
    Ok(Config::new(rules()?, default_theme()))
}

/// 使用自定义主题的默认规则集
pub fn preset_config_with_theme(theme: Theme) -> Result<Config, ConfigError> {
    Ok(Config::new(rules()?, theme))
}

/// 加载 JSON 配置并叠加到默认配置之上
pub fn load_config(json: &str) -> Result<Config, ConfigError> {
    ConfigFile::from_json(json)?.into_config(preset_config()?)
}
