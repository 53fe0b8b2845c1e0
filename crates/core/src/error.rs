use thiserror::Error;

/// 配置阶段的错误
///
/// 生成阶段不会产生错误，无法解析的 token 只会被记为未命中。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}
