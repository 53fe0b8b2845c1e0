pub mod cache;
pub mod color;
pub mod config;
pub mod css;
pub mod error;
pub mod escape;
pub mod generator;
pub mod handlers;
pub mod merge;
pub mod rule;
pub mod shared;
pub mod theme;
pub mod tokenize;
pub mod types;

// Re-export commonly used types
pub use cache::{Cache, Lookup};
pub use color::{hex_to_rgba, Rgba};
pub use config::{ConfigFile, StaticRule};
pub use error::ConfigError;
pub use escape::escape;
pub use generator::Generator;
pub use rule::{group, Config, Handler, Rule};
pub use shared::SharedGenerator;
pub use theme::{Theme, ThemeColor, DEFAULT_SHADE};
pub use tokenize::{tokenize, TOKEN_DELIMITERS};
pub use types::{Declaration, RuleOutput};

// Handler signatures expose regex captures
pub use regex::Captures;
