#![deny(warnings)]
pub use config::{resolve, ConfigValue, JsExpression, PluginFlags, QuillConfig, Resolution};
pub use error::{ConfigError, Result};
pub use options::{
    QuillOptions, ToolbarOptions, HIGHLIGHTJS_VERSION, KATEX_VERSION, QUILL_VERSION, THEME_BUBBLE,
    THEME_SNOW,
};

pub use serde_json;

pub mod config;
pub mod error;
pub mod options;
pub mod toolbar;
pub mod util;
