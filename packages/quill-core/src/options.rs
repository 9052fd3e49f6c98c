use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Snow theme, the toolbar-on-top default look.
pub const THEME_SNOW: &str = "snow";
/// Bubble theme, tooltip based.
pub const THEME_BUBBLE: &str = "bubble";

/// Quill version fetched from the CDN when none is set.
pub const QUILL_VERSION: &str = "1.3.7";
/// KaTeX version fetched from the CDN when the formula module is used.
pub const KATEX_VERSION: &str = "0.11.1";
/// Highlight.js version fetched from the CDN when the syntax module is used.
pub const HIGHLIGHTJS_VERSION: &str = "9.18.1";

/// Toolbar buttons requested for the editor.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolbarOptions {
    /// No toolbar module at all.
    Off,
    /// Let the active theme pick its default buttons (`toolbar: true`).
    ThemeDefault,
    /// Predefined basic set: text styles, lists, alignment, link.
    Basic,
    /// Predefined full set of button groups.
    Full,
    /// Nested button groups passed to the client unchanged.
    /// An empty array behaves like [`ToolbarOptions::Off`].
    Custom(Value),
}

impl Default for ToolbarOptions {
    fn default() -> Self {
        ToolbarOptions::ThemeDefault
    }
}

/// Options of one widget instance.
///
/// `configuration` overrides the whole incremental set: when it is a
/// non-empty object, theme/bounds/debug/placeholder/formats/read_only/
/// modules/toolbar_options are ignored and the object is used verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct QuillOptions {
    /// Theme name; `None` or empty leaves the editor with its base look.
    pub theme: Option<String>,
    /// Toolbar buttons.
    pub toolbar_options: ToolbarOptions,
    /// Custom icon markup per button name, eg.
    /// `{"bold": "<i class=\"fa fa-bold\"></i>"}`.
    pub icons: Option<Value>,
    /// Placeholder text shown in the empty editor.
    pub placeholder: Option<String>,
    /// DOM element the editor UI (tooltips etc.) is confined within,
    /// emitted as a raw client-side expression.
    pub bounds: Option<String>,
    /// Client logging level: "error", "warn", "log" or "info".
    pub debug: Option<String>,
    /// Whitelist of formats allowed in the editor (JSON array).
    pub formats: Option<Value>,
    /// Modules to enable, module name to `true` or an options object.
    pub modules: Option<Value>,
    /// Instantiate the editor in read-only mode.
    pub read_only: bool,
    /// Enable smart line breaks (SHIFT+Enter); synthesizes the
    /// `smart-breaker` module.
    pub smart_break: bool,
    /// Extra script appended after the editor setup; every `{quill}`
    /// token is replaced with the editor variable name.
    pub js: Option<String>,
    /// Full Quill configuration override (JSON object).
    pub configuration: Option<Value>,
    /// Quill version fetched from the CDN.
    pub quill_version: String,
    /// KaTeX version fetched from the CDN.
    pub katex_version: String,
    /// Highlight.js version fetched from the CDN.
    pub highlight_version: String,
    /// Highlight.js stylesheet name, with or without the `.css`/`.min.css`
    /// suffix.
    pub highlight_style: String,
    /// Serve assets from local paths instead of the CDNs.
    pub local_assets: bool,
}

impl Default for QuillOptions {
    fn default() -> Self {
        Self {
            theme: Some(THEME_SNOW.to_string()),
            toolbar_options: ToolbarOptions::default(),
            icons: None,
            placeholder: None,
            bounds: None,
            debug: None,
            formats: None,
            modules: None,
            read_only: false,
            smart_break: false,
            js: None,
            configuration: None,
            quill_version: QUILL_VERSION.to_string(),
            katex_version: KATEX_VERSION.to_string(),
            highlight_version: HIGHLIGHTJS_VERSION.to_string(),
            highlight_style: "default".to_string(),
            local_assets: false,
        }
    }
}

impl QuillOptions {
    /// Checks option types up front, before any resolution happens.
    pub fn validate(&self) -> Result<()> {
        if self.quill_version.is_empty() {
            return Err(ConfigError::InvalidVersion("quill_version"));
        }
        if self.katex_version.is_empty() {
            return Err(ConfigError::InvalidVersion("katex_version"));
        }
        if self.highlight_version.is_empty() {
            return Err(ConfigError::InvalidVersion("highlight_version"));
        }
        match &self.configuration {
            None | Some(Value::Null) | Some(Value::Object(_)) => {}
            Some(_) => return Err(ConfigError::InvalidConfiguration),
        }
        match &self.formats {
            None | Some(Value::Null) | Some(Value::Array(_)) => {}
            Some(_) => return Err(ConfigError::InvalidFormats),
        }
        match &self.modules {
            None | Some(Value::Null) | Some(Value::Object(_)) => {}
            Some(_) => return Err(ConfigError::InvalidModules),
        }
        match &self.icons {
            None | Some(Value::Null) => {}
            Some(Value::Object(icons)) => {
                // an all-numeric key set is a sequential list in disguise
                if icons.keys().any(|key| key.is_empty())
                    || (!icons.is_empty()
                        && icons
                            .keys()
                            .all(|key| key.chars().all(|ch| ch.is_ascii_digit())))
                {
                    return Err(ConfigError::InvalidIcons);
                }
            }
            Some(_) => return Err(ConfigError::InvalidIcons),
        }
        Ok(())
    }
}
