use serde_json::{Map, Value};

use crate::error::Result;
use crate::options::QuillOptions;
use crate::toolbar;

/// A raw client-side expression, emitted unquoted into the configuration
/// literal instead of a JSON string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsExpression(pub String);

impl JsExpression {
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }
}

/// One value of the resolved configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// Plain data, serialized as JSON.
    Plain(Value),
    /// Raw expression evaluated on the client.
    Expression(JsExpression),
}

impl ConfigValue {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ConfigValue::Plain(value) => Some(value),
            ConfigValue::Expression(_) => None,
        }
    }

    pub fn as_expression(&self) -> Option<&str> {
        match self {
            ConfigValue::Plain(_) => None,
            ConfigValue::Expression(expression) => Some(&expression.0),
        }
    }
}

/// The resolved configuration handed to the client-side editor constructor.
///
/// Key insertion order is significant and survives into the serialized form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuillConfig {
    entries: Vec<(String, ConfigValue)>,
}

impl QuillConfig {
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    /// Configuration keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add(&mut self, name: &str, value: ConfigValue) {
        if let Some(slot) = self.entries.iter_mut().find(|(entry, _)| entry == name) {
            slot.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Serializes the configuration to JSON text, with expressions emitted
    /// raw: each one is swapped for a placeholder token first and
    /// substituted back into the encoded output.
    pub fn to_json(&self) -> String {
        let mut map = Map::new();
        let mut expressions = Vec::new();
        for (name, value) in &self.entries {
            match value {
                ConfigValue::Plain(plain) => {
                    map.insert(name.clone(), plain.clone());
                }
                ConfigValue::Expression(expression) => {
                    let token = format!("!{{[{}]}}!", expressions.len());
                    expressions.push((format!("\"{token}\""), expression.0.clone()));
                    map.insert(name.clone(), Value::String(token));
                }
            }
        }
        let mut encoded = Value::Object(map).to_string();
        for (token, expression) in expressions {
            encoded = encoded.replace(&token, &expression);
        }
        encoded
    }
}

/// Plugins whose asset bundles must be loaded, derived from the module keys
/// present in the resolved configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PluginFlags {
    pub katex: bool,
    pub highlight_js: bool,
    pub smart_break: bool,
}

/// Output of [`resolve`]: the configuration, the derived plugin flags and
/// the effective theme used for asset selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub config: QuillConfig,
    pub flags: PluginFlags,
    /// Theme driving the stylesheet choice; read back from the explicit
    /// configuration override when one is set.
    pub theme: Option<String>,
}

impl Resolution {
    pub fn is_katex(&self) -> bool {
        self.flags.katex
    }

    pub fn is_highlight_js(&self) -> bool {
        self.flags.highlight_js
    }

    pub fn is_smart_break(&self) -> bool {
        self.flags.smart_break
    }
}

/// Resolves widget options into the final editor configuration.
///
/// A non-empty `configuration` object wins over every incremental option:
/// it is used verbatim, with only the theme and the formula/syntax module
/// keys read back for asset selection. The smart-break flag is never read
/// back from it, matching the original widget.
pub fn resolve(options: &QuillOptions) -> Result<Resolution> {
    options.validate()?;

    let mut flags = PluginFlags::default();
    let mut config = QuillConfig::default();
    let mut theme = options.theme.clone();

    if let Some(configuration) = non_empty_object(options.configuration.as_ref()) {
        log::debug!("using the explicit configuration override");
        if let Some(value) = configuration.get("theme").filter(|value| !value.is_null()) {
            theme = value.as_str().map(str::to_string);
        }
        let modules = configuration.get("modules");
        flags.katex = module_present(modules, "formula");
        flags.highlight_js = module_present(modules, "syntax");
        for (name, value) in configuration {
            config.add(name, ConfigValue::Plain(value.clone()));
        }
        return Ok(Resolution {
            config,
            flags,
            theme,
        });
    }

    if let Some(theme) = options.theme.as_deref().filter(|theme| !theme.is_empty()) {
        config.add("theme", ConfigValue::Plain(Value::String(theme.to_string())));
    }
    if let Some(bounds) = options.bounds.as_deref().filter(|bounds| !bounds.is_empty()) {
        config.add("bounds", ConfigValue::Expression(JsExpression::new(bounds)));
    }
    if let Some(debug) = options.debug.as_deref().filter(|debug| !debug.is_empty()) {
        config.add("debug", ConfigValue::Plain(Value::String(debug.to_string())));
    }
    if let Some(placeholder) = options
        .placeholder
        .as_deref()
        .filter(|placeholder| !placeholder.is_empty())
    {
        config.add(
            "placeholder",
            ConfigValue::Plain(Value::String(placeholder.to_string())),
        );
    }
    if let Some(formats) = non_empty_array(options.formats.as_ref()) {
        config.add("formats", ConfigValue::Plain(Value::Array(formats.clone())));
    }
    // only ever emitted as true; a false key is never added
    if options.read_only {
        config.add("readOnly", ConfigValue::Plain(Value::Bool(true)));
    }

    let mut modules: Vec<(String, Value)> = Vec::new();
    if options.smart_break {
        modules.push(("smart-breaker".to_string(), Value::Bool(true)));
    }
    if let Some(user_modules) = non_empty_object(options.modules.as_ref()) {
        for (name, value) in user_modules {
            // a caller entry overwrites the synthesized one in place
            if let Some(slot) = modules.iter_mut().find(|(entry, _)| entry == name) {
                slot.1 = value.clone();
            } else {
                modules.push((name.clone(), value.clone()));
            }
        }
    }
    for (name, _) in &modules {
        match name.as_str() {
            "formula" => flags.katex = true,
            "syntax" => flags.highlight_js = true,
            "smart-breaker" => flags.smart_break = true,
            _ => {}
        }
    }
    if let Some(toolbar) = toolbar::expand(&options.toolbar_options) {
        // the toolbar module always goes last, even over a caller entry
        modules.retain(|(name, _)| name != "toolbar");
        modules.push(("toolbar".to_string(), toolbar));
    }
    if !modules.is_empty() {
        log::trace!(
            "enabled modules: {:?}",
            modules.iter().map(|(name, _)| name).collect::<Vec<_>>()
        );
        let modules: Map<String, Value> = modules.into_iter().collect();
        config.add("modules", ConfigValue::Plain(Value::Object(modules)));
    }

    Ok(Resolution {
        config,
        flags,
        theme,
    })
}

fn non_empty_object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    match value {
        Some(Value::Object(map)) if !map.is_empty() => Some(map),
        _ => None,
    }
}

fn non_empty_array(value: Option<&Value>) -> Option<&Vec<Value>> {
    match value {
        Some(Value::Array(array)) if !array.is_empty() => Some(array),
        _ => None,
    }
}

fn module_present(modules: Option<&Value>, name: &str) -> bool {
    modules
        .and_then(|modules| modules.get(name))
        .is_some_and(|value| !value.is_null())
}
