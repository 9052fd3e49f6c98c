use serde_json::Value;
use thiserror::Error;

use quill_core::util::slugify;
use quill_core::{resolve, ConfigError, QuillOptions, Resolution};

use crate::assets::{
    Asset, AssetError, HighlightAsset, HighlightLocalAsset, KatexAsset, KatexLocalAsset,
    QuillAsset, QuillLocalAsset, SmartBreakLocalAsset,
};
use crate::html;
use crate::view::View;

/// Prefix of auto-generated widget ids.
const AUTO_ID_PREFIX: &str = "quill-";
/// Token in the custom js replaced with the editor variable name.
const JS_PLACEHOLDER: &str = "{quill}";

/// Everything that can fail while rendering the widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// The Quill editor bound to a hidden form field.
///
/// Rendering emits the hidden input immediately followed by the editor
/// container, registers the required asset bundles with the [`View`] in
/// load order and appends the bootstrap script to its end-of-body block.
#[derive(Clone, Debug, PartialEq)]
pub struct Quill {
    /// Name of the form field the editor content is synced into.
    pub name: String,
    /// Initial HTML content of the field and the editor.
    pub value: Option<String>,
    /// Widget id; auto-generated from the view when not set.
    pub id: Option<String>,
    /// Tag of the editor container.
    pub tag: String,
    /// HTML attributes of the editor container.
    pub attributes: Vec<(String, String)>,
    /// Extra HTML attributes of the hidden input.
    pub hidden_attributes: Vec<(String, String)>,
    pub options: QuillOptions,
}

impl Default for Quill {
    fn default() -> Self {
        Self {
            name: String::new(),
            value: None,
            id: None,
            tag: "div".to_string(),
            attributes: vec![("style".to_string(), "min-height:150px;".to_string())],
            hidden_attributes: Vec::new(),
            options: QuillOptions::default(),
        }
    }
}

impl Quill {
    /// Resolves the widget options without rendering anything.
    pub fn resolve(&self) -> Result<Resolution, ConfigError> {
        resolve(&self.options)
    }

    /// Renders the widget markup, registering assets and the bootstrap
    /// script with the view. Nothing is registered when resolution fails.
    pub fn render(&self, view: &mut View) -> Result<String, WidgetError> {
        let resolution = self.resolve()?;
        let id = match &self.id {
            Some(id) => id.clone(),
            None => view.next_id(AUTO_ID_PREFIX),
        };
        let editor_id = format!("editor-{id}");
        log::debug!("rendering quill widget {id} for field {}", self.name);

        self.register_assets(view, &resolution)?;
        view.register_js(self.bootstrap_js(&resolution, &id, &editor_id));

        let mut hidden_attributes = vec![("id".to_string(), id)];
        hidden_attributes.extend(self.hidden_attributes.iter().cloned());
        let hidden = html::hidden_input(&self.name, self.value.as_deref(), &hidden_attributes);

        let mut attributes = vec![("id".to_string(), editor_id)];
        attributes.extend(self.attributes.iter().cloned());
        let container = html::tag(
            &self.tag,
            self.value.as_deref().unwrap_or(""),
            &attributes,
        );

        Ok(format!("{hidden}{container}"))
    }

    fn register_assets(&self, view: &mut View, resolution: &Resolution) -> Result<(), AssetError> {
        let options = &self.options;

        if resolution.is_katex() {
            if options.local_assets {
                KatexLocalAsset.register(view)?;
            } else {
                KatexAsset {
                    version: Some(options.katex_version.clone()),
                }
                .register(view)?;
            }
        }

        if resolution.is_highlight_js() {
            if options.local_assets {
                HighlightLocalAsset {
                    style: Some(options.highlight_style.clone()),
                }
                .register(view)?;
            } else {
                HighlightAsset {
                    version: Some(options.highlight_version.clone()),
                    style: Some(options.highlight_style.clone()),
                }
                .register(view)?;
            }
        }

        if options.local_assets {
            QuillLocalAsset {
                theme: resolution.theme.clone(),
            }
            .register(view)?;
        } else {
            QuillAsset {
                version: Some(options.quill_version.clone()),
                theme: resolution.theme.clone(),
            }
            .register(view)?;
        }

        if resolution.is_smart_break() && options.local_assets {
            SmartBreakLocalAsset.register(view)?;
        }

        Ok(())
    }

    /// Builds the bootstrap script: icon registry overrides, editor
    /// construction, field sync on every text change, then the caller's
    /// custom js with the `{quill}` token substituted.
    fn bootstrap_js(&self, resolution: &Resolution, id: &str, editor_id: &str) -> String {
        let editor = format!("q_{}", slugify(id, '_'));
        let mut js = String::new();

        if let Some(Value::Object(icons)) = &self.options.icons {
            if !icons.is_empty() {
                js.push_str(&format!("var {editor}_icons=Quill.import('ui/icons');"));
                for (name, markup) in icons {
                    let key = slugify(name, '-');
                    js.push_str(&format!("{editor}_icons['{key}']={markup};"));
                }
            }
        }

        js.push_str(&format!(
            "var {editor}=new Quill(\"#{editor_id}\",{});",
            resolution.config.to_json()
        ));
        js.push_str(&format!(
            "{editor}.on('text-change',function(){{document.getElementById(\"{id}\").value={editor}.root.innerHTML;}});"
        ));

        if let Some(extra) = self.options.js.as_deref().filter(|js| !js.is_empty()) {
            js.push_str(&extra.replace(JS_PLACEHOLDER, &editor));
        }

        js
    }
}
