//! Asset bundles the editor and its modules need, as CDN URLs or paths
//! relative to the application's published asset directory.

use thiserror::Error;

use quill_core::{THEME_BUBBLE, THEME_SNOW};

use crate::view::View;

const QUILL_CDN: &str = "https://cdn.quilljs.com/";
const KATEX_CDN: &str = "https://cdn.jsdelivr.net/npm/katex@";
const HIGHLIGHT_CDN: &str = "https://cdn.jsdelivr.net/gh/highlightjs/cdn-release@";

/// Errors raised while resolving asset bundles.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    /// A CDN bundle was asked to resolve without a version.
    #[error("you must provide a version for {0}")]
    MissingVersion(&'static str),
}

/// Resolved set of files one module needs, in load order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetBundle {
    pub name: &'static str,
    pub js: Vec<String>,
    pub css: Vec<String>,
}

/// Something that resolves to an [`AssetBundle`].
pub trait Asset {
    fn bundle(&self) -> Result<AssetBundle, AssetError>;

    fn register(&self, view: &mut View) -> Result<(), AssetError> {
        view.register_bundle(self.bundle()?);
        Ok(())
    }
}

/// Quill served from the CDN; the stylesheet follows the theme.
#[derive(Clone, Debug, Default)]
pub struct QuillAsset {
    pub version: Option<String>,
    pub theme: Option<String>,
}

impl Asset for QuillAsset {
    fn bundle(&self) -> Result<AssetBundle, AssetError> {
        let version = required_version(self.version.as_deref(), "Quill")?;
        Ok(AssetBundle {
            name: "quill",
            js: vec![format!("{QUILL_CDN}{version}/quill.min.js")],
            css: vec![format!(
                "{QUILL_CDN}{version}/{}",
                theme_css(self.theme.as_deref())
            )],
        })
    }
}

/// Quill files shipped with the application.
#[derive(Clone, Debug, Default)]
pub struct QuillLocalAsset {
    pub theme: Option<String>,
}

impl Asset for QuillLocalAsset {
    fn bundle(&self) -> Result<AssetBundle, AssetError> {
        Ok(AssetBundle {
            name: "quill",
            js: vec!["quill.min.js".to_string()],
            css: vec![theme_css(self.theme.as_deref()).to_string()],
        })
    }
}

/// KaTeX served from the CDN, needed by the formula module.
#[derive(Clone, Debug, Default)]
pub struct KatexAsset {
    pub version: Option<String>,
}

impl Asset for KatexAsset {
    fn bundle(&self) -> Result<AssetBundle, AssetError> {
        let version = required_version(self.version.as_deref(), "KaTeX")?;
        Ok(AssetBundle {
            name: "katex",
            js: vec![format!("{KATEX_CDN}{version}/dist/katex.min.js")],
            css: vec![format!("{KATEX_CDN}{version}/dist/katex.min.css")],
        })
    }
}

/// KaTeX files shipped with the application.
#[derive(Clone, Copy, Debug, Default)]
pub struct KatexLocalAsset;

impl Asset for KatexLocalAsset {
    fn bundle(&self) -> Result<AssetBundle, AssetError> {
        Ok(AssetBundle {
            name: "katex",
            js: vec!["katex.min.js".to_string()],
            css: vec!["katex.min.css".to_string()],
        })
    }
}

/// Highlight.js served from the CDN, needed by the syntax module.
#[derive(Clone, Debug, Default)]
pub struct HighlightAsset {
    pub version: Option<String>,
    /// Stylesheet name, accepted bare or with a `.css`/`.min.css` suffix.
    pub style: Option<String>,
}

impl Asset for HighlightAsset {
    fn bundle(&self) -> Result<AssetBundle, AssetError> {
        let version = required_version(self.version.as_deref(), "Highlight.js")?;
        Ok(AssetBundle {
            name: "highlight",
            js: vec![format!("{HIGHLIGHT_CDN}{version}/build/highlight.min.js")],
            css: vec![format!(
                "{HIGHLIGHT_CDN}{version}/build/styles/{}.min.css",
                bare_style(self.style.as_deref())
            )],
        })
    }
}

/// Highlight.js files shipped with the application.
#[derive(Clone, Debug, Default)]
pub struct HighlightLocalAsset {
    /// Stylesheet name, accepted bare or with a `.css`/`.min.css` suffix.
    pub style: Option<String>,
}

impl Asset for HighlightLocalAsset {
    fn bundle(&self) -> Result<AssetBundle, AssetError> {
        Ok(AssetBundle {
            name: "highlight",
            js: vec!["lib/highlight.js".to_string()],
            css: vec![format!("styles/{}.css", bare_style(self.style.as_deref()))],
        })
    }
}

/// Smart line break plugin; only shipped locally, no CDN build exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmartBreakLocalAsset;

impl Asset for SmartBreakLocalAsset {
    fn bundle(&self) -> Result<AssetBundle, AssetError> {
        Ok(AssetBundle {
            name: "smart-break",
            js: vec!["smart-breaker.min.js".to_string()],
            css: Vec::new(),
        })
    }
}

fn required_version<'a>(
    version: Option<&'a str>,
    what: &'static str,
) -> Result<&'a str, AssetError> {
    version
        .filter(|version| !version.is_empty())
        .ok_or(AssetError::MissingVersion(what))
}

fn theme_css(theme: Option<&str>) -> &'static str {
    match theme {
        Some(THEME_SNOW) => "quill.snow.css",
        Some(THEME_BUBBLE) => "quill.bubble.css",
        _ => "quill.core.css",
    }
}

/// Stylesheet name with any `.css`/`.min.css` suffix stripped; `None` or
/// empty falls back to `default`.
fn bare_style(style: Option<&str>) -> &str {
    let style = style.filter(|style| !style.is_empty()).unwrap_or("default");
    style
        .strip_suffix(".min.css")
        .or_else(|| style.strip_suffix(".css"))
        .unwrap_or(style)
}
