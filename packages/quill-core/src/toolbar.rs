use serde_json::{json, Value};

use crate::options::ToolbarOptions;

/// Expands the toolbar request into the value of the `toolbar` module.
///
/// `None` means no toolbar module is added at all. Custom button groups are
/// passed through unchanged; malformed ones surface as client-side errors.
pub fn expand(options: &ToolbarOptions) -> Option<Value> {
    match options {
        ToolbarOptions::Off => None,
        ToolbarOptions::ThemeDefault => Some(Value::Bool(true)),
        ToolbarOptions::Basic => Some(basic()),
        ToolbarOptions::Full => Some(full()),
        ToolbarOptions::Custom(value) => match value {
            Value::Null => None,
            Value::Array(groups) if groups.is_empty() => None,
            _ => Some(value.clone()),
        },
    }
}

fn basic() -> Value {
    json!([
        ["bold", "italic", "underline", "strike"],
        [{"list": "ordered"}, {"list": "bullet"}],
        [{"align": []}],
        ["link"],
    ])
}

fn full() -> Value {
    json!([
        [{"font": []}, {"size": ["small", false, "large", "huge"]}],
        ["bold", "italic", "underline", "strike"],
        [{"color": []}, {"background": []}],
        [{"script": "sub"}, {"script": "super"}],
        [{"header": 1}, {"header": 2}, "blockquote", "code-block"],
        [{"list": "ordered"}, {"list": "bullet"}, {"indent": "-1"}, {"indent": "+1"}],
        [{"direction": "rtl"}, {"align": []}],
        ["link", "image", "video"],
        ["clean"],
    ])
}
