//! Minimal HTML emission for the widget markup.

/// Escapes text for use in an attribute value or text node.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A container tag with raw (already-HTML) content.
pub fn tag(name: &str, content: &str, attributes: &[(String, String)]) -> String {
    format!("<{name}{}>{content}</{name}>", render_attributes(attributes))
}

/// A hidden input bound to a form field. The value attribute is skipped
/// entirely when there is no value.
pub fn hidden_input(
    name: &str,
    value: Option<&str>,
    attributes: &[(String, String)],
) -> String {
    let mut out = String::from("<input type=\"hidden\"");
    out.push_str(&render_attributes(attributes));
    out.push_str(&format!(" name=\"{}\"", encode(name)));
    if let Some(value) = value {
        out.push_str(&format!(" value=\"{}\"", encode(value)));
    }
    out.push('>');
    out
}

fn render_attributes(attributes: &[(String, String)]) -> String {
    let mut out = String::new();
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&encode(value));
        out.push('"');
    }
    out
}
