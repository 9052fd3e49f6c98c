/// Reduces `input` to a lowercase slug safe for script identifiers and
/// icon registry keys.
///
/// Unicode letters and digits are kept, every run of anything else becomes a
/// single `separator`, and separators never lead or trail.
pub fn slugify(input: &str, separator: char) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending = false;
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if pending && !slug.is_empty() {
                slug.push(separator);
            }
            pending = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending = true;
        }
    }
    slug
}
