use crate::assets::AssetBundle;

/// Rendering context for one page.
///
/// Owns the widget id counter, the ordered asset bundle list and the script
/// texts registered for the end of the body. Each logically independent
/// rendering session gets its own `View`, which keeps generated ids
/// deterministic.
#[derive(Debug, Default)]
pub struct View {
    counter: usize,
    bundles: Vec<AssetBundle>,
    scripts: Vec<String>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next auto-generated widget id, eg. `quill-0`.
    pub fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{}{}", prefix, self.counter);
        self.counter += 1;
        id
    }

    /// Appends a bundle; registration order is the load order.
    pub fn register_bundle(&mut self, bundle: AssetBundle) {
        log::trace!("registering asset bundle: {}", bundle.name);
        self.bundles.push(bundle);
    }

    /// Appends script text to the end-of-body block.
    pub fn register_js(&mut self, js: impl Into<String>) {
        self.scripts.push(js.into());
    }

    pub fn bundles(&self) -> &[AssetBundle] {
        &self.bundles
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }
}
