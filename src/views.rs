//! View engine and page templates for the claude-example-web server.
//!
//! Templates live under `templates/` and are compiled into the binary,
//! which keeps page markup out of handler code without a runtime
//! template dependency. `VIEWS` is the process-wide engine; handlers
//! render a page by name through it.
//!
use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Landing page document served at the root route
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Maps template names to finished HTML documents
pub struct ViewEngine {
    templates: HashMap<&'static str, &'static str>,
}

impl ViewEngine {
    /// Create an engine with every shipped template registered
    pub fn new() -> Self {
        let mut templates = HashMap::new();
        templates.insert("index", INDEX_TEMPLATE);
        Self { templates }
    }

    /// Render the named template to an HTML document
    pub fn render(&self, name: &str) -> Option<&'static str> {
        self.templates.get(name).copied()
    }
}

/// Global view engine instance, lazily initialized
pub static VIEWS: Lazy<ViewEngine> = Lazy::new(ViewEngine::new);
