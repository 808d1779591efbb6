pub mod layout;
pub mod render;
pub mod response;

use serde::Serialize;
use serde_json::{Map, Value};

pub static SITENAME: &str = "Art Finder";
pub static TITLEKEY: &str = "Title";

#[derive(Clone, Debug)]
pub struct LinkConfig {
    pub http_root: String,
    pub static_root: String,
    pub resource_root: String,
}

impl LinkConfig {
    /// Derive all link roots from the single http root (which may be empty, meaning "/")
    pub fn from_root(http_root: &str) -> Self {
        let http_root = http_root.trim_end_matches('/').to_string();
        Self {
            static_root: format!("{}/static", http_root),
            resource_root: format!("{}/static/resources", http_root),
            http_root,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MainLayoutData {
    pub config: LinkConfig,
    pub current_path: String,
}

/// The key/value data handed to a template for a single render. Created per request,
/// never shared. Only "Title" is required by the layout; templates may read anything else.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct RenderContext {
    values: Map<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: &str) -> Self {
        Self::new().insert(TITLEKEY, title)
    }

    pub fn insert(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.values.insert(String::from(key), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    pub fn title(&self) -> Option<&str> {
        self.get_str(TITLEKEY)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }
}
