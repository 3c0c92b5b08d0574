use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Loosely-typed translation dictionary for the active locale. The shell
/// loads it once per request from the per-locale message files; the core
/// only performs dotted-path lookup with fallback defaults and does not
/// depend on its exact shape.
#[derive(Default, Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct Messages(pub Value);

impl Messages {
    pub fn get(&self, path: &str) -> Option<&str> {
        path.split('.')
            .try_fold(&self.0, |value, key| value.get(key))
            .and_then(Value::as_str)
    }
    pub fn get_or<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        self.get(path).unwrap_or(default)
    }
}

impl From<Value> for Messages {
    fn from(value: Value) -> Self {
        Messages(value)
    }
}
