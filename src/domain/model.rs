use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// One line of the input CSV, keyed by header name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputRow {
    pub data: HashMap<String, String>,
}

impl InputRow {
    /// Trimmed value of `column`, or `None` when the row has no such column.
    pub fn identifier(&self, column: &str) -> Option<&str> {
        self.data.get(column).map(|v| v.trim())
    }
}

/// First object of a lookup response's `results` array, keys in response order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub data: Map<String, Value>,
}

impl LookupResult {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Renders a field as a CSV cell. Absent fields and `null` are empty.
    pub fn cell(&self, field: &str) -> String {
        match self.data.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Distinct field names in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct HeaderSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl HeaderSet {
    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    pub fn extend_from(&mut self, result: &LookupResult) {
        for key in result.keys() {
            self.insert(key);
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Everything the lookup phase produced, ready for the writer.
#[derive(Debug, Clone, Default)]
pub struct LookupBatch {
    pub results: Vec<LookupResult>,
    pub headers: HeaderSet,
    pub attempted: usize,
    pub missing: usize,
    pub failed: usize,
}

impl LookupBatch {
    pub fn push(&mut self, result: LookupResult) {
        self.headers.extend_from(&result);
        self.results.push(result);
    }
}
