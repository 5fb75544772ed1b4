//! # Argument Map
//!
//! The flat `flag -> value` mapping produced by an outer command-line parser.
//! Validators only ever read from it by field name.

use std::collections::HashMap;

/// A raw value as handed over by the command-line layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Text(String),
    Flag(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    values: HashMap<String, ArgValue>,
}

impl ArgumentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), ArgValue::Text(value.into()));
    }

    pub fn insert_flag(&mut self, name: impl Into<String>, value: bool) {
        self.values.insert(name.into(), ArgValue::Flag(value));
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Text value of `name`. Flags read as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ArgValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ArgumentMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), ArgValue::Text(v.into())))
            .collect();
        Self { values }
    }
}
