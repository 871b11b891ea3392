//! Canvas settings: named scalar values describing the render target.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A printable canvas value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CanvasValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<CanvasValue>),
}

impl CanvasValue {
    // Item form inside a list: text is quoted and control characters escaped.
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasValue::Text(s) => {
                let quote = if s.contains('\'') && !s.contains('"') {
                    '"'
                } else {
                    '\''
                };
                let mut out = String::with_capacity(s.len() + 2);
                out.push(quote);
                for c in s.chars() {
                    match c {
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        '\r' => out.push_str("\\r"),
                        '\t' => out.push_str("\\t"),
                        c if c == quote => {
                            out.push('\\');
                            out.push(c);
                        }
                        c => out.push(c),
                    }
                }
                out.push(quote);
                f.write_str(&out)
            }
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl fmt::Display for CanvasValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasValue::Bool(true) => f.write_str("True"),
            CanvasValue::Bool(false) => f.write_str("False"),
            CanvasValue::Int(v) => write!(f, "{}", v),
            CanvasValue::Float(v) => write!(f, "{}", crate::Scalar::Float64(*v)),
            CanvasValue::Text(s) => f.write_str(s),
            CanvasValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_repr(f)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for CanvasValue {
    fn from(v: bool) -> Self {
        CanvasValue::Bool(v)
    }
}

impl From<i32> for CanvasValue {
    fn from(v: i32) -> Self {
        CanvasValue::Int(v as i64)
    }
}

impl From<i64> for CanvasValue {
    fn from(v: i64) -> Self {
        CanvasValue::Int(v)
    }
}

impl From<u32> for CanvasValue {
    fn from(v: u32) -> Self {
        CanvasValue::Int(v as i64)
    }
}

impl From<usize> for CanvasValue {
    fn from(v: usize) -> Self {
        CanvasValue::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for CanvasValue {
    fn from(v: f64) -> Self {
        CanvasValue::Float(v)
    }
}

impl From<&str> for CanvasValue {
    fn from(v: &str) -> Self {
        CanvasValue::Text(v.to_string())
    }
}

impl From<String> for CanvasValue {
    fn from(v: String) -> Self {
        CanvasValue::Text(v)
    }
}

impl<T: Into<CanvasValue>> From<Vec<T>> for CanvasValue {
    fn from(items: Vec<T>) -> Self {
        CanvasValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// Named canvas values, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    entries: Vec<(String, CanvasValue)>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value. Re-setting an existing name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<CanvasValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<CanvasValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CanvasValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CanvasValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
