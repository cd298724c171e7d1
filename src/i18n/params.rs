//! Format parameters and `%{name}` interpolation

use std::fmt;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::utils::errors::FormatError;

/// Reserved parameter that drives plural selection
pub const COUNT: &str = "count";

/// A value available to interpolation
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl ParamValue {
    /// Numeric view used for plural selection
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Integer(n) => Some(*n as f64),
            ParamValue::Float(n) if n.is_finite() => Some(*n),
            ParamValue::Float(_) | ParamValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Integer(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

macro_rules! integer_param {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                ParamValue::Integer(i64::from(value))
            }
        })*
    };
}

integer_param!(i8, i16, i32, i64, u8, u16, u32);

// Values outside the `i64` range keep their magnitude as a float.
macro_rules! wide_integer_param {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                i64::try_from(value)
                    .map(ParamValue::Integer)
                    .unwrap_or(ParamValue::Float(value as f64))
            }
        })*
    };
}

wide_integer_param!(isize, usize, u64, i128, u128);

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(f64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

/// Named parameters for a lookup, in insertion order
///
/// Setting a name twice replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatParams {
    entries: Vec<(String, ParamValue)>,
}

impl FormatParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for parameters holding only a count
    pub fn with_count(count: impl Into<ParamValue>) -> Self {
        Self::new().set(COUNT, count)
    }

    /// Add or replace a parameter, builder style
    pub fn set(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a parameter
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// The reserved `count` parameter, if present
    pub fn count(&self) -> Option<&ParamValue> {
        self.get(COUNT)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> FromIterator<(K, V)> for FormatParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = FormatParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // `%%` escape, `%{name}`, or a dangling `%{`.
    PATTERN.get_or_init(|| Regex::new(r"%(%|\{([^{}]*)\}|\{)").expect("placeholder pattern is valid"))
}

/// Substitute `%{name}` placeholders in `template`
///
/// `%%` renders a literal `%`; any other `%` is copied as-is. A placeholder
/// without a matching parameter, or a `%{` without its closing brace, fails.
pub fn interpolate(template: &str, params: &FormatParams) -> Result<String, FormatError> {
    let mut result = String::with_capacity(template.len());
    let mut last = 0;

    for caps in placeholder_pattern().captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        result.push_str(&template[last..whole.start()]);
        result.push_str(&render_placeholder(&caps, whole.start(), params)?);
        last = whole.end();
    }

    result.push_str(&template[last..]);
    Ok(result)
}

fn render_placeholder(caps: &Captures<'_>, offset: usize, params: &FormatParams) -> Result<String, FormatError> {
    if let Some(name) = caps.get(2) {
        let name = name.as_str();
        return params
            .get(name)
            .map(ToString::to_string)
            .ok_or_else(|| FormatError::MissingParameter { name: name.to_string() });
    }

    match &caps[1] {
        "%" => Ok("%".to_string()),
        _ => Err(FormatError::Unterminated { offset }),
    }
}
