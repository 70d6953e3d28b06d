//! Value helpers over the YAML data model
//!
//! Nested structures are plain `serde_yaml::Value`s: scalars, sequences and
//! insertion-ordered mappings. This module adds text rendering through the
//! [`Render`] trait and typed parsing of command-line text into values.

use crate::error::{DotListError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fmt;

/// Render a value to its display string.
///
/// This is the explicit replacement for implicit string conversion: formatting
/// operations on a `Sequence` call `render` on every item.
pub trait Render {
    fn render(&self) -> String;
}

macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_via_display!(
    String, str, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl Render for Value {
    fn render(&self) -> String {
        value_to_string(self)
    }
}

/// Plain text form of a YAML value. `null` renders as the empty string and
/// containers render as trimmed YAML.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Tagged(tagged) => value_to_string(&tagged.value),
        _ => serde_yaml::to_string(value)
            .unwrap_or_default()
            .trim()
            .trim_start_matches("---")
            .trim()
            .to_string(),
    }
}

/// Short name of a value's kind, used in error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

/// Supported value types for type conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Int,
    Float,
    Bool,
    Array,
    Object,
}

impl ValueType {
    /// Parse a `ValueType` from its string name (e.g. `"string"`, `"int"`, `"bool"`)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "string" | "str" => Some(Self::String),
            "int" | "integer" | "i64" => Some(Self::Int),
            "float" | "f64" | "number" => Some(Self::Float),
            "bool" | "boolean" => Some(Self::Bool),
            "array" | "list" | "sequence" => Some(Self::Array),
            "object" | "map" | "mapping" => Some(Self::Object),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "bool"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
        }
    }
}

/// Parse text into a YAML value, optionally forcing a type.
///
/// Without a type hint, integers, floats and booleans are detected and
/// anything else becomes a string.
pub fn parse_value(s: &str, type_hint: Option<ValueType>) -> Result<Value> {
    let trimmed = s.trim();

    match type_hint {
        Some(ValueType::String) => Ok(Value::String(s.to_string())),
        Some(ValueType::Int) => {
            let i = trimmed
                .parse::<i64>()
                .map_err(|_| DotListError::type_conversion(s, "int"))?;
            Ok(Value::Number(i.into()))
        }
        Some(ValueType::Float) => {
            let f = trimmed
                .parse::<f64>()
                .map_err(|_| DotListError::type_conversion(s, "float"))?;
            Ok(Value::Number(serde_yaml::Number::from(f)))
        }
        Some(ValueType::Bool) => {
            let b = match trimmed.to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => true,
                "false" | "no" | "off" | "0" => false,
                _ => return Err(DotListError::type_conversion(s, "bool")),
            };
            Ok(Value::Bool(b))
        }
        Some(ValueType::Array) => {
            let values = s
                .split(',')
                .map(|part| parse_value(part.trim(), None))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Sequence(values))
        }
        Some(ValueType::Object) => {
            let value: Value = serde_yaml::from_str(s)?;
            if value.is_mapping() {
                Ok(value)
            } else {
                Err(DotListError::type_conversion(s, "object"))
            }
        }
        None => {
            if let Ok(i) = trimmed.parse::<i64>() {
                Ok(Value::Number(i.into()))
            } else if let Ok(f) = trimmed.parse::<f64>() {
                Ok(Value::Number(serde_yaml::Number::from(f)))
            } else if let Ok(b) = trimmed.parse::<bool>() {
                Ok(Value::Bool(b))
            } else {
                Ok(Value::String(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalars() {
        assert_eq!(Value::from("hello").render(), "hello");
        assert_eq!(Value::from(42).render(), "42");
        assert_eq!(Value::Bool(false).render(), "false");
        assert_eq!(Value::Null.render(), "");
        assert_eq!(7_u8.render(), "7");
        assert_eq!("x".render(), "x");
    }

    #[test]
    fn test_render_sequence_as_yaml() {
        let seq: Value = serde_yaml::from_str("[a, b]").unwrap();
        assert_eq!(seq.render(), "- a\n- b");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&Value::from(1)), "int");
        assert_eq!(type_name(&Value::from(1.5)), "float");
        assert_eq!(type_name(&Value::Mapping(Default::default())), "mapping");
    }

    #[test]
    fn test_typed_parsing() {
        assert_eq!(parse_value("42", Some(ValueType::Int)).unwrap(), Value::from(42));
        assert_eq!(parse_value("yes", Some(ValueType::Bool)).unwrap(), Value::Bool(true));
        assert_eq!(parse_value("3.5", Some(ValueType::Float)).unwrap(), Value::from(3.5));
        assert_eq!(parse_value("42", Some(ValueType::String)).unwrap(), Value::from("42"));
        assert!(parse_value("forty", Some(ValueType::Int)).is_err());
        assert!(parse_value("[1]", Some(ValueType::Object)).is_err());
    }

    #[test]
    fn test_auto_type_detection() {
        assert_eq!(parse_value("42", None).unwrap(), Value::from(42));
        assert_eq!(parse_value("true", None).unwrap(), Value::Bool(true));
        assert_eq!(parse_value("hello", None).unwrap(), Value::from("hello"));
    }

    #[test]
    fn test_array_and_object_parsing() {
        let arr = parse_value("1, two, false", Some(ValueType::Array)).unwrap();
        assert_eq!(
            arr,
            Value::Sequence(vec![Value::from(1), Value::from("two"), Value::Bool(false)])
        );

        let obj = parse_value("{name: x, n: 2}", Some(ValueType::Object)).unwrap();
        assert_eq!(obj["name"], Value::from("x"));
        assert_eq!(obj["n"], Value::from(2));
    }

    #[test]
    fn test_value_type_names() {
        assert_eq!(ValueType::from_name("Integer"), Some(ValueType::Int));
        assert_eq!(ValueType::from_name("map"), Some(ValueType::Object));
        assert_eq!(ValueType::from_name("nope"), None);
        assert_eq!(ValueType::Array.to_string(), "array");
    }
}
