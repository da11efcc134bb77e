//! Tagged object graph value.

use serde_json::{Number, Value};

use crate::{CosDictionary, CosName};

#[derive(Debug, Clone, PartialEq)]
pub enum CosValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Name(CosName),
    String(String),
    Array(Vec<CosValue>),
    Dictionary(CosDictionary),
}

impl CosValue {
    /// Builds an array of string values, preserving order.
    pub fn string_array<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CosValue::Array(
            items
                .into_iter()
                .map(|s| CosValue::String(s.into()))
                .collect(),
        )
    }

    /// Short type label used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            CosValue::Null => "null",
            CosValue::Boolean(_) => "boolean",
            CosValue::Integer(_) => "integer",
            CosValue::Real(_) => "real",
            CosValue::Name(_) => "name",
            CosValue::String(_) => "string",
            CosValue::Array(_) => "array",
            CosValue::Dictionary(_) => "dictionary",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CosValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            CosValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&CosName> {
        match self {
            CosValue::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[CosValue]> {
        match self {
            CosValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&CosDictionary> {
        match self {
            CosValue::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// JSON view of this value.
    ///
    /// Names render as `"/Name"` strings; non-finite reals render as `null`.
    pub fn view(&self) -> Value {
        match self {
            CosValue::Null => Value::Null,
            CosValue::Boolean(b) => Value::Bool(*b),
            CosValue::Integer(i) => Value::Number((*i).into()),
            CosValue::Real(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            CosValue::Name(n) => Value::String(n.to_string()),
            CosValue::String(s) => Value::String(s.clone()),
            CosValue::Array(items) => Value::Array(items.iter().map(CosValue::view).collect()),
            CosValue::Dictionary(d) => d.view(),
        }
    }
}

impl From<bool> for CosValue {
    fn from(b: bool) -> Self {
        CosValue::Boolean(b)
    }
}

impl From<i64> for CosValue {
    fn from(i: i64) -> Self {
        CosValue::Integer(i)
    }
}

impl From<&str> for CosValue {
    fn from(s: &str) -> Self {
        CosValue::String(s.to_string())
    }
}

impl From<String> for CosValue {
    fn from(s: String) -> Self {
        CosValue::String(s)
    }
}

impl From<CosName> for CosValue {
    fn from(n: CosName) -> Self {
        CosValue::Name(n)
    }
}

impl From<Vec<CosValue>> for CosValue {
    fn from(items: Vec<CosValue>) -> Self {
        CosValue::Array(items)
    }
}

impl From<CosDictionary> for CosValue {
    fn from(d: CosDictionary) -> Self {
        CosValue::Dictionary(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn view_matrix() {
        let nested = CosValue::Array(vec![
            CosValue::string_array(["e1", "d1"]),
            CosValue::from("plain"),
            CosValue::from(7),
            CosValue::Name(CosName::CH),
            CosValue::Real(f64::NAN),
            CosValue::Null,
        ]);
        assert_eq!(
            nested.view(),
            json!([["e1", "d1"], "plain", 7, "/Ch", null, null])
        );
    }

    #[test]
    fn typed_accessors_reject_other_shapes() {
        let s = CosValue::from("x");
        assert_eq!(s.as_str(), Some("x"));
        assert_eq!(s.as_int(), None);
        assert!(s.as_array().is_none());
        assert_eq!(CosValue::from(true).type_name(), "boolean");
    }
}
