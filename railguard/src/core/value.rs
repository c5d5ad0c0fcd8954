//! Data type classification and trailing-value helpers for JSON values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The data types a validation rule can apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// A text string.
    String,
    /// An ordered sequence of elements.
    List,
}

impl DataType {
    /// Classifies a JSON value, returning `None` for unsupported shapes.
    #[must_use]
    pub fn of(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(_) => Some(Self::String),
            serde_json::Value::Array(_) => Some(Self::List),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::List => write!(f, "list"),
        }
    }
}

/// Renders a JSON value for use in error messages.
///
/// Strings render as their bare contents; everything else renders in its
/// JSON form.
#[must_use]
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Appends a suffix to a string or list value, returning the corrected value.
///
/// A string suffix concatenates onto a string value character by character; a
/// list gains the suffix as exactly one additional trailing element, whatever
/// its shape. Returns `None` when the value/suffix pairing has no defined
/// append (non-string suffix on a string, or a value that is neither string
/// nor list).
#[must_use]
pub fn append_trailing(
    value: &serde_json::Value,
    suffix: &serde_json::Value,
) -> Option<serde_json::Value> {
    match (value, suffix) {
        (serde_json::Value::String(s), serde_json::Value::String(end)) => {
            Some(serde_json::Value::String(format!("{s}{end}")))
        }
        (serde_json::Value::Array(items), end) => {
            let mut fixed = items.clone();
            fixed.push(end.clone());
            Some(serde_json::Value::Array(fixed))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_of() {
        assert_eq!(DataType::of(&serde_json::json!("abc")), Some(DataType::String));
        assert_eq!(DataType::of(&serde_json::json!(["a"])), Some(DataType::List));
        assert_eq!(DataType::of(&serde_json::json!(42)), None);
        assert_eq!(DataType::of(&serde_json::json!({"k": "v"})), None);
        assert_eq!(DataType::of(&serde_json::Value::Null), None);
    }

    #[test]
    fn test_data_type_display() {
        assert_eq!(DataType::String.to_string(), "string");
        assert_eq!(DataType::List.to_string(), "list");
    }

    #[test]
    fn test_data_type_serialize() {
        let json = serde_json::to_string(&DataType::List).unwrap();
        assert_eq!(json, r#""list""#);
    }

    #[test]
    fn test_display_value_string_is_bare() {
        assert_eq!(display_value(&serde_json::json!("xyzdb")), "xyzdb");
    }

    #[test]
    fn test_display_value_list_is_json() {
        assert_eq!(display_value(&serde_json::json!(["a", "b"])), r#"["a","b"]"#);
    }

    #[test]
    fn test_append_trailing_string() {
        let fixed = append_trailing(&serde_json::json!("xyzdb"), &serde_json::json!("a"));
        assert_eq!(fixed, Some(serde_json::json!("xyzdba")));
    }

    #[test]
    fn test_append_trailing_list_adds_one_element() {
        let fixed = append_trailing(&serde_json::json!(["a", "b"]), &serde_json::json!("c"));
        assert_eq!(fixed, Some(serde_json::json!(["a", "b", "c"])));

        // A multi-character suffix still lands as a single trailing element.
        let fixed = append_trailing(&serde_json::json!(["a"]), &serde_json::json!("bc"));
        assert_eq!(fixed, Some(serde_json::json!(["a", "bc"])));
    }

    #[test]
    fn test_append_trailing_empty_inputs() {
        assert_eq!(
            append_trailing(&serde_json::json!(""), &serde_json::json!("a")),
            Some(serde_json::json!("a"))
        );
        assert_eq!(
            append_trailing(&serde_json::json!([]), &serde_json::json!("c")),
            Some(serde_json::json!(["c"]))
        );
    }

    #[test]
    fn test_append_trailing_undefined_pairings() {
        assert_eq!(append_trailing(&serde_json::json!("abc"), &serde_json::json!(1)), None);
        assert_eq!(append_trailing(&serde_json::json!(42), &serde_json::json!("a")), None);
    }
}
