//! Colour tables from a JSON dump.
//!
//! # Feature Flag
//!
//! This module requires the `json` feature (enabled by default).
//!
//! The expected document is one object keyed by table tag:
//!
//! ```json
//! {
//!   "BASE_COLORS": { "b": [0, 0, 1], "g": [0, 0.5, 0] },
//!   "CSS4_COLORS": { "aliceblue": "#F0F8FF" },
//!   "XKCD_COLORS": { "xkcd:cloudy blue": "#acc2d9" }
//! }
//! ```
//!
//! which is what `json.dump` produces for matplotlib's tables. Key order is
//! kept. Numeric arrays are read as `[0, 1]` tuples and strings as hex; any
//! other value is kept as [`RawColor::Other`] so the generator can report it.

use std::path::PathBuf;

use serde_json::Value;

use super::{ColorTable, ColorTableProvider, ColorTables, ProviderError, SourceTable};
use crate::color::RawColor;

/// Provider reading all three tables from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonProvider {
    path: PathBuf,
}

impl JsonProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ColorTableProvider for JsonProvider {
    fn tables(&self) -> Result<ColorTables, ProviderError> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| ProviderError::io(&self.path, e))?;
        parse_json_tables(&text).map_err(|e| e.with_path(&self.path))
    }
}

fn json_error(message: impl Into<String>, source: Option<serde_json::Error>) -> ProviderError {
    ProviderError::Json {
        path: None,
        source,
        message: message.into(),
    }
}

/// Parse a JSON dump of the colour tables.
///
/// Tables missing from the document are empty; unknown top-level keys are
/// ignored.
///
/// # Errors
///
/// Returns `ProviderError::Json` if the text is not JSON, the document is not
/// an object, or a table is not an object.
pub fn parse_json_tables(text: &str) -> Result<ColorTables, ProviderError> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| json_error(format!("invalid JSON: {e}"), Some(e)))?;
    let root = match document {
        Value::Object(root) => root,
        other => {
            return Err(json_error(
                format!("expected an object of tables, got {}", json_type_name(&other)),
                None,
            ));
        }
    };

    let mut tables = ColorTables::new();
    for (key, value) in &root {
        let Some(source) = SourceTable::from_tag(key) else {
            log::debug!("ignoring unknown table `{key}`");
            continue;
        };
        let Value::Object(entries) = value else {
            return Err(json_error(
                format!("table `{key}` must be an object, got {}", json_type_name(value)),
                None,
            ));
        };

        let table: &mut ColorTable = tables.get_mut(source);
        for (name, raw) in entries {
            table.push(name.clone(), raw_color(raw));
        }
    }

    Ok(tables)
}

fn raw_color(value: &Value) -> RawColor {
    match value {
        Value::String(s) => RawColor::hex(s.clone()),
        Value::Array(items) => match items.as_slice() {
            [r, g, b] => match (r.as_f64(), g.as_f64(), b.as_f64()) {
                (Some(r), Some(g), Some(b)) => RawColor::unit(r, g, b),
                _ => RawColor::other("list"),
            },
            _ => RawColor::other(format!("list[{}]", items.len())),
        },
        other => RawColor::other(json_type_name(other)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_key_order() {
        let tables = parse_json_tables(
            r##"{"CSS4_COLORS": {"zz": "#000000", "aa": "#FFFFFF", "mm": "#808080"}}"##,
        )
        .unwrap();
        let names: Vec<&str> = tables.css4.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["zz", "aa", "mm"]);
        assert!(tables.base.is_empty());
        assert!(tables.xkcd.is_empty());
    }

    #[test]
    fn test_parse_value_shapes() {
        let tables = parse_json_tables(
            r##"{
                "BASE_COLORS": {
                    "r": [1, 0, 0],
                    "g": [0, 0.5, 0],
                    "short": [1, 0],
                    "words": ["a", "b", "c"],
                    "flag": true,
                    "none": null
                }
            }"##,
        )
        .unwrap();
        let values: Vec<&RawColor> = tables.base.iter().map(|(_, c)| c).collect();
        assert_eq!(values[0], &RawColor::unit(1.0, 0.0, 0.0));
        assert_eq!(values[1], &RawColor::unit(0.0, 0.5, 0.0));
        assert_eq!(values[2], &RawColor::other("list[2]"));
        assert_eq!(values[3], &RawColor::other("list"));
        assert_eq!(values[4], &RawColor::other("bool"));
        assert_eq!(values[5], &RawColor::other("null"));
    }

    #[test]
    fn test_unknown_tables_ignored() {
        let tables =
            parse_json_tables(r##"{"TABLEAU_COLORS": {"tab:blue": "#1f77b4"}}"##).unwrap();
        assert_eq!(tables.total(), 0);
    }

    #[test]
    fn test_structural_errors() {
        assert!(matches!(
            parse_json_tables("[1, 2, 3]"),
            Err(ProviderError::Json { .. })
        ));
        assert!(matches!(
            parse_json_tables(r#"{"BASE_COLORS": [1, 2]}"#),
            Err(ProviderError::Json { .. })
        ));

        let err = parse_json_tables("{not json").unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
