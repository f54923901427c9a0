//! The works document: a JSON array of portfolio entries.
//!
//! The document is hand-edited, so parsing is lenient about field types and
//! only strict about the outer shape (it must be an array).

use serde::Deserialize;
use serde_json::Value;

use crate::error::LoadError;

/// A portfolio entry, identified by its position in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Work {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Vec<String>,
}

impl Work {
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawWork {
    #[serde(default)]
    title: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    images: Value,
}

impl From<RawWork> for Work {
    fn from(raw: RawWork) -> Self {
        let images = match raw.images {
            Value::Array(items) => items.iter().filter_map(image_source).collect(),
            _ => Vec::new(),
        };
        Work {
            title: text_field(&raw.title),
            description: text_field(&raw.description),
            images,
        }
    }
}

/// Parse the body of the works document.
///
/// Every array element keeps its position. Falsy elements (`null`, `false`,
/// `0`, `""`) come back as `None`; any other non-object element is an empty
/// [`Work`].
pub fn parse_works(body: &str) -> Result<Vec<Option<Work>>, LoadError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(entries) = value else {
        return Err(LoadError::NotArray);
    };
    Ok(entries.into_iter().map(parse_entry).collect())
}

fn parse_entry(entry: Value) -> Option<Work> {
    match entry {
        Value::Object(_) => Some(
            serde_json::from_value::<RawWork>(entry)
                .unwrap_or_default()
                .into(),
        ),
        other if is_falsy(&other) => None,
        _ => Some(Work::default()),
    }
}

fn text_field(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(coerce_string(other)),
    }
}

fn image_source(value: &Value) -> Option<String> {
    if is_falsy(value) {
        return None;
    }
    Some(coerce_string(value))
}

/// Script-style truthiness: `null`, `false`, `0` and `""` count as absent.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Render a JSON value the way string concatenation in a browser would.
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                // f64 Display drops the trailing ".0" of integral values
                n.as_f64().map(|f| f.to_string()).unwrap_or_default()
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(coerce_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// What the `i` query parameter asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Missing, empty, non-numeric or negative.
    Unspecified,
    Index(usize),
    /// A finite non-negative number that can never name a position.
    Unmatched,
}

pub fn parse_selection(raw: Option<&str>) -> Selection {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Selection::Unspecified;
    };
    let Ok(number) = raw.parse::<f64>() else {
        return Selection::Unspecified;
    };
    if !number.is_finite() || number < 0.0 {
        return Selection::Unspecified;
    }
    if number.fract() != 0.0 || number > usize::MAX as f64 {
        return Selection::Unmatched;
    }
    Selection::Index(number as usize)
}
