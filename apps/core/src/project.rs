use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One entry of `projects.json`.
///
/// The four well-known fields are optional; anything else in the object is
/// kept verbatim in `extra` (in document order) so the text search can scan it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProjectRecord {
    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectRecord {
    pub fn new(title: &str, year: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            year: Some(year.to_string()),
            ..Self::default()
        }
    }

    /// Category label used for grouping; records without a year share `""`.
    pub fn year_label(&self) -> &str {
        self.year.as_deref().unwrap_or("")
    }

    /// Every field value stringified, joined with newlines and lower-cased.
    pub fn searchable_text(&self) -> String {
        self.title
            .iter()
            .chain(&self.description)
            .chain(&self.year)
            .chain(&self.image)
            .cloned()
            .chain(self.extra.values().map(display_value))
            .collect::<Vec<_>>()
            .join("\n")
            .to_lowercase()
    }
}

/// Stringifies a JSON value the way a browser would when concatenating it.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => display_number(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn display_number(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e15 => {
            (float as i64).to_string()
        }
        _ => number.to_string(),
    }
}

fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(other) => Some(display_value(&other)),
    })
}
