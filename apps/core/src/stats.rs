use serde::Serialize;

/// One `label: value` row of a stats card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub label: String,
    pub value: String,
}

impl StatEntry {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }

    /// Entry whose label is derived from a camelCase key.
    pub fn from_key(key: &str, value: impl ToString) -> Self {
        Self::new(humanize_key(key), value)
    }
}

/// `publicRepos` -> `Public Repos`: a space before each capital, first letter upper-cased.
pub fn humanize_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
