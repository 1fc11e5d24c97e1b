use serde_json::Value;

use super::resource::ResourceSpec;

/// Escape character used in composed `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Case-insensitive substring match of one term against several fields, OR-ed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterPredicate {
    fields: &'static [&'static str],
    term: String,
}

impl FilterPredicate {
    /// Free-text search over the resource's allow-listed fields.
    /// Returns `None` for a blank term.
    pub fn search(spec: &ResourceSpec, term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() || spec.search_fields.is_empty() {
            return None;
        }
        Some(Self { fields: spec.search_fields, term: term.to_lowercase() })
    }

    pub fn fields(&self) -> &'static [&'static str] { self.fields }

    /// `%term%` with wildcard metacharacters escaped, to be compared against
    /// a lowercased column with `ESCAPE '\'`.
    pub fn like_pattern(&self) -> String {
        format!("%{}%", escape_like(&self.term))
    }

    /// Evaluate against a JSON record. Only string fields can match.
    /// Uses Unicode lowercase, which agrees with SQL `LOWER()` on ASCII but
    /// may not on every non-ASCII string.
    pub fn matches(&self, record: &Value) -> bool {
        self.fields.iter().any(|f| match record.get(*f) {
            Some(Value::String(s)) => s.to_lowercase().contains(&self.term),
            _ => false,
        })
    }
}

pub fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '%' | '_' | LIKE_ESCAPE => {
                out.push(LIKE_ESCAPE);
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}
