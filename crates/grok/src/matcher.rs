//! Matcher: run a compiled grok pattern against text.

use regex::Regex;

use crate::model::{FieldValue, Matches};
use crate::types::TypeMap;

/// An expanded, compiled grok expression plus its field type map.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    expression: String,
    regex: Regex,
    type_map: TypeMap,
    names: Vec<String>,
}

impl CompiledPattern {
    pub(crate) fn new(expression: impl Into<String>, regex: Regex, type_map: TypeMap) -> Self {
        let names = regex
            .capture_names()
            .flatten()
            .map(str::to_string)
            .collect();
        Self {
            expression: expression.into(),
            regex,
            type_map,
            names,
        }
    }

    /// Search `text` and extract the named fields.
    ///
    /// `None` means no match. An expression without named references yields
    /// an empty [`Matches`] on success.
    pub fn matches(&self, text: &str) -> Option<Matches> {
        let caps = self.regex.captures(text)?;
        let mut result = Matches::with_capacity(self.names.len());

        for name in &self.names {
            let value = caps.name(name).map(|m| self.convert(name, m.as_str()));
            result.push(name.clone(), value);
        }

        Some(result)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn convert(&self, name: &str, raw: &str) -> FieldValue {
        let Some(coercion) = self.type_map.get(name) else {
            return FieldValue::Text(raw.to_string());
        };
        match coercion.apply(raw) {
            Some(value) => value,
            None => {
                tracing::debug!(
                    field = name,
                    coercion = coercion.as_str(),
                    value = raw,
                    "type conversion failed, keeping raw text"
                );
                FieldValue::Text(raw.to_string())
            }
        }
    }

    /// The grok expression this pattern was compiled from.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The fully expanded regular expression.
    pub fn regex_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn type_map(&self) -> &TypeMap {
        &self.type_map
    }

    /// Binding names in capture-group order.
    pub fn capture_names(&self) -> &[String] {
        &self.names
    }
}

/// Free-function form of [`CompiledPattern::matches`].
pub fn grok_search(text: &str, pattern: &CompiledPattern) -> Option<Matches> {
    pattern.matches(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::scan;
    use crate::types::TypeMapper;

    fn compiled(regex: &str, typed: &str) -> CompiledPattern {
        let mut mapper = TypeMapper::new(false);
        mapper.observe(&scan(typed));
        CompiledPattern::new(typed, Regex::new(regex).unwrap(), mapper.finish())
    }

    #[test]
    fn test_no_match_is_none() {
        let p = compiled(r"(?P<n>\d+)", "%{INT:n}");
        assert!(p.matches("abc").is_none());
        assert!(p.matches("abc").is_none());
        assert!(!p.is_match("abc"));
    }

    #[test]
    fn test_unnamed_match_is_empty() {
        let p = compiled(r"(?:\w+)", "%{WORD}");
        let m = p.matches("github").unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_raw_and_coerced_values() {
        let p = compiled(r"(?P<name>\w+) (?P<age>\d+)", "%{WORD:name} %{INT:age:int}");
        let m = p.matches("gary 25").unwrap();
        assert_eq!(m.get("name"), Some(&FieldValue::from("gary")));
        assert_eq!(m.get("age"), Some(&FieldValue::Int(25)));
    }

    #[test]
    fn test_failed_coercion_keeps_text() {
        let p = compiled(r"(?P<test_str>\w+)", "%{WORD:test_str:int}");
        let m = p.matches("not_a_int").unwrap();
        assert_eq!(m.get("test_str"), Some(&FieldValue::from("not_a_int")));
    }

    #[test]
    fn test_non_participating_group_is_null() {
        let p = compiled(r"(?P<prog>\w+)(?:\[(?P<pid>\d+)\])?:", "%{WORD:prog} %{INT:pid:int}");
        let m = p.matches("kernel:").unwrap();
        assert!(m.contains("pid"));
        assert_eq!(m.get("pid"), None);
        assert_eq!(m.get("prog"), Some(&FieldValue::from("kernel")));

        let m = p.matches("sshd[42]:").unwrap();
        assert_eq!(m.get("pid"), Some(&FieldValue::Int(42)));
    }

    #[test]
    fn test_search_is_unanchored() {
        let p = compiled(r"(?P<n>\d+)", "%{INT:n}");
        let m = grok_search("value=1024;", &p).unwrap();
        assert_eq!(m.get("n"), Some(&FieldValue::from("1024")));
    }

    #[test]
    fn test_accessors() {
        let p = compiled(r"(?P<a>x)(?P<b>y)", "%{X:a}%{Y:b:float}");
        assert_eq!(p.expression(), "%{X:a}%{Y:b:float}");
        assert_eq!(p.regex_str(), r"(?P<a>x)(?P<b>y)");
        assert_eq!(p.capture_names(), &["a".to_string(), "b".to_string()]);
        assert_eq!(p.type_map().len(), 1);
    }
}
