//! Types: field coercions and the per-expression type map.
//!
//! A binding's type comes from one of two places:
//! 1. an explicit `%{PATTERN:field:int}` annotation, which always wins
//! 2. auto-detection from the referenced pattern name (`auto_map`), where the
//!    first detection for a field sticks
//!
//! Expansion feeds each round's references to [`TypeMapper::observe`], since
//! both the annotation and the pattern name disappear once a reference has
//! been rewritten.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::FieldValue;
use crate::reference::Reference;

/// Supported coercions for captured values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coercion {
    /// Signed 64-bit. Values outside the `i64` range stay text.
    Int,
    Float,
}

impl Coercion {
    /// Parse a type token from reference syntax.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "int" => Some(Coercion::Int),
            "float" => Some(Coercion::Float),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Coercion::Int => "int",
            Coercion::Float => "float",
        }
    }

    /// Convert captured text, or `None` if it is not a valid literal.
    pub fn apply(&self, raw: &str) -> Option<FieldValue> {
        match self {
            Coercion::Int => raw.parse::<i64>().ok().map(FieldValue::Int),
            Coercion::Float => raw.parse::<f64>().ok().map(FieldValue::Float),
        }
    }
}

/// Pattern names whose matches are coerced when `auto_map` is on.
pub const AUTO_TYPES: &[(&str, Coercion)] = &[
    ("INT", Coercion::Int),
    ("POSINT", Coercion::Int),
    ("NONNEGINT", Coercion::Int),
    ("NUMBER", Coercion::Float),
    ("BASE10NUM", Coercion::Float),
];

fn auto_type(pattern: &str) -> Option<Coercion> {
    AUTO_TYPES
        .iter()
        .find(|(name, _)| *name == pattern)
        .map(|(_, coercion)| *coercion)
}

/// Binding name → coercion for one compiled expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMap {
    entries: HashMap<String, Coercion>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, binding: &str) -> Option<Coercion> {
        self.entries.get(binding).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Coercion)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Accumulates a [`TypeMap`] across expansion rounds.
#[derive(Debug, Default)]
pub struct TypeMapper {
    auto_map: bool,
    map: TypeMap,
}

impl TypeMapper {
    pub fn new(auto_map: bool) -> Self {
        Self {
            auto_map,
            map: TypeMap::new(),
        }
    }

    /// Record the references seen in one expansion round.
    pub fn observe(&mut self, references: &[Reference<'_>]) {
        for reference in references {
            let Some(binding) = reference.binding else {
                continue;
            };

            if let Some(coercion) = reference.coercion {
                self.map.entries.insert(binding.to_string(), coercion);
                continue;
            }

            if !self.auto_map || self.map.entries.contains_key(binding) {
                continue;
            }

            if let Some(coercion) = auto_type(reference.pattern) {
                tracing::trace!(binding, pattern = reference.pattern, coercion = coercion.as_str(), "auto-detected field type");
                self.map.entries.insert(binding.to_string(), coercion);
            }
        }
    }

    pub fn finish(self) -> TypeMap {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::scan;

    fn map_for(rounds: &[&str], auto_map: bool) -> TypeMap {
        let mut mapper = TypeMapper::new(auto_map);
        for round in rounds {
            mapper.observe(&scan(round));
        }
        mapper.finish()
    }

    // ── Coercion ────────────────────────────────────────────────

    #[test]
    fn test_coercion_tokens() {
        assert_eq!(Coercion::from_token("int"), Some(Coercion::Int));
        assert_eq!(Coercion::from_token("float"), Some(Coercion::Float));
        assert_eq!(Coercion::from_token("INT"), None);
        assert_eq!(Coercion::from_token("string"), None);
    }

    #[test]
    fn test_coercion_apply() {
        assert_eq!(Coercion::Int.apply("25"), Some(FieldValue::Int(25)));
        assert_eq!(Coercion::Int.apply("-7"), Some(FieldValue::Int(-7)));
        assert_eq!(Coercion::Int.apply("1.5"), None);
        assert_eq!(Coercion::Int.apply("not_a_int"), None);
        assert_eq!(Coercion::Float.apply("6.032"), Some(FieldValue::Float(6.032)));
        assert_eq!(Coercion::Float.apply("200"), Some(FieldValue::Float(200.0)));
        assert_eq!(Coercion::Float.apply("abc"), None);
    }

    #[test]
    fn test_int_outside_i64_range() {
        assert_eq!(Coercion::Int.apply("9223372036854775807"), Some(FieldValue::Int(i64::MAX)));
        assert_eq!(Coercion::Int.apply("-9223372036854775808"), Some(FieldValue::Int(i64::MIN)));
        assert_eq!(Coercion::Int.apply("9223372036854775808"), None);
        assert_eq!(Coercion::Int.apply("99999999999999999999"), None);
    }

    // ── Mapping ─────────────────────────────────────────────────

    #[test]
    fn test_no_auto_map_ignores_pattern_names() {
        let map = map_for(&["%{INT:age} %{NUMBER:ratio}"], false);
        assert!(map.is_empty());
    }

    #[test]
    fn test_auto_map_detects_known_patterns() {
        let map = map_for(&["%{INT:age} %{NUMBER:ratio} %{WORD:name} %{NONNEGINT}"], true);
        assert_eq!(map.get("age"), Some(Coercion::Int));
        assert_eq!(map.get("ratio"), Some(Coercion::Float));
        assert_eq!(map.get("name"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_explicit_type_without_auto_map() {
        let map = map_for(&["%{WORD:count:int} %{WORD:other:bogus}"], false);
        assert_eq!(map.get("count"), Some(Coercion::Int));
        assert_eq!(map.get("other"), None);
    }

    #[test]
    fn test_explicit_beats_earlier_auto() {
        let map = map_for(&["%{NUMBER:value}", "%{INT:value:int}"], true);
        assert_eq!(map.get("value"), Some(Coercion::Int));
    }

    #[test]
    fn test_explicit_not_overridden_by_later_auto() {
        let map = map_for(&["%{NUMBER:value:int}", "%{NUMBER:value}"], true);
        assert_eq!(map.get("value"), Some(Coercion::Int));
    }

    #[test]
    fn test_auto_first_writer_wins() {
        let map = map_for(&["%{INT:value}", "%{NUMBER:value}"], true);
        assert_eq!(map.get("value"), Some(Coercion::Int));
    }

    #[test]
    fn test_explicit_wins_within_one_round() {
        let map = map_for(&["%{NUMBER:v} %{INT:v:int}"], true);
        assert_eq!(map.get("v"), Some(Coercion::Int));
        let map = map_for(&["%{INT:v:float} %{NUMBER:v}"], true);
        assert_eq!(map.get("v"), Some(Coercion::Float));
    }
}
