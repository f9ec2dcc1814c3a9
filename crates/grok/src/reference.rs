//! Reference: `%{NAME[:binding[:type]]}` macro references.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Coercion;

static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"%\{(\w+)(?::(\w+)(?::(\w+))?)?\}").expect("reference syntax regex must compile")
});

/// One macro reference found in an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
    /// Library pattern being referenced.
    pub pattern: &'a str,
    /// Field name the match is reported under; `None` discards the value.
    pub binding: Option<&'a str>,
    /// Explicit coercion; unrecognised type tokens end up as `None`.
    pub coercion: Option<Coercion>,
    /// Byte span of the whole `%{...}` in the scanned text.
    pub span: Range<usize>,
}

impl Reference<'_> {
    pub fn is_named(&self) -> bool {
        self.binding.is_some()
    }
}

/// All references in `text`, left to right.
pub fn scan(text: &str) -> Vec<Reference<'_>> {
    REFERENCE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let pattern = caps.get(1)?.as_str();
            let binding = caps.get(2).map(|m| m.as_str());
            let coercion = caps.get(3).and_then(|m| {
                let parsed = Coercion::from_token(m.as_str());
                if parsed.is_none() {
                    tracing::debug!(token = m.as_str(), pattern, "ignoring unrecognised type token");
                }
                parsed
            });
            Some(Reference {
                pattern,
                binding,
                coercion,
                span: whole.range(),
            })
        })
        .collect()
}

/// True if `text` still contains at least one reference.
pub fn contains_reference(text: &str) -> bool {
    REFERENCE.is_match(text)
}
