use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::builtin::BUILTIN_PATTERNS;
use crate::error::PatternLoadError;
use crate::load;

/// A single named regex fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub fragment: String,
}

impl Pattern {
    pub fn new(name: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fragment: fragment.into(),
        }
    }
}

/// Process-wide base snapshot, built on first use and never mutated.
static BUILTIN: Lazy<PatternLibrary> = Lazy::new(|| {
    let library = PatternLibrary::from_pairs(BUILTIN_PATTERNS.iter().copied());
    tracing::debug!(patterns = library.len(), "built-in pattern library initialised");
    library
});

/// Flattened name → fragment mapping used during expansion.
///
/// Inserting a name that already exists replaces the earlier definition;
/// that is how custom patterns override the built-in ones.
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    patterns: HashMap<String, Pattern>,
}

impl PatternLibrary {
    /// An empty library with no definitions at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A private copy of the built-in base library.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Built-ins, then every file under `dirs` (in order), then `inline`.
    ///
    /// Each source overrides the ones before it.
    pub fn load<P: AsRef<Path>>(
        dirs: &[P],
        inline: &HashMap<String, String>,
    ) -> Result<Self, PatternLoadError> {
        let mut library = Self::builtin();
        for dir in dirs {
            library.extend(load::load_dir(dir.as_ref())?);
        }
        for (name, fragment) in inline {
            library.insert(name.clone(), fragment.clone());
        }
        Ok(library)
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut library = Self::new();
        for (name, fragment) in pairs {
            library.insert(name, fragment);
        }
        library
    }

    /// Add or replace a definition.
    pub fn insert(&mut self, name: impl Into<String>, fragment: impl Into<String>) {
        let pattern = Pattern::new(name, fragment);
        if let Some(previous) = self.patterns.insert(pattern.name.clone(), pattern) {
            tracing::trace!(name = %previous.name, "pattern definition overridden");
        }
    }

    /// Merge `other` into `self`; definitions in `other` win.
    pub fn extend(&mut self, other: PatternLibrary) {
        for (_, pattern) in other.patterns {
            self.insert(pattern.name, pattern.fragment);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.patterns.get(name).map(|p| p.fragment.as_str())
    }

    pub fn pattern(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.patterns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.patterns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<Pattern> for PatternLibrary {
    fn from_iter<T: IntoIterator<Item = Pattern>>(iter: T) -> Self {
        let mut library = Self::new();
        for pattern in iter {
            library.insert(pattern.name, pattern.fragment);
        }
        library
    }
}
