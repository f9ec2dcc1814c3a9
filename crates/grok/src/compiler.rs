//! Compiler: turns grok expressions into [`CompiledPattern`]s.

use patterns::PatternLibrary;
use regex::RegexBuilder;

use crate::config::{GrokConfig, DEFAULT_REGEX_SIZE_LIMIT};
use crate::error::{GrokError, GrokResult};
use crate::expand::expand;
use crate::matcher::CompiledPattern;
use crate::model::Matches;

/// A resolved pattern library plus compile options.
///
/// The library is owned, so overrides applied to one `Grok` never affect
/// another.
#[derive(Debug, Clone)]
pub struct Grok {
    library: PatternLibrary,
    auto_map: bool,
    regex_size_limit: usize,
}

impl Grok {
    pub fn new(library: PatternLibrary) -> Self {
        Self {
            library,
            auto_map: false,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
        }
    }

    /// Built-ins, then `config.pattern_dirs`, then `config.patterns`.
    pub fn from_config(config: &GrokConfig) -> GrokResult<Self> {
        config.validate().map_err(GrokError::Config)?;
        let library = PatternLibrary::load(&config.pattern_dirs, &config.patterns)?;
        Ok(Self {
            library,
            auto_map: config.auto_map,
            regex_size_limit: config.regex_size_limit,
        })
    }

    pub fn with_auto_map(mut self, auto_map: bool) -> Self {
        self.auto_map = auto_map;
        self
    }

    pub fn add_pattern(&mut self, name: impl Into<String>, fragment: impl Into<String>) {
        self.library.insert(name, fragment);
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn auto_map(&self) -> bool {
        self.auto_map
    }

    pub fn compile(&self, expression: &str) -> GrokResult<CompiledPattern> {
        let expansion = expand(expression, &self.library, self.auto_map)?;
        let regex = RegexBuilder::new(&expansion.pattern)
            .size_limit(self.regex_size_limit)
            .build()?;
        Ok(CompiledPattern::new(expression, regex, expansion.type_map))
    }
}

impl Default for Grok {
    /// Built-in patterns only, `auto_map` off.
    fn default() -> Self {
        Self::new(PatternLibrary::builtin())
    }
}

/// Compile `expression` against the built-in library plus the overrides and
/// options in `config`.
pub fn compile(expression: &str, config: &GrokConfig) -> GrokResult<CompiledPattern> {
    Grok::from_config(config)?.compile(expression)
}

/// `compile` followed by a single match.
pub fn match_expression(text: &str, expression: &str, config: &GrokConfig) -> GrokResult<Option<Matches>> {
    Ok(compile(expression, config)?.matches(text))
}

pub use match_expression as grok_match;
