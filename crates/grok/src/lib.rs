//! Grok: named, reusable regex fragments composed into log-line parsers.
//!
//! An expression such as `%{IP:client} %{INT:status:int}` is expanded against
//! a [`PatternLibrary`] into a plain regex, compiled once, and then matched
//! against text to yield named, optionally typed, fields.
//!
//! - `reference.rs`: the `%{NAME:binding:type}` reference syntax
//! - `expand.rs`: reference resolution, cycle detection, rewriting
//! - `types.rs`: declared and inferred field coercions
//! - `compiler.rs`: the [`Grok`] compiler and the one-shot helpers
//! - `matcher.rs`: compiled patterns and matching
//! - `cache.rs`: compiled-pattern cache
//! - `config.rs`: TOML / environment configuration

pub mod cache;
pub mod compiler;
pub mod config;
pub mod error;
pub mod expand;
pub mod matcher;
pub mod model;
pub mod reference;
pub mod types;

pub use cache::{CacheStats, PatternCache};
pub use compiler::{compile, grok_match, match_expression, Grok};
pub use config::GrokConfig;
pub use error::{GrokError, GrokResult};
pub use matcher::{grok_search, CompiledPattern};
pub use model::{FieldValue, Matches};
pub use patterns::{PatternLibrary, PatternLoadError};
pub use types::{Coercion, TypeMap};
