//! Grok pattern library: the name → regex fragment table that grok
//! expressions are expanded against.
//!
//! - `builtin.rs`: the default base patterns
//! - `library.rs`: the library type and override semantics
//! - `load.rs`: definition files and directories

pub mod builtin;
pub mod error;
pub mod library;
pub mod load;

pub use builtin::BUILTIN_PATTERNS;
pub use error::PatternLoadError;
pub use library::{Pattern, PatternLibrary};
pub use load::{load_dir, load_file, parse_definitions};
