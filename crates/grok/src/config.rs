//! Config: compile options, loaded from TOML and environment variables.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GrokError, GrokResult};

/// Default cap on the compiled regex size. Expanded grok patterns are large
/// (a single `%{IP}` pulls in the whole IPv6 alternation).
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 32 * (1 << 20);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrokConfig {
    /// Directories of pattern definition files, lowest priority first.
    pub pattern_dirs: Vec<PathBuf>,
    /// Inline definitions; these override everything else.
    pub patterns: HashMap<String, String>,
    /// Infer numeric types from well-known pattern names.
    pub auto_map: bool,
    pub regex_size_limit: usize,
}

impl Default for GrokConfig {
    fn default() -> Self {
        Self {
            pattern_dirs: Vec::new(),
            patterns: HashMap::new(),
            auto_map: false,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
        }
    }
}

impl GrokConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> GrokResult<Self> {
        let mut config = match std::env::var("GROK_CONFIG_FILE") {
            Ok(path) if Path::new(&path).exists() => {
                tracing::info!("Loading grok configuration from: {}", path);
                Self::from_file(&path)?
            }
            _ => Self::from_env(),
        };

        if let Some(dirs) = std::env::var_os("GROK_PATTERNS_DIR") {
            config.pattern_dirs = std::env::split_paths(&dirs).collect();
        }
        if let Some(auto_map) = env_bool("GROK_AUTO_MAP") {
            config.auto_map = auto_map;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GrokResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| GrokError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> GrokResult<Self> {
        toml::from_str(contents).map_err(|e| GrokError::Config(e.to_string()))
    }

    /// Defaults, with `GROK_PATTERNS_DIR` and `GROK_AUTO_MAP` applied
    pub fn from_env() -> Self {
        Self {
            pattern_dirs: std::env::var_os("GROK_PATTERNS_DIR")
                .map(|dirs| std::env::split_paths(&dirs).collect())
                .unwrap_or_default(),
            auto_map: env_bool("GROK_AUTO_MAP").unwrap_or(false),
            ..Self::default()
        }
    }

    /// Checks option values only. Pattern directories are checked when the
    /// library is loaded, which reports them as `PatternLoadError`.
    pub fn validate(&self) -> Result<(), String> {
        if self.regex_size_limit == 0 {
            return Err("regex_size_limit must be > 0".to_string());
        }
        Ok(())
    }

    pub fn with_pattern(mut self, name: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.patterns.insert(name.into(), fragment.into());
        self
    }

    pub fn with_pattern_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.pattern_dirs.push(dir.into());
        self
    }

    pub fn with_auto_map(mut self, auto_map: bool) -> Self {
        self.auto_map = auto_map;
        self
    }
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}
