use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use crate::compiler::Grok;
use crate::error::GrokResult;
use crate::matcher::CompiledPattern;

/// Compiled-pattern cache keyed by grok expression
///
/// Compiling a grok expression means expanding it and building a large regex,
/// so callers matching the same expression repeatedly go through here.
/// Failed compilations are not cached.
#[derive(Debug)]
pub struct PatternCache {
    grok: Grok,
    /// expression → compiled pattern
    compiled: DashMap<String, Arc<CompiledPattern>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PatternCache {
    pub fn new(grok: Grok) -> Self {
        Self {
            grok,
            compiled: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn grok(&self) -> &Grok {
        &self.grok
    }

    /// Get the compiled pattern for `expression`, compiling it on first use
    pub fn get_or_compile(&self, expression: &str) -> GrokResult<Arc<CompiledPattern>> {
        if let Some(hit) = self.compiled.get(expression) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(hit.value()));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let pattern = Arc::new(self.grok.compile(expression)?);

        // Two threads may race on the same miss; the first insert wins.
        let cached = Arc::clone(
            self.compiled
                .entry(expression.to_string())
                .or_insert(pattern)
                .value(),
        );
        tracing::debug!(expression, entries = self.compiled.len(), "cached compiled pattern");
        Ok(cached)
    }

    /// Cached pattern for `expression`, without compiling
    pub fn get(&self, expression: &str) -> Option<Arc<CompiledPattern>> {
        self.compiled.get(expression).map(|r| Arc::clone(r.value()))
    }

    pub fn remove(&self, expression: &str) -> Option<Arc<CompiledPattern>> {
        self.compiled.remove(expression).map(|(_, p)| p)
    }

    pub fn clear(&self) {
        self.compiled.clear();
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.compiled.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(Grok::default())
    }
}

/// Cache statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}
