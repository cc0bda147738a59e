//! Single-slot memo of the most recently built mapping.

use tracing::debug;

use crate::error::TranslitError;
use crate::mapping::Mapping;
use crate::options::TranslitOptions;

/// Everything a mapping depends on. A cached mapping is reused only when
/// all fields compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub from: String,
    pub to: String,
    pub options: TranslitOptions,
}

impl CacheKey {
    fn matches(&self, from: &str, to: &str, options: &TranslitOptions) -> bool {
        self.from == from && self.to == to && self.options == *options
    }
}

/// Holds at most one mapping; a lookup with a different key replaces it.
#[derive(Debug, Default)]
pub struct MappingCache {
    entry: Option<(CacheKey, Mapping)>,
    hits: u64,
    misses: u64,
}

impl MappingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached mapping for the key, or build and store a new one.
    ///
    /// A failed build leaves the previous entry in place.
    pub fn get_or_build<F>(
        &mut self,
        from: &str,
        to: &str,
        options: &TranslitOptions,
        build: F,
    ) -> Result<&Mapping, TranslitError>
    where
        F: FnOnce() -> Result<Mapping, TranslitError>,
    {
        let entry = match self.entry.take() {
            Some((key, mapping)) if key.matches(from, to, options) => {
                self.hits += 1;
                debug!(from, to, "mapping cache hit");
                (key, mapping)
            }
            prev => {
                self.misses += 1;
                debug!(from, to, ?options, "mapping cache miss");
                let mapping = match build() {
                    Ok(mapping) => mapping,
                    Err(e) => {
                        self.entry = prev;
                        return Err(e);
                    }
                };
                let key = CacheKey {
                    from: from.to_string(),
                    to: to.to_string(),
                    options: *options,
                };
                (key, mapping)
            }
        };
        let (_, mapping) = self.entry.insert(entry);
        Ok(&*mapping)
    }

    pub fn key(&self) -> Option<&CacheKey> {
        self.entry.as_ref().map(|(key, _)| key)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
