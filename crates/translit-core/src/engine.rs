//! Transliteration facade: option resolution, mapping cache, dispatch.

use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::debug_span;

use crate::cache::MappingCache;
use crate::error::TranslitError;
use crate::mapping::Mapping;
use crate::options::{OptionOverrides, TranslitOptions};
use crate::scheme::{AlternatesTable, Group, SchemeKind, SchemeRegistry};
use crate::settings::settings;
use crate::transcode::{transcode_brahmic, transcode_roman};

/// Owns a scheme registry and the single-slot mapping cache for it.
///
/// Conversions take `&mut self` because they may replace the cached mapping.
/// Share one instance across threads behind a lock (see [`global`]).
#[derive(Debug)]
pub struct Transliterator {
    registry: SchemeRegistry,
    cache: MappingCache,
    defaults: TranslitOptions,
}

impl Transliterator {
    /// Wrap `registry`, taking option defaults from the global settings.
    pub fn new(registry: SchemeRegistry) -> Self {
        Self {
            registry,
            cache: MappingCache::new(),
            defaults: settings().options,
        }
    }

    /// Engine over the built-in schemes.
    pub fn builtin() -> Self {
        Self::new(SchemeRegistry::builtin())
    }

    pub fn with_defaults(mut self, defaults: TranslitOptions) -> Self {
        self.set_defaults(defaults);
        self
    }

    pub fn set_defaults(&mut self, defaults: TranslitOptions) {
        self.defaults = defaults;
    }

    pub fn defaults(&self) -> TranslitOptions {
        self.defaults
    }

    pub fn registry(&self) -> &SchemeRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &MappingCache {
        &self.cache
    }

    pub fn register_scheme(
        &mut self,
        name: &str,
        kind: SchemeKind,
        groups: BTreeMap<Group, Vec<String>>,
    ) {
        self.registry.register_scheme(name, kind, groups);
        self.cache.clear();
    }

    pub fn register_alternates(&mut self, scheme_name: &str, table: AlternatesTable) {
        self.registry.register_alternates(scheme_name, table);
        self.cache.clear();
    }

    /// Register a scheme file. Returns the registered name.
    pub fn register_toml(&mut self, toml_str: &str) -> Result<String, TranslitError> {
        let name = self.registry.register_toml(toml_str)?;
        self.cache.clear();
        Ok(name)
    }

    /// Convert `text` from scheme `from` to scheme `to` with default options.
    pub fn transliterate(&mut self, text: &str, from: &str, to: &str) -> Result<String, TranslitError> {
        self.transliterate_with(text, from, to, &OptionOverrides::default())
    }

    /// Convert `text`, with `overrides` merged over the engine defaults.
    pub fn transliterate_with(
        &mut self,
        text: &str,
        from: &str,
        to: &str,
        overrides: &OptionOverrides,
    ) -> Result<String, TranslitError> {
        let options = overrides.resolve(&self.defaults);
        let _span = debug_span!("transliterate", from, to, bytes = text.len()).entered();

        let preprocess = self.registry.get(from)?.preprocess();
        self.registry.get(to)?;

        let registry = &self.registry;
        let map = self
            .cache
            .get_or_build(from, to, &options, || Mapping::build(registry, from, to))?;

        let text = preprocess.apply(text);
        let out = if map.from_roman {
            transcode_roman(&text, map, &options)
        } else {
            transcode_brahmic(&text, map)
        };
        Ok(out)
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Process-wide engine over the built-in schemes.
pub fn global() -> &'static Mutex<Transliterator> {
    static INSTANCE: OnceLock<Mutex<Transliterator>> = OnceLock::new();
    INSTANCE.get_or_init(|| Mutex::new(Transliterator::builtin()))
}

/// Convert through the shared engine. The lock covers the cache check, any
/// rebuild, and the conversion itself.
pub fn transliterate(
    text: &str,
    from: &str,
    to: &str,
    overrides: &OptionOverrides,
) -> Result<String, TranslitError> {
    let mut engine = global().lock().unwrap_or_else(PoisonError::into_inner);
    engine.transliterate_with(text, from, to, overrides)
}
