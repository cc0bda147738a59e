use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::builtin::BUILTIN_SCHEMES;
use super::config::{parse_scheme_toml, AlternatesTable, SchemeConfig, SchemeConfigError};
use super::{Group, Scheme, SchemeKind};
use crate::error::TranslitError;

/// Named schemes plus the per-source-scheme alternate spelling tables.
#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    schemes: HashMap<String, Scheme>,
    alternates: HashMap<String, AlternatesTable>,
}

impl SchemeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with every scheme in `BUILTIN_SCHEMES`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (_, toml) in BUILTIN_SCHEMES {
            registry
                .register_toml(toml)
                .expect("built-in scheme TOML must be valid");
        }
        registry
    }

    /// Store `groups` under `name`, replacing any scheme already registered there.
    pub fn register_scheme(
        &mut self,
        name: &str,
        kind: SchemeKind,
        groups: BTreeMap<Group, Vec<String>>,
    ) {
        self.register(Scheme::new(name, kind, groups));
    }

    pub fn register(&mut self, scheme: Scheme) {
        debug!(name = scheme.name(), kind = ?scheme.kind(), "register scheme");
        self.schemes.insert(scheme.name().to_string(), scheme);
    }

    /// Set the alternate spellings used when `scheme_name` is the source.
    pub fn register_alternates(&mut self, scheme_name: &str, table: AlternatesTable) {
        self.alternates.insert(scheme_name.to_string(), table);
    }

    /// Register a parsed scheme file. Its alternates replace any previous table.
    pub fn register_config(&mut self, config: SchemeConfig) -> Result<String, SchemeConfigError> {
        let (scheme, alternates) = config.into_scheme()?;
        let name = scheme.name().to_string();
        if alternates.is_empty() {
            self.alternates.remove(&name);
        } else {
            self.register_alternates(&name, alternates);
        }
        self.register(scheme);
        Ok(name)
    }

    /// Parse, validate and register a scheme file. Returns the scheme name.
    pub fn register_toml(&mut self, toml_str: &str) -> Result<String, SchemeConfigError> {
        self.register_config(parse_scheme_toml(toml_str)?)
    }

    pub fn get(&self, name: &str) -> Result<&Scheme, TranslitError> {
        self.schemes
            .get(name)
            .ok_or_else(|| TranslitError::UnknownScheme(name.to_string()))
    }

    pub fn is_roman(&self, name: &str) -> Result<bool, TranslitError> {
        self.get(name).map(Scheme::is_roman)
    }

    /// Alternates registered for `token` in `scheme_name`, empty when none.
    pub fn alternates_for(&self, scheme_name: &str, token: &str) -> &[String] {
        self.alternates
            .get(scheme_name)
            .and_then(|table| table.get(token))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn alternates(&self, scheme_name: &str) -> Option<&AlternatesTable> {
        self.alternates.get(scheme_name)
    }

    /// Registered scheme names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Export a registered scheme in file form.
    pub fn export(&self, name: &str) -> Result<SchemeConfig, TranslitError> {
        let scheme = self.get(name)?;
        let alternates = self.alternates(name).cloned().unwrap_or_default();
        Ok(SchemeConfig::from_scheme(scheme, alternates))
    }
}
