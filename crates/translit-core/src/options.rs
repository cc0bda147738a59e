use serde::{Deserialize, Serialize};

/// Fully resolved transliteration options. Part of the mapping cache key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslitOptions {
    /// Pass `<...>` regions of roman input through untouched.
    #[serde(default)]
    pub skip_sgml: bool,
    /// Leave a dangling consonant bare instead of closing it with a virama.
    #[serde(default)]
    pub syncope: bool,
}

/// Caller-supplied options; unset fields fall back to the engine defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub skip_sgml: Option<bool>,
    pub syncope: Option<bool>,
}

impl OptionOverrides {
    pub fn skip_sgml(mut self, value: bool) -> Self {
        self.skip_sgml = Some(value);
        self
    }

    pub fn syncope(mut self, value: bool) -> Self {
        self.syncope = Some(value);
        self
    }

    pub fn resolve(&self, defaults: &TranslitOptions) -> TranslitOptions {
        TranslitOptions {
            skip_sgml: self.skip_sgml.unwrap_or(defaults.skip_sgml),
            syncope: self.syncope.unwrap_or(defaults.syncope),
        }
    }
}

impl From<TranslitOptions> for OptionOverrides {
    fn from(opts: TranslitOptions) -> Self {
        Self {
            skip_sgml: Some(opts.skip_sgml),
            syncope: Some(opts.syncope),
        }
    }
}
