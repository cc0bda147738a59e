//! Per-scheme input rewrites applied before the roman transcoder runs.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::scheme::SchemeConfigError;

/// Rewrite hook attached to a source scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Preprocess {
    #[default]
    None,
    /// Fold ITRANS escape syntax into the generic `##` toggle.
    Itrans,
}

impl Preprocess {
    pub fn as_str(self) -> &'static str {
        match self {
            Preprocess::None => "none",
            Preprocess::Itrans => "itrans",
        }
    }

    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Preprocess::None => Cow::Borrowed(text),
            Preprocess::Itrans => itrans(text),
        }
    }
}

impl FromStr for Preprocess {
    type Err = SchemeConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Preprocess::None),
            "itrans" => Ok(Preprocess::Itrans),
            other => Err(SchemeConfigError::UnknownPreprocess(other.to_string())),
        }
    }
}

impl fmt::Display for Preprocess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `\X` (X not an accent escape) and a trailing `\` become `##X##`.
fn backslash_escape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\\([^'`_]|$)").expect("escape pattern must compile"))
}

fn itrans(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') && !text.contains(".h") {
        return Cow::Borrowed(text);
    }
    // {\m+} is written as a candrabindu-style `.h.N`; `.h` alone is a no-op marker.
    let folded = text.replace("{\\m+}", ".h.N").replace(".h", "");
    let escaped = backslash_escape().replace_all(&folded, "##${1}##");
    Cow::Owned(escaped.into_owned())
}
