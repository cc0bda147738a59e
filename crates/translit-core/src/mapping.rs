//! Flattened lookup tables for one (from, to) scheme pair.

use std::collections::{HashMap, HashSet};

use tracing::{debug, debug_span};

use crate::error::TranslitError;
use crate::scheme::{Group, SchemeRegistry};

/// Lookup tables consumed by the transcoders. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Independent forms: every group except `vowel_marks` and `virama`.
    pub letters: HashMap<String, String>,
    /// Dependent forms: `vowel_marks` and `virama`.
    pub marks: HashMap<String, String>,
    /// Source tokens (including alternates) that carry an inherent vowel.
    pub consonants: HashSet<String>,
    /// Longest source token in chars, alternates included. At least 1.
    pub max_token_len: usize,
    /// Target virama, "" for schemes without one.
    pub virama: String,
    pub from_roman: bool,
    pub to_roman: bool,
}

impl Mapping {
    /// Build the mapping from scheme `from` to scheme `to`.
    ///
    /// Groups are zipped positionally. A group missing from `to` contributes
    /// nothing, and groups of unequal length are truncated to the shorter one.
    pub fn build(registry: &SchemeRegistry, from: &str, to: &str) -> Result<Self, TranslitError> {
        let from_scheme = registry.get(from)?;
        let to_scheme = registry.get(to)?;
        let _span = debug_span!("build_mapping", from, to).entered();

        let mut mapping = Mapping {
            letters: HashMap::new(),
            marks: HashMap::new(),
            consonants: HashSet::new(),
            max_token_len: 1,
            virama: to_scheme.virama().to_string(),
            from_roman: from_scheme.is_roman(),
            to_roman: to_scheme.is_roman(),
        };

        for (group, from_tokens) in from_scheme.groups() {
            let Some(to_tokens) = to_scheme.group(group) else {
                continue;
            };
            for (f, t) in from_tokens.iter().zip(to_tokens) {
                let alts = registry.alternates_for(from, f);
                for token in std::iter::once(f).chain(alts) {
                    mapping.insert(group, token, t);
                }
            }
        }

        debug!(
            letters = mapping.letters.len(),
            marks = mapping.marks.len(),
            consonants = mapping.consonants.len(),
            max_token_len = mapping.max_token_len
        );
        Ok(mapping)
    }

    fn insert(&mut self, group: Group, token: &str, target: &str) {
        // Empty entries are alignment placeholders, never matchable tokens.
        if token.is_empty() {
            return;
        }
        self.max_token_len = self.max_token_len.max(token.chars().count());
        if group.is_mark() {
            // An empty virama target is a real mapping (it drops the virama);
            // an empty vowel-mark target is a gap in the target script.
            if group == Group::VowelMarks && target.is_empty() {
                return;
            }
            self.marks.insert(token.to_string(), target.to_string());
            return;
        }
        self.letters.insert(token.to_string(), target.to_string());
        if group.is_consonant() {
            self.consonants.insert(token.to_string());
        }
    }

    pub fn letter(&self, token: &str) -> Option<&str> {
        self.letters.get(token).map(String::as_str)
    }

    pub fn mark(&self, token: &str) -> Option<&str> {
        self.marks.get(token).map(String::as_str)
    }

    pub fn is_consonant(&self, token: &str) -> bool {
        self.consonants.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::scheme::SchemeKind;

    fn registry() -> SchemeRegistry {
        SchemeRegistry::builtin()
    }

    #[test]
    fn itrans_to_devanagari_tables() {
        let m = Mapping::build(&registry(), "itrans", "devanagari").unwrap();
        assert!(m.from_roman);
        assert!(!m.to_roman);
        assert_eq!(m.virama, "्");
        assert_eq!(m.letter("k"), Some("क"));
        assert_eq!(m.letter("A"), Some("आ"));
        assert_eq!(m.mark("A"), Some("ा"));
        assert!(m.mark("a").is_none());
        assert!(m.is_consonant("k"));
        assert!(!m.is_consonant("a"));
    }

    #[test]
    fn alternates_share_the_canonical_target() {
        let m = Mapping::build(&registry(), "itrans", "devanagari").unwrap();
        assert_eq!(m.letter("aa"), m.letter("A"));
        assert_eq!(m.mark("aa"), m.mark("A"));
        assert_eq!(m.letter("ee"), Some("ई"));
        assert_eq!(m.letter("x"), Some("क्ष"));
        assert!(m.is_consonant("x"));
        assert!(m.is_consonant("c"));
    }

    #[test]
    fn max_token_len_counts_alternates() {
        let m = Mapping::build(&registry(), "itrans", "devanagari").unwrap();
        // "\_.m" is an alternate of "\_M"
        assert_eq!(m.max_token_len, 4);
        let iast = Mapping::build(&registry(), "iast", "devanagari").unwrap();
        assert_eq!(iast.max_token_len, 2);
    }

    #[test]
    fn other_group_overrides_consonants() {
        // ITRANS lists "z" in both consonants (unaligned) and other.
        let m = Mapping::build(&registry(), "itrans", "devanagari").unwrap();
        assert_eq!(m.letter("z"), Some("\u{091C}\u{093C}"));
        assert_eq!(m.letter("J"), Some("\u{091C}\u{093C}"));
        assert!(m.letter("^n").is_none());
    }

    #[test]
    fn missing_target_group_is_skipped() {
        // IAST has no zwj/skip/accent/other groups
        let m = Mapping::build(&registry(), "itrans", "iast").unwrap();
        assert!(m.letter("{}").is_none());
        assert!(m.letter("q").is_none());
        assert_eq!(m.letter("sh"), Some("ś"));
        assert_eq!(m.virama, "");
        assert!(m.to_roman);
    }

    #[test]
    fn unequal_groups_truncate() {
        let mut r = SchemeRegistry::new();
        let mut a = BTreeMap::new();
        a.insert(Group::Vowels, vec!["a".into(), "i".into(), "u".into()]);
        r.register_scheme("long", SchemeKind::Roman, a);
        let mut b = BTreeMap::new();
        b.insert(Group::Vowels, vec!["A".into()]);
        r.register_scheme("short", SchemeKind::Roman, b);

        let m = Mapping::build(&r, "long", "short").unwrap();
        assert_eq!(m.letter("a"), Some("A"));
        assert!(m.letter("i").is_none());
        // derived vowel_marks of "short" are empty, so nothing lands in marks
        assert!(m.marks.is_empty());
    }

    #[test]
    fn empty_source_tokens_are_not_keys() {
        let m = Mapping::build(&registry(), "tamil", "itrans").unwrap();
        assert!(!m.letters.contains_key(""));
        assert!(!m.marks.contains_key(""));
        // repeated Tamil consonants: the last aligned entry wins
        assert_eq!(m.letter("க"), Some("gh"));
    }

    #[test]
    fn empty_vowel_mark_targets_are_not_keys() {
        // ITRANS has no short e: the Devanagari sign has nowhere to go
        let m = Mapping::build(&registry(), "devanagari", "itrans").unwrap();
        assert!(m.mark("\u{0946}").is_none());
        assert_eq!(m.mark("\u{0947}"), Some("e"));
        // the virama still maps to the empty roman virama
        assert_eq!(m.mark("\u{094D}"), Some(""));
    }

    #[test]
    fn unknown_scheme() {
        assert!(matches!(
            Mapping::build(&registry(), "itrans", "nope"),
            Err(TranslitError::UnknownScheme(name)) if name == "nope"
        ));
        assert!(matches!(
            Mapping::build(&registry(), "nope", "itrans"),
            Err(TranslitError::UnknownScheme(name)) if name == "nope"
        ));
    }
}
