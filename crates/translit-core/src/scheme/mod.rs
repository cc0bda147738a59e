//! Scheme definitions: ordered character groups for one writing system.
//!
//! Groups are positionally aligned across schemes, so `vowels[i]` in one
//! scheme corresponds to `vowels[i]` in any other scheme that has the group.
//! Coverage is allowed to be partial: a scheme may omit groups entirely, and
//! empty-string entries act as placeholders that keep later entries aligned.

mod builtin;
mod config;
mod registry;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::preprocess::Preprocess;

pub use builtin::BUILTIN_SCHEMES;
pub use config::{parse_scheme_toml, AlternatesTable, GroupsConfig, SchemeConfig, SchemeConfigError};
pub use registry::SchemeRegistry;

/// How a scheme treats vowels after consonants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    /// Alphabetic romanization: every vowel is written out explicitly.
    Roman,
    /// Abugida: consonants carry an inherent vowel unless a mark or virama follows.
    Brahmic,
}

impl SchemeKind {
    pub fn is_roman(self) -> bool {
        matches!(self, SchemeKind::Roman)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemeKind::Roman => "roman",
            SchemeKind::Brahmic => "brahmic",
        }
    }
}

/// Recognized character groups, in the order they are folded into a mapping.
///
/// When the same source token appears in several groups, the later group wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    Vowels,
    VowelMarks,
    OtherMarks,
    Virama,
    Consonants,
    Symbols,
    Zwj,
    Skip,
    Accent,
    ComboAccent,
    Candra,
    Other,
}

impl Group {
    pub const ALL: [Group; 12] = [
        Group::Vowels,
        Group::VowelMarks,
        Group::OtherMarks,
        Group::Virama,
        Group::Consonants,
        Group::Symbols,
        Group::Zwj,
        Group::Skip,
        Group::Accent,
        Group::ComboAccent,
        Group::Candra,
        Group::Other,
    ];

    /// Name used in scheme TOML files.
    pub fn as_str(self) -> &'static str {
        match self {
            Group::Vowels => "vowels",
            Group::VowelMarks => "vowel_marks",
            Group::OtherMarks => "other_marks",
            Group::Virama => "virama",
            Group::Consonants => "consonants",
            Group::Symbols => "symbols",
            Group::Zwj => "zwj",
            Group::Skip => "skip",
            Group::Accent => "accent",
            Group::ComboAccent => "combo_accent",
            Group::Candra => "candra",
            Group::Other => "other",
        }
    }

    /// Dependent forms: used only directly after a consonant.
    pub fn is_mark(self) -> bool {
        matches!(self, Group::VowelMarks | Group::Virama)
    }

    /// Groups whose tokens carry an inherent vowel in Brahmic context.
    pub fn is_consonant(self) -> bool {
        matches!(self, Group::Consonants | Group::Other)
    }
}

/// A registered scheme. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    name: String,
    kind: SchemeKind,
    groups: BTreeMap<Group, Vec<String>>,
    preprocess: Preprocess,
}

impl Scheme {
    /// Build a scheme from raw groups.
    ///
    /// Roman schemes without `vowel_marks` get them derived from `vowels`
    /// minus the leading inherent "a".
    pub fn new(
        name: impl Into<String>,
        kind: SchemeKind,
        mut groups: BTreeMap<Group, Vec<String>>,
    ) -> Self {
        if kind.is_roman() && !groups.contains_key(&Group::VowelMarks) {
            if let Some(vowels) = groups.get(&Group::Vowels) {
                let marks = vowels.iter().skip(1).cloned().collect();
                groups.insert(Group::VowelMarks, marks);
            }
        }
        Self {
            name: name.into(),
            kind,
            groups,
            preprocess: Preprocess::None,
        }
    }

    pub fn with_preprocess(mut self, preprocess: Preprocess) -> Self {
        self.preprocess = preprocess;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SchemeKind {
        self.kind
    }

    pub fn is_roman(&self) -> bool {
        self.kind.is_roman()
    }

    pub fn preprocess(&self) -> Preprocess {
        self.preprocess
    }

    pub fn group(&self, group: Group) -> Option<&[String]> {
        self.groups.get(&group).map(Vec::as_slice)
    }

    /// Iterate present groups in fold order.
    pub fn groups(&self) -> impl Iterator<Item = (Group, &[String])> {
        self.groups.iter().map(|(g, tokens)| (*g, tokens.as_slice()))
    }

    /// The virama token, or "" when the scheme has none.
    pub fn virama(&self) -> &str {
        self.group(Group::Virama)
            .and_then(|v| v.first())
            .map(String::as_str)
            .unwrap_or("")
    }
}
