use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Group, Scheme, SchemeKind};
use crate::preprocess::Preprocess;

/// Canonical source token → alternate spellings that transliterate identically.
pub type AlternatesTable = BTreeMap<String, Vec<String>>;

/// On-disk shape of a scheme file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemeConfig {
    pub name: String,
    pub kind: SchemeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preprocess: Option<String>,
    pub groups: GroupsConfig,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub alternates: AlternatesTable,
}

/// One optional list per recognized group. Unknown group names are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vowels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vowel_marks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_marks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virama: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consonants: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zwj: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combo_accent: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candra: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<Vec<String>>,
}

impl GroupsConfig {
    fn slot(&mut self, group: Group) -> &mut Option<Vec<String>> {
        match group {
            Group::Vowels => &mut self.vowels,
            Group::VowelMarks => &mut self.vowel_marks,
            Group::OtherMarks => &mut self.other_marks,
            Group::Virama => &mut self.virama,
            Group::Consonants => &mut self.consonants,
            Group::Symbols => &mut self.symbols,
            Group::Zwj => &mut self.zwj,
            Group::Skip => &mut self.skip,
            Group::Accent => &mut self.accent,
            Group::ComboAccent => &mut self.combo_accent,
            Group::Candra => &mut self.candra,
            Group::Other => &mut self.other,
        }
    }

    fn into_map(mut self) -> BTreeMap<Group, Vec<String>> {
        Group::ALL
            .iter()
            .filter_map(|g| self.slot(*g).take().map(|tokens| (*g, tokens)))
            .collect()
    }

    fn from_scheme(scheme: &Scheme) -> Self {
        let mut cfg = GroupsConfig::default();
        for (group, tokens) in scheme.groups() {
            *cfg.slot(group) = Some(tokens.to_vec());
        }
        cfg
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemeConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("scheme name is empty")]
    EmptyName,
    #[error("roman scheme {0} has no vowels")]
    MissingVowels(String),
    #[error("scheme {scheme}: group {group} is empty")]
    EmptyGroup { scheme: String, group: &'static str },
    #[error("scheme {scheme}: empty alternate for {token:?}")]
    EmptyAlternate { scheme: String, token: String },
    #[error("unknown preprocess hook: {0}")]
    UnknownPreprocess(String),
    #[error("TOML serialize error: {0}")]
    Serialize(String),
}

impl SchemeConfig {
    /// Snapshot a registered scheme back into file form.
    pub fn from_scheme(scheme: &Scheme, alternates: AlternatesTable) -> Self {
        let preprocess = match scheme.preprocess() {
            Preprocess::None => None,
            p => Some(p.as_str().to_string()),
        };
        Self {
            name: scheme.name().to_string(),
            kind: scheme.kind(),
            preprocess,
            groups: GroupsConfig::from_scheme(scheme),
            alternates,
        }
    }

    /// Validate and convert into a `Scheme` plus its alternates table.
    pub fn into_scheme(self) -> Result<(Scheme, AlternatesTable), SchemeConfigError> {
        self.validate()?;
        let preprocess = match self.preprocess.as_deref() {
            Some(name) => name.parse()?,
            None => Preprocess::None,
        };
        let scheme =
            Scheme::new(self.name, self.kind, self.groups.into_map()).with_preprocess(preprocess);
        Ok((scheme, self.alternates))
    }

    pub fn to_toml(&self) -> Result<String, SchemeConfigError> {
        toml::to_string(self).map_err(|e| SchemeConfigError::Serialize(e.to_string()))
    }

    fn validate(&self) -> Result<(), SchemeConfigError> {
        if self.name.trim().is_empty() {
            return Err(SchemeConfigError::EmptyName);
        }
        if self.kind.is_roman() && self.groups.vowels.is_none() {
            return Err(SchemeConfigError::MissingVowels(self.name.clone()));
        }
        let mut groups = self.groups.clone();
        for group in Group::ALL {
            if matches!(groups.slot(group), Some(tokens) if tokens.is_empty()) {
                return Err(SchemeConfigError::EmptyGroup {
                    scheme: self.name.clone(),
                    group: group.as_str(),
                });
            }
        }
        for (token, alts) in &self.alternates {
            if token.is_empty() || alts.iter().any(String::is_empty) {
                return Err(SchemeConfigError::EmptyAlternate {
                    scheme: self.name.clone(),
                    token: token.clone(),
                });
            }
        }
        if let Some(name) = &self.preprocess {
            name.parse::<Preprocess>()?;
        }
        Ok(())
    }
}

/// Parse and validate a scheme file.
pub fn parse_scheme_toml(toml_str: &str) -> Result<SchemeConfig, SchemeConfigError> {
    let config: SchemeConfig =
        toml::from_str(toml_str).map_err(|e| SchemeConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_roman() {
        let toml = r#"
name = "mini"
kind = "roman"

[groups]
vowels = ["a", "i"]
consonants = ["k"]
"#;
        let cfg = parse_scheme_toml(toml).unwrap();
        assert_eq!(cfg.name, "mini");
        assert_eq!(cfg.kind, SchemeKind::Roman);
        let (scheme, alts) = cfg.into_scheme().unwrap();
        assert!(alts.is_empty());
        assert_eq!(scheme.group(Group::VowelMarks), Some(&["i".to_string()][..]));
        assert_eq!(scheme.preprocess(), Preprocess::None);
    }

    #[test]
    fn parse_alternates_and_preprocess() {
        let toml = r#"
name = "x"
kind = "roman"
preprocess = "itrans"

[groups]
vowels = ["a", "A"]

[alternates]
A = ["aa"]
"#;
        let (scheme, alts) = parse_scheme_toml(toml).unwrap().into_scheme().unwrap();
        assert_eq!(scheme.preprocess(), Preprocess::Itrans);
        assert_eq!(alts["A"], vec!["aa".to_string()]);
    }

    #[test]
    fn error_empty_name() {
        let toml = "name = \" \"\nkind = \"brahmic\"\n[groups]\n";
        assert!(matches!(
            parse_scheme_toml(toml).unwrap_err(),
            SchemeConfigError::EmptyName
        ));
    }

    #[test]
    fn error_roman_without_vowels() {
        let toml = "name = \"r\"\nkind = \"roman\"\n[groups]\nconsonants = [\"k\"]\n";
        assert!(matches!(
            parse_scheme_toml(toml).unwrap_err(),
            SchemeConfigError::MissingVowels(_)
        ));
    }

    #[test]
    fn error_empty_group() {
        let toml = "name = \"b\"\nkind = \"brahmic\"\n[groups]\nvowels = []\n";
        let err = parse_scheme_toml(toml).unwrap_err();
        assert!(matches!(err, SchemeConfigError::EmptyGroup { group: "vowels", .. }));
    }

    #[test]
    fn error_unknown_group() {
        let toml = "name = \"b\"\nkind = \"brahmic\"\n[groups]\nvowls = [\"a\"]\n";
        assert!(matches!(
            parse_scheme_toml(toml).unwrap_err(),
            SchemeConfigError::Parse(_)
        ));
    }

    #[test]
    fn error_unknown_kind() {
        let toml = "name = \"b\"\nkind = \"cyrillic\"\n[groups]\n";
        assert!(matches!(
            parse_scheme_toml(toml).unwrap_err(),
            SchemeConfigError::Parse(_)
        ));
    }

    #[test]
    fn error_unknown_preprocess() {
        let toml = "name = \"b\"\nkind = \"brahmic\"\npreprocess = \"hk\"\n[groups]\n";
        assert!(matches!(
            parse_scheme_toml(toml).unwrap_err(),
            SchemeConfigError::UnknownPreprocess(_)
        ));
    }

    #[test]
    fn error_empty_alternate() {
        let toml = "name = \"r\"\nkind = \"roman\"\n[groups]\nvowels = [\"a\"]\n[alternates]\na = [\"\"]\n";
        assert!(matches!(
            parse_scheme_toml(toml).unwrap_err(),
            SchemeConfigError::EmptyAlternate { .. }
        ));
    }

    #[test]
    fn error_invalid_toml() {
        assert!(matches!(
            parse_scheme_toml("not valid toml {{{").unwrap_err(),
            SchemeConfigError::Parse(_)
        ));
    }

    #[test]
    fn export_reparses_to_same_scheme() {
        let toml = r#"
name = "x"
kind = "roman"
preprocess = "itrans"

[groups]
vowels = ["a", "A"]
consonants = ["k", "~N"]

[alternates]
"~N" = ["N^"]
"#;
        let (scheme, alts) = parse_scheme_toml(toml).unwrap().into_scheme().unwrap();
        let exported = SchemeConfig::from_scheme(&scheme, alts.clone()).to_toml().unwrap();
        let (again, alts_again) = parse_scheme_toml(&exported).unwrap().into_scheme().unwrap();
        assert_eq!(again, scheme);
        assert_eq!(alts_again, alts);
    }
}
