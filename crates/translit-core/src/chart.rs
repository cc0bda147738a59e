//! Reference chart pairing a target scheme's letters with a source scheme's.

use serde::Serialize;

use crate::error::TranslitError;
use crate::scheme::{Group, Scheme, SchemeRegistry};
use crate::settings::settings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRow {
    pub label: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CharChart {
    /// Rows: target vowels, source vowels, target consonants, source consonants.
    Table {
        from: String,
        to: String,
        rows: Vec<ChartRow>,
    },
    /// No target selected.
    Placeholder { text: String },
}

impl CharChart {
    pub fn rows(&self) -> &[ChartRow] {
        match self {
            CharChart::Table { rows, .. } => rows,
            CharChart::Placeholder { .. } => &[],
        }
    }
}

/// Chart `to` against `from`. `None` yields the configured placeholder.
pub fn render_chart(
    registry: &SchemeRegistry,
    from: &str,
    to: Option<&str>,
) -> Result<CharChart, TranslitError> {
    let Some(to) = to else {
        return Ok(CharChart::Placeholder {
            text: settings().chart.placeholder.clone(),
        });
    };
    let source = registry.get(from)?;
    let target = registry.get(to)?;

    let row = |scheme: &Scheme, group: Group| ChartRow {
        label: format!("{} {}", scheme.name(), group.as_str()),
        cells: scheme.group(group).map(<[String]>::to_vec).unwrap_or_default(),
    };
    Ok(CharChart::Table {
        from: from.to_string(),
        to: to.to_string(),
        rows: vec![
            row(target, Group::Vowels),
            row(source, Group::Vowels),
            row(target, Group::Consonants),
            row(source, Group::Consonants),
        ],
    })
}

/// Chart against the source scheme named in settings.
pub fn render_default_chart(
    registry: &SchemeRegistry,
    to: Option<&str>,
) -> Result<CharChart, TranslitError> {
    render_chart(registry, &settings().chart.source, to)
}
