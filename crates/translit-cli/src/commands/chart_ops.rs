use std::process;

use translit_core::{render_chart, render_default_chart, CharChart, Transliterator};
use unicode_width::UnicodeWidthStr;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn chart_cmd(engine: &Transliterator, from: Option<&str>, to: Option<&str>, json: bool) {
    let chart = match from {
        Some(from) => render_chart(engine.registry(), from, to),
        None => render_default_chart(engine.registry(), to),
    };
    let chart = die!(chart, "Error: {}");

    if json {
        println!("{}", die!(serde_json::to_string_pretty(&chart), "Error: {}"));
    } else {
        print!("{}", format_chart(&chart));
    }
}

/// Render a chart as columns aligned by display width.
pub fn format_chart(chart: &CharChart) -> String {
    let rows = match chart {
        CharChart::Placeholder { text } => return format!("{text}\n"),
        CharChart::Table { rows, .. } => rows,
    };

    let label_width = rows.iter().map(|r| r.label.width()).max().unwrap_or(0);
    let columns = rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
    let col_widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|r| r.cells.get(i))
                .map(|c| c.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let mut line = pad(&row.label, label_width);
        for (cell, &width) in row.cells.iter().zip(&col_widths) {
            line.push_str("  ");
            line.push_str(&pad(cell, width));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    format!("{s}{}", " ".repeat(width.saturating_sub(s.width())))
}
