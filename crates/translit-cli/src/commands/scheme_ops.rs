use std::fs;
use std::process;

use tracing::debug;
use translit_core::scheme::parse_scheme_toml;
use translit_core::{Preprocess, Transliterator};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Engine over the built-in schemes plus every `--scheme-file`, in order.
pub fn load_engine(scheme_files: &[String]) -> Transliterator {
    let mut engine = Transliterator::builtin();
    for file in scheme_files {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        let name = die!(engine.register_toml(&content), "Error in {file}: {}");
        debug!(file = file.as_str(), name = name.as_str(), "registered scheme file");
    }
    engine
}

pub fn schemes_list(engine: &Transliterator) {
    let registry = engine.registry();
    let names = registry.names();
    let width = names.iter().map(|n| n.len()).max().unwrap_or(0);
    for name in names {
        let scheme = die!(registry.get(name), "Error: {}");
        let hook = match scheme.preprocess() {
            Preprocess::None => String::new(),
            p => format!("  (preprocess: {p})"),
        };
        println!("{name:<width$}  {}{hook}", scheme.kind().as_str());
    }
}

pub fn scheme_export(engine: &Transliterator, name: &str) {
    let config = die!(engine.registry().export(name), "Error: {}");
    print!("{}", die!(config.to_toml(), "Error: {}"));
}

pub fn scheme_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(parse_scheme_toml(&content), "Error: {}");
    let (scheme, alternates) = die!(config.into_scheme(), "Error: {}");
    let groups = scheme.groups().count();
    let tokens: usize = scheme.groups().map(|(_, tokens)| tokens.len()).sum();
    println!(
        "OK: {} ({}), {} groups, {} tokens, {} alternates",
        scheme.name(),
        scheme.kind().as_str(),
        groups,
        tokens,
        alternates.values().map(Vec::len).sum::<usize>()
    );
}
