use std::io::{self, BufRead, BufWriter, Write};
use std::process;

use translit_core::{OptionOverrides, Transliterator};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Convert `texts` joined by spaces, or each stdin line when `texts` is empty.
pub fn convert_cmd(
    engine: &mut Transliterator,
    texts: &[String],
    from: &str,
    to: &str,
    overrides: &OptionOverrides,
) {
    die!(engine.registry().get(from), "Error: {}");
    die!(engine.registry().get(to), "Error: {}");

    if !texts.is_empty() {
        let text = texts.join(" ");
        let out = die!(
            engine.transliterate_with(&text, from, to, overrides),
            "Error: {}"
        );
        println!("{out}");
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        let out = die!(
            engine.transliterate_with(&line, from, to, overrides),
            "Error: {}"
        );
        die!(writeln!(writer, "{out}"), "Error writing output: {}");
    }
    die!(writer.flush(), "Error writing output: {}");
}

/// Only flags given on the command line override the settings defaults.
pub fn overrides_from_flags(skip_sgml: bool, syncope: bool) -> OptionOverrides {
    let mut overrides = OptionOverrides::default();
    if skip_sgml {
        overrides = overrides.skip_sgml(true);
    }
    if syncope {
        overrides = overrides.syncope(true);
    }
    overrides
}
