use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", translit_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        translit_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: options.skip_sgml={}, options.syncope={}, chart.source={}",
        s.options.skip_sgml, s.options.syncope, s.chart.source
    );
}

/// Install a settings file as the process-wide settings. Must run before the
/// first conversion.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        translit_core::settings::init_custom(content),
        "Error in {file}: {}"
    );
}
