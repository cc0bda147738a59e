use clap::{Parser, Subcommand};

use translit_cli::commands::{chart_ops, config_ops, convert_ops, scheme_ops};
use translit_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "translit", about = "Transliterate between Indic scripts and romanizations")]
struct Cli {
    /// Extra scheme TOML file to register (repeatable)
    #[arg(long = "scheme-file", global = true)]
    scheme_files: Vec<String>,
    /// Settings TOML used instead of the embedded defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text (reads stdin line by line when no text is given)
    Convert {
        /// Text to convert; multiple arguments are joined with spaces
        text: Vec<String>,
        /// Source scheme
        #[arg(long, default_value = "itrans")]
        from: String,
        /// Target scheme
        #[arg(long, default_value = "devanagari")]
        to: String,
        /// Leave `<...>` tags in roman input untouched
        #[arg(long)]
        skip_sgml: bool,
        /// Drop the virama on a trailing consonant
        #[arg(long)]
        syncope: bool,
    },
    /// Show a target scheme's vowels and consonants next to a source scheme's
    Chart {
        /// Target scheme (omit for the placeholder text)
        scheme: Option<String>,
        /// Source scheme (default from settings)
        #[arg(long)]
        from: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List registered schemes
    Schemes,
    /// Print a registered scheme as a TOML scheme file
    SchemeExport {
        /// Scheme name
        name: String,
    },
    /// Validate a scheme TOML file
    SchemeValidate {
        /// Scheme TOML file
        file: String,
    },
    /// Print the embedded default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Some(file) = &cli.settings {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Convert {
            text,
            from,
            to,
            skip_sgml,
            syncope,
        } => {
            let mut engine = scheme_ops::load_engine(&cli.scheme_files);
            let overrides = convert_ops::overrides_from_flags(skip_sgml, syncope);
            convert_ops::convert_cmd(&mut engine, &text, &from, &to, &overrides);
        }
        Command::Chart { scheme, from, json } => {
            let engine = scheme_ops::load_engine(&cli.scheme_files);
            chart_ops::chart_cmd(&engine, from.as_deref(), scheme.as_deref(), json);
        }
        Command::Schemes => {
            let engine = scheme_ops::load_engine(&cli.scheme_files);
            scheme_ops::schemes_list(&engine);
        }
        Command::SchemeExport { name } => {
            let engine = scheme_ops::load_engine(&cli.scheme_files);
            scheme_ops::scheme_export(&engine, &name);
        }
        Command::SchemeValidate { file } => scheme_ops::scheme_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
