/// Scheme files compiled into the crate, registered by `SchemeRegistry::builtin()`.
pub static BUILTIN_SCHEMES: &[(&str, &str)] = &[
    ("devanagari", include_str!("data/devanagari.toml")),
    ("devanagari_uc", include_str!("data/devanagari_uc.toml")),
    ("tamil", include_str!("data/tamil.toml")),
    ("iast", include_str!("data/iast.toml")),
    ("itrans", include_str!("data/itrans.toml")),
    ("itrans_dravidian", include_str!("data/itrans_dravidian.toml")),
];
