//! Scheme-driven transliteration between Brahmic scripts and romanizations.
//!
//! A [`SchemeRegistry`] holds positionally aligned character tables. For a
//! (from, to) pair the engine flattens them into a [`Mapping`], memoizes it in
//! a single-slot [`MappingCache`], and runs one of two transcoders depending
//! on whether the source scheme is roman or Brahmic.

pub mod cache;
pub mod chart;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod options;
pub mod preprocess;
pub mod scheme;
pub mod settings;
pub mod transcode;


pub use cache::{CacheKey, MappingCache};
pub use chart::{render_chart, render_default_chart, CharChart, ChartRow};
pub use engine::{global, transliterate, Transliterator};
pub use error::TranslitError;
pub use mapping::Mapping;
pub use options::{OptionOverrides, TranslitOptions};
pub use preprocess::Preprocess;
pub use scheme::{Group, Scheme, SchemeKind, SchemeRegistry};
