//! The two transcoding algorithms, selected by the source scheme's kind.
//!
//! Both read only from a prebuilt `Mapping` and pass unmapped input through
//! unchanged.

mod brahmic;
mod roman;

pub use brahmic::transcode_brahmic;
pub use roman::transcode_roman;

/// The inherent vowel of roman schemes.
pub(crate) const INHERENT_VOWEL: &str = "a";

/// Marker that toggles a verbatim region in roman input.
pub(crate) const TOGGLE_MARKER: &str = "##";
