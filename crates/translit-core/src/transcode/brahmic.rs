use tracing::{debug, debug_span};

use super::INHERENT_VOWEL;
use crate::mapping::Mapping;

const HASH: char = '#';

#[derive(Default)]
struct BrahmicState {
    /// Last output was a roman consonant that still owes its inherent vowel.
    had_roman_consonant: bool,
    /// A single `#` seen, waiting to see whether a second one follows.
    dangling_hash: bool,
    /// Inside a `##...##` region.
    skipping: bool,
}

impl BrahmicState {
    fn flush_vowel(&mut self, out: &mut String) {
        if self.had_roman_consonant {
            out.push_str(INHERENT_VOWEL);
            self.had_roman_consonant = false;
        }
    }

    fn flush_hash(&mut self, out: &mut String) {
        if self.dangling_hash {
            out.push(HASH);
            self.dangling_hash = false;
        }
    }
}

/// Transcode text whose source scheme is Brahmic, one char at a time.
///
/// For roman targets each consonant's inherent vowel is written out as "a"
/// unless a dependent mark or virama follows it.
pub fn transcode_brahmic(text: &str, map: &Mapping) -> String {
    let _span = debug_span!("transcode_brahmic", bytes = text.len()).entered();

    let mut out = String::with_capacity(text.len());
    let mut state = BrahmicState::default();
    let mut buf = [0u8; 4];

    for ch in text.chars() {
        if ch == HASH {
            if state.dangling_hash {
                state.skipping = !state.skipping;
                state.dangling_hash = false;
            } else {
                state.dangling_hash = true;
            }
            state.flush_vowel(&mut out);
            continue;
        }
        state.flush_hash(&mut out);
        if state.skipping {
            out.push(ch);
            continue;
        }

        let token: &str = ch.encode_utf8(&mut buf);
        if let Some(mark) = map.mark(token) {
            out.push_str(mark);
            state.had_roman_consonant = false;
            continue;
        }
        state.flush_vowel(&mut out);
        match map.letter(token).filter(|l| !l.is_empty()) {
            Some(letter) => {
                out.push_str(letter);
                state.had_roman_consonant = map.to_roman && map.is_consonant(token);
            }
            None => out.push(ch),
        }
    }
    state.flush_hash(&mut out);
    state.flush_vowel(&mut out);

    debug!(out_bytes = out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::SchemeRegistry;

    fn run(from: &str, to: &str, text: &str) -> String {
        let map = Mapping::build(&SchemeRegistry::builtin(), from, to).unwrap();
        transcode_brahmic(text, &map)
    }

    #[test]
    fn inherent_vowels_are_written_out() {
        assert_eq!(run("devanagari", "itrans", "नमस्ते"), "namaste");
        assert_eq!(run("devanagari", "itrans", "राम"), "rAma");
        assert_eq!(run("devanagari", "iast", "शिव"), "śiva");
    }

    #[test]
    fn virama_suppresses_inherent_vowel() {
        assert_eq!(run("devanagari", "itrans", "क्"), "k");
        assert_eq!(run("devanagari", "iast", "कृष्ण"), "kṛṣṇa");
    }

    #[test]
    fn independent_vowels_and_symbols() {
        assert_eq!(run("devanagari", "itrans", "अ"), "a");
        assert_eq!(run("devanagari", "iast", "ॐ"), "oṃ");
        assert_eq!(run("devanagari", "itrans", "१२"), "12");
    }

    #[test]
    fn unmapped_chars_pass_through() {
        assert_eq!(run("devanagari", "itrans", "राम!"), "rAma!");
        assert_eq!(run("devanagari", "itrans", "राम सीता"), "rAma sItA");
        // IAST has no short e, the empty placeholder is not a mapping
        assert_eq!(run("devanagari", "iast", "ऎ"), "ऎ");
    }

    #[test]
    fn unmapped_vowel_sign_is_kept() {
        // short e after a consonant: the inherent vowel is flushed, the sign stays
        assert_eq!(run("devanagari", "itrans", "कॆ"), "kaॆ");
        assert_eq!(run("devanagari", "itrans", "के"), "ke");
    }

    #[test]
    fn brahmic_to_brahmic() {
        assert_eq!(run("devanagari", "tamil", "नमस्ते"), "நமஸ்தே");
        // Tamil has no vocalic R
        assert_eq!(run("devanagari", "tamil", "ऋ"), "ऋ");
    }

    #[test]
    fn tamil_to_roman() {
        assert_eq!(run("tamil", "itrans", "அம்மா"), "ammA");
    }

    #[test]
    fn hash_pair_toggles_verbatim_region() {
        assert_eq!(run("devanagari", "itrans", "##राम##"), "राम");
        assert_eq!(run("devanagari", "itrans", "क##ख##ग"), "kaखga");
    }

    #[test]
    fn lone_hash_is_kept() {
        assert_eq!(run("devanagari", "itrans", "क#ख"), "ka#kha");
        assert_eq!(run("devanagari", "itrans", "क#"), "ka#");
    }

    #[test]
    fn lone_hash_before_vowel_sign() {
        // the `#` closes the consonant, so the sign that follows is read on its own
        assert_eq!(run("devanagari", "itrans", "क#ि"), "ka#i");
        assert_eq!(run("devanagari", "itrans", "क#्"), "ka#");
    }

    #[test]
    fn empty_input() {
        assert_eq!(run("devanagari", "itrans", ""), "");
    }
}
