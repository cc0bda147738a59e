use tracing::{debug, debug_span};

use super::{INHERENT_VOWEL, TOGGLE_MARKER};
use crate::mapping::Mapping;
use crate::options::TranslitOptions;

/// Scanner state carried between tokens.
#[derive(Default)]
struct RomanState {
    /// The last emitted token was a consonant still waiting for its vowel.
    had_consonant: bool,
    /// Inside `<...>` with `skip_sgml` enabled.
    skipping_sgml: bool,
    /// Inside a `##...##` region.
    toggled: bool,
}

impl RomanState {
    fn suppressed(&self) -> bool {
        self.skipping_sgml || self.toggled
    }

    /// Close a dangling consonant before non-letter output.
    fn flush_consonant(&mut self, out: &mut String, map: &Mapping, options: &TranslitOptions) {
        if self.had_consonant {
            self.had_consonant = false;
            if !options.syncope {
                out.push_str(&map.virama);
            }
        }
    }
}

/// Transcode text whose source scheme is roman.
///
/// Greedy longest match over a lookahead window of `max_token_len` chars.
/// When the target is Brahmic, vowels after a consonant collapse into their
/// dependent marks, the inherent "a" disappears, and consonant clusters get
/// a virama between them.
pub fn transcode_roman(text: &str, map: &Mapping, options: &TranslitOptions) -> String {
    let _span = debug_span!("transcode_roman", bytes = text.len()).entered();

    // Byte offset of every char boundary, including the end of the text.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;
    let max_len = map.max_token_len.max(1);

    let mut out = String::with_capacity(text.len() * 3);
    let mut state = RomanState::default();
    let mut pos = 0;

    'scan: while pos < char_count {
        let window = max_len.min(char_count - pos);
        for len in (1..=window).rev() {
            let token = &text[bounds[pos]..bounds[pos + len]];

            if state.skipping_sgml {
                state.skipping_sgml = token != ">";
            } else if token == "<" {
                state.skipping_sgml = options.skip_sgml;
            } else if token == TOGGLE_MARKER {
                state.toggled = !state.toggled;
                pos += len;
                continue 'scan;
            }

            if state.suppressed() {
                continue;
            }
            if let Some(letter) = map.letter(token) {
                emit_letter(&mut out, &mut state, map, token, letter);
                pos += len;
                continue 'scan;
            }
        }

        // No token matched: pass one char through.
        state.flush_consonant(&mut out, map, options);
        out.push_str(&text[bounds[pos]..bounds[pos + 1]]);
        pos += 1;
    }
    state.flush_consonant(&mut out, map, options);

    debug!(out_bytes = out.len());
    out
}

fn emit_letter(out: &mut String, state: &mut RomanState, map: &Mapping, token: &str, letter: &str) {
    if map.to_roman {
        out.push_str(letter);
        return;
    }
    if state.had_consonant {
        match map.mark(token).filter(|m| !m.is_empty()) {
            Some(mark) => out.push_str(mark),
            None if token != INHERENT_VOWEL => {
                out.push_str(&map.virama);
                out.push_str(letter);
            }
            None => {}
        }
    } else {
        out.push_str(letter);
    }
    state.had_consonant = map.is_consonant(token);
}
