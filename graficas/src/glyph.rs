use std::sync::atomic::{AtomicU32, Ordering};

/// U+2212 MINUS SIGN, the usual replacement for the ASCII hyphen.
pub const UNICODE_MINUS: char = '\u{2212}';

const HYPHEN: char = '-';

/// Translates between the minus glyph shown to the user and the ASCII
/// hyphen the grammar understands.
///
/// Both directions replace one character with another, so character offsets
/// in the translated text line up with the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Normalizer {
    display: char,
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::ascii()
    }
}

impl Normalizer {
    /// Display and canonical text are the same.
    pub fn ascii() -> Self {
        Normalizer{display: HYPHEN}
    }

    /// Use `display` as the minus glyph. ASCII glyphs other than the hyphen
    /// would clash with the grammar and fall back to the hyphen.
    pub fn new(display: char) -> Self {
        if display.is_ascii() {
            Normalizer::ascii()
        } else {
            Normalizer{display}
        }
    }

    /// Pick the first candidate the current font can render.
    pub fn choose<F>(candidates: &[char], can_render: F) -> Self
    where F: Fn(char) -> bool {
        candidates.iter()
            .copied()
            .find(|&c| !c.is_ascii() && can_render(c))
            .map(Normalizer::new)
            .unwrap_or_else(Normalizer::ascii)
    }

    pub fn display_minus(&self) -> char {
        self.display
    }

    pub fn to_canonical(&self, s: &str) -> String {
        if self.display == HYPHEN {
            return s.to_string();
        }
        s.replace(self.display, "-")
    }

    pub fn to_display(&self, s: &str) -> String {
        if self.display == HYPHEN {
            return s.to_string();
        }
        s.chars().map(|c| if c == HYPHEN { self.display } else { c }).collect()
    }

    pub fn to_canonical_opt(&self, s: Option<&str>) -> Option<String> {
        s.map(|s| self.to_canonical(s))
    }

    pub fn to_display_opt(&self, s: Option<&str>) -> Option<String> {
        s.map(|s| self.to_display(s))
    }
}

/// Process-wide minus glyph choice that can be swapped while other threads
/// are translating. The whole `Normalizer` is replaced at once.
#[derive(Debug)]
pub struct GlyphSetting(AtomicU32);

impl GlyphSetting {
    pub fn new(normalizer: Normalizer) -> Self {
        GlyphSetting(AtomicU32::new(normalizer.display as u32))
    }

    pub fn load(&self) -> Normalizer {
        let display = char::from_u32(self.0.load(Ordering::Acquire)).unwrap_or(HYPHEN);
        Normalizer::new(display)
    }

    pub fn store(&self, normalizer: Normalizer) {
        log::debug!("display minus is now {:?}", normalizer.display);
        self.0.store(normalizer.display as u32, Ordering::Release);
    }
}

impl Default for GlyphSetting {
    fn default() -> Self {
        GlyphSetting::new(Normalizer::ascii())
    }
}
