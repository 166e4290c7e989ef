/// Splits text into logical character cells ("slots") for scripts where a
/// rendered character can span several codepoints.
///
/// In Thai a tone mark or an above/below vowel stacks on the preceding
/// consonant, so the word กระทบ fills five grid cells while น้ำตาล (six
/// codepoints) fills five as well. The game counts slots, never codepoints.
pub trait Segmenter {
    /// Whether `c` is a combining mark that joins the preceding base
    /// character instead of opening a new slot.
    fn is_zero_width(&self, c: char) -> bool;

    /// Split `text` into slots. A zero-width mark is appended to the
    /// previous slot; a mark with no preceding base opens its own slot.
    fn segment(&self, text: &str) -> Vec<String> {
        let mut slots: Vec<String> = Vec::new();
        for c in text.chars() {
            match slots.last_mut() {
                Some(last) if self.is_zero_width(c) => last.push(c),
                _ => slots.push(c.to_string()),
            }
        }
        slots
    }

    /// Number of slots `text` occupies.
    fn slot_count(&self, text: &str) -> usize {
        self.segment(text).len()
    }
}

/// Slot rules for Thai script.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThaiSegmenter;

impl Segmenter for ThaiSegmenter {
    fn is_zero_width(&self, c: char) -> bool {
        // Mai han-akat, the above/below vowels plus phinthu, and the
        // tone marks through yamakkan. Sara am (U+0E33) and the leading
        // vowels are spacing characters and keep their own slot.
        matches!(c, '\u{0E31}' | '\u{0E34}'..='\u{0E3A}' | '\u{0E47}'..='\u{0E4E}')
    }
}
