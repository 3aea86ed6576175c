//! Maps a matched query back onto the original display string as
//! marked/unmarked segments.
//!
//! Both sides go through the same length-preserving fold, so a char offset in
//! the folded value is the same char offset in the original; only the byte
//! offsets need recomputing for slicing.

use super::query::normalize;

/// One piece of a display string, either inside or outside the match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            is_match: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            is_match: true,
        }
    }
}

/// Split `value` into segments around the first case/diacritic-insensitive
/// occurrence of `query`. Empty segments are omitted; concatenating the
/// segment texts always reproduces `value` exactly.
pub fn highlight(value: &str, query: &str) -> Vec<Segment> {
    let needle = normalize(query.trim());
    if value.is_empty() {
        return Vec::new();
    }
    if needle.is_empty() {
        return vec![Segment::plain(value)];
    }

    let folded = normalize(value);
    let Some(byte_start) = folded.find(&needle) else {
        return vec![Segment::plain(value)];
    };

    // Translate folded byte offsets to char offsets; the fold is 1:1 per
    // char, so these char offsets are valid in the original string too.
    let char_start = folded[..byte_start].chars().count();
    let char_len = needle.chars().count();

    let (orig_start, orig_end) = char_range_to_bytes(value, char_start, char_len);

    let mut segments = Vec::with_capacity(3);
    if orig_start > 0 {
        segments.push(Segment::plain(&value[..orig_start]));
    }
    segments.push(Segment::matched(&value[orig_start..orig_end]));
    if orig_end < value.len() {
        segments.push(Segment::plain(&value[orig_end..]));
    }
    segments
}

/// Byte range in `s` covering `len` chars starting at char index `start`.
fn char_range_to_bytes(s: &str, start: usize, len: usize) -> (usize, usize) {
    let mut begin = s.len();
    let mut end = s.len();
    for (count, (byte_idx, _)) in s.char_indices().enumerate() {
        if count == start {
            begin = byte_idx;
        }
        if count == start + len {
            end = byte_idx;
            break;
        }
    }
    if begin > end {
        end = s.len();
    }
    (begin, end)
}
