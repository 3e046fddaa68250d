//! Case-insensitive literal matching and highlight segmentation.
//!
//! Search terms come straight from the search box, so they are always
//! scanned as plain character sequences. Characters such as `(`, `.` or `*`
//! only ever match themselves.

use std::ops::Range;

/// A run of text that is either part of a match or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// Lowercased text plus, for every byte of it, the original char it came
/// from.
///
/// Lowercasing the whole string (rather than char by char) applies
/// context-dependent folds such as a word-final `Σ` becoming `ς`.
struct Folded {
    lower: String,
    origin: Vec<Range<usize>>,
}

impl Folded {
    fn new(text: &str) -> Self {
        let mut origin = Vec::with_capacity(text.len());
        for (start, c) in text.char_indices() {
            let folded_len: usize = c.to_lowercase().map(char::len_utf8).sum();
            let span = start..start + c.len_utf8();
            origin.extend(std::iter::repeat(span).take(folded_len));
        }

        let mut lower = text.to_lowercase();
        if lower.len() != origin.len() {
            lower = text.chars().flat_map(char::to_lowercase).collect();
        }
        Self { lower, origin }
    }

    /// Original byte range of the first occurrence of `needle` (already
    /// lowercased) starting at or after original byte offset `from`.
    ///
    /// A match covering part of a char's folded form covers the whole char.
    fn find(&self, needle: &str, from: usize) -> Option<Range<usize>> {
        if needle.is_empty() {
            return None;
        }
        let begin = self.origin.partition_point(|span| span.start < from);
        let offset = self.lower.get(begin..)?.find(needle)?;

        let first = begin + offset;
        let last = first + needle.len() - 1;
        Some(self.origin[first].start..self.origin[last].end)
    }
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack`, starting the scan at byte offset `from`.
///
/// `from` must lie on a char boundary. An empty needle never matches.
pub fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<Range<usize>> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    Folded::new(haystack).find(&needle.to_lowercase(), from)
}

/// Whether `haystack` contains `needle`, ignoring case. Empty needles match.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Split `text` into plain and highlighted segments for `term`.
///
/// Matches are found left to right without overlap. Adjacent matches stay
/// separate segments. Concatenating the segment texts gives back `text`
/// unchanged.
pub fn highlight(text: &str, term: &str) -> Vec<Segment> {
    if term.is_empty() {
        return vec![Segment::plain(text)];
    }

    let folded = Folded::new(text);
    let needle = term.to_lowercase();
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(range) = folded.find(&needle, cursor) {
        if range.start > cursor {
            segments.push(Segment::plain(&text[cursor..range.start]));
        }
        segments.push(Segment::highlighted(&text[range.clone()]));
        cursor = range.end;
    }

    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    segments
}
