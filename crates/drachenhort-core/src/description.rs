//! Line splitting for card descriptions.
//!
//! Descriptions in the card file mark line breaks with the literal
//! two-character sequence backslash + `n`, not with real newlines.

use crate::highlight::{highlight, Segment};

/// Literal line separator used in card descriptions.
pub const LINE_SEPARATOR: &str = "\\n";

/// One rendered line of a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionLine {
    pub segments: Vec<Segment>,
    /// Whether a line break follows this line (false only for the last)
    pub line_break: bool,
}

impl DescriptionLine {
    /// The line text without highlight information.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Split `text` into lines, highlighting `term` within each line if given.
pub fn render_description(text: &str, term: Option<&str>) -> Vec<DescriptionLine> {
    let lines: Vec<&str> = text.split(LINE_SEPARATOR).collect();
    let last = lines.len().saturating_sub(1);

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| DescriptionLine {
            segments: match term {
                Some(term) => highlight(line, term),
                None => vec![Segment::plain(line)],
            },
            line_break: index < last,
        })
        .collect()
}
