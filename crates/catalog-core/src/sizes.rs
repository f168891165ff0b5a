//! Size-label parsing.
//!
//! Product cards carry sizes as free text inside their info block, e.g.
//! `Talle: L - XL` or `Talle: M L XL`. This module finds that line,
//! extracts the text after the label, and turns it into ordered tokens.
//!
//! Built on `winnow` 0.7, like the rest of the text handling in the crate.

use smallvec::SmallVec;
use winnow::combinator::separated;
use winnow::prelude::*;
use winnow::token::{one_of, take_till, take_while};

/// Ordered size tokens for one product. Most products list four or fewer.
pub type SizeList = SmallVec<[String; 4]>;

/// Label that introduces the size line in a card's info block.
pub const DEFAULT_SIZE_LABEL: &str = "Talle:";

/// Hyphen, en dash and em dash all separate sizes.
const DASHES: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// Parse a free-text size label into ordered tokens. Never fails.
///
/// Dash-separated input (`"L - XL"`, `"L-XL-XXL"`, mixed dash variants) splits
/// on the dashes. When no dash splits the text, whitespace is the separator
/// instead (`"M L XL"`). Pieces that are empty after trimming are dropped.
#[must_use]
pub fn parse_sizes(text: &str) -> SizeList {
    let text = trim_text(text);
    if text.is_empty() {
        return SizeList::new();
    }

    let mut rest = text;
    let pieces: SizeList = dash_pieces(&mut rest)
        .unwrap_or_default()
        .into_iter()
        .map(trim_text)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();

    if pieces.len() == 1 {
        return pieces[0]
            .split(is_blank)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect();
    }
    pieces
}

/// Same as [`parse_sizes`] for text that may be absent.
#[must_use]
pub fn parse_optional_sizes(text: Option<&str>) -> SizeList {
    text.map(parse_sizes).unwrap_or_default()
}

/// Pick the first paragraph that mentions the size label.
///
/// The match is case-sensitive: a paragraph reading `talle: M` is not a size
/// line, even though [`extract_size_label`] would accept it.
pub fn find_size_line<'a, I>(paragraphs: I, label: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    paragraphs.into_iter().find(|p| p.contains(label))
}

/// Extract the text following the size label on its line, trimmed.
///
/// The label is matched case-insensitively and may be followed by any
/// whitespace, line breaks included. Returns `None` when no occurrence of the
/// label is followed by at least one character on a line.
#[must_use]
pub fn extract_size_label<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    if label.is_empty() {
        return None;
    }
    let mut search = text;
    while let Some(start) = find_caseless(search, label) {
        let mut rest = &search[start + label.len()..];
        if let Ok(value) = label_value(&mut rest) {
            return Some(trim_text(value));
        }
        let skip = search[start..].chars().next().map_or(1, char::len_utf8);
        search = &search[start + skip..];
    }
    None
}

/// Find the size line among `paragraphs` and parse it. Absent line, absent
/// label match, and unparseable text all produce an empty list.
#[must_use]
pub fn sizes_from_paragraphs<'a, I>(paragraphs: I, label: &str) -> SizeList
where
    I: IntoIterator<Item = &'a str>,
{
    find_size_line(paragraphs, label)
        .and_then(|line| extract_size_label(line, label))
        .map(parse_sizes)
        .unwrap_or_default()
}

// ─── Low-level parsers ──────────────────────────────────────────────────

fn dash_pieces<'a>(input: &mut &'a str) -> ModalResult<Vec<&'a str>> {
    separated(0.., take_till(0.., DASHES), one_of(DASHES)).parse_next(input)
}

fn label_value<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    let gap = take_while(0.., is_blank).parse_next(input)?;
    match take_till(1.., is_line_break).parse_next(input) {
        Ok(value) => Ok(value),
        // Inline blanks before the line break still count as a (blank) value.
        Err(e) => {
            if gap.chars().any(|c| !is_line_break(c)) {
                Ok("")
            } else {
                Err(e)
            }
        }
    }
}

/// Unicode whitespace plus U+FEFF (byte-order mark).
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trim blanks (see [`is_blank`]) from both ends.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(is_blank)
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn find_caseless(haystack: &str, needle: &str) -> Option<usize> {
    haystack.char_indices().map(|(i, _)| i).find(|&i| {
        haystack
            .get(i..i + needle.len())
            .is_some_and(|s| s.eq_ignore_ascii_case(needle))
    })
}
