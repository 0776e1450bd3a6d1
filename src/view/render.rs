//! Pure row rendering
//!
//! Turns a bookmark list plus a search query into row descriptions. Nothing
//! here touches storage or a terminal, so the matching and highlighting rules
//! can be tested on their own.

use std::ops::Range;

use crate::storage::Bookmark;

/// A run of text, either as-is or marked as a search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Highlight(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Highlight(text) => text,
        }
    }

    pub fn is_highlight(&self) -> bool {
        matches!(self, Segment::Highlight(_))
    }
}

/// Text split into plain and highlighted segments. Concatenating the
/// segments always gives back the original text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightedText {
    segments: Vec<Segment>,
}

impl HighlightedText {
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            segments: vec![Segment::Plain(text.to_string())],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_highlight(&self) -> bool {
        self.segments.iter().any(Segment::is_highlight)
    }

    /// The text without any markers.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// HTML with every hit wrapped in `<mark>`; all text is escaped.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => out.push_str(&escape_html(text)),
                Segment::Highlight(text) => {
                    out.push_str("<mark>");
                    out.push_str(&escape_html(text));
                    out.push_str("</mark>");
                }
            }
        }
        out
    }
}

/// What a row control does when activated. Indices are positions in the
/// full list, never display ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Visit(String),
    Edit(usize),
    Delete(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// 1-based position among the rows currently shown.
    pub rank: usize,
    /// Position in the full bookmark list.
    pub index: usize,
    pub name: HighlightedText,
    pub url: HighlightedText,
    /// Literal stored URL, used as the visit target.
    pub target_url: String,
}

impl RenderedRow {
    pub fn visit_action(&self) -> RowAction {
        RowAction::Visit(self.target_url.clone())
    }

    pub fn edit_action(&self) -> RowAction {
        RowAction::Edit(self.index)
    }

    pub fn delete_action(&self) -> RowAction {
        RowAction::Delete(self.index)
    }

    /// Table row markup for web surfaces. Controls carry the real index in
    /// `data-index` instead of inline handlers.
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                "<tr>",
                "<td>{rank}</td>",
                "<td>{name}</td>",
                "<td><a href=\"{href}\" target=\"_blank\" rel=\"noopener\">Visit</a></td>",
                "<td><button data-action=\"edit\" data-index=\"{index}\">Edit</button></td>",
                "<td><button data-action=\"delete\" data-index=\"{index}\">Delete</button></td>",
                "</tr>"
            ),
            rank = self.rank,
            name = self.name.to_markup(),
            href = escape_html(&self.target_url),
            index = self.index,
        )
    }
}

/// One char of the lower-cased text and the byte span of the original char
/// it came from. A char such as `İ` lowers to two chars sharing one span.
struct FoldedChar {
    ch: char,
    start: usize,
    end: usize,
}

fn fold(text: &str) -> Vec<FoldedChar> {
    let mut folded = Vec::with_capacity(text.len());
    for (start, c) in text.char_indices() {
        let end = start + c.len_utf8();
        folded.extend(c.to_lowercase().map(|ch| FoldedChar { ch, start, end }));
    }
    folded
}

/// Byte ranges of every case-insensitive occurrence of `query` in `text`,
/// scanning left to right without overlaps.
///
/// Both strings are lower-cased as a whole and hits are mapped back to the
/// original chars, so a hit inside a multi-char lowercase form covers the
/// whole original char.
pub fn find_matches(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let haystack = fold(text);
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        let hit = needle
            .iter()
            .zip(&haystack[i..])
            .all(|(&q, folded)| q == folded.ch);
        if !hit {
            i += 1;
            continue;
        }

        let start = haystack[i].start;
        let end = haystack[i + needle.len() - 1].end;
        ranges.push(start..end);
        // 跳过与本次命中共享原字符的剩余部分
        i += needle.len();
        while i < haystack.len() && haystack[i].start < end {
            i += 1;
        }
    }
    ranges
}

pub fn highlight(text: &str, query: &str) -> HighlightedText {
    let ranges = find_matches(text, query);
    if ranges.is_empty() {
        return HighlightedText::plain(text);
    }

    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            segments.push(Segment::Plain(text[cursor..range.start].to_string()));
        }
        segments.push(Segment::Highlight(text[range.clone()].to_string()));
        cursor = range.end;
    }
    if cursor < text.len() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }
    HighlightedText { segments }
}

/// An empty query matches everything.
pub fn matches_query(bookmark: &Bookmark, query: &str) -> bool {
    query.is_empty()
        || !find_matches(&bookmark.site_name, query).is_empty()
        || !find_matches(&bookmark.site_url, query).is_empty()
}

/// Rows for every bookmark matching `query` (trimmed), in list order.
pub fn render_rows(bookmarks: &[Bookmark], query: &str) -> Vec<RenderedRow> {
    let query = query.trim();
    bookmarks
        .iter()
        .enumerate()
        .filter(|(_, bookmark)| matches_query(bookmark, query))
        .enumerate()
        .map(|(position, (index, bookmark))| RenderedRow {
            rank: position + 1,
            index,
            name: highlight(&bookmark.site_name, query),
            url: highlight(&bookmark.site_url, query),
            target_url: bookmark.site_url.clone(),
        })
        .collect()
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
