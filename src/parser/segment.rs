//! Tag splitter — cuts a comment block into `@tag` segments.

use crate::model::{CommentBlock, Line, Tag, TaggedSegment};
use regex::Regex;
use std::sync::LazyLock;

pub const TAG_MARKER: char = '@';

static RE_TAG_IDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}([A-Za-z0-9]+)", regex::escape(&TAG_MARKER.to_string()))).unwrap()
});

/// Split a block into segments.
///
/// The first line always opens a segment. After that, any line whose trimmed
/// form starts with `@` closes the current segment and opens a new one.
pub fn split<'a>(block: &CommentBlock<'a>) -> Vec<TaggedSegment<'a>> {
    let mut segments = Vec::new();
    let mut buffer: Vec<Line<'a>> = Vec::new();

    for line in &block.lines {
        if line.text.trim().starts_with(TAG_MARKER) && !buffer.is_empty() {
            segments.push(close(std::mem::take(&mut buffer)));
        }
        buffer.push(*line);
    }
    if !buffer.is_empty() {
        segments.push(close(buffer));
    }

    segments
}

fn close(lines: Vec<Line<'_>>) -> TaggedSegment<'_> {
    let tag = lines.first().and_then(|l| identify(l.text));
    TaggedSegment { tag, lines }
}

/// Find the first `@identifier` on a line.
pub fn identify(text: &str) -> Option<Tag> {
    RE_TAG_IDENT
        .captures(text)
        .map(|caps| Tag::from_ident(&caps[1]))
}
