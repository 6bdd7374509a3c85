//! Per-tag Markdown rendering.

use crate::model::{Diagnostic, Line, Tag, TaggedSegment};
use regex::Regex;
use std::sync::LazyLock;

static RE_NAME_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*@name\s*").unwrap());

static RE_SIG_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*@sig\s*").unwrap());

// One indentation level: exactly two whitespace characters
static RE_EXAMPLE_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{2}").unwrap());

/// Render one segment, or explain why it has no fragment.
pub fn render_segment(segment: &TaggedSegment<'_>, lang: &str) -> Result<String, Diagnostic> {
    let lines = &segment.lines;
    match &segment.tag {
        Some(Tag::Name) => Ok(render_name(lines)),
        Some(Tag::Sig) => Ok(render_sig(lines)),
        Some(Tag::Desc) => Ok(render_desc(lines)),
        Some(Tag::Example) => Ok(render_example(lines, lang)),
        Some(Tag::Other(tag)) => Err(Diagnostic::UnknownTag {
            tag: tag.clone(),
            line: segment.start(),
        }),
        None => Err(Diagnostic::MissingTag {
            line: segment.start(),
        }),
    }
}

/// `@name foo` → `## foo`
fn render_name(lines: &[Line<'_>]) -> String {
    format!("## {}", strip_marker(&RE_NAME_MARKER, lines))
}

/// `@sig foo(x)` → `###### *foo(x)*`
fn render_sig(lines: &[Line<'_>]) -> String {
    format!("###### *{}*", strip_marker(&RE_SIG_MARKER, lines))
}

/// Body lines with leading whitespace removed, joined by spaces.
/// Blank lines become `\n` so paragraph breaks survive.
fn render_desc(lines: &[Line<'_>]) -> String {
    body(lines)
        .map(|l| {
            let text = l.text.trim_start();
            if text.is_empty() {
                "\n"
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Body lines de-indented by one level inside a fenced code block.
fn render_example(lines: &[Line<'_>], lang: &str) -> String {
    let code = body(lines)
        .map(|l| RE_EXAMPLE_INDENT.replace(l.text, ""))
        .collect::<Vec<_>>()
        .join("\n");
    format!("```{}\n{}\n```", lang, code)
}

fn strip_marker(re: &Regex, lines: &[Line<'_>]) -> String {
    lines
        .first()
        .map(|l| re.replace_all(l.text, "").trim().to_string())
        .unwrap_or_default()
}

/// Every line after the tag line.
fn body<'s, 'a>(lines: &'s [Line<'a>]) -> impl Iterator<Item = &'s Line<'a>> {
    lines.iter().skip(1)
}
