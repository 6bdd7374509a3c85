//! Data model for extracted documentation comments.

use std::fmt;

/// A single source line, carriage returns already removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the source file
    pub number: usize,
    pub text: &'a str,
}

/// Lines of one top-level `--[==[ ... ]==]` region, opening line removed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommentBlock<'a> {
    pub lines: Vec<Line<'a>>,
}

/// Tag identifier found after `@` on a segment's first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// @name
    Name,
    /// @sig
    Sig,
    /// @desc
    Desc,
    /// @example
    Example,
    /// Any other `@identifier`
    Other(String),
}

impl Tag {
    pub fn from_ident(ident: &str) -> Self {
        match ident {
            "name" => Tag::Name,
            "sig" => Tag::Sig,
            "desc" => Tag::Desc,
            "example" => Tag::Example,
            other => Tag::Other(other.to_string()),
        }
    }
}

/// A run of lines starting at one tag marker.
#[derive(Debug, PartialEq, Eq)]
pub struct TaggedSegment<'a> {
    /// `None` when the first line carries no extractable identifier
    pub tag: Option<Tag>,
    pub lines: Vec<Line<'a>>,
}

impl TaggedSegment<'_> {
    /// Line number of the segment's first line.
    pub fn start(&self) -> usize {
        self.lines.first().map_or(0, |l| l.number)
    }
}

/// Recoverable problem found while rendering. Never aborts generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    UnknownTag { tag: String, line: usize },
    MissingTag { line: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownTag { tag, line } => {
                write!(f, "line {}: unknown type comment @{}", line, tag)
            }
            Diagnostic::MissingTag { line } => {
                write!(f, "line {}: segment has no tag identifier", line)
            }
        }
    }
}
