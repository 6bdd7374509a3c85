//! Block extractor — depth-counting scanner over `--[==[` / `]==]` lines.
//!
//! Delimiters are matched by line prefix only. Nested openers inside a block
//! raise the depth and stay part of the block's content.

use crate::model::{CommentBlock, Line};

pub const OPEN_DELIMITER: &str = "--[==[";
pub const CLOSE_DELIMITER: &str = "]==]";

/// Collect every balanced top-level comment block.
///
/// A block that is never closed is dropped. A closer at depth 0 still
/// decrements, so blocks after a stray `]==]` are lost too.
pub fn extract<'a>(lines: &[Line<'a>]) -> Vec<CommentBlock<'a>> {
    let mut blocks = Vec::new();
    let mut buffer: Vec<Line<'a>> = Vec::new();
    let mut depth: isize = 0;

    for line in lines {
        if line.text.starts_with(OPEN_DELIMITER) {
            depth += 1;
        } else if line.text.starts_with(CLOSE_DELIMITER) {
            depth -= 1;
            if depth == 0 {
                blocks.push(finish(&mut buffer));
            }
        }

        if depth > 0 {
            buffer.push(*line);
        }
    }

    blocks
}

/// Take the buffer as a block, minus its opening delimiter line.
fn finish<'a>(buffer: &mut Vec<Line<'a>>) -> CommentBlock<'a> {
    let mut lines = std::mem::take(buffer);
    if !lines.is_empty() {
        lines.remove(0);
    }
    CommentBlock { lines }
}
