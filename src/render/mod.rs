//! Renderer module — turns source text into the final Markdown document.

pub mod markdown;

use crate::model::{CommentBlock, Diagnostic};
use crate::parser;

/// Separator placed between rendered blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Separator placed between fragments of one block.
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Fence language used when none is configured.
pub const DEFAULT_LANG: &str = "lua";

/// Rendering configuration for [`generate`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Code fence language for `@example` blocks
    pub lang: String,
    /// Text placed before the first block, already substituted
    pub preamble: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            preamble: String::new(),
        }
    }
}

/// Result of one generation pass.
#[derive(Debug, Default)]
pub struct Generated {
    pub markdown: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the whole pipeline over `input`. Performs no I/O.
pub fn generate(input: &str, options: &Options) -> Generated {
    let text = parser::normalize(input);
    let lines = parser::lines(&text);
    let blocks = parser::block::extract(&lines);

    let mut diagnostics = Vec::new();
    let rendered: Vec<String> = blocks
        .iter()
        .map(|block| render_block(block, &options.lang, &mut diagnostics))
        .collect();

    Generated {
        markdown: assemble(&options.preamble, &rendered),
        diagnostics,
    }
}

/// Render all fragments of a block, collecting diagnostics for dropped segments.
fn render_block(block: &CommentBlock<'_>, lang: &str, diagnostics: &mut Vec<Diagnostic>) -> String {
    let mut fragments = Vec::new();
    for segment in parser::segment::split(block) {
        match markdown::render_segment(&segment, lang) {
            Ok(fragment) => fragments.push(fragment),
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
    }
    fragments.join(FRAGMENT_SEPARATOR)
}

/// Preamble followed by the blocks, separated by horizontal rules.
pub fn assemble(preamble: &str, blocks: &[String]) -> String {
    let mut output = String::from(preamble);
    output.push_str(&blocks.join(BLOCK_SEPARATOR));
    output
}
