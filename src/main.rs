//! luadoc — generate a Markdown reference from `--[==[ ... ]==]` doc comments.
//!
//! Two modes:
//!
//! - **file mode**: `luadoc lib.lua` writes `README.md` next to `lib.lua`
//! - **stdin mode**: `luadoc < lib.lua` writes the document to stdout

mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Preamble used when `--preamble` is not given.
const DEFAULT_PREAMBLE: &str = "# ${name}\n\n---\n\n";

/// Output file name used in file mode when `--output` is not given.
const DEFAULT_OUTPUT: &str = "README.md";

/// Module name used when there is no input file to derive one from.
const FALLBACK_NAME: &str = "API";

#[derive(Parser)]
#[command(
    name = "luadoc",
    about = "Generate Markdown documentation from --[==[ ]==] comment blocks"
)]
struct Cli {
    /// Source file. If omitted, reads from stdin and writes to stdout.
    file: Option<PathBuf>,

    /// Output file (default: README.md next to the source file)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// File whose content replaces the built-in preamble.
    /// Supports ${name} substitution.
    #[arg(short = 'p', long)]
    preamble: Option<PathBuf>,

    /// Value for ${name} in the preamble (default: source file stem)
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Code fence language for @example blocks
    #[arg(short = 'l', long, default_value = render::DEFAULT_LANG)]
    lang: String,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let input = match cli.file.as_deref() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };

    let name = module_name(cli.name.as_deref(), cli.file.as_deref());
    let options = render::Options {
        lang: cli.lang.clone(),
        preamble: resolve_preamble(cli.preamble.as_deref())?.replace("${name}", &name),
    };

    let generated = render::generate(&input, &options);
    for diagnostic in &generated.diagnostics {
        log::warn!("{}", diagnostic);
    }

    match output_path(&cli) {
        Some(out_path) => {
            fs::write(&out_path, &generated.markdown)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
            log::info!("Done! Wrote {}", out_path.display());
        }
        None => {
            io::stdout()
                .write_all(generated.markdown.as_bytes())
                .context("failed to write stdout")?;
        }
    }

    Ok(())
}

/// Info by default, `RUST_LOG` overrides, `--quiet` drops to errors.
fn init_logging(quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false);
    if !quiet {
        builder.parse_default_env();
    }
    builder.init();
}

/// Read the preamble template, or fall back to the built-in one.
fn resolve_preamble(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("failed to read preamble file: {}", p.display())),
        None => Ok(DEFAULT_PREAMBLE.to_string()),
    }
}

/// Where the document goes. `None` means stdout.
fn output_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(ref out) = cli.output {
        return Some(out.clone());
    }
    cli.file
        .as_deref()
        .map(|source| source.with_file_name(DEFAULT_OUTPUT))
}

/// "lib/utrix.lua" → "utrix"
fn module_name(explicit: Option<&str>, source: Option<&Path>) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }
    source
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}
