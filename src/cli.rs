use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Indentation character for the rendered surface.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IndentChar {
    /// Indent with spaces (default)
    Space,
    /// Indent with tabulation characters
    Tab,
}

#[derive(Parser, Debug)]
#[command(name = "refgen")]
#[command(about = "Generate a declaration-only API surface from module symbol graphs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Symbol-graph files, or directories scanned for *.json graphs
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output path: an existing directory gets one <module>.cs file per
    /// module, any other path is written as a single file; defaults to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File with alternate header content to prepend to each output
    #[arg(long = "header-file")]
    pub header_file: Option<PathBuf>,

    /// Make throw stubs raise PlatformNotSupportedException with this message
    #[arg(long = "exception-message")]
    pub exception_message: Option<String>,

    /// File with type identity tokens (one T:-prefixed doc-id per line) of
    /// attributes to exclude from the surface
    #[arg(long = "exclude-attributes-file")]
    pub exclude_attributes_file: Option<PathBuf>,

    /// Include internal and private-protected symbols, not just the
    /// public surface
    #[arg(long = "include-internal")]
    pub include_internal: bool,

    /// Indentation width in characters
    #[arg(long = "indent-size", default_value = "4")]
    pub indent_size: usize,

    /// Indentation character
    #[arg(long = "indent-char", value_enum, default_value = "space")]
    pub indent_char: IndentChar,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
