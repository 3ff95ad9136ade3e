//! Output-sink resolution and writing.
//!
//! The pipeline produces one rendered surface per module; this layer decides
//! where it goes (a `<module>.cs` file inside a directory, one explicit
//! file, or stdout when no output path is given) and guarantees the sink is
//! flushed exactly once on every exit path.

use anyhow::{Context, Result};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Fixed banner prepended when no header file is configured.
pub const DEFAULT_HEADER: &str = "\
//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by a tool.
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------
";

/// Where a module's rendered surface is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    Console,
    File(PathBuf),
    Directory(PathBuf),
}

impl OutputTarget {
    /// Resolve a user-supplied output path: unset means the console, an
    /// existing directory means one file per module inside it, anything
    /// else names a single file.
    pub fn resolve(output: Option<PathBuf>) -> Self {
        match output {
            None => OutputTarget::Console,
            Some(path) if path.is_dir() => OutputTarget::Directory(path),
            Some(path) => OutputTarget::File(path),
        }
    }

    fn file_for(&self, module_name: &str) -> Option<PathBuf> {
        match self {
            OutputTarget::Console => None,
            OutputTarget::File(path) => Some(path.clone()),
            OutputTarget::Directory(dir) => Some(dir.join(format!("{module_name}.cs"))),
        }
    }
}

/// Write one module's surface (header + rendered text) to the target,
/// flushing exactly once.
pub fn write_module(
    target: &OutputTarget,
    module_name: &str,
    header: &str,
    contents: &str,
) -> Result<()> {
    match target.file_for(module_name) {
        None => {
            let stdout = std::io::stdout();
            let mut sink = stdout.lock();
            sink.write_all(header.as_bytes())?;
            sink.write_all(contents.as_bytes())?;
            sink.flush()?;
            Ok(())
        }
        Some(path) => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            sink.write_all(header.as_bytes())?;
            sink.write_all(contents.as_bytes())?;
            sink.flush()
                .with_context(|| format!("failed to flush output file {}", path.display()))?;
            Ok(())
        }
    }
}

/// Header content: the configured file's text, or the fixed banner.
pub fn read_header(header_file: Option<&Path>) -> Result<String> {
    match header_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read header file {}", path.display())),
        None => Ok(DEFAULT_HEADER.to_string()),
    }
}
