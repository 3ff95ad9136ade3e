//! Symbol-graph loading.
//!
//! Each `*.json` file holds the materialized symbol graph of one compiled
//! module. Inputs may name files directly or directories to scan.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::ModuleGraph;

/// Resolve a mixed list of files and directories into the sorted list of
/// module-graph files to process.
pub fn collect_graph_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry
                    .with_context(|| format!("failed to scan directory {}", input.display()))?;
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "json")
                {
                    paths.push(entry.into_path());
                }
            }
        } else {
            paths.push(input.clone());
        }
    }
    paths.sort();
    paths.dedup();
    Ok(paths)
}

pub fn load_module_graph(path: &Path) -> Result<ModuleGraph> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read symbol graph {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse symbol graph {}", path.display()))
}
