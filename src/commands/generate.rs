//! Front-end orchestration: resolve inputs, run the pipeline per module in
//! parallel, write each rendered surface to its sink.
//!
//! Modules are independent; a synthesis error in one is reported with the
//! offending symbol's identity and does not abort the others.

use anyhow::{bail, Result};
use rayon::prelude::*;
use std::path::PathBuf;

use crate::config::GenerationConfig;
use crate::filters::IntersectionFilter;
use crate::io::input::{collect_graph_paths, load_module_graph};
use crate::io::output::{read_header, write_module, OutputTarget};
use crate::pipeline;

#[derive(Clone, Debug, Default)]
pub struct GenerateOptions {
    /// Symbol-graph files or directories to scan for them.
    pub inputs: Vec<PathBuf>,
    /// Output directory, single file, or `None` for the console.
    pub output: Option<PathBuf>,
    /// Alternate header content to prepend to each surface.
    pub header_file: Option<PathBuf>,
    pub config: GenerationConfig,
}

pub fn run(options: GenerateOptions) -> Result<()> {
    let header = read_header(options.header_file.as_deref())?;
    let paths = collect_graph_paths(&options.inputs)?;
    if paths.is_empty() {
        bail!("no symbol-graph files found in the given inputs");
    }

    let filter = IntersectionFilter::standard(&options.config);
    let target = OutputTarget::resolve(options.output);

    // CPU-bound build and render in parallel; writes happen sequentially
    // below so each sink is opened and flushed exactly once, in path order.
    let rendered: Vec<_> = paths
        .par_iter()
        .map(|path| {
            let surface = load_module_graph(path).and_then(|graph| {
                log::debug!("processing module `{}` from {}", graph.name, path.display());
                pipeline::render_module(&graph, &filter, &options.config)
                    .map(|text| (graph.name.clone(), text))
                    .map_err(Into::into)
            });
            (path, surface)
        })
        .collect();

    let mut failures = 0usize;
    for (path, surface) in rendered {
        match surface {
            Ok((module_name, text)) => {
                write_module(&target, &module_name, &header, &text)?;
            }
            Err(err) => {
                failures += 1;
                log::warn!("skipping {}: {err:#}", path.display());
            }
        }
    }

    if failures == paths.len() {
        bail!("all {failures} module(s) failed to process");
    }
    if failures > 0 {
        log::warn!("{failures} of {} module(s) failed to process", paths.len());
    }
    Ok(())
}
