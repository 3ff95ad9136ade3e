//! Per-module pipeline: filter -> synthesize -> stub -> normalize.
//!
//! The run is a pure, single-threaded batch transform over one module's
//! symbol graph; no stage retains state across modules, so callers may
//! process modules concurrently without locking.

use crate::config::GenerationConfig;
use crate::core::fragment::ModuleFragment;
use crate::core::ModuleGraph;
use crate::errors::SynthesisResult;
use crate::filters::SymbolFilter;
use crate::passes;
use crate::render::Renderer;
use crate::stub::StubPolicy;
use crate::synthesis;

/// Build the normalized fragment tree for one module.
pub fn build_module(
    graph: &ModuleGraph,
    filter: &dyn SymbolFilter,
    config: &GenerationConfig,
) -> SynthesisResult<ModuleFragment> {
    let synthesized = synthesis::synthesize_module(graph, filter, config)?;
    let stubbed = StubPolicy::new(config.exception_message.clone()).apply(synthesized);
    Ok(passes::normalize(stubbed))
}

/// Build and render one module in a single call.
pub fn render_module(
    graph: &ModuleGraph,
    filter: &dyn SymbolFilter,
    config: &GenerationConfig,
) -> SynthesisResult<String> {
    let module = build_module(graph, filter, config)?;
    Ok(Renderer::new(config.indentation).render(&module))
}
