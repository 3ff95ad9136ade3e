// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod filters;
pub mod io;
pub mod passes;
pub mod pipeline;
pub mod render;
pub mod stub;
pub mod synthesis;

// Re-export commonly used types
pub use crate::config::{GenerationConfig, Indentation, VisibilityFloor};
pub use crate::core::fragment::{
    MemberFragment, ModuleFragment, NamespaceFragment, StubBody, TypeFragment,
};
pub use crate::core::{
    Accessibility, MemberSymbol, MethodKind, MethodSymbol, ModuleGraph, NamespaceSymbol, TypeKind,
    TypeRef, TypeSymbol,
};
pub use crate::errors::{SynthesisError, SynthesisResult};
pub use crate::filters::{
    AccessibilityFilter, AttributeExclusionFilter, DelegateMembersFilter, ExclusionSet,
    ImplicitSymbolsFilter, IntersectionFilter, SymbolFilter, SymbolRef,
};
pub use crate::pipeline::{build_module, render_module};
pub use crate::render::Renderer;
pub use crate::stub::StubPolicy;
