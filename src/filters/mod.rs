//! Composable symbol filters deciding which symbols reach the synthesizer.
//!
//! Each filter is a pure predicate over a borrowed symbol view: stateless,
//! or holding an immutable exclusion set loaded once at construction.
//! Filters compose through [`IntersectionFilter`], a logical AND that
//! short-circuits on first rejection; because AND is commutative, filter
//! order changes evaluation cost but never the retained set. Removing a
//! filter can only enlarge the retained set.

pub mod accessibility;
pub mod attributes;
pub mod delegates;
pub mod implicit;

pub use accessibility::AccessibilityFilter;
pub use attributes::{AttributeExclusionFilter, ExclusionSet};
pub use delegates::DelegateMembersFilter;
pub use implicit::ImplicitSymbolsFilter;

use crate::config::GenerationConfig;
use crate::core::{
    Accessibility, EventSymbol, FieldSymbol, MethodSymbol, PropertySymbol, TypeKind, TypeSymbol,
};

/// Borrowed view of one symbol, with the traversal context a filter may
/// need (identity token for types, containing-type kind for methods).
#[derive(Clone, Copy, Debug)]
pub enum SymbolRef<'a> {
    Type {
        symbol: &'a TypeSymbol,
        /// `T:`-prefixed identity of the type at its declaration site.
        doc_id: &'a str,
    },
    Method {
        symbol: &'a MethodSymbol,
        containing_kind: TypeKind,
    },
    Field(&'a FieldSymbol),
    Property(&'a PropertySymbol),
    Event(&'a EventSymbol),
}

impl SymbolRef<'_> {
    pub fn name(&self) -> &str {
        match self {
            SymbolRef::Type { symbol, .. } => &symbol.name,
            SymbolRef::Method { symbol, .. } => &symbol.name,
            SymbolRef::Field(f) => &f.name,
            SymbolRef::Property(p) => &p.name,
            SymbolRef::Event(e) => &e.name,
        }
    }

    pub fn accessibility(&self) -> Accessibility {
        match self {
            SymbolRef::Type { symbol, .. } => symbol.accessibility,
            SymbolRef::Method { symbol, .. } => symbol.accessibility,
            SymbolRef::Field(f) => f.accessibility,
            SymbolRef::Property(p) => p.accessibility,
            SymbolRef::Event(e) => e.accessibility,
        }
    }

    pub fn is_implicit(&self) -> bool {
        match self {
            SymbolRef::Type { symbol, .. } => symbol.is_implicit,
            SymbolRef::Method { symbol, .. } => symbol.is_implicit,
            SymbolRef::Field(f) => f.is_implicit,
            SymbolRef::Property(p) => p.is_implicit,
            SymbolRef::Event(e) => e.is_implicit,
        }
    }
}

/// Retention predicate over one symbol.
pub trait SymbolFilter: Send + Sync {
    fn include(&self, symbol: &SymbolRef<'_>) -> bool;
}

/// Logical AND over an ordered list of inner filters.
///
/// Built once per run via the `with` chain and passed by reference through
/// the pipeline; there is no process-wide filter registry.
#[derive(Default)]
pub struct IntersectionFilter {
    inner: Vec<Box<dyn SymbolFilter>>,
}

impl IntersectionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: impl SymbolFilter + 'static) -> Self {
        self.inner.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The standard pipeline: delegate members out, implicit symbols out,
    /// accessibility floor, plus the attribute exclusion set when one is
    /// configured.
    pub fn standard(config: &GenerationConfig) -> Self {
        let mut filter = Self::new()
            .with(DelegateMembersFilter)
            .with(ImplicitSymbolsFilter)
            .with(AccessibilityFilter::new(config.visibility));
        if !config.excluded_attributes.is_empty() {
            filter = filter.with(AttributeExclusionFilter::new(
                config.excluded_attributes.clone(),
            ));
        }
        filter
    }
}

impl SymbolFilter for IntersectionFilter {
    fn include(&self, symbol: &SymbolRef<'_>) -> bool {
        self.inner.iter().all(|filter| filter.include(symbol))
    }
}
