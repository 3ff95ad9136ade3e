use crate::filters::{SymbolFilter, SymbolRef};

/// Rejects compiler-synthesized symbols.
///
/// Property and event accessor methods and delegate invoke methods are
/// represented through their owning property/event/delegate declaration;
/// emitting them as standalone methods would duplicate the surface. Any
/// symbol flagged as implicitly generated is rejected outright.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImplicitSymbolsFilter;

impl SymbolFilter for ImplicitSymbolsFilter {
    fn include(&self, symbol: &SymbolRef<'_>) -> bool {
        if symbol.is_implicit() {
            return false;
        }
        match symbol {
            SymbolRef::Method { symbol: method, .. } => !method.kind.is_accessor(),
            _ => true,
        }
    }
}
