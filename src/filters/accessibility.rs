use crate::config::VisibilityFloor;
use crate::filters::{SymbolFilter, SymbolRef};

/// Retains a symbol iff its declared accessibility meets the configured
/// visibility floor.
///
/// The filter is applied independently at each nesting level: a nested type
/// must itself pass before its members are ever considered. Explicit
/// interface implementations are always retained: their metadata
/// accessibility is private, but their surface belongs to the implemented
/// interface.
#[derive(Clone, Copy, Debug)]
pub struct AccessibilityFilter {
    floor: VisibilityFloor,
}

impl AccessibilityFilter {
    pub fn new(floor: VisibilityFloor) -> Self {
        Self { floor }
    }

    pub fn floor(&self) -> VisibilityFloor {
        self.floor
    }
}

impl SymbolFilter for AccessibilityFilter {
    fn include(&self, symbol: &SymbolRef<'_>) -> bool {
        let explicit_implementation = match symbol {
            SymbolRef::Method { symbol, .. } => symbol.explicit_interface.is_some(),
            SymbolRef::Property(property) => property.explicit_interface.is_some(),
            _ => false,
        };
        explicit_implementation || self.floor.admits(symbol.accessibility())
    }
}
