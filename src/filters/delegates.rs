use crate::core::TypeKind;
use crate::filters::{SymbolFilter, SymbolRef};

/// Rejects every method symbol declared inside a delegate type.
///
/// A delegate's own declaration already encodes its full signature; the
/// invoke/begin/end machinery behind it carries no additional surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct DelegateMembersFilter;

impl SymbolFilter for DelegateMembersFilter {
    fn include(&self, symbol: &SymbolRef<'_>) -> bool {
        match symbol {
            SymbolRef::Method {
                containing_kind, ..
            } => *containing_kind != TypeKind::Delegate,
            _ => true,
        }
    }
}
