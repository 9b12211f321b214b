//! Hierarchical type-to-symbol resolution.

use std::collections::HashMap;

use log::trace;

use crate::symbol::SymbolId;

/// An external classification forest queried during symbol resolution.
///
/// Implementations must be deterministic and acyclic: repeated calls to
/// [`parent`](TypeHierarchy::parent) starting from any type code must
/// eventually return `None`. This is the caller's invariant; resolution
/// does not guard against cycles.
pub trait TypeHierarchy {
    /// Returns the parent type of `type_code`, or `None` for a root.
    fn parent(&self, type_code: &str) -> Option<&str>;
}

/// A child-to-parent map is the simplest hierarchy representation, handy
/// for tests and small fixed taxonomies.
impl TypeHierarchy for HashMap<String, String> {
    fn parent(&self, type_code: &str) -> Option<&str> {
        self.get(type_code).map(String::as_str)
    }
}

/// Returns the best available symbol for a given object type.
///
/// The registered short codes are scanned for an exact match against
/// `type_code`; on no match the code is replaced by its parent from the
/// hierarchy and the scan repeats. Returns `None` once the parent chain is
/// exhausted without a match, meaning no symbol is available for this
/// type or any of its ancestors.
///
/// Results are not cached here; the registry is tens of entries and
/// hierarchies are shallow, so callers that resolve in bulk may cache on
/// their side.
pub fn resolve_symbol<H>(hierarchy: &H, type_code: &str) -> Option<SymbolId>
where
    H: TypeHierarchy + ?Sized,
{
    let mut current = type_code;
    loop {
        for id in SymbolId::ALL {
            if id.short_code() == current {
                return Some(id);
            }
        }
        match hierarchy.parent(current) {
            Some(parent) => {
                trace!(from = current, to = parent; "no symbol for type, trying parent");
                current = parent;
            }
            None => return None,
        }
    }
}
