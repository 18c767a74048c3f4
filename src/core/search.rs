//! Live filtered views over catalog collections
//!
//! A filtered view is a lazy iterator borrowing the underlying slice, so it
//! always reflects the collection as of the call - it is re-derived on every
//! query change, never a copied list.

use crate::core::entity::Entity;

/// Whether an entity matches a search query.
///
/// A query matches on a case-insensitive substring of the name, or on exact
/// equality with the id's decimal text. The empty query matches everything.
pub fn matches<E: Entity>(entity: &E, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    entity.name().to_lowercase().contains(&query.to_lowercase())
        || entity.id().to_string() == query
}

/// Filter a collection by a search query, preserving collection order.
pub fn filter<'a, E: Entity>(
    collection: &'a [E],
    query: &'a str,
) -> impl Iterator<Item = &'a E> + 'a {
    collection.iter().filter(move |entity| matches(*entity, query))
}
