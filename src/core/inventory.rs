//! Inventory - the authoritative in-memory store of parts and products
//!
//! One `Inventory` value is constructed per session and passed by reference
//! to every consumer; nothing here is global. The store performs no
//! validation of its own - candidates are validated by the forms before
//! commit (see [`crate::core::validate`]).

use std::rc::Rc;

use crate::entities::part::Part;
use crate::entities::product::Product;

/// In-memory catalog of parts and products.
///
/// Both collections are insertion-ordered. Ids are assigned at commit time
/// as the current collection length, which means ids are reused after
/// deletions: deleting from the middle of a collection and then adding
/// assigns an id that may collide with a surviving entry. This mirrors the
/// application's observed numbering and is relied on by the modify flow,
/// which replaces the entry at index `id`.
#[derive(Debug, Default)]
pub struct Inventory {
    parts: Vec<Rc<Part>>,
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a new part: assign the next id, append, and return the shared
    /// handle under which the part is stored.
    pub fn add_part(&mut self, mut part: Part) -> Rc<Part> {
        part.id = self.parts.len();
        let part = Rc::new(part);
        self.parts.push(Rc::clone(&part));
        part
    }

    /// Commit a new product: assign the next id, append, and return a
    /// reference to the stored entry.
    pub fn add_product(&mut self, mut product: Product) -> &Product {
        let id = self.products.len();
        product.id = id;
        self.products.push(product);
        &self.products[id]
    }

    /// Replace the part at index `part.id` with `part`.
    ///
    /// Precondition: `part.id` is a valid index obtained from an existing
    /// entry. Calling this with any other id is a programming error and
    /// panics; it is never reachable from user input.
    pub fn modify_part(&mut self, part: Part) {
        let idx = part.id;
        self.parts[idx] = Rc::new(part);
    }

    /// Replace the product at index `product.id` with `product`.
    ///
    /// Same precondition as [`Inventory::modify_part`].
    pub fn modify_product(&mut self, product: Product) {
        let idx = product.id;
        self.products[idx] = product;
    }

    /// Remove the first part whose id matches. Removes at most one entry;
    /// a no-op returning `false` if no part has the given id.
    pub fn delete_part(&mut self, id: usize) -> bool {
        match self.parts.iter().position(|p| p.id == id) {
            Some(idx) => {
                self.parts.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove the first product whose id matches. Removes at most one entry;
    /// a no-op returning `false` if no product has the given id.
    pub fn delete_product(&mut self, id: usize) -> bool {
        match self.products.iter().position(|p| p.id == id) {
            Some(idx) => {
                self.products.remove(idx);
                true
            }
            None => false,
        }
    }

    /// True iff the product has no associated parts.
    ///
    /// Callers must check this before [`Inventory::delete_product`]; the
    /// delete path itself does not enforce it.
    pub fn can_delete_product(&self, product: &Product) -> bool {
        product.associated_parts.is_empty()
    }

    /// Current part count - also the id the next committed part receives.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Current product count - also the id the next committed product receives.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn parts(&self) -> &[Rc<Part>] {
        &self.parts
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
