//! Product entity type - sellable items assembled from parts

use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;
use crate::entities::part::Part;

/// A Product entity - composed of zero or more associated parts.
///
/// Associated parts are shared references into the inventory's part
/// collection: the same `Part` instance lives in both places. Modifying a
/// part in the inventory replaces the inventory's entry with a new instance,
/// so products keep referencing the instance they were assembled with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the inventory at commit time; 0 on an uncommitted candidate.
    pub id: usize,

    /// Display name
    pub name: String,

    /// Sale price; must cover the summed price of the associated parts
    pub price: f64,

    /// Current stocked quantity ("Inv")
    pub stock: i32,

    /// Minimum stocking level
    pub min: i32,

    /// Maximum stocking level
    pub max: i32,

    /// Parts this product is assembled from, in association order
    pub associated_parts: Vec<Rc<Part>>,

    /// Creation timestamp; carried forward across modifications
    pub created: DateTime<Utc>,
}

impl Product {
    /// Create an uncommitted product candidate with no associated parts.
    pub fn new(name: impl Into<String>, price: f64, stock: i32, min: i32, max: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            stock,
            min,
            max,
            associated_parts: Vec::new(),
            created: Utc::now(),
        }
    }

    /// Associate a part with this product.
    pub fn add_associated_part(&mut self, part: Rc<Part>) {
        self.associated_parts.push(part);
    }

    /// Summed price of all associated parts.
    pub fn parts_total(&self) -> f64 {
        self.associated_parts.iter().map(|p| p.price).sum()
    }
}

impl Entity for Product {
    fn id(&self) -> usize {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
