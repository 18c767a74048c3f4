//! Part entity type - individual stocked parts (in-house or outsourced)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;

/// Where a part comes from.
///
/// In-house parts are identified by the producing machine; outsourced parts
/// by the supplier's company name. The variant tag is what display and
/// validation logic match on - there is no shared manufacturer field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PartSource {
    InHouse { machine_id: i32 },
    Outsourced { company_name: String },
}

impl std::fmt::Display for PartSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartSource::InHouse { machine_id } => write!(f, "Machine {}", machine_id),
            PartSource::Outsourced { company_name } => write!(f, "{}", company_name),
        }
    }
}

/// A Part entity - a purchasable or manufacturable component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Assigned by the inventory at commit time; 0 on an uncommitted candidate.
    pub id: usize,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Current stocked quantity ("Inv")
    pub stock: i32,

    /// Minimum stocking level
    pub min: i32,

    /// Maximum stocking level
    pub max: i32,

    /// In-house or outsourced manufacturer
    pub source: PartSource,

    /// Creation timestamp; carried forward across modifications
    pub created: DateTime<Utc>,
}

impl Part {
    /// Create an uncommitted part candidate with the given field values.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        stock: i32,
        min: i32,
        max: i32,
        source: PartSource,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            stock,
            min,
            max,
            source,
            created: Utc::now(),
        }
    }
}

impl Entity for Part {
    fn id(&self) -> usize {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_creation() {
        let part = Part::new("Bolt", 0.5, 10, 1, 20, PartSource::InHouse { machine_id: 3 });

        assert_eq!(part.id, 0);
        assert_eq!(part.name, "Bolt");
        assert_eq!(part.stock, 10);
        assert_eq!(part.source, PartSource::InHouse { machine_id: 3 });
    }

    #[test]
    fn test_source_display() {
        let in_house = PartSource::InHouse { machine_id: 7 };
        let outsourced = PartSource::Outsourced {
            company_name: "Acme Fasteners".to_string(),
        };

        assert_eq!(in_house.to_string(), "Machine 7");
        assert_eq!(outsourced.to_string(), "Acme Fasteners");
    }

    #[test]
    fn test_part_roundtrip() {
        let part = Part::new(
            "Bracket",
            2.25,
            5,
            1,
            8,
            PartSource::Outsourced {
                company_name: "Acme Fasteners".to_string(),
            },
        );

        let json = serde_json::to_string(&part).unwrap();
        let parsed: Part = serde_json::from_str(&json).unwrap();

        assert_eq!(part, parsed);
    }

    #[test]
    fn test_source_tagged_serialization() {
        let part = Part::new("Gear", 1.0, 3, 1, 5, PartSource::InHouse { machine_id: 12 });

        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains("\"type\":\"inhouse\""));
        assert!(json.contains("\"machine_id\":12"));
    }
}
