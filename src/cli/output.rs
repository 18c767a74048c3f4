//! Table rendering and session-snapshot export

use std::rc::Rc;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::format_price;
use crate::core::inventory::Inventory;
use crate::entities::part::Part;
use crate::entities::product::Product;

/// Placeholder shown instead of an empty parts table.
pub const NO_PARTS_PLACEHOLDER: &str = "No Parts found - or currently available";

/// Placeholder shown instead of an empty products table.
pub const NO_PRODUCTS_PLACEHOLDER: &str = "No Products found - or currently available";

/// Placeholder for a product's empty associated-parts listing.
pub const NO_ASSOCIATED_PARTS_PLACEHOLDER: &str = "No Parts currently associated with this product";

/// Render a parts listing. The Source column shows the machine id or the
/// supplier name depending on the part's variant.
pub fn parts_table<'a, I>(parts: I, currency: &str) -> String
where
    I: IntoIterator<Item = &'a Rc<Part>>,
{
    render_parts(parts, currency, NO_PARTS_PLACEHOLDER)
}

/// Render a product's associated parts with its own empty placeholder.
pub fn associated_parts_table<'a, I>(parts: I, currency: &str) -> String
where
    I: IntoIterator<Item = &'a Rc<Part>>,
{
    render_parts(parts, currency, NO_ASSOCIATED_PARTS_PLACEHOLDER)
}

fn render_parts<'a, I>(parts: I, currency: &str, placeholder: &str) -> String
where
    I: IntoIterator<Item = &'a Rc<Part>>,
{
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Inv", "Price", "Source"]);

    let mut rows = 0;
    for part in parts {
        builder.push_record([
            part.id.to_string(),
            part.name.clone(),
            part.stock.to_string(),
            format_price(part.price, currency),
            part.source.to_string(),
        ]);
        rows += 1;
    }

    if rows == 0 {
        return placeholder.to_string();
    }

    builder.build().with(Style::markdown()).to_string()
}

/// Render a products listing with the associated-part count per row.
pub fn products_table<'a, I>(products: I, currency: &str) -> String
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Inv", "Price", "Parts"]);

    let mut rows = 0;
    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.stock.to_string(),
            format_price(product.price, currency),
            product.associated_parts.len().to_string(),
        ]);
        rows += 1;
    }

    if rows == 0 {
        return NO_PRODUCTS_PLACEHOLDER.to_string();
    }

    builder.build().with(Style::markdown()).to_string()
}

/// Serializable view of the whole session catalog.
#[derive(Serialize)]
struct Snapshot<'a> {
    parts: &'a [Rc<Part>],
    products: &'a [Product],
}

/// Export the catalog as pretty-printed JSON.
pub fn export_json(inventory: &Inventory) -> Result<String> {
    let snapshot = Snapshot {
        parts: inventory.parts(),
        products: inventory.products(),
    };
    serde_json::to_string_pretty(&snapshot).into_diagnostic()
}

/// Export the catalog as CSV. Parts and products share one table; product
/// rows list their associated part ids in the final column.
pub fn export_csv(inventory: &Inventory) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "kind",
            "id",
            "name",
            "price",
            "stock",
            "min",
            "max",
            "source",
            "associated_part_ids",
        ])
        .into_diagnostic()?;

    for part in inventory.parts() {
        writer
            .write_record([
                "part".to_string(),
                part.id.to_string(),
                part.name.clone(),
                format!("{:.2}", part.price),
                part.stock.to_string(),
                part.min.to_string(),
                part.max.to_string(),
                part.source.to_string(),
                String::new(),
            ])
            .into_diagnostic()?;
    }

    for product in inventory.products() {
        let part_ids = product
            .associated_parts
            .iter()
            .map(|p| p.id.to_string())
            .collect::<Vec<_>>()
            .join(";");
        writer
            .write_record([
                "product".to_string(),
                product.id.to_string(),
                product.name.clone(),
                format!("{:.2}", product.price),
                product.stock.to_string(),
                product.min.to_string(),
                product.max.to_string(),
                String::new(),
                part_ids,
            ])
            .into_diagnostic()?;
    }

    let bytes = writer.into_inner().into_diagnostic()?;
    String::from_utf8(bytes).into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::part::PartSource;

    fn seeded_inventory() -> Inventory {
        let mut inventory = Inventory::new();
        let bolt = inventory.add_part(Part::new(
            "Bolt",
            0.5,
            10,
            1,
            20,
            PartSource::InHouse { machine_id: 3 },
        ));
        inventory.add_part(Part::new(
            "Washer",
            0.1,
            50,
            5,
            100,
            PartSource::Outsourced {
                company_name: "Acme Fasteners".to_string(),
            },
        ));

        let mut kit = Product::new("Kit", 1.0, 5, 1, 10);
        kit.add_associated_part(bolt);
        inventory.add_product(kit);
        inventory
    }

    #[test]
    fn parts_table_shows_variant_specific_source() {
        let inventory = seeded_inventory();
        let table = parts_table(inventory.parts(), "$");

        assert!(table.contains("Bolt"));
        assert!(table.contains("Machine 3"));
        assert!(table.contains("Acme Fasteners"));
        assert!(table.contains("$0.50"));
    }

    #[test]
    fn empty_tables_show_placeholders() {
        let inventory = Inventory::new();
        assert_eq!(parts_table(inventory.parts(), "$"), NO_PARTS_PLACEHOLDER);
        assert_eq!(
            products_table(inventory.products(), "$"),
            NO_PRODUCTS_PLACEHOLDER
        );
        let none: Vec<Rc<Part>> = Vec::new();
        assert_eq!(
            associated_parts_table(&none, "$"),
            NO_ASSOCIATED_PARTS_PLACEHOLDER
        );
    }

    #[test]
    fn products_table_counts_associated_parts() {
        let inventory = seeded_inventory();
        let table = products_table(inventory.products(), "$");

        assert!(table.contains("Kit"));
        assert!(table.contains("| 1"));
    }

    #[test]
    fn json_export_includes_both_collections() {
        let inventory = seeded_inventory();
        let json = export_json(&inventory).unwrap();

        assert!(json.contains("\"parts\""));
        assert!(json.contains("\"products\""));
        assert!(json.contains("\"machine_id\": 3"));
        assert!(json.contains("\"company_name\": \"Acme Fasteners\""));
    }

    #[test]
    fn csv_export_has_a_row_per_entity() {
        let inventory = seeded_inventory();
        let csv = export_csv(&inventory).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        // Header + 2 parts + 1 product
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("kind,id,name"));
        assert!(lines[3].starts_with("product,0,Kit"));
    }
}
