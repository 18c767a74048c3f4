//! Shared helper functions for the interactive UI

use crate::entities::part::Part;
use crate::entities::product::Product;

/// Format a price with the configured currency prefix and two decimals.
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, price)
}

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for selection labels that need bounded width.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// One-line selection label for a part.
pub fn part_label(part: &Part, currency: &str) -> String {
    format!(
        "{:>3}  {}  (Inv {}, {})",
        part.id,
        truncate_str(&part.name, 32),
        part.stock,
        format_price(part.price, currency),
    )
}

/// One-line selection label for a product.
pub fn product_label(product: &Product, currency: &str) -> String {
    format!(
        "{:>3}  {}  ({} parts, {})",
        product.id,
        truncate_str(&product.name, 32),
        product.associated_parts.len(),
        format_price(product.price, currency),
    )
}
