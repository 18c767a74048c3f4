//! Input validation for part and product candidates
//!
//! Pure checks run by the forms before anything is committed to the
//! inventory. Checks run in a fixed order and the first failure wins, so a
//! candidate violating several rules reports only the earliest one.

use thiserror::Error;

use crate::core::entity::EntityKind;
use crate::entities::part::{Part, PartSource};
use crate::entities::product::Product;

/// A business-rule violation in a part or product candidate.
///
/// The `Display` output is the user-facing message for the violated rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Minimum stock must be less than maximum.")]
    MinAboveMax,

    #[error("Inventory must be between min and max.")]
    StockOutOfRange,

    #[error("{0} name should not be left blank.")]
    BlankName(EntityKind),

    #[error("Min, Max, and Inv should not be 0.")]
    ZeroField,

    #[error("Product Price must be greater than 0.")]
    NegativeProductPrice,

    #[error("Product price must be equal to or greater than the sum of its parts.")]
    PriceBelowPartsSum,
}

/// Validate a part candidate prior to commit.
///
/// For outsourced parts a non-positive price is folded into the zero-field
/// rule: a supplier part with no price is treated the same as one with no
/// stock.
pub fn validate_part(part: &Part) -> Result<(), ValidationError> {
    check_stock_window(part.stock, part.min, part.max)?;
    check_name(EntityKind::Part, &part.name)?;

    let price_floor = matches!(part.source, PartSource::Outsourced { .. }) && part.price <= 0.0;
    if part.stock == 0 || part.min <= 0 || part.max == 0 || price_floor {
        return Err(ValidationError::ZeroField);
    }

    Ok(())
}

/// Validate a product candidate prior to commit.
///
/// Checks the same base rules as parts, then the product-specific price
/// rules: price must not be negative (zero is accepted), and must cover the
/// summed price of the associated parts as of this call.
pub fn validate_product(product: &Product) -> Result<(), ValidationError> {
    check_stock_window(product.stock, product.min, product.max)?;
    check_name(EntityKind::Product, &product.name)?;

    if product.stock == 0 || product.min <= 0 || product.max == 0 {
        return Err(ValidationError::ZeroField);
    }
    if product.price < 0.0 {
        return Err(ValidationError::NegativeProductPrice);
    }
    if product.parts_total() > product.price {
        return Err(ValidationError::PriceBelowPartsSum);
    }

    Ok(())
}

// Rules 1 and 2: min must not exceed max, stock must sit inside the window.
fn check_stock_window(stock: i32, min: i32, max: i32) -> Result<(), ValidationError> {
    if min > max {
        return Err(ValidationError::MinAboveMax);
    }
    if stock < min || stock > max {
        return Err(ValidationError::StockOutOfRange);
    }
    Ok(())
}

fn check_name(kind: EntityKind, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankName(kind));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn in_house(name: &str, price: f64, stock: i32, min: i32, max: i32) -> Part {
        Part::new(name, price, stock, min, max, PartSource::InHouse { machine_id: 3 })
    }

    fn outsourced(name: &str, price: f64, stock: i32, min: i32, max: i32) -> Part {
        Part::new(
            name,
            price,
            stock,
            min,
            max,
            PartSource::Outsourced {
                company_name: "Acme Fasteners".to_string(),
            },
        )
    }

    #[test]
    fn valid_in_house_part_passes() {
        let part = in_house("Bolt", 0.5, 10, 1, 20);
        assert_eq!(validate_part(&part), Ok(()));
    }

    #[test]
    fn min_above_max_wins_over_everything_else() {
        // Every other rule is also violated; the window rule must win.
        let part = in_house("", 0.0, 0, 5, 2);
        assert_eq!(validate_part(&part), Err(ValidationError::MinAboveMax));
    }

    #[test]
    fn stock_outside_window_is_rejected() {
        let low = in_house("Bolt", 0.5, 1, 2, 10);
        let high = in_house("Bolt", 0.5, 11, 2, 10);
        assert_eq!(validate_part(&low), Err(ValidationError::StockOutOfRange));
        assert_eq!(validate_part(&high), Err(ValidationError::StockOutOfRange));
    }

    #[test]
    fn blank_name_is_rejected_with_part_wording() {
        let part = in_house("   ", 0.5, 5, 1, 10);
        let err = validate_part(&part).unwrap_err();
        assert_eq!(err, ValidationError::BlankName(EntityKind::Part));
        assert_eq!(err.to_string(), "Part name should not be left blank.");
    }

    #[test]
    fn zero_stock_min_or_max_is_rejected() {
        // min <= 0 with a window that still contains stock
        let part = in_house("Bolt", 0.5, 0, 0, 10);
        assert_eq!(validate_part(&part), Err(ValidationError::ZeroField));
    }

    #[test]
    fn outsourced_part_needs_positive_price() {
        let part = outsourced("Washer", 0.0, 5, 1, 10);
        assert_eq!(validate_part(&part), Err(ValidationError::ZeroField));

        // The same part made in-house is fine at price zero.
        let part = in_house("Washer", 0.0, 5, 1, 10);
        assert_eq!(validate_part(&part), Ok(()));
    }

    #[test]
    fn product_price_zero_is_accepted() {
        let product = Product::new("Kit", 0.0, 5, 1, 10);
        assert_eq!(validate_product(&product), Ok(()));
    }

    #[test]
    fn product_negative_price_is_rejected() {
        let product = Product::new("Kit", -0.01, 5, 1, 10);
        assert_eq!(
            validate_product(&product),
            Err(ValidationError::NegativeProductPrice)
        );
    }

    #[test]
    fn product_price_must_cover_parts_sum() {
        let bolt = Rc::new(in_house("Bolt", 0.5, 10, 1, 20));

        let mut product = Product::new("Kit", 1.0, 5, 1, 10);
        product.add_associated_part(Rc::clone(&bolt));
        product.add_associated_part(Rc::clone(&bolt));
        // sum = 1.0 <= price = 1.0
        assert_eq!(validate_product(&product), Ok(()));

        product.price = 0.9;
        assert_eq!(
            validate_product(&product),
            Err(ValidationError::PriceBelowPartsSum)
        );
    }

    #[test]
    fn product_blank_name_uses_product_wording() {
        let product = Product::new("", 1.0, 5, 1, 10);
        assert_eq!(
            validate_product(&product).unwrap_err().to_string(),
            "Product name should not be left blank."
        );
    }

    #[test]
    fn messages_match_the_form_dialogs() {
        assert_eq!(
            ValidationError::MinAboveMax.to_string(),
            "Minimum stock must be less than maximum."
        );
        assert_eq!(
            ValidationError::StockOutOfRange.to_string(),
            "Inventory must be between min and max."
        );
        assert_eq!(
            ValidationError::ZeroField.to_string(),
            "Min, Max, and Inv should not be 0."
        );
        assert_eq!(
            ValidationError::NegativeProductPrice.to_string(),
            "Product Price must be greater than 0."
        );
        assert_eq!(
            ValidationError::PriceBelowPartsSum.to_string(),
            "Product price must be equal to or greater than the sum of its parts."
        );
    }
}
