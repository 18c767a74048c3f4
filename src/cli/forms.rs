//! Interactive entry forms for parts and products
//!
//! Forms collect raw field text, convert it to typed values (rejecting
//! malformed numbers at the prompt, before validation), build a candidate
//! entity, and run the validator. A rejected candidate re-opens the form
//! with the entered values so the user can correct and resubmit. Returning
//! `None` is the cancel path: the candidate is discarded and the inventory
//! is never touched.

use std::rc::Rc;
use std::str::FromStr;

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::part_label;
use crate::cli::output;
use crate::core::inventory::Inventory;
use crate::core::search;
use crate::core::validate::{validate_part, validate_product};
use crate::entities::part::{Part, PartSource};
use crate::entities::product::Product;

enum SaveChoice {
    Save,
    EditAgain,
    Discard,
}

/// Run the part entry form.
///
/// `current` is the part being modified, or `None` when adding; `next_id` is
/// shown as the auto-assigned id preview on add.
pub fn part_form(
    theme: &ColorfulTheme,
    next_id: usize,
    current: Option<Part>,
    skip_confirm: bool,
) -> Result<Option<Part>> {
    print_form_heading("Part", next_id, current.as_ref().map(|p| p.id));

    let mut prefill = current;
    loop {
        let candidate = prompt_part_fields(theme, prefill.as_ref())?;
        match validate_part(&candidate) {
            Ok(()) => match save_choice(theme, skip_confirm, &candidate.name)? {
                SaveChoice::Save => return Ok(Some(candidate)),
                SaveChoice::EditAgain => prefill = Some(candidate),
                SaveChoice::Discard => {
                    println!("{} Discarded.", style("○").dim());
                    return Ok(None);
                }
            },
            Err(err) => {
                println!("{} Invalid input: {}", style("✗").red(), err);
                prefill = Some(candidate);
            }
        }
    }
}

/// Run the product entry form, including the associated-parts editor.
pub fn product_form(
    theme: &ColorfulTheme,
    next_id: usize,
    current: Option<Product>,
    inventory: &Inventory,
    currency: &str,
    skip_confirm: bool,
) -> Result<Option<Product>> {
    print_form_heading("Product", next_id, current.as_ref().map(|p| p.id));

    let mut prefill = current;
    loop {
        let mut candidate = prompt_product_fields(theme, prefill.as_ref())?;
        let seed = prefill
            .as_ref()
            .map(|p| p.associated_parts.clone())
            .unwrap_or_default();
        candidate.associated_parts = edit_associated_parts(theme, seed, inventory, currency)?;

        match validate_product(&candidate) {
            Ok(()) => match save_choice(theme, skip_confirm, &candidate.name)? {
                SaveChoice::Save => return Ok(Some(candidate)),
                SaveChoice::EditAgain => prefill = Some(candidate),
                SaveChoice::Discard => {
                    println!("{} Discarded.", style("○").dim());
                    return Ok(None);
                }
            },
            Err(err) => {
                println!("{} Invalid input: {}", style("✗").red(), err);
                prefill = Some(candidate);
            }
        }
    }
}

fn print_form_heading(kind: &str, next_id: usize, existing_id: Option<usize>) {
    println!();
    match existing_id {
        Some(id) => {
            println!("{}", style(format!("Modify {}", kind)).bold());
            println!("{}", style(format!("ID: {}", id)).dim());
        }
        None => {
            println!("{}", style(format!("Add {}", kind)).bold());
            println!("{}", style(format!("ID (auto): {}", next_id)).dim());
        }
    }
}

fn save_choice(theme: &ColorfulTheme, skip_confirm: bool, name: &str) -> Result<SaveChoice> {
    if skip_confirm {
        return Ok(SaveChoice::Save);
    }
    let idx = Select::with_theme(theme)
        .with_prompt(format!("Save \"{}\"?", name))
        .items(&["Save", "Edit again", "Discard"])
        .default(0)
        .interact()
        .into_diagnostic()?;
    Ok(match idx {
        0 => SaveChoice::Save,
        1 => SaveChoice::EditAgain,
        _ => SaveChoice::Discard,
    })
}

fn prompt_part_fields(theme: &ColorfulTheme, prefill: Option<&Part>) -> Result<Part> {
    let name = prompt_text(theme, "Name", prefill.map(|p| p.name.clone()))?;
    let price: f64 = prompt_number(theme, "Price", prefill.map(|p| p.price.to_string()), None)?;
    // A blank inventory field means zero, and is left for the validator to reject.
    let stock: i32 = prompt_number(theme, "Inv", prefill.map(|p| p.stock.to_string()), Some(0))?;
    let min: i32 = prompt_number(theme, "Min", prefill.map(|p| p.min.to_string()), None)?;
    let max: i32 = prompt_number(theme, "Max", prefill.map(|p| p.max.to_string()), None)?;

    let source_default = match prefill.map(|p| &p.source) {
        Some(PartSource::Outsourced { .. }) => 1,
        _ => 0,
    };
    let source_idx = Select::with_theme(theme)
        .with_prompt("Source")
        .items(&["In-house", "Outsourced"])
        .default(source_default)
        .interact()
        .into_diagnostic()?;

    let source = if source_idx == 0 {
        let machine_default = prefill.and_then(|p| match &p.source {
            PartSource::InHouse { machine_id } => Some(machine_id.to_string()),
            PartSource::Outsourced { .. } => None,
        });
        let machine_id = prompt_number(theme, "Machine ID", machine_default, None)?;
        PartSource::InHouse { machine_id }
    } else {
        let company_default = prefill.and_then(|p| match &p.source {
            PartSource::Outsourced { company_name } => Some(company_name.clone()),
            PartSource::InHouse { .. } => None,
        });
        let company_name = prompt_text(theme, "Company Name", company_default)?;
        PartSource::Outsourced { company_name }
    };

    let mut part = Part::new(name, price, stock, min, max, source);
    if let Some(p) = prefill {
        part.id = p.id;
        part.created = p.created;
    }
    Ok(part)
}

fn prompt_product_fields(theme: &ColorfulTheme, prefill: Option<&Product>) -> Result<Product> {
    let name = prompt_text(theme, "Name", prefill.map(|p| p.name.clone()))?;
    let price: f64 = prompt_number(theme, "Price", prefill.map(|p| p.price.to_string()), None)?;
    let stock: i32 = prompt_number(theme, "Inv", prefill.map(|p| p.stock.to_string()), Some(0))?;
    let min: i32 = prompt_number(theme, "Min", prefill.map(|p| p.min.to_string()), None)?;
    let max: i32 = prompt_number(theme, "Max", prefill.map(|p| p.max.to_string()), None)?;

    let mut product = Product::new(name, price, stock, min, max);
    if let Some(p) = prefill {
        product.id = p.id;
        product.created = p.created;
    }
    Ok(product)
}

/// Loop offering add/remove of associated parts until the user is done.
/// Additions pick from a searchable view of the live part collection and
/// store a shared reference to the chosen part.
fn edit_associated_parts(
    theme: &ColorfulTheme,
    mut associated: Vec<Rc<Part>>,
    inventory: &Inventory,
    currency: &str,
) -> Result<Vec<Rc<Part>>> {
    loop {
        println!();
        println!("{}", output::associated_parts_table(&associated, currency));

        let choice = Select::with_theme(theme)
            .with_prompt("Associated parts")
            .items(&["Add part", "Remove part", "Done"])
            .default(2)
            .interact()
            .into_diagnostic()?;

        match choice {
            0 => {
                let query = prompt_text(theme, "Search parts (name or ID, empty for all)", None)?;
                let found: Vec<&Rc<Part>> = search::filter(inventory.parts(), &query).collect();
                if found.is_empty() {
                    println!("{}", output::NO_PARTS_PLACEHOLDER);
                    continue;
                }
                let labels: Vec<String> = found.iter().map(|p| part_label(p, currency)).collect();
                let picked = Select::with_theme(theme)
                    .with_prompt("Add which part?")
                    .items(&labels)
                    .default(0)
                    .interact_opt()
                    .into_diagnostic()?;
                if let Some(idx) = picked {
                    associated.push(Rc::clone(found[idx]));
                }
            }
            1 => {
                if associated.is_empty() {
                    println!("{}", output::NO_ASSOCIATED_PARTS_PLACEHOLDER);
                    continue;
                }
                let labels: Vec<String> =
                    associated.iter().map(|p| part_label(p, currency)).collect();
                let picked = Select::with_theme(theme)
                    .with_prompt("Remove which part?")
                    .items(&labels)
                    .default(0)
                    .interact_opt()
                    .into_diagnostic()?;
                if let Some(idx) = picked {
                    associated.remove(idx);
                }
            }
            _ => return Ok(associated),
        }
    }
}

/// Free-text prompt. Blank input is allowed so the validator, not the
/// prompt, decides whether a blank value is acceptable.
fn prompt_text(theme: &ColorfulTheme, label: &str, default: Option<String>) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true);
    if let Some(d) = default {
        input = input.default(d);
    }
    input.interact_text().into_diagnostic()
}

/// Numeric prompt with re-prompt on malformed input.
///
/// Parse failures are reported as "Invalid number-field input" and the
/// prompt repeats; the core validator never sees malformed numbers. When
/// `empty_fallback` is set, a blank entry yields that value instead of a
/// parse error.
fn prompt_number<T>(
    theme: &ColorfulTheme,
    label: &str,
    default: Option<String>,
    empty_fallback: Option<T>,
) -> Result<T>
where
    T: FromStr + Copy,
{
    loop {
        let mut input = Input::<String>::with_theme(theme).with_prompt(label);
        if let Some(d) = &default {
            input = input.default(d.clone());
        }
        if empty_fallback.is_some() {
            input = input.allow_empty(true);
        }
        let text = input.interact_text().into_diagnostic()?;
        let text = text.trim();

        if text.is_empty() {
            if let Some(fallback) = empty_fallback {
                return Ok(fallback);
            }
        }
        match text.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!(
                "{} Invalid number-field input: {:?}",
                style("✗").red(),
                text
            ),
        }
    }
}
