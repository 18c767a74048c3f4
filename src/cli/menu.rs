//! Interactive session loop: main menu and the parts/products submenus
//!
//! One `Session` owns the inventory for the lifetime of the process; every
//! submenu and form receives it by reference. Cancelling any flow returns to
//! the enclosing menu without touching the inventory.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::args::GlobalOpts;
use crate::cli::forms;
use crate::cli::helpers::{part_label, product_label};
use crate::cli::output;
use crate::core::config::Config;
use crate::core::inventory::Inventory;
use crate::core::search;

/// Launch the interactive editor and run it until the user exits.
pub fn run(global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let session = Session {
        inventory: Inventory::new(),
        theme: ColorfulTheme::default(),
        currency: config.currency().to_string(),
        skip_confirm: global.yes || config.skip_confirm(),
        quiet: global.quiet,
    };
    session.run()
}

struct Session {
    inventory: Inventory,
    theme: ColorfulTheme,
    currency: String,
    skip_confirm: bool,
    quiet: bool,
}

impl Session {
    fn run(mut self) -> Result<()> {
        if !self.quiet {
            println!("{}", style("Inventory Management System").bold().cyan());
            println!("{}", style("─".repeat(50)).dim());
        }

        loop {
            println!();
            let choice = Select::with_theme(&self.theme)
                .with_prompt("Main menu")
                .items(&["Parts", "Products", "Export inventory", "Exit"])
                .default(0)
                .interact()
                .into_diagnostic()?;

            match choice {
                0 => self.parts_menu()?,
                1 => self.products_menu()?,
                2 => self.export_menu()?,
                _ => {
                    if self.confirm("Exit?", true)? {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn parts_menu(&mut self) -> Result<()> {
        loop {
            println!();
            println!("{}", output::parts_table(self.inventory.parts(), &self.currency));

            let choice = Select::with_theme(&self.theme)
                .with_prompt("Parts")
                .items(&["Search", "Add", "Modify", "Delete", "Back"])
                .default(4)
                .interact()
                .into_diagnostic()?;

            match choice {
                0 => self.search_parts()?,
                1 => self.add_part()?,
                2 => self.modify_part()?,
                3 => self.delete_part()?,
                _ => return Ok(()),
            }
        }
    }

    fn products_menu(&mut self) -> Result<()> {
        loop {
            println!();
            println!(
                "{}",
                output::products_table(self.inventory.products(), &self.currency)
            );

            let choice = Select::with_theme(&self.theme)
                .with_prompt("Products")
                .items(&["Search", "Add", "Modify", "Delete", "Back"])
                .default(4)
                .interact()
                .into_diagnostic()?;

            match choice {
                0 => self.search_products()?,
                1 => self.add_product()?,
                2 => self.modify_product()?,
                3 => self.delete_product()?,
                _ => return Ok(()),
            }
        }
    }

    fn search_parts(&self) -> Result<()> {
        let query = self.search_query()?;
        let matches: Vec<_> = search::filter(self.inventory.parts(), &query).collect();
        println!();
        println!("{}", output::parts_table(matches, &self.currency));
        Ok(())
    }

    fn search_products(&self) -> Result<()> {
        let query = self.search_query()?;
        let matches: Vec<_> = search::filter(self.inventory.products(), &query).collect();
        println!();
        println!("{}", output::products_table(matches, &self.currency));
        Ok(())
    }

    fn search_query(&self) -> Result<String> {
        Input::with_theme(&self.theme)
            .with_prompt("Search (name or ID, empty for all)")
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()
    }

    fn add_part(&mut self) -> Result<()> {
        let next_id = self.inventory.part_count();
        if let Some(part) = forms::part_form(&self.theme, next_id, None, self.skip_confirm)? {
            let committed = self.inventory.add_part(part);
            println!(
                "{} Created part {}: {}",
                style("✓").green(),
                committed.id,
                committed.name
            );
        }
        Ok(())
    }

    fn modify_part(&mut self) -> Result<()> {
        if self.inventory.part_count() == 0 {
            println!("There are no parts to modify.");
            return Ok(());
        }
        let Some(idx) = self.select_part("Modify which part?")? else {
            return Ok(());
        };

        let current = self.inventory.parts()[idx].as_ref().clone();
        let next_id = self.inventory.part_count();
        if let Some(part) =
            forms::part_form(&self.theme, next_id, Some(current), self.skip_confirm)?
        {
            let id = part.id;
            let name = part.name.clone();
            self.inventory.modify_part(part);
            println!("{} Updated part {}: {}", style("✓").green(), id, name);
        }
        Ok(())
    }

    fn delete_part(&mut self) -> Result<()> {
        if self.inventory.part_count() == 0 {
            println!("There are no parts to delete.");
            return Ok(());
        }
        let Some(idx) = self.select_part("Delete which part?")? else {
            return Ok(());
        };

        let id = self.inventory.parts()[idx].id;
        let name = self.inventory.parts()[idx].name.clone();
        if self.confirm(&format!("Delete {}?", name), false)? && self.inventory.delete_part(id) {
            println!("{} Deleted part {}: {}", style("✓").green(), id, name);
        }
        Ok(())
    }

    fn add_product(&mut self) -> Result<()> {
        if self.inventory.part_count() == 0 {
            println!("There are no parts available to add to a product.");
            return Ok(());
        }
        let next_id = self.inventory.product_count();
        if let Some(product) = forms::product_form(
            &self.theme,
            next_id,
            None,
            &self.inventory,
            &self.currency,
            self.skip_confirm,
        )? {
            let committed = self.inventory.add_product(product);
            println!(
                "{} Created product {}: {}",
                style("✓").green(),
                committed.id,
                committed.name
            );
        }
        Ok(())
    }

    fn modify_product(&mut self) -> Result<()> {
        if self.inventory.part_count() == 0 {
            println!("There are no parts available to add to a product.");
            return Ok(());
        }
        if self.inventory.product_count() == 0 {
            println!("There are no products to modify.");
            return Ok(());
        }
        let Some(idx) = self.select_product("Modify which product?")? else {
            return Ok(());
        };

        let current = self.inventory.products()[idx].clone();
        let next_id = self.inventory.product_count();
        if let Some(product) = forms::product_form(
            &self.theme,
            next_id,
            Some(current),
            &self.inventory,
            &self.currency,
            self.skip_confirm,
        )? {
            let id = product.id;
            let name = product.name.clone();
            self.inventory.modify_product(product);
            println!("{} Updated product {}: {}", style("✓").green(), id, name);
        }
        Ok(())
    }

    fn delete_product(&mut self) -> Result<()> {
        if self.inventory.product_count() == 0 {
            println!("There are no products to delete.");
            return Ok(());
        }
        let Some(idx) = self.select_product("Delete which product?")? else {
            return Ok(());
        };

        // The guard runs before any confirmation is offered.
        if !self
            .inventory
            .can_delete_product(&self.inventory.products()[idx])
        {
            println!("{} Product has associated parts.", style("✗").red());
            return Ok(());
        }

        let id = self.inventory.products()[idx].id;
        let name = self.inventory.products()[idx].name.clone();
        if self.confirm(&format!("Delete {}?", name), false)? && self.inventory.delete_product(id)
        {
            println!("{} Deleted product {}: {}", style("✓").green(), id, name);
        }
        Ok(())
    }

    fn export_menu(&self) -> Result<()> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Export format")
            .items(&["JSON", "CSV"])
            .default(0)
            .interact()
            .into_diagnostic()?;

        let rendered = match choice {
            0 => output::export_json(&self.inventory)?,
            _ => output::export_csv(&self.inventory)?,
        };
        println!("{}", rendered);
        Ok(())
    }

    /// Pick a part by position in the current collection; `None` on escape.
    fn select_part(&self, prompt: &str) -> Result<Option<usize>> {
        let labels: Vec<String> = self
            .inventory
            .parts()
            .iter()
            .map(|p| part_label(p, &self.currency))
            .collect();
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact_opt()
            .into_diagnostic()
    }

    /// Pick a product by position in the current collection; `None` on escape.
    fn select_product(&self, prompt: &str) -> Result<Option<usize>> {
        let labels: Vec<String> = self
            .inventory
            .products()
            .iter()
            .map(|p| product_label(p, &self.currency))
            .collect();
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact_opt()
            .into_diagnostic()
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.skip_confirm {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .into_diagnostic()
    }
}
