//! `precofino product` command - product and bill-of-materials management

use std::collections::BTreeMap;

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;

use crate::cli::helpers::{parse_usage_entry, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::store::RecordId;
use crate::core::Catalog;
use crate::entities::Product;

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// Add a product
    Add(AddArgs),

    /// List products with their record ids
    List,

    /// Show a product's bill of materials
    Show(ShowArgs),

    /// Update a product by record id
    Set(SetArgs),

    /// Remove a product by record id
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Product name
    pub name: String,

    /// Labor usage as NAME=HOURS (repeatable)
    #[arg(long, short = 'l', value_name = "NAME=HOURS", value_parser = parse_usage_entry)]
    pub labor: Vec<(String, Decimal)>,

    /// Material usage as NAME=QUANTITY (repeatable)
    #[arg(long, short = 'm', value_name = "NAME=QUANTITY", value_parser = parse_usage_entry)]
    pub material: Vec<(String, Decimal)>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Record id (from `precofino product list`)
    pub id: RecordId,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Record id (from `precofino product list`)
    pub id: RecordId,

    /// New name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Replace labor usage with NAME=HOURS entries (repeatable)
    #[arg(long, short = 'l', value_name = "NAME=HOURS", value_parser = parse_usage_entry)]
    pub labor: Option<Vec<(String, Decimal)>>,

    /// Replace material usage with NAME=QUANTITY entries (repeatable)
    #[arg(long, short = 'm', value_name = "NAME=QUANTITY", value_parser = parse_usage_entry)]
    pub material: Option<Vec<(String, Decimal)>>,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Record id (from `precofino product list`)
    pub id: RecordId,
}

pub fn run(cmd: ProductCommands, global: &GlobalOpts) -> Result<()> {
    let mut catalog = Catalog::open(&global.dir).into_diagnostic()?;
    match cmd {
        ProductCommands::Add(args) => run_add(args, &mut catalog, global),
        ProductCommands::List => run_list(&catalog, global),
        ProductCommands::Show(args) => run_show(args, &catalog, global),
        ProductCommands::Set(args) => run_set(args, &mut catalog, global),
        ProductCommands::Rm(args) => run_rm(args, &mut catalog, global),
    }
}

fn usage_map(entries: Vec<(String, Decimal)>) -> BTreeMap<String, Decimal> {
    entries.into_iter().collect()
}

fn run_add(args: AddArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    let product = Product {
        name: args.name.clone(),
        labor_usage: usage_map(args.labor),
        material_usage: usage_map(args.material),
    };
    let id = catalog.products_mut().add(product).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Created product {} ({})",
            style("✓").green(),
            style(&args.name).yellow(),
            style(format!("id {}", id)).cyan()
        );
    }
    Ok(())
}

fn run_list(catalog: &Catalog, global: &GlobalOpts) -> Result<()> {
    let rows = catalog.products().rows();

    if global.format == OutputFormat::Json {
        let records: Vec<_> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "id": row.id.value(),
                    "name": row.entity.name,
                    "labor_usage": row.entity.labor_usage,
                    "material_usage": row.entity.material_usage,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&records).into_diagnostic()?
        );
        return Ok(());
    }

    if rows.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    println!(
        "{:<6} {:<28} {:>8} {:>10}",
        style("ID").bold(),
        style("NAME").bold(),
        style("LABOR").bold(),
        style("MATERIALS").bold()
    );
    println!("{}", "-".repeat(56));
    for row in rows {
        println!(
            "{:<6} {:<28} {:>8} {:>10}",
            style(row.id).cyan(),
            truncate_str(&row.entity.name, 26),
            row.entity.labor_usage.len(),
            row.entity.material_usage.len()
        );
    }

    if !global.quiet {
        println!();
        println!(
            "{} product(s). Use {} for the full bill of materials.",
            style(rows.len()).cyan(),
            style("precofino product show <ID>").yellow()
        );
    }
    Ok(())
}

fn run_show(args: ShowArgs, catalog: &Catalog, global: &GlobalOpts) -> Result<()> {
    let product = catalog.products().get(args.id).ok_or_else(|| {
        miette::miette!(
            "no product with id {}; run `precofino product list`",
            args.id
        )
    })?;

    if global.format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(product).into_diagnostic()?
        );
        return Ok(());
    }

    println!("{}", style(&product.name).bold().yellow());
    println!("{}", "-".repeat(40));

    println!("{}", style("Labor").bold());
    if product.labor_usage.is_empty() {
        println!("  (none)");
    }
    for (name, hours) in &product.labor_usage {
        println!("  {:<26} {:>8} h", name, hours);
    }

    println!("{}", style("Materials").bold());
    if product.material_usage.is_empty() {
        println!("  (none)");
    }
    for (name, quantity) in &product.material_usage {
        println!("  {:<26} {:>8}", name, quantity);
    }
    Ok(())
}

fn run_set(args: SetArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    let current = catalog
        .products()
        .get(args.id)
        .ok_or_else(|| {
            miette::miette!(
                "no product with id {}; run `precofino product list`",
                args.id
            )
        })?
        .clone();

    let updated = Product {
        name: args.name.unwrap_or(current.name),
        labor_usage: args.labor.map(usage_map).unwrap_or(current.labor_usage),
        material_usage: args
            .material
            .map(usage_map)
            .unwrap_or(current.material_usage),
    };
    catalog
        .products_mut()
        .update(args.id, updated.clone())
        .into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Updated product {} ({})",
            style("✓").green(),
            style(&updated.name).yellow(),
            style(format!("id {}", args.id)).cyan()
        );
    }
    Ok(())
}

fn run_rm(args: RmArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    catalog.products_mut().remove(args.id).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Removed product {}",
            style("✓").green(),
            style(format!("id {}", args.id)).cyan()
        );
    }
    Ok(())
}
