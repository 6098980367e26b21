//! `precofino material` command - raw material management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;

use crate::cli::helpers::{format_amount, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::store::RecordId;
use crate::core::Catalog;
use crate::entities::RawMaterial;

#[derive(Subcommand, Debug)]
pub enum MaterialCommands {
    /// Add a raw material
    Add(AddArgs),

    /// List raw materials with their record ids
    List,

    /// Update a raw material by record id
    Set(SetArgs),

    /// Remove a raw material by record id
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Material name
    pub name: String,

    /// Cost per unit
    pub unit_cost: Decimal,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Record id (from `precofino material list`)
    pub id: RecordId,

    /// New name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// New cost per unit
    #[arg(long, short = 'c')]
    pub unit_cost: Option<Decimal>,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Record id (from `precofino material list`)
    pub id: RecordId,
}

pub fn run(cmd: MaterialCommands, global: &GlobalOpts) -> Result<()> {
    let mut catalog = Catalog::open(&global.dir).into_diagnostic()?;
    match cmd {
        MaterialCommands::Add(args) => run_add(args, &mut catalog, global),
        MaterialCommands::List => run_list(&catalog, global),
        MaterialCommands::Set(args) => run_set(args, &mut catalog, global),
        MaterialCommands::Rm(args) => run_rm(args, &mut catalog, global),
    }
}

fn run_add(args: AddArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    let id = catalog
        .materials_mut()
        .add(RawMaterial::new(args.name.clone(), args.unit_cost))
        .into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Created raw material {} ({})",
            style("✓").green(),
            style(&args.name).yellow(),
            style(format!("id {}", id)).cyan()
        );
    }
    Ok(())
}

fn run_list(catalog: &Catalog, global: &GlobalOpts) -> Result<()> {
    let rows = catalog.materials().rows();

    if global.format == OutputFormat::Json {
        let records: Vec<_> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "id": row.id.value(),
                    "name": row.entity.name,
                    "unit_cost": row.entity.unit_cost,
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
        println!("No raw materials found.");
        return Ok(());
    }

    let currency = &catalog.config().currency;
    println!(
        "{:<6} {:<28} {:>14}",
        style("ID").bold(),
        style("NAME").bold(),
        style("COST/UNIT").bold()
    );
    println!("{}", "-".repeat(50));
    for row in rows {
        println!(
            "{:<6} {:<28} {:>14}",
            style(row.id).cyan(),
            truncate_str(&row.entity.name, 26),
            format_amount(row.entity.unit_cost, currency)
        );
    }

    if !global.quiet {
        println!();
        println!(
            "{} raw material(s). Reference records by the ID column.",
            style(rows.len()).cyan()
        );
    }
    Ok(())
}

fn run_set(args: SetArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    let current = catalog
        .materials()
        .get(args.id)
        .ok_or_else(|| {
            miette::miette!(
                "no raw material with id {}; run `precofino material list`",
                args.id
            )
        })?
        .clone();

    let updated = RawMaterial::new(
        args.name.unwrap_or(current.name),
        args.unit_cost.unwrap_or(current.unit_cost),
    );
    catalog
        .materials_mut()
        .update(args.id, updated.clone())
        .into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Updated raw material {} ({})",
            style("✓").green(),
            style(&updated.name).yellow(),
            style(format!("id {}", args.id)).cyan()
        );
    }
    Ok(())
}

fn run_rm(args: RmArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    catalog.materials_mut().remove(args.id).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Removed raw material {}",
            style("✓").green(),
            style(format!("id {}", args.id)).cyan()
        );
    }
    Ok(())
}
