//! `precofino labor` command - labor resource management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;

use crate::cli::helpers::{format_amount, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::store::RecordId;
use crate::core::Catalog;
use crate::entities::LaborResource;

#[derive(Subcommand, Debug)]
pub enum LaborCommands {
    /// Add a labor resource
    Add(AddArgs),

    /// List labor resources with their record ids
    List,

    /// Update a labor resource by record id
    Set(SetArgs),

    /// Remove a labor resource by record id
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Resource name
    pub name: String,

    /// Cost per hour
    pub hourly_cost: Decimal,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Record id (from `precofino labor list`)
    pub id: RecordId,

    /// New name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// New cost per hour
    #[arg(long, short = 'c')]
    pub hourly_cost: Option<Decimal>,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Record id (from `precofino labor list`)
    pub id: RecordId,
}

pub fn run(cmd: LaborCommands, global: &GlobalOpts) -> Result<()> {
    let mut catalog = Catalog::open(&global.dir).into_diagnostic()?;
    match cmd {
        LaborCommands::Add(args) => run_add(args, &mut catalog, global),
        LaborCommands::List => run_list(&catalog, global),
        LaborCommands::Set(args) => run_set(args, &mut catalog, global),
        LaborCommands::Rm(args) => run_rm(args, &mut catalog, global),
    }
}

fn run_add(args: AddArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    let id = catalog
        .labor_mut()
        .add(LaborResource::new(args.name.clone(), args.hourly_cost))
        .into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Created labor resource {} ({})",
            style("✓").green(),
            style(&args.name).yellow(),
            style(format!("id {}", id)).cyan()
        );
    }
    Ok(())
}

fn run_list(catalog: &Catalog, global: &GlobalOpts) -> Result<()> {
    let rows = catalog.labor().rows();

    if global.format == OutputFormat::Json {
        let records: Vec<_> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "id": row.id.value(),
                    "name": row.entity.name,
                    "hourly_cost": row.entity.hourly_cost,
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
        println!("No labor resources found.");
        return Ok(());
    }

    let currency = &catalog.config().currency;
    println!(
        "{:<6} {:<28} {:>14}",
        style("ID").bold(),
        style("NAME").bold(),
        style("COST/HOUR").bold()
    );
    println!("{}", "-".repeat(50));
    for row in rows {
        println!(
            "{:<6} {:<28} {:>14}",
            style(row.id).cyan(),
            truncate_str(&row.entity.name, 26),
            format_amount(row.entity.hourly_cost, currency)
        );
    }

    if !global.quiet {
        println!();
        println!(
            "{} labor resource(s). Reference records by the ID column.",
            style(rows.len()).cyan()
        );
    }
    Ok(())
}

fn run_set(args: SetArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    let current = catalog
        .labor()
        .get(args.id)
        .ok_or_else(|| {
            miette::miette!(
                "no labor resource with id {}; run `precofino labor list`",
                args.id
            )
        })?
        .clone();

    let updated = LaborResource::new(
        args.name.unwrap_or(current.name),
        args.hourly_cost.unwrap_or(current.hourly_cost),
    );
    catalog
        .labor_mut()
        .update(args.id, updated.clone())
        .into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Updated labor resource {} ({})",
            style("✓").green(),
            style(&updated.name).yellow(),
            style(format!("id {}", args.id)).cyan()
        );
    }
    Ok(())
}

fn run_rm(args: RmArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    catalog.labor_mut().remove(args.id).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Removed labor resource {}",
            style("✓").green(),
            style(format!("id {}", args.id)).cyan()
        );
    }
    Ok(())
}
