//! `precofino tax` command - tax rate management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;

use crate::cli::helpers::truncate_str;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::store::RecordId;
use crate::core::Catalog;
use crate::entities::TaxRate;

#[derive(Subcommand, Debug)]
pub enum TaxCommands {
    /// Add a tax rate
    Add(AddArgs),

    /// List tax rates with their record ids
    List,

    /// Update a tax rate by record id
    Set(SetArgs),

    /// Remove a tax rate by record id
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Jurisdiction name (state)
    pub jurisdiction: String,

    /// Tax percentage
    pub percent: Decimal,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Record id (from `precofino tax list`)
    pub id: RecordId,

    /// New jurisdiction name
    #[arg(long, short = 'j')]
    pub jurisdiction: Option<String>,

    /// New tax percentage
    #[arg(long, short = 'p')]
    pub percent: Option<Decimal>,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Record id (from `precofino tax list`)
    pub id: RecordId,
}

pub fn run(cmd: TaxCommands, global: &GlobalOpts) -> Result<()> {
    let mut catalog = Catalog::open(&global.dir).into_diagnostic()?;
    match cmd {
        TaxCommands::Add(args) => run_add(args, &mut catalog, global),
        TaxCommands::List => run_list(&catalog, global),
        TaxCommands::Set(args) => run_set(args, &mut catalog, global),
        TaxCommands::Rm(args) => run_rm(args, &mut catalog, global),
    }
}

fn run_add(args: AddArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    let id = catalog
        .taxes_mut()
        .add(TaxRate::new(args.jurisdiction.clone(), args.percent))
        .into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Created tax rate {} ({})",
            style("✓").green(),
            style(&args.jurisdiction).yellow(),
            style(format!("id {}", id)).cyan()
        );
    }
    Ok(())
}

fn run_list(catalog: &Catalog, global: &GlobalOpts) -> Result<()> {
    let rows = catalog.taxes().rows();

    if global.format == OutputFormat::Json {
        let records: Vec<_> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "id": row.id.value(),
                    "jurisdiction": row.entity.jurisdiction,
                    "percent": row.entity.percent,
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
        println!("No tax rates found.");
        return Ok(());
    }

    println!(
        "{:<6} {:<28} {:>10}",
        style("ID").bold(),
        style("JURISDICTION").bold(),
        style("PERCENT").bold()
    );
    println!("{}", "-".repeat(46));
    for row in rows {
        println!(
            "{:<6} {:<28} {:>9}%",
            style(row.id).cyan(),
            truncate_str(&row.entity.jurisdiction, 26),
            row.entity.percent
        );
    }

    if !global.quiet {
        println!();
        println!(
            "{} tax rate(s). Reference records by the ID column.",
            style(rows.len()).cyan()
        );
    }
    Ok(())
}

fn run_set(args: SetArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    let current = catalog
        .taxes()
        .get(args.id)
        .ok_or_else(|| {
            miette::miette!("no tax rate with id {}; run `precofino tax list`", args.id)
        })?
        .clone();

    let updated = TaxRate::new(
        args.jurisdiction.unwrap_or(current.jurisdiction),
        args.percent.unwrap_or(current.percent),
    );
    catalog
        .taxes_mut()
        .update(args.id, updated.clone())
        .into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Updated tax rate {} ({})",
            style("✓").green(),
            style(&updated.jurisdiction).yellow(),
            style(format!("id {}", args.id)).cyan()
        );
    }
    Ok(())
}

fn run_rm(args: RmArgs, catalog: &mut Catalog, global: &GlobalOpts) -> Result<()> {
    catalog.taxes_mut().remove(args.id).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Removed tax rate {}",
            style("✓").green(),
            style(format!("id {}", args.id)).cyan()
        );
    }
    Ok(())
}
