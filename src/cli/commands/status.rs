//! `precofino status` command - catalog summary

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Catalog;

pub fn run(global: &GlobalOpts) -> Result<()> {
    let catalog = Catalog::open(&global.dir).into_diagnostic()?;

    if global.format == OutputFormat::Json {
        let status = serde_json::json!({
            "labor": catalog.labor().len(),
            "materials": catalog.materials().len(),
            "taxes": catalog.taxes().len(),
            "products": catalog.products().len(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&status).into_diagnostic()?
        );
        return Ok(());
    }

    println!("{}", style("Catalog Status").bold().underlined());
    println!("{}", "═".repeat(32));
    println!(
        "  {:<18} {}",
        "Labor resources",
        style(catalog.labor().len()).cyan()
    );
    println!(
        "  {:<18} {}",
        "Raw materials",
        style(catalog.materials().len()).cyan()
    );
    println!(
        "  {:<18} {}",
        "Tax rates",
        style(catalog.taxes().len()).cyan()
    );
    println!(
        "  {:<18} {}",
        "Products",
        style(catalog.products().len()).cyan()
    );
    println!("{}", "═".repeat(32));

    if catalog.taxes().is_empty() && !global.quiet {
        println!(
            "No tax rates yet: {} prices stop at production cost.",
            style("precofino price").yellow()
        );
    }
    Ok(())
}
