//! `precofino price` command - price a product from the catalog

use console::style;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::format_amount;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::store::RecordId;
use crate::core::Catalog;

#[derive(clap::Args, Debug)]
pub struct PriceArgs {
    /// Product record id (from `precofino product list`)
    pub id: RecordId,

    /// Tax jurisdiction to price under; omit to see production cost only
    #[arg(long, short = 's')]
    pub state: Option<String>,

    /// Desired profit margin in percent
    #[arg(long, short = 'p', default_value = "0")]
    pub profit: Decimal,
}

pub fn run(args: PriceArgs, global: &GlobalOpts) -> Result<()> {
    let catalog = Catalog::open(&global.dir).into_diagnostic()?;

    let product = catalog.products().get(args.id).ok_or_else(|| {
        miette::miette!(
            "no product with id {}; run `precofino product list`",
            args.id
        )
    })?;

    let breakdown = catalog
        .price(product, args.state.as_deref(), args.profit)
        .into_diagnostic()?;

    if global.format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&breakdown).into_diagnostic()?
        );
        return Ok(());
    }

    let currency = &catalog.config().currency;

    if !global.quiet {
        println!("{}", style(format!("Price for {}", product.name)).bold());
    }

    let mut builder = Builder::default();
    builder.push_record(["Item".to_string(), "Amount".to_string()]);
    builder.push_record([
        "Labor cost".to_string(),
        format_amount(breakdown.labor_cost, currency),
    ]);
    builder.push_record([
        "Material cost".to_string(),
        format_amount(breakdown.material_cost, currency),
    ]);
    builder.push_record([
        "Total cost".to_string(),
        format_amount(breakdown.total_cost, currency),
    ]);

    if let Some(pricing) = &breakdown.final_pricing {
        builder.push_record([
            format!("Price with profit ({}%)", pricing.profit_percent),
            format_amount(pricing.price_with_profit, currency),
        ]);
        builder.push_record([
            format!(
                "Tax ({}, {}%)",
                args.state.as_deref().unwrap_or_default(),
                pricing.tax_percent
            ),
            format_amount(pricing.tax_amount, currency),
        ]);
        builder.push_record([
            "Final price".to_string(),
            format_amount(pricing.final_price, currency),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);

    if breakdown.final_pricing.is_none() && !global.quiet {
        println!(
            "No tax jurisdiction selected; production cost only. Use {} for a final price.",
            style("--state <JURISDICTION>").yellow()
        );
    }
    Ok(())
}
