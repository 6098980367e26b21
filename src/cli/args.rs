//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, init::InitArgs, labor::LaborCommands, material::MaterialCommands,
    price::PriceArgs, product::ProductCommands, tax::TaxCommands,
};

#[derive(Parser)]
#[command(name = "precofino")]
#[command(author, version, about = "Sale-price calculator for small production shops")]
#[command(
    long_about = "Keeps labor resources, raw materials, tax rates, and products as plain JSON files and derives a final sale price from a product's bill of materials, a profit margin, and a tax jurisdiction."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Catalog directory
    #[arg(long, short = 'd', global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Auto,
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a catalog directory
    Init(InitArgs),

    /// Labor resource management
    #[command(subcommand)]
    Labor(LaborCommands),

    /// Raw material management
    #[command(subcommand)]
    Material(MaterialCommands),

    /// Tax rate management
    #[command(subcommand)]
    Tax(TaxCommands),

    /// Product management (bill of materials)
    #[command(subcommand)]
    Product(ProductCommands),

    /// Price a product under a profit margin and tax jurisdiction
    Price(PriceArgs),

    /// Record counts per store
    Status,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
