//! `precofino init` command - initialize a catalog directory

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::config::CONFIG_FILE;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config.json with defaults
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let dir = &global.dir;

    if !dir.exists() {
        std::fs::create_dir_all(dir).into_diagnostic()?;
        if !global.quiet {
            println!(
                "{} Created directory {}",
                style("✓").green(),
                style(dir.display()).cyan()
            );
        }
    }

    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() && !args.force {
        println!(
            "{} Catalog already initialized at {}",
            style("!").yellow(),
            style(dir.display()).cyan()
        );
        println!();
        println!(
            "Use {} to reset the configuration",
            style("precofino init --force").yellow()
        );
        return Ok(());
    }

    Config::default().write(dir).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Initialized catalog at {}",
            style("✓").green(),
            style(dir.display()).cyan()
        );
        println!("   {}", style(config_path.display()).dim());
        println!();
        println!("Next steps:");
        println!(
            "  {} Register a labor resource",
            style("precofino labor add 'Welder' 50").yellow()
        );
        println!(
            "  {} Register a raw material",
            style("precofino material add 'Steel' 10").yellow()
        );
        println!(
            "  {} Define a product's bill of materials",
            style("precofino product add 'Gate' -l Welder=2 -m Steel=3").yellow()
        );
        println!(
            "  {} Derive its sale price",
            style("precofino price 1 --state CA --profit 20").yellow()
        );
    }
    Ok(())
}
