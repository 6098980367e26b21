use clap::Parser;
use miette::Result;
use precofino::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Init(args) => precofino::cli::commands::init::run(args, &global),
        Commands::Labor(cmd) => precofino::cli::commands::labor::run(cmd, &global),
        Commands::Material(cmd) => precofino::cli::commands::material::run(cmd, &global),
        Commands::Tax(cmd) => precofino::cli::commands::tax::run(cmd, &global),
        Commands::Product(cmd) => precofino::cli::commands::product::run(cmd, &global),
        Commands::Price(args) => precofino::cli::commands::price::run(args, &global),
        Commands::Status => precofino::cli::commands::status::run(&global),
        Commands::Completions(args) => precofino::cli::commands::completions::run(args),
    }
}
