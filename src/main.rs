use clap::Parser;
use miette::Result;
use evc::cli::{Cli, Commands};
use evc::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Encode(args) => evc::cli::encode::run(args, &printer)?,
        Commands::Halftone(args) => evc::cli::halftone::run(args, &printer)?,
        Commands::Reveal(args) => evc::cli::reveal::run(args, &printer)?,
        Commands::Completions(args) => evc::cli::completions::run(args)?,
    }

    Ok(())
}
