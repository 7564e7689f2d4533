use anyhow::Result;
use clap::Parser;
use daybook::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
