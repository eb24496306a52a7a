use anyhow::Result;
use clap::Parser;
use piatto_cli::cli::{Cli, init_logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    cli.command.run()
}
