use anyhow::Result;
use clap::Parser;

use repricer::cli::Cli;
use repricer::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Application error: {}", e);

            let mut source = e.source();
            while let Some(err) = source {
                tracing::error!("   Caused by: {}", err);
                source = err.source();
            }

            Err(e)
        }
    }
}
