use clap::Parser;
use larder_cli::b64::{self, B64Args};
use larder_cli::init_logging;

fn main() -> Result<(), anyhow::Error> {
    let args = B64Args::parse();
    init_logging(args.verbose);
    b64::run(&args)?;
    Ok(())
}
