use clap::Parser;
use larder_cli::ini_dump::{self, IniDumpArgs, RunError};
use larder_cli::init_logging;
use tracing::warn;

fn main() -> Result<(), anyhow::Error> {
    let args = IniDumpArgs::parse();
    init_logging(args.verbose);
    let summary = match ini_dump::run(&args) {
        Ok(summary) => summary,
        Err(RunError::Open(err)) => return Err(err),
        Err(err @ RunError::Dump(_)) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    };
    if summary.bytes == 0 {
        warn!(path = %args.path.display(), "nothing parsed");
        std::process::exit(2);
    }
    Ok(())
}
