use clap::Parser;
use vapecost::{Args, init_logging, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    run(&args, std::io::stdout().lock())?;

    tracing::info!("vapecost finished");
    Ok(())
}
