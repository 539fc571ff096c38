use clap::Parser;
use schemekit::{init_logging, run, CliArgs, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::debug!("schemekit {} built {}", VERSION, BUILD_DATE);

    let args = CliArgs::parse();
    let summary = run(&args)?;
    print!("{}", summary);

    if !summary.report.is_clean() {
        std::process::exit(2);
    }
    Ok(())
}
