use clap::Parser;
use pblockgen_cli::run;
use pblockgen_floorplan::config::SplitConfig;
use pblockgen_floorplan::partition::RowSplitter;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pblocks_u200",
    about = "Defines a grid of Pblocks for the xcu200 device."
)]
struct Args {
    /// Input device info JSON file.
    device_info: PathBuf,
    /// TOML file overriding the built-in row targets.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit Vivado Tcl commands instead of a plain listing.
    #[arg(long)]
    tcl: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    clilog::init_stderr_color_debug();
    let args = Args::parse();
    let cfg = match args.config {
        Some(ref path) => SplitConfig::from_file(path)?,
        None => SplitConfig::u200(),
    };
    let out = run(&args.device_info, &RowSplitter::new(cfg), args.tcl)?;
    print!("{out}");
    Ok(())
}
