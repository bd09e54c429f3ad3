use clap::Parser;
use pblockgen_cli::run;
use pblockgen_floorplan::config::CutoffConfig;
use pblockgen_floorplan::partition::ShellCutoff;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pblocks_u280",
    about = "Defines a single non-shell Pblock for the xcu280 device."
)]
struct Args {
    /// Input device info JSON file.
    device_info: PathBuf,
    /// TOML file overriding the shell marker column.
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
        Some(ref path) => CutoffConfig::from_file(path)?,
        None => CutoffConfig::u280(),
    };
    let out = run(&args.device_info, &ShellCutoff::new(cfg), args.tcl)?;
    print!("{out}");
    Ok(())
}
