use pblockgen_floorplan::compact::compact_set;
use pblockgen_floorplan::composition::{DeviceComposition, read_device_info};
use pblockgen_floorplan::emit::{emit_listing, emit_tcl};
use pblockgen_floorplan::partition::Partitioner;
use std::error::Error;
use std::path::Path;

/// Runs the whole flow and returns the text to print.  Nothing is returned
/// unless every step succeeded.
pub fn run(
    device_info: &Path,
    partitioner: &dyn Partitioner,
    tcl: bool,
) -> Result<String, Box<dyn Error>> {
    let composition = read_device_info(device_info)?;
    let comp = DeviceComposition::from_json(&composition)?;
    clilog::info!(
        "loaded {} SLRs from {}",
        comp.num_slrs(),
        device_info.display()
    );
    let pblocks = partitioner.partition(&comp);
    let compacted = compact_set(&pblocks);
    Ok(if tcl {
        emit_tcl(&compacted)
    } else {
        emit_listing(&compacted)
    })
}
