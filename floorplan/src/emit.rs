use itertools::Itertools;
use std::fmt::Write;

use crate::compact::CompactedPblock;

/// `<name> -> { <range> <range> ... }`, one pblock per line.
pub fn emit_listing(pblocks: &[CompactedPblock]) -> String {
    let mut res = String::new();
    for pblock in pblocks.iter().filter(|pb| !pb.ranges.is_empty()) {
        writeln!(
            res,
            "{name} -> {{ {ranges} }}",
            name = pblock.name,
            ranges = pblock.ranges.iter().join(" ")
        )
        .unwrap();
    }
    res
}

/// Vivado Tcl commands creating every pblock.
pub fn emit_tcl(pblocks: &[CompactedPblock]) -> String {
    let mut res = String::new();
    for pblock in pblocks.iter().filter(|pb| !pb.ranges.is_empty()) {
        let name = &pblock.name;
        writeln!(res, "startgroup").unwrap();
        writeln!(res, "create_pblock {name}").unwrap();
        writeln!(
            res,
            "resize_pblock {name} -add {{ {ranges} }}",
            ranges = pblock.ranges.iter().join(" ")
        )
        .unwrap();
        writeln!(res, "endgroup").unwrap();
        writeln!(res).unwrap();
    }
    res
}
