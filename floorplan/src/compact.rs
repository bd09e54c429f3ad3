use pblockgen_types::range::CompactedRange;
use pblockgen_types::site::{Site, SiteError};
use std::collections::BTreeMap;

use crate::pblock::{Pblock, PblockSet};

/// A pblock reduced to one bounding box per site kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompactedPblock {
    pub name: String,
    /// Sorted by kind.
    pub ranges: Vec<CompactedRange>,
}

pub fn compact_sites<'a>(sites: impl IntoIterator<Item = &'a Site>) -> Vec<CompactedRange> {
    let mut ranges: BTreeMap<&str, CompactedRange> = BTreeMap::new();
    for site in sites {
        ranges
            .entry(site.kind.as_str())
            .and_modify(|range| range.include(site))
            .or_insert_with(|| CompactedRange::from_site(site));
    }
    ranges.into_values().collect()
}

pub fn compact(pblock: &Pblock) -> CompactedPblock {
    CompactedPblock {
        name: pblock.name.clone(),
        ranges: compact_sites(&pblock.sites),
    }
}

pub fn compact_set(pblocks: &PblockSet) -> Vec<CompactedPblock> {
    pblocks
        .iter()
        .map(|pblock| {
            let res = compact(pblock);
            clilog::info!(
                "{}: {} sites in {} ranges",
                pblock.name,
                pblock.sites.len(),
                res.ranges.len()
            );
            res
        })
        .collect()
}

/// Compacts a list of raw site names.
pub fn compact_names(name: &str, sites: &[&str]) -> Result<CompactedPblock, SiteError> {
    let sites: Vec<Site> = sites
        .iter()
        .map(|s| s.parse())
        .collect::<Result<_, _>>()?;
    Ok(CompactedPblock {
        name: name.to_string(),
        ranges: compact_sites(&sites),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_single_kind() {
        let pb = compact_names("p", &["SLICE_X0Y0", "SLICE_X0Y5", "SLICE_X3Y2"]).unwrap();
        assert_eq!(pb.ranges.len(), 1);
        assert_eq!(pb.ranges[0].to_string(), "SLICE_X0Y0:SLICE_X3Y5");
    }

    #[test]
    fn test_kinds_sorted() {
        let pb = compact_names(
            "p",
            &[
                "URAM288_X0Y0",
                "SLICE_X4Y0",
                "RAMB36_X1Y2",
                "SLICE_X9Y59",
                "RAMB18_X1Y4",
                "RAMB18_X1Y5",
                "DSP48E2_X0Y3",
                // Discontiguous column group; the box spans the gap.
                "URAM288_X1Y15",
            ],
        )
        .unwrap();
        let ranges: Vec<String> = pb.ranges.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            ranges,
            [
                "DSP48E2_X0Y3:DSP48E2_X0Y3",
                "RAMB18_X1Y4:RAMB18_X1Y5",
                "RAMB36_X1Y2:RAMB36_X1Y2",
                "SLICE_X4Y0:SLICE_X9Y59",
                "URAM288_X0Y0:URAM288_X1Y15",
            ]
        );
    }

    #[test]
    fn test_round_trip_bounds() {
        let names = ["SLICE_X7Y3", "SLICE_X2Y40", "SLICE_X5Y1", "SLICE_X3Y12"];
        let pb = compact_names("p", &names).unwrap();
        let range: CompactedRange = pb.ranges[0].to_string().parse().unwrap();
        let sites: Vec<Site> = names.iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(range.min_x, sites.iter().map(|s| s.x).min().unwrap());
        assert_eq!(range.max_x, sites.iter().map(|s| s.x).max().unwrap());
        assert_eq!(range.min_y, sites.iter().map(|s| s.y).min().unwrap());
        assert_eq!(range.max_y, sites.iter().map(|s| s.y).max().unwrap());
    }

    #[test]
    fn test_malformed() {
        assert_matches!(
            compact_names("p", &["SLICE_X0Y0", "SLICE0"]),
            Err(SiteError { name }) if name == "SLICE0"
        );
    }

    #[test]
    fn test_empty() {
        let pb = compact(&Pblock::new("p"));
        assert!(pb.ranges.is_empty());
    }
}
