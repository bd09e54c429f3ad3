use pblockgen_types::site::{ResourceClass, Site};

use crate::composition::{ClockRegionRow, DeviceComposition, TileColumn};
use crate::config::{CutoffConfig, SplitConfig};
use crate::pblock::{PblockSet, Side, row_pblock_name};

pub trait Partitioner {
    fn partition(&self, comp: &DeviceComposition) -> PblockSet;
}

/// Sites of one clock region row, split into two sides.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RowSplit {
    pub left: Vec<Site>,
    pub right: Vec<Site>,
}

impl RowSplit {
    fn side_mut(&mut self, side: Side) -> &mut Vec<Site> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Splits each clock region row into a left pblock holding a fixed number of
/// memory columns and a right pblock holding the rest, up to the shell.
pub struct RowSplitter {
    pub cfg: SplitConfig,
}

impl RowSplitter {
    pub fn new(cfg: SplitConfig) -> RowSplitter {
        RowSplitter { cfg }
    }

    pub fn split_row(&self, row: &ClockRegionRow) -> RowSplit {
        let targets = self.cfg.targets(row.y);
        let mut res = RowSplit::default();
        let mut bram_cols = 0;
        let mut uram_cols = 0;
        let mut side = Side::Left;
        for (&x, region) in &row.regions {
            if x > targets.last_region_x {
                break;
            }
            let mut cols = region.tile_cols.iter();
            while let Some((&idx, col)) = cols.next() {
                res.side_mut(side).extend(col.sites.iter().cloned());
                let is_bram = col.has_class(ResourceClass::Bram);
                if is_bram || col.has_class(ResourceClass::Uram) {
                    if is_bram {
                        bram_cols += 1;
                    } else {
                        uram_cols += 1;
                    }
                    // The slice columns right after a memory column drive it and
                    // must land in the same pblock.  Clocking columns in between
                    // come along without counting.
                    let mut slice_cols = 0;
                    while slice_cols < self.cfg.paired_slice_cols {
                        let Some((_, col)) = cols.next() else {
                            break;
                        };
                        res.side_mut(side).extend(col.sites.iter().cloned());
                        if col.has_class(ResourceClass::Slice) {
                            slice_cols += 1;
                        }
                    }
                }
                if side == Side::Left
                    && bram_cols >= targets.bram_cols
                    && uram_cols >= targets.uram_cols
                {
                    clilog::debug!(
                        "row Y{}: left side full after X{} tile column {} ({} BRAM, {} URAM)",
                        row.y,
                        x,
                        idx,
                        bram_cols,
                        uram_cols
                    );
                    side = Side::Right;
                }
            }
        }
        res
    }
}

impl Partitioner for RowSplitter {
    fn partition(&self, comp: &DeviceComposition) -> PblockSet {
        let mut res = PblockSet::new();
        for slr in comp.slrs.values() {
            for (&y, row) in &slr.rows {
                let split = self.split_row(row);
                res.get_or_insert(&row_pblock_name(y, Side::Left))
                    .sites
                    .extend(split.left);
                res.get_or_insert(&row_pblock_name(y, Side::Right))
                    .sites
                    .extend(split.right);
            }
        }
        res
    }
}

/// Collects everything in front of a marker column into one pblock.
pub struct ShellCutoff {
    pub cfg: CutoffConfig,
}

impl ShellCutoff {
    pub fn new(cfg: CutoffConfig) -> ShellCutoff {
        ShellCutoff { cfg }
    }

    fn is_marker(&self, col: &TileColumn) -> bool {
        col.sites
            .iter()
            .any(|site| site.kind == self.cfg.marker_kind && site.x == self.cfg.marker_x)
    }

    /// Sites of one row strictly before the first marker column.
    pub fn row_sites(&self, row: &ClockRegionRow) -> Vec<Site> {
        let mut res = vec![];
        for col in row.regions.values().flat_map(|cr| cr.tile_cols.values()) {
            if self.is_marker(col) {
                break;
            }
            res.extend(col.sites.iter().cloned());
        }
        res
    }
}

impl Partitioner for ShellCutoff {
    fn partition(&self, comp: &DeviceComposition) -> PblockSet {
        let mut res = PblockSet::new();
        let pblock = res.get_or_insert(&self.cfg.pblock_name);
        for slr in comp.slrs.values() {
            for row in slr.rows.values() {
                pblock.sites.extend(self.row_sites(row));
            }
        }
        res
    }
}
