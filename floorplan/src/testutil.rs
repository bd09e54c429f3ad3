use jzon::JsonValue;
use std::collections::BTreeMap;

use crate::composition::DeviceComposition;

/// Tile column contents for synthetic devices.
#[derive(Clone, Copy, Debug)]
pub enum Col {
    Slice,
    Bram,
    Uram,
    Dsp,
    Clk,
}

impl Col {
    /// Site names for a column at site X `x` in clock region row `y`.
    fn sites(self, x: u32, y: u32) -> Vec<String> {
        let y0 = y * 2;
        let y1 = y0 + 1;
        match self {
            Col::Slice => vec![format!("SLICE_X{x}Y{y0}"), format!("SLICE_X{x}Y{y1}")],
            Col::Bram => vec![
                format!("RAMB36_X{x}Y{y}"),
                format!("RAMB18_X{x}Y{y0}"),
                format!("RAMB18_X{x}Y{y1}"),
            ],
            Col::Uram => vec![format!("URAM288_X{x}Y{y}")],
            Col::Dsp => vec![format!("DSP48E2_X{x}Y{y0}"), format!("DSP48E2_X{x}Y{y1}")],
            Col::Clk => vec![format!("BUFCE_LEAF_X{x}Y{y}"), format!("TIEOFF_X{x}Y{y}")],
        }
    }
}

pub struct Region {
    pub x: u32,
    pub y: u32,
    pub cols: Vec<Col>,
}

pub fn region(x: u32, y: u32, cols: &[Col]) -> Region {
    Region {
        x,
        y,
        cols: cols.to_vec(),
    }
}

/// Builds the `composition` object for a device.  Tile column indices and site
/// X coordinates both run from 0 across each row.
pub fn device_json(slrs: &[Vec<Region>]) -> JsonValue {
    let mut slrs_json = JsonValue::new_object();
    for (i, regions) in slrs.iter().enumerate() {
        let mut sorted: Vec<&Region> = regions.iter().collect();
        sorted.sort_by_key(|r| (r.y, r.x));
        let mut next_col: BTreeMap<u32, u32> = BTreeMap::new();
        let mut crs = JsonValue::new_object();
        for r in sorted {
            let idx = next_col.entry(r.y).or_default();
            let mut tile_cols = JsonValue::new_object();
            for &col in &r.cols {
                let mut tiles = JsonValue::new_object();
                tiles[format!("T_X{idx}Y{y}", y = r.y).as_str()] = col.sites(*idx, r.y).into();
                tile_cols[idx.to_string().as_str()] = tiles;
                *idx += 1;
            }
            crs[format!("X{x}Y{y}", x = r.x, y = r.y).as_str()] = jzon::object! {
                tile_cols: tile_cols,
            };
        }
        slrs_json[format!("SLR{i}").as_str()] = jzon::object! {
            clock_regions: crs,
        };
    }
    jzon::object! {
        num_slrs: slrs.len(),
        slrs: slrs_json,
    }
}

pub fn device(slrs: &[Vec<Region>]) -> DeviceComposition {
    DeviceComposition::from_json(&device_json(slrs)).unwrap()
}
