use indexmap::IndexMap;
use jzon::JsonValue;
use jzon::object::Object;
use pblockgen_types::site::{ResourceClass, Site};
use regex::Regex;
use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;
use std::sync::LazyLock;
use unnamed_entity::{EntityVec, entity_id};

use crate::error::FloorplanError;

entity_id! {
    pub id SlrId u16;
}

static RE_CLOCK_REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^X(\d+)Y(\d+)$").unwrap());

/// One column of tiles inside a clock region, in physical order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TileColumn {
    pub sites: Vec<Site>,
}

impl TileColumn {
    pub fn has_class(&self, class: ResourceClass) -> bool {
        self.sites.iter().any(|site| site.class() == class)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClockRegion {
    pub x: u32,
    pub y: u32,
    /// Keyed by tile column index, in the order the device description lists them.
    pub tile_cols: IndexMap<u32, TileColumn>,
}

impl ClockRegion {
    pub fn tile_col(&self, idx: u32) -> Option<&TileColumn> {
        self.tile_cols.get(&idx)
    }

    pub fn tile_col_mut(&mut self, idx: u32) -> &mut TileColumn {
        self.tile_cols.entry(idx).or_default()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClockRegionRow {
    pub y: u32,
    pub regions: BTreeMap<u32, ClockRegion>,
}

impl ClockRegionRow {
    pub fn region(&self, x: u32) -> Option<&ClockRegion> {
        self.regions.get(&x)
    }

    pub fn region_mut(&mut self, x: u32) -> &mut ClockRegion {
        let y = self.y;
        self.regions.entry(x).or_insert_with(|| ClockRegion {
            x,
            y,
            tile_cols: IndexMap::new(),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegionBounds {
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
}

impl RegionBounds {
    pub fn from_names<'a>(
        slr: &str,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<RegionBounds, FloorplanError> {
        let mut res: Option<RegionBounds> = None;
        for name in names {
            let (x, y) = parse_clock_region(name)?;
            res = Some(match res {
                None => RegionBounds {
                    min_x: x,
                    max_x: x,
                    min_y: y,
                    max_y: y,
                },
                Some(b) => RegionBounds {
                    min_x: b.min_x.min(x),
                    max_x: b.max_x.max(x),
                    min_y: b.min_y.min(y),
                    max_y: b.max_y.max(y),
                },
            });
        }
        res.ok_or_else(|| FloorplanError::NoClockRegions(slr.to_string()))
    }
}

/// A super logic region (die).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Slr {
    pub name: String,
    pub bounds: RegionBounds,
    pub rows: BTreeMap<u32, ClockRegionRow>,
}

impl Slr {
    pub fn row(&self, y: u32) -> Option<&ClockRegionRow> {
        self.rows.get(&y)
    }

    pub fn row_mut(&mut self, y: u32) -> &mut ClockRegionRow {
        self.rows.entry(y).or_insert_with(|| ClockRegionRow {
            y,
            regions: BTreeMap::new(),
        })
    }
}

#[derive(Clone, Debug)]
pub struct DeviceComposition {
    pub slrs: EntityVec<SlrId, Slr>,
}

pub fn parse_clock_region(name: &str) -> Result<(u32, u32), FloorplanError> {
    let err = || FloorplanError::BadClockRegion(name.to_string());
    let cap = RE_CLOCK_REGION.captures(name).ok_or_else(err)?;
    Ok((
        cap[1].parse().map_err(|_| err())?,
        cap[2].parse().map_err(|_| err())?,
    ))
}

fn as_object<'a>(val: &'a JsonValue, path: &str) -> Result<&'a Object, FloorplanError> {
    match val {
        JsonValue::Object(obj) => Ok(obj),
        _ => Err(FloorplanError::BadValue {
            path: path.to_string(),
            expected: "an object",
        }),
    }
}

fn field<'a>(obj: &'a Object, key: &str, path: &str) -> Result<&'a JsonValue, FloorplanError> {
    obj.get(key).ok_or_else(|| FloorplanError::MissingKey {
        path: format!("{path}.{key}"),
    })
}

/// Reads a device info file and returns its `composition` object.
pub fn read_device_info<P: AsRef<Path>>(
    path: P,
) -> Result<JsonValue, Box<dyn std::error::Error>> {
    let s = read_to_string(path)?;
    let mut info = jzon::parse(&s).map_err(FloorplanError::from)?;
    as_object(&info, "")?;
    if !info.has_key("composition") {
        return Err(FloorplanError::MissingKey {
            path: ".composition".into(),
        }
        .into());
    }
    Ok(info["composition"].take())
}

impl DeviceComposition {
    pub fn num_slrs(&self) -> usize {
        self.slrs.len()
    }

    /// Builds the composition from the `composition` object of a device info
    /// file, keeping only placement-relevant sites.
    pub fn from_json(composition: &JsonValue) -> Result<DeviceComposition, FloorplanError> {
        let composition = as_object(composition, "composition")?;
        let num_slrs = field(composition, "num_slrs", "composition")?
            .as_usize()
            .ok_or_else(|| FloorplanError::BadValue {
                path: "composition.num_slrs".into(),
                expected: "a non-negative integer",
            })?;
        let slrs = as_object(
            field(composition, "slrs", "composition")?,
            "composition.slrs",
        )?;
        let mut res = DeviceComposition {
            slrs: EntityVec::new(),
        };
        for idx in 0..num_slrs {
            let name = format!("SLR{idx}");
            let path = format!("composition.slrs.{name}");
            let slr_data = as_object(field(slrs, &name, "composition.slrs")?, &path)?;
            let crs_path = format!("{path}.clock_regions");
            let crs = as_object(field(slr_data, "clock_regions", &path)?, &crs_path)?;
            let bounds = RegionBounds::from_names(&name, crs.iter().map(|(k, _)| k))?;
            let mut slr = Slr {
                name,
                bounds,
                rows: BTreeMap::new(),
            };
            for y in bounds.min_y..=bounds.max_y {
                for x in bounds.min_x..=bounds.max_x {
                    let cr_name = format!("X{x}Y{y}");
                    let cr_path = format!("{crs_path}.{cr_name}");
                    let cr_data = as_object(field(crs, &cr_name, &crs_path)?, &cr_path)?;
                    let tc_path = format!("{cr_path}.tile_cols");
                    let tile_cols = as_object(field(cr_data, "tile_cols", &cr_path)?, &tc_path)?;
                    let region = slr.row_mut(y).region_mut(x);
                    for (idx, tiles) in tile_cols.iter() {
                        let col_path = format!("{tc_path}.{idx}");
                        let col_idx: u32 = idx.parse().map_err(|_| FloorplanError::BadValue {
                            path: col_path.clone(),
                            expected: "an integer tile column key",
                        })?;
                        let col = region.tile_col_mut(col_idx);
                        for (tile, sites) in as_object(tiles, &col_path)?.iter() {
                            let site_path = format!("{col_path}.{tile}");
                            if !sites.is_array() {
                                return Err(FloorplanError::BadValue {
                                    path: site_path,
                                    expected: "an array of site names",
                                });
                            }
                            for site in sites.members() {
                                let site = site.as_str().ok_or_else(|| {
                                    FloorplanError::BadValue {
                                        path: site_path.clone(),
                                        expected: "an array of site names",
                                    }
                                })?;
                                // Anything that does not even look like a site is
                                // outside the whitelist too.
                                match site.parse::<Site>() {
                                    Ok(site) if site.is_relevant() => col.sites.push(site),
                                    _ => (),
                                }
                            }
                        }
                    }
                }
            }
            clilog::debug!(
                "{}: clock regions X{}Y{}..X{}Y{}",
                slr.name,
                bounds.min_x,
                bounds.min_y,
                bounds.max_x,
                bounds.max_y
            );
            res.slrs.push(slr);
        }
        Ok(res)
    }

    /// All loaded sites, in traversal order.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.slrs
            .values()
            .flat_map(|slr| slr.rows.values())
            .flat_map(|row| row.regions.values())
            .flat_map(|cr| cr.tile_cols.values())
            .flat_map(|col| col.sites.iter())
    }
}
