//! Hand-tuned per-device floorplan constants.
//!
//! These are not derived from the device description; they encode where the
//! shell of a given platform starts and how much memory each replicated region
//! should own.

use serde::Deserialize;
use simple_error::bail;
use std::error::Error;
use std::fs::read_to_string;
use std::path::Path;

/// How far a row pblock extends before it is considered full.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
pub struct RowTargets {
    /// Block RAM columns the left pblock must contain.
    pub bram_cols: u32,
    /// Ultra RAM columns the left pblock must contain.
    pub uram_cols: u32,
    /// Clock region columns past this X belong to the shell.
    pub last_region_x: u32,
}

/// Constants for devices where every clock region row is split into a left
/// and a right pblock.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Inclusive band of clock region rows that use the narrow targets.
    pub narrow_rows: (u32, u32),
    pub wide: RowTargets,
    pub narrow: RowTargets,
    /// Slice columns that stay with each memory column.
    pub paired_slice_cols: u32,
}

impl SplitConfig {
    /// Alveo U200 (xcu200).  The middle SLR (rows 5 to 9) hosts the shell in
    /// clock region columns 3 to 5.
    ///
    /// An earlier floorplan put 4 BRAM columns into the narrow left pblock
    /// instead of 3.
    pub fn u200() -> SplitConfig {
        SplitConfig {
            narrow_rows: (5, 9),
            wide: RowTargets {
                bram_cols: 6,
                uram_cols: 2,
                last_region_x: 5,
            },
            narrow: RowTargets {
                bram_cols: 3,
                uram_cols: 1,
                last_region_x: 2,
            },
            paired_slice_cols: 2,
        }
    }

    pub fn is_narrow_row(&self, y: u32) -> bool {
        (self.narrow_rows.0..=self.narrow_rows.1).contains(&y)
    }

    pub fn targets(&self, y: u32) -> &RowTargets {
        if self.is_narrow_row(y) {
            &self.narrow
        } else {
            &self.wide
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let s = read_to_string(path)?;
        let res: SplitConfig = toml::from_str(&s)?;
        res.validate()?;
        Ok(res)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.narrow_rows.0 > self.narrow_rows.1 {
            bail!(
                "narrow row band {}..{} is empty",
                self.narrow_rows.0,
                self.narrow_rows.1
            );
        }
        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig::u200()
    }
}

/// Constants for devices where a single pblock covers everything up to a
/// marker column.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct CutoffConfig {
    /// Site kind of the marker column, e.g. `DSP48E2`.
    pub marker_kind: String,
    /// Site X coordinate of the marker column.
    pub marker_x: u32,
    pub pblock_name: String,
}

impl CutoffConfig {
    /// Alveo U280 (xcu280).  `DSP48E2_X28Y*` is the last column before the
    /// shell.
    pub fn u280() -> CutoffConfig {
        CutoffConfig {
            marker_kind: "DSP48E2".into(),
            marker_x: 28,
            pblock_name: "pblock_non_shell".into(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let s = read_to_string(path)?;
        let res: CutoffConfig = toml::from_str(&s)?;
        if res.marker_kind.is_empty() || res.pblock_name.is_empty() {
            bail!("marker_kind and pblock_name must not be empty");
        }
        Ok(res)
    }
}

impl Default for CutoffConfig {
    fn default() -> Self {
        CutoffConfig::u280()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::write;

    #[test]
    fn test_u200_rows() {
        let cfg = SplitConfig::u200();
        assert!(!cfg.is_narrow_row(4));
        assert!(cfg.is_narrow_row(5));
        assert!(cfg.is_narrow_row(9));
        assert!(!cfg.is_narrow_row(10));
        assert_eq!(cfg.targets(7).bram_cols, 3);
        assert_eq!(cfg.targets(7).last_region_x, 2);
        assert_eq!(cfg.targets(12).bram_cols, 6);
        assert_eq!(cfg.targets(12).uram_cols, 2);
    }

    #[test]
    fn test_partial_override() {
        let cfg: SplitConfig = toml::from_str(
            r#"
            [narrow]
            bram_cols = 4
            uram_cols = 1
            last_region_x = 2
            "#,
        )
        .unwrap();
        assert_eq!(cfg.narrow.bram_cols, 4);
        assert_eq!(cfg.wide, SplitConfig::u200().wide);
        assert_eq!(cfg.narrow_rows, (5, 9));
        assert!(cfg.validate().is_ok());

        let cfg: SplitConfig = toml::from_str("narrow_rows = [9, 5]").unwrap();
        assert!(cfg.validate().is_err());

        let cfg: CutoffConfig = toml::from_str("marker_x = 30").unwrap();
        assert_eq!(cfg.marker_x, 30);
        assert_eq!(cfg.marker_kind, "DSP48E2");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device.toml");

        write(&path, "narrow_rows = [4, 8]\n").unwrap();
        let cfg = SplitConfig::from_file(&path).unwrap();
        assert_eq!(cfg.narrow_rows, (4, 8));
        assert_eq!(cfg.wide, SplitConfig::u200().wide);
        write(&path, "narrow_rows = [8, 4]\n").unwrap();
        assert!(SplitConfig::from_file(&path).is_err());

        write(&path, "marker_kind = \"DSP48E2\"\nmarker_x = 31\n").unwrap();
        let cfg = CutoffConfig::from_file(&path).unwrap();
        assert_eq!(cfg.marker_x, 31);
        assert_eq!(cfg.pblock_name, "pblock_non_shell");
        write(&path, "pblock_name = \"\"\n").unwrap();
        let err = CutoffConfig::from_file(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "marker_kind and pblock_name must not be empty"
        );
        write(&path, "marker_x = \"x\"\n").unwrap();
        assert!(CutoffConfig::from_file(&path).is_err());

        assert!(SplitConfig::from_file(dir.path().join("missing.toml")).is_err());
    }
}
