use std::fmt;
use std::str::FromStr;

use crate::site::{Site, SiteError};

/// Bounding box over all sites of one kind, written `SLICE_X0Y0:SLICE_X3Y5`.
///
/// The box is not a claim that every point inside it is a real site; gaps
/// between the contributing columns are silently spanned.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CompactedRange {
    pub kind: String,
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
}

impl CompactedRange {
    pub fn from_site(site: &Site) -> CompactedRange {
        CompactedRange {
            kind: site.kind.clone(),
            min_x: site.x,
            max_x: site.x,
            min_y: site.y,
            max_y: site.y,
        }
    }

    /// Grows the box to cover `site`, which must be of the same kind.  Callers
    /// group sites by kind first; a mismatch is only checked in debug builds.
    pub fn include(&mut self, site: &Site) {
        debug_assert_eq!(site.kind, self.kind);
        self.min_x = self.min_x.min(site.x);
        self.max_x = self.max_x.max(site.x);
        self.min_y = self.min_y.min(site.y);
        self.max_y = self.max_y.max(site.y);
    }

    pub fn lo(&self) -> Site {
        Site::new(self.kind.clone(), self.min_x, self.min_y)
    }

    pub fn hi(&self) -> Site {
        Site::new(self.kind.clone(), self.max_x, self.max_y)
    }
}

impl fmt::Display for CompactedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lo(), self.hi())
    }
}

impl FromStr for CompactedRange {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, SiteError> {
        let err = || SiteError {
            name: s.to_string(),
        };
        let (lo, hi) = s.split_once(':').ok_or_else(err)?;
        let lo: Site = lo.parse()?;
        let hi: Site = hi.parse()?;
        if lo.kind != hi.kind || lo.x > hi.x || lo.y > hi.y {
            return Err(err());
        }
        Ok(CompactedRange {
            kind: lo.kind,
            min_x: lo.x,
            max_x: hi.x,
            min_y: lo.y,
            max_y: hi.y,
        })
    }
}
