use regex::Regex;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static RE_SITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)_X(\d+)Y(\d+)$").unwrap());

static RE_RELEVANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(SLICE|DSP48E2|RAMB18|RAMB36|URAM288|BUF\w*|MMCM\w*|PLL\w*)$").unwrap()
});

/// A site name that does not decode as `<KIND>_X<x>Y<y>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SiteError {
    pub name: String,
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed site name {:?}", self.name)
    }
}

impl Error for SiteError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ResourceClass {
    Slice,
    Dsp,
    Bram,
    Uram,
    Clocking,
    Other,
}

impl ResourceClass {
    pub fn of_kind(kind: &str) -> ResourceClass {
        match kind {
            "SLICE" => ResourceClass::Slice,
            "DSP48E2" => ResourceClass::Dsp,
            "RAMB18" | "RAMB36" => ResourceClass::Bram,
            "URAM288" => ResourceClass::Uram,
            _ if RE_RELEVANT.is_match(kind) => ResourceClass::Clocking,
            _ => ResourceClass::Other,
        }
    }
}

/// A physical site, such as `SLICE_X12Y59` or `RAMB36_X2Y11`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Site {
    pub kind: String,
    pub x: u32,
    pub y: u32,
}

impl Site {
    pub fn new(kind: impl Into<String>, x: u32, y: u32) -> Site {
        Site {
            kind: kind.into(),
            x,
            y,
        }
    }

    pub fn class(&self) -> ResourceClass {
        ResourceClass::of_kind(&self.kind)
    }

    /// Whether the site matters for placement at all.  Routing-only and
    /// miscellaneous primitives are not.
    pub fn is_relevant(&self) -> bool {
        self.class() != ResourceClass::Other
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_X{}Y{}", self.kind, self.x, self.y)
    }
}

impl FromStr for Site {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, SiteError> {
        let err = || SiteError {
            name: s.to_string(),
        };
        let cap = RE_SITE.captures(s).ok_or_else(err)?;
        Ok(Site {
            kind: cap[1].to_string(),
            x: cap[2].parse().map_err(|_| err())?,
            y: cap[3].parse().map_err(|_| err())?,
        })
    }
}
