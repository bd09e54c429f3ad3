use pblockgen_types::site::SiteError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FloorplanError {
    Json(jzon::Error),
    MissingKey { path: String },
    BadValue { path: String, expected: &'static str },
    BadClockRegion(String),
    NoClockRegions(String),
    BadSite(SiteError),
}

impl fmt::Display for FloorplanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorplanError::Json(e) => write!(f, "invalid device info JSON: {e}"),
            FloorplanError::MissingKey { path } => write!(f, "missing key {path}"),
            FloorplanError::BadValue { path, expected } => {
                write!(f, "{path}: expected {expected}")
            }
            FloorplanError::BadClockRegion(name) => {
                write!(f, "malformed clock region name {name:?}")
            }
            FloorplanError::NoClockRegions(slr) => write!(f, "{slr} has no clock regions"),
            FloorplanError::BadSite(e) => write!(f, "{e}"),
        }
    }
}

impl Error for FloorplanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FloorplanError::Json(e) => Some(e),
            FloorplanError::BadSite(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jzon::Error> for FloorplanError {
    fn from(e: jzon::Error) -> Self {
        FloorplanError::Json(e)
    }
}

impl From<SiteError> for FloorplanError {
    fn from(e: SiteError) -> Self {
        FloorplanError::BadSite(e)
    }
}
