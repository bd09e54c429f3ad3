use indexmap::IndexMap;
use pblockgen_types::site::Site;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "LEFT"),
            Side::Right => write!(f, "RIGHT"),
        }
    }
}

pub fn row_pblock_name(y: u32, side: Side) -> String {
    format!("pblock_Y{y:02}_{side}")
}

/// A placement region under construction.  Sites are only ever appended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pblock {
    pub name: String,
    pub sites: Vec<Site>,
}

impl Pblock {
    pub fn new(name: impl Into<String>) -> Pblock {
        Pblock {
            name: name.into(),
            sites: vec![],
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PblockSet {
    pblocks: IndexMap<String, Pblock>,
}

impl PblockSet {
    pub fn new() -> PblockSet {
        PblockSet::default()
    }

    pub fn get(&self, name: &str) -> Option<&Pblock> {
        self.pblocks.get(name)
    }

    pub fn get_or_insert(&mut self, name: &str) -> &mut Pblock {
        self.pblocks
            .entry(name.to_string())
            .or_insert_with(|| Pblock::new(name))
    }

    pub fn len(&self) -> usize {
        self.pblocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pblocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pblock> {
        self.pblocks.values()
    }
}

#[test]
fn test_row_pblock_name() {
    assert_eq!(row_pblock_name(3, Side::Left), "pblock_Y03_LEFT");
    assert_eq!(row_pblock_name(14, Side::Right), "pblock_Y14_RIGHT");
}
