//! Static shelf catalog: which item codes live on which shelf.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
};

use tracing::debug;

use crate::{
    domain::{ItemCode, ShelfId},
    errors::Error,
    Result,
};

/// Shelf layout of the depot the bot was written for, as inclusive code ranges.
const BUILTIN_LAYOUT: &[(u32, &[(u64, u64)])] = &[
    (1, &[(231, 281)]),
    (2, &[(95, 104)]),
    (3, &[(21, 30)]),
    (4, &[(31, 40), (51, 56)]),
    (5, &[(41, 50)]),
    (6, &[(57, 66)]),
    (7, &[(77, 81)]),
    (8, &[(82, 94)]),
    (9, &[(105, 120), (131, 154)]),
    (10, &[(155, 200)]),
    (11, &[(201, 210)]),
    (12, &[(211, 220)]),
    (13, &[(221, 230)]),
    (14, &[(121, 130)]),
    (15, &[(11, 20)]),
    (16, &[(1, 10)]),
    (17, &[(67, 76)]),
];

/// Immutable mapping `shelf -> codes`, plus the flattened code set.
///
/// Codes keep shelf-assignment order; membership checks go through the set.
#[derive(Clone, Debug)]
pub struct Catalog {
    shelves: BTreeMap<ShelfId, Vec<ItemCode>>,
    all: HashSet<ItemCode>,
}

impl Catalog {
    /// The built-in 17-shelf catalog.
    pub fn builtin() -> Self {
        let mut shelves = BTreeMap::new();
        let mut all = HashSet::new();
        for &(shelf, ranges) in BUILTIN_LAYOUT {
            let codes: Vec<ItemCode> = ranges
                .iter()
                .flat_map(|&(start, end)| start..=end)
                .map(ItemCode::from_number)
                .collect();
            all.extend(codes.iter().cloned());
            shelves.insert(ShelfId(shelf), codes);
        }
        Self { shelves, all }
    }

    /// Build a catalog from raw shelf data, checking its integrity.
    ///
    /// Every shelf id must be positive, every code exactly three ASCII digits,
    /// and no code may appear twice anywhere in the catalog.
    pub fn from_shelves<I, C>(shelves: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, C)>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let mut out = BTreeMap::new();
        let mut all = HashSet::new();

        for (shelf, raw_codes) in shelves {
            if shelf == 0 {
                return Err(Error::Catalog("shelf ids must be positive".to_string()));
            }
            let shelf = ShelfId(shelf);
            if out.contains_key(&shelf) {
                return Err(Error::Catalog(format!("shelf {shelf} is defined twice")));
            }

            let mut codes = Vec::new();
            for raw in raw_codes {
                let raw = raw.as_ref();
                if raw.len() != ItemCode::WIDTH {
                    return Err(Error::Catalog(format!(
                        "shelf {shelf}: code {raw:?} is not {} digits",
                        ItemCode::WIDTH
                    )));
                }
                let code = ItemCode::from_digits(raw).ok_or_else(|| {
                    Error::Catalog(format!("shelf {shelf}: code {raw:?} is not numeric"))
                })?;
                if !all.insert(code.clone()) {
                    return Err(Error::Catalog(format!(
                        "shelf {shelf}: code {code} is already assigned"
                    )));
                }
                codes.push(code);
            }
            out.insert(shelf, codes);
        }

        Ok(Self { shelves: out, all })
    }

    /// Parse a JSON object of the form `{"1": ["231", "232"], "2": ["095"]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut shelves = Vec::with_capacity(raw.len());
        for (key, codes) in raw {
            let shelf = key
                .trim()
                .parse::<u32>()
                .map_err(|_| Error::Catalog(format!("invalid shelf id {key:?}")))?;
            shelves.push((shelf, codes));
        }
        Self::from_shelves(shelves)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            shelves = catalog.shelf_count(),
            items = catalog.len(),
            "catalog file parsed"
        );
        Ok(catalog)
    }

    /// Shelves in ascending order with their codes in assignment order.
    pub fn shelves(&self) -> impl Iterator<Item = (ShelfId, &[ItemCode])> + '_ {
        self.shelves.iter().map(|(id, codes)| (*id, codes.as_slice()))
    }

    pub fn shelf(&self, id: ShelfId) -> Option<&[ItemCode]> {
        self.shelves.get(&id).map(Vec::as_slice)
    }

    pub fn contains(&self, code: &ItemCode) -> bool {
        self.all.contains(code)
    }

    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    /// Total number of codes across all shelves.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
