//! Static recipe table: an unordered pair of item types combines into one.

use fnv::FnvHashMap;

use crate::geometry::{pair_key, PairKey};

const CLASSIC: &[(&str, &str, &str)] = &[
    ("Fire", "Water", "Steam"),
    ("Fire", "Earth", "Lava"),
    ("Water", "Earth", "Mud"),
    ("Steam", "Air", "Cloud"),
    ("Earth", "Earth", "Stone"),
    ("Stone", "Fire", "Metal"),
    ("Sand", "Fire", "Glass"),
];

#[derive(Clone, Debug, Default)]
pub struct RecipeBook {
    table: FnvHashMap<PairKey, String>,
}

impl RecipeBook {
    pub fn classic() -> Self {
        Self::from_entries(CLASSIC.iter().copied())
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Self {
        let table = entries
            .into_iter()
            .map(|(a, b, out)| (pair_key(a, b), out.to_owned()))
            .collect();
        Self { table }
    }

    /// Result of combining `a` with `b`, in either order.
    pub fn combine(&self, a: &str, b: &str) -> Option<&str> {
        self.table.get(&pair_key(a, b)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.table.iter().map(|(k, v)| {
            let (a, b) = k.parts();
            (a, b, v.as_str())
        })
    }
}
