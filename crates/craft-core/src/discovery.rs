use crate::constants::BASE_ITEMS;

/// Every item type produced so far, newest first. Append-only.
#[derive(Clone, Debug, PartialEq)]
pub struct Discovered {
    kinds: Vec<String>,
}

impl Default for Discovered {
    fn default() -> Self {
        Self::with_base()
    }
}

impl Discovered {
    pub fn with_base() -> Self {
        Self {
            kinds: BASE_ITEMS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    /// Record `kind`; returns true when it was new and is now at the front.
    pub fn discover(&mut self, kind: &str) -> bool {
        if self.contains(kind) {
            return false;
        }
        self.kinds.insert(0, kind.to_owned());
        log::info!("[discovery] new type {} ({} known)", kind, self.kinds.len());
        true
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.iter().any(|k| k == kind)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.kinds.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(String::as_str)
    }
}
