//! Item catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use crawler_core::Item;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One catalog entry as written in RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemEntry {
    key: String,
    item: Item,
}

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemCatalogRon {
    items: Vec<ItemEntry>,
}

/// Item prototypes addressed by catalog key.
///
/// Templates, maps and chests refer to items by key; every reference gets
/// its own clone of the prototype.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCatalog {
    items: BTreeMap<String, Item>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `item` under `key`, replacing any previous prototype.
    pub fn insert(&mut self, key: impl Into<String>, item: Item) -> Option<Item> {
        self.items.insert(key.into(), item)
    }

    pub fn get(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Returns a fresh copy of the prototype registered under `key`.
    pub fn instantiate(&self, key: &str) -> LoadResult<Item> {
        self.get(key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Unknown item '{}'", key))
    }

    /// Instantiates every key in order.
    pub fn instantiate_all<'a, I>(&self, keys: I) -> LoadResult<Vec<Item>>
    where
        I: IntoIterator<Item = &'a String>,
    {
        keys.into_iter().map(|key| self.instantiate(key)).collect()
    }
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text. Duplicate keys are rejected.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let raw: ItemCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut catalog = ItemCatalog::new();
        for ItemEntry { key, item } in raw.items {
            if catalog.get(&key).is_some() {
                anyhow::bail!("Duplicate item key '{}' in catalog", key);
            }
            catalog.insert(key, item);
        }

        Ok(catalog)
    }
}
