//! Item class → display name lookup.
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

pub trait ItemCatalog {
    fn display_name(&self, class_name: &str) -> Option<&str>;
}

/// Display name for `class_name`, or the class name itself on a miss.
pub fn resolve_name<'a>(catalog: &'a dyn ItemCatalog, class_name: &'a str) -> &'a str {
    catalog.display_name(class_name).unwrap_or(class_name)
}

/// Catalog without entries; every item keeps its raw class name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCatalog;

impl ItemCatalog for NoCatalog {
    fn display_name(&self, _class_name: &str) -> Option<&str> {
        None
    }
}

impl ItemCatalog for HashMap<String, String> {
    fn display_name(&self, class_name: &str) -> Option<&str> {
        self.get(class_name).map(String::as_str)
    }
}

impl ItemCatalog for BTreeMap<String, String> {
    fn display_name(&self, class_name: &str) -> Option<&str> {
        self.get(class_name).map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    class: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<CatalogEntry>,
}

/// Item catalog in the ark-tools data file layout:
/// `{"items": [{"class": "PrimalItem..._C", "name": "Stone", ...}]}`.
/// Other top-level sections and extra entry fields are ignored.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalogData {
    by_class: HashMap<String, String>,
}

impl ItemCatalogData {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(s)?;
        Ok(file
            .items
            .into_iter()
            .map(|e| (e.class, e.name))
            .collect())
    }

    pub fn len(&self) -> usize {
        self.by_class.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_class.is_empty()
    }
}

impl FromIterator<(String, String)> for ItemCatalogData {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            by_class: iter.into_iter().collect(),
        }
    }
}

impl ItemCatalog for ItemCatalogData {
    fn display_name(&self, class_name: &str) -> Option<&str> {
        self.by_class.get(class_name).map(String::as_str)
    }
}
