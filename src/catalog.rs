//! Static product catalog.
//!
//! The catalog is fixed configuration defined once at startup and never
//! mutated. It is the only source of product metadata (name, price, rarity,
//! image) and of the rarity defaults used to seed stock on first use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Product, Sku};

/// Read-only mapping from sku to product.
///
/// Lookups for unknown skus yield `None`; callers treat that as a non-fatal
/// no-op rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(BTreeMap<Sku, Product>);

impl Catalog {
    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.0.get(sku)
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.0.contains_key(sku)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Sku, &Product)> + '_ {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Sku, Product)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (Sku, Product)>>(iter: I) -> Self {
        Catalog(iter.into_iter().collect())
    }
}
