use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Sku;

/// Remaining purchasable units per product.
///
/// Absent skus read as zero at the accessor boundary; counts never go
/// negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLevels(BTreeMap<Sku, u32>);

impl StockLevels {
    pub fn available(&self, sku: &str) -> u32 {
        self.0.get(sku).copied().unwrap_or(0)
    }

    pub fn set(&mut self, sku: impl Into<Sku>, count: u32) {
        self.0.insert(sku.into(), count);
    }

    /// Removes units, clamping at zero.
    pub fn deduct(&mut self, sku: &str, qty: u32) {
        let remaining = self.available(sku).saturating_sub(qty);
        self.0.insert(sku.to_string(), remaining);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Sku, u32)> + '_ {
        self.0.iter().map(|(sku, count)| (sku, *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reserved, not-yet-purchased quantities per product.
///
/// An entry is present iff its quantity is at least 1; absent skus read as
/// zero reserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(BTreeMap<Sku, u32>);

impl Cart {
    pub fn reserved(&self, sku: &str) -> u32 {
        self.0.get(sku).copied().unwrap_or(0)
    }

    pub fn set(&mut self, sku: impl Into<Sku>, qty: u32) {
        self.0.insert(sku.into(), qty);
    }

    pub fn remove(&mut self, sku: &str) {
        self.0.remove(sku);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Sku, u32)> + '_ {
        self.0.iter().map(|(sku, qty)| (sku, *qty))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
