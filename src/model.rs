//! Core domain types for the cart engine.

use serde::{Deserialize, Serialize};

use crate::Price;

/// Product identifier, shared across catalog, stock and cart.
pub type Sku = String;

/// Rarity tag driving a product's initial stock count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    /// Products with no rarity tag fall back to common.
    #[default]
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
}

impl Rarity {
    /// Stock count a product of this rarity is seeded with.
    pub fn default_stock(self) -> u32 {
        match self {
            Rarity::Common => 10,
            Rarity::Uncommon => 5,
            Rarity::Rare => 2,
            Rarity::VeryRare => 1,
            Rarity::Legendary => 1,
        }
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub rarity: Rarity,
    /// Image reference, purely for the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// An intent issued by the presentation layer, representing the possible
/// inputs of the engine.
#[derive(Debug, Clone)]
pub enum Command {
    /// Reserve `qty` units of a product in the cart.
    AddToCart { sku: Sku, qty: u32 },
    /// Release a single reserved unit of a product.
    RemoveFromCart { sku: Sku },
    /// Drop a product from the cart regardless of quantity.
    ClearEntry { sku: Sku },
    /// Convert all reservations into stock deductions and empty the cart.
    Checkout,
}
