//! Reservation engine.
//!
//! The engine validates cart mutations against current stock and performs
//! checkout. It owns the catalog plus the two injected stores and is the
//! only component that mutates them. Per-sku invariant, enforced at every
//! mutation boundary: the reserved quantity never exceeds the available
//! stock.

use tracing::info;

use crate::Catalog;
use crate::model::Command;
use crate::price::Price;
use crate::store::{CartStore, MemoryStorage, StockStore, Storage};

mod state;
pub use state::{Cart, StockLevels};

mod error;
pub use error::{AddError, CheckoutError, EngineError};

/// The cart and stock reservation engine.
///
/// Every operation is synchronous and side-effect-complete on return:
/// it loads the records it needs, validates, mutates, and persists before
/// handing a result back to the caller.
pub struct Engine<S: Storage, C: Storage> {
    catalog: Catalog,
    stocks: StockStore<S>,
    cart: CartStore<C>,
}

/// Public API
impl<S: Storage, C: Storage> Engine<S, C> {
    pub fn new(catalog: Catalog, stocks: StockStore<S>, cart: CartStore<C>) -> Self {
        Self {
            catalog,
            stocks,
            cart,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current stock mapping, seeded from rarity defaults on first use.
    pub fn stock_levels(&mut self) -> Result<StockLevels, EngineError> {
        Ok(self.stocks.load(&self.catalog)?)
    }

    /// Current cart mapping; empty when nothing has been reserved.
    pub fn cart(&mut self) -> Result<Cart, EngineError> {
        Ok(self.cart.load()?)
    }

    /// Sum of unit price times reserved quantity over the cart.
    pub fn cart_total(&mut self) -> Result<Price, EngineError> {
        let cart = self.cart.load()?;
        let total = cart
            .iter()
            .filter_map(|(sku, qty)| self.catalog.get(sku).map(|p| p.price * qty))
            .sum();
        Ok(total)
    }

    /// Dispatch a presentation-layer intent to the matching operation.
    pub fn apply(&mut self, cmd: Command) -> Result<(), EngineError> {
        match &cmd {
            Command::AddToCart { sku, qty } => {
                let result = self.add_to_cart(sku, *qty);
                Self::log_result("add_to_cart", Some(sku), &result);
                result
            }
            Command::RemoveFromCart { sku } => {
                let result = self.remove_from_cart(sku);
                Self::log_result("remove_from_cart", Some(sku), &result);
                result
            }
            Command::ClearEntry { sku } => {
                let result = self.clear_entry(sku);
                Self::log_result("clear_entry", Some(sku), &result);
                result
            }
            Command::Checkout => {
                let result = self.checkout();
                Self::log_result("checkout", None, &result);
                result
            }
        }
    }

    /// Reserve `qty` units of a product:
    /// - a quantity of zero means one
    /// - the sku must exist in the catalog
    /// - the cumulative reservation must fit within available stock
    pub fn add_to_cart(&mut self, sku: &str, qty: u32) -> Result<(), EngineError> {
        let qty = qty.max(1);

        if !self.catalog.contains(sku) {
            return Err(AddError::UnknownProduct(sku.to_string()).into());
        }

        let stocks = self.stocks.load(&self.catalog)?;
        let available = stocks.available(sku);
        if available == 0 {
            return Err(AddError::OutOfStock(sku.to_string()).into());
        }

        let mut cart = self.cart.load()?;
        let reserved = cart.reserved(sku);
        if reserved + qty > available {
            return Err(AddError::InsufficientStock {
                sku: sku.to_string(),
                available,
                reserved,
                requested: qty,
            }
            .into());
        }

        cart.set(sku.to_string(), reserved + qty);
        self.cart.save(&cart)?;
        Ok(())
    }

    /// Release exactly one reserved unit. The entry is deleted when its
    /// quantity reaches zero; a sku absent from the cart is a no-op, not
    /// an error.
    pub fn remove_from_cart(&mut self, sku: &str) -> Result<(), EngineError> {
        let mut cart = self.cart.load()?;
        match cart.reserved(sku) {
            0 => {}
            1 => cart.remove(sku),
            qty => cart.set(sku.to_string(), qty - 1),
        }
        self.cart.save(&cart)?;
        Ok(())
    }

    /// Drop a product from the cart regardless of quantity.
    pub fn clear_entry(&mut self, sku: &str) -> Result<(), EngineError> {
        let mut cart = self.cart.load()?;
        cart.remove(sku);
        self.cart.save(&cart)?;
        Ok(())
    }

    /// Convert every reservation into a stock deduction and empty the cart.
    ///
    /// All-or-nothing: every entry is validated against current stock
    /// before any deduction happens, so a failure never leaves a partially
    /// deducted mapping. No order history is recorded; checkout is
    /// destructive.
    pub fn checkout(&mut self) -> Result<(), EngineError> {
        let cart = self.cart.load()?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart.into());
        }

        let mut stocks = self.stocks.load(&self.catalog)?;
        for (sku, qty) in cart.iter() {
            let available = stocks.available(sku);
            if available < qty {
                let name = self
                    .catalog
                    .get(sku)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| sku.clone());
                return Err(CheckoutError::InsufficientStock {
                    name,
                    available,
                    requested: qty,
                }
                .into());
            }
        }

        for (sku, qty) in cart.iter() {
            stocks.deduct(sku, qty);
        }

        self.stocks.save(&stocks)?;
        self.cart.clear()?;
        Ok(())
    }
}

impl Engine<MemoryStorage, MemoryStorage> {
    /// Engine over in-memory stores, for tests and ephemeral sessions.
    pub fn in_memory(catalog: Catalog) -> Self {
        Self::new(
            catalog,
            StockStore::new(MemoryStorage::new()),
            CartStore::new(MemoryStorage::new()),
        )
    }
}

/// Private API
impl<S: Storage, C: Storage> Engine<S, C> {
    /// Small helper to log operation outcomes
    fn log_result(op: &str, sku: Option<&str>, result: &Result<(), EngineError>) {
        match (result, sku) {
            (Ok(()), Some(sku)) => {
                info!(sku, "{op} applied");
            }
            (Ok(()), None) => {
                info!("{op} applied");
            }
            (Err(e), Some(sku)) => {
                info!(sku, reason = %e, "{op} rejected");
            }
            (Err(e), None) => {
                info!(reason = %e, "{op} rejected");
            }
        }
    }
}
