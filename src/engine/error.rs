//! Error types for reservation operations.

use thiserror::Error;

use crate::model::Sku;
use crate::store::StoreError;

/// Top-level error returned by the engine's operations.
///
/// Every variant is recoverable: a rejected operation leaves both stores
/// untouched and the message is suitable for surfacing to the user.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("add to cart failed: {0}")]
    Add(#[from] AddError),

    #[error("checkout failed: {0}")]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Rejection while reserving units in the cart.
#[derive(Debug, Error)]
pub enum AddError {
    #[error("unknown product '{0}'")]
    UnknownProduct(Sku),

    #[error("'{0}' is out of stock")]
    OutOfStock(Sku),

    #[error(
        "cannot reserve {requested} more of '{sku}': {reserved} already in cart, {available} in stock"
    )]
    InsufficientStock {
        sku: Sku,
        available: u32,
        reserved: u32,
        requested: u32,
    },
}

/// Rejection while converting reservations into stock deductions.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("not enough stock for {name}: {available} available, {requested} in cart")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },
}
