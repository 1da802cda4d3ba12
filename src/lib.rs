pub mod catalog;
pub mod engine;
pub mod model;
pub mod price;
pub mod store;

pub use catalog::Catalog;
pub use engine::Engine;
pub use model::{Command, Product, Rarity, Sku};
pub use price::Price;
pub use store::{CartStore, DirStorage, MemoryStorage, StockStore, Storage};
