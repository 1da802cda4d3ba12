//! Persistence for the stock and cart records.
//!
//! Both records live in an origin-scoped key-value storage: JSON objects
//! mapping sku to an integer count, under the keys `stocks` and `cart`.
//! The stores own all serialization; nothing else touches the backend.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::Catalog;
use crate::engine::{Cart, StockLevels};

const STOCKS_KEY: &str = "stocks";
const CART_KEY: &str = "cart";

/// Error reading or writing a persisted record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failed for key '{key}': {source}")]
    Backend { key: String, source: io::Error },

    #[error("corrupt record under key '{key}': {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },
}

/// String key-value records, the shape of origin-scoped browser storage.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.records.remove(key);
        Ok(())
    }
}

/// Directory-backed storage: one `<key>.json` file per record.
#[derive(Debug)]
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    /// Opens (creating if needed) the storage directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| StoreError::Backend {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for DirStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Backend {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.record_path(key), value).map_err(|source| StoreError::Backend {
            key: key.to_string(),
            source,
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.record_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Backend {
                key: key.to_string(),
                source,
            }),
        }
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StoreError> {
    serde_json::from_str(raw).map_err(|source| StoreError::Corrupt {
        key: key.to_string(),
        source,
    })
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|source| StoreError::Corrupt {
        key: key.to_string(),
        source,
    })
}

/// Persistent stock record under the `stocks` key.
#[derive(Debug)]
pub struct StockStore<S: Storage> {
    storage: S,
}

impl<S: Storage> StockStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the persisted stock mapping, seeding it from the catalog's
    /// rarity defaults when no record exists yet. The seed is persisted
    /// immediately, so repeated loads without an intervening mutation
    /// return equal mappings.
    pub fn load(&mut self, catalog: &Catalog) -> Result<StockLevels, StoreError> {
        if let Some(raw) = self.storage.get(STOCKS_KEY)? {
            return decode(STOCKS_KEY, &raw);
        }

        let mut levels = StockLevels::default();
        for (sku, product) in catalog.iter() {
            levels.set(sku.clone(), product.rarity.default_stock());
        }
        self.save(&levels)?;
        Ok(levels)
    }

    /// Unconditional overwrite, last-writer-wins.
    pub fn save(&mut self, levels: &StockLevels) -> Result<(), StoreError> {
        let raw = encode(STOCKS_KEY, levels)?;
        self.storage.put(STOCKS_KEY, &raw)
    }
}

/// Persistent cart record under the `cart` key.
#[derive(Debug)]
pub struct CartStore<S: Storage> {
    storage: S,
}

impl<S: Storage> CartStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the persisted cart, or an empty one. Absence is not an error.
    pub fn load(&self) -> Result<Cart, StoreError> {
        match self.storage.get(CART_KEY)? {
            Some(raw) => decode(CART_KEY, &raw),
            None => Ok(Cart::default()),
        }
    }

    pub fn save(&mut self, cart: &Cart) -> Result<(), StoreError> {
        let raw = encode(CART_KEY, cart)?;
        self.storage.put(CART_KEY, &raw)
    }

    /// Drops the whole record, as checkout does.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.storage.remove(CART_KEY)
    }
}
