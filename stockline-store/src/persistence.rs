use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use stockline_catalog::{Product, ProductRecord};

use crate::inventory::InventoryStore;

/// File save/load errors
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("File {0} does not exist")]
    NotFound(String),

    #[error("Invalid inventory file: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryStore {
    /// Write the whole store to `path` as a pretty-printed JSON array of
    /// tagged records, in store order.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let records: Vec<ProductRecord> =
            self.list_all().into_iter().map(|p| p.to_record()).collect();
        let body = serde_json::to_string_pretty(&records)
            .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;
        fs::write(path, body)?;
        tracing::info!("Saved {} products to {}", records.len(), path.display());
        Ok(())
    }

    /// Replace the store's contents with the records in `path`.
    ///
    /// The file is decoded in full before anything is swapped in, so prior
    /// contents survive a missing file, malformed JSON, an unrecognized
    /// variant tag, or a record missing a required field. When the file
    /// repeats a product id the last record wins. Returns the number of
    /// products loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PersistenceError::NotFound(path.display().to_string()));
        }

        let body = fs::read_to_string(path)?;
        let records: Vec<ProductRecord> = serde_json::from_str(&body)
            .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

        let mut products = BTreeMap::new();
        for record in records {
            let product = Product::from_record(record);
            products.insert(product.product_id, product);
        }

        let count = products.len();
        self.replace(products);
        tracing::info!("Loaded {} products from {}", count, path.display());
        Ok(count)
    }
}
