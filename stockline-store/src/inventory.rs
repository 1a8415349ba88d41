use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

use stockline_catalog::{Product, ProductId, ProductKind};

/// In-memory keyed product store.
///
/// Products are keyed by their id; enumeration order is ascending id and is
/// stable across mutations, which is also the order `save` persists.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    products: BTreeMap<ProductId, Product>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            products: BTreeMap::new(),
        }
    }

    /// Insert a new product. Fails if the id is already taken; the store is
    /// unchanged on failure.
    pub fn add(&mut self, product: Product) -> Result<(), InventoryError> {
        if self.products.contains_key(&product.product_id) {
            return Err(InventoryError::DuplicateKey(product.product_id));
        }
        self.products.insert(product.product_id, product);
        Ok(())
    }

    /// Delete a product; returns whether it existed
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        self.products.remove(&product_id).is_some()
    }

    /// Borrow a single product by id
    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.products.get(&product_id)
    }

    /// Case-insensitive substring match on product names; an empty needle
    /// matches everything
    pub fn search_by_name(&self, needle: &str) -> Vec<&Product> {
        let needle = needle.to_lowercase();
        self.products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// All products of one category, in store order
    pub fn search_by_type(&self, kind: ProductKind) -> Vec<&Product> {
        self.products
            .values()
            .filter(|p| p.kind() == kind)
            .collect()
    }

    /// Every product, in store order
    pub fn list_all(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sell units of a product. On success the stock is decremented and the
    /// returned message names the quantity and product; failures carry a
    /// displayable message and leave the stock untouched.
    pub fn sell(&mut self, product_id: ProductId, quantity: u32) -> Result<String, InventoryError> {
        let product = self.get_product_mut(product_id)?;

        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity);
        }
        if quantity > product.quantity_in_stock {
            return Err(InventoryError::InsufficientStock {
                requested: quantity,
                available: product.quantity_in_stock,
            });
        }

        product.sell(quantity);
        Ok(format!("Sold {} units of {}", quantity, product.name))
    }

    /// Add units to a product's stock
    pub fn restock(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<String, InventoryError> {
        let product = self.get_product_mut(product_id)?;

        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity);
        }

        product.restock(quantity);
        Ok(format!("Restocked {} units of {}", quantity, product.name))
    }

    /// Sum of `price * stock` over all products, computed on demand
    pub fn total_value(&self) -> f64 {
        self.products.values().map(|p| p.total_value()).sum()
    }

    /// Remove every expired grocery item, judged against today's date.
    /// This mutates the store; the returned names are in store order.
    pub fn remove_expired(&mut self) -> Vec<String> {
        self.remove_expired_on(Local::now().date_naive())
    }

    /// Expiry sweep against an explicit date, for deterministic callers
    pub fn remove_expired_on(&mut self, today: NaiveDate) -> Vec<String> {
        let mut removed = Vec::new();
        self.products.retain(|_, product| {
            if product.is_expired_on(today) {
                removed.push(product.name.clone());
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            tracing::info!("Removed {} expired products", removed.len());
        }
        removed
    }

    /// Point-in-time aggregates for dashboards. Expiry is judged against
    /// today's date; nothing is mutated.
    pub fn summary(&self) -> InventorySummary {
        let today = Local::now().date_naive();
        let mut summary = InventorySummary {
            product_count: self.products.len(),
            total_value: self.total_value(),
            ..InventorySummary::default()
        };
        for product in self.products.values() {
            if product.is_expired_on(today) {
                summary.expired_count += 1;
            }
            match product.kind() {
                ProductKind::Electronics => summary.electronics_count += 1,
                ProductKind::Grocery => summary.grocery_count += 1,
                ProductKind::Clothing => summary.clothing_count += 1,
            }
        }
        summary
    }

    /// Swap in a fully-decoded replacement map (load path)
    pub(crate) fn replace(&mut self, products: BTreeMap<ProductId, Product>) {
        self.products = products;
    }

    fn get_product_mut(&mut self, product_id: ProductId) -> Result<&mut Product, InventoryError> {
        self.products
            .get_mut(&product_id)
            .ok_or(InventoryError::NotFound(product_id))
    }
}

/// Aggregate counts and value across the whole store
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventorySummary {
    pub product_count: usize,
    pub total_value: f64,
    pub expired_count: usize,
    pub electronics_count: usize,
    pub grocery_count: usize,
    pub clothing_count: usize,
}

/// Store and stock operation errors
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Product with ID {0} already exists")]
    DuplicateKey(ProductId),

    #[error("Product not found")]
    NotFound(ProductId),

    #[error("Not enough stock. Available: {available}")]
    InsufficientStock { requested: u32, available: u32 },

    #[error("Quantity must be positive")]
    InvalidQuantity,
}
