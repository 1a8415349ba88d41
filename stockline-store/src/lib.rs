pub mod inventory;
pub mod persistence;

pub use inventory::{InventoryError, InventoryStore, InventorySummary};
pub use persistence::PersistenceError;
