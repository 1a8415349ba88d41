pub mod product;
pub mod record;

pub use product::{Product, ProductDetail, ProductId, ProductKind};
pub use record::{DetailRecord, ProductRecord};
