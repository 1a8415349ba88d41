use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductDetail, ProductId};

/// Flat, tagged record for one product as it appears on disk.
///
/// The field names and the `type` discriminator are the on-disk contract;
/// decoding rejects unknown tags and records missing a field their declared
/// variant requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity_in_stock: u32,
    #[serde(flatten)]
    pub detail: DetailRecord,
}

/// Variant discriminator plus the extra fields that variant requires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DetailRecord {
    Electronics { warranty_years: u32, brand: String },
    Grocery { expiry_date: NaiveDate },
    Clothing { size: String, material: String },
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        let detail = match &product.detail {
            ProductDetail::Electronics {
                warranty_years,
                brand,
            } => DetailRecord::Electronics {
                warranty_years: *warranty_years,
                brand: brand.clone(),
            },
            ProductDetail::Grocery { expiry_date } => DetailRecord::Grocery {
                expiry_date: *expiry_date,
            },
            ProductDetail::Clothing { size, material } => DetailRecord::Clothing {
                size: size.clone(),
                material: material.clone(),
            },
        };
        Self {
            product_id: product.product_id,
            name: product.name.clone(),
            price: product.price,
            quantity_in_stock: product.quantity_in_stock,
            detail,
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let detail = match record.detail {
            DetailRecord::Electronics {
                warranty_years,
                brand,
            } => ProductDetail::Electronics {
                warranty_years,
                brand,
            },
            DetailRecord::Grocery { expiry_date } => ProductDetail::Grocery { expiry_date },
            DetailRecord::Clothing { size, material } => ProductDetail::Clothing { size, material },
        };
        Self {
            product_id: record.product_id,
            name: record.name,
            price: record.price,
            quantity_in_stock: record.quantity_in_stock,
            detail,
        }
    }
}

impl Product {
    /// Snapshot this product as its persistence record
    pub fn to_record(&self) -> ProductRecord {
        ProductRecord::from(self)
    }

    /// Rebuild a product from its persistence record
    pub fn from_record(record: ProductRecord) -> Self {
        record.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_round_trip_all_variants() {
        let products = vec![
            Product::electronics(1, "Phone", 500.0, 10, 2, "X"),
            Product::grocery(2, "Milk", 3.5, 20, NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()),
            Product::clothing(3, "Shirt", 25.0, 5, "M", "Cotton"),
        ];

        for product in products {
            let rebuilt = Product::from_record(product.to_record());
            assert_eq!(rebuilt, product);
        }
    }

    #[test]
    fn test_encoded_field_names() {
        let record = Product::electronics(1, "Phone", 500.0, 10, 2, "X").to_record();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "Electronics",
                "product_id": 1,
                "name": "Phone",
                "price": 500.0,
                "quantity_in_stock": 10,
                "warranty_years": 2,
                "brand": "X",
            })
        );
    }

    #[test]
    fn test_expiry_date_encodes_as_iso_string() {
        let record = Product::grocery(2, "Milk", 3.5, 20, NaiveDate::from_ymd_opt(2030, 6, 1).unwrap())
            .to_record();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["type"], "Grocery");
        assert_eq!(value["expiry_date"], "2030-06-01");
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let result: Result<ProductRecord, _> = serde_json::from_value(json!({
            "type": "Furniture",
            "product_id": 9,
            "name": "Desk",
            "price": 80.0,
            "quantity_in_stock": 3,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_variant_field_is_rejected() {
        // Electronics without its brand
        let result: Result<ProductRecord, _> = serde_json::from_value(json!({
            "type": "Electronics",
            "product_id": 1,
            "name": "Phone",
            "price": 500.0,
            "quantity_in_stock": 10,
            "warranty_years": 2,
        }));
        assert!(result.is_err());
    }
}
