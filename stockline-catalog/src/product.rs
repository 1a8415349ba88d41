use chrono::{Local, NaiveDate};
use std::fmt;

/// Caller-assigned unique identifier of a catalog entry.
pub type ProductId = u32;

/// Product categories in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Electronics,
    Grocery,
    Clothing,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Electronics => "Electronics",
            ProductKind::Grocery => "Grocery",
            ProductKind::Clothing => "Clothing",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category-specific fields, one variant per product kind
#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetail {
    Electronics { warranty_years: u32, brand: String },
    Grocery { expiry_date: NaiveDate },
    Clothing { size: String, material: String },
}

/// A single catalog entry with identity, price, and stock count
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity_in_stock: u32,
    pub detail: ProductDetail,
}

impl Product {
    pub fn electronics(
        product_id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
        warranty_years: u32,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            quantity_in_stock,
            detail: ProductDetail::Electronics {
                warranty_years,
                brand: brand.into(),
            },
        }
    }

    pub fn grocery(
        product_id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            quantity_in_stock,
            detail: ProductDetail::Grocery { expiry_date },
        }
    }

    pub fn clothing(
        product_id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            quantity_in_stock,
            detail: ProductDetail::Clothing {
                size: size.into(),
                material: material.into(),
            },
        }
    }

    /// The category tag of this product
    pub fn kind(&self) -> ProductKind {
        match self.detail {
            ProductDetail::Electronics { .. } => ProductKind::Electronics,
            ProductDetail::Grocery { .. } => ProductKind::Grocery,
            ProductDetail::Clothing { .. } => ProductKind::Clothing,
        }
    }

    /// Add stock. Applies only for a positive amount; returns whether it applied.
    pub fn restock(&mut self, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        self.quantity_in_stock += amount;
        true
    }

    /// Remove sold units. Applies only when 0 < quantity <= stock on hand.
    pub fn sell(&mut self, quantity: u32) -> bool {
        if quantity == 0 || quantity > self.quantity_in_stock {
            return false;
        }
        self.quantity_in_stock -= quantity;
        true
    }

    /// Value of the units currently on hand
    pub fn total_value(&self) -> f64 {
        self.price * self.quantity_in_stock as f64
    }

    /// True for a grocery item whose expiry date has passed (strictly before today).
    /// Always false for other categories.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Local::now().date_naive())
    }

    /// Expiry check against an explicit date, for deterministic callers
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        match self.detail {
            ProductDetail::Grocery { expiry_date } => today > expiry_date,
            _ => false,
        }
    }

    /// Human-readable one-line summary, category-specific
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            ProductDetail::Electronics {
                warranty_years,
                brand,
            } => write!(
                f,
                "Electronics: {} ({}), Rs.{}, Stock: {}, Warranty: {} yrs",
                self.name, brand, self.price, self.quantity_in_stock, warranty_years
            ),
            ProductDetail::Grocery { expiry_date } => {
                let status = if self.is_expired() { " (Expired)" } else { "" };
                write!(
                    f,
                    "Grocery: {}, Rs.{}, Stock: {}, Expiry: {}{}",
                    self.name, self.price, self.quantity_in_stock, expiry_date, status
                )
            }
            ProductDetail::Clothing { size, material } => write!(
                f,
                "Clothing: {}, Rs.{}, Stock: {}, Size: {}, Material: {}",
                self.name, self.price, self.quantity_in_stock, size, material
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Product {
        Product::electronics(1, "Phone", 500.0, 10, 2, "X")
    }

    #[test]
    fn test_sell_and_restock_round_trip() {
        let mut product = phone();

        assert!(product.sell(4));
        assert_eq!(product.quantity_in_stock, 6);

        assert!(product.restock(4));
        assert_eq!(product.quantity_in_stock, 10);
    }

    #[test]
    fn test_sell_rejects_zero_and_overdraw() {
        let mut product = phone();

        assert!(!product.sell(0));
        assert!(!product.sell(11));
        assert_eq!(product.quantity_in_stock, 10);
    }

    #[test]
    fn test_restock_rejects_zero() {
        let mut product = phone();

        assert!(!product.restock(0));
        assert_eq!(product.quantity_in_stock, 10);
    }

    #[test]
    fn test_total_value() {
        assert_eq!(phone().total_value(), 5000.0);
    }

    #[test]
    fn test_grocery_expiry() {
        let expiry = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let milk = Product::grocery(2, "Milk", 3.5, 20, expiry);

        assert!(milk.is_expired_on(NaiveDate::from_ymd_opt(2000, 1, 2).unwrap()));
        // Expiry day itself is still sellable
        assert!(!milk.is_expired_on(expiry));
        assert!(!milk.is_expired_on(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()));
    }

    #[test]
    fn test_non_grocery_never_expires() {
        let shirt = Product::clothing(3, "Shirt", 25.0, 5, "M", "Cotton");
        assert!(!shirt.is_expired_on(NaiveDate::from_ymd_opt(2999, 1, 1).unwrap()));
    }

    #[test]
    fn test_describe_per_category() {
        assert_eq!(
            phone().describe(),
            "Electronics: Phone (X), Rs.500, Stock: 10, Warranty: 2 yrs"
        );

        let shirt = Product::clothing(3, "Shirt", 25.0, 5, "M", "Cotton");
        assert_eq!(
            shirt.describe(),
            "Clothing: Shirt, Rs.25, Stock: 5, Size: M, Material: Cotton"
        );

        let expiry = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let milk = Product::grocery(2, "Milk", 3.5, 20, expiry);
        assert_eq!(
            milk.describe(),
            "Grocery: Milk, Rs.3.5, Stock: 20, Expiry: 2000-01-01 (Expired)"
        );
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(phone().kind(), ProductKind::Electronics);
        assert_eq!(ProductKind::Grocery.as_str(), "Grocery");
    }
}
