use super::product::{Price, Product};
use crate::error::{Result, ShopError};
use rust_decimal_macros::dec;
use std::collections::HashSet;

/// The fixed, ordered list of products available for a session.
///
/// A `Catalog` can only be built through [`Catalog::new`], which checks that it is
/// non-empty, that ids are unique and that every product has a name. Once built it
/// is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        if products.is_empty() {
            return Err(ShopError::ValidationError(
                "Catalog must contain at least one product".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(ShopError::ValidationError(format!(
                    "Product {} has an empty name",
                    product.id
                )));
            }
            if !seen.insert(product.id) {
                return Err(ShopError::ValidationError(format!(
                    "Duplicate product id {}",
                    product.id
                )));
            }
        }

        Ok(Self { products })
    }

    /// Iterates products in catalog order. Each call starts from the first product.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Linear lookup by id, returning the first match.
    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

}

impl Default for Catalog {
    /// The built-in demo catalog.
    fn default() -> Self {
        Self {
            products: vec![
                Product::new(1, "Apple", Price::from_literal(dec!(0.5))),
                Product::new(2, "Banana", Price::from_literal(dec!(0.3))),
                Product::new(3, "Orange", Price::from_literal(dec!(0.7))),
            ],
        }
    }
}
