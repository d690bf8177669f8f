use crate::error::ShopError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the unit price of a catalog product.
///
/// This is a wrapper around `rust_decimal::Decimal` that enforces the catalog rule
/// that prices are never negative, so every `Price` in a constructed catalog is valid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, ShopError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(ShopError::ValidationError(format!(
                "Price must not be negative, got {value}"
            )))
        }
    }

    /// Wraps a literal already known to be non-negative.
    pub(crate) const fn from_literal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units, or `None` if the product overflows `Decimal`.
    /// The quantity is taken as entered, so the result is a plain `Decimal` rather
    /// than a `Price`.
    pub fn times(&self, quantity: i32) -> Option<Decimal> {
        self.0.checked_mul(Decimal::from(quantity))
    }
}

impl TryFrom<Decimal> for Price {
    type Error = ShopError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// A purchasable item. Products are copied into the cart, never referenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: Price,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
