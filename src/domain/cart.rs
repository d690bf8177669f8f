use super::product::Product;
use rust_decimal::Decimal;

/// A product copied into the cart together with the requested quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i32,
}

impl CartItem {
    pub fn new(product: Product, quantity: i32) -> Self {
        Self { product, quantity }
    }

    /// Unit price times quantity, or `None` on overflow.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.product.price.times(self.quantity)
    }
}

/// One line of a settled order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub quantity: i32,
    pub name: String,
    pub subtotal: Decimal,
}

/// The summary produced when a cart is settled.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total: Decimal,
}

/// Ordered, append-only list of items pending an order.
///
/// Adding the same product twice yields two separate entries; quantities are never
/// merged. The only way to remove items is [`Cart::settle`], which empties the cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every item's subtotal, or `None` if any step overflows.
    pub fn total(&self) -> Option<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |total, item| {
            total.checked_add(item.subtotal()?)
        })
    }

    /// Builds a receipt in insertion order and clears the cart. Returns `None` and
    /// keeps the cart as it was when the amounts cannot be represented.
    pub fn settle(&mut self) -> Option<Receipt> {
        let total = self.total()?;
        let lines = self
            .items
            .drain(..)
            .map(|item| ReceiptLine {
                // total() has already computed every subtotal
                subtotal: item.subtotal().unwrap_or_default(),
                quantity: item.quantity,
                name: item.product.name,
            })
            .collect();

        Some(Receipt { lines, total })
    }
}
