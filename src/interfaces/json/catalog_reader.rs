use crate::domain::product::Product;
use crate::error::Result;
use std::io::Read;

/// Reads catalog products from a JSON array of `{ "id", "name", "price" }` objects.
pub fn read_products<R: Read>(source: R) -> Result<Vec<Product>> {
    Ok(serde_json::from_reader(source)?)
}
