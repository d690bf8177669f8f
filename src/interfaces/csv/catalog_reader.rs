use crate::domain::product::Product;
use crate::error::{Result, ShopError};
use std::io::Read;

/// Reads catalog products from a CSV source with an `id, name, price` header.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Product>`.
/// Whitespace around fields is trimmed.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    /// Creates a new `CatalogReader` from any `Read` source (e.g., File).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes products.
    pub fn products(self) -> impl Iterator<Item = Result<Product>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ShopError::from))
    }
}
