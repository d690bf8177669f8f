//! Adapters between the outside world and the session: catalog files and the
//! interactive menu.

pub mod csv;
pub mod json;
pub mod menu;

use self::csv::catalog_reader::CatalogReader;
use self::json::catalog_reader::read_products;
use crate::domain::catalog::Catalog;
use crate::error::Result;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Loads and validates a catalog file. `.json` files are read as JSON, anything
/// else as CSV.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let products = if is_json {
        read_products(file)?
    } else {
        CatalogReader::new(file)
            .products()
            .collect::<Result<Vec<_>>>()?
    };

    let count = products.len();
    let catalog = Catalog::new(products)?;
    info!(path = %path.display(), products = count, "catalog loaded");
    Ok(catalog)
}
