use thiserror::Error;

/// Catalog shape violations. These exist only at configuration-load time;
/// a catalog that loads successfully is valid for the rest of the session.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product {id} has a negative unit price ({price})")]
    NegativePrice { id: i64, price: f64 },
    #[error("duplicate product id {id} in catalog")]
    DuplicateProductId { id: i64 },
    #[error("product {id} has a blank name")]
    BlankName { id: i64 },
}
