use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use shared::{
    domain::{PaymentMethod, Product, ProductId},
    error::CatalogError,
};

/// Static, ordered list of offerable products. Validated once at load time
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from an ordered product list, enforcing the
    /// load-time shape rules: unique ids, non-blank names, non-negative
    /// unit prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId { id: product.id.0 });
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::BlankName { id: product.id.0 });
            }
            if product.unit_price < 0.0 {
                return Err(CatalogError::NegativePrice {
                    id: product.id.0,
                    price: product.unit_price,
                });
            }
        }
        Ok(Self { products })
    }

    /// The fixed default product set.
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product {
                    id: ProductId(1),
                    name: "Extra Gold".into(),
                    unit_price: 199.99,
                    description: "Get 1000 extra gold pieces".into(),
                },
                Product {
                    id: ProductId(2),
                    name: "Speed Boost".into(),
                    unit_price: 299.99,
                    description: "50% faster construction for 24 hours".into(),
                },
                Product {
                    id: ProductId(3),
                    name: "Rare Weapon".into(),
                    unit_price: 499.99,
                    description: "Unlock a powerful rare weapon".into(),
                },
            ],
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(raw).context("failed to parse catalog file")?;
        let products = file
            .products
            .into_iter()
            .map(ProductRecord::into_product)
            .collect();
        Ok(Self::new(products)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file '{}'", path.display()))?;
        Self::from_toml_str(&raw)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products in configuration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: i64,
    name: String,
    unit_price: f64,
    #[serde(default)]
    description: String,
}

impl ProductRecord {
    fn into_product(self) -> Product {
        Product {
            id: ProductId(self.id),
            name: self.name,
            unit_price: self.unit_price,
            description: self.description,
        }
    }
}

/// The fixed payment-method enumeration, in display order.
pub fn builtin_payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: "vodafone".into(),
            display_name: "Vodafone Cash".into(),
        },
        PaymentMethod {
            id: "orange".into(),
            display_name: "Orange Cash".into(),
        },
    ]
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
