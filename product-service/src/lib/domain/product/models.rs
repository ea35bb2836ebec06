use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::product::errors::ProductIdError;
use crate::product::errors::ProductNameError;

/// Product aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
    pub added_on: NaiveDate,
}

/// Product unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub Uuid);

impl ProductId {
    /// Generate a new random product ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a product ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        Uuid::parse_str(s)
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product name value type
///
/// Ensures the name is non-empty and at most 128 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    const MAX_LENGTH: usize = 128;

    /// Create a new valid product name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 128 characters
    pub fn new(name: String) -> Result<Self, ProductNameError> {
        if name.trim().is_empty() {
            return Err(ProductNameError::Empty);
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(ProductNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.len(),
            });
        }
        Ok(Self(name))
    }

    /// Get product name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new product with domain types
#[derive(Debug)]
pub struct CreateProductCommand {
    pub name: ProductName,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
    /// Defaults to today when not supplied
    pub added_on: Option<NaiveDate>,
}

/// Command to replace an existing product's details.
///
/// Full update: every field overwrites the stored value (the listing date is
/// never touched).
#[derive(Debug)]
pub struct UpdateProductCommand {
    pub name: ProductName,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
}
