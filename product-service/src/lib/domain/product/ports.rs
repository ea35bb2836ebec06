use async_trait::async_trait;

use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::product::errors::ProductError;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a new product listing.
    ///
    /// # Arguments
    /// * `command` - Validated command with name, price, and optional fields
    ///
    /// # Returns
    /// Created product entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, command: CreateProductCommand)
        -> Result<Product, ProductError>;

    /// Retrieve all products.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Replace the details of an existing product.
    ///
    /// # Arguments
    /// * `id` - Product ID to update
    /// * `command` - Full replacement details
    ///
    /// # Returns
    /// Updated product entity
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_product(
        &self,
        id: &ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError>;

    /// Delete existing product.
    ///
    /// # Arguments
    /// * `id` - Product ID to delete
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError>;

    /// Search products by case-insensitive name fragment.
    ///
    /// # Arguments
    /// * `name` - Substring to match against product names
    ///
    /// # Returns
    /// Non-empty vector of matching products
    ///
    /// # Errors
    /// * `NoMatches` - Nothing matched the fragment
    /// * `DatabaseError` - Database operation failed
    async fn search_products(&self, name: &str) -> Result<Vec<Product>, ProductError>;
}

/// Persistence operations for product aggregate.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist new product to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, product: Product) -> Result<Product, ProductError>;

    /// Retrieve product by identifier.
    ///
    /// # Returns
    /// Optional product entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    /// Retrieve all products from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Retrieve products whose name contains the fragment, case-insensitively.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, ProductError>;

    /// Update existing product in storage.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// Remove product from storage.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;
}
