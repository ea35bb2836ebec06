use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::product::errors::ProductError;
use crate::product::ports::ProductRepository;
use crate::product::ports::ProductServicePort;

/// Domain service implementation for product operations.
///
/// Concrete implementation of ProductServicePort with dependency injection.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    /// Create a new product service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Product persistence implementation
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn create_product(
        &self,
        command: CreateProductCommand,
    ) -> Result<Product, ProductError> {
        let product = Product {
            id: ProductId::new(),
            name: command.name,
            description: command.description,
            price: command.price,
            is_available: command.is_available,
            added_on: command.added_on.unwrap_or_else(|| Utc::now().date_naive()),
        };

        let created_product = self.repository.create(product).await?;

        tracing::info!(product_id = %created_product.id, "Product created");

        Ok(created_product)
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.repository.list_all().await
    }

    async fn update_product(
        &self,
        id: &ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError> {
        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id.to_string()))?;

        product.name = command.name;
        product.description = command.description;
        product.price = command.price;
        product.is_available = command.is_available;

        let updated_product = self.repository.update(product).await?;

        tracing::info!(product_id = %updated_product.id, "Product updated");

        Ok(updated_product)
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError> {
        self.repository.delete(id).await?;

        tracing::info!(product_id = %id, "Product deleted");

        Ok(())
    }

    async fn search_products(&self, name: &str) -> Result<Vec<Product>, ProductError> {
        let products = self.repository.search_by_name(name).await?;

        if products.is_empty() {
            return Err(ProductError::NoMatches(name.to_string()));
        }

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::product::models::ProductName;

    mock! {
        pub TestProductRepository {}

        #[async_trait]
        impl ProductRepository for TestProductRepository {
            async fn create(&self, product: Product) -> Result<Product, ProductError>;
            async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;
            async fn list_all(&self) -> Result<Vec<Product>, ProductError>;
            async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, ProductError>;
            async fn update(&self, product: Product) -> Result<Product, ProductError>;
            async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;
        }
    }

    fn test_product(name: &str) -> Product {
        Product {
            id: ProductId::new(),
            name: ProductName::new(name.to_string()).unwrap(),
            description: Some("A test product".to_string()),
            price: 9.99,
            is_available: true,
            added_on: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_product_defaults_added_on() {
        let mut repository = MockTestProductRepository::new();

        repository
            .expect_create()
            .withf(|product| {
                product.name.as_str() == "Espresso Machine" && !product.is_available
            })
            .times(1)
            .returning(|product| Ok(product));

        let service = ProductService::new(Arc::new(repository));

        let command = CreateProductCommand {
            name: ProductName::new("Espresso Machine".to_string()).unwrap(),
            description: None,
            price: 249.0,
            is_available: false,
            added_on: None,
        };

        let result = service.create_product(command).await;
        assert!(result.is_ok());

        let product = result.unwrap();
        assert_eq!(product.name.as_str(), "Espresso Machine");
        assert_eq!(product.added_on, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn test_list_products_empty() {
        let mut repository = MockTestProductRepository::new();

        repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(Vec::new()));

        let service = ProductService::new(Arc::new(repository));

        let result = service.list_products().await;
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_product_success() {
        let mut repository = MockTestProductRepository::new();

        let existing = test_product("Old Name");
        let product_id = existing.id;
        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == product_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(|product| {
                product.name.as_str() == "New Name"
                    && product.price == 19.99
                    && product.is_available
            })
            .times(1)
            .returning(|product| Ok(product));

        let service = ProductService::new(Arc::new(repository));

        let command = UpdateProductCommand {
            name: ProductName::new("New Name".to_string()).unwrap(),
            description: None,
            price: 19.99,
            is_available: true,
        };

        let result = service.update_product(&product_id, command).await;
        assert!(result.is_ok());

        let updated = result.unwrap();
        assert_eq!(updated.name.as_str(), "New Name");
        // The listing date never changes on update
        assert_eq!(updated.added_on, existing.added_on);
    }

    #[tokio::test]
    async fn test_update_product_not_found() {
        let mut repository = MockTestProductRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(repository));

        let command = UpdateProductCommand {
            name: ProductName::new("New Name".to_string()).unwrap(),
            description: None,
            price: 19.99,
            is_available: true,
        };

        let result = service.update_product(&ProductId::new(), command).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_product_not_found() {
        let mut repository = MockTestProductRepository::new();

        let product_id = ProductId::new();
        repository
            .expect_delete()
            .times(1)
            .returning(move |_| Err(ProductError::NotFound(product_id.to_string())));

        let service = ProductService::new(Arc::new(repository));

        let result = service.delete_product(&product_id).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_search_products_success() {
        let mut repository = MockTestProductRepository::new();

        let products = vec![test_product("Coffee Grinder"), test_product("Coffee Cup")];
        let returned = products.clone();
        repository
            .expect_search_by_name()
            .withf(|name| name == "coffee")
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let service = ProductService::new(Arc::new(repository));

        let result = service.search_products("coffee").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_products_no_matches() {
        let mut repository = MockTestProductRepository::new();

        repository
            .expect_search_by_name()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = ProductService::new(Arc::new(repository));

        let result = service.search_products("nonexistent").await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NoMatches(_)));
    }
}
