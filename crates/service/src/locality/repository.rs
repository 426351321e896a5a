use async_trait::async_trait;

use super::domain::{Locality, NewLocality};
use crate::errors::ServiceError;
use crate::seller::domain::Seller;

/// Storage gateway for localities and the locality → sellers read path.
#[async_trait]
pub trait LocalityRepository: Send + Sync {
    /// Insert and return the store-assigned id.
    async fn create(&self, locality: &NewLocality) -> Result<i32, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Locality>, ServiceError>;
    async fn get_by_zip_code(&self, zip_code: &str) -> Result<Option<Locality>, ServiceError>;
    async fn list(&self) -> Result<Vec<Locality>, ServiceError>;
    async fn exists(&self, zip_code: &str) -> Result<bool, ServiceError>;
    /// Sellers whose `localities_id` is `locality.id`.
    async fn sellers(&self, locality: &Locality) -> Result<Vec<Seller>, ServiceError>;
}
