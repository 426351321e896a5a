use async_trait::async_trait;

use super::domain::{NewSeller, Seller};
use crate::errors::ServiceError;

/// Storage gateway for sellers.
///
/// `Ok(None)` / `Ok(false)` report absence; `Err` is always a real fault or a
/// constraint the store rejected.
#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// Insert and return the store-assigned id.
    async fn create(&self, seller: &NewSeller) -> Result<i32, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Seller>, ServiceError>;
    async fn list(&self) -> Result<Vec<Seller>, ServiceError>;
    /// Persist a full record; `false` when no row has `seller.id`.
    async fn update(&self, seller: &Seller) -> Result<bool, ServiceError>;
    /// `false` when no row has `id`.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    /// Point lookup on the business identifier.
    async fn exists(&self, cid: i32) -> Result<bool, ServiceError>;
}
