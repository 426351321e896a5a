use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{NewSeller, Seller, SellerPatch};
use super::repository::SellerRepository;
use crate::errors::ServiceError;
use crate::locality::repository::LocalityRepository;

/// Seller business service independent of web framework.
///
/// Holds only gateway handles; every call is a fresh round trip to the store.
pub struct SellerService<S: SellerRepository + ?Sized, L: LocalityRepository + ?Sized> {
    sellers: Arc<S>,
    localities: Arc<L>,
}

impl<S: SellerRepository + ?Sized, L: LocalityRepository + ?Sized> SellerService<S, L> {
    pub fn new(sellers: Arc<S>, localities: Arc<L>) -> Self { Self { sellers, localities } }

    pub async fn exists(&self, cid: i32) -> Result<bool, ServiceError> {
        self.sellers.exists(cid).await
    }

    pub async fn get(&self, id: i32) -> Result<Seller, ServiceError> {
        self.sellers
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(&format!("seller {id}")))
    }

    pub async fn get_all(&self) -> Result<Vec<Seller>, ServiceError> {
        self.sellers.list().await
    }

    /// Create a seller with a unique `cid` under an existing locality.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::memory::InMemoryStore;
    /// use service::locality::{LocalityService, NewLocality};
    /// use service::seller::{NewSeller, SellerService};
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let localities = LocalityService::new(store.clone());
    /// let sellers = SellerService::new(store.clone(), store);
    /// let lujan = tokio_test::block_on(localities.save(NewLocality {
    ///     zip_code: "6700".into(),
    ///     locality_name: "Lujan".into(),
    ///     province_name: "Buenos Aires".into(),
    ///     country_name: "Argentina".into(),
    /// })).unwrap();
    /// let seller = tokio_test::block_on(sellers.save(NewSeller {
    ///     cid: 1,
    ///     company_name: "Meli".into(),
    ///     address: "Bulnes 10".into(),
    ///     telephone: "123456".into(),
    ///     localities_id: lujan.id,
    /// })).unwrap();
    /// assert_eq!(seller.id, 1);
    /// ```
    #[instrument(skip(self, candidate), fields(cid = candidate.cid, localities_id = candidate.localities_id))]
    pub async fn save(&self, candidate: NewSeller) -> Result<Seller, ServiceError> {
        if self.sellers.exists(candidate.cid).await? {
            debug!("cid already taken");
            return Err(duplicate_cid(candidate.cid));
        }
        if self.localities.get(candidate.localities_id).await?.is_none() {
            return Err(ServiceError::Validation(format!(
                "locality {} does not exist",
                candidate.localities_id
            )));
        }

        let id = self.sellers.create(&candidate).await?;
        let seller = candidate.into_seller(id);
        info!(id = seller.id, cid = seller.cid, "seller_created");
        Ok(seller)
    }

    /// Merge `patch` into the stored seller `id` and persist the result.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::memory::InMemoryStore;
    /// use service::locality::{LocalityService, NewLocality};
    /// use service::seller::{NewSeller, SellerPatch, SellerService};
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let sellers = SellerService::new(store.clone(), store.clone());
    /// tokio_test::block_on(LocalityService::new(store).save(NewLocality {
    ///     zip_code: "6700".into(),
    ///     locality_name: "Lujan".into(),
    ///     province_name: "Buenos Aires".into(),
    ///     country_name: "Argentina".into(),
    /// })).unwrap();
    /// tokio_test::block_on(sellers.save(NewSeller {
    ///     cid: 1,
    ///     company_name: "Meli".into(),
    ///     address: "Bulnes 10".into(),
    ///     telephone: "123456".into(),
    ///     localities_id: 1,
    /// })).unwrap();
    /// let patch = SellerPatch { telephone: Some("654321".into()), ..Default::default() };
    /// let updated = tokio_test::block_on(sellers.update(1, patch)).unwrap();
    /// assert_eq!(updated.telephone, "654321");
    /// assert_eq!(updated.address, "Bulnes 10");
    /// ```
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: SellerPatch) -> Result<Seller, ServiceError> {
        let current = self.get(id).await?;
        if patch.is_empty() {
            debug!("patch carries no changes, skipping write");
            return Ok(current);
        }
        let previous_cid = current.cid;
        let merged = current.merge(&patch, id);

        if merged.cid != previous_cid && self.sellers.exists(merged.cid).await? {
            return Err(duplicate_cid(merged.cid));
        }
        if !self.sellers.update(&merged).await? {
            // removed between the read and the write
            return Err(ServiceError::not_found(&format!("seller {id}")));
        }
        info!(id, cid = merged.cid, "seller_updated");
        Ok(merged)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.sellers.delete(id).await? {
            return Err(ServiceError::not_found(&format!("seller {id}")));
        }
        info!(id, "seller_deleted");
        Ok(())
    }
}

fn duplicate_cid(cid: i32) -> ServiceError {
    ServiceError::Conflict(format!("seller with cid {cid} already exists"))
}
