use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Locality, LocalitySellersReport, NewLocality};
use super::repository::LocalityRepository;
use crate::errors::ServiceError;
use crate::seller::domain::Seller;

/// Application service encapsulating locality business rules.
pub struct LocalityService<R: LocalityRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: LocalityRepository + ?Sized> LocalityService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a locality whose `zip_code` is not yet registered.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::errors::ServiceError;
    /// use service::memory::InMemoryStore;
    /// use service::locality::{LocalityService, NewLocality};
    ///
    /// let svc = LocalityService::new(Arc::new(InMemoryStore::default()));
    /// let lujan = NewLocality {
    ///     zip_code: "6700".into(),
    ///     locality_name: "Lujan".into(),
    ///     province_name: "Buenos Aires".into(),
    ///     country_name: "Argentina".into(),
    /// };
    /// let saved = tokio_test::block_on(svc.save(lujan.clone())).unwrap();
    /// assert_eq!(saved.id, 1);
    /// let again = tokio_test::block_on(svc.save(lujan));
    /// assert!(matches!(again, Err(ServiceError::Conflict(_))));
    /// ```
    #[instrument(skip(self, candidate), fields(zip_code = %candidate.zip_code))]
    pub async fn save(&self, candidate: NewLocality) -> Result<Locality, ServiceError> {
        if self.repo.exists(&candidate.zip_code).await? {
            debug!("zip_code already registered");
            return Err(ServiceError::Conflict(format!(
                "locality with zip_code {} already exists",
                candidate.zip_code
            )));
        }
        let id = self.repo.create(&candidate).await?;
        let locality = candidate.into_locality(id);
        info!(id = locality.id, zip_code = %locality.zip_code, "locality_created");
        Ok(locality)
    }

    pub async fn exists(&self, zip_code: &str) -> Result<bool, ServiceError> {
        self.repo.exists(zip_code).await
    }

    pub async fn get_by_zip_code(&self, zip_code: &str) -> Result<Locality, ServiceError> {
        self.repo
            .get_by_zip_code(zip_code)
            .await?
            .ok_or_else(|| ServiceError::not_found(&format!("locality with zip_code {zip_code}")))
    }

    pub async fn get_all(&self) -> Result<Vec<Locality>, ServiceError> {
        self.repo.list().await
    }

    /// Every seller registered under `locality`, which must carry its store id.
    pub async fn get_sellers(&self, locality: &Locality) -> Result<Vec<Seller>, ServiceError> {
        self.repo.sellers(locality).await
    }

    /// Resolve `zip_code` and count the sellers registered under it.
    #[instrument(skip(self))]
    pub async fn report_sellers(&self, zip_code: &str) -> Result<LocalitySellersReport, ServiceError> {
        let locality = self.get_by_zip_code(zip_code).await?;
        let sellers = self.get_sellers(&locality).await?;
        Ok(LocalitySellersReport {
            zip_code: locality.zip_code,
            locality_name: locality.locality_name,
            sellers_count: sellers.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::memory::InMemoryStore;
    use crate::seller::domain::NewSeller;

    fn lujan() -> NewLocality {
        NewLocality {
            zip_code: "6700".into(),
            locality_name: "Lujan".into(),
            province_name: "Buenos Aires".into(),
            country_name: "Argentina".into(),
        }
    }

    fn seller(cid: i32, localities_id: i32) -> NewSeller {
        NewSeller {
            cid,
            company_name: format!("company {cid}"),
            address: "Bulnes 10".into(),
            telephone: "123456".into(),
            localities_id,
        }
    }

    fn service() -> (Arc<InMemoryStore>, LocalityService<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::default());
        (store.clone(), LocalityService::new(store))
    }

    #[tokio::test]
    async fn save_on_empty_store_assigns_first_id() {
        let (_, svc) = service();
        let saved = svc.save(lujan()).await.unwrap();
        assert_eq!(saved.id, 1);
        assert_eq!(saved.zip_code, "6700");
        assert!(svc.exists("6700").await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_zip_code_is_conflict_and_id_stays_unused() {
        let (_, svc) = service();
        svc.save(lujan()).await.unwrap();

        let err = svc.save(lujan()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let next = svc.save(NewLocality { zip_code: "1000".into(), ..lujan() }).await.unwrap();
        assert_eq!(next.id, 2);
        assert_eq!(svc.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_by_zip_code_found_and_missing() {
        let (_, svc) = service();
        let saved = svc.save(lujan()).await.unwrap();

        assert_eq!(svc.get_by_zip_code("6700").await.unwrap(), saved);
        assert!(matches!(svc.get_by_zip_code("9999").await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_sellers_returns_exactly_matching_sellers() {
        let (store, svc) = service();
        let l1 = svc.save(lujan()).await.unwrap();
        let l2 = svc.save(NewLocality { zip_code: "1000".into(), ..lujan() }).await.unwrap();
        for (cid, lid) in [(1, l1.id), (2, l2.id), (3, l1.id), (4, l1.id)] {
            store.create_seller(&seller(cid, lid)).unwrap();
        }

        let cids: BTreeSet<i32> = svc.get_sellers(&l1).await.unwrap().into_iter().map(|s| s.cid).collect();
        assert_eq!(cids, BTreeSet::from([1, 3, 4]));
        assert!(svc.get_sellers(&l2).await.unwrap().iter().all(|s| s.localities_id == l2.id));
    }

    #[tokio::test]
    async fn get_sellers_without_matches_is_empty() {
        let (_, svc) = service();
        let l = svc.save(lujan()).await.unwrap();
        assert!(svc.get_sellers(&l).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn report_counts_sellers() {
        let (store, svc) = service();
        let l = svc.save(lujan()).await.unwrap();
        store.create_seller(&seller(1, l.id)).unwrap();
        store.create_seller(&seller(2, l.id)).unwrap();

        let report = svc.report_sellers("6700").await.unwrap();
        assert_eq!(
            report,
            LocalitySellersReport { zip_code: "6700".into(), locality_name: "Lujan".into(), sellers_count: 2 }
        );
        assert!(matches!(svc.report_sellers("1000").await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn faults_are_not_reported_as_absence() {
        let (store, svc) = service();
        store.fail_with("timeout");
        assert!(matches!(svc.exists("6700").await, Err(ServiceError::Db(_))));
        assert!(matches!(svc.save(lujan()).await, Err(ServiceError::Db(_))));
    }
}
