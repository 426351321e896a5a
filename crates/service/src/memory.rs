//! Process-local store implementing both gateways.
//!
//! Backs doc examples and HTTP tests. Mirrors the relational constraints of
//! the SQL schema: sequential ids, unique `cid` and `zip_code`, and sellers
//! may only reference an existing locality.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::locality::domain::{Locality, NewLocality};
use crate::locality::repository::LocalityRepository;
use crate::seller::domain::{NewSeller, Seller};
use crate::seller::repository::SellerRepository;

#[derive(Default)]
struct Tables {
    sellers: BTreeMap<i32, Seller>,
    localities: BTreeMap<i32, Locality>,
    next_seller_id: i32,
    next_locality_id: i32,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    fault: Mutex<Option<String>>,
}

impl InMemoryStore {
    /// Make every following operation fail with `ServiceError::Db(message)`.
    pub fn fail_with(&self, message: &str) {
        if let Ok(mut fault) = self.fault.lock() {
            *fault = Some(message.to_string());
        }
    }

    pub fn recover(&self) {
        if let Ok(mut fault) = self.fault.lock() {
            *fault = None;
        }
    }

    pub fn create_locality(&self, l: &NewLocality) -> Result<i32, ServiceError> {
        let mut t = self.tables()?;
        if t.localities.values().any(|x| x.zip_code == l.zip_code) {
            return Err(ServiceError::Conflict(format!(
                "locality with zip_code {} already exists",
                l.zip_code
            )));
        }
        t.next_locality_id += 1;
        let id = t.next_locality_id;
        t.localities.insert(id, l.clone().into_locality(id));
        Ok(id)
    }

    pub fn create_seller(&self, s: &NewSeller) -> Result<i32, ServiceError> {
        let mut t = self.tables()?;
        if t.sellers.values().any(|x| x.cid == s.cid) {
            return Err(ServiceError::Conflict(format!("seller with cid {} already exists", s.cid)));
        }
        if !t.localities.contains_key(&s.localities_id) {
            return Err(ServiceError::Validation(format!(
                "locality {} does not exist",
                s.localities_id
            )));
        }
        t.next_seller_id += 1;
        let id = t.next_seller_id;
        t.sellers.insert(id, s.clone().into_seller(id));
        Ok(id)
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, ServiceError> {
        let fault = self.fault.lock().map_err(|e| ServiceError::Db(e.to_string()))?;
        if let Some(message) = fault.as_ref() {
            return Err(ServiceError::Db(message.clone()));
        }
        drop(fault);
        self.tables.lock().map_err(|e| ServiceError::Db(e.to_string()))
    }
}

#[async_trait]
impl SellerRepository for InMemoryStore {
    async fn create(&self, seller: &NewSeller) -> Result<i32, ServiceError> {
        self.create_seller(seller)
    }

    async fn get(&self, id: i32) -> Result<Option<Seller>, ServiceError> {
        Ok(self.tables()?.sellers.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Seller>, ServiceError> {
        Ok(self.tables()?.sellers.values().cloned().collect())
    }

    async fn update(&self, seller: &Seller) -> Result<bool, ServiceError> {
        let mut t = self.tables()?;
        if t.sellers.values().any(|x| x.cid == seller.cid && x.id != seller.id) {
            return Err(ServiceError::Conflict(format!(
                "seller with cid {} already exists",
                seller.cid
            )));
        }
        match t.sellers.get_mut(&seller.id) {
            Some(row) => {
                *row = seller.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.tables()?.sellers.remove(&id).is_some())
    }

    async fn exists(&self, cid: i32) -> Result<bool, ServiceError> {
        Ok(self.tables()?.sellers.values().any(|s| s.cid == cid))
    }
}

#[async_trait]
impl LocalityRepository for InMemoryStore {
    async fn create(&self, locality: &NewLocality) -> Result<i32, ServiceError> {
        self.create_locality(locality)
    }

    async fn get(&self, id: i32) -> Result<Option<Locality>, ServiceError> {
        Ok(self.tables()?.localities.get(&id).cloned())
    }

    async fn get_by_zip_code(&self, zip_code: &str) -> Result<Option<Locality>, ServiceError> {
        Ok(self.tables()?.localities.values().find(|l| l.zip_code == zip_code).cloned())
    }

    async fn list(&self) -> Result<Vec<Locality>, ServiceError> {
        Ok(self.tables()?.localities.values().cloned().collect())
    }

    async fn exists(&self, zip_code: &str) -> Result<bool, ServiceError> {
        Ok(self.tables()?.localities.values().any(|l| l.zip_code == zip_code))
    }

    async fn sellers(&self, locality: &Locality) -> Result<Vec<Seller>, ServiceError> {
        Ok(self
            .tables()?
            .sellers
            .values()
            .filter(|s| s.localities_id == locality.id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lujan() -> NewLocality {
        NewLocality {
            zip_code: "6700".into(),
            locality_name: "Lujan".into(),
            province_name: "Buenos Aires".into(),
            country_name: "Argentina".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let store = InMemoryStore::default();
        let lid = store.create_locality(&lujan()).unwrap();
        let s = NewSeller { cid: 1, localities_id: lid, ..Default::default() };
        assert_eq!(store.create_seller(&s).unwrap(), 1);
        assert!(SellerRepository::delete(&store, 1).await.unwrap());
        assert_eq!(store.create_seller(&NewSeller { cid: 2, ..s }).unwrap(), 2);
    }

    #[tokio::test]
    async fn update_rejects_cid_owned_by_other_row() {
        let store = InMemoryStore::default();
        store.create_locality(&lujan()).unwrap();
        let s = NewSeller { cid: 1, localities_id: 1, ..Default::default() };
        store.create_seller(&s).unwrap();
        store.create_seller(&NewSeller { cid: 2, ..s }).unwrap();

        let clash = Seller { id: 2, cid: 1, company_name: String::new(), address: String::new(), telephone: String::new(), localities_id: 1 };
        assert!(matches!(SellerRepository::update(&store, &clash).await, Err(ServiceError::Conflict(_))));
        let missing = Seller { id: 9, cid: 9, ..clash };
        assert!(!SellerRepository::update(&store, &missing).await.unwrap());
    }

    #[tokio::test]
    async fn fault_switch_applies_to_every_call() {
        let store = InMemoryStore::default();
        store.fail_with("disk full");
        assert!(matches!(store.create_locality(&lujan()), Err(ServiceError::Db(ref m)) if m == "disk full"));
        assert!(matches!(LocalityRepository::list(&store).await, Err(ServiceError::Db(_))));
        store.recover();
        assert!(LocalityRepository::list(&store).await.unwrap().is_empty());
    }
}
