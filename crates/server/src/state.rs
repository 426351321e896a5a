use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::locality::repo::seaorm::SeaOrmLocalityRepository;
use service::locality::{LocalityRepository, LocalityService};
use service::memory::InMemoryStore;
use service::seller::repo::seaorm::SeaOrmSellerRepository;
use service::seller::{SellerRepository, SellerService};

pub type Sellers = SellerService<dyn SellerRepository, dyn LocalityRepository>;
pub type Localities = LocalityService<dyn LocalityRepository>;

/// Shared handler state; services are built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub sellers: Arc<Sellers>,
    pub localities: Arc<Localities>,
    pub token: Arc<str>,
}

impl AppState {
    pub fn new(
        sellers: Arc<dyn SellerRepository>,
        localities: Arc<dyn LocalityRepository>,
        token: &str,
    ) -> Self {
        Self {
            sellers: Arc::new(SellerService::new(sellers, localities.clone())),
            localities: Arc::new(LocalityService::new(localities)),
            token: Arc::from(token),
        }
    }

    pub fn from_db(db: DatabaseConnection, token: &str) -> Self {
        Self::new(
            Arc::new(SeaOrmSellerRepository::new(db.clone())),
            Arc::new(SeaOrmLocalityRepository::new(db)),
            token,
        )
    }

    pub fn in_memory(store: Arc<InMemoryStore>, token: &str) -> Self {
        Self::new(store.clone(), store, token)
    }
}
