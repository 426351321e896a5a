//! Locality module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Locality, LocalitySellersReport, NewLocality};
pub use repository::LocalityRepository;
pub use service::LocalityService;
