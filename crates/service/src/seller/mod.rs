//! Seller module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{NewSeller, Seller, SellerPatch};
pub use repository::SellerRepository;
pub use service::SellerService;
