//! Service layer enforcing seller and locality consistency on top of models.
//! - Uniqueness of business keys (`cid`, `zip_code`) before and during insert.
//! - Merge-on-update for partial seller changes.
//! - Seller aggregation per locality.

pub mod errors;
pub mod seller;
pub mod locality;
pub mod memory;
#[cfg(test)]
pub mod test_support;
