use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    pub id: i32,
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

/// Locality candidate for creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewLocality {
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

/// Seller count for one locality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalitySellersReport {
    pub zip_code: String,
    pub locality_name: String,
    pub sellers_count: usize,
}

impl NewLocality {
    pub fn into_locality(self, id: i32) -> Locality {
        Locality {
            id,
            zip_code: self.zip_code,
            locality_name: self.locality_name,
            province_name: self.province_name,
            country_name: self.country_name,
        }
    }

    pub fn validate(&self) -> Result<(), models::errors::ModelError> {
        models::locality::validate_new(
            &self.zip_code,
            &self.locality_name,
            &self.province_name,
            &self.country_name,
        )
    }
}

impl From<models::locality::Model> for Locality {
    fn from(m: models::locality::Model) -> Self {
        Self {
            id: m.id,
            zip_code: m.zip_code,
            locality_name: m.locality_name,
            province_name: m.province_name,
            country_name: m.country_name,
        }
    }
}

impl From<Locality> for models::locality::Model {
    fn from(l: Locality) -> Self {
        Self {
            id: l.id,
            zip_code: l.zip_code,
            locality_name: l.locality_name,
            province_name: l.province_name,
            country_name: l.country_name,
        }
    }
}
