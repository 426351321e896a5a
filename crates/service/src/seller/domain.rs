use serde::{Deserialize, Serialize};

/// Persisted seller (business view).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: i32,
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub localities_id: i32,
}

/// Seller candidate for creation; the id is assigned by the store.
///
/// Missing JSON fields fall back to defaults so the boundary can report them
/// as validation failures instead of parse errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSeller {
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub localities_id: i32,
}

/// Partial seller change. Absent, blank and zero values mean "keep".
///
/// `id` is accepted for wire compatibility but never applied: the identity
/// always comes from the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerPatch {
    pub id: Option<i32>,
    pub cid: Option<i32>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
}

impl NewSeller {
    pub fn into_seller(self, id: i32) -> Seller {
        Seller {
            id,
            cid: self.cid,
            company_name: self.company_name,
            address: self.address,
            telephone: self.telephone,
            localities_id: self.localities_id,
        }
    }

    pub fn validate(&self) -> Result<(), models::errors::ModelError> {
        models::seller::validate_new(
            self.cid,
            &self.company_name,
            &self.address,
            &self.telephone,
            self.localities_id,
        )
    }
}

impl SellerPatch {
    pub fn is_empty(&self) -> bool {
        self.cid.unwrap_or_default() == 0
            && provided(&self.company_name).is_none()
            && provided(&self.address).is_none()
            && provided(&self.telephone).is_none()
    }
}

impl Seller {
    /// Apply `patch` on top of the current record and pin the identity to `id`.
    pub fn merge(mut self, patch: &SellerPatch, id: i32) -> Self {
        if let Some(address) = provided(&patch.address) {
            if address != self.address {
                self.address = address.to_string();
            }
        }
        if let Some(telephone) = provided(&patch.telephone) {
            if telephone != self.telephone {
                self.telephone = telephone.to_string();
            }
        }
        if let Some(cid) = patch.cid.filter(|c| *c != 0) {
            if cid != self.cid {
                self.cid = cid;
            }
        }
        if let Some(company_name) = provided(&patch.company_name) {
            if company_name != self.company_name {
                self.company_name = company_name.to_string();
            }
        }
        self.id = id;
        self
    }
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl From<models::seller::Model> for Seller {
    fn from(m: models::seller::Model) -> Self {
        Self {
            id: m.id,
            cid: m.cid,
            company_name: m.company_name,
            address: m.address,
            telephone: m.telephone,
            localities_id: m.localities_id,
        }
    }
}
