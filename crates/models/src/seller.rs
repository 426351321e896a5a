use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, locality};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seller")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub localities_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Locality }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Locality => Entity::belongs_to(locality::Entity)
                .from(Column::LocalitiesId)
                .to(locality::Column::Id)
                .into(),
        }
    }
}

impl Related<locality::Entity> for Entity {
    fn to() -> RelationDef { Relation::Locality.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_required(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn validate_cid(cid: i32) -> Result<(), ModelError> {
    if cid == 0 {
        return Err(ModelError::Validation("cid is required".into()));
    }
    Ok(())
}

pub fn validate_localities_id(localities_id: i32) -> Result<(), ModelError> {
    if localities_id == 0 {
        return Err(ModelError::Validation("localities_id is required".into()));
    }
    Ok(())
}

/// Boundary check for a seller about to be created.
pub fn validate_new(
    cid: i32,
    company_name: &str,
    address: &str,
    telephone: &str,
    localities_id: i32,
) -> Result<(), ModelError> {
    validate_cid(cid)?;
    validate_required("address", address)?;
    validate_required("company_name", company_name)?;
    validate_required("telephone", telephone)?;
    validate_localities_id(localities_id)?;
    Ok(())
}
