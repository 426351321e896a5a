use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, seller};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locality")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Seller }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Seller => Entity::has_many(seller::Entity).into(),
        }
    }
}

impl Related<seller::Entity> for Entity {
    fn to() -> RelationDef { Relation::Seller.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Boundary check for a locality about to be created.
pub fn validate_new(
    zip_code: &str,
    locality_name: &str,
    province_name: &str,
    country_name: &str,
) -> Result<(), ModelError> {
    seller::validate_required("zip_code", zip_code)?;
    seller::validate_required("locality_name", locality_name)?;
    seller::validate_required("province_name", province_name)?;
    seller::validate_required("country_name", country_name)?;
    Ok(())
}
