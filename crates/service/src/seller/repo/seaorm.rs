use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Set, Unchanged}, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use tracing::debug;

use models::seller;
use crate::errors::ServiceError;
use crate::seller::domain::{NewSeller, Seller};
use crate::seller::repository::SellerRepository;

pub struct SeaOrmSellerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmSellerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn duplicate_cid(cid: i32) -> impl FnOnce() -> String {
    move || format!("seller with cid {cid} already exists")
}

#[async_trait::async_trait]
impl SellerRepository for SeaOrmSellerRepository {
    async fn create(&self, s: &NewSeller) -> Result<i32, ServiceError> {
        let am = seller::ActiveModel {
            id: NotSet,
            cid: Set(s.cid),
            company_name: Set(s.company_name.clone()),
            address: Set(s.address.clone()),
            telephone: Set(s.telephone.clone()),
            localities_id: Set(s.localities_id),
        };
        let created = am
            .insert(&self.db)
            .await
            .map_err(|e| ServiceError::from_db(e, duplicate_cid(s.cid)))?;
        debug!(id = created.id, cid = created.cid, "seller row inserted");
        Ok(created.id)
    }

    async fn get(&self, id: i32) -> Result<Option<Seller>, ServiceError> {
        let found = seller::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(Seller::from))
    }

    async fn list(&self) -> Result<Vec<Seller>, ServiceError> {
        let rows = seller::Entity::find()
            .order_by_asc(seller::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Seller::from).collect())
    }

    async fn update(&self, s: &Seller) -> Result<bool, ServiceError> {
        let am = seller::ActiveModel {
            id: Unchanged(s.id),
            cid: Set(s.cid),
            company_name: Set(s.company_name.clone()),
            address: Set(s.address.clone()),
            telephone: Set(s.telephone.clone()),
            localities_id: Set(s.localities_id),
        };
        let res = seller::Entity::update_many()
            .set(am)
            .filter(seller::Column::Id.eq(s.id))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::from_db(e, duplicate_cid(s.cid)))?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = seller::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, cid: i32) -> Result<bool, ServiceError> {
        let n = seller::Entity::find()
            .filter(seller::Column::Cid.eq(cid))
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(n > 0)
    }
}
