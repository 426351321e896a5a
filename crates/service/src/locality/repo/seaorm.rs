use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Set}, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use tracing::debug;

use models::{locality, seller};
use crate::errors::ServiceError;
use crate::locality::domain::{Locality, NewLocality};
use crate::locality::repository::LocalityRepository;
use crate::seller::domain::Seller;

pub struct SeaOrmLocalityRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmLocalityRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl LocalityRepository for SeaOrmLocalityRepository {
    async fn create(&self, l: &NewLocality) -> Result<i32, ServiceError> {
        let am = locality::ActiveModel {
            id: NotSet,
            zip_code: Set(l.zip_code.clone()),
            locality_name: Set(l.locality_name.clone()),
            province_name: Set(l.province_name.clone()),
            country_name: Set(l.country_name.clone()),
        };
        let created = am.insert(&self.db).await.map_err(|e| {
            let zip = l.zip_code.clone();
            ServiceError::from_db(e, move || format!("locality with zip_code {zip} already exists"))
        })?;
        debug!(id = created.id, zip_code = %created.zip_code, "locality row inserted");
        Ok(created.id)
    }

    async fn get(&self, id: i32) -> Result<Option<Locality>, ServiceError> {
        let found = locality::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(Locality::from))
    }

    async fn get_by_zip_code(&self, zip_code: &str) -> Result<Option<Locality>, ServiceError> {
        let found = locality::Entity::find()
            .filter(locality::Column::ZipCode.eq(zip_code))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(Locality::from))
    }

    async fn list(&self) -> Result<Vec<Locality>, ServiceError> {
        let rows = locality::Entity::find()
            .order_by_asc(locality::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Locality::from).collect())
    }

    async fn exists(&self, zip_code: &str) -> Result<bool, ServiceError> {
        let n = locality::Entity::find()
            .filter(locality::Column::ZipCode.eq(zip_code))
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(n > 0)
    }

    async fn sellers(&self, l: &Locality) -> Result<Vec<Seller>, ServiceError> {
        let model = locality::Model::from(l.clone());
        let rows = model
            .find_related(seller::Entity)
            .order_by_asc(seller::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Seller::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seller::domain::NewSeller;
    use crate::seller::repo::seaorm::SeaOrmSellerRepository;
    use crate::seller::repository::SellerRepository;
    use crate::test_support::memory_db;

    fn locality(zip: &str, name: &str) -> NewLocality {
        NewLocality {
            zip_code: zip.into(),
            locality_name: name.into(),
            province_name: "Buenos Aires".into(),
            country_name: "Argentina".into(),
        }
    }

    #[tokio::test]
    async fn locality_create_and_lookup() -> anyhow::Result<()> {
        let repo = SeaOrmLocalityRepository::new(memory_db().await?);

        let id = repo.create(&locality("6700", "Lujan")).await?;
        assert_eq!(id, 1);
        assert!(repo.exists("6700").await?);
        assert!(!repo.exists("1000").await?);

        let by_zip = repo.get_by_zip_code("6700").await?.expect("locality row");
        assert_eq!(by_zip, locality("6700", "Lujan").into_locality(1));
        assert_eq!(repo.get(1).await?, Some(by_zip));
        assert!(repo.get_by_zip_code("1000").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_zip_code_maps_to_conflict() -> anyhow::Result<()> {
        let repo = SeaOrmLocalityRepository::new(memory_db().await?);
        repo.create(&locality("6700", "Lujan")).await?;

        let err = repo.create(&locality("6700", "Otra")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref m) if m.contains("6700")), "got {err:?}");
        assert_eq!(repo.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn sellers_of_locality() -> anyhow::Result<()> {
        let db = memory_db().await?;
        let repo = SeaOrmLocalityRepository::new(db.clone());
        let sellers = SeaOrmSellerRepository::new(db);

        let lujan = repo.create(&locality("6700", "Lujan")).await?;
        let caba = repo.create(&locality("1000", "CABA")).await?;
        let empty = repo.create(&locality("5000", "Cordoba")).await?;
        for (cid, lid) in [(1, lujan), (2, caba), (3, lujan)] {
            sellers
                .create(&NewSeller {
                    cid,
                    company_name: format!("company {cid}"),
                    address: "Bulnes 10".into(),
                    telephone: "123456".into(),
                    localities_id: lid,
                })
                .await?;
        }

        let lujan = repo.get(lujan).await?.unwrap();
        let found = repo.sellers(&lujan).await?;
        let cids: Vec<i32> = found.iter().map(|s| s.cid).collect();
        assert_eq!(cids, vec![1, 3]);

        let empty = repo.get(empty).await?.unwrap();
        assert!(repo.sellers(&empty).await?.is_empty());
        Ok(())
    }
}
