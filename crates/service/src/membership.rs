//! Which countries a user is subscribed to, stored in the `user_country` junction.

use chrono::Utc;
use models::{country, user, user_country};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set};
use tracing::info;

use crate::errors::ServiceError;
use crate::repository::Lookup;

#[derive(Clone)]
pub struct Memberships {
    db: DatabaseConnection,
}

impl Memberships {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Countries linked to `user_id`, or `Empty` when the user does not exist.
    pub async fn countries_of(&self, user_id: i32) -> Result<Lookup<Vec<country::Model>>, ServiceError> {
        let Some(u) = user::Entity::find_by_id(user_id).one(&self.db).await? else {
            return Ok(Lookup::Empty);
        };
        let countries = u
            .find_related(country::Entity)
            .order_by_asc(country::Column::Id)
            .all(&self.db)
            .await?;
        Ok(Lookup::Found(countries))
    }

    /// Link a user to a country. Linking twice is a no-op.
    pub async fn link_country(&self, user_id: i32, country_id: i32) -> Result<(), ServiceError> {
        if user::Entity::find_by_id(user_id).one(&self.db).await?.is_none() {
            return Err(ServiceError::not_found("user"));
        }
        if country::Entity::find_by_id(country_id).one(&self.db).await?.is_none() {
            return Err(ServiceError::not_found("pais"));
        }
        if user_country::Entity::find_by_id((user_id, country_id)).one(&self.db).await?.is_some() {
            return Ok(());
        }
        user_country::ActiveModel {
            user_id: Set(user_id),
            country_id: Set(country_id),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await?;
        info!(event = "link", user_id, country_id, "user linked to country");
        Ok(())
    }

    pub async fn unlink_country(&self, user_id: i32, country_id: i32) -> Result<(), ServiceError> {
        let res = user_country::Entity::delete_by_id((user_id, country_id)).exec(&self.db).await?;
        if res.rows_affected > 0 {
            info!(event = "unlink", user_id, country_id, "user unlinked from country");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{ResourceRepository, SeaOrmRepository};
    use crate::test_support::get_db;
    use serde_json::json;

    #[tokio::test]
    async fn link_list_unlink() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let users = SeaOrmRepository::<user::Entity>::new(db.clone());
        let countries = SeaOrmRepository::<country::Entity>::new(db.clone());
        let m = Memberships::new(db);

        let u = users
            .create(&json!({
                "nombre": "Luis", "apellido": "Perez", "telarea": 502,
                "telnum": 55554444, "email": "luis@example.com"
            }))
            .await?;
        let gt = countries.create(&json!({ "nombre": "Guatemala" })).await?;
        let sv = countries.create(&json!({ "nombre": "El Salvador" })).await?;

        m.link_country(u.id, sv.id).await?;
        m.link_country(u.id, gt.id).await?;
        m.link_country(u.id, gt.id).await?;

        let linked = m.countries_of(u.id).await?.into_option().unwrap();
        let names: Vec<_> = linked.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Guatemala", "El Salvador"]);

        m.unlink_country(u.id, gt.id).await?;
        m.unlink_country(u.id, gt.id).await?;
        assert_eq!(m.countries_of(u.id).await?.into_option().unwrap().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_sides_are_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let m = Memberships::new(db.clone());
        assert!(m.countries_of(7).await?.is_empty());
        assert!(matches!(m.link_country(7, 1).await, Err(ServiceError::NotFound(_))));

        let countries = SeaOrmRepository::<country::Entity>::new(db);
        let c = countries.create(&json!({ "nombre": "Belice" })).await?;
        assert!(matches!(m.link_country(7, c.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
