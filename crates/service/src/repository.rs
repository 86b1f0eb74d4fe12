use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use models::resource::Resource;
use models::schema::{self, FieldKind};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, IdenStatic,
    IntoActiveModel, Iterable, ModelTrait, QueryFilter, QueryOrder, Value,
};
use serde::Serialize;
use serde_json::Value as Json;
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;

/// Outcome of a lookup by id: a record, or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    Empty,
}

impl<T> Lookup<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Lookup::Empty)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(t) => Some(t),
            Lookup::Empty => None,
        }
    }

    /// Zero-or-one element collection, the shape single-record reads are served in.
    pub fn into_vec(self) -> Vec<T> {
        self.into_option().into_iter().collect()
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(t) => Lookup::Found(t),
            None => Lookup::Empty,
        }
    }
}

#[async_trait]
pub trait ResourceRepository: Clone + Send + Sync + 'static {
    type Record: Serialize + Send + Sync + 'static;

    /// Singular wire name of the resource.
    fn name(&self) -> &'static str;
    /// Every record, oldest first.
    async fn list_all(&self) -> Result<Vec<Self::Record>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Lookup<Self::Record>, ServiceError>;
    async fn create(&self, body: &Json) -> Result<Self::Record, ServiceError>;
    /// Apply the supplied fields to an existing record.
    async fn update(&self, id: i32, body: &Json) -> Result<Self::Record, ServiceError>;
    /// Remove the record if it exists; absence is not an error.
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
    /// Records whose reference field `key` points at `id`, oldest first.
    async fn list_where(&self, key: &str, id: i32) -> Result<Vec<Self::Record>, ServiceError>;
}

/// SeaORM-backed repository for any [`Resource`] entity.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for SeaOrmRepository<E> {
    fn clone(&self) -> Self {
        Self { db: self.db.clone(), entity: PhantomData }
    }
}

impl<E: Resource> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, entity: PhantomData }
    }

    fn column(name: &str) -> Result<E::Column, ServiceError> {
        E::Column::iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| ServiceError::Db(format!("{}: no column {}", E::NAME, name)))
    }
}

#[async_trait]
impl<E> ResourceRepository for SeaOrmRepository<E>
where
    E: Resource + 'static,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Sync,
    E::ActiveModel: Send + Sync,
{
    type Record = E::Model;

    fn name(&self) -> &'static str {
        E::NAME
    }

    async fn list_all(&self) -> Result<Vec<E::Model>, ServiceError> {
        let rows = E::find().order_by_asc(Self::column("id")?).all(&self.db).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Lookup<E::Model>, ServiceError> {
        let found = E::find().filter(Self::column("id")?.eq(id)).one(&self.db).await?;
        Ok(found.into())
    }

    #[instrument(skip(self, body), fields(resource = E::NAME))]
    async fn create(&self, body: &Json) -> Result<E::Model, ServiceError> {
        let record = schema::as_record(body)?;
        let values = schema::validate(E::SCHEMA, record)?;

        let mut am = <E::ActiveModel as ActiveModelBehavior>::new();
        for (spec, value) in values {
            am.set(Self::column(spec.column)?, value);
        }
        for spec in E::SCHEMA.iter().filter(|s| !record.contains_key(s.key)) {
            if let Some(default) = spec.default {
                am.set(Self::column(spec.column)?, Value::from(default.to_owned()));
            }
        }
        let now: DateTimeWithTimeZone = Utc::now().into();
        am.set(Self::column("created_at")?, Value::from(now));
        am.set(Self::column("updated_at")?, Value::from(now));

        let saved = am.insert(&self.db).await?;
        info!(event = "create", id = ?saved.get(Self::column("id")?), "record created");
        Ok(saved)
    }

    #[instrument(skip(self, body), fields(resource = E::NAME))]
    async fn update(&self, id: i32, body: &Json) -> Result<E::Model, ServiceError> {
        let existing = E::find()
            .filter(Self::column("id")?.eq(id))
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found(E::NAME))?;
        let record = schema::as_record(body)?;

        // Constraints hold for the record as it will be stored, not just the patch.
        let mut merged = match serde_json::to_value(&existing) {
            Ok(Json::Object(m)) => m,
            Ok(_) => return Err(ServiceError::Db(format!("{} does not serialize to an object", E::NAME))),
            Err(e) => return Err(ServiceError::Db(e.to_string())),
        };
        for (k, v) in record {
            merged.insert(k.clone(), v.clone());
        }
        let values = schema::validate(E::SCHEMA, &merged)?;

        let mut am = existing.into_active_model();
        for (spec, value) in values.into_iter().filter(|(s, _)| record.contains_key(s.key)) {
            am.set(Self::column(spec.column)?, value);
        }
        let now: DateTimeWithTimeZone = Utc::now().into();
        am.set(Self::column("updated_at")?, Value::from(now));

        let saved = am.update(&self.db).await?;
        info!(event = "update", id, "record updated");
        Ok(saved)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = E::delete_many().filter(Self::column("id")?.eq(id)).exec(&self.db).await?;
        debug!(resource = E::NAME, id, rows = res.rows_affected, "delete");
        Ok(())
    }

    async fn list_where(&self, key: &str, id: i32) -> Result<Vec<E::Model>, ServiceError> {
        let spec = E::SCHEMA
            .iter()
            .find(|s| s.key == key && s.kind == FieldKind::Reference)
            .ok_or_else(|| ServiceError::Validation(format!("{} has no reference {}", E::NAME, key)))?;
        let rows = E::find()
            .filter(Self::column(spec.column)?.eq(id))
            .order_by_asc(Self::column("id")?)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::{country, service_center, user, zone};
    use serde_json::json;

    fn centro_body() -> Json {
        json!({
            "nombre": "Sucursal Centro",
            "direccion": "Calle 1",
            "cluster": "Norte",
            "pais": "El Salvador",
            "telarea": 503,
            "telnum": 22128813,
            "email": "xxx@grupoferromax.com"
        })
    }

    #[tokio::test]
    async fn create_then_find_and_list() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<country::Entity>::new(get_db().await?);
        let a = repo.create(&json!({ "nombre": "Guatemala" })).await?;
        let b = repo.create(&json!({ "nombre": "Honduras" })).await?;
        assert!(b.id > a.id);

        let found = repo.find_by_id(a.id).await?;
        assert_eq!(found.clone().into_vec().len(), 1);
        assert_eq!(found.into_option().map(|c| c.name), Some("Guatemala".to_string()));

        let names: Vec<_> = repo.list_all().await?.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Guatemala", "Honduras"]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_id_is_empty_lookup() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<country::Entity>::new(get_db().await?);
        let found = repo.find_by_id(347890).await?;
        assert!(found.is_empty());
        assert!(found.into_vec().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_missing_required_field() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<service_center::Entity>::new(get_db().await?);
        let mut body = centro_body();
        body.as_object_mut().unwrap().remove("nombre");
        let err = repo.create(&body).await.unwrap_err();
        match err {
            ServiceError::Validation(msg) => assert!(msg.contains("nombre")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(repo.list_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn create_drops_unknown_keys_and_applies_defaults() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<service_center::Entity>::new(get_db().await?);
        let mut body = centro_body();
        body["extraneous"] = json!("field");
        body["id"] = json!(9999);
        let saved = repo.create(&body).await?;
        assert_ne!(saved.id, 9999);
        assert_eq!(saved.image_url.as_deref(), Some(service_center::PLACEHOLDER_IMAGE));
        let wire = serde_json::to_value(&saved)?;
        assert!(wire.get("extraneous").is_none());
        assert_eq!(wire["telarea"], json!(503));
        Ok(())
    }

    #[tokio::test]
    async fn update_merges_and_revalidates() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<user::Entity>::new(get_db().await?);
        let u = repo
            .create(&json!({
                "nombre": "Ana", "apellido": "Lopez", "telarea": 503,
                "telnum": "77778888", "email": "ana@example.com"
            }))
            .await?;
        assert_eq!(u.phone_number, 77778888);

        let updated = repo.update(u.id, &json!({ "empresa": "Ferromax" })).await?;
        assert_eq!(updated.company.as_deref(), Some("Ferromax"));
        assert_eq!(updated.first_name, "Ana");
        assert!(updated.updated_at >= u.updated_at);
        assert_eq!(updated.created_at, u.created_at);

        let err = repo.update(u.id, &json!({ "email": "nope" })).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        let err = repo.update(u.id, &json!({ "nombre": null })).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let stored = repo.find_by_id(u.id).await?.into_option().unwrap();
        assert_eq!(stored.email, "ana@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_is_not_found() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<zone::Entity>::new(get_db().await?);
        let err = repo.update(42, &json!({ "nombre": "x" })).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let err = repo.update(42, &json!([1])).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<country::Entity>::new(get_db().await?);
        let c = repo.create(&json!({ "nombre": "Panama" })).await?;
        repo.delete(c.id).await?;
        repo.delete(c.id).await?;
        repo.delete(347890).await?;
        assert!(repo.find_by_id(c.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_where_filters_by_reference() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let countries = SeaOrmRepository::<country::Entity>::new(db.clone());
        let zones = SeaOrmRepository::<zone::Entity>::new(db);
        let sv = countries.create(&json!({ "nombre": "El Salvador" })).await?;
        let gt = countries.create(&json!({ "nombre": "Guatemala" })).await?;
        zones.create(&json!({ "nombre": "Occidente", "paisId": sv.id })).await?;
        zones.create(&json!({ "nombre": "Central", "paisId": gt.id })).await?;
        zones.create(&json!({ "nombre": "Oriente", "paisId": sv.id })).await?;

        let names: Vec<_> = zones.list_where("paisId", sv.id).await?.into_iter().map(|z| z.name).collect();
        assert_eq!(names, vec!["Occidente", "Oriente"]);
        assert!(matches!(zones.list_where("nombre", sv.id).await, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
