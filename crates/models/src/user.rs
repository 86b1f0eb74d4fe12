//! Directory contact who asked to hear from the service network.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::schema::FieldSpec;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "telarea")]
    pub area_code: i64,
    #[serde(rename = "telnum")]
    pub phone_number: i64,
    pub email: String,
    #[serde(rename = "empresa")]
    pub company: Option<String>,
    #[serde(rename = "subscripcion")]
    pub subscribed: Option<bool>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_country::Relation::Country.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_country::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Resource for Entity {
    const NAME: &'static str = "user";
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::text("nombre", "first_name").required(),
        FieldSpec::text("apellido", "last_name").required(),
        FieldSpec::integer("telarea", "area_code").required(),
        FieldSpec::integer("telnum", "phone_number").required(),
        FieldSpec::text("email", "email").required().email(),
        FieldSpec::text("empresa", "company"),
        FieldSpec::boolean("subscripcion", "subscribed"),
    ];
}
