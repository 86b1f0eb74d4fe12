use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::schema::FieldSpec;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_type::Entity")]
    ProductType,
    #[sea_orm(has_many = "super::color::Entity")]
    Color,
}

impl Related<super::product_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductType.def()
    }
}

impl Related<super::color::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Color.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Resource for Entity {
    const NAME: &'static str = "producto";
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::text("nombre", "name").required(),
        FieldSpec::text("descripcion", "description").required(),
    ];
}
