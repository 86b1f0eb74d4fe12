use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::schema::FieldSpec;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_type")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "productoId")]
    pub product_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "SetNull"
    )]
    Product,
    #[sea_orm(has_many = "super::gauge::Entity")]
    Gauge,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::gauge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gauge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Resource for Entity {
    const NAME: &'static str = "tipo";
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::text("nombre", "name").required(),
        FieldSpec::reference("productoId", "product_id"),
    ];
}
