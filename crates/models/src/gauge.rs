//! Gauge ("calibre") of a product type: thickness or diameter in SI and US units.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::schema::FieldSpec;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gauge")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "espesorDiametroSi")]
    pub thickness_metric: Option<String>,
    #[serde(rename = "espesorDiametroBu")]
    pub thickness_imperial: Option<String>,
    #[serde(rename = "tipoId")]
    pub product_type_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_type::Entity",
        from = "Column::ProductTypeId",
        to = "super::product_type::Column::Id",
        on_delete = "SetNull"
    )]
    ProductType,
}

impl Related<super::product_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Resource for Entity {
    const NAME: &'static str = "calibre";
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::text("nombre", "name").required(),
        FieldSpec::text("espesorDiametroSi", "thickness_metric"),
        FieldSpec::text("espesorDiametroBu", "thickness_imperial"),
        FieldSpec::reference("tipoId", "product_type_id"),
    ];
}
