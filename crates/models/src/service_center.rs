//! Service center ("centro de servicio") listed in the directory.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::schema::FieldSpec;

/// Shown until a center uploads its own picture.
pub const PLACEHOLDER_IMAGE: &str = "../../public/images/GrupoFerromax.jpg";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_center")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub cluster: String,
    /// Display name of the country; not a reference to `country`.
    #[serde(rename = "pais")]
    pub country_name: String,
    #[serde(rename = "telarea")]
    pub area_code: i64,
    #[serde(rename = "telnum")]
    pub phone_number: i64,
    pub email: String,
    #[serde(rename = "map")]
    pub map_link: Option<String>,
    #[serde(rename = "imgUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "zonaId")]
    pub zone_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::zone::Entity",
        from = "Column::ZoneId",
        to = "super::zone::Column::Id",
        on_delete = "SetNull"
    )]
    Zone,
}

impl Related<super::zone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Zone.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Resource for Entity {
    const NAME: &'static str = "centro";
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::text("nombre", "name").required(),
        FieldSpec::text("direccion", "address").required(),
        FieldSpec::text("cluster", "cluster").required(),
        FieldSpec::text("pais", "country_name").required(),
        FieldSpec::integer("telarea", "area_code").required(),
        FieldSpec::integer("telnum", "phone_number").required(),
        FieldSpec::text("email", "email").required().email(),
        FieldSpec::text("map", "map_link"),
        FieldSpec::text("imgUrl", "image_url").default_text(PLACEHOLDER_IMAGE),
        FieldSpec::reference("zonaId", "zone_id"),
    ];
}
