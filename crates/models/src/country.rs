use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::schema::FieldSpec;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "country")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::zone::Entity")]
    Zone,
}

impl Related<super::zone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Zone.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_country::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_country::Relation::Country.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Resource for Entity {
    const NAME: &'static str = "pais";
    const SCHEMA: &'static [FieldSpec] = &[FieldSpec::text("nombre", "name").required()];
}
